//! Small parsing helpers built on top of [`ByteIterator`](super::iterator::ByteIterator).
//!
//! These functions implement the subset of JSON parsing the geobin encoder needs:
//! - `parse_tag` for matching fixed ASCII tags
//! - `parse_quoted_json_string` for JSON string literals with escapes
//! - `parse_number_as_string` and `parse_number_as<T>` for JSON number syntax
//! - `parse_object_entries` and `parse_array_entries` to iterate over object/array contents
//! - `parse_raw_value` to skip any JSON value and capture its raw text
//!
//! Parsing functions consume only as much as needed and leave the iterator positioned at the
//! next token (e.g., after a closing `]` or `}`).

use super::iterator::ByteIterator;
use anyhow::{Context, Error, Result, bail};
use std::str::FromStr;

/// Match a fixed ASCII tag at the current iterator position.
///
/// # Errors
/// Returns an error if the upcoming bytes do not exactly match `tag`.
///
/// # Example
/// ```
/// # use geobin_core::byte_iterator::{ByteIterator, parse_tag};
/// let mut it = ByteIterator::from_str("null", true);
/// parse_tag(&mut it, "null").unwrap();
/// ```
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for c in tag.bytes() {
		if iter.expect_next_byte()? != c {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

/// Parse a JSON quoted string literal and return it as `String`.
///
/// Supports the standard JSON escapes and `\uXXXX` escapes, including surrogate pairs.
/// Leaves the iterator positioned **after** the closing quote.
///
/// # Errors
/// - Missing opening or closing quotes
/// - Invalid escape sequence or malformed `\uXXXX` hex
///
/// # Example
/// ```
/// # use geobin_core::byte_iterator::{ByteIterator, parse_quoted_json_string};
/// let mut it = ByteIterator::from_str("\"he\\nllo\"", true);
/// assert_eq!(parse_quoted_json_string(&mut it).unwrap(), "he\nllo");
/// ```
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	quoted_json_string(iter).context("while parsing a quoted JSON string")
}

fn quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);

	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut units = vec![parse_hex4(iter)?];
					if (0xD800..0xDC00).contains(&units[0]) {
						parse_tag(iter, "\\u")?;
						units.push(parse_hex4(iter)?);
					}
					let text = String::from_utf16(&units).map_err(|_| iter.format_error("invalid unicode code point"))?;
					bytes.extend_from_slice(text.as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).map_err(Error::from)
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut value: u16 = 0;
	for _ in 0..4 {
		let digit = char::from(iter.expect_next_byte()?)
			.to_digit(16)
			.ok_or_else(|| iter.format_error("invalid unicode code point"))?;
		value = (value << 4) | digit as u16;
	}
	Ok(value)
}

/// Parse a JSON number and return its textual representation, borrowed from the input.
///
/// Accepts an optional minus sign, an integer part, an optional fraction and an optional
/// exponent. Leaves the iterator at the first non-number byte.
///
/// # Errors
/// Returns an error if required digits are missing.
///
/// # Example
/// ```
/// # use geobin_core::byte_iterator::{ByteIterator, parse_number_as_string};
/// let mut it = ByteIterator::from_str("-12.3e+4,", true);
/// assert_eq!(parse_number_as_string(&mut it).unwrap(), "-12.3e+4");
/// ```
pub fn parse_number_as_string<'a>(iter: &mut ByteIterator<'a>) -> Result<&'a str> {
	number_as_string(iter).context("while parsing a number")
}

fn number_as_string<'a>(iter: &mut ByteIterator<'a>) -> Result<&'a str> {
	let start = iter.position();

	if let Some(b'-') = iter.peek() {
		iter.advance();
	}

	if !skip_digits(iter) {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		iter.advance();
		if !skip_digits(iter) {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if let Some(b'.') = iter.peek() {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(b'e' | b'E') = iter.peek() {
		iter.advance();
		if let Some(b'+' | b'-') = iter.peek() {
			iter.advance();
		}
		if !skip_digits(iter) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	Ok(std::str::from_utf8(iter.slice(start..iter.position())?)?)
}

fn skip_digits(iter: &mut ByteIterator) -> bool {
	let mut has_digits = false;
	while let Some(b'0'..=b'9') = iter.peek() {
		has_digits = true;
		iter.advance();
	}
	has_digits
}

/// Parse a JSON number and convert it to a concrete type `R`.
///
/// # Errors
/// Returns an error if number parsing fails or if `R::from_str` rejects the text.
///
/// # Example
/// ```
/// # use geobin_core::byte_iterator::{ByteIterator, parse_number_as};
/// let mut it = ByteIterator::from_str("42", true);
/// let n: i32 = parse_number_as(&mut it).unwrap();
/// assert_eq!(n, 42);
/// ```
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Iterate over JSON object entries, invoking `parse_value` for each key.
///
/// The closure receives the parsed key and the iterator positioned at the start of
/// the value, and is responsible for consuming the value.
///
/// # Errors
/// Returns an error on malformed objects or if `parse_value` fails.
///
/// # Example
/// ```
/// # use geobin_core::byte_iterator::{ByteIterator, parse_object_entries, parse_quoted_json_string};
/// let mut it = ByteIterator::from_str("{\"k\":\"v\"}", true);
/// let mut got = None;
/// parse_object_entries(&mut it, |k, it| { got = Some((k, parse_quoted_json_string(it)?)); Ok(()) }).unwrap();
/// assert_eq!(got, Some(("k".into(), "v".into())));
/// ```
pub fn parse_object_entries<'a, R>(
	iter: &mut ByteIterator<'a>,
	mut parse_value: impl FnMut(String, &mut ByteIterator<'a>) -> Result<R>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	loop {
		iter.skip_whitespace();
		match iter.expect_peeked_byte()? {
			b'}' => {
				iter.advance();
				break;
			}
			b'"' => {
				let key = parse_quoted_json_string(iter)?;

				iter.skip_whitespace();
				if iter.expect_next_byte()? != b':' {
					return Err(iter.format_error("expected ':'"));
				}

				iter.skip_whitespace();
				parse_value(key, iter)?;

				iter.skip_whitespace();
				match iter.expect_next_byte()? {
					b',' => continue,
					b'}' => break,
					_ => return Err(iter.format_error("expected ',' or '}'")),
				}
			}
			_ => return Err(iter.format_error("parsing object, expected '\"' or '}'")),
		}
	}
	Ok(())
}

/// Iterate over JSON array entries, collecting the results from `parse_value`.
///
/// # Errors
/// Returns an error on malformed arrays or if `parse_value` fails.
///
/// # Example
/// ```
/// # use geobin_core::byte_iterator::{ByteIterator, parse_array_entries, parse_number_as};
/// let mut it = ByteIterator::from_str("[1,2,3]", true);
/// let nums: Vec<i32> = parse_array_entries(&mut it, parse_number_as).unwrap();
/// assert_eq!(nums, vec![1,2,3]);
/// ```
pub fn parse_array_entries<'a, R>(
	iter: &mut ByteIterator<'a>,
	mut parse_value: impl FnMut(&mut ByteIterator<'a>) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if let Some(b']') = iter.peek() {
		iter.advance();
		return Ok(result);
	}

	result.push(parse_value(iter)?);

	loop {
		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b']' => break,
			b',' => {
				iter.skip_whitespace();
				result.push(parse_value(iter)?);
			}
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}

	Ok(result)
}

/// Deepest nesting of arrays and objects accepted by [`parse_raw_value`].
pub const MAX_NESTING: usize = 256;

/// Skip over one JSON value of any type and return its raw bytes.
///
/// Leading whitespace is skipped and not part of the returned slice.
///
/// # Errors
/// Returns an error if the value is malformed or nests deeper than [`MAX_NESTING`].
///
/// # Example
/// ```
/// # use geobin_core::byte_iterator::{ByteIterator, parse_raw_value};
/// let mut it = ByteIterator::from_str(" [1, {\"a\":null}] ,", true);
/// assert_eq!(parse_raw_value(&mut it).unwrap(), b"[1, {\"a\":null}]");
/// ```
pub fn parse_raw_value<'a>(iter: &mut ByteIterator<'a>) -> Result<&'a [u8]> {
	raw_value(iter, 0)
}

fn raw_value<'a>(iter: &mut ByteIterator<'a>, nesting: usize) -> Result<&'a [u8]> {
	iter.skip_whitespace();
	let start = iter.position();
	match iter.expect_peeked_byte()? {
		b'{' | b'[' if nesting >= MAX_NESTING => {
			return Err(iter.format_error(&format!("JSON nesting exceeds {MAX_NESTING} levels")));
		}
		b'{' => parse_object_entries(iter, |_, iter2| raw_value(iter2, nesting + 1).map(|_| ()))?,
		b'[' => _ = parse_array_entries(iter, |iter2| raw_value(iter2, nesting + 1))?,
		b'"' => _ = parse_quoted_json_string(iter)?,
		b't' => parse_tag(iter, "true")?,
		b'f' => parse_tag(iter, "false")?,
		b'n' => parse_tag(iter, "null")?,
		d if d.is_ascii_digit() || d == b'-' => _ = parse_number_as_string(iter)?,
		c => {
			return Err(iter.format_error(&format!(
				"expected a JSON value, but got character '{}'",
				c as char
			)));
		}
	}
	iter.slice(start..iter.position())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn get_reader(s: &str) -> ByteIterator<'_> {
		ByteIterator::from_str(s, true)
	}

	#[test]
	fn test_parse_tag() {
		fn parse(text: &str, tag: &str) -> bool {
			let mut iter = get_reader(text);
			parse_tag(&mut iter, tag).is_ok()
		}
		assert!(parse("null", "null"));
		assert!(!parse("nuul", "null"));
		assert!(parse("something", "some"));
		assert!(!parse("nu", "null"));
	}

	#[rstest]
	#[case(" \"hello\" ", "hello")]
	#[case(" \"he\\nllo\" ", "he\nllo")]
	#[case(" \"he\\u0041llo\" ", "heAllo")]
	#[case(" \"he\\b\\f\\n\\r\\tllo\" ", "he\x08\x0C\n\r\tllo")]
	#[case(" \"hello \\\"world\\\"\" ", "hello \"world\"")]
	#[case("\"\\uD834\\uDD1E\"", "\u{1D11E}")]
	#[case("\"Xylofön\"", "Xylofön")]
	fn test_parse_quoted_json_string(#[case] text: &str, #[case] expected: &str) {
		let mut iter = get_reader(text);
		assert_eq!(parse_quoted_json_string(&mut iter).unwrap(), expected);
	}

	#[rstest]
	#[case(" \"he\\u004Gllo\" ")]
	#[case(" \"unterminated string ")]
	#[case("\"\\uD834\"")]
	#[case("\"\\q\"")]
	#[case("hello")]
	fn test_parse_quoted_json_string_errors(#[case] text: &str) {
		let mut iter = get_reader(text);
		assert!(parse_quoted_json_string(&mut iter).is_err());
	}

	#[test]
	fn test_parse_number_as_string() -> Result<()> {
		fn parse(text: &str) -> Result<&str> {
			let mut iter = get_reader(text);
			parse_number_as_string(&mut iter)
		}

		assert_eq!(parse("123")?, "123");
		assert_eq!(parse("-123")?, "-123");
		assert_eq!(parse("-0.456")?, "-0.456");
		assert_eq!(parse("123E-10")?, "123E-10");
		assert_eq!(parse("-123.45E+6")?, "-123.45E+6");
		assert_eq!(parse("123.45 abc")?, "123.45");
		assert_eq!(parse("123abc")?, "123");

		assert!(parse("123..45").is_err());
		assert!(parse("1.2.3").is_err());
		assert!(parse("123e").is_err());
		assert!(parse("123e+").is_err());
		assert!(parse("e123").is_err());
		assert!(parse("-").is_err());
		assert!(parse("123.").is_err());
		assert!(parse("+1").is_err());
		Ok(())
	}

	#[test]
	fn test_parse_number_as() -> Result<()> {
		fn parse<T: FromStr>(text: &str) -> Result<T> {
			let mut iter = get_reader(text);
			parse_number_as::<T>(&mut iter)
		}

		assert_eq!(parse::<i32>("-123")?, -123);
		assert!(parse::<i32>("12.34").is_err());
		assert_eq!(parse::<f64>("12.34")?, 12.34);
		assert_eq!(parse::<f64>("-0.123E3")?, -123.0);
		assert_eq!(parse::<f64>("2e+10")?, 2e10);
		assert!(parse::<f64>("+2e10").is_err());
		assert!(parse::<f64>("abc").is_err());
		Ok(())
	}

	#[test]
	fn test_parse_object_entries() {
		let mut iter = get_reader("{\"key1\":\"value1\", \"key2\" : \"value2\" }");

		let mut entries = Vec::new();
		parse_object_entries(&mut iter, |key, iter| {
			entries.push((key, parse_quoted_json_string(iter)?));
			Ok(())
		})
		.unwrap();

		assert_eq!(
			entries,
			vec![
				("key1".to_string(), "value1".to_string()),
				("key2".to_string(), "value2".to_string())
			]
		);
	}

	#[rstest]
	#[case("{\"a\" 1}")]
	#[case("{\"a\":1,}")]
	#[case("{\"a\":1")]
	#[case("{a:1}")]
	#[case("[]")]
	fn test_parse_object_entries_errors(#[case] text: &str) {
		let mut iter = get_reader(text);
		assert!(parse_object_entries(&mut iter, |_, it| parse_raw_value(it)).is_err());
	}

	#[test]
	fn test_parse_array_entries() {
		let mut iter = get_reader("[\"val1\", \"val2\", \"val3\"]");
		let result = parse_array_entries(&mut iter, parse_quoted_json_string).unwrap();
		assert_eq!(result, vec!["val1", "val2", "val3"]);

		let mut iter = get_reader("[ ]");
		let result = parse_array_entries(&mut iter, parse_number_as::<i32>).unwrap();
		assert!(result.is_empty());

		let mut iter = get_reader("[1 2]");
		assert!(parse_array_entries(&mut iter, parse_number_as::<i32>).is_err());
	}

	#[rstest]
	#[case("true", "true")]
	#[case("  false ", "false")]
	#[case("null,", "null")]
	#[case("-1.5e3]", "-1.5e3")]
	#[case("\"a\\\"b\" ", "\"a\\\"b\"")]
	#[case("{ \"a\" : [1, 2, {\"b\": {}}] }x", "{ \"a\" : [1, 2, {\"b\": {}}] }")]
	fn test_parse_raw_value(#[case] text: &str, #[case] expected: &str) {
		let mut iter = get_reader(text);
		let raw = parse_raw_value(&mut iter).unwrap();
		assert_eq!(std::str::from_utf8(raw).unwrap(), expected);
	}

	#[test]
	fn test_parse_raw_value_errors() {
		for text in ["", "nul", "[1,", "{\"a\"}", "@", "[+1,2]"] {
			let mut iter = get_reader(text);
			assert!(parse_raw_value(&mut iter).is_err(), "expected error for {text:?}");
		}
	}

	#[test]
	fn test_parse_raw_value_nesting_limit() {
		let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));

		let text = nested(MAX_NESTING);
		let mut iter = get_reader(&text);
		assert_eq!(parse_raw_value(&mut iter).unwrap(), text.as_bytes());

		let text = nested(MAX_NESTING + 1);
		assert!(parse_raw_value(&mut get_reader(&text)).is_err());

		let text = format!("{{\"x\":{}}}", nested(200_000));
		assert!(parse_raw_value(&mut get_reader(&text)).is_err());
	}
}
