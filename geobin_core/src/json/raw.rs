//! Raw slice extraction for JSON objects and arrays.
//!
//! A [`RawObject`] records each member of a JSON object as its key and the raw bytes of
//! its value. Values are decoded lazily with [`parse_raw_f64`], [`parse_raw_string`],
//! [`parse_raw_array`] or another [`parse_raw_object`] call.

use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string,
	parse_raw_value,
};
use anyhow::{Result, ensure};

/// The members of a JSON object, in source order, with unparsed values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawObject<'a> {
	entries: Vec<(String, &'a [u8])>,
}

impl<'a> RawObject<'a> {
	/// Returns the raw value of the member named `key`. A repeated key resolves to its
	/// last occurrence.
	pub fn get(&self, key: &str) -> Option<&'a [u8]> {
		self.entries.iter().rfind(|(k, _)| k == key).map(|(_, v)| *v)
	}

	/// Returns the member named `key` decoded as a string, if it is one.
	pub fn get_string(&self, key: &str) -> Option<String> {
		self.get(key).and_then(|raw| parse_raw_string(raw).ok())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &'a [u8])> {
		self.entries.iter().map(|(k, v)| (k.as_str(), *v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Runs `parse` over the whole of `raw` and rejects any trailing content.
fn parse_complete<'a, R>(raw: &'a [u8], parse: impl FnOnce(&mut ByteIterator<'a>) -> Result<R>) -> Result<R> {
	let mut iter = ByteIterator::from_slice(raw, true);
	let value = parse(&mut iter)?;
	iter.skip_whitespace();
	ensure!(iter.is_at_end(), iter.format_error("unexpected content after JSON value"));
	Ok(value)
}

/// Parses a JSON object into its members.
///
/// # Errors
/// Returns an error if `raw` is not exactly one well-formed JSON object.
pub fn parse_raw_object(raw: &[u8]) -> Result<RawObject<'_>> {
	parse_complete(raw, |iter| {
		let mut entries = Vec::new();
		parse_object_entries(iter, |key, iter2| {
			entries.push((key, parse_raw_value(iter2)?));
			Ok(())
		})?;
		Ok(RawObject { entries })
	})
}

/// Parses a JSON array into the raw slices of its items.
///
/// # Errors
/// Returns an error if `raw` is not exactly one well-formed JSON array.
pub fn parse_raw_array(raw: &[u8]) -> Result<Vec<&[u8]>> {
	parse_complete(raw, |iter| parse_array_entries(iter, parse_raw_value))
}

/// Parses a JSON number as `f64`.
///
/// # Errors
/// Returns an error if `raw` is not a JSON number.
pub fn parse_raw_f64(raw: &[u8]) -> Result<f64> {
	parse_complete(raw, |iter| {
		iter.skip_whitespace();
		parse_number_as::<f64>(iter)
	})
}

/// Parses a JSON string literal.
///
/// # Errors
/// Returns an error if `raw` is not a JSON string.
pub fn parse_raw_string(raw: &[u8]) -> Result<String> {
	parse_complete(raw, parse_quoted_json_string)
}
