/// Removes all insignificant whitespace from a JSON text.
///
/// Whitespace inside string literals, including escaped quotes, is preserved.
/// The input is not validated; malformed JSON is compacted on a best effort basis.
///
/// # Example
/// ```
/// # use geobin_core::json::compact_json;
/// assert_eq!(compact_json(b"{ \"a b\" : [1, 2] }"), b"{\"a b\":[1,2]}");
/// ```
pub fn compact_json(input: &[u8]) -> Vec<u8> {
	let mut output = Vec::with_capacity(input.len());
	let mut in_string = false;
	let mut escaped = false;

	for &byte in input {
		if in_string {
			output.push(byte);
			if escaped {
				escaped = false;
			} else if byte == b'\\' {
				escaped = true;
			} else if byte == b'"' {
				in_string = false;
			}
		} else if !byte.is_ascii_whitespace() {
			if byte == b'"' {
				in_string = true;
			}
			output.push(byte);
		}
	}
	output
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", "")]
	#[case("  null  ", "null")]
	#[case("{\n\t\"id\": 1,\n\t\"properties\": { \"name\": \"a b\" }\n}", "{\"id\":1,\"properties\":{\"name\":\"a b\"}}")]
	#[case("[ \"say \\\" hi \" , 2 ]", "[\"say \\\" hi \",2]")]
	#[case("[\"back\\\\\" , \" x \"]", "[\"back\\\\\",\" x \"]")]
	fn test_compact_json(#[case] input: &str, #[case] expected: &str) {
		let output = compact_json(input.as_bytes());
		assert_eq!(String::from_utf8(output).unwrap(), expected);
	}
}
