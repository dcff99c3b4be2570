/// Escapes a string for use inside a JSON string literal.
///
/// Quotes, backslashes and C0 control characters are escaped, and so are `<`, `>`, `&`,
/// U+2028 and U+2029 so the output can be embedded in HTML and JavaScript. Everything
/// else is kept, including DEL and C1 control characters.
pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	push_escaped(&mut output, input);
	output
}

fn push_escaped(output: &mut String, input: &str) {
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			'\0'..='\u{1f}' | '<' | '>' | '&' | '\u{2028}' | '\u{2029}' => {
				output.push_str(&format!("\\u{:04x}", c as u32));
			}
			c => output.push(c),
		}
	}
}

/// Appends `bytes` to `output` as a quoted JSON string.
///
/// Printable ASCII without quotes or backslashes is copied as is. Anything else goes
/// through [`escape_json_string`], with each invalid UTF-8 byte written as `\ufffd`.
pub fn write_json_string(output: &mut Vec<u8>, bytes: &[u8]) {
	output.push(b'"');
	if bytes.iter().all(|&b| (b' '..=b'~').contains(&b) && b != b'"' && b != b'\\') {
		output.extend_from_slice(bytes);
	} else {
		let mut escaped = String::with_capacity(bytes.len());
		for chunk in bytes.utf8_chunks() {
			push_escaped(&mut escaped, chunk.valid());
			for _ in chunk.invalid() {
				escaped.push_str("\\ufffd");
			}
		}
		output.extend_from_slice(escaped.as_bytes());
	}
	output.push(b'"');
}
