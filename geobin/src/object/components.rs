//! Decomposition of an object into its regions, and reconstruction with new ExData.

use super::Object;
use crate::format::{BufferWriter, Head, SliceReader, Tail};
use anyhow::{Result, ensure};
use byteorder::{ByteOrder, LittleEndian};

/// The regions of an object buffer.
///
/// `body` is everything between the bbox and the ExData: the literal text of a string
/// object, nothing for a simple geometry, and head, members and payload for a complex one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components<'a> {
	pub tail: Tail,
	pub bbox: &'a [u8],
	pub body: &'a [u8],
	pub ex_data: &'a [u8],
}

impl<'a> Components<'a> {
	/// Splits `data` into its regions. An empty buffer yields an empty string object.
	///
	/// # Errors
	///
	/// Returns an error if the buffer is shorter than the regions its tail declares.
	pub fn parse(data: &'a [u8]) -> Result<Self> {
		let Some((&tail_byte, rest)) = data.split_last() else {
			return Ok(Components {
				tail: Tail::Text { has_exdata: false },
				bbox: &[],
				body: &[],
				ex_data: &[],
			});
		};
		let tail = Tail::from_byte(tail_byte);

		let bbox_len = tail.bbox_len();
		ensure!(
			rest.len() >= bbox_len,
			"buffer of {} bytes is too short for a bbox of {bbox_len} bytes",
			data.len()
		);
		let (bbox, rest) = rest.split_at(bbox_len);

		let (body, ex_data) = if tail.has_exdata() {
			ensure!(rest.len() >= 4, "buffer is too short for the ExData length");
			let (rest, length) = rest.split_at(rest.len() - 4);
			let length = LittleEndian::read_u32(length) as usize;
			ensure!(
				length <= rest.len(),
				"ExData length {length} exceeds the {} available bytes",
				rest.len()
			);
			rest.split_at(rest.len() - length)
		} else {
			(rest, &rest[rest.len()..])
		};

		Ok(Components {
			tail,
			bbox,
			body,
			ex_data,
		})
	}

	/// The head byte, for complex objects with a non-empty body.
	pub fn head(&self) -> Option<Head> {
		if self.tail.is_complex() {
			self.body.first().map(|byte| Head::from_byte(*byte))
		} else {
			None
		}
	}

	/// The members fragment of a complex object, if its head announces one.
	///
	/// # Errors
	///
	/// Returns an error if the members length exceeds the body.
	pub fn members(&self) -> Result<Option<&'a [u8]>> {
		match self.head() {
			Some(head) if head.has_members => Ok(Some(SliceReader::new(&self.body[1..]).read_len_prefixed()?)),
			_ => Ok(None),
		}
	}

	/// The payload of a complex object: the body after head and members.
	pub fn payload(&self) -> Result<&'a [u8]> {
		let Some(head) = self.head() else {
			return Ok(&[]);
		};
		let mut reader = SliceReader::new(&self.body[1..]);
		if head.has_members {
			reader.read_len_prefixed()?;
		}
		Ok(reader.rest())
	}

	/// Builds a new object from these regions with `ex_data` as its ExData.
	///
	/// An empty `ex_data` clears `HAS_EXDATA` and omits the length prefix.
	pub fn rebuild(&self, ex_data: &[u8]) -> Result<Object> {
		let has_exdata = !ex_data.is_empty();
		let mut data = Vec::with_capacity(self.bbox.len() + self.body.len() + ex_data.len() + 5);
		data.extend_from_slice(self.bbox);
		data.extend_from_slice(self.body);
		if has_exdata {
			data.extend_from_slice(ex_data);
			data.write_len(ex_data.len())?;
		}
		data.push(self.tail.with_exdata(has_exdata).to_byte());
		Ok(Object::wrap(data))
	}
}
