//! Bounds-checked little-endian reads from a byte slice.
//!
//! # Examples
//!
//! ```rust
//! use geobin::format::SliceReader;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let data = [2, 0, 0, 0, 0xAA, 0xBB, 0xCC];
//!     let mut reader = SliceReader::new(&data);
//!     assert_eq!(reader.read_len_prefixed()?, &[0xAA, 0xBB]);
//!     assert_eq!(reader.remaining(), 1);
//!     Ok(())
//! }
//! ```

use anyhow::{Result, anyhow, ensure};
use byteorder::{ByteOrder, LittleEndian};

/// A cursor over a borrowed slice. Every read checks that enough bytes remain.
#[derive(Clone, Copy, Debug)]
pub struct SliceReader<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> SliceReader<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		SliceReader { data, position: 0 }
	}

	pub fn position(&self) -> usize {
		self.position
	}

	pub fn remaining(&self) -> usize {
		self.data.len() - self.position
	}

	pub fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Returns the unread part of the slice without consuming it.
	pub fn rest(&self) -> &'a [u8] {
		&self.data[self.position..]
	}

	/// Consumes `length` bytes and returns them.
	///
	/// # Errors
	///
	/// Returns an error if fewer than `length` bytes remain.
	pub fn read_slice(&mut self, length: usize) -> Result<&'a [u8]> {
		ensure!(
			length <= self.remaining(),
			"cannot read {length} bytes at position {}, only {} left",
			self.position,
			self.remaining()
		);
		let slice = &self.data[self.position..self.position + length];
		self.position += length;
		Ok(slice)
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_slice(1)?[0])
	}

	/// Reads a little-endian `u32` and widens it to `usize`.
	pub fn read_u32(&mut self) -> Result<usize> {
		Ok(LittleEndian::read_u32(self.read_slice(4)?) as usize)
	}

	pub fn read_f64(&mut self) -> Result<f64> {
		Ok(LittleEndian::read_f64(self.read_slice(8)?))
	}

	/// Reads a `u32` length followed by that many bytes.
	pub fn read_len_prefixed(&mut self) -> Result<&'a [u8]> {
		let length = self.read_u32()?;
		self.read_slice(length)
	}

	/// Reads `dims` coordinates into a zero-padded triple.
	pub fn read_coord(&mut self, dims: usize) -> Result<[f64; 3]> {
		let mut coord = [0.0; 3];
		for value in coord.iter_mut().take(dims) {
			*value = self.read_f64()?;
		}
		Ok(coord)
	}

	/// Skips `count` coordinates of `dims` values each.
	pub fn skip_coords(&mut self, count: usize, dims: usize) -> Result<()> {
		let length = count
			.checked_mul(dims * 8)
			.ok_or_else(|| anyhow!("coordinate count {count} overflows"))?;
		self.read_slice(length)?;
		Ok(())
	}
}
