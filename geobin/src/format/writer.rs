use anyhow::{Context, Result};
use byteorder::{LittleEndian, WriteBytesExt};

/// Little-endian appends used when building geobin buffers.
pub trait BufferWriter {
	/// Appends `length` as a `u32`.
	///
	/// # Errors
	///
	/// Returns an error if `length` does not fit into a `u32`.
	fn write_len(&mut self, length: usize) -> Result<()>;

	fn write_f64_le(&mut self, value: f64) -> Result<()>;

	/// Appends a `u32` length followed by `bytes`.
	fn write_len_prefixed(&mut self, bytes: &[u8]) -> Result<()>;

	/// Appends the first `dims` values of `coord`.
	fn write_coord(&mut self, coord: &[f64; 3], dims: usize) -> Result<()> {
		for value in &coord[..dims.min(3)] {
			self.write_f64_le(*value)?;
		}
		Ok(())
	}
}

impl BufferWriter for Vec<u8> {
	fn write_len(&mut self, length: usize) -> Result<()> {
		let length = u32::try_from(length).with_context(|| format!("length {length} does not fit into u32"))?;
		Ok(self.write_u32::<LittleEndian>(length)?)
	}

	fn write_f64_le(&mut self, value: f64) -> Result<()> {
		Ok(self.write_f64::<LittleEndian>(value)?)
	}

	fn write_len_prefixed(&mut self, bytes: &[u8]) -> Result<()> {
		self.write_len(bytes.len())?;
		self.extend_from_slice(bytes);
		Ok(())
	}
}
