//! A zero-copy byte cursor over a borrowed text slice.
//!
//! `ByteIterator` supports peeking at the next byte, consuming bytes one by one and
//! handing out sub-slices of the source, so that callers can capture the raw text of a
//! JSON value without copying it. When debug mode is enabled, errors include a short
//! snapshot of the bytes preceding the failure.

use anyhow::{Error, Result, anyhow};
use std::ops::Range;

const DEBUG_SNAPSHOT_SIZE: usize = 16;

/// A cursor over a byte slice with support for peeking, consuming, and error reporting.
///
/// # Fields
///
/// * `source` - The borrowed bytes being iterated.
/// * `position` - Index of the byte that [`peek`](ByteIterator::peek) returns.
/// * `is_debug_enabled` - Whether errors carry a snapshot of recently read bytes.
#[derive(Clone)]
pub struct ByteIterator<'a> {
	source: &'a [u8],
	position: usize,
	is_debug_enabled: bool,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` over a byte slice.
	///
	/// # Arguments
	///
	/// * `source` - The bytes to iterate.
	/// * `debug` - Enables a snapshot of recent bytes in error messages.
	pub fn from_slice(source: &'a [u8], debug: bool) -> Self {
		ByteIterator {
			source,
			position: 0,
			is_debug_enabled: debug,
		}
	}

	/// Creates a new `ByteIterator` over the bytes of a string slice.
	#[allow(clippy::should_implement_trait)]
	pub fn from_str(source: &'a str, debug: bool) -> Self {
		Self::from_slice(source.as_bytes(), debug)
	}

	/// Formats an error message including the current byte position and, in debug mode,
	/// the bytes that were read just before it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		if self.is_debug_enabled {
			let end = self.position.min(self.source.len());
			let start = end.saturating_sub(DEBUG_SNAPSHOT_SIZE - 1);
			let mut snapshot = String::from_utf8_lossy(&self.source[start..end]).into_owned();
			if self.peek().is_none() {
				snapshot.push_str("<EOF>");
			}
			anyhow!("{msg} at position {}: {}", self.position, snapshot)
		} else {
			anyhow!("{msg} at position {}", self.position)
		}
	}

	/// Returns the index of the next unread byte.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.source.get(self.position).copied()
	}

	/// Advances past the current byte. Advancing at the end is a no-op.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.source.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the current byte, if any.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peek();
		self.advance();
		current_byte
	}

	/// Consumes and returns the next byte.
	///
	/// # Errors
	///
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		if let Some(current_byte) = self.peek() {
			self.position += 1;
			Ok(current_byte)
		} else {
			Err(self.format_error("unexpected end"))
		}
	}

	/// Returns the current byte without advancing.
	///
	/// # Errors
	///
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips over any ASCII whitespace bytes.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.position += 1;
		}
	}

	/// Returns the source bytes in `range`, with the lifetime of the source.
	///
	/// # Errors
	///
	/// Returns an error if the range lies outside the source.
	pub fn slice(&self, range: Range<usize>) -> Result<&'a [u8]> {
		self
			.source
			.get(range.clone())
			.ok_or_else(|| anyhow!("range {range:?} is outside of the input (length {})", self.source.len()))
	}

	/// Returns `true` once every byte has been consumed.
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.source.len()
	}
}
