//! Byte-level iteration over JSON text and the token parsers built on top of it.

mod basics;
mod iterator;

pub use basics::*;
pub use iterator::*;
