//! Byte-level building blocks of the geobin layout.
//!
//! ```text
//! Object          := Body Tail
//! Body (simple)   := BBox [ExData ExDataLen(u32)]
//! Body (complex)  := BBox Head [Members] Payload [ExData ExDataLen(u32)]
//! Members         := Len(u32) Bytes[Len]
//! ```
//!
//! All integers and floats are little-endian.

mod head;
mod kind;
mod reader;
mod tail;
mod writer;

pub use head::Head;
pub use kind::GeometryKind;
pub use reader::SliceReader;
pub use tail::{BBoxShape, Tail};
pub use writer::BufferWriter;
