//! JSON helpers for reading GeoJSON without building a document tree.
//!
//! Values are located as raw byte slices of the input and only decoded on demand.

mod compact;
mod raw;
mod stringify;

pub use compact::compact_json;
pub use raw::{RawObject, parse_raw_array, parse_raw_f64, parse_raw_object, parse_raw_string};
pub use stringify::{escape_json_string, write_json_string};
