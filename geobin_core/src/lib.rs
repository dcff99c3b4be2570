//! Text-side collaborators of the geobin codec.
//!
//! - [`byte_iterator`]: a zero-copy byte cursor over JSON text plus small token parsers.
//! - [`json`]: raw member/item extraction, whitespace compaction and string escaping.

pub mod byte_iterator;
pub mod json;
