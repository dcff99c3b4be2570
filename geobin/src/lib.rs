//! # geobin
//!
//! A compact, self-describing binary encoding for GeoJSON geometries.
//!
//! Every object is a single byte buffer. Its last byte tells whether it is a geometry,
//! how many dimensions it has and how large its precomputed bbox is, so a spatial index
//! can read bbox, kind and dimensions without decoding the payload. Objects convert back
//! to GeoJSON text without loss.
//!
//! ## Features
//! - **Encode**: GeoJSON text to [`Object`] with [`Encoder`] or [`Object::from_json`].
//! - **Inspect**: [`ObjectRef::rect`], [`ObjectRef::dims`], [`ObjectRef::geometry_type`],
//!   [`ObjectRef::position_count`] work directly on the bytes.
//! - **Decode**: [`ObjectRef::to_json`] renders GeoJSON without building a tree.
//! - **Edit**: [`ObjectRef::set_ex_data`] attaches opaque caller data.
//! - **Query**: [`Spatial`] adds bbox and geometry predicates backed by the `geo` crate.
//!
//! ## Usage Example
//!
//! ```rust
//! use geobin::{GeometryKind, Object};
//!
//! let object = Object::from_json(r#"{"type":"Polygon","coordinates":[[[0,0],[0,10],[10,10],[10,0],[0,0]]]}"#);
//!
//! // axis-aligned rectangles are stored as their bbox
//! assert_eq!(object, Object::new_rect_2d(0.0, 0.0, 10.0, 10.0));
//! assert_eq!(object.geometry_type(), GeometryKind::Polygon);
//! assert_eq!(object.rect(), ([0.0, 0.0, 0.0], [10.0, 10.0, 0.0]));
//!
//! let tagged = object.set_ex_data(b"row:17");
//! assert_eq!(tagged.ex_data(), b"row:17");
//! assert_eq!(tagged.to_json(), object.to_json());
//! ```

pub mod config;
mod coords;
mod decode;
mod encode;
pub mod format;
mod object;
mod shape;
pub mod types;
mod view;

pub use config::EncoderConfig;
pub use encode::Encoder;
pub use format::GeometryKind;
pub use object::{AsObjectRef, Components, Object, ObjectRef};
pub use shape::{GeoEngine, GeometryEngine, MAX_SPARSE, Shape, Spatial};
pub use types::{BBox, Position};
pub use view::GeometryView;
