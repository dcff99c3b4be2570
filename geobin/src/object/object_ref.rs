use super::{Components, Object};
use crate::{
	format::{BBoxShape, GeometryKind, Head, Tail},
	types::{BBox, Position},
};
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use std::fmt::{Debug, Display};

/// A borrowed geobin object.
///
/// All accessors fail soft: a buffer that is shorter than its own tail declares yields
/// zeroed or empty results instead of reading out of bounds.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ObjectRef<'a> {
	data: &'a [u8],
}

impl<'a> ObjectRef<'a> {
	/// Wraps trusted bytes without copying or validating them.
	pub fn wrap(data: &'a [u8]) -> Self {
		ObjectRef { data }
	}

	pub fn as_bytes(&self) -> &'a [u8] {
		self.data
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn to_object(&self) -> Object {
		Object::wrap(self.data.to_vec())
	}

	/// The decoded tail byte, or `None` for an empty buffer.
	pub fn tail(&self) -> Option<Tail> {
		self.data.last().map(|byte| Tail::from_byte(*byte))
	}

	pub fn is_geometry(&self) -> bool {
		self.tail().is_some_and(|tail| tail.is_geometry())
	}

	/// Returns `true` for geometries that carry a head byte and a payload.
	pub fn is_complex(&self) -> bool {
		self.tail().is_some_and(|tail| tail.is_complex())
	}

	pub fn bbox_shape(&self) -> Option<BBoxShape> {
		self.tail().and_then(|tail| tail.shape())
	}

	/// Number of dimensions: 0 for strings and empty objects, otherwise 2 or 3.
	pub fn dims(&self) -> usize {
		self.tail().map_or(0, |tail| tail.dims())
	}

	/// Minimum and maximum corner of the stored bbox.
	///
	/// A point bbox returns the same position twice. Unused dimensions, non-geometries and
	/// buffers too short for their bbox return zeros.
	pub fn rect(&self) -> ([f64; 3], [f64; 3]) {
		let mut min = [0.0; 3];
		let mut max = [0.0; 3];
		let Some(shape) = self.bbox_shape() else {
			return (min, max);
		};
		if self.data.len() <= shape.byte_len() {
			trace!("buffer of {} bytes is too short for a {shape:?} bbox", self.data.len());
			return (min, max);
		}
		let dims = shape.dims();
		for axis in 0..dims {
			min[axis] = LittleEndian::read_f64(&self.data[axis * 8..]);
		}
		if shape.is_rect() {
			for axis in 0..dims {
				max[axis] = LittleEndian::read_f64(&self.data[(dims + axis) * 8..]);
			}
		} else {
			max = min;
		}
		(min, max)
	}

	/// The centre of [`rect`](Self::rect).
	pub fn position(&self) -> Position {
		self.bbox().center()
	}

	/// [`rect`](Self::rect) as a [`BBox`].
	pub fn bbox(&self) -> BBox {
		let (min, max) = self.rect();
		BBox::new(min.into(), max.into())
	}

	/// The bbox, but only if it was given in the source GeoJSON.
	pub fn exported_bbox(&self) -> Option<BBox> {
		self.head().filter(|head| head.exported_bbox).map(|_| self.bbox())
	}

	/// The head byte of a complex object.
	pub fn head(&self) -> Option<Head> {
		let tail = self.tail()?;
		if !tail.is_complex() {
			return None;
		}
		let position = tail.bbox_len();
		// the head can never be the tail itself
		if position + 1 >= self.data.len() {
			return None;
		}
		Some(Head::from_byte(self.data[position]))
	}

	/// The kind of geometry. Simple objects imply their kind from the bbox shape.
	pub fn geometry_type(&self) -> GeometryKind {
		match self.tail() {
			Some(Tail::Geometry {
				shape,
				is_complex: false,
				..
			}) => match shape {
				BBoxShape::Point2D | BBoxShape::Point3D => GeometryKind::Point,
				BBoxShape::Rect2D => GeometryKind::Polygon,
				BBoxShape::Rect3D => GeometryKind::MultiPolygon,
			},
			Some(Tail::Geometry { is_complex: true, .. }) => self.head().map_or(GeometryKind::Unknown, |head| head.kind),
			_ => GeometryKind::Unknown,
		}
	}

	pub fn geometry_kind(&self) -> GeometryKind {
		self.geometry_type()
	}

	/// Splits the buffer into tail, bbox, body and ExData.
	///
	/// # Errors
	///
	/// Returns an error if the buffer is shorter than the regions its tail declares.
	pub fn try_components(&self) -> Result<Components<'a>> {
		Components::parse(self.data)
	}

	pub fn has_ex_data(&self) -> bool {
		self.tail().is_some_and(|tail| tail.has_exdata())
	}

	/// The opaque ExData blob; empty if there is none.
	pub fn ex_data(&self) -> &'a [u8] {
		match self.try_components() {
			Ok(components) => components.ex_data,
			Err(error) => {
				trace!("no ExData: {error:#}");
				&[]
			}
		}
	}

	/// The stored `{"id":..,"properties":..}` fragment of a feature.
	pub fn members(&self) -> Option<&'a [u8]> {
		self.try_components().ok()?.members().ok().flatten()
	}

	/// Returns a copy of this object with its ExData replaced by `data`.
	///
	/// An empty `data` removes the ExData region. BBox and payload bytes are preserved.
	/// Buffers that cannot be decomposed yield an empty object.
	pub fn set_ex_data(&self, data: &[u8]) -> Object {
		self.try_set_ex_data(data).unwrap_or_else(|error| {
			trace!("cannot set ExData: {error:#}");
			Object::default()
		})
	}

	/// Like [`set_ex_data`](Self::set_ex_data), but reports why the buffer could not be rebuilt.
	pub fn try_set_ex_data(&self, data: &[u8]) -> Result<Object> {
		self.try_components()?.rebuild(data)
	}
}

impl Debug for ObjectRef<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "ObjectRef({})", self.to_text())
	}
}

impl Display for ObjectRef<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_text())
	}
}
