use super::{AsObjectRef, Components, ObjectRef};
use crate::{
	encode::Encoder,
	format::{BBoxShape, GeometryKind, Tail},
	types::{BBox, Position},
};
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use std::fmt::{Debug, Display};

/// An owned geobin object.
///
/// The default value is the empty, invalid object that failed encodes return.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Object {
	data: Vec<u8>,
}

impl Object {
	/// Encodes GeoJSON text with the default [`EncoderConfig`](crate::EncoderConfig).
	///
	/// Invalid input yields an empty object, for which [`is_geometry`](Self::is_geometry)
	/// returns `false`.
	pub fn from_json(json: &str) -> Object {
		Encoder::default().encode(json)
	}

	/// Takes ownership of trusted bytes without validating them.
	pub fn wrap(data: Vec<u8>) -> Object {
		Object { data }
	}

	pub fn new_point_2d(x: f64, y: f64) -> Object {
		Object::new_simple(BBoxShape::Point2D, &[x, y])
	}

	pub fn new_point_3d(x: f64, y: f64, z: f64) -> Object {
		Object::new_simple(BBoxShape::Point3D, &[x, y, z])
	}

	pub fn new_rect_2d(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Object {
		Object::new_simple(BBoxShape::Rect2D, &[min_x, min_y, max_x, max_y])
	}

	pub fn new_rect_3d(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Object {
		Object::new_simple(BBoxShape::Rect3D, &[min_x, min_y, min_z, max_x, max_y, max_z])
	}

	/// Creates a simple rect object from two corners.
	pub fn from_bbox(bbox: &BBox, dims: usize) -> Object {
		let (min, max) = (bbox.min, bbox.max);
		if dims == 3 {
			Object::new_rect_3d(min.x, min.y, min.z, max.x, max.y, max.z)
		} else {
			Object::new_rect_2d(min.x, min.y, max.x, max.y)
		}
	}

	/// A non-geometry object holding `text`.
	pub fn new_string(text: &str) -> Object {
		let mut data = Vec::with_capacity(text.len() + 1);
		data.extend_from_slice(text.as_bytes());
		data.push(Tail::Text { has_exdata: false }.to_byte());
		Object { data }
	}

	pub(crate) fn new_simple(shape: BBoxShape, values: &[f64]) -> Object {
		let mut data = vec![0; shape.byte_len() + 1];
		for (index, value) in values.iter().take(shape.value_count()).enumerate() {
			LittleEndian::write_f64(&mut data[index * 8..], *value);
		}
		data[shape.byte_len()] = Tail::simple(shape).to_byte();
		Object { data }
	}

	/// The raw bytes, without copying.
	pub fn as_binary(&self) -> &[u8] {
		&self.data
	}

	pub fn into_binary(self) -> Vec<u8> {
		self.data
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn is_geometry(&self) -> bool {
		self.as_object_ref().is_geometry()
	}

	pub fn dims(&self) -> usize {
		self.as_object_ref().dims()
	}

	pub fn rect(&self) -> ([f64; 3], [f64; 3]) {
		self.as_object_ref().rect()
	}

	pub fn position(&self) -> Position {
		self.as_object_ref().position()
	}

	pub fn bbox(&self) -> BBox {
		self.as_object_ref().bbox()
	}

	pub fn geometry_type(&self) -> GeometryKind {
		self.as_object_ref().geometry_type()
	}

	pub fn geometry_kind(&self) -> GeometryKind {
		self.geometry_type()
	}

	pub fn position_count(&self) -> usize {
		self.as_object_ref().position_count()
	}

	pub fn try_components(&self) -> Result<Components<'_>> {
		self.as_object_ref().try_components()
	}

	pub fn ex_data(&self) -> &[u8] {
		self.as_object_ref().ex_data()
	}

	pub fn members(&self) -> Option<&[u8]> {
		self.as_object_ref().members()
	}

	pub fn set_ex_data(&self, data: &[u8]) -> Object {
		self.as_object_ref().set_ex_data(data)
	}

	pub fn to_json(&self) -> String {
		self.as_object_ref().to_json()
	}

	pub fn try_to_json(&self) -> Result<String> {
		self.as_object_ref().try_to_json()
	}

	pub fn to_text(&self) -> String {
		self.as_object_ref().to_text()
	}
}

impl From<ObjectRef<'_>> for Object {
	fn from(value: ObjectRef<'_>) -> Self {
		value.to_object()
	}
}

impl Debug for Object {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Object({})", self.to_text())
	}
}

impl Display for Object {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_text())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_simple_constructors() {
		assert_eq!(Object::new_point_2d(1.0, 2.0).as_binary().len(), 17);
		assert_eq!(Object::new_point_3d(1.0, 2.0, 3.0).as_binary().len(), 25);
		assert_eq!(Object::new_rect_2d(1.0, 2.0, 3.0, 4.0).as_binary().len(), 33);
		assert_eq!(Object::new_rect_3d(1.0, 2.0, 3.0, 4.0, 5.0, 6.0).as_binary().len(), 49);

		let rect = Object::new_rect_3d(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
		assert_eq!(rect.as_binary()[48], 7);
		assert_eq!(rect.rect(), ([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]));
	}

	#[test]
	fn test_from_bbox() {
		let bbox = BBox::new(Position::new(0.0, 1.0, 2.0), Position::new(3.0, 4.0, 5.0));
		assert_eq!(Object::from_bbox(&bbox, 3), Object::new_rect_3d(0.0, 1.0, 2.0, 3.0, 4.0, 5.0));
		assert_eq!(Object::from_bbox(&bbox, 2), Object::new_rect_2d(0.0, 1.0, 3.0, 4.0));
	}

	#[test]
	fn test_string_object() {
		let object = Object::new_string("hello");
		assert_eq!(object.as_binary(), b"hello\0");
		assert!(!object.is_geometry());
		assert_eq!(object.to_text(), "hello");
		assert_eq!(object.to_json(), "\"hello\"");
	}

	#[test]
	fn test_wrap_is_zero_copy() {
		let object = Object::new_point_2d(5.0, 6.0);
		let bytes = object.clone().into_binary();
		let pointer = bytes.as_ptr();
		let wrapped = Object::wrap(bytes);
		assert_eq!(wrapped.as_binary().as_ptr(), pointer);
		assert_eq!(wrapped, object);
	}
}
