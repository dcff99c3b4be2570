use super::{GeoEngine, GeometryEngine};
use crate::{
	object::{AsObjectRef, Object},
	types::{BBox, Position},
};

/// Largest accepted `amount` for [`Spatial::sparse`], i.e. at most 16 × 16 cells.
pub const MAX_SPARSE: u8 = 4;

/// Spatial operations on any geobin object, evaluated with [`GeoEngine`].
///
/// # Examples
///
/// ```
/// use geobin::{BBox, Object, Spatial};
///
/// let object = Object::from_json(r#"{"type":"LineString","coordinates":[[1,1],[2,3]]}"#);
/// assert!(object.within_bbox(&BBox::new_2d(0.0, 0.0, 10.0, 10.0)));
/// assert!(object.intersects(&Object::new_rect_2d(1.5, 0.0, 5.0, 5.0)));
/// ```
pub trait Spatial: AsObjectRef {
	fn within_bbox(&self, bbox: &BBox) -> bool {
		GeoEngine.within_bbox(self.as_object_ref(), bbox)
	}

	fn intersects_bbox(&self, bbox: &BBox) -> bool {
		GeoEngine.intersects_bbox(self.as_object_ref(), bbox)
	}

	fn within<O: AsObjectRef>(&self, other: &O) -> bool {
		GeoEngine.within(self.as_object_ref(), other.as_object_ref())
	}

	fn intersects<O: AsObjectRef>(&self, other: &O) -> bool {
		GeoEngine.intersects(self.as_object_ref(), other.as_object_ref())
	}

	fn nearby(&self, center: &Position, meters: f64) -> bool {
		GeoEngine.nearby(self.as_object_ref(), center, meters)
	}

	fn calculated_bbox(&self) -> BBox {
		GeoEngine.calculated_bbox(self.as_object_ref())
	}

	fn calculated_point(&self) -> Position {
		GeoEngine.calculated_point(self.as_object_ref())
	}

	/// `true` for objects whose bbox stands in for their geometry: a bbox given in the
	/// source, or a simple rect or box.
	fn is_bbox_defined(&self) -> bool {
		let object = self.as_object_ref();
		object.exported_bbox().is_some() || (!object.is_complex() && object.bbox_shape().is_some_and(|s| s.is_rect()))
	}

	/// Splits the stored bbox into a grid of `2^amount` cells along `x` and `y`.
	///
	/// Every cell is a 3D rect object spanning the full `z` range. `amount` is capped at
	/// [`MAX_SPARSE`]; an `amount` of 0 or an inverted bbox yields the bbox itself.
	fn sparse(&self, amount: u8) -> Vec<Object> {
		let bbox = self.as_object_ref().bbox();
		let (min, max) = (bbox.min, bbox.max);
		let cell = |min_x: f64, min_y: f64, max_x: f64, max_y: f64| {
			Object::new_rect_3d(min_x, min_y, min.z, max_x, max_y, max.z)
		};
		if amount == 0 || min.x > max.x || min.y > max.y {
			return vec![cell(min.x, min.y, max.x, max.y)];
		}

		let splits = 1usize << amount.min(MAX_SPARSE);
		let width = (max.x - min.x) / splits as f64;
		let height = (max.y - min.y) / splits as f64;
		let mut cells = Vec::with_capacity(splits * splits);
		for row in 0..splits {
			let min_y = min.y + height * row as f64;
			let max_y = if row + 1 == splits { max.y } else { min_y + height };
			for column in 0..splits {
				let min_x = min.x + width * column as f64;
				let max_x = if column + 1 == splits { max.x } else { min_x + width };
				cells.push(cell(min_x, min_y, max_x, max_y));
			}
		}
		cells
	}
}

impl<T: AsObjectRef + ?Sized> Spatial for T {}

impl Object {
	/// A 2D rect reaching `meters` from the center in each compass direction.
	pub fn bbox_from_center(lat: f64, lon: f64, meters: f64) -> Object {
		let center = Position::new_2d(lon, lat);
		let north = GeoEngine.destination(&center, meters, 0.0);
		let east = GeoEngine.destination(&center, meters, 90.0);
		let south = GeoEngine.destination(&center, meters, 180.0);
		let west = GeoEngine.destination(&center, meters, 270.0);
		Object::new_rect_2d(west.x, south.y, east.x, north.y)
	}
}

impl Position {
	/// Great-circle distance to `other` in meters.
	pub fn distance_to(&self, other: &Position) -> f64 {
		GeoEngine.distance(self, other)
	}

	/// The position `meters` away along `bearing` degrees clockwise from north.
	pub fn destination(&self, meters: f64, bearing: f64) -> Position {
		GeoEngine.destination(self, meters, bearing)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_sparse() {
		let rect = Object::new_rect_2d(0.0, 0.0, 4.0, 4.0);
		assert_eq!(rect.sparse(0), vec![Object::new_rect_3d(0.0, 0.0, 0.0, 4.0, 4.0, 0.0)]);

		let cells = rect.sparse(1);
		assert_eq!(
			cells,
			vec![
				Object::new_rect_3d(0.0, 0.0, 0.0, 2.0, 2.0, 0.0),
				Object::new_rect_3d(2.0, 0.0, 0.0, 4.0, 2.0, 0.0),
				Object::new_rect_3d(0.0, 2.0, 0.0, 2.0, 4.0, 0.0),
				Object::new_rect_3d(2.0, 2.0, 0.0, 4.0, 4.0, 0.0),
			]
		);
		assert_eq!(rect.sparse(3).len(), 64);
	}

	#[test]
	fn test_sparse_is_capped() {
		let rect = Object::new_rect_2d(0.0, 0.0, 16.0, 16.0);
		let cells = rect.sparse(u8::MAX);
		assert_eq!(cells.len(), 256);
		assert_eq!(cells, rect.sparse(MAX_SPARSE));
		assert_eq!(cells[17], Object::new_rect_3d(1.0, 1.0, 0.0, 2.0, 2.0, 0.0));
	}

	#[test]
	fn test_sparse_keeps_z_range() {
		let cube = Object::new_rect_3d(0.0, 0.0, -1.0, 1.0, 1.0, 1.0);
		for cell in cube.sparse(2) {
			let (min, max) = cell.rect();
			assert_eq!((min[2], max[2]), (-1.0, 1.0));
		}
	}

	#[test]
	fn test_sparse_of_a_point() {
		let point = Object::new_point_2d(3.0, 4.0);
		let cells = point.sparse(1);
		assert_eq!(cells.len(), 4);
		assert!(cells.iter().all(|cell| cell.rect() == ([3.0, 4.0, 0.0], [3.0, 4.0, 0.0])));
	}

	#[test]
	fn test_bbox_from_center() {
		let rect = Object::bbox_from_center(0.0, 0.0, 1000.0);
		let (min, max) = rect.rect();
		assert_relative_eq!(max[1], 0.008993, max_relative = 1e-3);
		assert_relative_eq!(min[1], -max[1], epsilon = 1e-12);
		assert_relative_eq!(min[0], -max[0], epsilon = 1e-12);
		assert!(rect.intersects(&Object::new_point_2d(0.005, -0.005)));
		assert!(!rect.intersects(&Object::new_point_2d(0.01, 0.0)));
	}

	#[test]
	fn test_position_helpers() {
		let a = Position::new_2d(13.4, 52.5);
		let b = a.destination(5000.0, 45.0);
		assert_relative_eq!(a.distance_to(&b), 5000.0, max_relative = 1e-9);
	}

	#[test]
	fn test_is_bbox_defined() {
		assert!(Object::new_rect_2d(0.0, 0.0, 1.0, 1.0).is_bbox_defined());
		assert!(!Object::new_point_2d(0.0, 0.0).is_bbox_defined());
		assert!(Object::from_json(r#"{"type":"Point","coordinates":[1,1],"bbox":[0,0,2,2]}"#).is_bbox_defined());
		assert!(!Object::from_json(r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#).is_bbox_defined());
	}
}
