use super::Position;
use std::fmt::Debug;

/// An axis-aligned bounding box given by its minimum and maximum corners.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BBox {
	pub min: Position,
	pub max: Position,
}

impl BBox {
	pub fn new(min: Position, max: Position) -> Self {
		BBox { min, max }
	}

	/// Creates a 2D bbox; both `z` values are zero.
	pub fn new_2d(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
		BBox {
			min: Position::new_2d(min_x, min_y),
			max: Position::new_2d(max_x, max_y),
		}
	}

	pub fn center(&self) -> Position {
		Position::new(
			(self.min.x + self.max.x) / 2.0,
			(self.min.y + self.max.y) / 2.0,
			(self.min.z + self.max.z) / 2.0,
		)
	}

	/// Returns `true` if both corners coincide.
	pub fn is_point(&self) -> bool {
		self.min == self.max
	}

	/// Grows the bbox so that it contains `position` in the first `dims` axes.
	pub fn include(&mut self, position: &Position, dims: usize) {
		let (mut min, mut max) = (self.min.as_array(), self.max.as_array());
		let value = position.as_array();
		for axis in 0..dims.min(3) {
			min[axis] = min[axis].min(value[axis]);
			max[axis] = max[axis].max(value[axis]);
		}
		self.min = min.into();
		self.max = max.into();
	}
}

impl Debug for BBox {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "BBox({:?}, {:?})", self.min, self.max)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_center() {
		let bbox = BBox::new(Position::new(0.0, 2.0, -4.0), Position::new(10.0, 4.0, 4.0));
		assert_eq!(bbox.center(), Position::new(5.0, 3.0, 0.0));
		assert!(!bbox.is_point());
		assert!(BBox::new_2d(1.0, 1.0, 1.0, 1.0).is_point());
	}

	#[test]
	fn test_include() {
		let mut bbox = BBox::new_2d(0.0, 0.0, 1.0, 1.0);
		bbox.include(&Position::new(-1.0, 5.0, 9.0), 2);
		assert_eq!(bbox, BBox::new_2d(-1.0, 0.0, 1.0, 5.0));
		bbox.include(&Position::new(0.0, 0.0, 9.0), 3);
		assert_eq!(bbox.max.z, 9.0);
	}
}
