use std::fmt::Debug;

/// A coordinate with up to three dimensions. Unused dimensions are zero.
///
/// For geographic data `x` is the longitude and `y` the latitude.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Position {
	pub fn new(x: f64, y: f64, z: f64) -> Self {
		Position { x, y, z }
	}

	pub fn new_2d(x: f64, y: f64) -> Self {
		Position { x, y, z: 0.0 }
	}

	pub fn as_array(&self) -> [f64; 3] {
		[self.x, self.y, self.z]
	}
}

impl From<[f64; 3]> for Position {
	fn from(value: [f64; 3]) -> Self {
		Position::new(value[0], value[1], value[2])
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
	}
}
