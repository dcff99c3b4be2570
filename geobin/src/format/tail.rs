//! The trailing flag byte of every geobin object.
//!
//! ```text
//! bit 0  GEOM        the object is a geometry (otherwise a string)
//! bit 1  IS_3D       the bbox has three dimensions
//! bit 2  IS_RECT     the bbox is a min/max pair (otherwise a single position)
//! bit 3  IS_COMPLEX  a head byte and payload follow the bbox
//! bit 4  HAS_EXDATA  an ExData blob and its u32 length precede the tail
//! ```

const GEOM: u8 = 1;
const IS_3D: u8 = 1 << 1;
const IS_RECT: u8 = 1 << 2;
const IS_COMPLEX: u8 = 1 << 3;
const HAS_EXDATA: u8 = 1 << 4;

/// Shape of the bbox region at the start of a geometry object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BBoxShape {
	Point2D,
	Point3D,
	Rect2D,
	Rect3D,
}

impl BBoxShape {
	pub fn new(is_3d: bool, is_rect: bool) -> Self {
		match (is_3d, is_rect) {
			(false, false) => BBoxShape::Point2D,
			(true, false) => BBoxShape::Point3D,
			(false, true) => BBoxShape::Rect2D,
			(true, true) => BBoxShape::Rect3D,
		}
	}

	/// A rect shape with `dims` dimensions. Anything other than 3 is treated as 2.
	pub fn rect(dims: usize) -> Self {
		BBoxShape::new(dims == 3, true)
	}

	pub fn is_3d(&self) -> bool {
		matches!(self, BBoxShape::Point3D | BBoxShape::Rect3D)
	}

	pub fn is_rect(&self) -> bool {
		matches!(self, BBoxShape::Rect2D | BBoxShape::Rect3D)
	}

	pub fn dims(&self) -> usize {
		if self.is_3d() { 3 } else { 2 }
	}

	/// Number of `f64` values stored in the bbox region.
	pub fn value_count(&self) -> usize {
		if self.is_rect() { self.dims() * 2 } else { self.dims() }
	}

	pub fn byte_len(&self) -> usize {
		self.value_count() * 8
	}
}

/// Decoded form of the tail byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tail {
	/// A string object: literal bytes followed by the tail.
	Text { has_exdata: bool },
	/// A geometry object, starting with a bbox of the given shape.
	Geometry {
		shape: BBoxShape,
		is_complex: bool,
		has_exdata: bool,
	},
}

impl Tail {
	pub fn simple(shape: BBoxShape) -> Self {
		Tail::Geometry {
			shape,
			is_complex: false,
			has_exdata: false,
		}
	}

	pub fn complex(shape: BBoxShape) -> Self {
		Tail::Geometry {
			shape,
			is_complex: true,
			has_exdata: false,
		}
	}

	pub fn from_byte(byte: u8) -> Self {
		let has_exdata = byte & HAS_EXDATA != 0;
		if byte & GEOM == 0 {
			Tail::Text { has_exdata }
		} else {
			Tail::Geometry {
				shape: BBoxShape::new(byte & IS_3D != 0, byte & IS_RECT != 0),
				is_complex: byte & IS_COMPLEX != 0,
				has_exdata,
			}
		}
	}

	pub fn to_byte(self) -> u8 {
		match self {
			Tail::Text { has_exdata } => flag(has_exdata, HAS_EXDATA),
			Tail::Geometry {
				shape,
				is_complex,
				has_exdata,
			} => {
				GEOM | flag(shape.is_3d(), IS_3D)
					| flag(shape.is_rect(), IS_RECT)
					| flag(is_complex, IS_COMPLEX)
					| flag(has_exdata, HAS_EXDATA)
			}
		}
	}

	pub fn is_geometry(&self) -> bool {
		matches!(self, Tail::Geometry { .. })
	}

	pub fn is_complex(&self) -> bool {
		matches!(self, Tail::Geometry { is_complex: true, .. })
	}

	pub fn has_exdata(&self) -> bool {
		match self {
			Tail::Text { has_exdata } | Tail::Geometry { has_exdata, .. } => *has_exdata,
		}
	}

	pub fn shape(&self) -> Option<BBoxShape> {
		match self {
			Tail::Text { .. } => None,
			Tail::Geometry { shape, .. } => Some(*shape),
		}
	}

	/// 0 for strings, otherwise 2 or 3.
	pub fn dims(&self) -> usize {
		self.shape().map_or(0, |shape| shape.dims())
	}

	pub fn bbox_len(&self) -> usize {
		self.shape().map_or(0, |shape| shape.byte_len())
	}

	pub fn with_exdata(self, value: bool) -> Self {
		match self {
			Tail::Text { .. } => Tail::Text { has_exdata: value },
			Tail::Geometry { shape, is_complex, .. } => Tail::Geometry {
				shape,
				is_complex,
				has_exdata: value,
			},
		}
	}
}

fn flag(value: bool, bit: u8) -> u8 {
	if value { bit } else { 0 }
}
