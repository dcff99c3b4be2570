use std::fmt::Display;

/// The geometry kind stored in the upper four bits of a complex object's head byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeometryKind {
	#[default]
	Unknown = 0,
	Point = 1,
	MultiPoint = 2,
	LineString = 3,
	MultiLineString = 4,
	Polygon = 5,
	MultiPolygon = 6,
	GeometryCollection = 7,
	Feature = 8,
	FeatureCollection = 9,
}

impl GeometryKind {
	pub fn as_u8(&self) -> u8 {
		*self as u8
	}

	/// The GeoJSON `"type"` name.
	pub fn as_str(&self) -> &'static str {
		use GeometryKind::*;
		match self {
			Unknown => "Unknown",
			Point => "Point",
			MultiPoint => "MultiPoint",
			LineString => "LineString",
			MultiLineString => "MultiLineString",
			Polygon => "Polygon",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
			Feature => "Feature",
			FeatureCollection => "FeatureCollection",
		}
	}

	/// Looks up a kind by its GeoJSON `"type"` name. Unrecognized names map to `Unknown`.
	pub fn from_type_name(name: &str) -> Self {
		use GeometryKind::*;
		match name {
			"Point" => Point,
			"MultiPoint" => MultiPoint,
			"LineString" => LineString,
			"MultiLineString" => MultiLineString,
			"Polygon" => Polygon,
			"MultiPolygon" => MultiPolygon,
			"GeometryCollection" => GeometryCollection,
			"Feature" => Feature,
			"FeatureCollection" => FeatureCollection,
			_ => Unknown,
		}
	}

	/// Nesting depth of the `"coordinates"` array, or `None` for kinds without coordinates.
	pub fn coordinate_depth(&self) -> Option<usize> {
		use GeometryKind::*;
		match self {
			Point => Some(0),
			MultiPoint | LineString => Some(1),
			MultiLineString | Polygon => Some(2),
			MultiPolygon => Some(3),
			Unknown | GeometryCollection | Feature | FeatureCollection => None,
		}
	}

	/// Name of the member holding the children of a collection kind.
	pub fn collection_member(&self) -> Option<&'static str> {
		match self {
			GeometryKind::GeometryCollection => Some("geometries"),
			GeometryKind::FeatureCollection => Some("features"),
			_ => None,
		}
	}
}

impl From<u8> for GeometryKind {
	fn from(value: u8) -> Self {
		use GeometryKind::*;
		match value {
			1 => Point,
			2 => MultiPoint,
			3 => LineString,
			4 => MultiLineString,
			5 => Polygon,
			6 => MultiPolygon,
			7 => GeometryCollection,
			8 => Feature,
			9 => FeatureCollection,
			_ => Unknown,
		}
	}
}

impl Display for GeometryKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
