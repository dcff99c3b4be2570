//! Conversion of shapes into `geo` geometries.
//!
//! Only the `x` and `y` axes take part. Objects with a bbox given in the source, and
//! simple rects and boxes, are represented by their bbox.

use super::Shape;
use crate::{
	object::ObjectRef,
	types::{BBox, Position},
	view::MAX_NESTING,
};
use geo::{Coord, Geometry, GeometryCollection, Line, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Rect};

/// The planar geometry of `object`, or `None` for strings and empty objects.
pub fn to_geometry(object: ObjectRef<'_>) -> Option<Geometry<f64>> {
	convert(object, 0)
}

fn convert(object: ObjectRef<'_>, nesting: usize) -> Option<Geometry<f64>> {
	if nesting > MAX_NESTING {
		return None;
	}
	if let Some(bbox) = object.exported_bbox() {
		return Some(bbox_geometry(&bbox));
	}
	if !object.is_complex() && object.bbox_shape().is_some_and(|shape| shape.is_rect()) {
		return Some(bbox_geometry(&object.bbox()));
	}

	let geometry = match object.shape() {
		Shape::Empty => return None,
		Shape::Point(position) => Geometry::Point(point(&position)),
		Shape::MultiPoint(positions) => Geometry::MultiPoint(multi_point(&positions)),
		Shape::LineString(positions) => {
			if positions.len() < 2 {
				Geometry::MultiPoint(multi_point(&positions))
			} else {
				Geometry::LineString(line_string(&positions))
			}
		}
		Shape::MultiLineString(lines) => {
			Geometry::MultiLineString(MultiLineString::new(lines.iter().map(|line| line_string(line)).collect()))
		}
		Shape::Polygon(rings) => match polygon(&rings) {
			Some(polygon) => Geometry::Polygon(polygon),
			None => Geometry::GeometryCollection(GeometryCollection::default()),
		},
		Shape::MultiPolygon(polygons) => {
			Geometry::MultiPolygon(MultiPolygon::new(polygons.iter().filter_map(|rings| polygon(rings)).collect()))
		}
		Shape::GeometryCollection(children) | Shape::FeatureCollection(children) => {
			Geometry::GeometryCollection(GeometryCollection::new_from(
				children.iter().filter_map(|child| convert(*child, nesting + 1)).collect(),
			))
		}
		Shape::Feature(geometry) => return convert(geometry, nesting + 1),
	};
	Some(geometry)
}

/// A bbox as polygon, collapsing to a line or point when it has no area.
pub fn bbox_geometry(bbox: &BBox) -> Geometry<f64> {
	let min = coord(&bbox.min);
	let max = coord(&bbox.max);
	if min == max {
		Geometry::Point(Point::from(min))
	} else if min.x == max.x || min.y == max.y {
		Geometry::Line(Line::new(min, max))
	} else {
		Geometry::Polygon(Rect::new(min, max).to_polygon())
	}
}

pub fn point(position: &Position) -> Point<f64> {
	Point::new(position.x, position.y)
}

fn coord(position: &Position) -> Coord<f64> {
	Coord {
		x: position.x,
		y: position.y,
	}
}

fn multi_point(positions: &[Position]) -> MultiPoint<f64> {
	MultiPoint::new(positions.iter().map(point).collect())
}

fn line_string(positions: &[Position]) -> LineString<f64> {
	LineString::new(positions.iter().map(coord).collect())
}

/// The first ring is the exterior, the rest are holes. `None` without an exterior.
fn polygon(rings: &[Vec<Position>]) -> Option<Polygon<f64>> {
	let (exterior, holes) = rings.split_first()?;
	if exterior.is_empty() {
		return None;
	}
	Some(Polygon::new(
		line_string(exterior),
		holes.iter().map(|hole| line_string(hole)).collect(),
	))
}
