use super::{
	Shape,
	convert::{bbox_geometry, point, to_geometry},
};
use crate::{
	object::ObjectRef,
	types::{BBox, Position},
	view::MAX_NESTING,
};
use geo::{Closest, ClosestPoint, Destination, Distance, Haversine, Relate};

/// Spatial predicates and measurements on geobin objects.
///
/// Positions are read as longitude (`x`) and latitude (`y`) in degrees; distances are in
/// meters. Strings and empty objects never match a predicate.
pub trait GeometryEngine {
	/// `true` if `object` lies completely inside `bbox`.
	fn within_bbox(&self, object: ObjectRef<'_>, bbox: &BBox) -> bool;

	/// `true` if `object` and `bbox` share at least one point.
	fn intersects_bbox(&self, object: ObjectRef<'_>, bbox: &BBox) -> bool;

	/// `true` if `object` lies completely inside `other`.
	fn within(&self, object: ObjectRef<'_>, other: ObjectRef<'_>) -> bool;

	/// `true` if `object` and `other` share at least one point.
	fn intersects(&self, object: ObjectRef<'_>, other: ObjectRef<'_>) -> bool;

	/// `true` if some point of `object` is at most `meters` away from `center`.
	fn nearby(&self, object: ObjectRef<'_>, center: &Position, meters: f64) -> bool;

	/// The bbox given in the source, or else the bbox of all positions.
	fn calculated_bbox(&self, object: ObjectRef<'_>) -> BBox;

	/// A single position standing in for the object.
	fn calculated_point(&self, object: ObjectRef<'_>) -> Position;

	/// Great-circle distance in meters.
	fn distance(&self, from: &Position, to: &Position) -> f64;

	/// The position reached from `from` after `meters` along `bearing` degrees clockwise
	/// from north. `z` is carried over.
	fn destination(&self, from: &Position, meters: f64, bearing: f64) -> Position;
}

/// [`GeometryEngine`] on top of the `geo` crate.
///
/// Predicates are planar and follow the DE-9IM model: a geometry touching the boundary
/// of a bbox from inside is within it, a geometry lying only on the boundary is not.
/// Distances use the haversine formula on a sphere with the mean earth radius.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoEngine;

impl GeometryEngine for GeoEngine {
	fn within_bbox(&self, object: ObjectRef<'_>, bbox: &BBox) -> bool {
		to_geometry(object).is_some_and(|geometry| geometry.relate(&bbox_geometry(bbox)).is_within())
	}

	fn intersects_bbox(&self, object: ObjectRef<'_>, bbox: &BBox) -> bool {
		to_geometry(object).is_some_and(|geometry| geometry.relate(&bbox_geometry(bbox)).is_intersects())
	}

	fn within(&self, object: ObjectRef<'_>, other: ObjectRef<'_>) -> bool {
		match (to_geometry(object), to_geometry(other)) {
			(Some(a), Some(b)) => a.relate(&b).is_within(),
			_ => false,
		}
	}

	fn intersects(&self, object: ObjectRef<'_>, other: ObjectRef<'_>) -> bool {
		match (to_geometry(object), to_geometry(other)) {
			(Some(a), Some(b)) => a.relate(&b).is_intersects(),
			_ => false,
		}
	}

	fn nearby(&self, object: ObjectRef<'_>, center: &Position, meters: f64) -> bool {
		let Some(geometry) = to_geometry(object) else {
			return false;
		};
		let center = point(center);
		match geometry.closest_point(&center) {
			Closest::Intersection(_) => true,
			Closest::SinglePoint(closest) => Haversine.distance(closest, center) <= meters,
			Closest::Indeterminate => false,
		}
	}

	fn calculated_bbox(&self, object: ObjectRef<'_>) -> BBox {
		if let Some(bbox) = object.exported_bbox() {
			return bbox;
		}
		if !object.is_complex() {
			return object.bbox();
		}
		let mut result: Option<BBox> = None;
		for_each_position(object, 0, &mut |position, dims| match result.as_mut() {
			Some(bbox) => bbox.include(position, dims),
			None => result = Some(BBox::new(*position, *position)),
		});
		result.unwrap_or_else(|| object.bbox())
	}

	fn calculated_point(&self, object: ObjectRef<'_>) -> Position {
		if object.exported_bbox().is_none() {
			match object.shape() {
				Shape::Point(position) => return position,
				Shape::Feature(geometry) => return self.calculated_point(geometry),
				_ => {}
			}
		}
		self.calculated_bbox(object).center()
	}

	fn distance(&self, from: &Position, to: &Position) -> f64 {
		Haversine.distance(point(from), point(to))
	}

	fn destination(&self, from: &Position, meters: f64, bearing: f64) -> Position {
		let target = Haversine.destination(point(from), bearing, meters);
		Position::new(target.x(), target.y(), from.z)
	}
}

/// Calls `visit` with every position of `object` and the number of dimensions it uses.
fn for_each_position(object: ObjectRef<'_>, nesting: usize, visit: &mut dyn FnMut(&Position, usize)) {
	if nesting > MAX_NESTING {
		return;
	}
	let dims = object.dims();
	match object.shape() {
		Shape::Empty => {}
		Shape::Point(position) => visit(&position, dims),
		Shape::MultiPoint(positions) | Shape::LineString(positions) => {
			positions.iter().for_each(|position| visit(position, dims));
		}
		Shape::MultiLineString(lines) | Shape::Polygon(lines) => {
			lines.iter().flatten().for_each(|position| visit(position, dims));
		}
		Shape::MultiPolygon(polygons) => {
			polygons.iter().flatten().flatten().for_each(|position| visit(position, dims));
		}
		Shape::GeometryCollection(children) | Shape::FeatureCollection(children) => {
			for child in children {
				for_each_position(child, nesting + 1, visit);
			}
		}
		Shape::Feature(geometry) => for_each_position(geometry, nesting + 1, visit),
	}
}
