//! Structural view of a geobin object for spatial algorithms.
//!
//! A [`Shape`] is re-derived from the bytes on every call. Coordinates are copied into
//! [`Position`] vectors; children of collections and features stay zero-copy
//! [`ObjectRef`]s. Predicates on shapes live behind [`GeometryEngine`], implemented by
//! [`GeoEngine`] on top of the `geo` crate. [`Spatial`] brings them to every object.

mod convert;
mod engine;
mod spatial;

pub use engine::{GeoEngine, GeometryEngine};
pub use spatial::{MAX_SPARSE, Spatial};

use crate::{
	coords::Coords,
	decode::{box_faces, rect_ring},
	format::{GeometryKind, SliceReader},
	object::ObjectRef,
	types::Position,
};
use anyhow::Result;
use log::trace;

/// The geometry of an object with its coordinates decoded.
///
/// Simple rects and boxes expand to the same corner rings their GeoJSON form shows.
/// A bbox given in the source is not part of the shape; read it with
/// [`ObjectRef::exported_bbox`].
#[derive(Clone, Debug, PartialEq)]
pub enum Shape<'a> {
	/// Strings, empty objects and geometries of unknown kind.
	Empty,
	Point(Position),
	MultiPoint(Vec<Position>),
	LineString(Vec<Position>),
	MultiLineString(Vec<Vec<Position>>),
	Polygon(Vec<Vec<Position>>),
	MultiPolygon(Vec<Vec<Vec<Position>>>),
	GeometryCollection(Vec<ObjectRef<'a>>),
	FeatureCollection(Vec<ObjectRef<'a>>),
	Feature(ObjectRef<'a>),
}

impl Shape<'_> {
	pub fn kind(&self) -> GeometryKind {
		match self {
			Shape::Empty => GeometryKind::Unknown,
			Shape::Point(_) => GeometryKind::Point,
			Shape::MultiPoint(_) => GeometryKind::MultiPoint,
			Shape::LineString(_) => GeometryKind::LineString,
			Shape::MultiLineString(_) => GeometryKind::MultiLineString,
			Shape::Polygon(_) => GeometryKind::Polygon,
			Shape::MultiPolygon(_) => GeometryKind::MultiPolygon,
			Shape::GeometryCollection(_) => GeometryKind::GeometryCollection,
			Shape::FeatureCollection(_) => GeometryKind::FeatureCollection,
			Shape::Feature(_) => GeometryKind::Feature,
		}
	}
}

impl<'a> ObjectRef<'a> {
	/// Decodes the shape, or [`Shape::Empty`] if the buffer cannot be read.
	pub fn shape(&self) -> Shape<'a> {
		self.try_shape().unwrap_or_else(|error| {
			trace!("cannot read shape: {error:#}");
			Shape::Empty
		})
	}

	/// # Errors
	///
	/// Returns an error if the buffer is shorter than the structure it declares.
	pub fn try_shape(&self) -> Result<Shape<'a>> {
		if !self.is_geometry() {
			return Ok(Shape::Empty);
		}
		let view = self.geometry_view()?;
		let dims = view.dims;

		if view.simple {
			let (min, max) = self.rect();
			return Ok(match view.kind {
				GeometryKind::Point => Shape::Point(min.into()),
				GeometryKind::Polygon => Shape::Polygon(vec![rect_ring(&min, &max).map(Position::from).to_vec()]),
				GeometryKind::MultiPolygon => Shape::MultiPolygon(
					box_faces(&min, &max)
						.iter()
						.map(|face| vec![face.map(Position::from).to_vec()])
						.collect(),
				),
				_ => Shape::Empty,
			});
		}

		let mut reader = SliceReader::new(view.payload);
		let reader = &mut reader;
		Ok(match view.kind {
			GeometryKind::Unknown => Shape::Empty,
			GeometryKind::Point => Shape::Point(positions_0(&Coords::read(reader, 0, dims)?)),
			GeometryKind::MultiPoint => Shape::MultiPoint(positions_1(&Coords::read(reader, 1, dims)?)),
			GeometryKind::LineString => Shape::LineString(positions_1(&Coords::read(reader, 1, dims)?)),
			GeometryKind::MultiLineString => Shape::MultiLineString(positions_2(&Coords::read(reader, 2, dims)?)),
			GeometryKind::Polygon => Shape::Polygon(positions_2(&Coords::read(reader, 2, dims)?)),
			GeometryKind::MultiPolygon => Shape::MultiPolygon(positions_3(&Coords::read(reader, 3, dims)?)),
			GeometryKind::GeometryCollection => Shape::GeometryCollection(read_children(reader)?),
			GeometryKind::FeatureCollection => Shape::FeatureCollection(read_children(reader)?),
			GeometryKind::Feature => Shape::Feature(ObjectRef::wrap(reader.read_len_prefixed()?)),
		})
	}
}

fn read_children<'a>(reader: &mut SliceReader<'a>) -> Result<Vec<ObjectRef<'a>>> {
	let count = reader.read_u32()?;
	let mut children = Vec::with_capacity(count.min(reader.remaining()));
	for _ in 0..count {
		children.push(ObjectRef::wrap(reader.read_len_prefixed()?));
	}
	Ok(children)
}

fn positions_0(coords: &Coords) -> Position {
	coords.as_leaf().copied().unwrap_or_default().into()
}

fn positions_1(coords: &Coords) -> Vec<Position> {
	coords.children().iter().map(positions_0).collect()
}

fn positions_2(coords: &Coords) -> Vec<Vec<Position>> {
	coords.children().iter().map(positions_1).collect()
}

fn positions_3(coords: &Coords) -> Vec<Vec<Vec<Position>>> {
	coords.children().iter().map(positions_2).collect()
}
