//! Zero-copy access to the geometry payload of an object.

use crate::{
	coords::count_positions,
	format::{BBoxShape, GeometryKind, SliceReader},
	object::ObjectRef,
};
use anyhow::{Result, bail, ensure};
use log::trace;

/// Nesting of collections and features accepted when walking a buffer.
pub(crate) const MAX_NESTING: usize = 256;

/// Kind, dimensions and payload of a geometry object, derived without allocating.
///
/// For simple objects `payload` holds the bbox bytes. For complex objects it starts
/// right after the head byte and the optional members block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometryView<'a> {
	pub kind: GeometryKind,
	pub dims: usize,
	pub simple: bool,
	pub exported_bbox: bool,
	pub bbox: &'a [u8],
	pub members: Option<&'a [u8]>,
	pub payload: &'a [u8],
}

impl<'a> GeometryView<'a> {
	/// # Errors
	///
	/// Returns an error if the object is not a geometry or is shorter than its layout.
	pub fn new(object: ObjectRef<'a>) -> Result<Self> {
		let components = object.try_components()?;
		let Some(shape) = components.tail.shape() else {
			bail!("object is not a geometry");
		};

		if !components.tail.is_complex() {
			let kind = match shape {
				BBoxShape::Point2D | BBoxShape::Point3D => GeometryKind::Point,
				BBoxShape::Rect2D => GeometryKind::Polygon,
				BBoxShape::Rect3D => GeometryKind::MultiPolygon,
			};
			return Ok(GeometryView {
				kind,
				dims: shape.dims(),
				simple: true,
				exported_bbox: false,
				bbox: components.bbox,
				members: None,
				payload: components.bbox,
			});
		}

		let Some(head) = components.head() else {
			bail!("complex object without a head byte");
		};
		Ok(GeometryView {
			kind: head.kind,
			dims: shape.dims(),
			simple: false,
			exported_bbox: head.exported_bbox,
			bbox: components.bbox,
			members: components.members()?,
			payload: components.payload()?,
		})
	}

	/// Total number of positions.
	///
	/// Points count 1 and other simple objects count their 2 corners. Collections and
	/// features sum up their children.
	pub fn position_count(&self) -> Result<usize> {
		self.count(0)
	}

	fn count(&self, nesting: usize) -> Result<usize> {
		ensure!(nesting <= MAX_NESTING, "objects are nested deeper than {MAX_NESTING} levels");
		if self.kind == GeometryKind::Point {
			return Ok(1);
		}
		if self.simple {
			return Ok(2);
		}
		let mut reader = SliceReader::new(self.payload);
		if let Some(depth) = self.kind.coordinate_depth() {
			return count_positions(&mut reader, depth, self.dims);
		}
		match self.kind {
			GeometryKind::GeometryCollection | GeometryKind::FeatureCollection => {
				let mut total = 0;
				for _ in 0..reader.read_u32()? {
					let child = ObjectRef::wrap(reader.read_len_prefixed()?);
					total += GeometryView::new(child)?.count(nesting + 1)?;
				}
				Ok(total)
			}
			GeometryKind::Feature => {
				let geometry = ObjectRef::wrap(reader.read_len_prefixed()?);
				GeometryView::new(geometry)?.count(nesting + 1)
			}
			_ => Ok(0),
		}
	}
}

impl<'a> ObjectRef<'a> {
	/// # Errors
	///
	/// Returns an error if the object is not a geometry or is shorter than its layout.
	pub fn geometry_view(&self) -> Result<GeometryView<'a>> {
		GeometryView::new(*self)
	}

	/// The number of positions in the geometry; 0 for non-geometries and damaged buffers.
	pub fn position_count(&self) -> usize {
		self.try_position_count().unwrap_or_else(|error| {
			trace!("cannot count positions: {error:#}");
			0
		})
	}

	pub fn try_position_count(&self) -> Result<usize> {
		self.geometry_view()?.position_count()
	}
}
