//! Nested GeoJSON coordinate arrays.
//!
//! A coordinate array of nesting depth `d` is parsed into a [`Coords`] tree and written as
//! `d` levels of `u32` counts with `f64` tuples at the leaves. The same routine serves
//! every depth from 0 (`Point`) to 3 (`MultiPolygon`).

use crate::format::{BufferWriter, SliceReader};
use anyhow::{Context, Result, ensure};
use geobin_core::json::{parse_raw_array, parse_raw_f64};

/// A single coordinate tuple, zero padded to three values.
pub type Coord = [f64; 3];

#[derive(Clone, Debug, PartialEq)]
pub enum Coords {
	Leaf(Coord),
	Nested(Vec<Coords>),
}

impl Coords {
	/// Parses a coordinate array of nesting `depth`, recording every leaf in `extent`.
	///
	/// Leaves need at least two numbers; values after the third are ignored.
	pub fn parse(raw: &[u8], depth: usize, extent: &mut Extent) -> Result<Coords> {
		let items = parse_raw_array(raw).context("coordinates must be an array")?;
		if depth == 0 {
			ensure!(items.len() >= 2, "a position needs at least two values, got {}", items.len());
			let mut coord = [0.0; 3];
			let dims = items.len().min(3);
			for (value, item) in coord.iter_mut().zip(&items) {
				*value = parse_raw_f64(item).context("position values must be numbers")?;
			}
			extent.include(&coord, dims);
			Ok(Coords::Leaf(coord))
		} else {
			items
				.into_iter()
				.map(|item| Coords::parse(item, depth - 1, extent))
				.collect::<Result<Vec<_>>>()
				.map(Coords::Nested)
		}
	}

	/// Writes the tree with `dims` values per leaf.
	pub fn write(&self, output: &mut Vec<u8>, dims: usize) -> Result<()> {
		match self {
			Coords::Leaf(coord) => output.write_coord(coord, dims),
			Coords::Nested(children) => {
				output.write_len(children.len())?;
				children.iter().try_for_each(|child| child.write(output, dims))
			}
		}
	}

	/// Reads a tree of nesting `depth` with `dims` values per leaf.
	pub fn read(reader: &mut SliceReader, depth: usize, dims: usize) -> Result<Coords> {
		if depth == 0 {
			return Ok(Coords::Leaf(reader.read_coord(dims)?));
		}
		let count = reader.read_u32()?;
		// every child takes at least four bytes, which bounds the allocation
		ensure!(count <= reader.remaining(), "count {count} exceeds the remaining payload");
		(0..count)
			.map(|_| Coords::read(reader, depth - 1, dims))
			.collect::<Result<Vec<_>>>()
			.map(Coords::Nested)
	}

	pub fn as_leaf(&self) -> Option<&Coord> {
		match self {
			Coords::Leaf(coord) => Some(coord),
			Coords::Nested(_) => None,
		}
	}

	pub fn children(&self) -> &[Coords] {
		match self {
			Coords::Leaf(_) => &[],
			Coords::Nested(children) => children,
		}
	}

	/// The leaves of a depth-1 tree, e.g. one ring of a polygon.
	pub fn leaves(&self) -> Option<Vec<Coord>> {
		self.children().iter().map(|child| child.as_leaf().copied()).collect()
	}
}

/// Counts the leaves of a coordinate payload without materializing it.
pub fn count_positions(reader: &mut SliceReader, depth: usize, dims: usize) -> Result<usize> {
	if depth == 0 {
		reader.skip_coords(1, dims)?;
		return Ok(1);
	}
	let count = reader.read_u32()?;
	if depth == 1 {
		reader.skip_coords(count, dims)?;
		return Ok(count);
	}
	let mut total = 0;
	for _ in 0..count {
		total += count_positions(reader, depth - 1, dims)?;
	}
	Ok(total)
}

/// Running per-axis minimum and maximum.
///
/// Starts at `+inf`/`-inf`, so an extent that saw nothing keeps those values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
	pub min: Coord,
	pub max: Coord,
	dims: usize,
}

impl Default for Extent {
	fn default() -> Self {
		Extent {
			min: [f64::INFINITY; 3],
			max: [f64::NEG_INFINITY; 3],
			dims: 0,
		}
	}
}

impl Extent {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a coordinate with `dims` meaningful values. The extent takes the dimensions of
	/// the most recent coordinate.
	pub fn include(&mut self, coord: &Coord, dims: usize) {
		self.extend(coord, coord, dims);
		self.dims = dims;
	}

	/// Adds another bbox. The extent takes the largest dimensions seen so far.
	pub fn union(&mut self, min: &Coord, max: &Coord, dims: usize) {
		self.extend(min, max, dims);
		self.dims = self.dims.max(dims);
	}

	fn extend(&mut self, min: &Coord, max: &Coord, dims: usize) {
		for axis in 0..dims.min(3) {
			self.min[axis] = self.min[axis].min(min[axis]);
			self.max[axis] = self.max[axis].max(max[axis]);
		}
	}

	/// 2 or 3. Defaults to 2 when nothing was seen.
	pub fn dims(&self) -> usize {
		self.dims.clamp(2, 3)
	}

	/// The `min` values followed by the `max` values, `dims` of each.
	pub fn rect_values(&self, dims: usize) -> Vec<f64> {
		let dims = dims.min(3);
		self.min[..dims].iter().chain(&self.max[..dims]).copied().collect()
	}
}
