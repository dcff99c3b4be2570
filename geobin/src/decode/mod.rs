//! Geobin objects to GeoJSON text.
//!
//! The emitter writes straight from the buffer: simple objects are expanded from their
//! bbox, complex objects are walked through their length-prefixed payload. Nothing is
//! materialized on the way.

mod simple;

pub(crate) use simple::{box_faces, rect_ring};

use crate::{
	coords::Coord,
	format::{BBoxShape, GeometryKind, SliceReader},
	object::{Components, ObjectRef},
	view::MAX_NESTING,
};
use anyhow::{Context, Result, ensure};
use geobin_core::json::write_json_string;
use log::debug;
use std::io::Write;

const UNKNOWN: &[u8] = br#"{"type":"Unknown"}"#;

impl ObjectRef<'_> {
	/// Appends the JSON form of this object to `output`.
	///
	/// Geometries become GeoJSON, strings become JSON strings and the empty object
	/// becomes `null`.
	///
	/// # Errors
	///
	/// Returns an error if the buffer is shorter than the structure it declares. `output`
	/// may then hold a partial document.
	pub fn write_json(&self, output: &mut Vec<u8>) -> Result<()> {
		if self.is_empty() {
			output.extend_from_slice(b"null");
			return Ok(());
		}
		let components = self.try_components()?;
		if components.tail.is_geometry() {
			write_geometry(&components, output, 0)
		} else {
			write_json_string(output, components.body);
			Ok(())
		}
	}

	/// # Errors
	///
	/// Returns an error if the buffer is shorter than the structure it declares.
	pub fn try_to_json(&self) -> Result<String> {
		let mut output = Vec::with_capacity(self.len() * 2);
		self.write_json(&mut output)?;
		String::from_utf8(output).context("emitted JSON is not valid UTF-8")
	}

	/// The JSON form of this object. Damaged buffers render as `{"type":"Unknown"}`.
	pub fn to_json(&self) -> String {
		self.try_to_json().unwrap_or_else(|error| {
			debug!("cannot render object as JSON: {error:#}");
			String::from_utf8_lossy(UNKNOWN).into_owned()
		})
	}

	/// GeoJSON for geometries, the literal text for strings and `""` for the empty object.
	pub fn to_text(&self) -> String {
		if self.is_geometry() {
			return self.to_json();
		}
		match self.try_components() {
			Ok(components) => String::from_utf8_lossy(components.body).into_owned(),
			Err(error) => {
				debug!("cannot render object as text: {error:#}");
				String::new()
			}
		}
	}
}

fn write_geometry(components: &Components, output: &mut Vec<u8>, nesting: usize) -> Result<()> {
	ensure!(nesting <= MAX_NESTING, "objects are nested deeper than {MAX_NESTING} levels");
	let Some(shape) = components.tail.shape() else {
		output.extend_from_slice(UNKNOWN);
		return Ok(());
	};
	if components.tail.is_complex() {
		write_complex(components, shape, output, nesting)
	} else {
		write_simple(components.bbox, shape, output)
	}
}

fn write_simple(bbox: &[u8], shape: BBoxShape, output: &mut Vec<u8>) -> Result<()> {
	let mut reader = SliceReader::new(bbox);
	let dims = shape.dims();
	let min = reader.read_coord(dims)?;
	match shape {
		BBoxShape::Point2D | BBoxShape::Point3D => {
			output.extend_from_slice(br#"{"type":"Point","coordinates":"#);
			write_coord(output, &min, dims)?;
		}
		BBoxShape::Rect2D => {
			let max = reader.read_coord(dims)?;
			output.extend_from_slice(br#"{"type":"Polygon","coordinates":["#);
			write_ring(output, &rect_ring(&min, &max), dims)?;
			output.push(b']');
		}
		BBoxShape::Rect3D => {
			let max = reader.read_coord(dims)?;
			output.extend_from_slice(br#"{"type":"MultiPolygon","coordinates":["#);
			for (index, face) in box_faces(&min, &max).iter().enumerate() {
				if index > 0 {
					output.push(b',');
				}
				output.push(b'[');
				write_ring(output, face, dims)?;
				output.push(b']');
			}
			output.push(b']');
		}
	}
	output.push(b'}');
	Ok(())
}

fn write_complex(components: &Components, shape: BBoxShape, output: &mut Vec<u8>, nesting: usize) -> Result<()> {
	let Some(head) = components.head() else {
		output.extend_from_slice(UNKNOWN);
		return Ok(());
	};
	let members = components.members()?;
	let mut reader = SliceReader::new(components.payload()?);
	let dims = shape.dims();

	write!(output, r#"{{"type":"{}""#, head.kind)?;
	if head.exported_bbox {
		output.extend_from_slice(br#","bbox":["#);
		let mut bbox = SliceReader::new(components.bbox);
		for index in 0..shape.value_count() {
			if index > 0 {
				output.push(b',');
			}
			write_f64(output, bbox.read_f64()?)?;
		}
		output.push(b']');
	}

	if let Some(depth) = head.kind.coordinate_depth() {
		output.extend_from_slice(br#","coordinates":"#);
		write_coordinates(&mut reader, output, depth, dims)?;
	} else if let Some(member) = head.kind.collection_member() {
		write!(output, r#","{member}":["#)?;
		for index in 0..reader.read_u32()? {
			if index > 0 {
				output.push(b',');
			}
			let child = reader.read_len_prefixed()?;
			write_child(child, output, nesting)?;
		}
		output.push(b']');
	} else if head.kind == GeometryKind::Feature {
		output.extend_from_slice(br#","geometry":"#);
		let geometry = reader.read_len_prefixed()?;
		write_child(geometry, output, nesting)?;
	}

	if let Some(members) = members {
		if members.len() > 2 && members.starts_with(b"{") && members.ends_with(b"}") {
			output.push(b',');
			output.extend_from_slice(&members[1..members.len() - 1]);
		}
	}
	output.push(b'}');
	Ok(())
}

fn write_child(data: &[u8], output: &mut Vec<u8>, nesting: usize) -> Result<()> {
	let components = ObjectRef::wrap(data).try_components()?;
	if components.tail.is_geometry() {
		write_geometry(&components, output, nesting + 1)
	} else {
		output.extend_from_slice(UNKNOWN);
		Ok(())
	}
}

fn write_coordinates(reader: &mut SliceReader, output: &mut Vec<u8>, depth: usize, dims: usize) -> Result<()> {
	if depth == 0 {
		return write_coord(output, &reader.read_coord(dims)?, dims);
	}
	output.push(b'[');
	for index in 0..reader.read_u32()? {
		if index > 0 {
			output.push(b',');
		}
		write_coordinates(reader, output, depth - 1, dims)?;
	}
	output.push(b']');
	Ok(())
}

fn write_ring(output: &mut Vec<u8>, ring: &[Coord], dims: usize) -> Result<()> {
	output.push(b'[');
	for (index, coord) in ring.iter().enumerate() {
		if index > 0 {
			output.push(b',');
		}
		write_coord(output, coord, dims)?;
	}
	output.push(b']');
	Ok(())
}

fn write_coord(output: &mut Vec<u8>, coord: &Coord, dims: usize) -> Result<()> {
	output.push(b'[');
	for (index, value) in coord[..dims].iter().enumerate() {
		if index > 0 {
			output.push(b',');
		}
		write_f64(output, *value)?;
	}
	output.push(b']');
	Ok(())
}

/// Shortest decimal form without exponent, e.g. `1`, `-0.5` or `1000000000000000000000`.
fn write_f64(output: &mut Vec<u8>, value: f64) -> Result<()> {
	write!(output, "{value}")?;
	Ok(())
}
