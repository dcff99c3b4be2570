//! GeoJSON text to geobin objects.
//!
//! The encoder walks the JSON once, locating members as raw slices and recursing into
//! coordinates, collection children and feature geometries. Precomputed bboxes, the
//! rectangle optimization and the members block are applied on the way back up.

mod bbox;
mod members;
mod rect;

use crate::{
	config::EncoderConfig,
	coords::{Coords, Extent},
	format::{BBoxShape, BufferWriter, GeometryKind, Head, Tail},
	object::{Object, ObjectRef},
};
use anyhow::{Context, Result, bail, ensure};
use bbox::{ResolvedBBox, parse_explicit_bbox};
use geobin_core::json::{RawObject, parse_raw_array, parse_raw_object};
use log::debug;
use members::build_members;
use rect::collapse_to_rect;

/// Encodes GeoJSON text into [`Object`]s.
///
/// # Examples
///
/// ```
/// use geobin::{Encoder, EncoderConfig, GeometryKind};
///
/// let encoder = Encoder::new(EncoderConfig::default().with_rect_optimization(false));
/// let object = encoder.encode(r#"{"type":"Polygon","coordinates":[[[0,0],[0,1],[1,1],[1,0],[0,0]]]}"#);
/// assert_eq!(object.geometry_type(), GeometryKind::Polygon);
/// assert_eq!(object.position_count(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Encoder {
	config: EncoderConfig,
}

impl Encoder {
	pub fn new(config: EncoderConfig) -> Self {
		Encoder { config }
	}

	pub fn config(&self) -> &EncoderConfig {
		&self.config
	}

	/// Encodes `json`, returning the empty object if the input is not valid GeoJSON.
	pub fn encode(&self, json: &str) -> Object {
		self.try_encode(json).unwrap_or_else(|error| {
			debug!("rejecting GeoJSON input: {error:#}");
			Object::default()
		})
	}

	/// Encodes `json` and reports why invalid input was rejected.
	///
	/// # Errors
	///
	/// Returns an error for malformed JSON, a missing or unrecognized `"type"`, missing or
	/// malformed coordinates, an invalid collection child or feature geometry, and input
	/// nested deeper than [`EncoderConfig::max_depth`].
	pub fn try_encode(&self, json: &str) -> Result<Object> {
		self.try_encode_bytes(json.as_bytes())
	}

	/// Like [`try_encode`](Self::try_encode), for JSON given as bytes.
	pub fn try_encode_bytes(&self, json: &[u8]) -> Result<Object> {
		Ok(Object::wrap(self.encode_value(json, 0)?))
	}

	fn encode_value(&self, raw: &[u8], depth: usize) -> Result<Vec<u8>> {
		ensure!(
			depth <= self.config.max_depth,
			"nesting exceeds the maximum depth of {}",
			self.config.max_depth
		);

		let object = parse_raw_object(raw).context("GeoJSON objects must be JSON objects")?;
		let type_name = object.get_string("type").context("missing or non-string \"type\"")?;
		let kind = GeometryKind::from_type_name(&type_name);
		let explicit_bbox = parse_explicit_bbox(object.get("bbox"));

		match kind {
			GeometryKind::Unknown => bail!("unrecognized type \"{type_name}\""),
			GeometryKind::Point => encode_point(&object, explicit_bbox),
			GeometryKind::GeometryCollection | GeometryKind::FeatureCollection => {
				self.encode_collection(kind, &object, explicit_bbox, depth)
			}
			GeometryKind::Feature => self.encode_feature(&object, explicit_bbox, depth),
			_ => self.encode_coordinates(kind, &object, explicit_bbox),
		}
	}

	fn encode_coordinates(&self, kind: GeometryKind, object: &RawObject, explicit: Option<Vec<f64>>) -> Result<Vec<u8>> {
		let depth = kind
			.coordinate_depth()
			.with_context(|| format!("{kind} has no coordinates"))?;
		let raw = object.get("coordinates").with_context(|| format!("{kind} without \"coordinates\""))?;

		let mut extent = Extent::new();
		let coords = Coords::parse(raw, depth, &mut extent).with_context(|| format!("invalid {kind} coordinates"))?;

		let bbox = ResolvedBBox::resolve(explicit, &extent);
		let dims = bbox.dims();

		if !bbox.exported && self.config.rect_optimization {
			if let Some(rect) = collapse_to_rect(kind, &coords, dims, &extent) {
				return Ok(rect.into_binary());
			}
		}

		let mut data = bbox.bytes;
		data.push(Head::new(kind, false, bbox.exported).to_byte());
		coords.write(&mut data, dims)?;
		data.push(Tail::complex(bbox.shape).to_byte());
		Ok(data)
	}

	fn encode_collection(
		&self,
		kind: GeometryKind,
		object: &RawObject,
		explicit: Option<Vec<f64>>,
		depth: usize,
	) -> Result<Vec<u8>> {
		let member = kind
			.collection_member()
			.with_context(|| format!("{kind} is not a collection"))?;
		let raw = object.get(member).with_context(|| format!("{kind} without \"{member}\""))?;
		let items = parse_raw_array(raw).with_context(|| format!("\"{member}\" must be an array"))?;

		let mut extent = Extent::new();
		let mut children = Vec::with_capacity(items.len());
		for (index, item) in items.into_iter().enumerate() {
			let child = self
				.encode_value(item, depth + 1)
				.with_context(|| format!("invalid item {index} in \"{member}\""))?;
			let child_ref = ObjectRef::wrap(&child);
			let (min, max) = child_ref.rect();
			extent.union(&min, &max, child_ref.dims());
			children.push(child);
		}

		let bbox = ResolvedBBox::resolve(explicit, &extent);
		let mut data = bbox.bytes;
		data.push(Head::new(kind, false, bbox.exported).to_byte());
		data.write_len(children.len())?;
		for child in &children {
			data.write_len_prefixed(child)?;
		}
		data.push(Tail::complex(bbox.shape).to_byte());
		Ok(data)
	}

	fn encode_feature(&self, object: &RawObject, explicit: Option<Vec<f64>>, depth: usize) -> Result<Vec<u8>> {
		let raw = object.get("geometry").context("Feature without \"geometry\"")?;
		let geometry = self
			.encode_value(raw, depth + 1)
			.context("invalid Feature geometry")?;

		let (shape, bbox_bytes, exported) = match explicit {
			Some(values) => {
				let bbox = ResolvedBBox::from_values(&values, true);
				(bbox.shape, bbox.bytes, true)
			}
			None => {
				let shape = ObjectRef::wrap(&geometry)
					.bbox_shape()
					.context("Feature geometry is not a geometry")?;
				(shape, geometry[..shape.byte_len()].to_vec(), false)
			}
		};

		let members = build_members(object.get("id"), object.get("properties"));

		let mut data = bbox_bytes;
		data.push(Head::new(GeometryKind::Feature, members.is_some(), exported).to_byte());
		if let Some(members) = members {
			data.write_len_prefixed(&members)?;
		}
		data.write_len_prefixed(&geometry)?;
		data.push(Tail::complex(shape).to_byte());
		Ok(data)
	}
}

/// A point without a bbox becomes a simple point object. With a bbox it is stored as a
/// complex object so that the bbox survives.
fn encode_point(object: &RawObject, explicit: Option<Vec<f64>>) -> Result<Vec<u8>> {
	let raw = object.get("coordinates").context("Point without \"coordinates\"")?;
	let mut extent = Extent::new();
	let coords = Coords::parse(raw, 0, &mut extent).context("invalid Point coordinates")?;

	let Some(values) = explicit else {
		let shape = BBoxShape::new(extent.dims() == 3, false);
		return Ok(Object::new_simple(shape, &extent.min[..extent.dims()]).into_binary());
	};

	let bbox = ResolvedBBox::from_values(&values, true);
	let mut data = bbox.bytes.clone();
	data.push(Head::new(GeometryKind::Point, false, true).to_byte());
	coords.write(&mut data, bbox.dims())?;
	data.push(Tail::complex(bbox.shape).to_byte());
	Ok(data)
}
