//! Resolution of the bbox written at the start of an encoded geometry.

use crate::{coords::Extent, format::BBoxShape};
use byteorder::{ByteOrder, LittleEndian};
use geobin_core::json::{parse_raw_array, parse_raw_f64};
use log::trace;

/// The bbox region of an object under construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedBBox {
	pub shape: BBoxShape,
	pub bytes: Vec<u8>,
	/// The bbox came from the source and is echoed on output.
	pub exported: bool,
}

impl ResolvedBBox {
	pub fn from_values(values: &[f64], exported: bool) -> Self {
		let mut bytes = vec![0; values.len() * 8];
		for (index, value) in values.iter().enumerate() {
			LittleEndian::write_f64(&mut bytes[index * 8..], *value);
		}
		ResolvedBBox {
			shape: BBoxShape::rect(values.len() / 2),
			bytes,
			exported,
		}
	}

	/// Uses the given bbox if there is one, otherwise the accumulated extent.
	pub fn resolve(explicit: Option<Vec<f64>>, extent: &Extent) -> Self {
		match explicit {
			Some(values) => ResolvedBBox::from_values(&values, true),
			None => ResolvedBBox::from_values(&extent.rect_values(extent.dims()), false),
		}
	}

	/// Dimensions that coordinates are stored with.
	pub fn dims(&self) -> usize {
		self.shape.dims()
	}
}

/// Reads a `"bbox"` member.
///
/// Returns 4 or 6 values. Arrays longer than 6 keep the first three values of each half.
/// Missing, odd-length, too short or non-numeric arrays count as absent.
pub fn parse_explicit_bbox(raw: Option<&[u8]>) -> Option<Vec<f64>> {
	let raw = raw?;
	let values = parse_raw_array(raw)
		.ok()?
		.into_iter()
		.map(|item| parse_raw_f64(item).ok())
		.collect::<Option<Vec<f64>>>();

	let Some(values) = values.filter(|values| values.len() >= 4 && values.len() % 2 == 0) else {
		trace!("ignoring invalid bbox {}", String::from_utf8_lossy(raw));
		return None;
	};

	if values.len() > 6 {
		let half = values.len() / 2;
		Some(values[..3].iter().chain(&values[half..half + 3]).copied().collect())
	} else {
		Some(values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("[1,2,3,4]", Some(vec![1.0, 2.0, 3.0, 4.0]))]
	#[case("[1,2,3,4,5,6]", Some(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]))]
	#[case("[1,2,3,4,5,6,7,8]", Some(vec![1.0, 2.0, 3.0, 5.0, 6.0, 7.0]))]
	#[case("[1,2,3,4,5,6,7,8,9,10]", Some(vec![1.0, 2.0, 3.0, 6.0, 7.0, 8.0]))]
	#[case("[1,2,3]", None)]
	#[case("[1,2,3,4,5]", None)]
	#[case("[1,2]", None)]
	#[case("[1,2,\"3\",4]", None)]
	#[case("{}", None)]
	#[case("null", None)]
	fn test_parse_explicit_bbox(#[case] text: &str, #[case] expected: Option<Vec<f64>>) {
		assert_eq!(parse_explicit_bbox(Some(text.as_bytes())), expected);
	}

	#[test]
	fn test_resolve() {
		let mut extent = Extent::new();
		extent.include(&[1.0, 2.0, 3.0], 3);

		let computed = ResolvedBBox::resolve(None, &extent);
		assert_eq!(computed.shape, BBoxShape::Rect3D);
		assert!(!computed.exported);
		assert_eq!(computed.bytes.len(), 48);

		let explicit = ResolvedBBox::resolve(Some(vec![0.0, 0.0, 9.0, 9.0]), &extent);
		assert_eq!(explicit.shape, BBoxShape::Rect2D);
		assert_eq!(explicit.dims(), 2);
		assert!(explicit.exported);
		assert_eq!(&explicit.bytes[16..24], &9.0f64.to_le_bytes());
	}
}
