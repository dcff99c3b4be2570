//! Detection of polygons that are exactly an axis-aligned rectangle or box.

use crate::{
	coords::{Coord, Coords, Extent},
	format::GeometryKind,
	object::Object,
};

/// Faces of a box in the order bottom, north, south, west, east, top.
///
/// Each face lists its two free axes, then its fixed axis, and whether the fixed axis lies
/// on the maximum side of the box.
const BOX_FACES: [([usize; 3], bool); 6] = [
	([0, 1, 2], false),
	([0, 2, 1], true),
	([0, 2, 1], false),
	([1, 2, 0], false),
	([1, 2, 0], true),
	([0, 1, 2], true),
];

/// Returns a simple rect object if `coords` describe exactly the rectangle (for a 2D
/// `Polygon`) or box (for a 3D `MultiPolygon`) spanned by `extent`.
pub fn collapse_to_rect(kind: GeometryKind, coords: &Coords, dims: usize, extent: &Extent) -> Option<Object> {
	let (min, max) = (extent.min, extent.max);
	match (kind, dims) {
		(GeometryKind::Polygon, 2) => {
			let ring = single_ring(coords)?;
			is_axis_aligned_ring(&ring, [0, 1, 2]).then(|| Object::new_rect_2d(min[0], min[1], max[0], max[1]))
		}
		(GeometryKind::MultiPolygon, 3) => {
			let polygons = coords.children();
			if polygons.len() != BOX_FACES.len() {
				return None;
			}
			for (polygon, (axes, at_max)) in polygons.iter().zip(BOX_FACES) {
				let ring = single_ring(polygon)?;
				let plane = if at_max { max[axes[2]] } else { min[axes[2]] };
				if !is_axis_aligned_ring(&ring, axes) || ring[0][axes[2]] != plane || !covers_face(&ring, axes, extent) {
					return None;
				}
			}
			Some(Object::new_rect_3d(min[0], min[1], min[2], max[0], max[1], max[2]))
		}
		_ => None,
	}
}

fn single_ring(polygon: &Coords) -> Option<Vec<Coord>> {
	match polygon.children() {
		[ring] => ring.leaves(),
		_ => None,
	}
}

/// A closed ring of five points on a plane of constant `fixed`, whose edges alternate
/// between the two free axes and enclose a non-empty area. Either winding and any
/// starting corner qualify.
fn is_axis_aligned_ring(ring: &[Coord], [a, b, fixed]: [usize; 3]) -> bool {
	let [p0, p1, p2, p3, p4] = ring else {
		return false;
	};
	if p4[a] != p0[a] || p4[b] != p0[b] || ring.iter().any(|p| p[fixed] != p0[fixed]) {
		return false;
	}
	// opposite corners must differ on both axes, or the rect decodes to other vertices
	if p0[a] == p2[a] || p0[b] == p2[b] {
		return false;
	}
	let a_first = p0[a] == p1[a] && p1[b] == p2[b] && p2[a] == p3[a] && p3[b] == p0[b];
	let b_first = p0[b] == p1[b] && p1[a] == p2[a] && p2[b] == p3[b] && p3[a] == p0[a];
	a_first || b_first
}

/// Every corner of the extent's face on the free axes `a` and `b` appears in the ring.
fn covers_face(ring: &[Coord], [a, b, _]: [usize; 3], extent: &Extent) -> bool {
	let (min, max) = (extent.min, extent.max);
	[(min[a], min[b]), (max[a], min[b]), (max[a], max[b]), (min[a], max[b])]
		.iter()
		.all(|(ca, cb)| ring[..4].iter().any(|p| p[a] == *ca && p[b] == *cb))
}
