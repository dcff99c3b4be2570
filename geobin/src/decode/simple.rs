//! Corner rings re-derived from the bbox of simple rect and box objects.

use crate::coords::Coord;

/// Corners of a face, `true` picking the maximum of an axis.
type Face = [[bool; 3]; 5];

/// The faces of a box in the order bottom, north, south, west, east, top.
const BOX_CORNERS: [Face; 6] = {
	const F: bool = false;
	const T: bool = true;
	[
		[[F, F, F], [T, F, F], [T, T, F], [F, T, F], [F, F, F]],
		[[F, T, F], [T, T, F], [T, T, T], [F, T, T], [F, T, F]],
		[[F, F, F], [T, F, F], [T, F, T], [F, F, T], [F, F, F]],
		[[F, F, F], [F, T, F], [F, T, T], [F, F, T], [F, F, F]],
		[[T, F, F], [T, T, F], [T, T, T], [T, F, T], [T, F, F]],
		[[F, F, T], [T, F, T], [T, T, T], [F, T, T], [F, F, T]],
	]
};

/// The closed ring of a 2D rect, counter-clockwise from the minimum corner.
pub(crate) fn rect_ring(min: &Coord, max: &Coord) -> [Coord; 5] {
	[
		[min[0], min[1], 0.0],
		[max[0], min[1], 0.0],
		[max[0], max[1], 0.0],
		[min[0], max[1], 0.0],
		[min[0], min[1], 0.0],
	]
}

/// The six closed face rings of a 3D box.
pub(crate) fn box_faces(min: &Coord, max: &Coord) -> [[Coord; 5]; 6] {
	BOX_CORNERS.map(|face| face.map(|corner| [0, 1, 2].map(|axis| if corner[axis] { max[axis] } else { min[axis] })))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn test_rect_ring() {
		assert_eq!(
			rect_ring(&[0.0, 1.0, 0.0], &[2.0, 3.0, 0.0]),
			[
				[0.0, 1.0, 0.0],
				[2.0, 1.0, 0.0],
				[2.0, 3.0, 0.0],
				[0.0, 3.0, 0.0],
				[0.0, 1.0, 0.0]
			]
		);
	}

	#[test]
	fn test_box_faces() {
		let faces = box_faces(&[0.0, 1.0, 2.0], &[3.0, 4.0, 5.0]);
		// bottom and top
		assert!(faces[0].iter().all(|p| p[2] == 2.0));
		assert!(faces[5].iter().all(|p| p[2] == 5.0));
		// north and south
		assert!(faces[1].iter().all(|p| p[1] == 4.0));
		assert!(faces[2].iter().all(|p| p[1] == 1.0));
		// west and east
		assert!(faces[3].iter().all(|p| p[0] == 0.0));
		assert!(faces[4].iter().all(|p| p[0] == 3.0));
		for face in faces {
			assert_eq!(face[0], face[4]);
		}
	}
}
