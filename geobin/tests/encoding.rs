use geobin::{AsObjectRef, Encoder, EncoderConfig, GeometryKind, Object, ObjectRef};
use pretty_assertions::assert_eq;
use rstest::rstest;

const SQUARE: &str = r#"{"type":"Polygon","coordinates":[[[0,0],[0,10],[10,10],[10,0],[0,0]]]}"#;
const DIAMOND: &str = r#"{"type":"Polygon","coordinates":[[[5,0],[10,5],[5,10],[0,5],[5,0]]]}"#;

#[rstest]
#[case(r#"{"type":"Point","coordinates":[10,10]}"#)]
#[case(r#"{"type":"Point","coordinates":[10,10],"bbox":[-10,-10,100,100]}"#)]
#[case(r#"{"type":"LineString","coordinates":[[1,2,3],[4,5,6]]}"#)]
#[case(r#"{"type":"MultiLineString","coordinates":[[[0,0],[1,1]],[[2,2],[3,3]]]}"#)]
#[case(SQUARE)]
#[case(DIAMOND)]
#[case(r#"{"type":"MultiPolygon","coordinates":[[[[0,0,0],[1,0,0],[1,1,0],[0,1,0],[0,0,0]]]]}"#)]
#[case(r#"{"type":"Feature","id":1,"properties":{"a":[1,2]},"geometry":{"type":"MultiPoint","coordinates":[[1,1]]}}"#)]
#[case(r#"{"type":"FeatureCollection","features":[{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]}},{"type":"Feature","properties":null,"geometry":{"type":"Point","coordinates":[3,4]}}]}"#)]
#[case(r#"{"type":"GeometryCollection","bbox":[0,0,9,9],"geometries":[{"type":"Point","coordinates":[1,2]}]}"#)]
fn encoding_is_idempotent(#[case] json: &str) {
	let first = Object::from_json(json);
	assert!(first.is_geometry());
	let second = Object::from_json(&first.to_json());
	assert_eq!(second, first);
}

#[test]
fn axis_aligned_polygon_collapses_to_rect() {
	let object = Object::from_json(SQUARE);
	assert_eq!(object, Object::new_rect_2d(0.0, 0.0, 10.0, 10.0));
	assert_eq!(object.rect(), ([0.0, 0.0, 0.0], [10.0, 10.0, 0.0]));
	assert_eq!(object.geometry_type(), GeometryKind::Polygon);
	assert!(!object.as_object_ref().is_complex());
}

#[test]
fn diamond_is_kept_as_polygon() {
	let object = Object::from_json(DIAMOND);
	assert_eq!(object.geometry_type(), GeometryKind::Polygon);
	assert!(object.as_object_ref().is_complex());
	assert_eq!(object.rect(), ([0.0, 0.0, 0.0], [10.0, 10.0, 0.0]));
	assert_eq!(object.to_json(), DIAMOND);
}

#[rstest]
#[case(r#"{"type":"Polygon","coordinates":[[[0,0],[0,10],[0,10],[0,0],[0,0]]]}"#)]
#[case(r#"{"type":"Polygon","coordinates":[[[3,3],[3,3],[3,3],[3,3],[3,3]]]}"#)]
fn polygon_without_area_keeps_its_ring(#[case] json: &str) {
	let object = Object::from_json(json);
	assert!(object.as_object_ref().is_complex());
	assert_eq!(object.to_json(), json);
}

#[test]
fn rect_optimization_can_be_disabled() {
	let encoder = Encoder::new(EncoderConfig::default().with_rect_optimization(false));
	let object = encoder.encode(SQUARE);
	assert!(object.as_object_ref().is_complex());
	assert_eq!(object.to_json(), SQUARE);
	assert_eq!(object.rect(), Object::from_json(SQUARE).rect());
}

#[test]
fn explicit_bbox_takes_precedence() {
	let exported = Object::from_json(r#"{"type":"Point","coordinates":[10,10],"bbox":[-10,-10,100,100]}"#);
	assert!(exported.to_json().contains(r#""bbox":[-10,-10,100,100]"#));
	assert_eq!(exported.rect(), ([-10.0, -10.0, 0.0], [100.0, 100.0, 0.0]));

	let plain = Object::from_json(r#"{"type":"Point","coordinates":[10,10]}"#);
	assert!(!plain.to_json().contains("bbox"));
	assert_eq!(plain.rect(), ([10.0, 10.0, 0.0], [10.0, 10.0, 0.0]));

	let odd = Object::from_json(r#"{"type":"Point","coordinates":[10,10],"bbox":[1,2,3]}"#);
	assert_eq!(odd, plain);
}

#[rstest]
#[case(r#"{"type":"Point","coordinates":[1,2,3]}"#, 3)]
#[case(r#"{"type":"LineString","coordinates":[[1,2,3],[4,5,6]]}"#, 3)]
#[case(r#"{"type":"Point","coordinates":[1,2]}"#, 2)]
#[case(r#"{"type":"MultiPoint","coordinates":[[1,2],[4,5]]}"#, 2)]
fn dimensions_follow_the_coordinates(#[case] json: &str, #[case] dims: usize) {
	assert_eq!(Object::from_json(json).dims(), dims);
}

#[test]
fn strings_have_no_dimensions() {
	let text = Object::new_string("hello");
	assert_eq!(text.dims(), 0);
	assert!(!text.is_geometry());
	assert_eq!(text.to_text(), "hello");
}

#[test]
fn position_count_sums_all_rings() {
	let object = Object::from_json(
		r#"{"type":"MultiPolygon","coordinates":[[[[0,0],[0,1],[1,1],[1,0],[0,0]]],[[[2,2],[2,3],[3,3],[3,2],[2,2]]]]}"#,
	);
	assert_eq!(object.position_count(), 10);
	assert_eq!(Object::new_rect_2d(0.0, 0.0, 1.0, 1.0).position_count(), 2);
	assert_eq!(Object::new_point_3d(0.0, 0.0, 1.0).position_count(), 1);
}

#[rstest]
#[case(b"")]
#[case(b"x")]
#[case(b"a longer payload \x00\xff with binary bytes")]
fn ex_data_round_trips(#[case] data: &[u8]) {
	let object = Object::from_json(r#"{"type":"LineString","coordinates":[[0,0],[3,4]]}"#);
	let edited = object.set_ex_data(data);
	assert_eq!(edited.ex_data(), data);
	assert_eq!(edited.rect(), object.rect());
	assert_eq!(edited.geometry_type(), object.geometry_type());
	assert_eq!(edited.as_binary().len(), object.as_binary().len() + data.len() + if data.is_empty() { 0 } else { 4 });

	let cleared = edited.set_ex_data(b"");
	assert_eq!(cleared, object);
}

#[test]
fn ex_data_on_strings() {
	let text = Object::new_string("label").set_ex_data(b"meta");
	assert_eq!(text.ex_data(), b"meta");
	assert_eq!(text.to_text(), "label");
	assert_eq!(text.set_ex_data(b""), Object::new_string("label"));
}

#[test]
fn members_are_stored_minified() {
	let feature = Object::from_json(
		r#"{ "type" : "Feature", "properties" : { "name" : "x y" }, "id" : 3,
			"geometry" : { "type" : "Point", "coordinates" : [ 1, 2 ] } }"#,
	);
	assert_eq!(feature.members(), Some(&br#"{"id":3,"properties":{"name":"x y"}}"#[..]));
	assert_eq!(
		feature.to_json(),
		r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"id":3,"properties":{"name":"x y"}}"#
	);
}

#[rstest]
#[case(r#"{"type":"Bogus"}"#)]
#[case(r#"{"coordinates":[1,2]}"#)]
#[case(r#"{"type":"Point"}"#)]
#[case(r#"{"type":"Feature"}"#)]
#[case(r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]},{"type":"Bogus"}]}"#)]
#[case("not json")]
#[case(r#"{"type":"Point","coordinates":[+1,2]}"#)]
#[case(r#"{"type":"Point","coordinates":[1]}"#)]
fn invalid_input_is_not_a_geometry(#[case] json: &str) {
	let object = Object::from_json(json);
	assert!(!object.is_geometry());
	assert!(Encoder::default().try_encode(json).is_err());
}

#[test]
fn unknown_kind_is_rendered_as_unknown() {
	let mut data = vec![0; 16];
	data.push(0xE0);
	data.push(9);
	let object = ObjectRef::wrap(&data);
	assert!(object.is_geometry());
	assert_eq!(object.geometry_type(), GeometryKind::Unknown);
	assert_eq!(object.to_json(), r#"{"type":"Unknown"}"#);
}

#[test]
fn deeply_nested_input_is_rejected() {
	let depth = 200_000;
	let json = format!(
		r#"{{"type":"Point","coordinates":[1,2],"x":{}{}}}"#,
		"[".repeat(depth),
		"]".repeat(depth)
	);
	assert!(Encoder::default().try_encode(&json).is_err());
	assert!(!Object::from_json(&json).is_geometry());

	let shallow = format!(r#"{{"type":"Point","coordinates":[1,2],"x":{}{}}}"#, "[".repeat(100), "]".repeat(100));
	assert_eq!(Object::from_json(&shallow), Object::new_point_2d(1.0, 2.0));
}

#[test]
fn repeated_feature_members_take_the_last_value() {
	let feature = Object::from_json(
		r#"{"type":"Feature","id":1,"properties":{"a":1},"id":2,"properties":{"b":2},
			"geometry":{"type":"Point","coordinates":[0,0]},"geometry":{"type":"Point","coordinates":[5,6]}}"#,
	);
	assert_eq!(feature.members(), Some(&br#"{"id":2,"properties":{"b":2}}"#[..]));
	assert_eq!(feature.rect(), ([5.0, 6.0, 0.0], [5.0, 6.0, 0.0]));
}

#[rstest]
#[case("plain <b> & co", r#""plain <b> & co""#)]
#[case("line\n<b>", r#""line\n\u003cb\u003e""#)]
#[case("quote \" & more", r#""quote \" \u0026 more""#)]
#[case("sep\u{2028}", r#""sep\u2028""#)]
fn strings_render_as_json_literals(#[case] text: &str, #[case] expected: &str) {
	assert_eq!(Object::new_string(text).to_json(), expected);
}
