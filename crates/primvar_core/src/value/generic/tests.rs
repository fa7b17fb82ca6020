use super::GenericValue;
use crate::value::{Color3f, Dictionary, Float3, Half, Matrix3d, Point3f, Quatd, Token, TypeDescriptor, TypeId};

#[test]
fn empty_value_reports_sentinels() {
	let value = GenericValue::empty();
	assert!(value.is_empty());
	assert_eq!(value.type_id(), TypeId::INVALID);
	assert_eq!(value.underlying_type_id(), TypeId::INVALID);
	assert_eq!(value.dimensionality(), -1);
	assert_eq!(value.component_count(), 0);
	assert_eq!(value.type_name(), "");
	assert_eq!(value.underlying_type_name(), "");
	assert_eq!(value.descriptor(), TypeDescriptor::INVALID);
}

#[test]
fn round_trips_are_bit_exact() {
	fn check<T: crate::value::ValueType + PartialEq + std::fmt::Debug>(sample: T) {
		let value = GenericValue::new(sample.clone());
		assert_eq!(value.downcast_ref::<T>(), Some(&sample), "{}", value.type_name());
	}

	check(true);
	check(7_u8);
	check(Half::from_bits(0x3555));
	check(-3_i32);
	check(-4_i64);
	check(5_u32);
	check(u64::MAX);
	check([1_i32, 2, 3, 4]);
	check([0.1_f32, 0.2]);
	check([f64::MIN_POSITIVE, -0.0, 1e300]);
	check(Quatd::new([0.0, 0.0, 1.0], 0.0));
	check(Matrix3d::IDENTITY);
	check(Point3f::new(1.0, 2.0, 3.0));
	check(Token::new("Xform"));
	check(String::from("hello"));
	check(vec![Color3f::new(1.0, 0.5, 0.25)]);
	check(vec![vec![1.0_f32], vec![2.0, 3.0]]);
}

#[test]
fn negative_zero_keeps_sign_bit() {
	let value = GenericValue::new(-0.0_f32);
	let stored = value.downcast_ref::<f32>().copied().expect("f32 payload");
	assert_eq!(stored.to_bits(), (-0.0_f32).to_bits());
}

#[test]
fn reassignment_rebinds_type() {
	let mut value = GenericValue::new(1.3_f32);
	assert_eq!(value.type_name(), "float");
	value.set(1.3_f64);
	assert_eq!(value.type_name(), "double");
	assert!(value.downcast_ref::<f32>().is_none());
	assert_eq!(value.downcast_ref::<f64>(), Some(&1.3));
}

#[test]
fn metadata_follows_payload_shape() {
	let points = GenericValue::new(vec![Point3f::default(); 4]);
	assert_eq!(points.type_name(), "point3f[]");
	assert_eq!(points.underlying_type_name(), "float3[]");
	assert_eq!(points.dimensionality(), 1);
	assert_eq!(points.component_count(), 3);
	assert_eq!(points.array_len(), Some(4));

	let nested = GenericValue::new(vec![vec![1_i32], vec![]]);
	assert_eq!(nested.type_name(), "int[][]");
	assert_eq!(nested.dimensionality(), 2);
	assert_eq!(nested.array_len(), Some(2));

	assert_eq!(GenericValue::new(2.5_f64).array_len(), None);
}

#[test]
fn clones_do_not_share_state() {
	let original = GenericValue::new(vec![1_i32, 2, 3]);
	let mut copy = original.clone();
	copy.set(vec![9_i32]);
	assert_eq!(original.downcast_ref::<Vec<i32>>(), Some(&vec![1, 2, 3]));
}

#[test]
fn underlying_copy_reinterprets_roles() {
	let value = GenericValue::new(vec![vec![Point3f::new(1.0, 2.0, 3.0)]]);
	let plain = value.to_underlying();
	assert_eq!(plain.type_name(), "float3[][]");
	assert_eq!(plain.downcast_ref::<Vec<Vec<Float3>>>(), Some(&vec![vec![[1.0, 2.0, 3.0]]]));
}

#[test]
fn dictionaries_nest_values() {
	let mut dict = Dictionary::new();
	dict.insert("a".into(), GenericValue::new(1.3_f64));
	let value = GenericValue::from(dict.clone());
	assert_eq!(value.type_name(), "dictionary");
	assert_eq!(value.downcast_ref::<Dictionary>(), Some(&dict));
}

#[test]
fn str_literals_become_strings() {
	let value = GenericValue::from("text");
	assert_eq!(value.type_name(), "string");
}
