use std::thread;

use super::*;

#[test]
fn names_cover_every_depth() {
	assert_eq!(type_name(TypeId::encode(BaseType::Float, ArrayDepth::Scalar)), "float");
	assert_eq!(type_name(TypeId::encode(BaseType::Vector3h, ArrayDepth::Array)), "vector3h[]");
	assert_eq!(type_name(TypeId::encode(BaseType::Int, ArrayDepth::Array2)), "int[][]");
	assert_eq!(type_name(TypeId::encode(BaseType::Dictionary, ArrayDepth::Scalar)), "dictionary");
}

#[test]
fn unknown_id_yields_diagnostic() {
	let name = type_name(TypeId::from_raw(777));
	assert!(name.contains("777"), "diagnostic should embed id: {name}");
}

#[test]
fn reverse_lookup_matches_forward_lookup() {
	for info in registered_types() {
		assert_eq!(type_id_by_name(&info.name), Some(info.descriptor.type_id), "{}", info.name);
	}
	assert_eq!(type_id_by_name("float4x"), None);
}

#[test]
fn table_is_exhaustive() {
	assert_eq!(registered_types().len(), BaseType::ALL.len() * 3);
}

#[test]
fn descriptors_match_rust_types() {
	assert_eq!(descriptor_of::<f64>().type_id, TypeId::encode(BaseType::Double, ArrayDepth::Scalar));
	assert_eq!(descriptor_of::<Vec<Point3f>>().underlying_type_id, TypeId::encode(BaseType::Float3, ArrayDepth::Array));
	assert_eq!(descriptor_of::<Vec<Vec<f32>>>().array_depth, 2);
	assert_eq!(descriptor_of::<Matrix4d>().component_count, 16);
	assert_eq!(array_descriptor_of::<Color3f>(1), Some(descriptor_of::<Vec<Color3f>>()));
	assert_eq!(array_descriptor_of::<Color3f>(2), Some(descriptor_of::<Vec<Vec<Color3f>>>()));
}

#[test]
fn underlying_names_follow_roles() {
	let info = type_info(descriptor_of::<Vec<Normal3d>>().type_id).expect("registered");
	assert_eq!(info.name, "normal3d[]");
	assert_eq!(info.underlying_name, "double3[]");
	assert_eq!(info.element_size, 24);
}

#[test]
fn concurrent_first_lookups_agree() {
	let handles: Vec<_> = (0..8)
		.map(|_| thread::spawn(|| type_name(descriptor_of::<Texcoord2f>().type_id).into_owned()))
		.collect();
	for handle in handles {
		assert_eq!(handle.join().expect("lookup thread"), "texcoord2f");
	}
}

#[test]
fn take_value_moves_exact_payload_only() {
	let value = GenericValue::new(vec![1.0_f32, 2.0]);
	assert_eq!(Vec::<f32>::take_value(value.clone()), Some(vec![1.0, 2.0]));
	assert_eq!(Vec::<f64>::take_value(value.clone()), None);
	assert_eq!(f32::take_value(value), None);
	assert_eq!(f32::take_value(GenericValue::empty()), None);
}
