use super::{ArrayDepth, BaseType, TypeDescriptor, TypeId};

#[test]
fn encode_decode_is_identity_for_every_base_and_depth() {
	for &base in BaseType::ALL {
		for depth in ArrayDepth::ALL {
			let id = TypeId::encode(base, depth);
			assert_eq!(id.decode(), Some((base, depth)), "{base} at depth {}", depth.as_u8());
		}
	}
}

#[test]
fn no_two_base_depth_pairs_collide() {
	let mut seen = std::collections::HashSet::new();
	for &base in BaseType::ALL {
		for depth in ArrayDepth::ALL {
			assert!(seen.insert(TypeId::encode(base, depth)), "collision for {base}");
		}
	}
	assert_eq!(seen.len(), BaseType::ALL.len() * 3);
}

#[test]
fn combined_depth_bits_are_rejected() {
	let raw = BaseType::Float.raw() | TypeId::ARRAY_1D_BIT | TypeId::ARRAY_2D_BIT;
	assert_eq!(TypeId::from_raw(raw).decode(), None);
}

#[test]
fn unknown_base_is_rejected() {
	assert_eq!(TypeId::from_raw(999).decode(), None);
	assert_eq!(TypeId::INVALID.decode(), None);
	assert!(!TypeId::INVALID.is_valid());
}

#[test]
fn depth_bits_match_registered_layout() {
	assert_eq!(TypeId::ARRAY_1D_BIT, 1 << 10);
	assert_eq!(TypeId::ARRAY_2D_BIT, 1 << 11);
	assert_eq!(TypeId::encode(BaseType::Float3, ArrayDepth::Array).raw(), 21 | (1 << 10));
}

#[test]
fn array_descriptors_differ_by_depth() {
	let base = TypeDescriptor::new(BaseType::Vector3f, ArrayDepth::Scalar);
	let one = base.array_of(1).expect("1-D descriptor");
	let two = base.array_of(2).expect("2-D descriptor");
	assert_ne!(one.type_id, two.type_id);
	assert_eq!(one.array_depth, 1);
	assert_eq!(two.array_depth, 2);
	assert_eq!(one.component_count, 3);
	assert_eq!(one.underlying_type_id, TypeId::encode(BaseType::Float3, ArrayDepth::Array));
}

#[test]
fn array_of_rejects_nesting_beyond_two() {
	let base = TypeDescriptor::new(BaseType::Int, ArrayDepth::Scalar);
	assert!(base.array_of(0).is_none());
	assert!(base.array_of(3).is_none());
	let nested = base.array_of(1).expect("1-D descriptor");
	assert!(nested.array_of(1).is_none());
}

#[test]
fn component_counts_follow_shape() {
	assert_eq!(BaseType::Bool.component_count(), 1);
	assert_eq!(BaseType::Texcoord2f.component_count(), 2);
	assert_eq!(BaseType::Color4h.component_count(), 4);
	assert_eq!(BaseType::Quatd.component_count(), 4);
	assert_eq!(BaseType::Matrix3d.component_count(), 9);
	assert_eq!(BaseType::Frame4d.component_count(), 16);
}

#[test]
fn roles_point_at_their_tuples() {
	assert!(BaseType::Point3f.is_role());
	assert_eq!(BaseType::Point3f.underlying(), BaseType::Float3);
	assert_eq!(BaseType::Frame4d.underlying(), BaseType::Matrix4d);
	assert!(!BaseType::Float3.is_role());
	assert_eq!(BaseType::Float3.underlying(), BaseType::Float3);
}

#[test]
fn role_element_sizes_match_underlying() {
	for &base in BaseType::ALL {
		if base.is_role() {
			assert_eq!(base.element_size(), base.underlying().element_size(), "{base}");
		}
	}
}

#[test]
fn invalid_descriptor_is_empty() {
	let invalid = TypeDescriptor::INVALID;
	assert_eq!(invalid.array_depth, -1);
	assert_eq!(invalid.component_count, 0);
	assert_eq!(invalid.name(), "");
}
