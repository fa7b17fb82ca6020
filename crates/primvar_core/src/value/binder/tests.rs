use super::{AttributeBinder, AttributeField, BindOptions, FieldOutcome, FieldTarget, Requirement, bind, check_allowed_types};
use crate::value::{Dictionary, Double3, Float3, GenericValue, Point3f, TypeId, ValueError, ValueType, Vector3f};

fn dict(entries: Vec<(&str, GenericValue)>) -> Dictionary {
	entries.into_iter().map(|(name, value)| (name.to_owned(), value)).collect()
}

#[derive(Debug, Default)]
struct Sphere {
	radius: f64,
	center: Double3,
}

#[test]
fn binds_matching_double() {
	let attrs = dict(vec![("radius", GenericValue::new(2.5_f64))]);
	let mut sphere = Sphere::default();
	let report = AttributeBinder::new().required("radius", &mut sphere.radius).bind(&attrs).expect("bind succeeds");
	assert_eq!(sphere.radius, 2.5);
	assert_eq!(report.outcome("radius"), Some(FieldOutcome::Bound));
}

#[test]
fn type_mismatch_names_field_and_both_types() {
	let attrs = dict(vec![("radius", GenericValue::new(2.5_f64))]);
	let mut radius = 0.0_f32;
	let err = AttributeBinder::new().required("radius", &mut radius).bind(&attrs).expect_err("float != double");
	match &err {
		ValueError::TypeMismatch { field, expected, actual } => {
			assert_eq!(field, "radius");
			assert_eq!(expected, "float");
			assert_eq!(actual, "double");
		}
		other => panic!("unexpected error: {other}"),
	}
	let text = err.to_string();
	assert!(text.contains("radius") && text.contains("float") && text.contains("double"), "{text}");
	assert_eq!(radius, 0.0);
}

#[test]
fn absent_optional_leaves_target_untouched() {
	let attrs = dict(vec![("radius", GenericValue::new(2.5_f64))]);
	let mut sphere = Sphere {
		radius: 0.0,
		center: [9.0, 9.0, 9.0],
	};
	let report = AttributeBinder::new()
		.required("radius", &mut sphere.radius)
		.optional("center", &mut sphere.center)
		.bind(&attrs)
		.expect("bind succeeds");
	assert_eq!(sphere.center, [9.0, 9.0, 9.0]);
	assert_eq!(report.outcome("center"), Some(FieldOutcome::SkippedOptional));
	assert_eq!(report.bound_count(), 1);
	assert_eq!(report.skipped_count(), 1);
}

#[test]
fn absent_required_is_missing_field() {
	let attrs = Dictionary::new();
	let mut radius = 1.0_f64;
	let err = AttributeBinder::new().required("radius", &mut radius).bind(&attrs).expect_err("missing");
	assert!(matches!(err, ValueError::MissingField { ref field } if field == "radius"));
}

#[test]
fn failure_writes_no_targets() {
	let attrs = dict(vec![("radius", GenericValue::new(2.5_f64)), ("height", GenericValue::new(1_i32))]);
	let mut radius = 0.0_f64;
	let mut height = 0.0_f64;
	let err = AttributeBinder::new()
		.required("radius", &mut radius)
		.required("height", &mut height)
		.bind(&attrs)
		.expect_err("height has the wrong type");
	assert!(matches!(err, ValueError::TypeMismatch { .. }));
	assert_eq!(radius, 0.0, "earlier field must not be applied");
}

#[test]
fn first_failure_short_circuits_in_declaration_order() {
	let attrs = dict(vec![("b", GenericValue::new(1_i32))]);
	let mut a = 0_i32;
	let mut b = 0.0_f32;
	let err = AttributeBinder::new().required("a", &mut a).required("b", &mut b).bind(&attrs).expect_err("a is missing");
	assert!(matches!(err, ValueError::MissingField { ref field } if field == "a"));
}

#[test]
fn role_attribute_binds_into_underlying_target() {
	let attrs = dict(vec![("vertices", GenericValue::new(vec![Vector3f::new(1.0, 2.0, 3.0), Vector3f::new(0.5, 2.0, 4.0)]))]);
	let mut vertices: Vec<Float3> = Vec::new();
	let field = AttributeField::with_type("vertices", Vec::<Vector3f>::DESCRIPTOR.type_id, Requirement::Required, &mut vertices);
	bind(&attrs, [field]).expect("vector3f[] binds into float3[] storage");
	assert_eq!(vertices, vec![[1.0, 2.0, 3.0], [0.5, 2.0, 4.0]]);
}

#[test]
fn underlying_attribute_does_not_satisfy_role_expectation() {
	let attrs = dict(vec![("points", GenericValue::new(vec![[1.0_f32, 2.0, 3.0]]))]);
	let mut points: Vec<Point3f> = Vec::new();
	let err = AttributeBinder::new().required("points", &mut points).bind(&attrs).expect_err("float3[] is not point3f[]");
	assert!(matches!(err, ValueError::TypeMismatch { ref expected, ref actual, .. } if expected == "point3f[]" && actual == "float3[]"));
}

#[test]
fn unknown_expected_type_is_unsupported() {
	let attrs = dict(vec![("radius", GenericValue::new(2.5_f64))]);
	let mut radius = 0.0_f64;
	let field = AttributeField::with_type("radius", TypeId::from_raw(900), Requirement::Required, &mut radius);
	let err = bind(&attrs, [field]).expect_err("no dispatch case");
	assert!(matches!(err, ValueError::UnsupportedType { ref type_name, .. } if type_name.contains("900")));
}

#[test]
fn target_that_cannot_hold_expected_type_is_unsupported() {
	let attrs = dict(vec![("radius", GenericValue::new(2.5_f64))]);
	let mut radius = 0_i32;
	let field = AttributeField::with_type("radius", f64::DESCRIPTOR.type_id, Requirement::Required, &mut radius);
	let err = bind(&attrs, [field]).expect_err("int storage cannot hold double");
	assert!(matches!(err, ValueError::UnsupportedType { ref target, .. } if target == "int"));
}

#[test]
fn generic_target_accepts_any_checked_type() {
	let attrs = dict(vec![("color", GenericValue::new([0.5_f32, 0.5, 0.5]))]);
	let mut slot = GenericValue::empty();
	let field = AttributeField::with_type("color", Float3::DESCRIPTOR.type_id, Requirement::Required, &mut slot);
	bind(&attrs, [field]).expect("bind succeeds");
	assert_eq!(slot.type_name(), "float3");
}

#[test]
fn strict_options_reject_undeclared_attributes() {
	let attrs = dict(vec![("radius", GenericValue::new(2.5_f64)), ("extra", GenericValue::new(true))]);
	let mut radius = 0.0_f64;
	let err = AttributeBinder::with_options(BindOptions::strict())
		.required("radius", &mut radius)
		.bind(&attrs)
		.expect_err("extra is undeclared");
	assert!(matches!(err, ValueError::UnknownAttribute { ref field, .. } if field == "extra"));
	assert_eq!(radius, 0.0);
}

#[test]
fn allowed_types_accepts_any_listed_type() {
	let value = GenericValue::new(1.0_f32);
	let allowed = [f32::DESCRIPTOR.type_id, f64::DESCRIPTOR.type_id];
	assert!(check_allowed_types("xformOp:rotateX", &value, &allowed).is_ok());
}

#[test]
fn allowed_types_error_lists_alternatives() {
	let value = GenericValue::new(1_i32);
	let allowed = [f32::DESCRIPTOR.type_id, f64::DESCRIPTOR.type_id, Float3::DESCRIPTOR.type_id];
	let err = check_allowed_types("xformOp:scale", &value, &allowed).expect_err("int not allowed");
	assert_eq!(err.to_string(), "allowed type for \"xformOp:scale\" are float, double or float3, but got int");

	let single = check_allowed_types("radius", &value, &[f64::DESCRIPTOR.type_id]).expect_err("int not allowed");
	assert_eq!(single.to_string(), "allowed type for \"radius\" is double, but got int");
}

struct ReadOnlySlot;

impl FieldTarget for ReadOnlySlot {
	fn accepts(&self, _expected: TypeId) -> bool {
		true
	}

	fn target_name(&self) -> String {
		"read-only slot".to_owned()
	}

	fn store(&mut self, _value: &GenericValue) -> bool {
		false
	}
}

#[test]
fn refused_store_fails_instead_of_reporting_bound() {
	let attrs = dict(vec![("radius", GenericValue::new(2.5_f64))]);
	let mut slot = ReadOnlySlot;
	let field = AttributeField::with_type("radius", f64::DESCRIPTOR.type_id, Requirement::Required, &mut slot);
	let err = bind(&attrs, [field]).expect_err("nothing was written");
	assert!(matches!(err, ValueError::UnsupportedType { ref field, ref target, .. } if field == "radius" && target == "read-only slot"));
}
