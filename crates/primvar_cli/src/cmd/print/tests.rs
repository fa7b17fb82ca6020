use primvar::value::{PrintOptions, TemporalValue};
use primvar_testkit::fixture_path;

use super::{attribute_line, attribute_row};
use crate::cmd::test_support::{run_primvar, run_primvar_json};

#[test]
fn plain_attributes_print_type_and_value() {
	let value = TemporalValue::scalar(2.5_f64);
	let row = attribute_row("radius", &value, None, &PrintOptions::default()).expect("row renders");
	assert_eq!(attribute_line(&row), "radius (double) = 2.5");
}

#[test]
fn role_attributes_show_underlying_type() {
	let value = TemporalValue::scalar(vec![primvar::value::Point3f::new(0.0, 1.0, 0.0)]);
	let row = attribute_row("points", &value, None, &PrintOptions::default()).expect("row renders");
	assert_eq!(attribute_line(&row), "points (point3f[] as float3[]) = [(0, 1, 0)]");
}

#[test]
fn time_option_selects_held_sample() {
	let value = TemporalValue::time_sampled([(1.0, 1_i32), (10.0, 2)]);
	let options = PrintOptions::default();
	assert_eq!(attribute_row("frame", &value, None, &options).expect("row").value, "{1: 1, 10: 2}");
	assert_eq!(attribute_row("frame", &value, Some(4.0), &options).expect("row").value, "1");
	assert_eq!(attribute_row("frame", &value, Some(12.0), &options).expect("row").value, "2");
}

#[test]
fn print_text_lists_fixture_attributes() {
	let output = run_primvar(&["print", &fixture_path("sphere.json").display().to_string()]);
	assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("radius (double) = 2.5"), "{stdout}");
	assert!(stdout.contains("purpose (token) = render"), "{stdout}");
	assert!(stdout.contains("userProperties (dictionary) = note:hello, weight:1.3"), "{stdout}");
}

#[test]
fn print_json_truncates_with_max_items() {
	let json = run_primvar_json(&["print", &fixture_path("mesh.json").display().to_string(), "--max-items", "1", "--json"]);
	let attributes = json["attributes"].as_array().expect("attributes array");
	let points = attributes.iter().find(|row| row["name"] == "points").expect("points attribute");
	assert_eq!(points["type"], "point3f[]");
	assert_eq!(points["value"], "[(0, 0, 0), ... 3 more]");
}
