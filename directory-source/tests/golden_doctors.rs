use std::fs;

use directory_source::normalize_str;
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn raw_listing_matches_golden() {
    let raw = fs::read_to_string(fixture_path("doctors_raw.json")).expect("read raw fixture");

    let doctors = normalize_str(&raw).expect("normalize fixture");
    let actual = serde_json::to_value(doctors).expect("serialize doctors");

    let expected = fs::read_to_string(fixture_path("doctors_normalized.json"))
        .expect("read golden snapshot");
    let expected: Value = serde_json::from_str(&expected).expect("golden is valid JSON");

    assert_eq!(actual, expected);
}
