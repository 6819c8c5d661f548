use std::sync::OnceLock;

use directory_core::{ConsultationMode, DirectoryError, Doctor, DoctorId};
use regex::Regex;
use serde_json::Value;

const UNKNOWN_DOCTOR: &str = "Unknown Doctor";

/// Normalize a JSON document holding an array of raw doctor records.
pub fn normalize_str(raw_json: &str) -> Result<Vec<Doctor>, DirectoryError> {
    let value: Value =
        serde_json::from_str(raw_json).map_err(|err| DirectoryError::Parse(err.to_string()))?;
    normalize_value(&value)
}

/// Normalize a parsed payload; only the top level must be an array.
pub fn normalize_value(payload: &Value) -> Result<Vec<Doctor>, DirectoryError> {
    let records = payload.as_array().ok_or_else(|| {
        DirectoryError::Parse(format!(
            "expected an array of doctors, received {}",
            json_kind(payload)
        ))
    })?;
    Ok(normalize_records(records))
}

/// One `Doctor` per record, in order. Malformed fields fall back to defaults;
/// no record is ever dropped.
pub fn normalize_records(records: &[Value]) -> Vec<Doctor> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(record, index))
        .collect()
}

/// Normalize a single record; `index` seeds the fallback id.
pub fn normalize_record(record: &Value, index: usize) -> Doctor {
    let (clinic, location) = extract_clinic(record.get("clinic"));

    Doctor {
        id: extract_id(record.get("id"), index),
        name: extract_name(record.get("name")),
        specialties: extract_specialties(record.get("specialities")),
        experience: first_number(record.get("experience")),
        consultation_fee: first_number(record.get("fees")),
        consultation_modes: extract_modes(record),
        clinic,
        location,
        image: non_empty_str(record.get("photo")),
    }
}

fn extract_id(value: Option<&Value>, index: usize) -> DoctorId {
    match value {
        Some(Value::Number(number)) if number.as_f64().is_some_and(|n| n != 0.0) => number
            .as_i64()
            .map(DoctorId::Number)
            .unwrap_or_else(|| DoctorId::Text(number.to_string())),
        Some(Value::String(text)) if !text.is_empty() => DoctorId::Text(text.clone()),
        _ => DoctorId::Text(format!("doc-{}", index + 1)),
    }
}

fn extract_name(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .filter(|name| !name.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_DOCTOR.to_string())
}

fn extract_specialties(value: Option<&Value>) -> Vec<String> {
    let Some(entries) = value.and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(name) => Some(name.as_str()),
            Value::Object(map) => map.get("name").and_then(Value::as_str),
            _ => None,
        })
        .map(str::to_string)
        .collect()
}

fn extract_modes(record: &Value) -> Vec<ConsultationMode> {
    let mut modes = Vec::new();
    if record.get("video_consult").is_some_and(is_truthy) {
        modes.push(ConsultationMode::VideoConsult);
    }
    if record.get("in_clinic").is_some_and(is_truthy) {
        modes.push(ConsultationMode::InClinic);
    }
    modes
}

fn extract_clinic(value: Option<&Value>) -> (Option<String>, Option<String>) {
    match value {
        Some(Value::String(name)) if !name.is_empty() => (Some(name.clone()), None),
        Some(Value::Object(map)) => {
            let Some(name) = non_empty_str(map.get("name")) else {
                return (None, None);
            };
            let location = map.get("address").and_then(format_address);
            (Some(name), location)
        }
        _ => (None, None),
    }
}

fn format_address(address: &Value) -> Option<String> {
    let parts: Vec<String> = ["address_line1", "locality", "city"]
        .iter()
        .filter_map(|field| non_empty_str(address.get(*field)))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// First run of ASCII digits in a string field; 0 for anything else.
fn first_number(value: Option<&Value>) -> u64 {
    static DIGITS: OnceLock<Option<Regex>> = OnceLock::new();

    let Some(text) = value.and_then(Value::as_str) else {
        return 0;
    };
    let Some(digits) = DIGITS.get_or_init(|| Regex::new(r"[0-9]+").ok()) else {
        return 0;
    };

    match digits.find(text) {
        Some(found) => found.as_str().parse::<u64>().unwrap_or(u64::MAX),
        None => 0,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// JavaScript truthiness, which the source flags rely on.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn digits_are_taken_from_the_first_run() {
        assert_eq!(first_number(Some(&json!("₹500 consultation fee"))), 500);
        assert_eq!(first_number(Some(&json!("13 Years of experience, 2 clinics"))), 13);
        assert_eq!(first_number(Some(&json!("Free"))), 0);
        assert_eq!(first_number(Some(&json!(700))), 0);
        assert_eq!(first_number(None), 0);
    }

    #[test]
    fn long_digit_runs_keep_their_value() {
        assert_eq!(first_number(Some(&json!("99999999999999"))), 99_999_999_999_999);
        assert_eq!(first_number(Some(&json!("99999999999999999999999"))), u64::MAX);
    }

    #[test]
    fn truthiness_follows_javascript() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!({})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&Value::Null));
    }
}
