mod common;

use common::{ids, numeric_ids, sample_doctors};
use directory_core::{all_specialties, apply_view, suggest, ConsultationMode, Criteria, SortKey};

#[test]
fn empty_criteria_returns_input_in_original_order() {
    let doctors = sample_doctors();
    let view = apply_view(&doctors, &Criteria::default());
    assert_eq!(view, doctors);
}

#[test]
fn consultation_mode_filter_keeps_intersecting_doctors() {
    let doctors = sample_doctors();
    let criteria = Criteria {
        consultation_types: [ConsultationMode::VideoConsult].into(),
        ..Criteria::default()
    };
    assert_eq!(ids(&apply_view(&doctors, &criteria)), numeric_ids(&[1, 3]));
}

#[test]
fn specialty_filter_matches_any_selected_specialty() {
    let doctors = sample_doctors();
    let criteria = Criteria {
        specialties: ["Dentist".to_string(), "Cardiologist".to_string()].into(),
        ..Criteria::default()
    };
    assert_eq!(ids(&apply_view(&doctors, &criteria)), numeric_ids(&[1, 2, 3, 5]));
}

#[test]
fn query_matches_name_case_insensitively() {
    let doctors = sample_doctors();
    let criteria = Criteria {
        query: "MEERA".to_string(),
        ..Criteria::default()
    };
    assert_eq!(ids(&apply_view(&doctors, &criteria)), numeric_ids(&[3]));
}

#[test]
fn query_whitespace_is_significant() {
    let doctors = sample_doctors();
    let with_space = Criteria {
        query: "a ".to_string(),
        ..Criteria::default()
    };
    let trimmed = Criteria {
        query: "a".to_string(),
        ..Criteria::default()
    };
    let blank = Criteria {
        query: "  ".to_string(),
        ..Criteria::default()
    };

    assert_eq!(ids(&apply_view(&doctors, &with_space)), numeric_ids(&[1, 3]));
    assert_eq!(ids(&apply_view(&doctors, &trimmed)), numeric_ids(&[1, 2, 3, 4, 5]));
    assert!(apply_view(&doctors, &blank).is_empty());
}

#[test]
fn unmatched_query_yields_empty_view() {
    let doctors = sample_doctors();
    let criteria = Criteria {
        query: "xyz".to_string(),
        ..Criteria::default()
    };
    assert!(apply_view(&doctors, &criteria).is_empty());
}

#[test]
fn fee_sort_is_ascending_and_stable() {
    let doctors = sample_doctors();
    let criteria = Criteria {
        sort_by: Some(SortKey::Fees),
        ..Criteria::default()
    };
    let view = apply_view(&doctors, &criteria);

    assert!(view
        .windows(2)
        .all(|pair| pair[0].consultation_fee <= pair[1].consultation_fee));
    assert_eq!(ids(&view), numeric_ids(&[4, 2, 1, 3, 5]));
}

#[test]
fn experience_sort_is_descending_and_stable() {
    let doctors = sample_doctors();
    let criteria = Criteria {
        sort_by: Some(SortKey::Experience),
        ..Criteria::default()
    };
    let view = apply_view(&doctors, &criteria);

    assert!(view.windows(2).all(|pair| pair[0].experience >= pair[1].experience));
    assert_eq!(ids(&view), numeric_ids(&[5, 3, 1, 4, 2]));
}

#[test]
fn filters_and_sort_combine() {
    let doctors = sample_doctors();
    let criteria = Criteria {
        consultation_types: [ConsultationMode::InClinic].into(),
        specialties: ["Dentist".to_string()].into(),
        query: "dr.".to_string(),
        sort_by: Some(SortKey::Fees),
    };
    assert_eq!(ids(&apply_view(&doctors, &criteria)), numeric_ids(&[2, 5]));
}

#[test]
fn suggestions_are_limited_and_ordered() {
    let doctors = sample_doctors();

    let names: Vec<&str> = suggest(&doctors, "dr.", 3)
        .into_iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(names, ["Dr. Asha Rao", "Dr. Vikram Nair", "Dr. Meera Iyer"]);

    assert_eq!(suggest(&doctors, "ravi", 3).len(), 1);
    assert!(suggest(&doctors, "   ", 3).is_empty());
}

#[test]
fn specialty_catalogue_is_sorted_and_unique() {
    let doctors = sample_doctors();
    assert_eq!(
        all_specialties(&doctors),
        ["Cardiologist", "Dentist", "General Physician", "Orthodontist"]
    );
}
