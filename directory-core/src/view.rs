//! Filtering, search and sorting over an immutable doctor collection.

use std::cmp::Reverse;

use crate::{Criteria, Doctor, SortKey};

/// Derive the visible list for `criteria`.
///
/// Filters run in a fixed order (consultation mode, specialty, name query)
/// and the sort is stable, so ties keep their incoming order. Empty criteria
/// return the collection unchanged.
pub fn apply_view(doctors: &[Doctor], criteria: &Criteria) -> Vec<Doctor> {
    let query = criteria.query.to_lowercase();

    let mut results: Vec<Doctor> = doctors
        .iter()
        .filter(|doctor| {
            criteria.consultation_types.is_empty()
                || doctor
                    .consultation_modes
                    .iter()
                    .any(|mode| criteria.consultation_types.contains(mode))
        })
        .filter(|doctor| {
            criteria.specialties.is_empty()
                || doctor
                    .specialties
                    .iter()
                    .any(|specialty| criteria.specialties.contains(specialty))
        })
        .filter(|doctor| query.is_empty() || name_matches(doctor, &query))
        .cloned()
        .collect();

    match criteria.sort_by {
        Some(SortKey::Fees) => results.sort_by_key(|doctor| doctor.consultation_fee),
        Some(SortKey::Experience) => results.sort_by_key(|doctor| Reverse(doctor.experience)),
        None => {}
    }

    results
}

/// First `limit` doctors whose name contains `text`, case-insensitively.
pub fn suggest<'a>(doctors: &'a [Doctor], text: &str, limit: usize) -> Vec<&'a Doctor> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    doctors
        .iter()
        .filter(|doctor| name_matches(doctor, &needle))
        .take(limit)
        .collect()
}

fn name_matches(doctor: &Doctor, lowered_query: &str) -> bool {
    doctor.name.to_lowercase().contains(lowered_query)
}
