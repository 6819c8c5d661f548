//! Display strings shared by the web UI and the CLI.

use crate::Doctor;

pub const LOADING_MESSAGE: &str = "Loading doctors data...";
pub const EMPTY_RESULTS_MESSAGE: &str = "No doctors match your criteria. Try adjusting your filters.";
pub const LOAD_FAILED_NOTICE: &str = "Failed to load doctors data";
pub const SEARCH_PLACEHOLDER: &str = "Search Symptoms, Doctors, Specialists, Clinics";

const GENERAL_PRACTITIONER: &str = "General Practitioner";

/// Heading above the list, e.g. "3 Doctors available".
pub fn results_heading(count: usize) -> String {
    let noun = if count == 1 { "Doctor" } else { "Doctors" };
    format!("{count} {noun} available")
}

pub fn specialty_line(doctor: &Doctor) -> String {
    if doctor.specialties.is_empty() {
        GENERAL_PRACTITIONER.to_string()
    } else {
        doctor.specialties.join(", ")
    }
}

pub fn fee_label(doctor: &Doctor) -> String {
    format!("₹{}", doctor.consultation_fee)
}

pub fn experience_label(doctor: &Doctor) -> String {
    format!("{} yrs exp.", doctor.experience)
}

/// Avatar placeholder when the doctor has no photo.
pub fn initial(doctor: &Doctor) -> String {
    doctor
        .name
        .chars()
        .next()
        .map(|c| c.to_string())
        .unwrap_or_default()
}
