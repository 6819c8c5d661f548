mod common;

use common::{doctor, ids, numeric_ids, sample_doctors};
use directory_core::presentation::{
    experience_label, fee_label, initial, results_heading, specialty_line,
};
use directory_core::{ConsultationMode, LoadStatus, NavigationMode, SortKey, ViewAction, ViewState};

fn loaded(query_string: &str) -> ViewState {
    ViewState::from_query(query_string).reduce(ViewAction::Loaded {
        doctors: sample_doctors(),
        notice: None,
    })
}

#[test]
fn starts_loading_with_criteria_from_url() {
    let state = ViewState::from_query("?specialty=Dentist&sortBy=experience");
    assert!(state.is_loading());
    assert!(state.visible.is_empty());
    assert_eq!(state.criteria.sort_by, Some(SortKey::Experience));
}

#[test]
fn load_applies_initial_criteria_without_navigation() {
    let state = loaded("?specialty=Dentist&sortBy=experience");

    assert_eq!(state.status, LoadStatus::Ready);
    assert_eq!(ids(&state.visible), numeric_ids(&[5, 2]));
    assert_eq!(state.navigation, None);
    assert_eq!(
        state.specialties,
        ["Cardiologist", "Dentist", "General Physician", "Orthodontist"]
    );
}

#[test]
fn failed_load_renders_empty_list_with_notice() {
    let state = ViewState::default().reduce(ViewAction::Loaded {
        doctors: Vec::new(),
        notice: Some("Failed to load doctors data".to_string()),
    });

    assert_eq!(state.status, LoadStatus::Ready);
    assert!(state.visible.is_empty());
    assert!(state.notice.is_some());

    let state = state.reduce(ViewAction::DismissNotice);
    assert_eq!(state.notice, None);
    assert_eq!(state.navigation, None);
}

#[test]
fn filter_changes_replace_history() {
    let state = loaded("").reduce(ViewAction::SelectConsultationMode(ConsultationMode::InClinic));
    assert_eq!(state.navigation, Some(NavigationMode::Replace));
    assert_eq!(ids(&state.visible), numeric_ids(&[2, 3, 5]));

    let state = state.reduce(ViewAction::SelectConsultationMode(ConsultationMode::VideoConsult));
    assert_eq!(state.criteria.consultation_types.len(), 1);
    assert_eq!(ids(&state.visible), numeric_ids(&[1, 3]));

    let state = state.reduce(ViewAction::SetSort(Some(SortKey::Experience)));
    assert_eq!(state.navigation, Some(NavigationMode::Replace));
    assert_eq!(ids(&state.visible), numeric_ids(&[3, 1]));
}

#[test]
fn specialty_toggle_adds_then_removes() {
    let state = loaded("").reduce(ViewAction::ToggleSpecialty("Dentist".to_string()));
    assert_eq!(ids(&state.visible), numeric_ids(&[2, 5]));

    let state = state.reduce(ViewAction::ToggleSpecialty("Dentist".to_string()));
    assert!(state.criteria.specialties.is_empty());
    assert_eq!(state.visible, sample_doctors());
}

#[test]
fn search_submission_pushes_history() {
    let state = loaded("").reduce(ViewAction::SubmitSearch("  xyz ".to_string()));

    assert_eq!(state.navigation, Some(NavigationMode::Push));
    assert_eq!(state.criteria.query, "xyz");
    assert!(state.visible.is_empty());
    assert_eq!(state.status, LoadStatus::Ready);
}

#[test]
fn clear_filters_keeps_query() {
    let state = loaded("?query=dr.&specialty=Dentist&consultationType=In+Clinic&sortBy=fees")
        .reduce(ViewAction::ClearFilters);

    assert_eq!(state.criteria.query, "dr.");
    assert!(state.criteria.specialties.is_empty());
    assert!(state.criteria.consultation_types.is_empty());
    assert_eq!(state.criteria.sort_by, None);
    assert_eq!(state.location_query("?page=1"), "page=1&query=dr.");
}

#[test]
fn url_change_rereads_criteria_without_writing_back() {
    let state = loaded("?sortBy=fees")
        .reduce(ViewAction::SubmitSearch("asha".to_string()))
        .reduce(ViewAction::UrlChanged("?sortBy=fees".to_string()));

    assert_eq!(state.navigation, None);
    assert_eq!(state.criteria.query, "");
    assert_eq!(ids(&state.visible), numeric_ids(&[4, 2, 1, 3, 5]));
}

#[test]
fn location_query_round_trips_state() {
    let state = loaded("")
        .reduce(ViewAction::ToggleSpecialty("Cardiologist".to_string()))
        .reduce(ViewAction::SetSort(Some(SortKey::Fees)));

    let query = state.location_query("");
    assert_eq!(query, "specialty=Cardiologist&sortBy=fees");
    assert_eq!(ViewState::from_query(&query).criteria, state.criteria);
}

#[test]
fn card_labels() {
    let with_specialties = &sample_doctors()[1];
    assert_eq!(specialty_line(with_specialties), "Dentist, Orthodontist");
    assert_eq!(fee_label(with_specialties), "₹300");
    assert_eq!(experience_label(with_specialties), "4 yrs exp.");
    assert_eq!(initial(with_specialties), "D");

    let bare = doctor(9, "", &[], 0, 0, &[]);
    assert_eq!(specialty_line(&bare), "General Practitioner");
    assert_eq!(initial(&bare), "");

    assert_eq!(results_heading(1), "1 Doctor available");
    assert_eq!(results_heading(0), "0 Doctors available");
}
