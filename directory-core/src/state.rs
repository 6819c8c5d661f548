//! View state and the pure reducer driving it.

use std::sync::Arc;

use crate::query::{criteria_from_query, query_from_criteria, NavigationMode};
use crate::view::apply_view;
use crate::{all_specialties, ConsultationMode, Criteria, Doctor, SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
}

/// Everything the list page renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub status: LoadStatus,
    /// Full collection; never mutated once loaded.
    pub doctors: Arc<Vec<Doctor>>,
    /// Specialty catalogue for the filter panel.
    pub specialties: Vec<String>,
    pub criteria: Criteria,
    /// Derived view of `doctors` under `criteria`.
    pub visible: Vec<Doctor>,
    /// Transient message shown after a failed load.
    pub notice: Option<String>,
    /// How the last transition must be reflected in the address bar.
    pub navigation: Option<NavigationMode>,
}

/// Discrete events that change the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    Loaded {
        doctors: Vec<Doctor>,
        notice: Option<String>,
    },
    /// The address bar changed outside the app (initial load, back/forward).
    UrlChanged(String),
    /// Radio selection: the chosen mode replaces any previous one.
    SelectConsultationMode(ConsultationMode),
    ToggleSpecialty(String),
    SetSort(Option<SortKey>),
    SubmitSearch(String),
    /// Resets filters and sort, keeping the search text.
    ClearFilters,
    DismissNotice,
}

impl ViewAction {
    /// History mode used to publish the criteria this action produces.
    pub fn navigation(&self) -> Option<NavigationMode> {
        match self {
            ViewAction::SelectConsultationMode(_)
            | ViewAction::ToggleSpecialty(_)
            | ViewAction::SetSort(_)
            | ViewAction::ClearFilters => Some(NavigationMode::Replace),
            ViewAction::SubmitSearch(_) => Some(NavigationMode::Push),
            ViewAction::Loaded { .. } | ViewAction::UrlChanged(_) | ViewAction::DismissNotice => {
                None
            }
        }
    }
}

impl ViewState {
    /// Loading state seeded with criteria read from the address bar.
    pub fn from_query(query_string: &str) -> Self {
        Self {
            criteria: criteria_from_query(query_string),
            ..Self::default()
        }
    }

    pub fn reduce(mut self, action: ViewAction) -> Self {
        self.navigation = action.navigation();

        match action {
            ViewAction::Loaded { doctors, notice } => {
                self.specialties = all_specialties(&doctors);
                self.doctors = Arc::new(doctors);
                self.status = LoadStatus::Ready;
                self.notice = notice;
            }
            ViewAction::UrlChanged(query_string) => {
                self.criteria = criteria_from_query(&query_string);
            }
            ViewAction::SelectConsultationMode(mode) => {
                self.criteria.consultation_types.clear();
                self.criteria.consultation_types.insert(mode);
            }
            ViewAction::ToggleSpecialty(specialty) => {
                if !self.criteria.specialties.remove(&specialty) {
                    self.criteria.specialties.insert(specialty);
                }
            }
            ViewAction::SetSort(sort) => {
                self.criteria.sort_by = sort;
            }
            ViewAction::SubmitSearch(text) => {
                self.criteria.query = text.trim().to_string();
            }
            ViewAction::ClearFilters => {
                self.criteria = self.criteria.cleared();
            }
            ViewAction::DismissNotice => {
                self.notice = None;
                return self;
            }
        }

        self.visible = apply_view(&self.doctors, &self.criteria);
        self
    }

    /// Query string reflecting the current criteria, preserving unrelated
    /// parameters from `existing`.
    pub fn location_query(&self, existing: &str) -> String {
        query_from_criteria(&self.criteria, existing)
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}
