//! Core types and pure logic for the doctor directory.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod presentation;
pub mod query;
pub mod state;
pub mod view;

pub use query::{criteria_from_query, query_from_criteria, NavigationMode};
pub use state::{LoadStatus, ViewAction, ViewState};
pub use view::{apply_view, suggest};

/// Endpoint serving the static doctor list.
pub const DEFAULT_ENDPOINT: &str = "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Runtime settings shared by every front end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryConfig {
    /// URL of the JSON document listing doctors.
    pub endpoint: String,
    /// Maximum number of name suggestions shown under the search box.
    pub suggestion_limit: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            suggestion_limit: 3,
        }
    }
}

/// Identifier carried over from the source, or synthesized when missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum DoctorId {
    Number(i64),
    Text(String),
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctorId::Number(value) => write!(f, "{value}"),
            DoctorId::Text(value) => f.write_str(value),
        }
    }
}

/// Ways a doctor can be consulted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConsultationMode {
    #[serde(rename = "Video Consult")]
    VideoConsult,
    #[serde(rename = "In Clinic")]
    InClinic,
}

impl ConsultationMode {
    pub const ALL: [ConsultationMode; 2] =
        [ConsultationMode::VideoConsult, ConsultationMode::InClinic];

    /// Label used in the UI and in the `consultationType` URL parameter.
    pub fn label(self) -> &'static str {
        match self {
            ConsultationMode::VideoConsult => "Video Consult",
            ConsultationMode::InClinic => "In Clinic",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.label() == label)
    }
}

impl fmt::Display for ConsultationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical doctor record produced by normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialties: Vec<String>,
    pub experience: u64,
    pub consultation_fee: u64,
    pub consultation_modes: Vec<ConsultationMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clinic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Consultation fee, lowest first.
    Fees,
    /// Years of experience, most first.
    Experience,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Fees => "fees",
            SortKey::Experience => "experience",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fees" => Some(SortKey::Fees),
            "experience" => Some(SortKey::Experience),
            _ => None,
        }
    }
}

/// Filter, search and sort selection driving the derived view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    #[serde(default, rename = "consultationType")]
    pub consultation_types: BTreeSet<ConsultationMode>,
    #[serde(default)]
    pub specialties: BTreeSet<String>,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub sort_by: Option<SortKey>,
}

impl Criteria {
    /// True when no filter, search or sort is selected.
    pub fn is_empty(&self) -> bool {
        self.consultation_types.is_empty()
            && self.specialties.is_empty()
            && self.query.is_empty()
            && self.sort_by.is_none()
    }

    /// Drops filters and sort while keeping the free-text query.
    pub fn cleared(&self) -> Self {
        Self {
            query: self.query.clone(),
            ..Self::default()
        }
    }
}

/// Sorted, de-duplicated list of every specialty in the collection.
pub fn all_specialties(doctors: &[Doctor]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut specialties: Vec<String> = doctors
        .iter()
        .flat_map(|doctor| doctor.specialties.iter())
        .filter(|specialty| seen.insert(specialty.as_str()))
        .cloned()
        .collect();
    specialties.sort();
    specialties
}

/// Errors raised while loading the directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("could not read doctor data: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}
