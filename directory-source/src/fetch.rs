use directory_core::{DirectoryError, Doctor};
use serde_json::Value;

use crate::normalize::{normalize_str, normalize_value};

/// Anything that can produce the raw doctor payload.
///
/// Passed explicitly to [`load_doctors`] so callers can substitute a fake.
#[allow(async_fn_in_trait)]
pub trait DoctorSource {
    async fn fetch_raw(&self) -> Result<Value, DirectoryError>;
}

/// Outcome of a load: the collection, plus the failure that emptied it.
#[derive(Debug, Default)]
pub struct Loaded {
    pub doctors: Vec<Doctor>,
    pub failure: Option<DirectoryError>,
}

/// Fetch and normalize. Never fails: any error yields an empty collection
/// and is reported in [`Loaded::failure`].
pub async fn load_doctors<S: DoctorSource + ?Sized>(source: &S) -> Loaded {
    let result = match source.fetch_raw().await {
        Ok(payload) => normalize_value(&payload),
        Err(err) => Err(err),
    };

    match result {
        Ok(doctors) => {
            log::debug!("loaded {} doctors", doctors.len());
            Loaded {
                doctors,
                failure: None,
            }
        }
        Err(err) => {
            log::warn!("error fetching doctors: {err}");
            Loaded {
                doctors: Vec::new(),
                failure: Some(err),
            }
        }
    }
}

/// Like [`load_doctors`], discarding the failure: an unreachable source
/// looks exactly like an empty one.
pub async fn fetch_doctors<S: DoctorSource + ?Sized>(source: &S) -> Vec<Doctor> {
    load_doctors(source).await.doctors
}

/// Source backed by JSON text already in memory (a file, a fixture).
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Normalize without going through the async loader.
    pub fn doctors(&self) -> Result<Vec<Doctor>, DirectoryError> {
        normalize_str(&self.body)
    }
}

impl DoctorSource for StaticSource {
    async fn fetch_raw(&self) -> Result<Value, DirectoryError> {
        serde_json::from_str(&self.body).map_err(|err| DirectoryError::Parse(err.to_string()))
    }
}

/// Single GET against the configured endpoint.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    endpoint: String,
}

#[cfg(not(target_arch = "wasm32"))]
impl HttpSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DoctorSource for HttpSource {
    async fn fetch_raw(&self) -> Result<Value, DirectoryError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|err| DirectoryError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| DirectoryError::Parse(err.to_string()))
    }
}
