#![cfg(target_arch = "wasm32")]

use directory_core::DirectoryError;
use directory_source::DoctorSource;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Doctor source backed by the browser `fetch` API.
pub struct BrowserSource {
    endpoint: String,
}

impl BrowserSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl DoctorSource for BrowserSource {
    async fn fetch_raw(&self) -> Result<Value, DirectoryError> {
        let window =
            web_sys::window().ok_or_else(|| DirectoryError::Other("no window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&self.endpoint, &opts)
            .map_err(|err| DirectoryError::Network(describe(&err)))?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|err| DirectoryError::Network(describe(&err)))?
            .dyn_into::<Response>()
            .map_err(|err| DirectoryError::Network(describe(&err)))?;

        if !response.ok() {
            return Err(DirectoryError::Status(response.status()));
        }

        let body = response
            .json()
            .map_err(|err| DirectoryError::Parse(describe(&err)))?;
        let json = JsFuture::from(body)
            .await
            .map_err(|err| DirectoryError::Parse(describe(&err)))?;

        serde_wasm_bindgen::from_value(json).map_err(|err| DirectoryError::Parse(err.to_string()))
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
