//! Framework-neutral WASM <-> JavaScript bridge for the doctor directory.

use directory_core::{
    apply_view as core_apply_view, criteria_from_query as core_criteria_from_query,
    query_from_criteria as core_query_from_criteria, suggest, Criteria, DirectoryConfig, Doctor,
};
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct JsDirectoryConfig {
    #[serde(default)]
    endpoint: Option<String>,
    #[serde(default)]
    suggestion_limit: Option<usize>,
}

impl From<JsDirectoryConfig> for DirectoryConfig {
    fn from(cfg: JsDirectoryConfig) -> Self {
        let mut base = DirectoryConfig::default();
        if let Some(endpoint) = cfg.endpoint {
            base.endpoint = endpoint;
        }
        if let Some(limit) = cfg.suggestion_limit {
            base.suggestion_limit = limit;
        }
        base
    }
}

/// Normalize the raw array served by the doctor endpoint.
#[wasm_bindgen]
pub fn normalize_doctors(raw: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let payload = from_value::<serde_json::Value>(raw)
        .map_err(|err| JsValue::from_str(&format!("Could not read doctor JSON: {err}")))?;

    let doctors = directory_source::normalize_value(&payload)
        .map_err(|err| JsValue::from_str(&format!("Directory error: {err}")))?;

    to_value(&doctors).map_err(|err| JsValue::from_str(&format!("Could not serialize doctors: {err}")))
}

/// Filter and sort normalized doctors by `criteria`.
#[wasm_bindgen]
pub fn apply_view(doctors: JsValue, criteria: JsValue) -> Result<JsValue, JsValue> {
    let doctors = read_doctors(doctors)?;
    let criteria: Criteria = from_value(criteria)
        .map_err(|err| JsValue::from_str(&format!("Could not read criteria: {err}")))?;

    to_value(&core_apply_view(&doctors, &criteria))
        .map_err(|err| JsValue::from_str(&format!("Could not serialize view: {err}")))
}

#[wasm_bindgen]
pub fn criteria_from_query(query_string: &str) -> Result<JsValue, JsValue> {
    to_value(&core_criteria_from_query(query_string))
        .map_err(|err| JsValue::from_str(&format!("Could not serialize criteria: {err}")))
}

#[wasm_bindgen]
pub fn query_from_criteria(criteria: JsValue, existing: &str) -> Result<String, JsValue> {
    let criteria: Criteria = from_value(criteria)
        .map_err(|err| JsValue::from_str(&format!("Could not read criteria: {err}")))?;
    Ok(core_query_from_criteria(&criteria, existing))
}

/// Name suggestions for the search box.
#[wasm_bindgen]
pub fn suggest_doctors(
    doctors: JsValue,
    text: &str,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    let doctors = read_doctors(doctors)?;
    let cfg = match config {
        Some(js_cfg) => {
            let cfg: JsDirectoryConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Could not read config: {err}")))?;
            DirectoryConfig::from(cfg)
        }
        None => DirectoryConfig::default(),
    };

    to_value(&suggest(&doctors, text, cfg.suggestion_limit))
        .map_err(|err| JsValue::from_str(&format!("Could not serialize suggestions: {err}")))
}

fn read_doctors(doctors: JsValue) -> Result<Vec<Doctor>, JsValue> {
    from_value(doctors).map_err(|err| JsValue::from_str(&format!("Could not read doctors: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_overrides_only_given_fields() {
        let js: JsDirectoryConfig =
            serde_json::from_str(r#"{ "suggestion_limit": 5 }"#).expect("parse config");
        let cfg = DirectoryConfig::from(js);

        assert_eq!(cfg.suggestion_limit, 5);
        assert_eq!(cfg.endpoint, DirectoryConfig::default().endpoint);
    }
}
