#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-directory-ui]";

/// Default CSS for the directory page, with overridable design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --directory-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --directory-bg: #f8fafc;
  --directory-card-bg: #ffffff;
  --directory-card-border: rgba(148, 163, 184, 0.28);
  --directory-radius: 12px;
  --directory-text: #1f2933;
  --directory-muted: #52606d;
  --directory-heading: #11181c;
  --directory-primary: #1e3a8a;
  --directory-primary-text: #ffffff;
  --directory-notice-bg: rgba(180, 35, 24, 0.1);
  --directory-notice-text: #b42318;
}

.directory-root {
  font-family: var(--directory-font-family);
  background: var(--directory-bg);
  color: var(--directory-text);
  min-height: 100vh;
}

.directory-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: var(--directory-primary);
  padding: 16px;
  display: flex;
  justify-content: center;
}

.search-box {
  position: relative;
  width: 100%;
  max-width: 672px;
}

.search-box form {
  display: flex;
  gap: 8px;
}

.search-box input {
  flex: 1;
  padding: 10px 14px;
  border-radius: 8px;
  border: 1px solid var(--directory-card-border);
  font-size: 15px;
}

.search-box button {
  padding: 0 16px;
  border-radius: 8px;
  border: none;
  background: var(--directory-card-bg);
  color: var(--directory-primary);
  cursor: pointer;
}

.search-suggestions {
  position: absolute;
  left: 0;
  right: 0;
  margin: 4px 0 0;
  padding: 0;
  list-style: none;
  background: var(--directory-card-bg);
  border-radius: 0 0 8px 8px;
  box-shadow: 0 12px 24px rgba(15, 23, 42, 0.12);
  z-index: 10;
}

.suggestion-item {
  padding: 12px;
  cursor: pointer;
  border-bottom: 1px solid var(--directory-card-border);
}

.suggestion-item:last-child {
  border-bottom: none;
}

.suggestion-item:hover {
  background: var(--directory-bg);
}

.suggestion-name {
  margin: 0;
  font-weight: 600;
}

.suggestion-detail {
  margin: 2px 0 0;
  font-size: 13px;
  color: var(--directory-muted);
}

.directory-notice {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin: 16px auto 0;
  max-width: 1200px;
  padding: 10px 16px;
  border-radius: 8px;
  background: var(--directory-notice-bg);
  color: var(--directory-notice-text);
}

.directory-notice button {
  border: none;
  background: transparent;
  color: inherit;
  font-size: 18px;
  cursor: pointer;
}

.directory-body {
  max-width: 1200px;
  margin: 0 auto;
  padding: 32px 16px;
}

.directory-status {
  text-align: center;
  padding: 48px 0;
}

.directory-grid {
  display: grid;
  grid-template-columns: minmax(220px, 1fr) 3fr;
  gap: 16px;
}

.filter-panel {
  background: var(--directory-card-bg);
  border-radius: var(--directory-radius);
  border: 1px solid var(--directory-card-border);
  padding: 16px;
  align-self: start;
}

.filter-panel-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 16px;
}

.filter-panel-header h2 {
  margin: 0;
  font-size: 18px;
  color: var(--directory-heading);
}

.filter-clear {
  border: none;
  background: transparent;
  color: var(--directory-primary);
  cursor: pointer;
}

.filter-section {
  border-bottom: 1px solid var(--directory-card-border);
  padding-bottom: 16px;
  margin-bottom: 16px;
}

.filter-section:last-child {
  border-bottom: none;
  margin-bottom: 0;
}

.filter-section-header {
  display: flex;
  width: 100%;
  justify-content: space-between;
  align-items: center;
  border: none;
  background: transparent;
  padding: 0;
  cursor: pointer;
}

.filter-section-header h3 {
  margin: 0;
  font-size: 15px;
  font-weight: 500;
}

.filter-options {
  display: flex;
  flex-direction: column;
  gap: 8px;
  margin-top: 12px;
}

.filter-options-scroll {
  max-height: 240px;
  overflow-y: auto;
}

.filter-option {
  display: flex;
  align-items: center;
  gap: 8px;
}

.doctor-list-heading {
  margin: 0 0 16px;
  font-size: 20px;
  font-weight: 600;
}

.doctor-list-empty {
  text-align: center;
  padding: 32px 0;
}

.doctor-card {
  display: flex;
  gap: 24px;
  background: var(--directory-card-bg);
  border: 1px solid var(--directory-card-border);
  border-radius: var(--directory-radius);
  padding: 24px;
  margin-bottom: 16px;
  transition: box-shadow 0.2s ease;
}

.doctor-card:hover {
  box-shadow: 0 12px 24px rgba(15, 23, 42, 0.1);
}

.doctor-avatar {
  flex-shrink: 0;
  width: 80px;
  height: 80px;
  border-radius: 50%;
  overflow: hidden;
  background: #e5e7eb;
  display: flex;
  align-items: center;
  justify-content: center;
}

.doctor-avatar img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.doctor-initial {
  font-size: 36px;
  color: #9ca3af;
}

.doctor-body {
  flex: 1;
}

.doctor-body h3 {
  margin: 0;
  font-size: 20px;
  color: var(--directory-heading);
}

.doctor-muted,
.doctor-clinic {
  margin: 4px 0 0;
  color: var(--directory-muted);
}

.doctor-location {
  margin: 4px 0 0;
  font-size: 13px;
  color: var(--directory-muted);
}

.doctor-actions {
  text-align: right;
}

.doctor-fee {
  margin: 0;
  font-size: 20px;
  font-weight: 700;
}

.doctor-book {
  margin-top: 16px;
  padding: 8px 16px;
  border-radius: 8px;
  border: none;
  background: var(--directory-primary);
  color: var(--directory-primary-text);
  cursor: pointer;
}

@media (max-width: 1024px) {
  .directory-grid {
    grid-template-columns: 1fr;
  }
}

@media (max-width: 640px) {
  .doctor-card {
    flex-direction: column;
  }

  .doctor-actions {
    text-align: left;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-directory-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.dyn_into::<Node>()?)?;

    Ok(())
}
