//! Raw doctor JSON to `Doctor` records, plus the loader that fetches it.

mod fetch;
mod normalize;

pub use fetch::{fetch_doctors, load_doctors, DoctorSource, Loaded, StaticSource};
#[cfg(not(target_arch = "wasm32"))]
pub use fetch::HttpSource;
pub use normalize::{normalize_record, normalize_records, normalize_str, normalize_value};
