// Adapters layer: concrete implementations for the external systems the
// pipeline talks to (dataset hosting, translation backend).

pub mod google_translate;
pub mod hf_datasets;

pub use google_translate::GoogleTranslator;
pub use hf_datasets::HfDatasetSource;
