//! Application-level configuration.
//!
//! - [`ExportParams`]: contents page and combined output naming

pub mod export_params;

pub use export_params::{DEFAULT_COMBINED_STEM, DEFAULT_CONTENTS_PAGE, ExportParams};
