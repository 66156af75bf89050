//! Pipeline entry points.
//!
//! - `run_pipeline`: discover, download, extract and persist reports
//! - `run_extract`: extract and persist local documents
//! - `run_validate`: check configuration
//! - `render_summary`: describe the latest report

pub mod run;
pub mod scratch;
pub mod summary;
pub mod validate;

pub use run::{ExtractedBatch, extract_all, run_extract, run_pipeline};
pub use scratch::ScratchDir;
pub use summary::render_summary;
pub use validate::run_validate;
