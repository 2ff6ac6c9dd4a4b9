//! Report generation for export and presentation collaborators.
//!
//! The engine itself has no user-facing surface; these renderers turn an
//! [`AssessmentReport`] into the formats the surrounding application ships
//! (JSON for API/export consumers, a compact text summary for terminals).

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::AssessmentReport;
