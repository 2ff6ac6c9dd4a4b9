//! Framework normalization, categorization, and coverage reporting.
//!
//! Reference data tags questions with free-text references to external
//! standards. This module normalizes those tags to canonical framework
//! names through an ordered rule list, groups canonical names into a small
//! editorial category set, and aggregates per-framework answer coverage.

mod categories;
mod coverage;
mod normalize;

pub use categories::{classify_framework, FrameworkCategory};
pub use coverage::{framework_coverage, FrameworkCoverage};
pub use normalize::{FrameworkNormalizer, NormalizationRule};
