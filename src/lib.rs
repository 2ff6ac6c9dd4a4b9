//! **Maturity scoring and gap-analysis engine for security self-assessments.**
//!
//! `maturity-engine` is the computation core of a security-maturity
//! self-assessment platform: users answer taxonomy-organized questionnaires
//! about AI/cloud/DevSecOps controls, and this crate turns the raw answers
//! into weighted scores, maturity levels, coverage percentages, critical-gap
//! lists, and a prioritized remediation roadmap. Presentation, persistence,
//! authentication, and import/export formats live in the surrounding
//! application; this crate is pure, synchronous computation over an
//! in-memory answer snapshot and an immutable reference catalog.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The reference [`Catalog`] (domains, subcategories,
//!   questions, maturity bands), validated once at construction, plus the
//!   mutable [`AnswerSet`] the store collaborator supplies per scoring pass.
//! - **[`scoring`]**: The [`ScoringEngine`]: question scoring, the three
//!   aggregation levels, critical-gap extraction, and roadmap generation.
//! - **[`frameworks`]**: Normalization of free-text framework tags to
//!   canonical standard names and per-framework coverage reporting.
//! - **[`reports`]**: JSON and text renderers over the bundled
//!   [`AssessmentReport`].
//!
//! ## Getting Started
//!
//! ```no_run
//! use maturity_engine::model::{AnswerSet, Catalog};
//! use maturity_engine::scoring::ScoringEngine;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::from_json_str(&std::fs::read_to_string("catalog.json")?)?;
//!     let answers = AnswerSet::new();
//!
//!     let engine = ScoringEngine::new(&catalog);
//!     let report = engine.assess(&answers, None)?;
//!
//!     println!(
//!         "Overall maturity: {:.0}% ({})",
//!         report.overall.score * 100.0,
//!         report.overall.maturity.name()
//!     );
//!     for item in &report.roadmap {
//!         println!("[{}] {}", item.priority.name(), item.action);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Scoring semantics
//!
//! Every answer scores as response value times evidence-confidence
//! multiplier; unanswered questions score as null (excluded from averages,
//! counted against coverage), and not-applicable questions leave every
//! denominator. Aggregation is weighted bottom-up, and subcategories or
//! domains without a single answered question are excluded from weighted
//! averages rather than dragging scores to zero. See [`scoring`] for the
//! full rules.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Cast safety: usize to f64 casts are pervasive in ratio math; counts
    // are bounded by catalog size in practice
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod frameworks;
pub mod model;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use error::{AssessmentError, Result};
pub use frameworks::{FrameworkCategory, FrameworkCoverage, FrameworkNormalizer};
pub use model::{
    Answer, AnswerSet, Catalog, Criticality, GovernanceFunction, MaturityLevel, OwnershipRole,
    ResponseValue,
};
pub use reports::{AssessmentReport, JsonReporter, SummaryReporter};
pub use scoring::{
    ActiveQuestionSet, CriticalGap, DomainMetrics, OverallMetrics, PriorityBucket, QuestionScore,
    RoadmapItem, ScoringEngine, ScoringPolicy, SubcategoryMetrics,
};
