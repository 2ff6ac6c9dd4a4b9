//! The maturity scoring and gap-analysis engine.
//!
//! A deterministic computation pipeline turning raw question answers into
//! weighted scores, maturity levels, coverage percentages, critical-gap
//! lists, and a prioritized remediation roadmap. Aggregation runs strictly
//! bottom-up: question, then subcategory, then domain, then overall, with
//! gap extraction, framework coverage, and roadmap generation as
//! independent consumers of the same answer snapshot.
//!
//! # Usage
//!
//! ```no_run
//! use maturity_engine::model::{AnswerSet, Catalog};
//! use maturity_engine::scoring::ScoringEngine;
//!
//! # fn run(catalog: &Catalog, answers: &AnswerSet) -> maturity_engine::Result<()> {
//! let engine = ScoringEngine::new(catalog);
//! let report = engine.assess(answers, None)?;
//!
//! println!("Overall: {:.0}%", report.overall.score * 100.0);
//! for gap in &report.gaps {
//!     println!("- [{}] {}", gap.criticality.name(), gap.question_text);
//! }
//! # Ok(())
//! # }
//! ```

mod domain;
mod engine;
mod gaps;
mod overall;
mod policy;
mod question;
mod roadmap;
mod subcategory;

pub use domain::{domain_metrics, DomainMetrics};
pub use engine::{ScoringEngine, ENGINE_VERSION};
pub use gaps::{critical_gaps, CriticalGap};
pub use overall::{
    overall_metrics, CategoryMetrics, GovernanceFunctionMetrics, OverallMetrics, RoleMetrics,
};
pub use policy::{
    ActiveQuestionSet, EvidenceMultiplierTable, ResponseScoreTable, ScoringPolicy,
};
pub use question::{score_answer, QuestionScore};
pub use roadmap::{
    generate_roadmap, MagnitudeLabel, PriorityBucket, RoadmapConfig, RoadmapItem,
};
pub use subcategory::{subcategory_metrics, SubcategoryMetrics};
