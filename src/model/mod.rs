//! Data model for the maturity assessment engine.
//!
//! Splits into immutable reference data (taxonomy + catalog), the mutable
//! answer records supplied by the store collaborator, and the maturity band
//! table used to classify scores. All types are plain serde records so the
//! surrounding application can persist or export them however it likes.

mod answer;
mod catalog;
mod maturity;
mod taxonomy;

pub use answer::{Answer, AnswerSet, ResponseValue};
pub use catalog::Catalog;
pub use maturity::{MaturityBand, MaturityBands, MaturityLevel};
pub use taxonomy::{
    Criticality, Domain, DomainId, GovernanceFunction, OwnershipRole, Question, QuestionId,
    Subcategory, SubcategoryId,
};
