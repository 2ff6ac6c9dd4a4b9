//! The reference catalog: validated, indexed taxonomy data.
//!
//! All referential-integrity checking happens once here, at the boundary,
//! so every scoring function downstream can resolve ids without defensive
//! null handling. The catalog is immutable after construction.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::error::{AssessmentError, Result};

use super::taxonomy::{Domain, DomainId, Question, QuestionId, Subcategory, SubcategoryId};

/// Immutable, indexed reference data consumed by the scoring engine.
///
/// Domains are ordered by `display_order`; subcategories and questions keep
/// their reference-data insertion order within their parents.
#[derive(Debug, Clone)]
pub struct Catalog {
    domains: IndexMap<DomainId, Domain>,
    subcategories: IndexMap<SubcategoryId, Subcategory>,
    questions: IndexMap<QuestionId, Question>,
    subcategories_by_domain: HashMap<DomainId, Vec<SubcategoryId>>,
    questions_by_subcategory: HashMap<SubcategoryId, Vec<QuestionId>>,
}

/// Raw catalog shape accepted by the JSON loader
#[derive(Debug, Deserialize)]
struct RawCatalog {
    domains: Vec<Domain>,
    subcategories: Vec<Subcategory>,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build and validate a catalog from reference data.
    ///
    /// Rejects duplicate ids, dangling `domain_id`/`subcategory_id`
    /// references, questions whose domain disagrees with their
    /// subcategory's domain, and non-positive subcategory weights.
    pub fn build(
        mut domains: Vec<Domain>,
        subcategories: Vec<Subcategory>,
        questions: Vec<Question>,
    ) -> Result<Self> {
        if domains.is_empty() {
            warn!("building catalog with no domains; all aggregations will be empty");
        }

        domains.sort_by_key(|d| d.display_order);

        let mut domain_map = IndexMap::with_capacity(domains.len());
        for domain in domains {
            if domain_map.insert(domain.id.clone(), domain).is_some() {
                return Err(AssessmentError::validation("duplicate domain id"));
            }
        }

        let mut subcategory_map = IndexMap::with_capacity(subcategories.len());
        let mut subcategories_by_domain: HashMap<DomainId, Vec<SubcategoryId>> = HashMap::new();
        for sub in subcategories {
            if !domain_map.contains_key(&sub.domain_id) {
                return Err(AssessmentError::validation(format!(
                    "subcategory '{}' references unknown domain '{}'",
                    sub.id, sub.domain_id
                )));
            }
            if sub.weight <= 0.0 || !sub.weight.is_finite() {
                return Err(AssessmentError::validation(format!(
                    "subcategory '{}' has non-positive weight {}",
                    sub.id, sub.weight
                )));
            }
            subcategories_by_domain
                .entry(sub.domain_id.clone())
                .or_default()
                .push(sub.id.clone());
            if subcategory_map.insert(sub.id.clone(), sub).is_some() {
                return Err(AssessmentError::validation("duplicate subcategory id"));
            }
        }

        let mut question_map = IndexMap::with_capacity(questions.len());
        let mut questions_by_subcategory: HashMap<SubcategoryId, Vec<QuestionId>> = HashMap::new();
        for question in questions {
            let Some(sub) = subcategory_map.get(&question.subcategory_id) else {
                return Err(AssessmentError::validation(format!(
                    "question '{}' references unknown subcategory '{}'",
                    question.id, question.subcategory_id
                )));
            };
            if sub.domain_id != question.domain_id {
                return Err(AssessmentError::validation(format!(
                    "question '{}' claims domain '{}' but its subcategory belongs to '{}'",
                    question.id, question.domain_id, sub.domain_id
                )));
            }
            questions_by_subcategory
                .entry(question.subcategory_id.clone())
                .or_default()
                .push(question.id.clone());
            if question_map
                .insert(question.id.clone(), question)
                .is_some()
            {
                return Err(AssessmentError::validation("duplicate question id"));
            }
        }

        Ok(Self {
            domains: domain_map,
            subcategories: subcategory_map,
            questions: question_map,
            subcategories_by_domain,
            questions_by_subcategory,
        })
    }

    /// Load a catalog from a JSON document with `domains`, `subcategories`
    /// and `questions` arrays.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|e| AssessmentError::parse("catalog document", e))?;
        Self::build(raw.domains, raw.subcategories, raw.questions)
    }

    /// Look up a domain by id (hard failure on unknown id)
    pub fn domain(&self, id: &DomainId) -> Result<&Domain> {
        self.domains
            .get(id)
            .ok_or_else(|| AssessmentError::lookup("domain", id.as_str()))
    }

    /// Look up a subcategory by id (hard failure on unknown id)
    pub fn subcategory(&self, id: &SubcategoryId) -> Result<&Subcategory> {
        self.subcategories
            .get(id)
            .ok_or_else(|| AssessmentError::lookup("subcategory", id.as_str()))
    }

    /// Look up a question by id (hard failure on unknown id)
    pub fn question(&self, id: &QuestionId) -> Result<&Question> {
        self.questions
            .get(id)
            .ok_or_else(|| AssessmentError::lookup("question", id.as_str()))
    }

    /// All domains in display order
    pub fn domains(&self) -> impl Iterator<Item = &Domain> {
        self.domains.values()
    }

    /// All subcategories in insertion order
    pub fn subcategories(&self) -> impl Iterator<Item = &Subcategory> {
        self.subcategories.values()
    }

    /// All questions in insertion order
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    /// Subcategory ids belonging to a domain, in insertion order
    #[must_use]
    pub fn subcategories_in(&self, domain_id: &DomainId) -> &[SubcategoryId] {
        self.subcategories_by_domain
            .get(domain_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Question ids belonging to a subcategory, in insertion order
    #[must_use]
    pub fn questions_in(&self, subcategory_id: &SubcategoryId) -> &[QuestionId] {
        self.questions_by_subcategory
            .get(subcategory_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Total number of questions in the catalog
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Combined framework references for a question: its own tags plus the
    /// tags inherited from its subcategory, deduplicated in encounter order.
    ///
    /// Borrows from both the catalog and the question, so the returned
    /// slices live only as long as the shorter of the two.
    pub fn framework_refs_for<'a>(&'a self, question: &'a Question) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        let mut refs = Vec::new();
        let inherited = self
            .subcategories
            .get(&question.subcategory_id)
            .map(|s| s.framework_refs.as_slice())
            .unwrap_or(&[]);
        for tag in question.framework_refs.iter().chain(inherited) {
            if seen.insert(tag.as_str()) {
                refs.push(tag.as_str());
            }
        }
        refs
    }
}
