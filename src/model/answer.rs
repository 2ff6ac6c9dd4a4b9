//! Answer records and the answer-set read interface.
//!
//! Answers are the only entity mutated during normal operation; the engine
//! consumes an immutable snapshot of them per scoring pass. Persistence and
//! locking belong to the surrounding application.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::taxonomy::QuestionId;

/// A four-state response value, used both for the answer itself and for the
/// independent evidence-confidence axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseValue {
    Yes,
    Partial,
    No,
    NotApplicable,
}

impl ResponseValue {
    /// Get human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::Partial => "Partial",
            Self::No => "No",
            Self::NotApplicable => "Not applicable",
        }
    }
}

/// A user's response record for one question.
///
/// `response: None` means the question was opened but never answered, which
/// scores identically to having no [`Answer`] at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Question this answer belongs to
    pub question_id: QuestionId,
    /// Response value, if set
    #[serde(default)]
    pub response: Option<ResponseValue>,
    /// Evidence confidence, independent of the response axis
    #[serde(default)]
    pub evidence: Option<ResponseValue>,
    /// Free-text assessor notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Links to supporting evidence artifacts
    #[serde(default)]
    pub evidence_refs: Vec<String>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Answer {
    /// Create an answer with a response and evidence confidence
    #[must_use]
    pub fn new(
        question_id: impl Into<QuestionId>,
        response: Option<ResponseValue>,
        evidence: Option<ResponseValue>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            response,
            evidence,
            notes: None,
            evidence_refs: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Attach assessor notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attach an evidence reference link
    #[must_use]
    pub fn with_evidence_ref(mut self, link: impl Into<String>) -> Self {
        self.evidence_refs.push(link.into());
        self
    }

    /// Whether a response value is set (regardless of applicability)
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.response.is_some()
    }
}

/// Snapshot of all answers, keyed by question id.
///
/// At most one live answer per question; absence of a key is the valid
/// "unanswered" state. The engine never mutates a set mid-computation, so a
/// consistent snapshot from the store is all the caller must provide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnswerSet {
    answers: HashMap<QuestionId, Answer>,
}

impl AnswerSet {
    /// Create an empty answer set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the answer for a question
    pub fn insert(&mut self, answer: Answer) {
        self.answers.insert(answer.question_id.clone(), answer);
    }

    /// Get the answer for a question, if any
    #[must_use]
    pub fn get(&self, question_id: &QuestionId) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Remove the answer for a question (cascade on question deletion)
    pub fn remove(&mut self, question_id: &QuestionId) -> Option<Answer> {
        self.answers.remove(question_id)
    }

    /// Clear all answers
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Number of stored answers
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the set holds no answers
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over all stored answers
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = Self::new();
        for answer in iter {
            set.insert(answer);
        }
        set
    }
}
