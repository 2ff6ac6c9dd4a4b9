//! Taxonomy reference data: domains, subcategories, and questions.
//!
//! These records are immutable at run time. They are built once from static
//! reference data (however the surrounding application sources it) and
//! validated at the [`Catalog`](super::Catalog) boundary, so the scoring
//! engine can assume well-formed input throughout.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Borrow the raw id string
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id! {
    /// Stable identifier of a [`Domain`]
    DomainId
}
string_id! {
    /// Stable identifier of a [`Subcategory`]
    SubcategoryId
}
string_id! {
    /// Stable identifier of a [`Question`]
    QuestionId
}

/// Risk-management lifecycle phase a domain belongs to.
///
/// Cross-cutting tag used to group domains in the overall aggregation; the
/// four phases follow the govern/map/measure/manage lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GovernanceFunction {
    Govern,
    Map,
    Measure,
    Manage,
}

impl GovernanceFunction {
    /// Get human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Govern => "Govern",
            Self::Map => "Map",
            Self::Measure => "Measure",
            Self::Manage => "Manage",
        }
    }

    /// Get all governance functions in lifecycle order
    #[must_use]
    pub const fn all() -> &'static [GovernanceFunction] {
        &[Self::Govern, Self::Map, Self::Measure, Self::Manage]
    }
}

/// Criticality of a subcategory, ordered from least to most severe.
///
/// The derived `Ord` is load-bearing: gap extraction sorts by criticality
/// descending, so `Low < Medium < High < Critical` must hold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Criticality {
    Low,
    Medium,
    High,
    Critical,
}

impl Criticality {
    /// Get human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Whether this criticality can produce critical gaps (High or Critical)
    #[must_use]
    pub const fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

/// Organizational function accountable for a question or subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OwnershipRole {
    Ciso,
    SecurityEngineering,
    MlEngineering,
    PlatformOps,
    Grc,
    DataPrivacy,
}

impl OwnershipRole {
    /// Get human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ciso => "CISO",
            Self::SecurityEngineering => "Security Engineering",
            Self::MlEngineering => "ML Engineering",
            Self::PlatformOps => "Platform Operations",
            Self::Grc => "Governance, Risk & Compliance",
            Self::DataPrivacy => "Data Privacy",
        }
    }

    /// Get all ownership roles
    #[must_use]
    pub const fn all() -> &'static [OwnershipRole] {
        &[
            Self::Ciso,
            Self::SecurityEngineering,
            Self::MlEngineering,
            Self::PlatformOps,
            Self::Grc,
            Self::DataPrivacy,
        ]
    }
}

/// A top-level security area grouping subcategories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    /// Unique domain id
    pub id: DomainId,
    /// Display name
    pub name: String,
    /// Display order within dashboards
    pub display_order: u32,
    /// Governance lifecycle phase, if tagged
    #[serde(default)]
    pub governance_function: Option<GovernanceFunction>,
    /// Optional descriptive text
    #[serde(default)]
    pub description: Option<String>,
}

/// A named control area within exactly one domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subcategory {
    /// Unique subcategory id
    pub id: SubcategoryId,
    /// Owning domain
    pub domain_id: DomainId,
    /// Display name
    pub name: String,
    /// Criticality used by gap extraction
    pub criticality: Criticality,
    /// Relative importance in weighted aggregation (positive)
    pub weight: f64,
    /// Accountable organizational role, if tagged
    #[serde(default)]
    pub ownership_role: Option<OwnershipRole>,
    /// Raw framework reference strings inherited by member questions
    #[serde(default)]
    pub framework_refs: Vec<String>,
}

/// The atomic assessable unit, belonging to exactly one subcategory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique question id
    pub id: QuestionId,
    /// Owning subcategory
    pub subcategory_id: SubcategoryId,
    /// Owning domain (must match the subcategory's domain)
    pub domain_id: DomainId,
    /// Question text shown to the assessor
    pub text: String,
    /// Raw framework reference strings this question evidences
    #[serde(default)]
    pub framework_refs: Vec<String>,
    /// Accountable organizational role, if tagged
    #[serde(default)]
    pub ownership_role: Option<OwnershipRole>,
}
