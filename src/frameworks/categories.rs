//! Editorial framework categories.
//!
//! Canonical framework names map many-to-one onto a small fixed category
//! set used by the overall aggregator's cross-cutting view. A question can
//! land in multiple categories when its tags span frameworks.

use serde::{Deserialize, Serialize};

/// Editorial grouping of external standards for coverage reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FrameworkCategory {
    /// AI-specific governance standards
    AiGovernance,
    /// General information-security management standards
    InformationSecurity,
    /// Application and adversarial security guidance
    ApplicationSecurity,
    /// Privacy and data-protection regulation
    PrivacyCompliance,
}

impl FrameworkCategory {
    /// Get human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AiGovernance => "AI Governance",
            Self::InformationSecurity => "Information Security",
            Self::ApplicationSecurity => "Application Security",
            Self::PrivacyCompliance => "Privacy & Compliance",
        }
    }

    /// Get all categories in report order
    #[must_use]
    pub const fn all() -> &'static [FrameworkCategory] {
        &[
            Self::AiGovernance,
            Self::InformationSecurity,
            Self::ApplicationSecurity,
            Self::PrivacyCompliance,
        ]
    }
}

/// Classify a canonical framework name into its category.
///
/// Returns `None` for canonical names with no editorial category; those
/// frameworks still appear in per-framework coverage but not in the
/// category view.
#[must_use]
pub fn classify_framework(canonical: &str) -> Option<FrameworkCategory> {
    match canonical {
        "NIST AI RMF" | "ISO/IEC 42001" | "EU AI Act" => Some(FrameworkCategory::AiGovernance),
        "ISO/IEC 27001" | "NIST CSF" | "CSA CCM" | "SOC 2" => {
            Some(FrameworkCategory::InformationSecurity)
        }
        "OWASP LLM Top 10" | "MITRE ATLAS" => Some(FrameworkCategory::ApplicationSecurity),
        "GDPR" | "LGPD" | "PCI DSS" => Some(FrameworkCategory::PrivacyCompliance),
        _ => None,
    }
}
