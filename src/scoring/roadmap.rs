//! Remediation roadmap generation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{DomainId, OwnershipRole};

use super::gaps::CriticalGap;

/// Time horizon for a remediation action, ordered most urgent first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PriorityBucket {
    /// Start now
    Immediate,
    /// Within the next quarter
    ShortTerm,
    /// Within the planning year
    MediumTerm,
}

impl PriorityBucket {
    /// Get human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Immediate => "Immediate",
            Self::ShortTerm => "Short-term",
            Self::MediumTerm => "Medium-term",
        }
    }
}

/// Qualitative magnitude label used for impact and effort.
///
/// Heuristic proxies for planning conversations, not measured values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MagnitudeLabel {
    Low,
    Medium,
    High,
}

impl MagnitudeLabel {
    /// Get human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// One remediation action derived from a critical gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapItem {
    /// Time horizon
    pub priority: PriorityBucket,
    /// Owning domain
    pub domain_id: DomainId,
    /// Domain display name
    pub domain_name: String,
    /// What to do
    pub action: String,
    /// Expected impact of closing the gap
    pub impact: MagnitudeLabel,
    /// Estimated effort to close the gap
    pub effort: MagnitudeLabel,
    /// Accountable role, if the gap carries one
    pub ownership_role: Option<OwnershipRole>,
}

/// Roadmap generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapConfig {
    /// Overall item cap
    pub max_items: usize,
    /// Per-domain item cap, so one weak domain cannot monopolize the plan
    pub max_per_domain: usize,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            max_items: 10,
            max_per_domain: 3,
        }
    }
}

/// Turn an ordered gap list into a time-boxed remediation plan.
///
/// Gaps arrive worst-first from the extractor; grouping by domain keeps at
/// most `max_per_domain` of each domain's worst gaps, then a stable sort
/// by priority bucket preserves the domain-grouped insertion order within
/// each bucket.
#[must_use]
pub fn generate_roadmap(gaps: &[CriticalGap], config: &RoadmapConfig) -> Vec<RoadmapItem> {
    let mut by_domain: IndexMap<&DomainId, Vec<&CriticalGap>> = IndexMap::new();
    for gap in gaps {
        by_domain.entry(&gap.domain_id).or_default().push(gap);
    }

    let mut items = Vec::new();
    for (_, domain_gaps) in by_domain {
        for gap in domain_gaps.into_iter().take(config.max_per_domain) {
            items.push(roadmap_item(gap));
        }
    }

    items.sort_by_key(|item| item.priority);
    items.truncate(config.max_items);
    items
}

fn roadmap_item(gap: &CriticalGap) -> RoadmapItem {
    use crate::model::Criticality;

    let urgent_score = gap.effective_score < 0.25;
    let is_critical = gap.criticality == Criticality::Critical;
    let priority = if is_critical && urgent_score {
        PriorityBucket::Immediate
    } else if is_critical || urgent_score {
        PriorityBucket::ShortTerm
    } else {
        PriorityBucket::MediumTerm
    };

    let effort = if gap.is_unanswered() {
        // No signal at all: assessing and implementing from scratch.
        MagnitudeLabel::Medium
    } else if urgent_score {
        MagnitudeLabel::High
    } else {
        MagnitudeLabel::Low
    };

    let impact = if is_critical {
        MagnitudeLabel::High
    } else {
        MagnitudeLabel::Medium
    };

    let action = if gap.is_unanswered() {
        format!(
            "Assess and implement controls for '{}' ({})",
            gap.question_text, gap.subcategory_name
        )
    } else {
        format!(
            "Strengthen controls for '{}' ({})",
            gap.question_text, gap.subcategory_name
        )
    };

    RoadmapItem {
        priority,
        domain_id: gap.domain_id.clone(),
        domain_name: gap.domain_name.clone(),
        action,
        impact,
        effort,
        ownership_role: gap.ownership_role,
    }
}
