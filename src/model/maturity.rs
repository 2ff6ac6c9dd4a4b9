//! Maturity-level classification bands.

use serde::{Deserialize, Serialize};

/// Maturity level derived from a normalized score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MaturityLevel {
    /// Ad-hoc or absent controls: 0-25%
    Initial,
    /// Controls emerging but inconsistent: 25-50%
    Developing,
    /// Controls defined and repeatable: 50-75%
    Established,
    /// Controls measured and continuously improved: 75-100%
    Advanced,
}

impl MaturityLevel {
    /// Get human-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Established => "Established",
            Self::Advanced => "Advanced",
        }
    }

    /// Get level description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Initial => "Controls are ad-hoc or absent",
            Self::Developing => "Controls are emerging but inconsistent",
            Self::Established => "Controls are defined and repeatable",
            Self::Advanced => "Controls are measured and continuously improved",
        }
    }
}

/// One band of the maturity classification table
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaturityBand {
    /// Inclusive upper bound of this band (0-1)
    pub ceiling: f64,
    /// Level assigned to scores in this band
    pub level: MaturityLevel,
}

/// Ordered band table mapping normalized scores onto maturity levels.
///
/// Lookup walks the bands in order and returns the first whose ceiling is
/// at or above the score, so each band's ceiling is inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaturityBands {
    bands: Vec<MaturityBand>,
}

impl MaturityBands {
    /// Create a band table from ordered bands.
    ///
    /// Bands must be sorted by ascending ceiling and the last ceiling must
    /// cover 1.0; [`Default`] provides the canonical four-band table.
    #[must_use]
    pub fn new(bands: Vec<MaturityBand>) -> Self {
        Self { bands }
    }

    /// Classify a normalized score (clamped to [0, 1]) into a level
    #[must_use]
    pub fn classify(&self, score: f64) -> MaturityLevel {
        let score = score.clamp(0.0, 1.0);
        for band in &self.bands {
            if score <= band.ceiling {
                return band.level;
            }
        }
        // Unreachable with a well-formed table; the last band covers 1.0.
        self.bands.last().map_or(MaturityLevel::Initial, |b| b.level)
    }
}

impl Default for MaturityBands {
    fn default() -> Self {
        Self::new(vec![
            MaturityBand {
                ceiling: 0.25,
                level: MaturityLevel::Initial,
            },
            MaturityBand {
                ceiling: 0.50,
                level: MaturityLevel::Developing,
            },
            MaturityBand {
                ceiling: 0.75,
                level: MaturityLevel::Established,
            },
            MaturityBand {
                ceiling: 1.0,
                level: MaturityLevel::Advanced,
            },
        ])
    }
}
