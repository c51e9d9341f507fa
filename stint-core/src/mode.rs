//! Optimisation goals a user can score opportunities against.
//!
//! # Examples
//! ```
//! use std::str::FromStr;
//! use stint_core::{OptimizationMode, ScoringError};
//!
//! assert_eq!(OptimizationMode::from_str("irating_push"), Ok(OptimizationMode::IratingPush));
//! assert!(matches!(
//!     OptimizationMode::from_str("podium_hunt"),
//!     Err(ScoringError::InvalidMode { .. })
//! ));
//! ```

use serde::{Deserialize, Serialize};

use crate::ScoringError;

/// The user's stated goal, which selects the factor weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationMode {
    /// Even weighting across all factors.
    Balanced,
    /// Favour position gains and familiar combinations.
    IratingPush,
    /// Favour clean, consistent races.
    SafetyRecovery,
}

impl OptimizationMode {
    /// Every mode, in weight-table order.
    pub const ALL: [Self; 3] = [Self::Balanced, Self::IratingPush, Self::SafetyRecovery];

    /// Row of the mode in a per-mode table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Balanced => 0,
            Self::IratingPush => 1,
            Self::SafetyRecovery => 2,
        }
    }

    /// Return the wire literal for the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::IratingPush => "irating_push",
            Self::SafetyRecovery => "safety_recovery",
        }
    }
}

impl std::fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptimizationMode {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| ScoringError::InvalidMode { mode: s.to_owned() })
    }
}
