//! Licence levels and per-category licence records.

use serde::{Deserialize, Serialize};

use crate::{Category, lenient};

/// Licence grade, from the entry-level rookie class up to pro.
///
/// Variants are declared in ascending order so comparisons follow licence
/// progression.
///
/// # Examples
/// ```
/// use stint_core::LicenseLevel;
///
/// assert_eq!(LicenseLevel::Rookie.ordinal(), 1);
/// assert_eq!(LicenseLevel::Pro.ordinal(), 6);
/// assert!(LicenseLevel::C < LicenseLevel::A);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseLevel {
    /// Rookie licence.
    Rookie,
    /// Class D.
    D,
    /// Class C.
    C,
    /// Class B.
    B,
    /// Class A.
    A,
    /// Pro licence.
    Pro,
}

impl LicenseLevel {
    /// Every level, lowest first.
    pub const ALL: [Self; 6] = [Self::Rookie, Self::D, Self::C, Self::B, Self::A, Self::Pro];

    /// Position of the level on the `1..=6` licence ladder.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Rookie => 1,
            Self::D => 2,
            Self::C => 3,
            Self::B => 4,
            Self::A => 5,
            Self::Pro => 6,
        }
    }

    /// Return the wire literal for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rookie => "rookie",
            Self::D => "d",
            Self::C => "c",
            Self::B => "b",
            Self::A => "a",
            Self::Pro => "pro",
        }
    }
}

impl std::fmt::Display for LicenseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LicenseLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        let literal = normalised.strip_prefix("class ").unwrap_or(&normalised);
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == literal)
            .ok_or_else(|| format!("unknown licence level '{s}'"))
    }
}

/// A user's licence standing in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseClass {
    /// Category the licence applies to.
    pub category: Category,
    /// Licence grade held.
    pub level: LicenseLevel,
    /// Safety rating, typically `0.0..5.0`.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub safety_rating: f64,
    /// iRating in this category.
    #[serde(
        rename = "iRating",
        default = "lenient::missing",
        deserialize_with = "lenient::number"
    )]
    pub irating: f64,
}
