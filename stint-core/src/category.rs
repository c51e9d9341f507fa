//! Racing disciplines an opportunity belongs to.
//!
//! Licences, safety ratings and iRatings are tracked per category, so the
//! enum doubles as the key for a user's [`LicenseClass`](crate::LicenseClass)
//! records.
//!
//! # Examples
//! ```
//! use stint_core::Category;
//!
//! assert_eq!(Category::SportsCar.as_str(), "sports_car");
//! assert_eq!(Category::DirtOval.to_string(), "dirt_oval");
//! ```

use serde::{Deserialize, Serialize};

/// A licence discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Paved oval racing.
    Oval,
    /// Closed-wheel road racing.
    SportsCar,
    /// Open-wheel road racing.
    FormulaCar,
    /// Dirt oval racing.
    DirtOval,
    /// Dirt road and rallycross.
    DirtRoad,
}

impl Category {
    /// Every category, in licence-table order.
    pub const ALL: [Self; 5] = [
        Self::Oval,
        Self::SportsCar,
        Self::FormulaCar,
        Self::DirtOval,
        Self::DirtRoad,
    ];

    /// Return the wire literal for the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Oval => "oval",
            Self::SportsCar => "sports_car",
            Self::FormulaCar => "formula_car",
            Self::DirtOval => "dirt_oval",
            Self::DirtRoad => "dirt_road",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalised)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}
