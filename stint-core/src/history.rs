//! A user's racing record as assembled by the analytics layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, LicenseClass, lenient};

/// Aggregated personal results for one series and track pairing.
///
/// Averages are only meaningful when `race_count >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesTrackHistory {
    /// Series identifier.
    pub series_id: u32,
    /// Track identifier.
    pub track_id: u32,
    /// Number of races the user has run at this pairing.
    #[serde(default)]
    pub race_count: u32,
    /// Average starting position.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_starting_position: f64,
    /// Average finishing position.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_finishing_position: f64,
    /// Average positions gained (start minus finish).
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_position_delta: f64,
    /// Average incidents per race.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_incidents: f64,
    /// Standard deviation of finishing positions.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub finish_position_std_dev: f64,
    /// When the user last raced this pairing.
    #[serde(default)]
    pub last_race_date: Option<DateTime<Utc>>,
}

/// Category-agnostic totals across every race the user has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOverallStats {
    /// Total races run.
    #[serde(default)]
    pub total_races: u32,
    /// Average incidents per race.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_incidents_per_race: f64,
    /// Average positions gained per race.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_position_delta: f64,
    /// Overall consistency figure.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub consistency: f64,
}

impl Default for UserOverallStats {
    fn default() -> Self {
        Self {
            total_races: 0,
            avg_incidents_per_race: f64::NAN,
            avg_position_delta: f64::NAN,
            consistency: f64::NAN,
        }
    }
}

/// Outcome of looking up the personal record for a series and track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HistoryMatch<'a> {
    /// The user has a record for the pairing.
    Found(&'a SeriesTrackHistory),
    /// The user has never raced the pairing.
    NotFound,
}

impl<'a> HistoryMatch<'a> {
    /// Return the matching record, if any.
    #[must_use]
    pub const fn record(self) -> Option<&'a SeriesTrackHistory> {
        match self {
            Self::Found(record) => Some(record),
            Self::NotFound => None,
        }
    }

    /// Races run at the pairing, `0` when there is no record.
    #[must_use]
    pub const fn race_count(self) -> u32 {
        match self {
            Self::Found(record) => record.race_count,
            Self::NotFound => 0,
        }
    }

    /// Return the record only when it covers at least `min_races` races.
    #[must_use]
    pub const fn with_min_races(self, min_races: u32) -> Option<&'a SeriesTrackHistory> {
        match self {
            Self::Found(record) if record.race_count >= min_races => Some(record),
            Self::Found(_) | Self::NotFound => None,
        }
    }

    /// Report whether a record exists, regardless of its race count.
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Everything the engine knows about one user.
///
/// Series and track pairs are unique within `series_track_history`, and
/// categories are unique within `license_classes`.
///
/// # Examples
/// ```
/// use stint_core::{HistoryMatch, UserHistory};
///
/// let history = UserHistory::new("driver-42");
/// assert_eq!(history.find_series_track(1, 2), HistoryMatch::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHistory {
    /// Identifier of the user.
    pub user_id: String,
    /// Personal records per series and track pairing.
    #[serde(default)]
    pub series_track_history: Vec<SeriesTrackHistory>,
    /// Totals across all races.
    #[serde(default)]
    pub overall_stats: UserOverallStats,
    /// Licence standing per category.
    #[serde(default)]
    pub license_classes: Vec<LicenseClass>,
}

impl UserHistory {
    /// Construct a history with no races and no licences.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            series_track_history: Vec::new(),
            overall_stats: UserOverallStats::default(),
            license_classes: Vec::new(),
        }
    }

    /// Look up the personal record for a series and track pairing.
    #[must_use]
    pub fn find_series_track(&self, series_id: u32, track_id: u32) -> HistoryMatch<'_> {
        self.series_track_history
            .iter()
            .find(|record| record.series_id == series_id && record.track_id == track_id)
            .map_or(HistoryMatch::NotFound, HistoryMatch::Found)
    }

    /// Records sharing the series or the track, excluding the exact pairing.
    pub fn related_histories(
        &self,
        series_id: u32,
        track_id: u32,
    ) -> impl Iterator<Item = &SeriesTrackHistory> {
        self.series_track_history.iter().filter(move |record| {
            let same_series = record.series_id == series_id;
            let same_track = record.track_id == track_id;
            same_series != same_track
        })
    }

    /// Return the licence held in `category`, if any.
    #[must_use]
    pub fn license_for(&self, category: Category) -> Option<&LicenseClass> {
        self.license_classes
            .iter()
            .find(|class| class.category == category)
    }
}
