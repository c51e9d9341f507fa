//! Racing opportunities offered by the schedule pipeline.
//!
//! An opportunity is one series at one track for one race week, together
//! with the session times on offer and the population statistics observed
//! for that series and track pairing.

use serde::{Deserialize, Serialize};

use crate::{Category, LicenseLevel, lenient};

/// A single session start time on the schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Start hour, `0..24` UTC.
    pub hour: u8,
    /// Day of the week, `0` for Sunday.
    pub day_of_week: u8,
    /// Estimated strength of field for the session.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub strength_of_field: f64,
    /// Expected number of participants.
    #[serde(default)]
    pub participants: u32,
}

/// Population statistics for a series and track pairing.
///
/// Fields that were never observed hold NaN; the scorer substitutes its own
/// defaults for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    /// Average incidents per driver per race.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_incidents_per_race: f64,
    /// Average standard deviation of finishing positions.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_finish_position_std_dev: f64,
    /// Average strength of field.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_strength_of_field: f64,
    /// Spread of strength of field between sessions.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub strength_of_field_variability: f64,
    /// Percentage of starters who fail to finish, `0..100`.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub attrition_rate: f64,
    /// Average race length in minutes.
    #[serde(default = "lenient::missing", deserialize_with = "lenient::number")]
    pub avg_race_length: f64,
}

impl GlobalStats {
    /// Statistics with every field unobserved.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            avg_incidents_per_race: f64::NAN,
            avg_finish_position_std_dev: f64::NAN,
            avg_strength_of_field: f64::NAN,
            strength_of_field_variability: f64::NAN,
            attrition_rate: f64::NAN,
            avg_race_length: f64::NAN,
        }
    }
}

impl Default for GlobalStats {
    fn default() -> Self {
        Self::unknown()
    }
}

/// An event the user is eligible to enter.
///
/// # Examples
/// ```
/// use stint_core::{Category, GlobalStats, LicenseLevel, RacingOpportunity};
///
/// let opportunity = RacingOpportunity {
///     series_id: 139,
///     series_name: "Global Mazda MX-5 Cup".into(),
///     track_id: 47,
///     track_name: "Laguna Seca".into(),
///     license_level: LicenseLevel::Rookie,
///     category: Category::SportsCar,
///     season_year: 2026,
///     season_quarter: 4,
///     race_week: 3,
///     race_length_minutes: 20.0,
///     has_open_setup: false,
///     time_slots: Vec::new(),
///     global_stats: GlobalStats::unknown(),
/// };
/// assert_eq!(opportunity.series_track(), (139, 47));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RacingOpportunity {
    /// Series identifier.
    pub series_id: u32,
    /// Display name of the series.
    pub series_name: String,
    /// Track identifier.
    pub track_id: u32,
    /// Display name of the track.
    pub track_name: String,
    /// Minimum licence required to enter.
    pub license_level: LicenseLevel,
    /// Discipline of the series.
    pub category: Category,
    /// Season year.
    pub season_year: u16,
    /// Season quarter, `1..=4`.
    pub season_quarter: u8,
    /// Race week within the season.
    pub race_week: u8,
    /// Scheduled race length in minutes. NaN when absent or `null`.
    #[serde(
        rename = "raceLength",
        default = "lenient::missing",
        deserialize_with = "lenient::number"
    )]
    pub race_length_minutes: f64,
    /// Whether drivers may bring their own setups.
    #[serde(rename = "openSetup", default)]
    pub has_open_setup: bool,
    /// Session start times on offer this week.
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    /// Population statistics for the series and track.
    #[serde(default)]
    pub global_stats: GlobalStats,
}

impl RacingOpportunity {
    /// Return the `(series, track)` identifier pair.
    #[must_use]
    pub const fn series_track(&self) -> (u32, u32) {
        (self.series_id, self.track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_statistics_deserialise_as_nan() {
        let json = r#"{
            "seriesId": 1, "seriesName": "Rookie Mazda", "trackId": 2,
            "trackName": "Okayama", "licenseLevel": "rookie", "category": "sports_car",
            "seasonYear": 2026, "seasonQuarter": 4, "raceWeek": 1, "raceLength": 15,
            "timeSlots": [{"hour": 18, "dayOfWeek": 2, "participants": 20}],
            "globalStats": {"avgIncidentsPerRace": 3.5, "attritionRate": null}
        }"#;
        let opportunity: RacingOpportunity = serde_json::from_str(json).unwrap();
        assert!(!opportunity.has_open_setup);
        assert_eq!(opportunity.time_slots.len(), 1);
        assert!(opportunity.time_slots[0].strength_of_field.is_nan());
        assert!((opportunity.global_stats.avg_incidents_per_race - 3.5).abs() < f64::EPSILON);
        assert!(opportunity.global_stats.attrition_rate.is_nan());
        assert!(opportunity.global_stats.avg_race_length.is_nan());
    }

    #[test]
    fn absent_global_stats_default_to_unknown() {
        let json = r#"{
            "seriesId": 1, "seriesName": "Rookie Mazda", "trackId": 2,
            "trackName": "Okayama", "licenseLevel": "d", "category": "oval",
            "seasonYear": 2026, "seasonQuarter": 4, "raceWeek": 1, "raceLength": 30
        }"#;
        let opportunity: RacingOpportunity = serde_json::from_str(json).unwrap();
        assert!(opportunity.time_slots.is_empty());
        assert!(opportunity.global_stats.strength_of_field_variability.is_nan());
    }

    #[test]
    fn null_or_fractional_race_length_still_deserialises() {
        let json = r#"[
            {"seriesId": 1, "seriesName": "Rookie Mazda", "trackId": 2,
             "trackName": "Okayama", "licenseLevel": "rookie", "category": "sports_car",
             "seasonYear": 2026, "seasonQuarter": 4, "raceWeek": 1, "raceLength": null},
            {"seriesId": 1, "seriesName": "Rookie Mazda", "trackId": 2,
             "trackName": "Okayama", "licenseLevel": "rookie", "category": "sports_car",
             "seasonYear": 2026, "seasonQuarter": 4, "raceWeek": 1},
            {"seriesId": 1, "seriesName": "Rookie Mazda", "trackId": 2,
             "trackName": "Okayama", "licenseLevel": "rookie", "category": "sports_car",
             "seasonYear": 2026, "seasonQuarter": 4, "raceWeek": 1, "raceLength": 22.5}
        ]"#;
        let opportunities: Vec<RacingOpportunity> = serde_json::from_str(json).unwrap();
        assert!(opportunities[0].race_length_minutes.is_nan());
        assert!(opportunities[1].race_length_minutes.is_nan());
        assert!((opportunities[2].race_length_minutes - 22.5).abs() < f64::EPSILON);
    }
}
