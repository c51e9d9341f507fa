//! Test-only builders for opportunities and user histories.
//!
//! The defaults describe an unremarkable rookie sports-car race: twenty
//! minutes long, eight sessions a week, four incidents per race on average.

use chrono::{DateTime, Utc};

use crate::{
    Category, GlobalStats, LicenseClass, LicenseLevel, RacingOpportunity, SeriesTrackHistory,
    TimeSlot, UserHistory, UserOverallStats,
};

/// Series identifier used by [`OpportunityBuilder::new`].
pub const DEFAULT_SERIES_ID: u32 = 139;
/// Track identifier used by [`OpportunityBuilder::new`].
pub const DEFAULT_TRACK_ID: u32 = 47;

/// Builder for [`RacingOpportunity`] fixtures.
#[derive(Debug, Clone)]
pub struct OpportunityBuilder {
    opportunity: RacingOpportunity,
}

impl Default for OpportunityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OpportunityBuilder {
    /// Start from the default rookie sports-car race.
    #[must_use]
    pub fn new() -> Self {
        Self {
            opportunity: RacingOpportunity {
                series_id: DEFAULT_SERIES_ID,
                series_name: "Global Mazda MX-5 Cup".to_owned(),
                track_id: DEFAULT_TRACK_ID,
                track_name: "WeatherTech Raceway Laguna Seca".to_owned(),
                license_level: LicenseLevel::Rookie,
                category: Category::SportsCar,
                season_year: 2026,
                season_quarter: 4,
                race_week: 5,
                race_length_minutes: 20.0,
                has_open_setup: false,
                time_slots: slots(8),
                global_stats: GlobalStats {
                    avg_incidents_per_race: 4.0,
                    avg_finish_position_std_dev: 5.0,
                    avg_strength_of_field: 1400.0,
                    strength_of_field_variability: 200.0,
                    attrition_rate: 10.0,
                    avg_race_length: 20.0,
                },
            },
        }
    }

    /// Set the series and track identifiers.
    #[must_use]
    pub const fn series_track(mut self, series_id: u32, track_id: u32) -> Self {
        self.opportunity.series_id = series_id;
        self.opportunity.track_id = track_id;
        self
    }

    /// Set the race length in minutes.
    #[must_use]
    pub fn race_length(mut self, minutes: u32) -> Self {
        self.opportunity.race_length_minutes = f64::from(minutes);
        self
    }

    /// Set the required licence level.
    #[must_use]
    pub const fn license_level(mut self, level: LicenseLevel) -> Self {
        self.opportunity.license_level = level;
        self
    }

    /// Set the category.
    #[must_use]
    pub const fn category(mut self, category: Category) -> Self {
        self.opportunity.category = category;
        self
    }

    /// Replace the schedule with `count` hourly sessions.
    #[must_use]
    pub fn time_slots(mut self, count: usize) -> Self {
        self.opportunity.time_slots = slots(count);
        self
    }

    /// Replace the population statistics.
    #[must_use]
    pub fn global_stats(mut self, stats: GlobalStats) -> Self {
        self.opportunity.global_stats = stats;
        self
    }

    /// Set the average incidents per race in the population statistics.
    #[must_use]
    pub const fn global_incidents(mut self, incidents: f64) -> Self {
        self.opportunity.global_stats.avg_incidents_per_race = incidents;
        self
    }

    /// Set the strength-of-field variability.
    #[must_use]
    pub const fn sof_variability(mut self, variability: f64) -> Self {
        self.opportunity.global_stats.strength_of_field_variability = variability;
        self
    }

    /// Set the average strength of field.
    #[must_use]
    pub const fn average_sof(mut self, sof: f64) -> Self {
        self.opportunity.global_stats.avg_strength_of_field = sof;
        self
    }

    /// Set the attrition rate.
    #[must_use]
    pub const fn attrition_rate(mut self, rate: f64) -> Self {
        self.opportunity.global_stats.attrition_rate = rate;
        self
    }

    /// Set the population finishing position spread.
    #[must_use]
    pub const fn finish_std_dev(mut self, std_dev: f64) -> Self {
        self.opportunity.global_stats.avg_finish_position_std_dev = std_dev;
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> RacingOpportunity {
        self.opportunity
    }
}

fn slots(count: usize) -> Vec<TimeSlot> {
    (0..count)
        .map(|offset| TimeSlot {
            hour: u8::try_from(offset % 24).unwrap_or(0),
            day_of_week: u8::try_from((offset / 24) % 7).unwrap_or(0),
            strength_of_field: 1400.0,
            participants: 24,
        })
        .collect()
}

/// Build a personal record with typical mid-pack averages.
#[must_use]
pub fn series_track_record(series_id: u32, track_id: u32, race_count: u32) -> SeriesTrackHistory {
    SeriesTrackHistory {
        series_id,
        track_id,
        race_count,
        avg_starting_position: 12.0,
        avg_finishing_position: 10.0,
        avg_position_delta: 2.0,
        avg_incidents: 3.0,
        finish_position_std_dev: 4.0,
        last_race_date: None,
    }
}

/// Builder for [`UserHistory`] fixtures.
#[derive(Debug, Clone)]
pub struct HistoryBuilder {
    history: UserHistory,
}

impl Default for HistoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuilder {
    /// Start from a user with no races and no licences.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: UserHistory::new("driver-test"),
        }
    }

    /// Add a personal series and track record.
    #[must_use]
    pub fn record(mut self, record: SeriesTrackHistory) -> Self {
        self.history.series_track_history.push(record);
        self
    }

    /// Add a record for the default opportunity's pairing.
    #[must_use]
    pub fn default_pairing(self, race_count: u32, last_race: Option<DateTime<Utc>>) -> Self {
        let mut record = series_track_record(DEFAULT_SERIES_ID, DEFAULT_TRACK_ID, race_count);
        record.last_race_date = last_race;
        self.record(record)
    }

    /// Set the overall totals.
    #[must_use]
    pub const fn overall(mut self, total_races: u32, incidents: f64, position_delta: f64) -> Self {
        self.history.overall_stats = UserOverallStats {
            total_races,
            avg_incidents_per_race: incidents,
            avg_position_delta: position_delta,
            consistency: f64::NAN,
        };
        self
    }

    /// Add a licence.
    #[must_use]
    pub fn license(
        mut self,
        category: Category,
        level: LicenseLevel,
        safety_rating: f64,
        irating: f64,
    ) -> Self {
        self.history.license_classes.push(LicenseClass {
            category,
            level,
            safety_rating,
            irating,
        });
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> UserHistory {
        self.history
    }
}
