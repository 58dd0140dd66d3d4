use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Contribution intensity quartile, as reported by the GraphQL API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContributionLevel {
    None,
    FirstQuartile,
    SecondQuartile,
    ThirdQuartile,
    FourthQuartile,
}

impl ContributionLevel {
    /// Bucket a raw daily count into a quartile. Used for calendars from
    /// sources that only report counts.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::None,
            1..=3 => Self::FirstQuartile,
            4..=6 => Self::SecondQuartile,
            7..=9 => Self::ThirdQuartile,
            _ => Self::FourthQuartile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub contribution_count: u32,
    pub contribution_level: ContributionLevel,
}

/// One Sunday-aligned week of contribution days. Leading/trailing weeks of
/// a year may hold fewer than 7 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

/// A full year of day-granularity contribution counts. Authoritative source
/// for daily activity and streaks when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionCalendar {
    pub total_contributions: u32,
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionCalendar {
    /// All days across all weeks, in calendar order within each week.
    pub fn days(&self) -> impl Iterator<Item = &ContributionDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    /// Sum of daily counts (may differ from `total_contributions` when the
    /// source computed its total differently).
    pub fn summed_count(&self) -> u32 {
        self.days().map(|d| d.contribution_count).sum()
    }
}
