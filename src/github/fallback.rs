//! Unauthenticated calendar provider, used when the elevated GraphQL query
//! is unavailable. Less authoritative than the GraphQL calendar but good
//! enough for streaks and day-of-week patterns.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::{ContributionCalendar, ContributionDay, ContributionLevel, ContributionWeek};

const FALLBACK_API: &str = "https://github-contributions-api.jogruber.de/v4";

#[derive(Debug, Deserialize)]
struct FallbackResponse {
    #[serde(default)]
    total: HashMap<String, u32>,
    #[serde(default)]
    contributions: Vec<FallbackDay>,
}

#[derive(Debug, Deserialize)]
struct FallbackDay {
    date: NaiveDate,
    count: u32,
}

pub async fn fetch_fallback_calendar(
    client: &Client,
    username: &str,
    year: i32,
) -> Result<ContributionCalendar> {
    let url = format!("{}/{}?y={}", FALLBACK_API, username, year);
    tracing::info!("Fetching fallback contribution calendar for: {}", username);

    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::GitHubApi(format!(
            "Fallback calendar request failed with status {}",
            response.status()
        )));
    }

    let data: FallbackResponse = response.json().await?;
    Ok(build_calendar(data, year))
}

/// The provider returns a flat day list; regroup it into Sunday-aligned
/// weeks and derive quartile levels from the raw counts.
fn build_calendar(data: FallbackResponse, year: i32) -> ContributionCalendar {
    let mut weeks: Vec<ContributionWeek> = Vec::new();
    let mut current: Vec<ContributionDay> = Vec::new();
    let mut summed = 0u32;

    for day in &data.contributions {
        if day.date.weekday() == Weekday::Sun && !current.is_empty() {
            weeks.push(ContributionWeek {
                days: std::mem::take(&mut current),
            });
        }
        summed += day.count;
        current.push(ContributionDay {
            date: day.date,
            contribution_count: day.count,
            contribution_level: ContributionLevel::from_count(day.count),
        });
    }
    if !current.is_empty() {
        weeks.push(ContributionWeek { days: current });
    }

    let total_contributions = data
        .total
        .get(&year.to_string())
        .copied()
        .unwrap_or(summed);

    ContributionCalendar {
        total_contributions,
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, count: u32) -> FallbackDay {
        FallbackDay {
            date: date.parse().unwrap(),
            count,
        }
    }

    #[test]
    fn days_regroup_into_sunday_aligned_weeks() {
        // 2024-01-05 is a Friday, 2024-01-07 a Sunday.
        let data = FallbackResponse {
            total: HashMap::new(),
            contributions: vec![
                day("2024-01-05", 1),
                day("2024-01-06", 2),
                day("2024-01-07", 3),
                day("2024-01-08", 4),
            ],
        };

        let calendar = build_calendar(data, 2024);
        assert_eq!(calendar.weeks.len(), 2);
        assert_eq!(calendar.weeks[0].days.len(), 2);
        assert_eq!(calendar.weeks[1].days[0].date.to_string(), "2024-01-07");
        assert_eq!(calendar.total_contributions, 10);
    }

    #[test]
    fn provider_total_for_the_year_wins_over_the_sum() {
        let mut total = HashMap::new();
        total.insert("2024".to_string(), 99);
        let data = FallbackResponse {
            total,
            contributions: vec![day("2024-01-01", 1)],
        };

        assert_eq!(build_calendar(data, 2024).total_contributions, 99);
    }

    #[test]
    fn levels_follow_count_quartiles() {
        let data = FallbackResponse {
            total: HashMap::new(),
            contributions: vec![
                day("2024-01-01", 0),
                day("2024-01-02", 2),
                day("2024-01-03", 5),
                day("2024-01-04", 8),
                day("2024-01-05", 15),
            ],
        };

        let levels: Vec<ContributionLevel> = build_calendar(data, 2024)
            .weeks
            .iter()
            .flat_map(|w| w.days.iter().map(|d| d.contribution_level))
            .collect();
        assert_eq!(
            levels,
            [
                ContributionLevel::None,
                ContributionLevel::FirstQuartile,
                ContributionLevel::SecondQuartile,
                ContributionLevel::ThirdQuartile,
                ContributionLevel::FourthQuartile,
            ]
        );
    }
}
