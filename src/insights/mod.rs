//! The insights engine: pure derivation stages that turn heterogeneous,
//! partially-available activity data into one consistent report.
//!
//! Source authority runs summary > calendar > events. Every stage tolerates
//! any subset of the optional inputs being absent and degrades to a
//! zero/empty/neutral default; nothing in this module performs I/O or
//! returns an error.

pub mod activity;
pub mod basic_stats;
pub mod languages;
pub mod personality;
pub mod repos;
pub mod streaks;

#[cfg(test)]
pub(crate) mod testutil;

pub use activity::{ActivityPatterns, DAYS, MONTHS};
pub use basic_stats::BasicStats;
pub use languages::LanguageStats;
pub use personality::Scores;
pub use streaks::StreakStats;

use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{AllActivityData, Event, WrappedInsights};

/// Derive the full year-in-review report. Stateless and deterministic for
/// a fixed input and wall-clock date; "today" only affects the
/// current-streak cutoff and is evaluated in UTC.
pub fn calculate_insights(data: &AllActivityData, year: i32) -> WrappedInsights {
    calculate_insights_at(data, year, Utc::now().date_naive())
}

/// [`calculate_insights`] with an explicit "today".
pub fn calculate_insights_at(data: &AllActivityData, year: i32, today: NaiveDate) -> WrappedInsights {
    let year_events: Vec<Event> = data
        .events
        .iter()
        .filter(|e| e.created_at.year() == year)
        .cloned()
        .collect();

    let new_repositories_created = data
        .repos
        .iter()
        .filter(|r| r.created_at.year() == year)
        .count() as u32;

    let summary = data.contribution_summary.as_ref();
    let calendar = data.contribution_calendar.as_ref();

    let stats = basic_stats::calculate_basic_stats(&year_events, summary, calendar);
    let language_stats = languages::calculate_language_stats(&data.repos);
    let top_repositories = repos::calculate_top_repos(&data.repos, summary);
    let activity = activity::calculate_activity_patterns(&year_events, calendar, year);
    let streaks = streaks::calculate_streaks(calendar, today);
    let scores = personality::calculate_scores(&year_events, &data.repos);
    let personality = personality::calculate_personality(&data.repos, &activity, scores);

    WrappedInsights {
        total_contributions: stats.total_contributions,
        total_commits: stats.commits,
        total_prs: stats.prs,
        total_issues: stats.issues,
        total_reviews: stats.reviews,
        repositories_contributed_to: stats.repositories_contributed_to,
        new_repositories_created,
        top_repositories,
        top_languages: language_stats.top_languages,
        total_languages: language_stats.total_languages,
        most_productive_day: activity.most_productive_day,
        most_productive_hour: activity.most_productive_hour,
        peak_hour_range: activity.peak_hour_range,
        activity_by_day: activity.activity_by_day,
        activity_by_hour: activity.activity_by_hour,
        monthly_activity: activity.monthly_activity,
        longest_streak: streaks.longest_streak,
        current_streak: streaks.current_streak,
        total_active_days: streaks.total_active_days,
        solo_vs_team_score: scores.solo_vs_team,
        bug_slayer_score: scores.bug_slayer,
        contribution_calendar: data.contribution_calendar.clone(),
        personality,
    }
}
