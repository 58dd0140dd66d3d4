use serde::{Deserialize, Serialize};

use super::calendar::ContributionCalendar;
use super::contributions::ContributionSummary;
use super::event::Event;
use super::user::{GitHubUser, Repository};

/// Everything the fetch layer hands to the insights engine. The user is
/// always present; repos and events default to empty; the summary and
/// calendar are independently optional and any subset may be absent.
#[derive(Debug, Clone)]
pub struct AllActivityData {
    pub user: GitHubUser,
    pub repos: Vec<Repository>,
    pub events: Vec<Event>,
    pub contribution_summary: Option<ContributionSummary>,
    pub contribution_calendar: Option<ContributionCalendar>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    /// Non-fork repositories using this language.
    pub count: u32,
    /// Rounded share of the non-fork repository total.
    pub percentage: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStat {
    pub name: String,
    pub full_name: String,
    pub url: String,
    pub stars: u32,
    /// Commit contributions, when the summary provided them; 0 otherwise.
    pub commits: u32,
    pub language: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    pub month: String,
    pub year: i32,
    pub contributions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTrait {
    pub name: String,
    /// Intensity on a 0-100 axis.
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperPersonality {
    pub title: String,
    pub emoji: String,
    pub description: String,
    /// Always exactly 4: time-of-day, language breadth, work pattern,
    /// collaboration.
    pub traits: Vec<PersonalityTrait>,
}

/// The final year-in-review report. Every field is always populated, with
/// zero/empty defaults when source data was missing, so renderers never
/// need to null-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedInsights {
    // Headline totals
    pub total_contributions: u32,
    pub total_commits: u32,
    pub total_prs: u32,
    pub total_issues: u32,
    pub total_reviews: u32,

    // Repositories
    pub repositories_contributed_to: u32,
    pub new_repositories_created: u32,
    pub top_repositories: Vec<RepoStat>,

    // Languages
    pub top_languages: Vec<LanguageStat>,
    pub total_languages: u32,

    // Time patterns (Sunday = index 0 throughout)
    pub most_productive_day: String,
    pub most_productive_hour: u32,
    pub peak_hour_range: String,
    pub activity_by_day: [u32; 7],
    pub activity_by_hour: [u32; 24],
    pub monthly_activity: Vec<MonthlyActivity>,

    // Streaks
    pub longest_streak: u32,
    pub current_streak: u32,
    pub total_active_days: u32,

    // Scores
    pub solo_vs_team_score: u32,
    pub bug_slayer_score: u32,

    // Carried through for heatmap rendering
    pub contribution_calendar: Option<ContributionCalendar>,

    pub personality: DeveloperPersonality,
}
