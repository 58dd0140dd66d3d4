//! Stateless rendering of a [`WrappedInsights`] report. The renderer only
//! reads the finished report; every field is guaranteed populated, so no
//! null-checking happens here.

use crate::insights::DAYS;
use crate::models::{GitHubUser, WrappedInsights};

const BAR_WIDTH: usize = 24;

pub fn format_text(user: &GitHubUser, insights: &WrappedInsights, year: i32) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n=== GitHub Wrapped {}: @{} ===\n\n",
        year, user.login
    ));
    if let Some(ref name) = user.name {
        output.push_str(&format!("{} · ", name));
    }
    output.push_str(&format!(
        "{} followers · {} public repos\n\n",
        user.followers, user.public_repos
    ));

    output.push_str(&format!(
        "Total Contributions: {}\n",
        insights.total_contributions
    ));
    output.push_str(&format!(
        "  Commits: {} | PRs: {} | Issues: {} | Reviews: {}\n",
        insights.total_commits, insights.total_prs, insights.total_issues, insights.total_reviews
    ));
    output.push_str(&format!(
        "  Repositories contributed to: {} ({} created this year)\n\n",
        insights.repositories_contributed_to, insights.new_repositories_created
    ));

    output.push_str("Streaks:\n");
    output.push_str(&format!(
        "  Longest: {} days | Current: {} days | Active days: {}\n\n",
        insights.longest_streak, insights.current_streak, insights.total_active_days
    ));

    if !insights.top_languages.is_empty() {
        output.push_str(&format!(
            "Top Languages ({} total):\n",
            insights.total_languages
        ));
        let max = insights
            .top_languages
            .iter()
            .map(|l| l.count)
            .max()
            .unwrap_or(1);
        for language in &insights.top_languages {
            output.push_str(&format!(
                "  {:<12} {:<width$} {:>3}% ({} repos)\n",
                language.name,
                bar(language.count, max),
                language.percentage,
                language.count,
                width = BAR_WIDTH
            ));
        }
        output.push('\n');
    }

    if !insights.top_repositories.is_empty() {
        output.push_str("Top Repositories:\n");
        for (i, repo) in insights.top_repositories.iter().enumerate() {
            output.push_str(&format!("  {}. {} (★ {})", i + 1, repo.full_name, repo.stars));
            if repo.commits > 0 {
                output.push_str(&format!(" - {} commits", repo.commits));
            }
            if let Some(ref language) = repo.language {
                output.push_str(&format!(" [{}]", language));
            }
            output.push('\n');
        }
        output.push('\n');
    }

    output.push_str("Activity:\n");
    output.push_str(&format!(
        "  Most productive day: {}\n",
        insights.most_productive_day
    ));
    output.push_str(&format!("  Peak hours: {}\n", insights.peak_hour_range));
    let day_max = insights.activity_by_day.iter().copied().max().unwrap_or(1);
    for (i, &count) in insights.activity_by_day.iter().enumerate() {
        output.push_str(&format!(
            "  {:<10} {:<width$} {}\n",
            DAYS[i],
            bar(count, day_max),
            count,
            width = BAR_WIDTH
        ));
    }
    output.push('\n');

    output.push_str("Monthly Activity:\n");
    let month_max = insights
        .monthly_activity
        .iter()
        .map(|m| m.contributions)
        .max()
        .unwrap_or(1);
    for month in &insights.monthly_activity {
        output.push_str(&format!(
            "  {:<4} {:<width$} {}\n",
            month.month,
            bar(month.contributions, month_max),
            month.contributions,
            width = BAR_WIDTH
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Personality: {} {}\n",
        insights.personality.emoji, insights.personality.title
    ));
    output.push_str(&format!("  {}\n", insights.personality.description));
    for personality_trait in &insights.personality.traits {
        output.push_str(&format!(
            "  - {:<16} [{:>3}/100] {}\n",
            personality_trait.name, personality_trait.value, personality_trait.label
        ));
    }
    output.push_str(&format!(
        "  Solo vs Team: {}/100 | Bug Slayer: {}/100\n",
        insights.solo_vs_team_score, insights.bug_slayer_score
    ));

    output
}

pub fn format_markdown(user: &GitHubUser, insights: &WrappedInsights, year: i32) -> String {
    let mut output = String::new();

    output.push_str(&format!("# GitHub Wrapped {}: @{}\n\n", year, user.login));
    if let Some(ref bio) = user.bio {
        output.push_str(&format!("> {}\n\n", bio));
    }

    output.push_str("## Summary\n\n");
    output.push_str("| Metric | Value |\n|--------|-------|\n");
    output.push_str(&format!(
        "| Total Contributions | {} |\n",
        insights.total_contributions
    ));
    output.push_str(&format!("| Commits | {} |\n", insights.total_commits));
    output.push_str(&format!("| Pull Requests | {} |\n", insights.total_prs));
    output.push_str(&format!("| Issues | {} |\n", insights.total_issues));
    output.push_str(&format!("| Reviews | {} |\n", insights.total_reviews));
    output.push_str(&format!(
        "| Repositories Contributed To | {} |\n",
        insights.repositories_contributed_to
    ));
    output.push_str(&format!(
        "| New Repositories | {} |\n",
        insights.new_repositories_created
    ));
    output.push_str(&format!(
        "| Longest Streak | {} days |\n",
        insights.longest_streak
    ));
    output.push_str(&format!(
        "| Current Streak | {} days |\n",
        insights.current_streak
    ));
    output.push_str(&format!(
        "| Active Days | {} |\n",
        insights.total_active_days
    ));

    if !insights.top_languages.is_empty() {
        output.push_str("\n## Top Languages\n\n");
        output.push_str("| Language | Repos | Share |\n|----------|-------|-------|\n");
        for language in &insights.top_languages {
            output.push_str(&format!(
                "| {} | {} | {}% |\n",
                language.name, language.count, language.percentage
            ));
        }
    }

    if !insights.top_repositories.is_empty() {
        output.push_str("\n## Top Repositories\n\n");
        output.push_str("| Repository | Stars | Commits | Language |\n");
        output.push_str("|------------|-------|---------|----------|\n");
        for repo in &insights.top_repositories {
            output.push_str(&format!(
                "| [{}]({}) | {} | {} | {} |\n",
                repo.full_name,
                repo.url,
                repo.stars,
                repo.commits,
                repo.language.as_deref().unwrap_or("-")
            ));
        }
    }

    output.push_str("\n## Activity Patterns\n\n");
    output.push_str(&format!(
        "- Most productive day: **{}**\n",
        insights.most_productive_day
    ));
    output.push_str(&format!(
        "- Peak hours: **{}**\n",
        insights.peak_hour_range
    ));

    output.push_str("\n| Month | Contributions |\n|-------|---------------|\n");
    for month in &insights.monthly_activity {
        output.push_str(&format!("| {} | {} |\n", month.month, month.contributions));
    }

    output.push_str(&format!(
        "\n## Personality: {} {}\n\n",
        insights.personality.emoji, insights.personality.title
    ));
    output.push_str(&format!("{}\n\n", insights.personality.description));
    output.push_str("| Trait | Value | |\n|-------|-------|---|\n");
    for personality_trait in &insights.personality.traits {
        output.push_str(&format!(
            "| {} | {}/100 | {} |\n",
            personality_trait.name, personality_trait.value, personality_trait.label
        ));
    }

    output
}

fn bar(value: u32, max: u32) -> String {
    let max = max.max(1);
    let filled = (value as usize * BAR_WIDTH) / max as usize;
    "#".repeat(filled.min(BAR_WIDTH))
}
