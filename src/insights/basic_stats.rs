use std::collections::HashSet;

use crate::models::{ContributionCalendar, ContributionSummary, Event, EventKind};

/// The six headline totals for the year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BasicStats {
    pub total_contributions: u32,
    pub commits: u32,
    pub prs: u32,
    pub issues: u32,
    pub reviews: u32,
    pub repositories_contributed_to: u32,
}

/// Reconcile the headline totals across the three sources. Authority order
/// is summary, then calendar, then raw events; missing sources silently
/// degrade to the next one down.
pub fn calculate_basic_stats(
    events: &[Event],
    summary: Option<&ContributionSummary>,
    calendar: Option<&ContributionCalendar>,
) -> BasicStats {
    // Server-computed totals win outright when available.
    if let Some(summary) = summary {
        return BasicStats {
            total_contributions: summary.total_contributions,
            commits: summary.total_commit_contributions,
            prs: summary.total_pull_request_contributions,
            issues: summary.total_issue_contributions,
            reviews: summary.total_pull_request_review_contributions,
            repositories_contributed_to: summary.total_repositories_with_contributed_commits,
        };
    }

    let mut commits = 0u32;
    let mut prs = 0u32;
    let mut issues = 0u32;
    let mut reviews = 0u32;
    let mut repos: HashSet<&str> = HashSet::new();

    for event in events {
        match event.kind {
            EventKind::Push => commits += event.commit_count(),
            EventKind::PullRequest => prs += 1,
            EventKind::Issues => issues += 1,
            EventKind::Review => reviews += 1,
            EventKind::Other => continue,
        }
        repos.insert(event.repo.name.as_str());
    }

    // A push event may bundle an arbitrary number of commits; the calendar
    // captures true commit volume that event counting cannot.
    let calendar_commits = calendar.map(ContributionCalendar::summed_count).unwrap_or(0);
    if calendar_commits > 0 {
        commits = calendar_commits;
    }

    let total_contributions = match calendar {
        Some(calendar) => calendar.total_contributions,
        None => commits + prs + issues + reviews,
    };

    BasicStats {
        total_contributions,
        commits,
        prs,
        issues,
        reviews,
        repositories_contributed_to: repos.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::testutil::{calendar_from_counts, push_event, simple_event, summary};
    use crate::models::EventKind;

    #[test]
    fn summary_takes_precedence_over_events() {
        let events: Vec<Event> = (0..5).map(|i| push_event(i, "a/r", 1)).collect();
        let s = summary(100, 42, 3, 2, 1, 4);

        let stats = calculate_basic_stats(&events, Some(&s), None);
        assert_eq!(stats.total_contributions, 100);
        assert_eq!(stats.commits, 42);
        assert_eq!(stats.prs, 3);
        assert_eq!(stats.issues, 2);
        assert_eq!(stats.reviews, 1);
        assert_eq!(stats.repositories_contributed_to, 4);
    }

    #[test]
    fn calendar_takes_precedence_over_event_tally() {
        let events: Vec<Event> = (0..5).map(|i| push_event(i, "a/r", 2)).collect();
        let calendar = calendar_from_counts("2024-01-01", &[10, 10, 10]);

        let stats = calculate_basic_stats(&events, None, Some(&calendar));
        assert_eq!(stats.commits, 30);
        assert_eq!(stats.total_contributions, calendar.total_contributions);
    }

    #[test]
    fn events_are_counted_by_kind_when_nothing_richer_exists() {
        let events = vec![
            push_event(0, "a/one", 3),
            simple_event(1, "a/one", EventKind::PullRequest),
            simple_event(2, "a/two", EventKind::Issues),
            simple_event(3, "a/two", EventKind::Review),
            simple_event(4, "a/three", EventKind::Other),
        ];

        let stats = calculate_basic_stats(&events, None, None);
        assert_eq!(stats.commits, 3);
        assert_eq!(stats.prs, 1);
        assert_eq!(stats.issues, 1);
        assert_eq!(stats.reviews, 1);
        assert_eq!(stats.total_contributions, 6);
        // "Other" events do not count toward repos contributed to.
        assert_eq!(stats.repositories_contributed_to, 2);
    }

    #[test]
    fn push_with_empty_commit_list_counts_as_one_commit() {
        let events = vec![push_event(0, "a/r", 0)];
        let stats = calculate_basic_stats(&events, None, None);
        assert_eq!(stats.commits, 1);
    }

    #[test]
    fn all_sources_absent_yields_zeros() {
        let stats = calculate_basic_stats(&[], None, None);
        assert_eq!(stats, BasicStats::default());
    }
}
