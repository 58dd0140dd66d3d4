use crate::models::{ContributionSummary, RepoStat, Repository};

const TOP_REPOS: usize = 6;

/// Rank the user's top repositories for the year.
///
/// With a contribution summary the ranking is by commit contribution count,
/// which reflects where the user actually worked. Without one, all that is
/// known is repository metadata, so non-fork repositories are ranked by
/// star count with push recency breaking ties; recency never outweighs a
/// single star.
pub fn calculate_top_repos(
    repos: &[Repository],
    summary: Option<&ContributionSummary>,
) -> Vec<RepoStat> {
    if let Some(summary) = summary {
        if !summary.commit_contributions_by_repository.is_empty() {
            let mut stats: Vec<RepoStat> = summary
                .commit_contributions_by_repository
                .iter()
                .map(|contribution| RepoStat {
                    name: contribution.repository.name.clone(),
                    full_name: contribution.repository.name_with_owner.clone(),
                    url: contribution.repository.url.clone(),
                    stars: contribution.repository.stargazer_count,
                    commits: contribution.commit_count,
                    language: contribution.repository.primary_language.clone(),
                    description: contribution.repository.description.clone(),
                })
                .collect();
            stats.sort_by(|a, b| b.commits.cmp(&a.commits));
            stats.truncate(TOP_REPOS);
            return stats;
        }
    }

    let mut non_forks: Vec<&Repository> = repos.iter().filter(|r| !r.fork).collect();
    non_forks.sort_by(|a, b| {
        (b.stargazers_count, b.pushed_or_updated_at())
            .cmp(&(a.stargazers_count, a.pushed_or_updated_at()))
    });

    non_forks
        .into_iter()
        .take(TOP_REPOS)
        .map(|repo| RepoStat {
            name: repo.name.clone(),
            full_name: repo.full_name.clone(),
            url: repo.html_url.clone(),
            stars: repo.stargazers_count,
            commits: 0,
            language: repo.language.clone(),
            description: repo.description.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::testutil::{repo, repo_contribution, repo_pushed_at, summary};
    use chrono::{TimeZone, Utc};

    #[test]
    fn summary_repos_rank_by_commit_count() {
        let mut s = summary(0, 0, 0, 0, 0, 0);
        s.commit_contributions_by_repository = vec![
            repo_contribution("low", 3, 500),
            repo_contribution("high", 40, 0),
            repo_contribution("mid", 12, 10),
        ];

        let top = calculate_top_repos(&[], Some(&s));
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["high", "mid", "low"]);
        assert_eq!(top[0].commits, 40);
    }

    #[test]
    fn summary_repos_cap_at_six() {
        let mut s = summary(0, 0, 0, 0, 0, 0);
        s.commit_contributions_by_repository = (0..10)
            .map(|i| repo_contribution(&format!("r{i}"), i, 0))
            .collect();

        assert_eq!(calculate_top_repos(&[], Some(&s)).len(), 6);
    }

    #[test]
    fn fallback_ranks_by_stars_then_recency() {
        let old = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
        let new = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let repos = vec![
            repo_pushed_at(1, "one-star-fresh", 1, new),
            repo_pushed_at(2, "two-stars-stale", 2, old),
            repo_pushed_at(3, "two-stars-fresh", 2, new),
        ];

        let top = calculate_top_repos(&repos, None);
        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        // Stars dominate; recency only splits the tied pair.
        assert_eq!(names, ["two-stars-fresh", "two-stars-stale", "one-star-fresh"]);
    }

    #[test]
    fn fallback_excludes_forks_and_caps_at_six() {
        let mut repos: Vec<_> = (0..8).map(|i| repo(i, &format!("r{i}"), None, i as u32, false)).collect();
        repos.push(repo(99, "forked", None, 1000, true));

        let top = calculate_top_repos(&repos, None);
        assert_eq!(top.len(), 6);
        assert!(top.iter().all(|r| r.name != "forked"));
        assert_eq!(top[0].stars, 7);
    }

    #[test]
    fn empty_summary_repo_list_falls_back_to_metadata_ranking() {
        let s = summary(10, 5, 1, 1, 1, 2);
        let repos = vec![repo(1, "only", Some("Rust"), 3, false)];

        let top = calculate_top_repos(&repos, Some(&s));
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "only");
    }
}
