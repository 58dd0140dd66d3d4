use crate::models::{LanguageStat, Repository};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageStats {
    /// Top 8 by repository count, descending.
    pub top_languages: Vec<LanguageStat>,
    /// Distinct languages across all non-fork repositories.
    pub total_languages: u32,
}

/// Count non-fork repositories per language. Forks are excluded so that
/// code the user did not author does not inflate their language breadth.
pub fn calculate_language_stats(repos: &[Repository]) -> LanguageStats {
    // Vec instead of a map: the stable sort below then breaks count ties
    // by first-encounter order.
    let mut counts: Vec<(&str, u32)> = Vec::new();

    for repo in repos.iter().filter(|r| !r.fork) {
        if let Some(language) = repo.language.as_deref() {
            match counts.iter_mut().find(|(name, _)| *name == language) {
                Some((_, count)) => *count += 1,
                None => counts.push((language, 1)),
            }
        }
    }

    let total: u32 = counts.iter().map(|(_, count)| count).sum();
    if total == 0 {
        return LanguageStats::default();
    }

    let total_languages = counts.len() as u32;
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let top_languages = counts
        .into_iter()
        .take(8)
        .map(|(name, count)| LanguageStat {
            name: name.to_string(),
            count,
            percentage: (f64::from(count) * 100.0 / f64::from(total)).round() as u32,
            color: language_color(name).to_string(),
        })
        .collect();

    LanguageStats {
        top_languages,
        total_languages,
    }
}

/// GitHub linguist display color for a language, with a neutral gray for
/// anything unknown.
pub fn language_color(language: &str) -> &'static str {
    match language {
        "JavaScript" => "#f7df1e",
        "TypeScript" => "#3178c6",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "C#" => "#178600",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        "Ruby" => "#701516",
        "PHP" => "#4F5D95",
        "Swift" => "#F05138",
        "Kotlin" => "#A97BFF",
        "Dart" => "#00B4AB",
        "Scala" => "#c22d40",
        "Shell" => "#89e051",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "Vue" => "#41b883",
        "SCSS" => "#c6538c",
        "Lua" => "#000080",
        "R" => "#198CE7",
        "Perl" => "#0298c3",
        "Haskell" => "#5e5086",
        "Elixir" => "#6e4a7e",
        "Clojure" => "#db5855",
        _ => "#8b949e",
    }
}
