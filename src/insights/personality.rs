use crate::models::{DeveloperPersonality, Event, EventKind, PersonalityTrait, Repository};

use super::activity::ActivityPatterns;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scores {
    pub solo_vs_team: u32,
    pub bug_slayer: u32,
}

/// Both scores are proportions scaled to 0-100 and default to a neutral 50
/// when their denominator is zero.
pub fn calculate_scores(events: &[Event], repos: &[Repository]) -> Scores {
    let own = repos.iter().filter(|r| !r.fork).count();
    let solo_vs_team = if repos.is_empty() {
        50
    } else {
        (own as f64 / repos.len() as f64 * 100.0).round() as u32
    };

    let issues = events.iter().filter(|e| e.kind == EventKind::Issues).count();
    let prs = events
        .iter()
        .filter(|e| e.kind == EventKind::PullRequest)
        .count();
    let bug_slayer = if issues + prs == 0 {
        50
    } else {
        (issues as f64 / (issues + prs) as f64 * 100.0).round() as u32
    };

    Scores {
        solo_vs_team,
        bug_slayer,
    }
}

/// The behavioral signals the classification is built from.
struct Signals {
    night_owl: bool,
    early_bird: bool,
    polyglot: bool,
    weekend_warrior: bool,
    solo: bool,
    language_count: usize,
    bug_slayer: u32,
}

pub fn calculate_personality(
    repos: &[Repository],
    activity: &ActivityPatterns,
    scores: Scores,
) -> DeveloperPersonality {
    let hour = activity.most_productive_hour;

    let mut languages: Vec<&str> = repos
        .iter()
        .filter(|r| !r.fork)
        .filter_map(|r| r.language.as_deref())
        .collect();
    languages.sort_unstable();
    languages.dedup();

    let weekend = activity.activity_by_day[0] + activity.activity_by_day[6];
    let weekday: u32 = activity.activity_by_day[1..6].iter().sum();

    let signals = Signals {
        night_owl: hour >= 20 || hour < 6,
        early_bird: (5..10).contains(&hour),
        polyglot: languages.len() >= 5,
        weekend_warrior: f64::from(weekend) > f64::from(weekday) * 0.4,
        solo: scores.solo_vs_team > 70,
        language_count: languages.len(),
        bug_slayer: scores.bug_slayer,
    };

    let traits = build_traits(&signals, scores);
    let (title, emoji, description) = classify(&signals);

    DeveloperPersonality {
        title: title.to_string(),
        emoji: emoji.to_string(),
        description: description.to_string(),
        traits,
    }
}

/// One trait per signal axis, always in the same order: time of day,
/// language breadth, work pattern, collaboration.
fn build_traits(signals: &Signals, scores: Scores) -> Vec<PersonalityTrait> {
    let time_trait = if signals.night_owl {
        ("Night Owl", 85, "🦉 Codes when the moon is out")
    } else if signals.early_bird {
        ("Early Bird", 15, "🐦 Catches the morning commits")
    } else {
        ("Daytime Coder", 50, "☀️ Peak performance during sunlight")
    };

    let language_trait = if signals.polyglot {
        ("Polyglot", "🌍 Master of many languages")
    } else {
        ("Specialist", "🎯 Deep expertise in few")
    };

    let work_trait = if signals.weekend_warrior {
        ("Weekend Warrior", 80, "💪 Codes through weekends")
    } else {
        ("Weekday Wonder", 30, "📅 Balanced work schedule")
    };

    let collab_trait = if signals.solo {
        ("Solo Coder", "🏴\u{200d}☠\u{fe0f} Independent creator")
    } else {
        ("Team Player", "🤝 Collaborative spirit")
    };

    vec![
        PersonalityTrait {
            name: time_trait.0.to_string(),
            value: time_trait.1,
            label: time_trait.2.to_string(),
        },
        PersonalityTrait {
            name: language_trait.0.to_string(),
            value: (signals.language_count as u32 * 15).min(100),
            label: language_trait.1.to_string(),
        },
        PersonalityTrait {
            name: work_trait.0.to_string(),
            value: work_trait.1,
            label: work_trait.2.to_string(),
        },
        PersonalityTrait {
            name: collab_trait.0.to_string(),
            value: scores.solo_vs_team,
            label: collab_trait.1.to_string(),
        },
    ]
}

/// Ordered (predicate, result) list evaluated first-match-wins. Several
/// conditions may hold at once, so the order is part of the contract.
fn classify(signals: &Signals) -> (&'static str, &'static str, &'static str) {
    let rules: [(bool, (&str, &str, &str)); 6] = [
        (
            signals.night_owl && signals.polyglot,
            (
                "Nocturnal Polyglot",
                "🦉",
                "A versatile night owl who masters multiple languages under the moonlight.",
            ),
        ),
        (
            signals.early_bird && signals.solo,
            (
                "Dawn Pioneer",
                "🌅",
                "An independent creator who catches bugs before anyone else wakes up.",
            ),
        ),
        (
            signals.weekend_warrior && signals.bug_slayer > 60,
            (
                "Weekend Bug Hunter",
                "🐛",
                "A dedicated problem solver who squashes bugs even on their days off.",
            ),
        ),
        (
            signals.polyglot && !signals.solo,
            (
                "Open Source Champion",
                "🏆",
                "A collaborative polyglot who contributes across the ecosystem.",
            ),
        ),
        (
            signals.solo && signals.language_count <= 2,
            (
                "Deep Specialist",
                "🎯",
                "A focused expert who has mastered their chosen technology stack.",
            ),
        ),
        (
            signals.night_owl && signals.weekend_warrior,
            (
                "Code Ninja",
                "🥷",
                "Strikes when least expected, codes through nights and weekends.",
            ),
        ),
    ];

    for (matched, result) in rules {
        if matched {
            return result;
        }
    }

    (
        "Code Crafter",
        "👨\u{200d}💻",
        "A balanced developer with diverse skills.",
    )
}
