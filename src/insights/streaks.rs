use chrono::NaiveDate;

use crate::models::ContributionCalendar;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakStats {
    pub longest_streak: u32,
    pub current_streak: u32,
    pub total_active_days: u32,
}

/// Single scan over the calendar days in date order. The running counter
/// increments on active days and resets on zero days; the longest streak
/// also accounts for a streak that runs through the final day. A streak is
/// "current" only if it reaches within one day of `today`, which tolerates
/// the most recent day not yet being reported by the source.
pub fn calculate_streaks(calendar: Option<&ContributionCalendar>, today: NaiveDate) -> StreakStats {
    let Some(calendar) = calendar else {
        return StreakStats::default();
    };

    let mut days: Vec<_> = calendar.days().collect();
    days.sort_by_key(|day| day.date);

    let mut longest = 0u32;
    let mut current = 0u32;
    let mut running = 0u32;
    let mut active_days = 0u32;

    for day in days {
        if day.contribution_count > 0 {
            active_days += 1;
            running += 1;
            if (today - day.date).num_days() <= 1 {
                current = running;
            }
        } else {
            longest = longest.max(running);
            running = 0;
        }
    }

    StreakStats {
        longest_streak: longest.max(running),
        current_streak: current,
        total_active_days: active_days,
    }
}
