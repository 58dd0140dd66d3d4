use chrono::{Datelike, Timelike};

use crate::models::{ContributionCalendar, Event, MonthlyActivity};

pub const DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// When the user codes: day-of-week, hour-of-day, and monthly totals for
/// the requested year. Day indices run Sunday=0 through Saturday=6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPatterns {
    pub most_productive_day: String,
    pub most_productive_hour: u32,
    pub peak_hour_range: String,
    pub activity_by_day: [u32; 7],
    pub activity_by_hour: [u32; 24],
    pub monthly_activity: Vec<MonthlyActivity>,
}

pub fn calculate_activity_patterns(
    events: &[Event],
    calendar: Option<&ContributionCalendar>,
    year: i32,
) -> ActivityPatterns {
    let mut by_day = [0u32; 7];
    let mut by_hour = [0u32; 24];
    let mut by_month = [0u32; 12];

    // The calendar has no time-of-day resolution, so hours always come
    // from discrete events.
    for event in events {
        by_hour[event.created_at.hour() as usize] += 1;
    }

    match calendar {
        Some(calendar) => {
            for day in calendar.days() {
                if day.date.year() == year && day.contribution_count > 0 {
                    by_day[day.date.weekday().num_days_from_sunday() as usize] +=
                        day.contribution_count;
                    by_month[day.date.month0() as usize] += day.contribution_count;
                }
            }
        }
        None => {
            for event in events {
                by_day[event.created_at.weekday().num_days_from_sunday() as usize] += 1;
                by_month[event.created_at.month0() as usize] += 1;
            }
        }
    }

    let most_productive_day = DAYS[index_of_max(&by_day)].to_string();
    let most_productive_hour = index_of_max(&by_hour) as u32;

    let monthly_activity = MONTHS
        .iter()
        .enumerate()
        .map(|(i, month)| MonthlyActivity {
            month: (*month).to_string(),
            year,
            contributions: by_month[i],
        })
        .collect();

    ActivityPatterns {
        most_productive_day,
        most_productive_hour,
        peak_hour_range: peak_hour_range(most_productive_hour),
        activity_by_day: by_day,
        activity_by_hour: by_hour,
        monthly_activity,
    }
}

/// The first index reaching the maximum wins, keeping the choice stable
/// and deterministic.
fn index_of_max(values: &[u32]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = i;
        }
    }
    best
}

/// The +/-1 hour window around the peak hour. Midnight is treated as hour
/// 24 so the window at the day boundary stays ordered: a peak at 0 renders
/// as "11 PM - 12 AM" and a peak at 23 as "10 PM - 12 AM".
pub fn peak_hour_range(hour: u32) -> String {
    let hour = if hour == 0 { 24 } else { hour };
    let start = hour - 1;
    let end = (hour + 1).min(24);
    format!("{} - {}", format_hour(start), format_hour(end))
}

/// 12-hour wall-clock notation with AM/PM.
pub fn format_hour(hour: u32) -> String {
    match hour {
        0 | 24 => "12 AM".to_string(),
        12 => "12 PM".to_string(),
        h if h > 12 => format!("{} PM", h - 12),
        h => format!("{h} AM"),
    }
}
