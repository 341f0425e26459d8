//! Relative time labels ("Just now", "5 mins ago", "2 days ago")
//!
//! Elapsed time is bucketed by floor division: seconds, then minutes, hours
//! and days. Anything a week or older is shown as a calendar date instead.
//! Timestamps in the future are not special-cased; a negative elapsed time
//! floors to a negative second count and lands in the "Just now" bucket.

use crate::clock::{Clock, SystemClock};
use crate::date::{CalendarDateFormatter, DateFormatter};

const MILLIS_PER_SECOND: i64 = 1000;
const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const DAYS_PER_WEEK: i64 = 7;

/// Bucket an elapsed interval falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    /// A week or more; rendered as a calendar date
    Date,
}

impl RelativeTime {
    /// Classify an elapsed interval given in milliseconds
    pub fn from_elapsed_millis(elapsed: i64) -> Self {
        let seconds = elapsed.div_euclid(MILLIS_PER_SECOND);
        let minutes = seconds.div_euclid(SECONDS_PER_MINUTE);
        let hours = minutes.div_euclid(MINUTES_PER_HOUR);
        let days = hours.div_euclid(HOURS_PER_DAY);

        if seconds < SECONDS_PER_MINUTE {
            RelativeTime::JustNow
        } else if minutes < MINUTES_PER_HOUR {
            RelativeTime::Minutes(minutes)
        } else if hours < HOURS_PER_DAY {
            RelativeTime::Hours(hours)
        } else if days < DAYS_PER_WEEK {
            RelativeTime::Days(days)
        } else {
            RelativeTime::Date
        }
    }
}

impl RelativeTime {
    /// Relative phrasing, or `None` for `Date`, which only
    /// [`RelativeTimeFormatter`] can render
    pub fn relative_label(self) -> Option<String> {
        let label = match self {
            RelativeTime::JustNow => "Just now".to_string(),
            RelativeTime::Minutes(1) => "1 min ago".to_string(),
            RelativeTime::Minutes(n) => format!("{} mins ago", n),
            RelativeTime::Hours(1) => "1 hour ago".to_string(),
            RelativeTime::Hours(n) => format!("{} hours ago", n),
            RelativeTime::Days(1) => "1 day ago".to_string(),
            RelativeTime::Days(n) => format!("{} days ago", n),
            RelativeTime::Date => return None,
        };
        Some(label)
    }
}

/// Formats notification timestamps relative to a clock
#[derive(Debug, Clone, Default)]
pub struct RelativeTimeFormatter<C = SystemClock, D = CalendarDateFormatter> {
    clock: C,
    dates: D,
}

impl RelativeTimeFormatter {
    /// System clock, local calendar dates
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock, D: DateFormatter> RelativeTimeFormatter<C, D> {
    pub fn with_parts(clock: C, dates: D) -> Self {
        Self { clock, dates }
    }

    /// Replace the clock, keeping the date formatter
    pub fn with_clock<C2: Clock>(self, clock: C2) -> RelativeTimeFormatter<C2, D> {
        RelativeTimeFormatter {
            clock,
            dates: self.dates,
        }
    }

    /// Replace the date formatter, keeping the clock
    pub fn with_dates<D2: DateFormatter>(self, dates: D2) -> RelativeTimeFormatter<C, D2> {
        RelativeTimeFormatter {
            clock: self.clock,
            dates,
        }
    }

    /// Bucket for a timestamp (milliseconds since epoch)
    pub fn classify(&self, timestamp: i64) -> RelativeTime {
        let elapsed = self.clock.now_millis().saturating_sub(timestamp);
        RelativeTime::from_elapsed_millis(elapsed)
    }

    /// Label for a timestamp (milliseconds since epoch)
    pub fn format(&self, timestamp: i64) -> String {
        self.classify(timestamp)
            .relative_label()
            .unwrap_or_else(|| self.dates.format_date(timestamp))
    }
}

/// Label for a timestamp using the wall clock and local calendar dates
pub fn friendly_time(timestamp: i64) -> String {
    RelativeTimeFormatter::new().format(timestamp)
}
