// Wall-clock time of day at minute resolution.
//
// Purpose
// - Parse the `HH:MM` strings entries carry at the boundary and work in minutes since midnight.
//
// Boundaries
// - Same calendar day only. There is no midnight rollover.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const MINUTES_PER_HOUR: u16 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeOfDayError {
    #[error("time is empty")]
    Empty,

    #[error("time `{0}` is not in HH:MM form")]
    Malformed(String),

    #[error("time `{0}` is out of range")]
    OutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// For constants; panics at compile time when out of range.
    pub const fn at(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < MINUTES_PER_HOUR);
        Self(hour * MINUTES_PER_HOUR + minute)
    }

    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return None;
        }
        Some(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Renders as `9:05 AM` / `12:00 PM`.
    pub fn to_12_hour(self) -> String {
        let suffix = if self.hour() < 12 { "AM" } else { "PM" };
        let hour = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        format!("{hour}:{:02} {suffix}", self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().is_empty() {
            return Err(TimeOfDayError::Empty);
        }
        let malformed = || TimeOfDayError::Malformed(raw.to_string());
        let (hour, minute) = raw.split_once(':').ok_or_else(malformed)?;
        let two_digits = |s: &str| s.len() == 2 && s.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hour) || !two_digits(minute) {
            return Err(malformed());
        }
        let hour: u16 = hour.parse().map_err(|_| malformed())?;
        let minute: u16 = minute.parse().map_err(|_| malformed())?;
        Self::from_hm(hour, minute).ok_or_else(|| TimeOfDayError::OutOfRange(raw.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A start/end pair as recorded on an entry. `end` is not guaranteed to be after `start`
/// for persisted entries, so arithmetic here stays signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkInterval {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl WorkInterval {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Parses both ends; `None` when either side is missing or not `HH:MM`.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start = start?.parse().ok()?;
        let end = end?.parse().ok()?;
        Some(Self::new(start, end))
    }

    pub fn duration_minutes(&self) -> i32 {
        i32::from(self.end.minutes()) - i32::from(self.start.minutes())
    }

    pub fn duration_hours(&self) -> f64 {
        f64::from(self.duration_minutes()) / f64::from(MINUTES_PER_HOUR)
    }

    /// Half-open `[start, end)` intersection.
    pub fn overlaps(&self, other: &WorkInterval) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Idle minutes between the end of `self` and the start of `next`; negative when they overlap.
    pub fn gap_until(&self, next: &WorkInterval) -> i32 {
        i32::from(next.start.minutes()) - i32::from(self.end.minutes())
    }
}
