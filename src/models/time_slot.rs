//! Weekly grid primitives: days and time slots.
//!
//! A `TimeSlot` is a half-open clock interval written `HH:MM-HH:MM`.
//! Parsing accepts single-digit hours (`9:00-10:00`) and always renders
//! the zero-padded form, so two slot literals compare equal iff they
//! denote the same interval.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TimetableError};

/// Day of the teaching week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Monday through Friday.
    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self> {
        let day = match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Day::Monday,
            "tuesday" | "tue" => Day::Tuesday,
            "wednesday" | "wed" => Day::Wednesday,
            "thursday" | "thu" => Day::Thursday,
            "friday" | "fri" => Day::Friday,
            "saturday" | "sat" => Day::Saturday,
            "sunday" | "sun" => Day::Sunday,
            _ => return Err(TimetableError::InvalidDay(s.to_string())),
        };
        Ok(day)
    }
}

/// Parses `H:MM` or `HH:MM` into a clock time.
pub fn parse_clock(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| TimetableError::InvalidClockTime(value.to_string()))
}

/// Serde adapter rendering a `NaiveTime` as `HH:MM`.
pub(crate) mod clock_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_clock(&raw).map_err(serde::de::Error::custom)
    }
}

/// A time-of-day interval [start, end) on the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    start: NaiveTime,
    end: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot; `end` must be after `start`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if end <= start {
            return Err(TimetableError::InvalidTimeSlot {
                value: format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")),
                reason: "end must be after start".into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a slot from whole hours, e.g. `TimeSlot::hours(9, 10)`.
    pub fn hours(start_hour: u32, end_hour: u32) -> Result<Self> {
        let clock = |h: u32| {
            NaiveTime::from_hms_opt(h, 0, 0)
                .ok_or_else(|| TimetableError::InvalidClockTime(format!("{h}:00")))
        };
        Self::new(clock(start_hour)?, clock(end_hour)?)
    }

    /// Slot start time.
    #[inline]
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Slot end time.
    #[inline]
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Length in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Start hour (0-23).
    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

impl FromStr for TimeSlot {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| TimetableError::InvalidTimeSlot {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (start, end) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| invalid("expected HH:MM-HH:MM"))?;
        let start = parse_clock(start).map_err(|_| invalid("bad start time"))?;
        let end = parse_clock(end).map_err(|_| invalid("bad end time"))?;
        if end <= start {
            return Err(invalid("end must be after start"));
        }
        Ok(Self { start, end })
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = TimetableError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Normalizes a slot literal to the zero-padded `HH:MM-HH:MM` form.
///
/// `"9:00-10:00"` becomes `"09:00-10:00"`.
pub fn normalize_slot(value: &str) -> Result<String> {
    value.parse::<TimeSlot>().map(|s| s.to_string())
}

/// The default teaching grid: seven one-hour slots from 09:00 to 17:00,
/// skipping 13:00-14:00.
pub fn default_time_slots() -> Vec<TimeSlot> {
    [(9, 10), (10, 11), (11, 12), (12, 13), (14, 15), (15, 16), (16, 17)]
        .into_iter()
        .filter_map(|(s, e)| TimeSlot::hours(s, e).ok())
        .collect()
}
