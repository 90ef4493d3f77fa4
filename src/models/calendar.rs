//! Break calendar.
//!
//! Defines the daily excluded periods (morning break, lunch) during which
//! no session may start.
//!
//! # Exclusion Rule
//! A slot is a break slot iff its **start time** falls inside any break
//! window, where a window covers [start, start + duration] with **both
//! endpoints inclusive**. With the default windows (11:00 +15 min, 13:00
//! +60 min) this excludes the 11:00, 13:00 and 14:00 slots.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use super::TimeSlot;
use crate::error::Result;
use crate::models::time_slot::parse_clock;

/// A recurring daily break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    /// Break start time.
    #[serde(with = "crate::models::time_slot::clock_format")]
    pub start: NaiveTime,
    /// Break length in minutes.
    pub duration_minutes: u32,
}

impl BreakWindow {
    /// Creates a break window.
    pub fn new(start: NaiveTime, duration_minutes: u32) -> Self {
        Self {
            start,
            duration_minutes,
        }
    }

    /// Creates a break window from an `HH:MM` literal.
    pub fn parse(start: &str, duration_minutes: u32) -> Result<Self> {
        Ok(Self::new(parse_clock(start)?, duration_minutes))
    }

    /// Inclusive end of the window. Saturates at the last second of the day.
    pub fn end(&self) -> NaiveTime {
        let delta = TimeDelta::minutes(i64::from(self.duration_minutes));
        let (end, wrapped) = self.start.overflowing_add_signed(delta);
        if wrapped != 0 {
            NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(end)
        } else {
            end
        }
    }

    /// Whether `time` lies in [start, end], endpoints included.
    #[inline]
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.start && time <= self.end()
    }
}

/// The set of daily breaks applied to every day of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakCalendar {
    windows: Vec<BreakWindow>,
}

impl BreakCalendar {
    /// Creates a calendar with no breaks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Morning break 11:00 (15 min) and lunch 13:00 (60 min).
    pub fn standard() -> Self {
        Self::new()
            .with_break(NaiveTime::from_hms_opt(11, 0, 0).unwrap_or_default(), 15)
            .with_break(NaiveTime::from_hms_opt(13, 0, 0).unwrap_or_default(), 60)
    }

    /// Creates a calendar from existing windows.
    pub fn from_windows(windows: Vec<BreakWindow>) -> Self {
        Self { windows }
    }

    /// Adds a break window.
    pub fn with_break(mut self, start: NaiveTime, duration_minutes: u32) -> Self {
        self.windows.push(BreakWindow::new(start, duration_minutes));
        self
    }

    /// Configured windows.
    pub fn windows(&self) -> &[BreakWindow] {
        &self.windows
    }

    /// Whether a slot is excluded because its start falls inside a break.
    pub fn is_break(&self, slot: &TimeSlot) -> bool {
        let start = slot.start();
        self.windows.iter().any(|w| w.contains(start))
    }

    /// Slots from `slots` that are not breaks, in the given order.
    pub fn usable<'a>(&'a self, slots: &'a [TimeSlot]) -> impl Iterator<Item = &'a TimeSlot> + 'a {
        slots.iter().filter(move |s| !self.is_break(s))
    }
}
