//! Faculty model.
//!
//! A faculty member teaches courses, may restrict teaching to a list of
//! preferred slots, and is capped at a number of sessions per day.
//! Committed sessions are tracked by the
//! [`OccupancyTracker`](crate::scheduler::OccupancyTracker), not here.

use serde::{Deserialize, Serialize};

use super::TimeSlot;
use crate::error::Result;

/// Default cap on sessions per faculty member per day.
pub const DEFAULT_MAX_SESSIONS_PER_DAY: u32 = 6;

/// A faculty member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    /// Faculty name; unique within a catalog.
    pub name: String,
    pub department: String,
    /// Code of the course this faculty member teaches (may be empty).
    pub course_code: String,
    /// Slots the faculty member accepts. Empty = no restriction.
    #[serde(default)]
    pub preferred_slots: Vec<TimeSlot>,
    /// Maximum sessions per day.
    #[serde(default = "default_cap")]
    pub max_sessions_per_day: u32,
}

fn default_cap() -> u32 {
    DEFAULT_MAX_SESSIONS_PER_DAY
}

impl Faculty {
    /// Creates a faculty member with no slot preferences.
    pub fn new(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            course_code: String::new(),
            preferred_slots: Vec::new(),
            max_sessions_per_day: DEFAULT_MAX_SESSIONS_PER_DAY,
        }
    }

    /// Sets the taught course code.
    pub fn with_course(mut self, course_code: impl Into<String>) -> Self {
        self.course_code = course_code.into();
        self
    }

    /// Adds a preferred slot.
    pub fn with_preferred_slot(mut self, slot: TimeSlot) -> Self {
        if !self.preferred_slots.contains(&slot) {
            self.preferred_slots.push(slot);
        }
        self
    }

    /// Replaces the preferred slots.
    pub fn with_preferred_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.preferred_slots.clear();
        for slot in slots {
            if !self.preferred_slots.contains(&slot) {
                self.preferred_slots.push(slot);
            }
        }
        self
    }

    /// Sets the daily session cap.
    pub fn with_daily_cap(mut self, max_sessions_per_day: u32) -> Self {
        self.max_sessions_per_day = max_sessions_per_day;
        self
    }

    /// Parses a comma-separated preference list such as
    /// `"9:00-10:00, 10:00-11:00"`. Surrounding double quotes are ignored;
    /// an empty string yields no preferences.
    pub fn parse_preferred_slots(raw: &str) -> Result<Vec<TimeSlot>> {
        let raw = raw.trim().trim_matches('"');
        let mut slots: Vec<TimeSlot> = Vec::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let slot: TimeSlot = part.parse()?;
            if !slots.contains(&slot) {
                slots.push(slot);
            }
        }
        Ok(slots)
    }

    /// Whether the faculty member accepts `slot` (always true without preferences).
    pub fn accepts(&self, slot: &TimeSlot) -> bool {
        self.preferred_slots.is_empty() || self.preferred_slots.contains(slot)
    }
}
