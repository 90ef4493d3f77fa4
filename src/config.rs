//! Scheduling configuration.
//!
//! The weekly grid (days and slots), break windows, and room-type tags are
//! configuration constants, not derived from data. Defaults reproduce the
//! standard university week; any field may be overridden from JSON.
//!
//! ```
//! use u_timetable::config::TimetableConfig;
//!
//! let cfg = TimetableConfig::from_json_str(r#"{ "days": ["Monday", "Tuesday"] }"#).unwrap();
//! assert_eq!(cfg.days.len(), 2);
//! assert_eq!(cfg.time_slots.len(), 7); // default grid kept
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, TimetableError};
use crate::models::{default_time_slots, BreakCalendar, BreakWindow, Day, RoomType, TimeSlot};

/// Placeholder shown for courses without a faculty assignment.
pub const UNASSIGNED_FACULTY: &str = "unassigned";

/// Configuration of one scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimetableConfig {
    /// Days in search order.
    pub days: Vec<Day>,
    /// Slots in search order (chronological).
    pub time_slots: Vec<TimeSlot>,
    /// Daily break windows.
    pub breaks: Vec<BreakWindow>,
    /// Room type requested by lecture and tutorial units.
    pub lecture_room_type: RoomType,
    /// Room type requested by practical units.
    pub lab_room_type: RoomType,
    /// Faculty placeholder in course summaries.
    pub unassigned_faculty_label: String,
}

impl Default for TimetableConfig {
    fn default() -> Self {
        Self {
            days: Day::WEEKDAYS.to_vec(),
            time_slots: default_time_slots(),
            breaks: BreakCalendar::standard().windows().to_vec(),
            lecture_room_type: RoomType::LectureRoom,
            lab_room_type: RoomType::ComputerLab,
            unassigned_faculty_label: UNASSIGNED_FACULTY.to_string(),
        }
    }
}

impl TimetableConfig {
    /// Parses and validates a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Sets the days.
    pub fn with_days(mut self, days: Vec<Day>) -> Self {
        self.days = days;
        self
    }

    /// Sets the slot grid.
    pub fn with_time_slots(mut self, time_slots: Vec<TimeSlot>) -> Self {
        self.time_slots = time_slots;
        self
    }

    /// Sets the break windows.
    pub fn with_breaks(mut self, breaks: Vec<BreakWindow>) -> Self {
        self.breaks = breaks;
        self
    }

    /// Structural checks: non-empty grid, no duplicate days or slots,
    /// slots in chronological order.
    pub fn validate(&self) -> Result<()> {
        if self.days.is_empty() {
            return Err(TimetableError::InvalidConfig("no days configured".into()));
        }
        if self.time_slots.is_empty() {
            return Err(TimetableError::InvalidConfig("no time slots configured".into()));
        }

        let mut seen_days = HashSet::new();
        if let Some(day) = self.days.iter().find(|d| !seen_days.insert(**d)) {
            return Err(TimetableError::InvalidConfig(format!("duplicate day {day}")));
        }

        let mut seen_slots = HashSet::new();
        if let Some(slot) = self.time_slots.iter().find(|s| !seen_slots.insert(**s)) {
            return Err(TimetableError::InvalidConfig(format!(
                "duplicate time slot {slot}"
            )));
        }

        if self.time_slots.windows(2).any(|w| w[0] > w[1]) {
            return Err(TimetableError::InvalidConfig(
                "time slots must be in chronological order".into(),
            ));
        }

        if self.lecture_room_type == self.lab_room_type {
            return Err(TimetableError::InvalidConfig(format!(
                "lecture and lab room types are both {}",
                self.lab_room_type
            )));
        }

        Ok(())
    }

    /// Break calendar built from `breaks`.
    pub fn break_calendar(&self) -> BreakCalendar {
        BreakCalendar::from_windows(self.breaks.clone())
    }

    /// Slots that are not breaks, in grid order.
    pub fn usable_slots(&self) -> Vec<TimeSlot> {
        let calendar = self.break_calendar();
        calendar.usable(&self.time_slots).copied().collect()
    }
}
