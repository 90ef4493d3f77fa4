//! Room and faculty occupancy calendars.
//!
//! One tracker per scheduling run. Calendars are keyed by entity id and
//! hold, per day, the set of committed slots. They are the only mutable
//! state of a run; entities themselves stay read-only.
//!
//! # Protocol
//! Query availability, then commit, with no other mutation in between.
//! `commit` does not re-check constraints.

use std::collections::{BTreeSet, HashMap};

use crate::models::{BreakCalendar, Day, Faculty, TimeSlot};

type DayCalendar = HashMap<Day, BTreeSet<TimeSlot>>;

/// Per-room and per-faculty committed slots.
#[derive(Debug, Clone, Default)]
pub struct OccupancyTracker {
    breaks: BreakCalendar,
    rooms: HashMap<String, DayCalendar>,
    faculty: HashMap<String, DayCalendar>,
}

impl OccupancyTracker {
    /// Creates an empty tracker that treats `breaks` as unusable.
    pub fn new(breaks: BreakCalendar) -> Self {
        Self {
            breaks,
            rooms: HashMap::new(),
            faculty: HashMap::new(),
        }
    }

    /// The break calendar consulted by availability queries.
    pub fn breaks(&self) -> &BreakCalendar {
        &self.breaks
    }

    /// Whether `room_id` is free at (day, slot).
    ///
    /// False during breaks or if the room already has a session then.
    /// Type and capacity matching is the caller's job.
    pub fn room_available(&self, room_id: &str, day: Day, slot: &TimeSlot) -> bool {
        if self.breaks.is_break(slot) {
            return false;
        }
        !is_committed(&self.rooms, room_id, day, slot)
    }

    /// Whether `faculty` can teach at (day, slot).
    ///
    /// False during breaks, outside a non-empty preference list, once the
    /// daily cap is reached, or if already teaching then.
    pub fn faculty_available(&self, faculty: &Faculty, day: Day, slot: &TimeSlot) -> bool {
        if self.breaks.is_break(slot) {
            return false;
        }
        if !faculty.accepts(slot) {
            return false;
        }
        if self.faculty_load(&faculty.name, day) >= faculty.max_sessions_per_day as usize {
            return false;
        }
        !is_committed(&self.faculty, &faculty.name, day, slot)
    }

    /// Records (day, slot) as occupied for the room and, if given, the faculty.
    pub fn commit(&mut self, room_id: &str, faculty_id: Option<&str>, day: Day, slot: TimeSlot) {
        self.rooms
            .entry(room_id.to_string())
            .or_default()
            .entry(day)
            .or_default()
            .insert(slot);

        if let Some(faculty_id) = faculty_id {
            self.faculty
                .entry(faculty_id.to_string())
                .or_default()
                .entry(day)
                .or_default()
                .insert(slot);
        }
    }

    /// Sessions committed for a faculty member on a day.
    pub fn faculty_load(&self, faculty_id: &str, day: Day) -> usize {
        day_len(&self.faculty, faculty_id, day)
    }

    /// Sessions committed in a room on a day.
    pub fn room_load(&self, room_id: &str, day: Day) -> usize {
        day_len(&self.rooms, room_id, day)
    }

    /// Sessions committed in a room across the week.
    pub fn room_total(&self, room_id: &str) -> usize {
        self.rooms
            .get(room_id)
            .map(|days| days.values().map(BTreeSet::len).sum())
            .unwrap_or(0)
    }

    /// Empties every calendar. Break configuration is kept.
    pub fn reset(&mut self) {
        self.rooms.clear();
        self.faculty.clear();
    }

    /// Whether nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.faculty.is_empty()
    }
}

fn is_committed(calendars: &HashMap<String, DayCalendar>, id: &str, day: Day, slot: &TimeSlot) -> bool {
    calendars
        .get(id)
        .and_then(|days| days.get(&day))
        .is_some_and(|slots| slots.contains(slot))
}

fn day_len(calendars: &HashMap<String, DayCalendar>, id: &str, day: Day) -> usize {
    calendars
        .get(id)
        .and_then(|days| days.get(&day))
        .map(BTreeSet::len)
        .unwrap_or(0)
}
