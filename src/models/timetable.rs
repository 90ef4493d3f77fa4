//! Timetable (solution) model.
//!
//! A timetable is the ordered list of placed session units, plus a record
//! of every unit that could not be placed and every course-level problem
//! met along the way. Partial timetables are normal results, not errors.

use serde::{Deserialize, Serialize};

use super::{BatchLabel, Catalog, Day, SessionKind, TimeSlot};

/// One placed session unit. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub course_id: String,
    pub kind: SessionKind,
    pub day: Day,
    pub slot: TimeSlot,
    pub room_id: String,
    /// Faculty teaching the session. `None` = unassigned.
    pub faculty_id: Option<String>,
    /// Lab batch, for practical sessions.
    pub batch: Option<BatchLabel>,
}

impl TimetableEntry {
    /// Summary label: `L:Monday 09:00-10:00 R1`, or
    /// `P:Monday 09:00-10:00 Lab S1B1 L1` for a batch.
    pub fn label(&self) -> String {
        match &self.batch {
            Some(batch) => format!(
                "{}:{} {} Lab {} {}",
                self.kind.code(),
                self.day,
                self.slot,
                batch,
                self.room_id
            ),
            None => format!(
                "{}:{} {} {}",
                self.kind.code(),
                self.day,
                self.slot,
                self.room_id
            ),
        }
    }
}

/// A session unit the allocator could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnscheduledUnit {
    pub course_id: String,
    pub kind: SessionKind,
    pub batch: Option<BatchLabel>,
    /// Seats that were required.
    pub required_capacity: u32,
}

/// A course-level condition that reduced or qualified what was scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchedulingIssue {
    /// Practical component skipped: no batch configuration found.
    MissingBatchConfig {
        course_id: String,
        department: String,
        semester: u32,
    },
    /// Practical component skipped: the batch configuration cannot be used.
    InvalidBatchConfig { course_id: String, reason: String },
    /// Course scheduled without faculty checks.
    UnassignedFaculty { course_id: String },
    /// Course names a faculty member missing from the catalog; scheduled as unassigned.
    UnknownFaculty {
        course_id: String,
        faculty_id: String,
    },
}

impl SchedulingIssue {
    /// The course the issue concerns.
    pub fn course_id(&self) -> &str {
        match self {
            SchedulingIssue::MissingBatchConfig { course_id, .. }
            | SchedulingIssue::InvalidBatchConfig { course_id, .. }
            | SchedulingIssue::UnassignedFaculty { course_id }
            | SchedulingIssue::UnknownFaculty { course_id, .. } => course_id,
        }
    }
}

/// Per-course row handed to output adapters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTimetable {
    pub semester: u32,
    pub department: String,
    pub course_id: String,
    pub course_name: String,
    /// Faculty name, or the unassigned placeholder.
    pub faculty: String,
    /// Entry labels in placement order.
    pub slots: Vec<String>,
}

/// Result of one or more scheduling runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Placed session units, in placement order.
    pub entries: Vec<TimetableEntry>,
    /// Units that exhausted the search space.
    pub unscheduled: Vec<UnscheduledUnit>,
    /// Course-level issues.
    pub issues: Vec<SchedulingIssue>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a placed entry.
    pub fn add_entry(&mut self, entry: TimetableEntry) {
        self.entries.push(entry);
    }

    /// Records an unplaced unit.
    pub fn add_unscheduled(&mut self, unit: UnscheduledUnit) {
        self.unscheduled.push(unit);
    }

    /// Records a course-level issue.
    pub fn add_issue(&mut self, issue: SchedulingIssue) {
        self.issues.push(issue);
    }

    /// Appends another timetable (e.g. the next semester's run).
    pub fn extend(&mut self, other: Timetable) {
        self.entries.extend(other.entries);
        self.unscheduled.extend(other.unscheduled);
        self.issues.extend(other.issues);
    }

    /// Whether every requested unit was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Number of placed entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries for a course.
    pub fn entries_for_course(&self, course_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.course_id == course_id)
            .collect()
    }

    /// Entries held in a room.
    pub fn entries_for_room(&self, room_id: &str) -> Vec<&TimetableEntry> {
        self.entries.iter().filter(|e| e.room_id == room_id).collect()
    }

    /// Entries taught by a faculty member.
    pub fn entries_for_faculty(&self, faculty_id: &str) -> Vec<&TimetableEntry> {
        self.entries
            .iter()
            .filter(|e| e.faculty_id.as_deref() == Some(faculty_id))
            .collect()
    }

    /// Unplaced units of a course.
    pub fn unscheduled_for_course(&self, course_id: &str) -> Vec<&UnscheduledUnit> {
        self.unscheduled
            .iter()
            .filter(|u| u.course_id == course_id)
            .collect()
    }

    /// One row per course that has at least one entry, in order of first
    /// placement.
    pub fn course_summaries(
        &self,
        catalog: &Catalog,
        unassigned_label: &str,
    ) -> Vec<CourseTimetable> {
        let mut rows: Vec<CourseTimetable> = Vec::new();
        for entry in &self.entries {
            if let Some(row) = rows.iter_mut().find(|r| r.course_id == entry.course_id) {
                row.slots.push(entry.label());
                continue;
            }
            let course = catalog.course(&entry.course_id);
            rows.push(CourseTimetable {
                semester: course.map(|c| c.semester).unwrap_or_default(),
                department: course.map(|c| c.department.clone()).unwrap_or_default(),
                course_id: entry.course_id.clone(),
                course_name: course.map(|c| c.name.clone()).unwrap_or_default(),
                faculty: entry
                    .faculty_id
                    .clone()
                    .unwrap_or_else(|| unassigned_label.to_string()),
                slots: vec![entry.label()],
            });
        }
        rows
    }
}
