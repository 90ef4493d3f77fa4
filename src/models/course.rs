//! Course model.
//!
//! A course is the unit of demand: its contact-hour breakdown (L-T-P-S-C)
//! determines how many session units must be placed on the weekly grid.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::BatchLabel;

/// Contact-hour breakdown: Lecture, Tutorial, Practical, Self-study, Credit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactHours {
    pub lecture: u32,
    pub tutorial: u32,
    pub practical: u32,
    pub self_study: u32,
    pub credit: u32,
}

impl ContactHours {
    /// Creates a breakdown from the five L-T-P-S-C values.
    pub fn new(lecture: u32, tutorial: u32, practical: u32, self_study: u32, credit: u32) -> Self {
        Self {
            lecture,
            tutorial,
            practical,
            self_study,
            credit,
        }
    }

    /// Sum of all five components. Used as the primary ordering key.
    pub fn total(&self) -> u32 {
        self.lecture + self.tutorial + self.practical + self.self_study + self.credit
    }

    /// Whether the course has a practical (lab) component.
    #[inline]
    pub fn has_practical(&self) -> bool {
        self.practical > 0
    }
}

/// Kind of session unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Lecture,
    Tutorial,
    Practical,
}

impl SessionKind {
    /// One-letter code used in course summaries (`L`, `T`, `P`).
    pub fn code(&self) -> char {
        match self {
            SessionKind::Lecture => 'L',
            SessionKind::Tutorial => 'T',
            SessionKind::Practical => 'P',
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionKind::Lecture => "Lecture",
            SessionKind::Tutorial => "Tutorial",
            SessionKind::Practical => "Practical",
        };
        f.write_str(name)
    }
}

/// A course offering to be timetabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course code (unique within a catalog).
    pub id: String,
    /// Course title.
    pub name: String,
    /// Owning department, e.g. "CSE".
    pub department: String,
    /// Semester number.
    pub semester: u32,
    /// L-T-P-S-C breakdown.
    pub hours: ContactHours,
    /// Registered students.
    pub registered_students: u32,
    /// Assigned faculty name. `None` = unassigned.
    pub faculty_id: Option<String>,
    /// Lab batches, filled in by the batch partitioner.
    #[serde(default)]
    pub lab_batches: Vec<BatchLabel>,
}

impl Course {
    /// Creates a course with no contact hours.
    pub fn new(id: impl Into<String>, department: impl Into<String>, semester: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            department: department.into(),
            semester,
            hours: ContactHours::default(),
            registered_students: 0,
            faculty_id: None,
            lab_batches: Vec::new(),
        }
    }

    /// Sets the course title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact-hour breakdown.
    pub fn with_hours(mut self, hours: ContactHours) -> Self {
        self.hours = hours;
        self
    }

    /// Shorthand for lecture/tutorial/practical hours with S=C=0.
    pub fn with_ltp(self, lecture: u32, tutorial: u32, practical: u32) -> Self {
        self.with_hours(ContactHours::new(lecture, tutorial, practical, 0, 0))
    }

    /// Sets the registered-student count.
    pub fn with_students(mut self, registered_students: u32) -> Self {
        self.registered_students = registered_students;
        self
    }

    /// Assigns a faculty member by name.
    pub fn with_faculty(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty_id = Some(faculty_id.into());
        self
    }

    /// Number of session units this course asks for: L + T + one per lab batch.
    ///
    /// Only meaningful after partitioning for courses with a practical component.
    pub fn required_units(&self) -> usize {
        self.hours.lecture as usize + self.hours.tutorial as usize + self.lab_batches.len()
    }
}
