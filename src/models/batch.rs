//! Lab batch configuration.
//!
//! A `BatchConfig` describes how one (department, semester) cohort is
//! split into sections and lab batches. It is read-only after load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cohort split for one department and semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub department: String,
    pub semester: u32,
    /// Students enrolled across all sections.
    pub total_students: u32,
    /// Parallel sections.
    pub sections: u32,
    /// Maximum students per lab batch. Also the capacity a lab room must
    /// offer for a practical session.
    pub batch_size: u32,
}

impl BatchConfig {
    /// Creates a batch configuration.
    pub fn new(
        department: impl Into<String>,
        semester: u32,
        total_students: u32,
        sections: u32,
        batch_size: u32,
    ) -> Self {
        Self {
            department: department.into(),
            semester,
            total_students,
            sections,
            batch_size,
        }
    }

    /// Catalog lookup key.
    pub fn key(&self) -> (String, u32) {
        (self.department.clone(), self.semester)
    }
}

/// Identifies one lab batch: section index and batch index, both 1-based.
///
/// Renders as `S{section}B{batch}`, e.g. `S1B2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BatchLabel {
    pub section: u32,
    pub batch: u32,
}

impl BatchLabel {
    pub fn new(section: u32, batch: u32) -> Self {
        Self { section, batch }
    }
}

impl fmt::Display for BatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}B{}", self.section, self.batch)
    }
}
