//! Entity catalog.
//!
//! Holds the loaded courses, faculty, rooms, and batch configurations.
//! Iteration order is load order; the slot allocator scans rooms in this
//! order, so it is part of the observable scheduling behaviour.

use serde::{Deserialize, Serialize};

use super::{BatchConfig, Course, Faculty, Room};

/// The loaded input entities for one or more scheduling runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub faculty: Vec<Faculty>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub batch_configs: Vec<BatchConfig>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Adds a faculty member.
    pub fn with_faculty(mut self, faculty: Faculty) -> Self {
        self.faculty.push(faculty);
        self
    }

    /// Adds a room.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Adds a batch configuration, replacing any existing one for the same
    /// (department, semester).
    pub fn with_batch_config(mut self, config: BatchConfig) -> Self {
        self.batch_configs
            .retain(|c| !(c.department == config.department && c.semester == config.semester));
        self.batch_configs.push(config);
        self
    }

    /// Finds a course by code.
    pub fn course(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Finds a faculty member by name.
    pub fn faculty(&self, name: &str) -> Option<&Faculty> {
        self.faculty.iter().find(|f| f.name == name)
    }

    /// Finds a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Finds the batch configuration for a department and semester.
    pub fn batch_config(&self, department: &str, semester: u32) -> Option<&BatchConfig> {
        find_batch_config(&self.batch_configs, department, semester)
    }

    /// Faculty record assigned to a course, if any and if it exists.
    pub fn faculty_for(&self, course: &Course) -> Option<&Faculty> {
        course.faculty_id.as_deref().and_then(|name| self.faculty(name))
    }

    /// Courses of one semester, in catalog order.
    pub fn courses_in_semester(&self, semester: u32) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(move |c| c.semester == semester)
    }

    /// Distinct semesters present among the courses, ascending.
    pub fn semesters(&self) -> Vec<u32> {
        let mut semesters: Vec<u32> = self.courses.iter().map(|c| c.semester).collect();
        semesters.sort_unstable();
        semesters.dedup();
        semesters
    }

    /// Fills `faculty_id` for courses that have none.
    ///
    /// A faculty member matches a course when their taught course code is
    /// the course code, or `"{department}_{code}"`. Exact matches win over
    /// department-prefixed ones; ties go to the first faculty in catalog
    /// order. Returns the number of courses that received a faculty.
    pub fn assign_faculty(&mut self) -> usize {
        let mut assigned = 0;
        for course in self.courses.iter_mut().filter(|c| c.faculty_id.is_none()) {
            let exact = self.faculty.iter().find(|f| f.course_code == course.id);
            let found = exact.or_else(|| {
                self.faculty
                    .iter()
                    .find(|f| f.course_code == format!("{}_{}", f.department, course.id))
            });
            if let Some(faculty) = found {
                course.faculty_id = Some(faculty.name.clone());
                assigned += 1;
            }
        }
        assigned
    }
}

/// Batch configuration lookup over a slice.
pub(crate) fn find_batch_config<'a>(
    configs: &'a [BatchConfig],
    department: &str,
    semester: u32,
) -> Option<&'a BatchConfig> {
    configs
        .iter()
        .find(|c| c.department == department && c.semester == semester)
}
