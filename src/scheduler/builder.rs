//! Timetable builder.
//!
//! # Algorithm
//!
//! 1. Order courses by total contact hours (descending), then registered
//!    students (descending). Ties keep catalog order.
//! 2. For each course, derive lab batches if it has a practical component.
//! 3. Expand the course into session units: one per lecture hour, one per
//!    tutorial hour, one per lab batch.
//! 4. Place each unit with the [`SlotAllocator`]; failures are recorded and
//!    the run continues.
//!
//! Courses are processed one at a time and units one at a time, so each
//! commit is visible to the next availability check.
//!
//! # Reference
//! The ordering is a largest-first greedy heuristic: the most demanding
//! courses are placed while rooms and slots are least contended.

use tracing::{info, warn};

use super::{BatchPartitioner, OccupancyTracker, SlotAllocator, SlotRequest};
use crate::config::TimetableConfig;
use crate::error::TimetableError;
use crate::models::{
    BatchLabel, Catalog, Course, Faculty, RoomType, SchedulingIssue, SessionKind, Timetable,
    TimetableEntry, UnscheduledUnit,
};

/// One schedulable occurrence of a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUnit {
    pub kind: SessionKind,
    pub batch: Option<BatchLabel>,
    pub room_type: RoomType,
    pub required_capacity: u32,
}

/// Orchestrates scheduling runs.
///
/// # Example
///
/// ```
/// use u_timetable::config::TimetableConfig;
/// use u_timetable::models::{Catalog, Course, Faculty, Room};
/// use u_timetable::scheduler::TimetableBuilder;
///
/// let mut catalog = Catalog::new()
///     .with_course(
///         Course::new("CS101", "CSE", 1)
///             .with_ltp(2, 1, 0)
///             .with_students(40)
///             .with_faculty("Dr. Rao"),
///     )
///     .with_faculty(Faculty::new("Dr. Rao", "CSE"))
///     .with_room(Room::lecture("R1", 60));
///
/// let timetable = TimetableBuilder::new(TimetableConfig::default()).build(&mut catalog);
/// assert_eq!(timetable.entry_count(), 3);
/// assert!(timetable.is_complete());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableBuilder {
    config: TimetableConfig,
}

impl TimetableBuilder {
    /// Creates a builder.
    pub fn new(config: TimetableConfig) -> Self {
        Self { config }
    }

    /// The run configuration.
    pub fn config(&self) -> &TimetableConfig {
        &self.config
    }

    /// Schedules every course in the catalog in a single run.
    ///
    /// Lab batches computed along the way are stored on the courses.
    pub fn build(&self, catalog: &mut Catalog) -> Timetable {
        let indices: Vec<usize> = (0..catalog.courses.len()).collect();
        self.run(catalog, indices)
    }

    /// Schedules the courses of one semester in a fresh run.
    pub fn build_semester(&self, catalog: &mut Catalog, semester: u32) -> Timetable {
        let indices: Vec<usize> = catalog
            .courses
            .iter()
            .enumerate()
            .filter(|(_, c)| c.semester == semester)
            .map(|(i, _)| i)
            .collect();
        info!(semester, courses = indices.len(), "scheduling semester");
        self.run(catalog, indices)
    }

    /// Schedules several semesters, each as an independent run with its own
    /// occupancy calendars, and concatenates the results in the given order.
    pub fn build_semesters(&self, catalog: &mut Catalog, semesters: &[u32]) -> Timetable {
        let mut combined = Timetable::new();
        for &semester in semesters {
            combined.extend(self.build_semester(catalog, semester));
        }
        combined
    }

    /// Session units a course expands into. Uses the lab batches already
    /// stored on the course.
    pub fn session_units(&self, course: &Course, catalog: &Catalog) -> Vec<SessionUnit> {
        let lecture = |kind| SessionUnit {
            kind,
            batch: None,
            room_type: self.config.lecture_room_type.clone(),
            required_capacity: course.registered_students,
        };

        let mut units = Vec::with_capacity(course.required_units());
        units.extend((0..course.hours.lecture).map(|_| lecture(SessionKind::Lecture)));
        units.extend((0..course.hours.tutorial).map(|_| lecture(SessionKind::Tutorial)));

        if course.hours.has_practical() {
            // Batches only exist when a config was found; the fallback covers
            // batches assigned by hand.
            let batch_capacity = catalog
                .batch_config(&course.department, course.semester)
                .map(|c| c.batch_size)
                .unwrap_or(course.registered_students);
            units.extend(course.lab_batches.iter().map(|&batch| SessionUnit {
                kind: SessionKind::Practical,
                batch: Some(batch),
                room_type: self.config.lab_room_type.clone(),
                required_capacity: batch_capacity,
            }));
        }
        units
    }

    fn run(&self, catalog: &mut Catalog, mut indices: Vec<usize>) -> Timetable {
        let mut tracker = OccupancyTracker::new(self.config.break_calendar());
        let mut timetable = Timetable::new();

        sort_courses(&catalog.courses, &mut indices);

        for idx in indices {
            self.prepare_batches(catalog, idx, &mut timetable);
            self.schedule_course(&catalog.courses[idx], catalog, &mut tracker, &mut timetable);
        }

        info!(
            placed = timetable.entry_count(),
            unscheduled = timetable.unscheduled.len(),
            issues = timetable.issues.len(),
            "scheduling run finished"
        );
        timetable
    }

    /// Derives and stores lab batches for a course, once per course.
    fn prepare_batches(&self, catalog: &mut Catalog, idx: usize, timetable: &mut Timetable) {
        let course = &catalog.courses[idx];
        if !course.hours.has_practical() || !course.lab_batches.is_empty() {
            return;
        }

        let partitioner = BatchPartitioner::new(&catalog.batch_configs);
        match partitioner.partition(course) {
            Ok(labels) => {
                info!(course = %course.id, batches = labels.len(), "created lab batches");
                catalog.courses[idx].lab_batches = labels;
            }
            Err(TimetableError::MissingBatchConfig {
                department,
                semester,
            }) => {
                warn!(
                    course = %course.id,
                    department = department.as_str(),
                    semester,
                    "no batch configuration, practical sessions skipped"
                );
                timetable.add_issue(SchedulingIssue::MissingBatchConfig {
                    course_id: course.id.clone(),
                    department,
                    semester,
                });
            }
            Err(err) => {
                warn!(course = %course.id, error = %err, "unusable batch configuration");
                timetable.add_issue(SchedulingIssue::InvalidBatchConfig {
                    course_id: course.id.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    fn schedule_course(
        &self,
        course: &Course,
        catalog: &Catalog,
        tracker: &mut OccupancyTracker,
        timetable: &mut Timetable,
    ) {
        info!(course = %course.id, name = %course.name, "scheduling course");

        let faculty = resolve_faculty(course, catalog, timetable);
        let allocator = SlotAllocator::new(&self.config, &catalog.rooms);
        let units = self.session_units(course, catalog);
        let required = units.len();
        let mut placed = 0;

        for unit in units {
            let request = SlotRequest::new(&unit.room_type, unit.required_capacity)
                .with_faculty(faculty);

            match allocator.find_slot(tracker, &request) {
                Some(placement) => {
                    placed += 1;
                    timetable.add_entry(TimetableEntry {
                        course_id: course.id.clone(),
                        kind: unit.kind,
                        day: placement.day,
                        slot: placement.slot,
                        room_id: placement.room_id,
                        faculty_id: faculty.map(|f| f.name.clone()),
                        batch: unit.batch,
                    });
                }
                None => {
                    warn!(
                        course = %course.id,
                        kind = %unit.kind,
                        batch = ?unit.batch.map(|b| b.to_string()),
                        capacity = unit.required_capacity,
                        "no feasible slot"
                    );
                    timetable.add_unscheduled(UnscheduledUnit {
                        course_id: course.id.clone(),
                        kind: unit.kind,
                        batch: unit.batch,
                        required_capacity: unit.required_capacity,
                    });
                }
            }
        }

        info!(course = %course.id, placed, required, "course done");
    }
}

/// Faculty record for a course, recording why there is none.
fn resolve_faculty<'a>(
    course: &Course,
    catalog: &'a Catalog,
    timetable: &mut Timetable,
) -> Option<&'a Faculty> {
    let Some(name) = course.faculty_id.as_deref() else {
        warn!(course = %course.id, "no faculty assigned");
        timetable.add_issue(SchedulingIssue::UnassignedFaculty {
            course_id: course.id.clone(),
        });
        return None;
    };

    let faculty = catalog.faculty(name);
    if faculty.is_none() {
        warn!(course = %course.id, faculty = name, "faculty not in catalog");
        timetable.add_issue(SchedulingIssue::UnknownFaculty {
            course_id: course.id.clone(),
            faculty_id: name.to_string(),
        });
    }
    faculty
}

/// Sorts course indices: total contact hours desc, then students desc.
/// Stable, so equal courses keep catalog order.
fn sort_courses(courses: &[Course], indices: &mut [usize]) {
    indices.sort_by(|&a, &b| {
        let (ca, cb) = (&courses[a], &courses[b]);
        cb.hours
            .total()
            .cmp(&ca.hours.total())
            .then(cb.registered_students.cmp(&ca.registered_students))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchConfig, ContactHours, Day, Room, TimeSlot};

    fn slot(h: u32) -> TimeSlot {
        TimeSlot::hours(h, h + 1).unwrap()
    }

    fn builder() -> TimetableBuilder {
        TimetableBuilder::new(TimetableConfig::default())
    }

    #[test]
    fn test_course_ordering() {
        let courses = vec![
            Course::new("small", "CSE", 1).with_ltp(2, 0, 0).with_students(100),
            Course::new("big", "CSE", 1).with_ltp(3, 1, 0).with_students(10),
            Course::new("tie_more", "CSE", 1).with_ltp(2, 0, 0).with_students(200),
            Course::new("tie_same", "CSE", 1).with_ltp(1, 1, 0).with_students(100),
        ];
        let mut idx: Vec<usize> = (0..courses.len()).collect();
        sort_courses(&courses, &mut idx);
        let order: Vec<&str> = idx.iter().map(|&i| courses[i].id.as_str()).collect();
        assert_eq!(order, vec!["big", "tie_more", "small", "tie_same"]);
    }

    #[test]
    fn test_ordering_counts_all_contact_hours() {
        let courses = vec![
            Course::new("a", "CSE", 1).with_ltp(2, 0, 0),
            Course::new("b", "CSE", 1).with_hours(ContactHours::new(1, 0, 0, 2, 3)),
        ];
        let mut idx = vec![0, 1];
        sort_courses(&courses, &mut idx);
        assert_eq!(idx, vec![1, 0]);
    }

    #[test]
    fn test_session_units() {
        let mut catalog = Catalog::new()
            .with_course(Course::new("CS310", "CSE", 4).with_ltp(2, 1, 4).with_students(120))
            .with_batch_config(BatchConfig::new("CSE", 4, 120, 2, 30));
        let b = builder();
        let mut tt = Timetable::new();
        b.prepare_batches(&mut catalog, 0, &mut tt);

        let units = b.session_units(&catalog.courses[0], &catalog);
        // 2 lectures + 1 tutorial + 4 batches (2 sections × 2), P=4 does not multiply.
        assert_eq!(units.len(), 7);
        assert_eq!(units[0].required_capacity, 120);
        assert_eq!(units[2].kind, SessionKind::Tutorial);
        let labs: Vec<&SessionUnit> = units
            .iter()
            .filter(|u| u.kind == SessionKind::Practical)
            .collect();
        assert_eq!(labs.len(), 4);
        assert!(labs.iter().all(|u| u.required_capacity == 30));
        assert!(labs.iter().all(|u| u.room_type == RoomType::ComputerLab));
    }

    #[test]
    fn test_build_full_course() {
        crate::logging::init_test();
        let mut catalog = Catalog::new()
            .with_course(
                Course::new("CS310", "CSE", 4)
                    .with_ltp(2, 1, 2)
                    .with_students(60)
                    .with_faculty("Dr. Rao"),
            )
            .with_faculty(Faculty::new("Dr. Rao", "CSE"))
            .with_room(Room::lecture("R1", 60))
            .with_room(Room::lab("L1", 30))
            .with_batch_config(BatchConfig::new("CSE", 4, 60, 1, 30));

        let tt = builder().build(&mut catalog);
        assert!(tt.is_complete());
        assert!(tt.issues.is_empty());
        assert_eq!(tt.entry_count(), 5);
        assert_eq!(catalog.courses[0].lab_batches.len(), 2);

        let slots: Vec<(Day, TimeSlot, &str)> = tt
            .entries
            .iter()
            .map(|e| (e.day, e.slot, e.room_id.as_str()))
            .collect();
        assert_eq!(
            slots,
            vec![
                (Day::Monday, slot(9), "R1"),
                (Day::Monday, slot(10), "R1"),
                (Day::Monday, slot(12), "R1"),
                (Day::Monday, slot(15), "L1"),
                (Day::Monday, slot(16), "L1"),
            ]
        );
        assert_eq!(tt.entries[3].batch.map(|b| b.to_string()).as_deref(), Some("S1B1"));
        assert!(tt.entries.iter().all(|e| e.faculty_id.as_deref() == Some("Dr. Rao")));
    }

    #[test]
    fn test_undersized_room_leaves_units_unscheduled() {
        let mut catalog = Catalog::new()
            .with_course(Course::new("BIG", "CSE", 1).with_ltp(2, 1, 0).with_students(40))
            .with_room(Room::lecture("R1", 30));

        let tt = builder().build(&mut catalog);
        assert_eq!(tt.entry_count(), 0);
        assert_eq!(tt.unscheduled.len(), 3);
        assert!(tt.unscheduled.iter().all(|u| u.required_capacity == 40));
    }

    #[test]
    fn test_missing_batch_config_is_partial() {
        let mut catalog = Catalog::new()
            .with_course(Course::new("CS310", "CSE", 4).with_ltp(1, 0, 2).with_students(20))
            .with_room(Room::lecture("R1", 60))
            .with_room(Room::lab("L1", 60));

        let tt = builder().build(&mut catalog);
        assert_eq!(tt.entry_count(), 1);
        assert!(tt.unscheduled.is_empty());
        assert!(tt.issues.iter().any(|i| matches!(
            i,
            SchedulingIssue::MissingBatchConfig { semester: 4, .. }
        )));
    }

    #[test]
    fn test_invalid_batch_config_recorded() {
        let mut catalog = Catalog::new()
            .with_course(Course::new("CS310", "CSE", 4).with_ltp(0, 0, 2))
            .with_batch_config(BatchConfig::new("CSE", 4, 60, 0, 30));

        let tt = builder().build(&mut catalog);
        assert!(matches!(
            tt.issues[0],
            SchedulingIssue::InvalidBatchConfig { .. }
        ));
    }

    #[test]
    fn test_unassigned_faculty_still_scheduled() {
        let mut catalog = Catalog::new()
            .with_course(Course::new("MA101", "CSE", 1).with_ltp(2, 0, 0).with_students(10))
            .with_course(
                Course::new("MA102", "CSE", 1)
                    .with_ltp(1, 0, 0)
                    .with_students(10)
                    .with_faculty("Ghost"),
            )
            .with_room(Room::lecture("R1", 60));

        let tt = builder().build(&mut catalog);
        assert_eq!(tt.entry_count(), 3);
        assert!(tt.entries.iter().all(|e| e.faculty_id.is_none()));
        assert!(tt
            .issues
            .contains(&SchedulingIssue::UnassignedFaculty { course_id: "MA101".into() }));
        assert!(tt.issues.contains(&SchedulingIssue::UnknownFaculty {
            course_id: "MA102".into(),
            faculty_id: "Ghost".into(),
        }));
        // Room checks still apply: three distinct slots in the single room.
        let mut seen: Vec<(Day, TimeSlot)> = tt.entries.iter().map(|e| (e.day, e.slot)).collect();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_preferred_single_slot_limits_lectures() {
        let config = TimetableConfig::default().with_days(vec![Day::Monday]);
        let mut catalog = Catalog::new()
            .with_course(
                Course::new("CS1", "CSE", 1)
                    .with_ltp(2, 0, 0)
                    .with_students(10)
                    .with_faculty("Dr. A"),
            )
            .with_faculty(Faculty::new("Dr. A", "CSE").with_preferred_slot(slot(9)))
            .with_room(Room::lecture("R1", 60))
            .with_room(Room::lecture("R2", 60));

        let tt = TimetableBuilder::new(config).build(&mut catalog);
        assert_eq!(tt.entry_count(), 1);
        assert_eq!(tt.entries[0].slot, slot(9));
        assert_eq!(tt.unscheduled.len(), 1);
        assert_eq!(tt.unscheduled[0].kind, SessionKind::Lecture);
    }

    #[test]
    fn test_shared_faculty_first_course_wins() {
        let config = TimetableConfig::default().with_days(vec![Day::Monday]);
        let mut catalog = Catalog::new()
            .with_course(
                Course::new("LIGHT", "CSE", 1)
                    .with_ltp(1, 0, 0)
                    .with_students(10)
                    .with_faculty("Dr. A"),
            )
            .with_course(
                Course::new("HEAVY", "CSE", 1)
                    .with_ltp(1, 0, 0)
                    .with_students(50)
                    .with_faculty("Dr. A"),
            )
            .with_faculty(Faculty::new("Dr. A", "CSE"))
            .with_room(Room::lecture("R1", 60))
            .with_room(Room::lecture("R2", 60));

        let tt = TimetableBuilder::new(config).build(&mut catalog);
        let heavy = tt.entries_for_course("HEAVY");
        let light = tt.entries_for_course("LIGHT");
        // HEAVY is processed first (more students) and takes 09:00;
        // LIGHT cannot share the faculty and moves to 10:00.
        assert_eq!(heavy[0].slot, slot(9));
        assert_eq!(light[0].slot, slot(10));
    }

    #[test]
    fn test_semesters_use_isolated_calendars() {
        let mut catalog = Catalog::new()
            .with_course(Course::new("S2", "CSE", 2).with_ltp(1, 0, 0).with_students(10))
            .with_course(Course::new("S4", "CSE", 4).with_ltp(1, 0, 0).with_students(10))
            .with_room(Room::lecture("R1", 60));

        let tt = builder().build_semesters(&mut catalog, &[4, 2]);
        assert_eq!(tt.entry_count(), 2);
        // Each run starts empty, so both land on Monday 09:00 in R1.
        assert_eq!(tt.entries[0].course_id, "S4");
        assert!(tt.entries.iter().all(|e| e.day == Day::Monday && e.slot == slot(9)));

        // A single combined run must separate them.
        let combined = builder().build(&mut catalog);
        assert_ne!(combined.entries[0].slot, combined.entries[1].slot);
    }

    #[test]
    fn test_batches_not_recomputed() {
        let mut catalog = Catalog::new()
            .with_course(Course::new("CS310", "CSE", 4).with_ltp(0, 0, 2).with_students(60))
            .with_room(Room::lab("L1", 30))
            .with_batch_config(BatchConfig::new("CSE", 4, 60, 1, 30));

        let b = builder();
        b.build(&mut catalog);
        assert_eq!(catalog.courses[0].lab_batches.len(), 2);

        // Changing the config afterwards does not re-partition the course.
        catalog = catalog.with_batch_config(BatchConfig::new("CSE", 4, 90, 1, 30));
        let tt = b.build(&mut catalog);
        assert_eq!(catalog.courses[0].lab_batches.len(), 2);
        assert_eq!(tt.entry_count(), 2);
    }

    #[test]
    fn test_empty_catalog() {
        let mut catalog = Catalog::new();
        let tt = builder().build(&mut catalog);
        assert_eq!(tt.entry_count(), 0);
        assert!(tt.is_complete());
    }
}
