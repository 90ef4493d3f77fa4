//! Input and output validation.
//!
//! [`validate_catalog`] checks the structural integrity of a catalog before
//! scheduling. Detects:
//! - Duplicate course, room, faculty, and batch configuration keys
//! - Rooms without seats
//! - Batch configurations that cannot be partitioned
//! - Courses referring to faculty missing from the catalog
//! - Faculty preferences outside the configured slot grid
//!
//! [`check_timetable`] audits a finished timetable against the scheduling
//! rules: no double-booked room or faculty, daily caps respected, no
//! session during a break, capacity and room type honored, preferences
//! honored.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::TimetableConfig;
use crate::models::{Catalog, Day, SessionKind, Timetable, TimetableEntry};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A catalog validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A room has zero capacity.
    ZeroCapacity,
    /// A batch configuration has zero sections or zero batch size.
    InvalidBatchConfig,
    /// A course names a faculty member that doesn't exist.
    UnknownFaculty,
    /// A preferred slot is not part of the slot grid.
    PreferredSlotOffGrid,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a catalog against a configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(catalog: &Catalog, config: &TimetableConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut course_ids = HashSet::new();
    for course in &catalog.courses {
        if !course_ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for room in &catalog.rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Room '{}' has no seats", room.id),
            ));
        }
    }

    let mut faculty_names = HashSet::new();
    for faculty in &catalog.faculty {
        if !faculty_names.insert(faculty.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate faculty: {}", faculty.name),
            ));
        }
        for slot in &faculty.preferred_slots {
            if !config.time_slots.contains(slot) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::PreferredSlotOffGrid,
                    format!("Faculty '{}' prefers {slot}, which is not a configured slot", faculty.name),
                ));
            }
        }
    }

    let mut batch_keys = HashSet::new();
    for cfg in &catalog.batch_configs {
        if !batch_keys.insert(cfg.key()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!(
                    "Duplicate batch configuration: {} semester {}",
                    cfg.department, cfg.semester
                ),
            ));
        }
        if cfg.sections == 0 || cfg.batch_size == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBatchConfig,
                format!(
                    "Batch configuration {} semester {} needs positive sections and batch size",
                    cfg.department, cfg.semester
                ),
            ));
        }
    }

    for course in &catalog.courses {
        if let Some(name) = course.faculty_id.as_deref() {
            if !faculty_names.contains(name) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownFaculty,
                    format!("Course '{}' references unknown faculty '{name}'", course.id),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A broken scheduling rule found in a timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related entity ID (room, faculty, or course).
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Two sessions in one room at the same (day, slot).
    RoomDoubleBooked,
    /// Two sessions for one faculty member at the same (day, slot).
    FacultyDoubleBooked,
    /// A faculty member teaches more sessions in a day than allowed.
    DailyCapExceeded,
    /// A session sits in a break slot.
    BreakSlot,
    /// The day or slot is not part of the configured grid.
    OffGrid,
    /// The room is unknown, of the wrong type, or too small.
    RoomMismatch,
    /// The slot is outside the faculty member's preferences.
    PreferenceIgnored,
}

impl Violation {
    fn new(violation_type: ViolationType, entity_id: &str, message: String) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.to_string(),
            message,
        }
    }
}

/// Audits one scheduling run's output.
///
/// Timetables concatenated from independent semester runs may legitimately
/// reuse rooms and faculty; check each run separately.
pub fn check_timetable(
    timetable: &Timetable,
    catalog: &Catalog,
    config: &TimetableConfig,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let breaks = config.break_calendar();

    let mut rooms_seen = HashSet::new();
    let mut faculty_seen = HashSet::new();
    let mut faculty_per_day: HashMap<(&str, Day), u32> = HashMap::new();

    for entry in &timetable.entries {
        let at = format!("{} {}", entry.day, entry.slot);

        if !config.days.contains(&entry.day) || !config.time_slots.contains(&entry.slot) {
            violations.push(Violation::new(
                ViolationType::OffGrid,
                &entry.course_id,
                format!("{} placed at {at}, outside the grid", entry.label()),
            ));
        }
        if breaks.is_break(&entry.slot) {
            violations.push(Violation::new(
                ViolationType::BreakSlot,
                &entry.course_id,
                format!("{} placed during a break", entry.label()),
            ));
        }
        if !rooms_seen.insert((entry.room_id.as_str(), entry.day, entry.slot)) {
            violations.push(Violation::new(
                ViolationType::RoomDoubleBooked,
                &entry.room_id,
                format!("Room '{}' double-booked at {at}", entry.room_id),
            ));
        }

        if let Some(room_violation) = check_room(entry, catalog, config) {
            violations.push(room_violation);
        }

        let Some(name) = entry.faculty_id.as_deref() else {
            continue;
        };
        if !faculty_seen.insert((name, entry.day, entry.slot)) {
            violations.push(Violation::new(
                ViolationType::FacultyDoubleBooked,
                name,
                format!("Faculty '{name}' double-booked at {at}"),
            ));
        }
        *faculty_per_day.entry((name, entry.day)).or_default() += 1;

        if let Some(faculty) = catalog.faculty(name) {
            if !faculty.accepts(&entry.slot) {
                violations.push(Violation::new(
                    ViolationType::PreferenceIgnored,
                    name,
                    format!("Faculty '{name}' placed at {at}, outside preferred slots"),
                ));
            }
        }
    }

    for ((name, day), count) in faculty_per_day {
        let Some(faculty) = catalog.faculty(name) else {
            continue;
        };
        if count > faculty.max_sessions_per_day {
            violations.push(Violation::new(
                ViolationType::DailyCapExceeded,
                name,
                format!(
                    "Faculty '{name}' teaches {count} sessions on {day}, cap is {}",
                    faculty.max_sessions_per_day
                ),
            ));
        }
    }

    violations
}

fn check_room(entry: &TimetableEntry, catalog: &Catalog, config: &TimetableConfig) -> Option<Violation> {
    let Some(room) = catalog.room(&entry.room_id) else {
        return Some(Violation::new(
            ViolationType::RoomMismatch,
            &entry.room_id,
            format!("{} uses unknown room '{}'", entry.label(), entry.room_id),
        ));
    };
    let course = catalog.course(&entry.course_id)?;

    let (room_type, required) = match entry.kind {
        SessionKind::Lecture | SessionKind::Tutorial => {
            (&config.lecture_room_type, course.registered_students)
        }
        SessionKind::Practical => (
            &config.lab_room_type,
            catalog
                .batch_config(&course.department, course.semester)
                .map(|c| c.batch_size)
                .unwrap_or(course.registered_students),
        ),
    };

    if room.fits(room_type, required) {
        None
    } else {
        Some(Violation::new(
            ViolationType::RoomMismatch,
            &room.id,
            format!(
                "{} needs {room_type} with {required} seats, room '{}' is {} with {}",
                entry.label(),
                room.id,
                room.room_type,
                room.capacity
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BatchConfig, Course, Faculty, Room, TimeSlot};
    use crate::scheduler::TimetableBuilder;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn slot(h: u32) -> TimeSlot {
        TimeSlot::hours(h, h + 1).unwrap()
    }

    fn sample_catalog() -> Catalog {
        Catalog::new()
            .with_course(
                Course::new("CS101", "CSE", 1)
                    .with_ltp(3, 1, 2)
                    .with_students(60)
                    .with_faculty("Dr. A"),
            )
            .with_faculty(Faculty::new("Dr. A", "CSE").with_preferred_slot(slot(9)))
            .with_room(Room::lecture("R1", 60))
            .with_room(Room::lab("L1", 30))
            .with_batch_config(BatchConfig::new("CSE", 1, 60, 1, 30))
    }

    fn entry(course: &str, day: Day, h: u32, room: &str, faculty: Option<&str>) -> TimetableEntry {
        TimetableEntry {
            course_id: course.into(),
            kind: SessionKind::Lecture,
            day,
            slot: slot(h),
            room_id: room.into(),
            faculty_id: faculty.map(String::from),
            batch: None,
        }
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&sample_catalog(), &TimetableConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_ids() {
        let mut catalog = sample_catalog()
            .with_course(Course::new("CS101", "CSE", 2))
            .with_room(Room::lecture("R1", 10));
        catalog.batch_configs.push(BatchConfig::new("CSE", 1, 10, 1, 10));

        let errors = validate_catalog(&catalog, &TimetableConfig::default()).unwrap_err();
        let dupes = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::DuplicateId)
            .count();
        assert_eq!(dupes, 3);
        assert!(errors.iter().any(|e| e.message.contains("room")));
    }

    #[test]
    fn test_bad_rooms_and_batches() {
        let catalog = Catalog::new()
            .with_room(Room::lecture("R0", 0))
            .with_batch_config(BatchConfig::new("CSE", 1, 60, 0, 30));
        let errors = validate_catalog(&catalog, &TimetableConfig::default()).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::ZeroCapacity));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidBatchConfig));
    }

    #[test]
    fn test_unknown_faculty_and_off_grid() {
        let catalog = Catalog::new()
            .with_course(Course::new("X", "CSE", 1).with_faculty("Nobody"))
            .with_faculty(Faculty::new("Dr. B", "CSE").with_preferred_slot(slot(7)));
        let errors = validate_catalog(&catalog, &TimetableConfig::default()).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::UnknownFaculty));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PreferredSlotOffGrid));
    }

    #[test]
    fn test_builder_output_is_clean() {
        let config = TimetableConfig::default();
        let mut catalog = sample_catalog();
        let tt = TimetableBuilder::new(config.clone()).build(&mut catalog);
        assert!(tt.entry_count() > 0);
        assert!(check_timetable(&tt, &catalog, &config).is_empty());
    }

    #[test]
    fn test_detects_double_booking() {
        let config = TimetableConfig::default();
        let catalog = sample_catalog();
        let mut tt = Timetable::new();
        tt.add_entry(entry("CS101", Day::Monday, 9, "R1", Some("Dr. A")));
        tt.add_entry(entry("CS101", Day::Monday, 9, "R1", Some("Dr. A")));

        let v = check_timetable(&tt, &catalog, &config);
        assert!(v.iter().any(|v| v.violation_type == ViolationType::RoomDoubleBooked));
        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::FacultyDoubleBooked));
    }

    #[test]
    fn test_detects_break_and_preference() {
        let config = TimetableConfig::default();
        let catalog = sample_catalog();
        let mut tt = Timetable::new();
        tt.add_entry(entry("CS101", Day::Monday, 11, "R1", Some("Dr. A")));

        let v = check_timetable(&tt, &catalog, &config);
        assert!(v.iter().any(|v| v.violation_type == ViolationType::BreakSlot));
        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::PreferenceIgnored));
    }

    #[test]
    fn test_detects_room_mismatch_and_cap() {
        let config = TimetableConfig::default();
        let catalog = sample_catalog()
            .with_faculty(Faculty::new("Dr. C", "CSE").with_daily_cap(1));
        let mut tt = Timetable::new();
        // Lecture of 60 students in a 30-seat lab.
        tt.add_entry(entry("CS101", Day::Monday, 9, "L1", Some("Dr. C")));
        tt.add_entry(entry("CS101", Day::Monday, 10, "R1", Some("Dr. C")));

        let v = check_timetable(&tt, &catalog, &config);
        assert!(v.iter().any(|v| v.violation_type == ViolationType::RoomMismatch));
        assert!(v
            .iter()
            .any(|v| v.violation_type == ViolationType::DailyCapExceeded));
    }

    fn random_catalog(rng: &mut StdRng) -> Catalog {
        let mut catalog = Catalog::new();
        let departments = ["CSE", "ECE"];

        for i in 0..rng.random_range(2..6) {
            catalog = catalog.with_room(Room::lecture(format!("R{i}"), rng.random_range(20..120)));
        }
        for i in 0..rng.random_range(1..4) {
            catalog = catalog.with_room(Room::lab(format!("L{i}"), rng.random_range(15..40)));
        }

        let usable = TimetableConfig::default().usable_slots();
        for i in 0..rng.random_range(2..6) {
            let mut faculty =
                Faculty::new(format!("F{i}"), departments[i % 2]).with_daily_cap(rng.random_range(1..7));
            if rng.random_bool(0.4) {
                let n = rng.random_range(1..usable.len());
                faculty = faculty.with_preferred_slots(usable[..n].to_vec());
            }
            catalog = catalog.with_faculty(faculty);
        }
        let faculty_count = catalog.faculty.len();

        for dept in departments {
            for semester in [1, 3] {
                if rng.random_bool(0.8) {
                    catalog = catalog.with_batch_config(BatchConfig::new(
                        dept,
                        semester,
                        rng.random_range(20..150),
                        rng.random_range(1..3),
                        rng.random_range(15..35),
                    ));
                }
            }
        }

        for i in 0..rng.random_range(4..15) {
            let dept = departments[rng.random_range(0..2)];
            let semester = if rng.random_bool(0.5) { 1 } else { 3 };
            let mut course = Course::new(format!("C{i}"), dept, semester)
                .with_ltp(
                    rng.random_range(0..4),
                    rng.random_range(0..2),
                    rng.random_range(0..3),
                )
                .with_students(rng.random_range(10..130));
            if rng.random_bool(0.85) {
                course = course.with_faculty(format!("F{}", rng.random_range(0..faculty_count)));
            }
            catalog = catalog.with_course(course);
        }
        catalog
    }

    #[test]
    fn test_random_catalogs_never_break_rules() {
        let config = TimetableConfig::default();
        let builder = TimetableBuilder::new(config.clone());

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut catalog = random_catalog(&mut rng);
            let tt = builder.build(&mut catalog);

            let violations = check_timetable(&tt, &catalog, &config);
            assert!(violations.is_empty(), "seed {seed}: {violations:?}");

            // Every unit is either placed or reported.
            let expected: usize = catalog.courses.iter().map(|c| c.required_units()).sum();
            assert_eq!(
                tt.entry_count() + tt.unscheduled.len(),
                expected,
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_random_semester_runs_are_individually_clean() {
        let config = TimetableConfig::default();
        let builder = TimetableBuilder::new(config.clone());

        for seed in 100..120 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut catalog = random_catalog(&mut rng);
            for semester in catalog.semesters() {
                let tt = builder.build_semester(&mut catalog, semester);
                assert!(check_timetable(&tt, &catalog, &config).is_empty(), "seed {seed}");
            }
        }
    }
}
