//! University course timetabling.
//!
//! Builds a weekly timetable from a catalog of courses, faculty, rooms, and
//! lab batch configurations. Each course expands into lecture, tutorial,
//! and practical session units which are placed greedily into
//! (day, slot, room) combinations under room, faculty, and break
//! constraints.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Faculty`, `Room`, `BatchConfig`,
//!   `Catalog`, `TimeSlot`, `BreakCalendar`, `Timetable`
//! - **`scheduler`**: `OccupancyTracker`, `BatchPartitioner`, `SlotAllocator`,
//!   `TimetableBuilder`, `TimetableReport`
//! - **`validation`**: Catalog integrity checks and timetable audits
//! - **`config`**: Weekly grid, breaks, and room-type tags
//! - **`error`**: Crate error type
//! - **`logging`**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use u_timetable::{Catalog, Course, Faculty, Room, TimetableBuilder, TimetableConfig};
//!
//! let mut catalog = Catalog::new()
//!     .with_course(Course::new("MA101", "CSE", 1).with_ltp(3, 1, 0).with_students(55).with_faculty("Dr. Iyer"))
//!     .with_faculty(Faculty::new("Dr. Iyer", "CSE"))
//!     .with_room(Room::lecture("C101", 60));
//!
//! let config = TimetableConfig::default();
//! let timetable = TimetableBuilder::new(config.clone()).build(&mut catalog);
//!
//! let rows = timetable.course_summaries(&catalog, &config.unassigned_faculty_label);
//! assert_eq!(rows[0].slots.len(), 4);
//! assert!(u_timetable::validation::check_timetable(&timetable, &catalog, &config).is_empty());
//! ```
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"
//! - Schaerf (1999), "A Survey of Automated Timetabling"

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::TimetableConfig;
pub use error::{Result, TimetableError};
pub use models::{
    BatchConfig, Catalog, Course, Day, Faculty, Room, RoomType, TimeSlot, Timetable,
    TimetableEntry,
};
pub use scheduler::{TimetableBuilder, TimetableReport};
