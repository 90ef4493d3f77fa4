//! Timetabling domain models.
//!
//! Input entities (courses, faculty, rooms, batch configurations), the
//! weekly grid (days, time slots, breaks), and the output timetable.
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | Course | Task |
//! | Session unit (lecture, tutorial, lab batch) | Activity |
//! | Room, Faculty | Resource |
//! | Break calendar | Blocked periods |
//! | Timetable | Schedule |

mod batch;
mod calendar;
mod catalog;
mod course;
mod faculty;
mod room;
pub(crate) mod time_slot;
mod timetable;

pub use batch::{BatchConfig, BatchLabel};
pub use calendar::{BreakCalendar, BreakWindow};
pub use catalog::Catalog;
pub(crate) use catalog::find_batch_config;
pub use course::{ContactHours, Course, SessionKind};
pub use faculty::{Faculty, DEFAULT_MAX_SESSIONS_PER_DAY};
pub use room::{Room, RoomType};
pub use time_slot::{default_time_slots, normalize_slot, parse_clock, Day, TimeSlot};
pub use timetable::{
    CourseTimetable, SchedulingIssue, Timetable, TimetableEntry, UnscheduledUnit,
};
