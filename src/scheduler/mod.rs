//! Greedy timetable construction and quality metrics.
//!
//! # Pipeline
//!
//! ```text
//! Catalog ──► BatchPartitioner ──► TimetableBuilder ──► Timetable ──► TimetableReport
//!                                     │
//!                                     └─ SlotAllocator ◄─► OccupancyTracker
//! ```
//!
//! `TimetableBuilder` orders courses and expands them into session units,
//! `SlotAllocator` places each unit by first-fit search, and
//! `OccupancyTracker` holds the room and faculty calendars of one run.
//!
//! The heuristic is not optimal: a unit that finds no slot is reported as
//! unscheduled, with no backtracking.

mod allocator;
mod builder;
mod occupancy;
mod partition;
mod report;

pub use allocator::{Placement, SlotAllocator, SlotRequest};
pub use builder::{SessionUnit, TimetableBuilder};
pub use occupancy::OccupancyTracker;
pub use partition::{labels_for, BatchPartitioner};
pub use report::TimetableReport;
