//! Timetable quality metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Required units | Placed + unplaced session units |
//! | Fill rate | Placed / required |
//! | Course coverage | Courses fully, partially, or not at all placed |
//! | Room utilization | Sessions in a room / (days × usable slots) |
//! | Peak faculty load | Most sessions a faculty member teaches on one day |

use std::collections::{HashMap, HashSet};

use crate::config::TimetableConfig;
use crate::models::{Catalog, Day, Timetable};

/// Summary indicators of a scheduling run.
#[derive(Debug, Clone)]
pub struct TimetableReport {
    /// Session units the run tried to place.
    pub required_units: usize,
    /// Session units placed.
    pub scheduled_units: usize,
    /// `scheduled_units / required_units`, 1.0 when nothing was required.
    pub fill_rate: f64,
    /// Courses with every unit placed.
    pub fully_scheduled_courses: usize,
    /// Courses with some, but not all, units placed.
    pub partially_scheduled_courses: usize,
    /// Courses with units but none placed.
    pub unscheduled_courses: usize,
    /// Courses with at least one recorded issue.
    pub courses_with_issues: usize,
    /// Per-room share of usable (day, slot) cells in use (0.0..1.0).
    pub utilization_by_room: HashMap<String, f64>,
    /// Mean of `utilization_by_room`.
    pub avg_room_utilization: f64,
    /// Highest per-day session count of each faculty member.
    pub peak_faculty_load: HashMap<String, usize>,
}

impl TimetableReport {
    /// Computes the report for a finished timetable.
    pub fn calculate(timetable: &Timetable, catalog: &Catalog, config: &TimetableConfig) -> Self {
        let scheduled_units = timetable.entries.len();
        let required_units = scheduled_units + timetable.unscheduled.len();
        let fill_rate = if required_units == 0 {
            1.0
        } else {
            scheduled_units as f64 / required_units as f64
        };

        let placed: HashSet<&str> = timetable
            .entries
            .iter()
            .map(|e| e.course_id.as_str())
            .collect();
        let missing: HashSet<&str> = timetable
            .unscheduled
            .iter()
            .map(|u| u.course_id.as_str())
            .collect();

        let fully_scheduled_courses = placed.difference(&missing).count();
        let partially_scheduled_courses = placed.intersection(&missing).count();
        let unscheduled_courses = missing.difference(&placed).count();
        let courses_with_issues = timetable
            .issues
            .iter()
            .map(|i| i.course_id())
            .collect::<HashSet<_>>()
            .len();

        let cells = config.days.len() * config.usable_slots().len();
        let utilization_by_room: HashMap<String, f64> = catalog
            .rooms
            .iter()
            .map(|room| {
                let used = timetable.entries_for_room(&room.id).len();
                let util = if cells == 0 {
                    0.0
                } else {
                    used as f64 / cells as f64
                };
                (room.id.clone(), util)
            })
            .collect();
        let avg_room_utilization = if utilization_by_room.is_empty() {
            0.0
        } else {
            utilization_by_room.values().sum::<f64>() / utilization_by_room.len() as f64
        };

        let mut per_day: HashMap<(&str, Day), usize> = HashMap::new();
        for entry in &timetable.entries {
            if let Some(faculty) = entry.faculty_id.as_deref() {
                *per_day.entry((faculty, entry.day)).or_default() += 1;
            }
        }
        let mut peak_faculty_load: HashMap<String, usize> = HashMap::new();
        for ((faculty, _), count) in per_day {
            let peak = peak_faculty_load.entry(faculty.to_string()).or_default();
            *peak = (*peak).max(count);
        }

        Self {
            required_units,
            scheduled_units,
            fill_rate,
            fully_scheduled_courses,
            partially_scheduled_courses,
            unscheduled_courses,
            courses_with_issues,
            utilization_by_room,
            avg_room_utilization,
            peak_faculty_load,
        }
    }

    /// Whether every unit was placed and no course raised an issue.
    pub fn is_clean(&self) -> bool {
        self.scheduled_units == self.required_units && self.courses_with_issues == 0
    }
}
