//! First-fit slot allocator.
//!
//! # Algorithm
//!
//! 1. Iterate days in configured order.
//! 2. Within a day, iterate slots in configured (chronological) order,
//!    skipping break slots.
//! 3. Pick the first room in catalog order with the requested type,
//!    enough seats, and no session at that (day, slot).
//! 4. If a room was found and the faculty (if any) is available, commit
//!    both and return. Otherwise move on to the next slot.
//!
//! No alternatives are compared and earlier commitments are never undone,
//! so results are reproducible for a given input order.
//!
//! # Complexity
//! O(d * s * r) per unit: days × slots × rooms.

use tracing::debug;

use super::OccupancyTracker;
use crate::config::TimetableConfig;
use crate::models::{Day, Faculty, Room, RoomType, TimeSlot};

/// Requirements of one session unit.
#[derive(Debug, Clone, Copy)]
pub struct SlotRequest<'a> {
    /// Room type the session needs.
    pub room_type: &'a RoomType,
    /// Seats the room must offer.
    pub required_capacity: u32,
    /// Teaching faculty; `None` skips faculty checks.
    pub faculty: Option<&'a Faculty>,
}

impl<'a> SlotRequest<'a> {
    /// Creates a request without a faculty constraint.
    pub fn new(room_type: &'a RoomType, required_capacity: u32) -> Self {
        Self {
            room_type,
            required_capacity,
            faculty: None,
        }
    }

    /// Adds the teaching faculty.
    pub fn with_faculty(mut self, faculty: Option<&'a Faculty>) -> Self {
        self.faculty = faculty;
        self
    }
}

/// A committed (day, slot, room) combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub day: Day,
    pub slot: TimeSlot,
    pub room_id: String,
}

/// Searches the day × slot × room space for the first feasible placement.
#[derive(Debug, Clone, Copy)]
pub struct SlotAllocator<'a> {
    config: &'a TimetableConfig,
    rooms: &'a [Room],
}

impl<'a> SlotAllocator<'a> {
    /// Creates an allocator over a room catalog.
    pub fn new(config: &'a TimetableConfig, rooms: &'a [Room]) -> Self {
        Self { config, rooms }
    }

    /// Finds and commits the first feasible placement for `request`.
    ///
    /// Returns `None` when the whole search space is exhausted; nothing is
    /// committed in that case.
    pub fn find_slot(
        &self,
        tracker: &mut OccupancyTracker,
        request: &SlotRequest<'_>,
    ) -> Option<Placement> {
        for &day in &self.config.days {
            for slot in &self.config.time_slots {
                if tracker.breaks().is_break(slot) {
                    continue;
                }

                let Some(room) = self.first_free_room(tracker, request, day, slot) else {
                    continue;
                };

                if let Some(faculty) = request.faculty {
                    if !tracker.faculty_available(faculty, day, slot) {
                        continue;
                    }
                }

                let faculty_id = request.faculty.map(|f| f.name.as_str());
                tracker.commit(&room.id, faculty_id, day, *slot);
                debug!(
                    room = %room.id,
                    faculty = faculty_id.unwrap_or("-"),
                    %day,
                    %slot,
                    "committed placement"
                );
                return Some(Placement {
                    day,
                    slot: *slot,
                    room_id: room.id.clone(),
                });
            }
        }
        None
    }

    /// First room in catalog order that fits the request and is free.
    fn first_free_room(
        &self,
        tracker: &OccupancyTracker,
        request: &SlotRequest<'_>,
        day: Day,
        slot: &TimeSlot,
    ) -> Option<&'a Room> {
        self.rooms.iter().find(|room| {
            room.fits(request.room_type, request.required_capacity)
                && tracker.room_available(&room.id, day, slot)
        })
    }
}
