//! Room model.
//!
//! Rooms are the spatial resource: each has a seating capacity and a type
//! tag that must match the session's requirement (lecture room vs lab).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room type tag.
///
/// Serialized as its tag string (`LECTURE_ROOM`, `COMPUTER_LAB`, or any
/// other tag verbatim).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    /// Classroom for lectures and tutorials.
    LectureRoom,
    /// Computer lab for practical sessions.
    ComputerLab,
    /// Any other tag (seminar hall, hardware lab, ...).
    Other(String),
}

impl RoomType {
    /// The tag string.
    pub fn tag(&self) -> &str {
        match self {
            RoomType::LectureRoom => "LECTURE_ROOM",
            RoomType::ComputerLab => "COMPUTER_LAB",
            RoomType::Other(tag) => tag,
        }
    }
}

impl From<String> for RoomType {
    fn from(tag: String) -> Self {
        match tag.trim() {
            "LECTURE_ROOM" => RoomType::LectureRoom,
            "COMPUTER_LAB" => RoomType::ComputerLab,
            other => RoomType::Other(other.to_string()),
        }
    }
}

impl From<&str> for RoomType {
    fn from(tag: &str) -> Self {
        RoomType::from(tag.to_string())
    }
}

impl From<RoomType> for String {
    fn from(room_type: RoomType) -> Self {
        room_type.tag().to_string()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A bookable room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Display number, e.g. "C-204".
    pub number: String,
    /// Seats.
    pub capacity: u32,
    pub room_type: RoomType,
}

impl Room {
    /// Creates a room; the display number defaults to the id.
    pub fn new(id: impl Into<String>, capacity: u32, room_type: RoomType) -> Self {
        let id = id.into();
        Self {
            number: id.clone(),
            id,
            capacity,
            room_type,
        }
    }

    /// A `LECTURE_ROOM`.
    pub fn lecture(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, capacity, RoomType::LectureRoom)
    }

    /// A `COMPUTER_LAB`.
    pub fn lab(id: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, capacity, RoomType::ComputerLab)
    }

    /// Sets the display number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Whether this room can host a session of `room_type` for `required` students.
    #[inline]
    pub fn fits(&self, room_type: &RoomType, required: u32) -> bool {
        self.room_type == *room_type && self.capacity >= required
    }
}
