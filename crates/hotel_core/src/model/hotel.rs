//! Hotel record, its partial update and room-count helpers.
//!
//! # Invariants
//! - `rooms` is never negative; `take_room` refuses to go below zero.
//! - `release_room` has no upper bound.

use super::Record;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Caller-supplied hotel identifier.
pub type HotelId = u64;

/// Persisted hotel record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub name: String,
    pub location: String,
    /// Rooms currently available for reservation.
    pub rooms: u32,
}

impl Hotel {
    pub fn new(
        hotel_id: HotelId,
        name: impl Into<String>,
        location: impl Into<String>,
        rooms: u32,
    ) -> Self {
        Self {
            hotel_id,
            name: name.into(),
            location: location.into(),
            rooms,
        }
    }

    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: &HotelPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(location) = &patch.location {
            self.location.clone_from(location);
        }
        if let Some(rooms) = patch.rooms {
            self.rooms = rooms;
        }
    }

    /// Decrements the available count.
    ///
    /// Returns `false` and leaves the count untouched when no room is left.
    pub fn take_room(&mut self) -> bool {
        if self.rooms == 0 {
            return false;
        }
        self.rooms -= 1;
        true
    }

    /// Increments the available count with no capacity check.
    ///
    /// Saturates at `u32::MAX`: at that count the increment is skipped.
    pub fn release_room(&mut self) {
        self.rooms = self.rooms.saturating_add(1);
    }
}

impl Record for Hotel {
    type Id = HotelId;

    fn id(&self) -> HotelId {
        self.hotel_id
    }
}

impl Display for Hotel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Location: {} | Rooms: {}",
            self.hotel_id, self.name, self.location, self.rooms
        )
    }
}

/// Partial update for [`Hotel`]; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rooms: Option<u32>,
}

impl HotelPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn rooms(mut self, rooms: u32) -> Self {
        self.rooms = Some(rooms);
        self
    }
}
