//! Hotel collection store and room availability updates.
//!
//! # Invariants
//! - `reserve_room` never persists a count below zero.
//! - Room updates go through `modify`, touching only `rooms` of the first
//!   hotel with the same id.

use super::collection::JsonCollection;
use super::StoreResult;
use crate::model::hotel::{Hotel, HotelId, HotelPatch};
use log::{info, warn};
use std::path::{Path, PathBuf};

const MODULE: &str = "hotel_store";

/// Store over one hotel collection file.
#[derive(Debug, Clone)]
pub struct HotelStore {
    collection: JsonCollection<Hotel>,
}

impl HotelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path, MODULE),
        }
    }

    pub fn path(&self) -> &Path {
        self.collection.path()
    }

    /// Appends `hotel` to the collection and returns it.
    pub fn create(&self, hotel: Hotel) -> StoreResult<Hotel> {
        let created = self.collection.append(hotel)?;
        info!(
            "event=hotel_create module={MODULE} status=ok hotel_id={} rooms={}",
            created.hotel_id, created.rooms
        );
        Ok(created)
    }

    /// Removes every hotel with `hotel_id`; returns the removed count.
    pub fn delete(&self, hotel_id: HotelId) -> StoreResult<usize> {
        self.collection.remove_all(hotel_id)
    }

    /// Returns the first hotel with `hotel_id` and logs its description.
    pub fn display(&self, hotel_id: HotelId) -> Option<Hotel> {
        let found = self.collection.find(hotel_id);
        match &found {
            Some(hotel) => info!("event=hotel_display module={MODULE} status=found {hotel}"),
            None => {
                info!("event=hotel_display module={MODULE} status=not_found hotel_id={hotel_id}")
            }
        }
        found
    }

    /// Quiet lookup of the first hotel with `hotel_id`.
    pub fn find(&self, hotel_id: HotelId) -> Option<Hotel> {
        self.collection.find(hotel_id)
    }

    /// Applies `patch` to the first hotel with `hotel_id`.
    ///
    /// The file is rewritten even when nothing matched. Returns whether a
    /// hotel matched.
    pub fn modify(&self, hotel_id: HotelId, patch: &HotelPatch) -> StoreResult<bool> {
        self.collection
            .update_first(hotel_id, |hotel| hotel.apply(patch))
    }

    /// Takes one room from `hotel` and persists the new count.
    ///
    /// Returns `Ok(false)` without touching `hotel` or the file when no room
    /// is available. The caller's `hotel` is the source of the new count, not
    /// the stored record. When the write fails the room is given back to
    /// `hotel` before the error is returned.
    pub fn reserve_room(&self, hotel: &mut Hotel) -> StoreResult<bool> {
        if !hotel.take_room() {
            warn!(
                "event=room_reserve module={MODULE} status=unavailable hotel_id={}",
                hotel.hotel_id
            );
            return Ok(false);
        }

        let patch = HotelPatch::default().rooms(hotel.rooms);
        if let Err(err) = self.modify(hotel.hotel_id, &patch) {
            hotel.release_room();
            return Err(err);
        }
        info!(
            "event=room_reserve module={MODULE} status=ok hotel_id={} rooms={}",
            hotel.hotel_id, hotel.rooms
        );
        Ok(true)
    }

    /// Returns one room to `hotel` and persists the new count.
    pub fn cancel_reservation(&self, hotel: &mut Hotel) -> StoreResult<()> {
        hotel.release_room();
        self.modify(hotel.hotel_id, &HotelPatch::default().rooms(hotel.rooms))?;
        info!(
            "event=room_release module={MODULE} status=ok hotel_id={} rooms={}",
            hotel.hotel_id, hotel.rooms
        );
        Ok(())
    }

    pub fn load(&self) -> Vec<Hotel> {
        self.collection.load()
    }

    pub fn try_load(&self) -> StoreResult<Vec<Hotel>> {
        self.collection.try_load()
    }

    pub fn save(&self, hotels: &[Hotel]) -> StoreResult<()> {
        self.collection.save(hotels)
    }
}
