//! Booking use-case service.
//!
//! # Responsibility
//! - Pair a hotel room update with the matching reservation record.
//!
//! # Invariants
//! - A booking never takes a room from a hotel that has none left.
//! - If the reservation cannot be written after a room was taken, the room is
//!   released again (best effort; a second failure is logged).
//! - Customer ids are recorded as given and never looked up.
//!
//! Each step is its own full-file write; there is no cross-file transaction.

use crate::model::customer::CustomerId;
use crate::model::hotel::HotelId;
use crate::model::reservation::{Reservation, ReservationId};
use crate::store::hotel_store::HotelStore;
use crate::store::reservation_store::ReservationStore;
use crate::store::StoreError;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for booking use-cases.
#[derive(Debug)]
pub enum BookingError {
    /// No hotel with this id in the hotel collection.
    HotelNotFound(HotelId),
    /// The hotel has zero rooms available.
    NoRoomsAvailable(HotelId),
    /// No reservation with this id in the reservation collection.
    ReservationNotFound(ReservationId),
    /// Persistence-layer failure.
    Store(StoreError),
}

impl Display for BookingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HotelNotFound(id) => write!(f, "hotel not found: {id}"),
            Self::NoRoomsAvailable(id) => write!(f, "no rooms available in hotel {id}"),
            Self::ReservationNotFound(id) => write!(f, "reservation not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BookingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for BookingError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Books and cancels rooms across the hotel and reservation collections.
#[derive(Debug, Clone)]
pub struct BookingService {
    hotels: HotelStore,
    reservations: ReservationStore,
}

impl BookingService {
    pub fn new(hotels: HotelStore, reservations: ReservationStore) -> Self {
        Self {
            hotels,
            reservations,
        }
    }

    pub fn hotels(&self) -> &HotelStore {
        &self.hotels
    }

    pub fn reservations(&self) -> &ReservationStore {
        &self.reservations
    }

    /// Takes a room in `hotel_id` and records the reservation.
    ///
    /// # Errors
    /// - `HotelNotFound` when the hotel collection has no such hotel.
    /// - `NoRoomsAvailable` when the hotel is full; nothing is written.
    /// - `Store` when a collection file cannot be written.
    pub fn book(
        &self,
        reservation_id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
    ) -> Result<Reservation, BookingError> {
        let mut hotel = self
            .hotels
            .find(hotel_id)
            .ok_or(BookingError::HotelNotFound(hotel_id))?;

        if !self.hotels.reserve_room(&mut hotel)? {
            return Err(BookingError::NoRoomsAvailable(hotel_id));
        }

        let reservation = Reservation::new(reservation_id, customer_id, hotel_id);
        match self.reservations.create(reservation) {
            Ok(created) => {
                info!(
                    "event=booking_create module=booking_service status=ok reservation_id={reservation_id} hotel_id={hotel_id} rooms_left={}",
                    hotel.rooms
                );
                Ok(created)
            }
            Err(err) => {
                if let Err(rollback) = self.hotels.cancel_reservation(&mut hotel) {
                    error!(
                        "event=booking_rollback module=booking_service status=error hotel_id={hotel_id} error_code={} error={}",
                        rollback.code(),
                        rollback
                    );
                }
                Err(err.into())
            }
        }
    }

    /// Removes the reservation and returns its room to the hotel.
    ///
    /// When the referenced hotel no longer exists the reservation is still
    /// removed and no room is released.
    pub fn cancel_booking(
        &self,
        reservation_id: ReservationId,
    ) -> Result<Reservation, BookingError> {
        let reservation = self
            .reservations
            .find(reservation_id)
            .ok_or(BookingError::ReservationNotFound(reservation_id))?;

        self.reservations.cancel(reservation_id)?;

        match self.hotels.find(reservation.hotel_id) {
            Some(mut hotel) => self.hotels.cancel_reservation(&mut hotel)?,
            None => warn!(
                "event=booking_cancel module=booking_service status=dangling_hotel reservation_id={reservation_id} hotel_id={}",
                reservation.hotel_id
            ),
        }

        info!(
            "event=booking_cancel module=booking_service status=ok reservation_id={reservation_id}"
        );
        Ok(reservation)
    }
}
