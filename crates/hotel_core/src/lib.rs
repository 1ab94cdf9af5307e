//! Core record stores for customers, hotels and reservations.
//! Each collection lives in its own JSON file and is re-read on every call.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::DataPaths;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::customer::{Customer, CustomerId, CustomerPatch};
pub use model::hotel::{Hotel, HotelId, HotelPatch};
pub use model::reservation::{Reservation, ReservationId};
pub use model::Record;
pub use service::booking_service::{BookingError, BookingService};
pub use store::collection::JsonCollection;
pub use store::customer_store::CustomerStore;
pub use store::hotel_store::HotelStore;
pub use store::reservation_store::ReservationStore;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
