//! Record types persisted by the stores.
//!
//! # Responsibility
//! - Define the field schema of every persisted entity.
//! - Define partial-update shapes for entities that support `modify`.
//!
//! # Invariants
//! - Serialized keys are exactly the struct field names; unknown keys are
//!   rejected on read.
//! - Identifiers are caller-supplied and never generated or de-duplicated here.

pub mod customer;
pub mod hotel;
pub mod reservation;

/// A record that lives in a collection file and is addressed by identifier.
pub trait Record {
    /// Identifier type compared during lookups.
    type Id: Copy + PartialEq;

    /// Returns the identifier used by lookup, modify and delete.
    fn id(&self) -> Self::Id;
}
