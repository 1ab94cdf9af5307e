//! Use-case services composed from the stores.
//!
//! # Responsibility
//! - Orchestrate multi-store flows (booking, cancellation).
//! - Leave single-store semantics to the stores themselves.

pub mod booking_service;
