//! Repository modules for database access
//!
//! This module contains repository traits and implementations for the
//! entities the booking flow stores.

pub mod booked_slot;
pub mod booked_slot_sql;

// Re-export the booked slot repository for ease of use
pub use booked_slot::BookedSlotRepository;
pub use booked_slot_sql::SqlBookedSlotRepository;
