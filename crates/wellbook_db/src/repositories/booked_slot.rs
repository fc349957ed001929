//! Repository for booked appointment slots
//!
//! This module provides the interface for storing and retrieving the date and
//! time of confirmed appointments.

use crate::error::DbError;

/// Repository for booked appointment slots
///
/// This trait defines the interface for recording confirmed appointments and
/// listing the times already taken on a date.
pub trait BookedSlotRepository {
    /// Initialize the database schema
    ///
    /// Creates the booked_slots table if it does not already exist.
    fn init_schema(&self) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Record a confirmed appointment slot
    ///
    /// Every confirmation inserts one row; repeated date and time pairs are
    /// kept as separate rows.
    fn insert_slot(
        &self,
        appointment_date: &str,
        appointment_time: &str,
    ) -> impl std::future::Future<Output = Result<(), DbError>> + Send;

    /// Find the times already booked on a date
    ///
    /// Returns the stored appointment_time values in insertion order.
    fn find_times_by_date(
        &self,
        appointment_date: &str,
    ) -> impl std::future::Future<Output = Result<Vec<String>, DbError>> + Send;
}
