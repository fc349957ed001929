// --- File: crates/wellbook_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for the external services used by the
//! application. These traits allow for dependency injection and easier testing by
//! decoupling the booking logic from specific implementations of external services.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for video meeting service operations.
///
/// This trait defines the operations that can be performed on a meeting provider,
/// such as scheduling a meeting for a confirmed appointment.
pub trait MeetingService: Send + Sync {
    /// Error type returned by meeting service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Schedule a meeting and return its join link.
    fn schedule_meeting(
        &self,
        request: MeetingRequest,
    ) -> BoxFuture<'_, ScheduledMeeting, Self::Error>;
}

/// A trait for notification service operations.
///
/// This trait defines the operations that can be performed on a notification service,
/// such as sending emails.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send an email notification to one or more recipients.
    fn send_email(
        &self,
        to: &[String],
        subject: &str,
        body: &str,
        is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// A trait for booked slot storage operations.
///
/// This trait defines the operations that can be performed on the slot store,
/// such as recording a booking and listing the times already taken on a date.
pub trait SlotStore: Send + Sync {
    /// Error type returned by slot store operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Record a booked slot for a date and time.
    fn record_booking(
        &self,
        appointment_date: &str,
        appointment_time: &str,
    ) -> BoxFuture<'_, (), Self::Error>;

    /// List the times already booked on a given date.
    fn list_booked_times(&self, appointment_date: &str)
        -> BoxFuture<'_, Vec<String>, Self::Error>;
}

/// A factory for creating service instances.
///
/// This trait provides methods for getting instances of the services the
/// booking flow depends on.
pub trait ServiceFactory: Send + Sync {
    /// Get a meeting service instance.
    fn meeting_service(&self) -> Arc<dyn MeetingService<Error = BoxedError>>;

    /// Get a notification service instance.
    fn notification_service(&self) -> Arc<dyn NotificationService<Error = BoxedError>>;

    /// Get a slot store instance.
    fn slot_store(&self) -> Arc<dyn SlotStore<Error = BoxedError>>;
}

/// Data structures for meeting service operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRequest {
    /// The topic or title of the meeting.
    pub topic: String,
    /// The local calendar date of the appointment.
    pub date: NaiveDate,
    /// The local wall-clock time of the appointment.
    pub time: NaiveTime,
    /// How long the meeting should last, in minutes.
    pub duration_minutes: i64,
}

/// Represents a successfully scheduled meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledMeeting {
    /// The URL participants use to join the meeting.
    pub join_url: String,
    /// The scheduled start time as reported by the provider.
    pub start_time: Option<String>,
}

/// Data structures for notification service operations.
/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// The ID of the notification, if the transport reports one.
    pub id: Option<String>,
    /// The status of the notification.
    pub status: String,
}
