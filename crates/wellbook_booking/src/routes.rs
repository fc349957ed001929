// --- File: crates/wellbook_booking/src/routes.rs ---
use crate::handlers::{create_meeting_handler, get_booked_slots_handler, BookingState};
use axum::{routing::post, Router};
use std::sync::Arc;
use wellbook_common::services::{BoxedError, MeetingService, NotificationService, SlotStore};

/// Build the booking router around the injected services.
///
/// # Arguments
/// * `meeting_service` - Provisions video meetings.
/// * `notification_service` - Delivers confirmation emails.
/// * `slot_store` - Persists and lists booked slots.
///
/// # Returns
/// A router exposing POST /create-meeting and POST /get-booked-slots.
pub fn routes(
    meeting_service: Arc<dyn MeetingService<Error = BoxedError>>,
    notification_service: Arc<dyn NotificationService<Error = BoxedError>>,
    slot_store: Arc<dyn SlotStore<Error = BoxedError>>,
) -> Router {
    let booking_state = Arc::new(BookingState {
        meeting_service,
        notification_service,
        slot_store,
    });

    Router::new()
        .route("/create-meeting", post(create_meeting_handler))
        .route("/get-booked-slots", post(get_booked_slots_handler))
        .with_state(booking_state)
}
