// --- File: crates/wellbook_booking/src/handlers.rs ---
use crate::logic::{
    create_booking, list_booked_slots, BookedSlotsResponse, BookingConfirmation, BookingError,
    BookingRequest, ErrorResponse, SlotQueryRequest,
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::error;
use wellbook_common::services::{BoxedError, MeetingService, NotificationService, SlotStore};

/// Caller-visible message for any post-validation booking failure.
const BOOKING_FAILED: &str = "Zoom meeting creation failed";
/// Caller-visible message for a slot query store failure.
const SLOT_QUERY_FAILED: &str = "Internal server error";
/// Caller-visible message for a slot query without a date.
const DATE_REQUIRED: &str = "Date is required";

/// Injected services shared by the booking handlers.
#[derive(Clone)]
pub struct BookingState {
    pub meeting_service: Arc<dyn MeetingService<Error = BoxedError>>,
    pub notification_service: Arc<dyn NotificationService<Error = BoxedError>>,
    pub slot_store: Arc<dyn SlotStore<Error = BoxedError>>,
}

/// POST /create-meeting
///
/// Validates the request, provisions the meeting, emails the confirmation,
/// and records the slot. Validation failures come back as a 400 with the
/// failing check's message; anything later collapses to a single 500.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/create-meeting",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking confirmed, meeting link returned", body = BookingConfirmation),
        (status = 400, description = "A validation check failed", body = ErrorResponse),
        (status = 500, description = "Meeting, email, or persistence failed", body = ErrorResponse)
    ),
    tag = "Bookings"
))]
pub async fn create_meeting_handler(
    State(state): State<Arc<BookingState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<Json<BookingConfirmation>, (StatusCode, Json<ErrorResponse>)> {
    match create_booking(
        state.meeting_service.as_ref(),
        state.notification_service.as_ref(),
        state.slot_store.as_ref(),
        &payload,
    )
    .await
    {
        Ok(confirmation) => Ok(Json(confirmation)),
        Err(BookingError::Validation(err)) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )),
        Err(err) => {
            // Stage detail stays in the log; callers get one fixed message.
            error!("[Booking Handler] {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: BOOKING_FAILED.to_string(),
                }),
            ))
        }
    }
}

/// POST /get-booked-slots
///
/// Returns the times already booked on the requested date.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/get-booked-slots",
    request_body = SlotQueryRequest,
    responses(
        (status = 200, description = "Times already booked on the date", body = BookedSlotsResponse),
        (status = 400, description = "Date absent or empty", body = ErrorResponse),
        (status = 500, description = "Slot store failed", body = ErrorResponse)
    ),
    tag = "Bookings"
))]
pub async fn get_booked_slots_handler(
    State(state): State<Arc<BookingState>>,
    Json(payload): Json<SlotQueryRequest>,
) -> Result<Json<BookedSlotsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let date = match payload.date.as_deref() {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: DATE_REQUIRED.to_string(),
                }),
            ));
        }
    };

    match list_booked_slots(state.slot_store.as_ref(), &date).await {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            error!("[Booking Handler] Slot query for {} failed: {}", date, err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: SLOT_QUERY_FAILED.to_string(),
                }),
            ))
        }
    }
}
