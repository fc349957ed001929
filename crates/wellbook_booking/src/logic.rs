// --- File: crates/wellbook_booking/src/logic.rs ---
//! Booking pipeline: validate, schedule the meeting, send the confirmation
//! email, record the slot.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use wellbook_common::services::{
    BoxedError, MeetingRequest, MeetingService, NotificationService, SlotStore,
};
use wellbook_mailer::template::{render_confirmation, ConfirmationDetails};

use crate::validation::{validate, ValidationError};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Every meeting is scheduled for the same fixed length.
const MEETING_DURATION_MINUTES: i64 = 45;

// --- Data Structures ---

/// Request body for the booking route. Every field is optional so that
/// missing values surface as validation messages instead of rejected JSON.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Asha Rao"))]
    pub patient_name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "asha@example.com"))]
    pub patient_email: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "+91 98765 43210"))]
    pub patient_phone: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Dr. Mehta"))]
    pub doctor_name: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "mehta@clinic.example"))]
    pub doctor_email: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "care@wellbook.example"))]
    pub company_email: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-05"))]
    pub appointment_date: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub appointment_time: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Online"))]
    pub session_type: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Physiotherapy"))]
    pub therapy_type: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "Knee pain after running"))]
    pub message: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "482915"))]
    pub transaction_id: Option<String>,
}

/// Response body for a confirmed booking.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingConfirmation {
    #[cfg_attr(feature = "openapi", schema(example = true))]
    pub success: bool,
    #[cfg_attr(feature = "openapi", schema(example = "https://zoom.us/j/123456789"))]
    pub meeting_link: String,
}

/// Request body for the booked slots route.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct SlotQueryRequest {
    #[cfg_attr(feature = "openapi", schema(example = "2025-05-05"))]
    pub date: Option<String>,
}

/// Times already booked on the queried date, in insertion order.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookedSlotsResponse {
    pub booked_slots: Vec<String>,
}

/// Error payload shared by both routes.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ErrorResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Patient name missing"))]
    pub error: String,
}

// --- Error Type ---

/// Errors from the booking pipeline, tagged by the stage that failed.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Meeting provisioning failed: {0}")]
    Provisioning(BoxedError),
    #[error("Confirmation email failed: {0}")]
    Notification(BoxedError),
    #[error("Slot persistence failed: {0}")]
    Store(BoxedError),
}

// --- Core Logic Functions ---

/// Run the whole booking pipeline for one request.
///
/// Validation failures stop the pipeline before any service is called.
/// After that the stages run strictly in order: schedule the meeting,
/// email the confirmation to patient, doctor, and company, then record
/// the slot. A failing stage stops the stages after it.
///
/// # Arguments
/// * `meeting_service` - Provisions the video meeting.
/// * `notification_service` - Delivers the confirmation email.
/// * `slot_store` - Records the booked date and time.
/// * `request` - The deserialized request body.
pub async fn create_booking(
    meeting_service: &dyn MeetingService<Error = BoxedError>,
    notification_service: &dyn NotificationService<Error = BoxedError>,
    slot_store: &dyn SlotStore<Error = BoxedError>,
    request: &BookingRequest,
) -> Result<BookingConfirmation, BookingError> {
    let booking = validate(request)?;

    let therapy_type = booking.therapy_type.as_deref().unwrap_or("");

    let meeting = meeting_service
        .schedule_meeting(MeetingRequest {
            topic: format!("{} Consultation", therapy_type),
            date: booking.parsed_date,
            time: booking.parsed_time,
            duration_minutes: MEETING_DURATION_MINUTES,
        })
        .await
        .map_err(BookingError::Provisioning)?;

    info!(
        "[Booking Logic] Meeting scheduled for {} {}: {}",
        booking.appointment_date, booking.appointment_time, meeting.join_url
    );

    let rendered = render_confirmation(&ConfirmationDetails {
        patient_name: &booking.patient_name,
        patient_email: &booking.patient_email,
        patient_phone: booking.patient_phone.as_deref(),
        therapy_type,
        doctor_name: &booking.doctor_name,
        session_type: &booking.session_type,
        appointment_date: &booking.appointment_date,
        appointment_time: &booking.appointment_time,
        transaction_id: &booking.transaction_id,
        message: booking.message.as_deref(),
        meeting_link: &meeting.join_url,
    });

    let recipients = [
        booking.patient_email.clone(),
        booking.doctor_email.clone(),
        booking.company_email.clone(),
    ];

    notification_service
        .send_email(&recipients, &rendered.subject, &rendered.html, true)
        .await
        .map_err(BookingError::Notification)?;

    slot_store
        .record_booking(&booking.appointment_date, &booking.appointment_time)
        .await
        .map_err(BookingError::Store)?;

    info!(
        "[Booking Logic] Slot recorded for {} {}",
        booking.appointment_date, booking.appointment_time
    );

    Ok(BookingConfirmation {
        success: true,
        meeting_link: meeting.join_url,
    })
}

/// Fetch the times already booked on a date.
pub async fn list_booked_slots(
    slot_store: &dyn SlotStore<Error = BoxedError>,
    date: &str,
) -> Result<BookedSlotsResponse, BookingError> {
    let booked_slots = slot_store
        .list_booked_times(date)
        .await
        .map_err(BookingError::Store)?;

    Ok(BookedSlotsResponse { booked_slots })
}
