// --- File: crates/wellbook_booking/src/doc.rs ---
#![allow(dead_code)]
use utoipa::OpenApi;
// Import all relevant schemas from logic.rs
use crate::logic::{
    BookedSlotsResponse, BookingConfirmation, BookingRequest, ErrorResponse, SlotQueryRequest,
};

/// Documentation for the create_meeting_handler endpoint
/// Validates the booking, provisions a Zoom meeting, emails the confirmation
/// to patient, doctor, and company, and records the booked slot.
#[utoipa::path(
    post,
    path = "/create-meeting",
    request_body(content = BookingRequest, example = json!({
        "patientName": "Asha Rao",
        "patientEmail": "asha@example.com",
        "patientPhone": "+91 98765 43210",
        "doctorName": "Dr. Mehta",
        "doctorEmail": "mehta@clinic.example",
        "companyEmail": "care@wellbook.example",
        "appointmentDate": "2025-05-05",
        "appointmentTime": "10:00",
        "sessionType": "Online",
        "therapyType": "Physiotherapy",
        "message": "Knee pain after running",
        "transactionId": "482915"
    })),
    responses(
        (status = 200, description = "Booking confirmed, meeting link returned", body = BookingConfirmation),
        (status = 400, description = "A validation check failed", body = ErrorResponse),
        (status = 500, description = "Meeting, email, or persistence failed", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
fn doc_create_meeting_handler() {}

/// Documentation for the get_booked_slots_handler endpoint
/// Lists the times already booked on a date so the frontend can grey
/// them out in its slot picker.
#[utoipa::path(
    post,
    path = "/get-booked-slots",
    request_body(content = SlotQueryRequest, example = json!({
        "date": "2025-05-05"
    })),
    responses(
        (status = 200, description = "Times already booked on the date", body = BookedSlotsResponse),
        (status = 400, description = "Date absent or empty", body = ErrorResponse),
        (status = 500, description = "Slot store failed", body = ErrorResponse)
    ),
    tag = "Bookings"
)]
fn doc_get_booked_slots_handler() {}

/// OpenAPI documentation for the Bookings API
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_meeting_handler,
        doc_get_booked_slots_handler
    ),
    components(
        schemas(
            BookingRequest,
            BookingConfirmation,
            SlotQueryRequest,
            BookedSlotsResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Bookings", description = "API for booking appointments and listing booked slots")
    )
)]
pub struct BookingApiDoc;
