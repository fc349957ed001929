// --- File: crates/wellbook_booking/src/validation.rs ---
//! Field checks for incoming booking requests.
//!
//! Checks run in a fixed order and stop at the first failure, so a request
//! with several problems always reports the same one. The error messages
//! are the caller-visible contract of the booking route.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::logic::BookingRequest;

/// Accepted address syntax for patient, doctor, and company emails.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex must compile")
});

/// Date format accepted for `appointmentDate`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The first check a booking request failed.
///
/// The `Display` output of each variant is returned verbatim to the caller.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Patient name missing")]
    PatientNameMissing,
    #[error("Patient email missing")]
    PatientEmailMissing,
    #[error("Doctor name missing")]
    DoctorNameMissing,
    #[error("Doctor email missing")]
    DoctorEmailMissing,
    #[error("Company email missing")]
    CompanyEmailMissing,
    #[error("Appointment date missing")]
    AppointmentDateMissing,
    #[error("Appointment time missing")]
    AppointmentTimeMissing,
    #[error("Session type missing")]
    SessionTypeMissing,
    #[error("Transaction ID missing")]
    TransactionIdMissing,
    #[error("Transaction ID must be numeric")]
    TransactionIdNotNumeric,
    #[error("Invalid patient email")]
    InvalidPatientEmail,
    #[error("Invalid doctor email")]
    InvalidDoctorEmail,
    #[error("Invalid company email")]
    InvalidCompanyEmail,
    #[error("Invalid appointment date")]
    InvalidAppointmentDate,
    #[error("Invalid appointment time")]
    InvalidAppointmentTime,
}

/// A booking request that passed every check.
///
/// String fields keep the caller's original values; the date and time also
/// carry their parsed forms for start time computation.
#[derive(Debug, Clone)]
pub struct ValidatedBooking {
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: Option<String>,
    pub doctor_name: String,
    pub doctor_email: String,
    pub company_email: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub parsed_date: NaiveDate,
    pub parsed_time: NaiveTime,
    pub session_type: String,
    pub therapy_type: Option<String>,
    pub message: Option<String>,
    pub transaction_id: String,
}

/// Require a field to be supplied and non-empty.
fn require<'a>(
    value: &'a Option<String>,
    missing: ValidationError,
) -> Result<&'a str, ValidationError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing),
    }
}

/// Validate a booking request, returning the first failing check.
///
/// # Arguments
/// * `request` - The deserialized request body, all fields optional.
///
/// # Returns
/// A `ValidatedBooking` ready for scheduling, or the `ValidationError`
/// whose message the handler sends back with a 400.
pub fn validate(request: &BookingRequest) -> Result<ValidatedBooking, ValidationError> {
    let patient_name = require(&request.patient_name, ValidationError::PatientNameMissing)?;
    let patient_email = require(&request.patient_email, ValidationError::PatientEmailMissing)?;
    let doctor_name = require(&request.doctor_name, ValidationError::DoctorNameMissing)?;
    let doctor_email = require(&request.doctor_email, ValidationError::DoctorEmailMissing)?;
    let company_email = require(&request.company_email, ValidationError::CompanyEmailMissing)?;
    let appointment_date = require(
        &request.appointment_date,
        ValidationError::AppointmentDateMissing,
    )?;
    let appointment_time = require(
        &request.appointment_time,
        ValidationError::AppointmentTimeMissing,
    )?;

    // Session type is the one field where whitespace-only counts as missing.
    let session_type = match request.session_type.as_deref() {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(ValidationError::SessionTypeMissing),
    };

    let transaction_id = require(&request.transaction_id, ValidationError::TransactionIdMissing)?;
    if !transaction_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::TransactionIdNotNumeric);
    }

    if !EMAIL_REGEX.is_match(patient_email) {
        return Err(ValidationError::InvalidPatientEmail);
    }
    if !EMAIL_REGEX.is_match(doctor_email) {
        return Err(ValidationError::InvalidDoctorEmail);
    }
    if !EMAIL_REGEX.is_match(company_email) {
        return Err(ValidationError::InvalidCompanyEmail);
    }

    let parsed_date = NaiveDate::parse_from_str(appointment_date, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidAppointmentDate)?;
    let parsed_time = parse_clock_time(appointment_time)?;

    Ok(ValidatedBooking {
        patient_name: patient_name.to_string(),
        patient_email: patient_email.to_string(),
        patient_phone: request.patient_phone.clone(),
        doctor_name: doctor_name.to_string(),
        doctor_email: doctor_email.to_string(),
        company_email: company_email.to_string(),
        appointment_date: appointment_date.to_string(),
        appointment_time: appointment_time.to_string(),
        parsed_date,
        parsed_time,
        session_type: session_type.to_string(),
        therapy_type: request.therapy_type.clone(),
        message: request.message.clone(),
        transaction_id: transaction_id.to_string(),
    })
}

/// Accept clock times with or without seconds.
fn parse_clock_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidAppointmentTime)
}
