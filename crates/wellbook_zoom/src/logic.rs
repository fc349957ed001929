// --- File: crates/wellbook_zoom/src/logic.rs ---
use chrono::{NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing::info;
use wellbook_config::ZoomConfig;

use wellbook_common::services::{MeetingRequest, ScheduledMeeting};

// Import the HTTP client from wellbook_common
use wellbook_common::HTTP_CLIENT;

/// Endpoint for the server-to-server OAuth token grant.
const ZOOM_TOKEN_URL: &str = "https://zoom.us/oauth/token";
/// Endpoint for creating a meeting for the account owner.
const ZOOM_CREATE_MEETING_URL: &str = "https://api.zoom.us/v2/users/me/meetings";
/// Zoom meeting type for a scheduled (non-recurring) meeting.
const SCHEDULED_MEETING_TYPE: u8 = 2;
/// Time zone used for appointments when none is configured.
const DEFAULT_TIME_ZONE: &str = "Asia/Kolkata";

/// Zoom-specific error types.
#[derive(Error, Debug)]
pub enum ZoomError {
    /// Error occurred during a Zoom API request
    #[error("Zoom API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Zoom API
    #[error("Zoom API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Zoom API response
    #[error("Failed to parse Zoom API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Zoom configuration
    #[error("Zoom configuration missing or incomplete")]
    ConfigError,

    /// The appointment does not map to a real instant in the configured time zone
    #[error("Invalid meeting start time: {0}")]
    InvalidStartTime(String),
}

// --- Data Structures ---

#[derive(Deserialize, Debug)]
struct ZoomTokenResponse {
    access_token: String,
}

/// Request body for the Zoom create meeting API.
#[derive(Serialize, Debug)]
pub struct ZoomMeetingPayload {
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: u8,
    pub start_time: String,
    pub duration: i64,
    pub timezone: String,
}

/// The fields we use from the Zoom create meeting response.
#[derive(Deserialize, Debug)]
pub struct ZoomMeetingResponse {
    #[allow(dead_code)]
    pub id: Option<i64>,
    pub join_url: String,
    pub start_time: Option<String>,
}

// --- Core Logic Functions ---

/// Fetch a server-to-server OAuth access token for the configured Zoom account.
///
/// The client secret is read from the `ZOOM_CLIENT_SECRET` environment variable
/// so it never lives in configuration files.
pub async fn get_access_token(config: &ZoomConfig) -> Result<String, ZoomError> {
    let client_secret = env::var("ZOOM_CLIENT_SECRET").map_err(|_| ZoomError::ConfigError)?;

    let token_url = format!(
        "{}?grant_type=account_credentials&account_id={}",
        ZOOM_TOKEN_URL, config.account_id
    );

    let response = HTTP_CLIENT
        .post(&token_url)
        .basic_auth(&config.client_id, Some(&client_secret))
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    if status.is_success() {
        let token_response: ZoomTokenResponse = serde_json::from_str(&body_text)?;
        Ok(token_response.access_token)
    } else {
        let error_message = extract_error_message(&body_text);
        info!(
            "[Zoom Logic] Token request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        Err(ZoomError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}

/// Convert a validated local date and time into the RFC 3339 UTC instant Zoom expects.
pub fn compute_start_time(
    config: &ZoomConfig,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<String, ZoomError> {
    let zone_name = config.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE);
    let zone: Tz = zone_name
        .parse()
        .map_err(|_| ZoomError::InvalidStartTime(format!("Unknown time zone: {}", zone_name)))?;

    let local = date.and_time(time);
    // single() rejects wall clock readings that are skipped or repeated by DST transitions
    let zoned = zone.from_local_datetime(&local).single().ok_or_else(|| {
        ZoomError::InvalidStartTime(format!(
            "{} is not an unambiguous instant in {}",
            local, zone_name
        ))
    })?;

    Ok(zoned
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Build the create meeting request body for an appointment.
pub fn build_meeting_payload(
    config: &ZoomConfig,
    request: &MeetingRequest,
) -> Result<ZoomMeetingPayload, ZoomError> {
    let start_time = compute_start_time(config, request.date, request.time)?;
    let zone_name = config.time_zone.as_deref().unwrap_or(DEFAULT_TIME_ZONE);

    Ok(ZoomMeetingPayload {
        topic: request.topic.clone(),
        meeting_type: SCHEDULED_MEETING_TYPE,
        start_time,
        duration: request.duration_minutes,
        timezone: zone_name.to_string(),
    })
}

/// Create a Zoom meeting and return the fields we care about.
pub async fn create_meeting(
    access_token: &str,
    payload: &ZoomMeetingPayload,
) -> Result<ZoomMeetingResponse, ZoomError> {
    info!(
        "[Zoom Logic] Sending request to Zoom API: {}",
        ZOOM_CREATE_MEETING_URL
    );

    let response = HTTP_CLIENT
        .post(ZOOM_CREATE_MEETING_URL)
        .bearer_auth(access_token)
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Zoom Logic] Zoom API response status: {}", status);

    if status.is_success() {
        let meeting: ZoomMeetingResponse = serde_json::from_str(&body_text)?;
        info!(
            "[Zoom Logic] Zoom meeting created successfully. Join URL: {}",
            meeting.join_url
        );
        Ok(meeting)
    } else {
        let error_message = extract_error_message(&body_text);
        info!(
            "[Zoom Logic] Zoom API request failed with HTTP status: {}. Message: {}",
            status, error_message
        );
        Err(ZoomError::ApiError {
            status_code: status.as_u16(),
            message: error_message,
        })
    }
}

/// Schedule a meeting for a confirmed appointment.
///
/// Fetches a fresh access token, builds the meeting payload, and calls the
/// Zoom create meeting endpoint.
pub async fn schedule_meeting(
    config: &ZoomConfig,
    request: &MeetingRequest,
) -> Result<ScheduledMeeting, ZoomError> {
    let payload = build_meeting_payload(config, request)?;
    let access_token = get_access_token(config).await?;
    let meeting = create_meeting(&access_token, &payload).await?;

    Ok(ScheduledMeeting {
        join_url: meeting.join_url,
        start_time: meeting.start_time,
    })
}

/// Pull a human readable message out of a Zoom error body, falling back to the raw text.
///
/// The meetings API reports errors as `{"code": ..., "message": ...}` while the
/// OAuth endpoint uses `{"error": ..., "reason": ...}`.
pub(crate) fn extract_error_message(body_text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json_body) => json_body
            .get("message")
            .or_else(|| json_body.get("reason"))
            .and_then(|m| m.as_str())
            .unwrap_or(body_text)
            .to_string(),
        Err(_) => body_text.to_string(),
    }
}
