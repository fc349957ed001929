#[cfg(test)]
mod tests {
    use crate::logic::{
        build_meeting_payload, compute_start_time, extract_error_message, ZoomError,
    };
    use chrono::{NaiveDate, NaiveTime};
    use wellbook_common::services::MeetingRequest;
    use wellbook_config::ZoomConfig;

    fn zoom_config(time_zone: Option<&str>) -> ZoomConfig {
        ZoomConfig {
            account_id: "acct_123".to_string(),
            client_id: "client_123".to_string(),
            time_zone: time_zone.map(|z| z.to_string()),
        }
    }

    #[test]
    fn test_compute_start_time_converts_default_zone_to_utc() {
        let config = zoom_config(None);
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();

        let start_time = compute_start_time(&config, date, time).unwrap();

        // 10:00 in Asia/Kolkata (UTC+5:30) is 04:30 UTC
        assert_eq!(start_time, "2025-05-05T04:30:00Z");
    }

    #[test]
    fn test_compute_start_time_respects_configured_zone() {
        let config = zoom_config(Some("Europe/Zurich"));
        let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap();

        let start_time = compute_start_time(&config, date, time).unwrap();

        // 09:00 CET is 08:00 UTC
        assert_eq!(start_time, "2025-01-15T08:00:00Z");
    }

    #[test]
    fn test_compute_start_time_rejects_nonexistent_wall_clock() {
        // Europe/Zurich springs forward on 2025-03-30, so 02:30 never happens
        let config = zoom_config(Some("Europe/Zurich"));
        let date = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let time = NaiveTime::from_hms_opt(2, 30, 0).unwrap();

        let result = compute_start_time(&config, date, time);

        assert!(matches!(result, Err(ZoomError::InvalidStartTime(_))));
    }

    #[test]
    fn test_compute_start_time_rejects_unknown_zone() {
        let config = zoom_config(Some("Mars/Olympus_Mons"));
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let time = NaiveTime::from_hms_opt(10, 0, 0).unwrap();

        let result = compute_start_time(&config, date, time);

        assert!(matches!(result, Err(ZoomError::InvalidStartTime(_))));
    }

    #[test]
    fn test_build_meeting_payload_matches_zoom_contract() {
        let config = zoom_config(None);
        let request = MeetingRequest {
            topic: "Physiotherapy Consultation".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 5, 5).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            duration_minutes: 45,
        };

        let payload = build_meeting_payload(&config, &request).unwrap();
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["topic"], "Physiotherapy Consultation");
        assert_eq!(json["type"], 2);
        assert_eq!(json["start_time"], "2025-05-05T04:30:00Z");
        assert_eq!(json["duration"], 45);
        assert_eq!(json["timezone"], "Asia/Kolkata");
    }

    #[test]
    fn test_extract_error_message_prefers_message_field() {
        let body = r#"{"code":124,"message":"Invalid access token."}"#;
        assert_eq!(extract_error_message(body), "Invalid access token.");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_reason() {
        let body = r#"{"reason":"Invalid client credentials","error":"invalid_client"}"#;
        assert_eq!(extract_error_message(body), "Invalid client credentials");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        let body = "upstream timeout";
        assert_eq!(extract_error_message(body), "upstream timeout");
    }
}
