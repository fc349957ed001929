// --- File: crates/wellbook_booking/src/routes_test.rs ---
#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::routes::routes;
    use wellbook_common::services::{
        BoxFuture, BoxedError, MeetingRequest, MeetingService, NotificationResult,
        NotificationService, ScheduledMeeting, SlotStore,
    };

    /// Shared record of service calls, in invocation order.
    #[derive(Default)]
    struct CallLog {
        calls: Mutex<Vec<String>>,
    }

    impl CallLog {
        fn record(&self, entry: String) {
            self.calls.lock().unwrap().push(entry);
        }

        fn entries(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn fake_failure(message: &str) -> BoxedError {
        BoxedError(Box::new(io::Error::new(io::ErrorKind::Other, message.to_string())))
    }

    struct FakeMeetingService {
        log: Arc<CallLog>,
        fail: bool,
    }

    impl MeetingService for FakeMeetingService {
        type Error = BoxedError;

        fn schedule_meeting(
            &self,
            request: MeetingRequest,
        ) -> BoxFuture<'_, ScheduledMeeting, Self::Error> {
            self.log
                .record(format!("schedule_meeting {} {}", request.date, request.time));
            let fail = self.fail;

            Box::pin(async move {
                if fail {
                    Err(fake_failure("token exchange rejected"))
                } else {
                    Ok(ScheduledMeeting {
                        join_url: "https://zoom.us/j/123456789".to_string(),
                        start_time: Some("2025-05-05T04:30:00Z".to_string()),
                    })
                }
            })
        }
    }

    struct FakeNotificationService {
        log: Arc<CallLog>,
        fail: bool,
    }

    impl NotificationService for FakeNotificationService {
        type Error = BoxedError;

        fn send_email(
            &self,
            to: &[String],
            subject: &str,
            _body: &str,
            _is_html: bool,
        ) -> BoxFuture<'_, NotificationResult, Self::Error> {
            self.log
                .record(format!("send_email [{}] {}", to.join(", "), subject));
            let fail = self.fail;

            Box::pin(async move {
                if fail {
                    Err(fake_failure("relay refused the message"))
                } else {
                    Ok(NotificationResult {
                        id: None,
                        status: "sent".to_string(),
                    })
                }
            })
        }
    }

    struct FakeSlotStore {
        log: Arc<CallLog>,
        fail: bool,
        times: Vec<String>,
    }

    impl SlotStore for FakeSlotStore {
        type Error = BoxedError;

        fn record_booking(
            &self,
            appointment_date: &str,
            appointment_time: &str,
        ) -> BoxFuture<'_, (), Self::Error> {
            self.log.record(format!(
                "record_booking {} {}",
                appointment_date, appointment_time
            ));
            let fail = self.fail;

            Box::pin(async move {
                if fail {
                    Err(fake_failure("insert failed"))
                } else {
                    Ok(())
                }
            })
        }

        fn list_booked_times(
            &self,
            appointment_date: &str,
        ) -> BoxFuture<'_, Vec<String>, Self::Error> {
            self.log
                .record(format!("list_booked_times {}", appointment_date));
            let fail = self.fail;
            let times = self.times.clone();

            Box::pin(async move {
                if fail {
                    Err(fake_failure("select failed"))
                } else {
                    Ok(times)
                }
            })
        }
    }

    struct Harness {
        router: Router,
        log: Arc<CallLog>,
    }

    /// Every service succeeds and the store is empty.
    fn harness() -> Harness {
        harness_with(false, false, false, Vec::new())
    }

    fn harness_with(
        meeting_fails: bool,
        email_fails: bool,
        store_fails: bool,
        times: Vec<String>,
    ) -> Harness {
        let log = Arc::new(CallLog::default());

        let router = routes(
            Arc::new(FakeMeetingService {
                log: log.clone(),
                fail: meeting_fails,
            }),
            Arc::new(FakeNotificationService {
                log: log.clone(),
                fail: email_fails,
            }),
            Arc::new(FakeSlotStore {
                log: log.clone(),
                fail: store_fails,
                times,
            }),
        );

        Harness { router, log }
    }

    fn valid_booking_body() -> Value {
        json!({
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
        })
    }

    async fn post_json(router: &Router, path: &str, body: &Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();

        (status, value)
    }

    #[tokio::test]
    async fn test_booking_calls_services_in_order_and_returns_link() {
        let harness = harness();

        let (status, body) =
            post_json(&harness.router, "/create-meeting", &valid_booking_body()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "success": true, "meetingLink": "https://zoom.us/j/123456789" })
        );
        assert_eq!(
            harness.log.entries(),
            vec![
                "schedule_meeting 2025-05-05 10:00:00",
                "send_email [asha@example.com, mehta@clinic.example, care@wellbook.example] \
                 Physiotherapy Appointment Confirmation",
                "record_booking 2025-05-05 10:00",
            ]
        );
    }

    async fn assert_rejected_without_calls(body: Value, expected: &str) {
        let harness = harness();

        let (status, response) = post_json(&harness.router, "/create-meeting", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({ "error": expected }));
        assert!(harness.log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected_before_any_service_call() {
        let required = [
            ("patientName", "Patient name missing"),
            ("patientEmail", "Patient email missing"),
            ("doctorName", "Doctor name missing"),
            ("doctorEmail", "Doctor email missing"),
            ("companyEmail", "Company email missing"),
            ("appointmentDate", "Appointment date missing"),
            ("appointmentTime", "Appointment time missing"),
            ("sessionType", "Session type missing"),
            ("transactionId", "Transaction ID missing"),
        ];

        for (key, expected) in required {
            let mut body = valid_booking_body();
            body.as_object_mut().unwrap().remove(key);
            assert_rejected_without_calls(body, expected).await;
        }
    }

    #[tokio::test]
    async fn test_bad_field_values_are_rejected_before_any_service_call() {
        let mut body = valid_booking_body();
        body["transactionId"] = json!("48a915");
        assert_rejected_without_calls(body, "Transaction ID must be numeric").await;

        let mut body = valid_booking_body();
        body["patientEmail"] = json!("not-an-email");
        assert_rejected_without_calls(body, "Invalid patient email").await;

        let mut body = valid_booking_body();
        body["appointmentDate"] = json!("2025-13-05");
        assert_rejected_without_calls(body, "Invalid appointment date").await;

        let mut body = valid_booking_body();
        body["appointmentTime"] = json!("25:00");
        assert_rejected_without_calls(body, "Invalid appointment time").await;
    }

    #[tokio::test]
    async fn test_meeting_failure_returns_500_and_stops_the_pipeline() {
        let harness = harness_with(true, false, false, Vec::new());

        let (status, body) =
            post_json(&harness.router, "/create-meeting", &valid_booking_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Zoom meeting creation failed" }));

        let entries = harness.log.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].starts_with("schedule_meeting"));
    }

    #[tokio::test]
    async fn test_email_failure_returns_500_without_recording_the_slot() {
        let harness = harness_with(false, true, false, Vec::new());

        let (status, body) =
            post_json(&harness.router, "/create-meeting", &valid_booking_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Zoom meeting creation failed" }));

        let entries = harness.log.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[1].starts_with("send_email"));
    }

    #[tokio::test]
    async fn test_store_failure_returns_500_after_meeting_and_email() {
        let harness = harness_with(false, false, true, Vec::new());

        let (status, body) =
            post_json(&harness.router, "/create-meeting", &valid_booking_body()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Zoom meeting creation failed" }));

        let entries = harness.log.entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[2].starts_with("record_booking"));
    }

    #[tokio::test]
    async fn test_booked_slots_returns_stored_times() {
        let harness = harness_with(
            false,
            false,
            false,
            vec!["10:00".to_string(), "14:00".to_string()],
        );

        let (status, body) = post_json(
            &harness.router,
            "/get-booked-slots",
            &json!({ "date": "2025-05-05" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "bookedSlots": ["10:00", "14:00"] }));
        assert_eq!(harness.log.entries(), vec!["list_booked_times 2025-05-05"]);
    }

    #[tokio::test]
    async fn test_booked_slots_with_no_bookings_is_an_empty_list() {
        let harness = harness();

        let (status, body) = post_json(
            &harness.router,
            "/get-booked-slots",
            &json!({ "date": "2030-01-01" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "bookedSlots": [] }));
    }

    #[tokio::test]
    async fn test_booked_slots_requires_a_date() {
        let harness = harness();

        let (status, body) = post_json(&harness.router, "/get-booked-slots", &json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Date is required" }));

        let (status, body) = post_json(
            &harness.router,
            "/get-booked-slots",
            &json!({ "date": "" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Date is required" }));

        assert!(harness.log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_booked_slots_store_failure_returns_500() {
        let harness = harness_with(false, false, true, Vec::new());

        let (status, body) = post_json(
            &harness.router,
            "/get-booked-slots",
            &json!({ "date": "2025-05-05" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
