#[cfg(test)]
mod tests {
    use crate::template::{render_confirmation, ConfirmationDetails};

    fn details() -> ConfirmationDetails<'static> {
        ConfirmationDetails {
            patient_name: "Asha Rao",
            patient_email: "asha@example.com",
            patient_phone: Some("+91 98765 43210"),
            therapy_type: "Physiotherapy",
            doctor_name: "Dr. Mehta",
            session_type: "Online",
            appointment_date: "2025-05-05",
            appointment_time: "10:00",
            transaction_id: "482915",
            message: Some("Knee pain after running"),
            meeting_link: "https://zoom.us/j/123456789",
        }
    }

    #[test]
    fn test_subject_includes_therapy_type() {
        let rendered = render_confirmation(&details());
        assert_eq!(rendered.subject, "Physiotherapy Appointment Confirmation");
    }

    #[test]
    fn test_body_contains_every_section() {
        let rendered = render_confirmation(&details());

        assert!(rendered.html.contains("Appointment Confirmed"));
        assert!(rendered.html.contains("Patient Details"));
        assert!(rendered.html.contains("Appointment Details"));
        assert!(rendered.html.contains("Payment Information"));
        assert!(rendered.html.contains("Patient Message"));
        assert!(rendered.html.contains("Zoom Meeting Link"));
        assert!(rendered.html.contains("Asha Rao"));
        assert!(rendered.html.contains("Dr. Mehta"));
        assert!(rendered.html.contains("482915"));
        assert!(rendered.html.contains("2025-05-05"));
        assert!(rendered.html.contains("10:00"));
    }

    #[test]
    fn test_missing_phone_renders_placeholder() {
        let mut d = details();
        d.patient_phone = None;

        let rendered = render_confirmation(&d);

        assert!(rendered.html.contains("Not Provided"));
    }

    #[test]
    fn test_empty_message_renders_placeholder() {
        let mut d = details();
        d.message = Some("");

        let rendered = render_confirmation(&d);

        assert!(rendered.html.contains("No additional message"));
    }

    #[test]
    fn test_meeting_link_is_both_href_and_text() {
        let rendered = render_confirmation(&details());
        let link = "https://zoom.us/j/123456789";

        assert!(rendered
            .html
            .contains(&format!(r#"<a href="{link}">{link}</a>"#)));
    }

    #[test]
    fn test_interpolated_values_are_escaped() {
        let mut d = details();
        d.patient_name = "<script>alert(1)</script>";

        let rendered = render_confirmation(&d);

        assert!(!rendered.html.contains("<script>"));
        assert!(rendered
            .html
            .contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
