// --- File: crates/wellbook_mailer/src/template.rs ---
//! HTML template for the appointment confirmation email.

/// Everything the confirmation email interpolates.
///
/// Optional fields render with a placeholder so the layout never changes shape.
#[derive(Debug, Clone)]
pub struct ConfirmationDetails<'a> {
    pub patient_name: &'a str,
    pub patient_email: &'a str,
    pub patient_phone: Option<&'a str>,
    pub therapy_type: &'a str,
    pub doctor_name: &'a str,
    pub session_type: &'a str,
    pub appointment_date: &'a str,
    pub appointment_time: &'a str,
    pub transaction_id: &'a str,
    pub message: Option<&'a str>,
    pub meeting_link: &'a str,
}

/// A rendered confirmation email.
#[derive(Debug, Clone)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// Placeholder for contact fields the patient left blank.
const NOT_PROVIDED: &str = "Not Provided";
/// Placeholder for an empty patient message.
const NO_MESSAGE: &str = "No additional message";

/// Render the confirmation email for a booked appointment.
pub fn render_confirmation(details: &ConfirmationDetails<'_>) -> RenderedEmail {
    let subject = format!("{} Appointment Confirmation", details.therapy_type);

    let phone = details
        .patient_phone
        .filter(|p| !p.is_empty())
        .unwrap_or(NOT_PROVIDED);
    let message = details
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or(NO_MESSAGE);
    let link = escape_html(details.meeting_link);

    let html = format!(
        r#"<h2>Appointment Confirmed ✅</h2>
<h3>Patient Details</h3>
<p><strong>Name:</strong> {patient_name}</p>
<p><strong>Email:</strong> {patient_email}</p>
<p><strong>Phone:</strong> {phone}</p>
<h3>Appointment Details</h3>
<p><strong>Therapy Type:</strong> {therapy_type}</p>
<p><strong>Doctor:</strong> {doctor_name}</p>
<p><strong>Session Type:</strong> {session_type}</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>Time:</strong> {time}</p>
<h3>Payment Information</h3>
<p><strong>Transaction ID:</strong> {transaction_id}</p>
<h3>Patient Message</h3>
<p>{message}</p>
<h3>Zoom Meeting Link</h3>
<p><a href="{link}">{link}</a></p>"#,
        patient_name = escape_html(details.patient_name),
        patient_email = escape_html(details.patient_email),
        phone = escape_html(phone),
        therapy_type = escape_html(details.therapy_type),
        doctor_name = escape_html(details.doctor_name),
        session_type = escape_html(details.session_type),
        date = escape_html(details.appointment_date),
        time = escape_html(details.appointment_time),
        transaction_id = escape_html(details.transaction_id),
        message = escape_html(message),
        link = link,
    );

    RenderedEmail { subject, html }
}

/// Escape text for interpolation into the HTML body.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
