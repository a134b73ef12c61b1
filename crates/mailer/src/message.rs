use core_types::DemoRequest;

/// A fully formatted email, independent of the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// The notification for a new demo request. The subject names the submitter.
pub fn demo_request_email(to: &str, request: &DemoRequest) -> OutboundEmail {
    let fields = [
        ("Organization Name", request.org_name.as_str()),
        ("Full Name", request.full_name.as_str()),
        ("Work Email", request.work_email.as_str()),
        ("Role", request.role.as_str()),
        ("Organization Type", request.org_type.as_str()),
        ("Phone", request.phone.as_str()),
    ];

    OutboundEmail {
        to: to.to_string(),
        subject: format!("Contact Us from {}", request.full_name),
        text: text_body(&fields),
        html: html_body("Contact Us", &fields),
    }
}

/// The notification for a new early access signup.
pub fn early_access_email(to: &str, email: &str) -> OutboundEmail {
    let fields = [("Email", email)];

    OutboundEmail {
        to: to.to_string(),
        subject: format!("New early access signup: {email}"),
        text: text_body(&fields),
        html: html_body("New Early Access Signup", &fields),
    }
}

fn text_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(label, value)| format!("{label}: {value}\n"))
        .collect()
}

fn html_body(heading: &str, fields: &[(&str, &str)]) -> String {
    let rows: String = fields
        .iter()
        .map(|(label, value)| format!("<p><strong>{label}:</strong> {}</p>\n", escape_html(value)))
        .collect();
    format!("<h2>{heading}</h2>\n{rows}")
}

/// Escapes the characters with special meaning in HTML text and attributes.
fn escape_html(text: &str) -> String {
    // `&` goes first so the entities added later are not escaped again.
    let special_chars = [('&', "&amp;"), ('<', "&lt;"), ('>', "&gt;"), ('"', "&quot;"), ('\'', "&#39;")];
    special_chars
        .iter()
        .fold(text.to_string(), |s, (c, entity)| s.replace(*c, entity))
}
