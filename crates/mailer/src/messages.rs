//! Subjects and HTML bodies for the site's transactional mail.
//!
//! Kept as plain string builders; the visual templates live with the
//! frontend, these only need to read well in a mail client.

/// Fallback greeting when no name was given.
const FALLBACK_NAME: &str = "there";

fn greeting(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => FALLBACK_NAME,
    }
}

/// Subject for the newsletter welcome mail.
pub fn newsletter_welcome_subject() -> String {
    "Welcome to the Kingdom! - Queen Less Kings".to_string()
}

/// Body for the newsletter welcome mail.
pub fn newsletter_welcome_body(name: Option<&str>) -> String {
    format!(
        "<html><body>\
         <h1>Welcome to the Kingdom!</h1>\
         <p>Hey {greeting},</p>\
         <p>Thanks for joining the Queen Less Kings newsletter! You'll be the \
         first to know about new music releases, tour dates and tickets, \
         exclusive content, and subscriber-only offers.</p>\
         <p>Rock on!<br>The Queen Less Kings Team</p>\
         </body></html>",
        greeting = html_escape(greeting(name)),
    )
}

/// Subject for the contact notification sent to the band inbox.
pub fn contact_notification_subject(subject: &str) -> String {
    format!("[Contact Form] {subject}")
}

/// Body for the contact notification sent to the band inbox.
pub fn contact_notification_body(name: &str, email: &str, message: &str) -> String {
    format!(
        "<html><body>\
         <h1>New Contact Form Submission</h1>\
         <p><strong>From</strong><br>{} &lt;{}&gt;</p>\
         <p><strong>Message</strong></p>\
         <p style=\"white-space: pre-wrap\">{}</p>\
         <hr>\
         <p>Reply directly to this email to respond.</p>\
         </body></html>",
        html_escape(name),
        html_escape(email),
        html_escape(message),
    )
}

/// Subject for the confirmation sent back to the sender.
pub fn contact_confirmation_subject() -> String {
    "Thanks for reaching out! - Queen Less Kings".to_string()
}

/// Body for the confirmation sent back to the sender.
pub fn contact_confirmation_body(name: &str) -> String {
    format!(
        "<html><body>\
         <h1>Thanks for reaching out!</h1>\
         <p>Hey {},</p>\
         <p>We've received your message and will get back to you as soon as \
         possible. Our team typically responds within 24-48 hours.</p>\
         <p>In the meantime, check out our latest music and upcoming shows!</p>\
         <p>Rock on!<br>The Queen Less Kings Team</p>\
         </body></html>",
        html_escape(greeting(Some(name))),
    )
}

/// Minimal HTML escaping for user-supplied text interpolated into bodies.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn welcome_body_greets_by_name() {
        let body = newsletter_welcome_body(Some("Ana"));
        assert!(body.contains("Hey Ana,"));
    }

    #[test]
    fn welcome_body_falls_back_without_name() {
        assert!(newsletter_welcome_body(None).contains("Hey there,"));
        assert!(newsletter_welcome_body(Some("  ")).contains("Hey there,"));
    }

    #[test]
    fn notification_subject_carries_form_subject() {
        assert_eq!(
            contact_notification_subject("Booking enquiry"),
            "[Contact Form] Booking enquiry"
        );
    }

    #[test]
    fn user_text_is_html_escaped() {
        let body = contact_notification_body("A <b>", "a@b.c", "1 < 2 & 3 > 2");
        assert!(body.contains("A &lt;b&gt;"));
        assert!(body.contains("1 &lt; 2 &amp; 3 &gt; 2"));
        assert!(!body.contains("<b>"));
    }
}
