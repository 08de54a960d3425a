//! Message construction for outbound mail.

use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::Message;

use super::MailError;

/// A single-recipient HTML email, built per submission and consumed by the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

impl OutboundEmail {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }

    /// Build the MIME message: one `text/html; charset=utf-8` part inside a
    /// `multipart/mixed` container.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Address`] if `to` cannot be parsed as a mailbox and
    /// [`MailError::Message`] if the message cannot be assembled.
    pub fn to_message(&self, from: &Mailbox) -> Result<Message, MailError> {
        let to: Mailbox = self.to.parse()?;

        let message = Message::builder()
            .from(from.clone())
            .to(to)
            .subject(self.subject.as_str())
            .multipart(MultiPart::mixed().singlepart(SinglePart::html(self.html_body.clone())))?;

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> Mailbox {
        "noreply@example.com".parse().expect("valid mailbox")
    }

    #[test]
    fn builds_single_html_part_inside_multipart() {
        let email = OutboundEmail::new(
            "x@y.com",
            "Header Analyzer",
            "host: example.com<br>user-agent: test<br>",
        );

        let message = email.to_message(&sender()).expect("message should build");
        let raw = String::from_utf8(message.formatted()).expect("ascii message");

        assert!(raw.contains("From: noreply@example.com"));
        assert!(raw.contains("To: x@y.com"));
        assert!(raw.contains("Subject: Header Analyzer"));
        assert!(raw.contains("multipart/mixed"));
        assert!(raw.contains("Content-Type: text/html; charset=utf-8"));
        assert!(raw.contains("host: example.com<br>user-agent: test<br>"));
    }

    #[test]
    fn empty_subject_and_body_are_allowed() {
        let email = OutboundEmail::new("x@y.com", "", "");
        assert!(email.to_message(&sender()).is_ok());
    }

    #[test]
    fn unparseable_recipient_is_an_address_error() {
        let email = OutboundEmail::new("not-an-email", "Header Analyzer", "");
        let result = email.to_message(&sender());
        assert!(matches!(result, Err(MailError::Address(_))));
    }
}
