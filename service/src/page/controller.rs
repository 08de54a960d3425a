//! Form submission flow: validate, compose, dispatch, report.

use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::headers::HeaderEntry;
use crate::mail::{MailSender, OutboundEmail};
use crate::validation::EMAIL_PATTERN;

/// Subject line of every outbound header report.
pub const SUBJECT: &str = "Header Analyzer";

pub const SENT_MESSAGE: &str = "Email address is valid and your email successfully sent";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address format!";
pub const SEND_FAILED_MESSAGE: &str = "Sending email failed!";
pub const MAIL_DISABLED_MESSAGE: &str = "Email delivery is not configured!";

/// User-visible outcome of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Success(&'static str),
    Error(&'static str),
}

impl Feedback {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Success(msg) | Self::Error(msg) => msg,
        }
    }
}

/// Submitted form fields.
///
/// The address is trimmed on the way in; a missing field is the empty string.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EmailForm {
    #[serde(default, deserialize_with = "deserialize_trimmed")]
    #[validate(regex(path = *EMAIL_PATTERN))]
    pub email: String,
}

impl EmailForm {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
        }
    }
}

fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_owned())
}

/// Concatenate `"<name>: <value><br>"` for each entry, in order.
#[must_use]
pub fn compose_body(headers: &[HeaderEntry]) -> String {
    headers
        .iter()
        .map(|h| format!("{}: {}<br>", h.name, h.value))
        .collect()
}

/// Handle one form submission.
///
/// The mailer is consulted at most once, and only for a syntactically valid
/// address. Dispatch errors are logged and collapsed into a generic message.
pub async fn submit(
    mailer: Option<&dyn MailSender>,
    form: &EmailForm,
    headers: &[HeaderEntry],
) -> Feedback {
    if let Err(err) = form.validate() {
        tracing::debug!(error = %err, "rejected submission with malformed address");
        return Feedback::Error(INVALID_EMAIL_MESSAGE);
    }
    let email = form.email.as_str();

    let Some(mailer) = mailer else {
        tracing::warn!("submission received but mail delivery is not configured");
        return Feedback::Error(MAIL_DISABLED_MESSAGE);
    };

    let outbound = OutboundEmail::new(email, SUBJECT, compose_body(headers));

    match mailer.send(outbound).await {
        Ok(()) => {
            tracing::info!(to = %email, header_count = headers.len(), "header report sent");
            Feedback::Success(SENT_MESSAGE)
        }
        Err(err) => {
            tracing::warn!(to = %email, error = %err, "header report dispatch failed");
            Feedback::Error(SEND_FAILED_MESSAGE)
        }
    }
}
