//! Outbound mail dispatch.
//!
//! # Architecture
//!
//! - [`MailSender`] - Trait defining a single-attempt dispatch
//! - [`SmtpMailSender`] - SMTP implementation using lettre's async transport
//! - [`mock::MockMailSender`] - Recording mock (behind `test-utils` feature)
//!
//! The page controller only ever holds an `Arc<dyn MailSender>`, so the
//! relay can be swapped for the mock in tests:
//!
//! ```ignore
//! use header_analyzer::mail::{mock::MockMailSender, MailSender, OutboundEmail};
//!
//! let mock = MockMailSender::new();
//! mock.send(OutboundEmail::new("x@y.com", "Header Analyzer", "host: a<br>")).await?;
//! assert_eq!(mock.sent().len(), 1);
//! ```

mod message;
mod sender;

pub use message::OutboundEmail;
pub use sender::{MailError, MailSender, SmtpMailSender};

#[cfg(any(test, feature = "test-utils"))]
pub use sender::mock;
