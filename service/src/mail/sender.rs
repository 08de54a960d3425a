//! SMTP dispatch behind a trait seam.

use async_trait::async_trait;
use lettre::{
    address::AddressError,
    message::Mailbox,
    transport::smtp::{authentication::Credentials, AsyncSmtpTransport},
    AsyncTransport, Tokio1Executor,
};
use thiserror::Error;

use super::OutboundEmail;
use crate::config::MailConfig;

/// Errors that can occur while dispatching a message.
///
/// Callers surface every variant the same way; the distinction only matters
/// for logs.
#[derive(Debug, Error)]
pub enum MailError {
    /// A sender or recipient address could not be parsed
    #[error("invalid address: {0}")]
    Address(#[from] AddressError),

    /// The MIME message could not be assembled
    #[error("message construction failed: {0}")]
    Message(#[from] lettre::error::Error),

    /// Connection, authentication or relay rejection
    #[error("SMTP transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Single-attempt mail dispatch.
///
/// `Ok` means the relay accepted the message for delivery. No retry is
/// performed by implementations.
#[async_trait]
pub trait MailSender: Send + Sync {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError>;
}

/// SMTP implementation of [`MailSender`].
///
/// The transport keeps a connection pool, so one instance should be built at
/// startup and shared.
pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailSender {
    /// Build a sender for the configured relay.
    ///
    /// No connection is opened here; the first dispatch connects.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Address`] if `from` is not a valid mailbox and
    /// [`MailError::Transport`] if the STARTTLS parameters cannot be built.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let from: Mailbox = config.from.parse()?;

        let builder = if config.tls_enable {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(config.timeout()))
            .build();

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let message = email.to_message(&self.from)?;
        self.transport.send(message).await?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{MailError, MailSender, OutboundEmail};
    use async_trait::async_trait;
    use lettre::message::Mailbox;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Records every message handed to it instead of contacting a relay.
    ///
    /// Call `fail_next()` to make the following dispatch return an error.
    pub struct MockMailSender {
        fail_next: AtomicBool,
        sent: Mutex<Vec<OutboundEmail>>,
    }

    impl MockMailSender {
        pub fn new() -> Self {
            Self {
                fail_next: AtomicBool::new(false),
                sent: Mutex::new(Vec::new()),
            }
        }

        /// Make the next `send` call fail.
        pub fn fail_next(&self) {
            self.fail_next.store(true, Ordering::SeqCst);
        }

        /// All messages passed to `send`, including failed attempts.
        pub fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Default for MockMailSender {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl MailSender for MockMailSender {
        async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email);

            if self.fail_next.swap(false, Ordering::SeqCst) {
                // Any variant will do; callers treat them alike.
                let err = "".parse::<Mailbox>().unwrap_err();
                return Err(MailError::Address(err));
            }

            Ok(())
        }
    }
}
