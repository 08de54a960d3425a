//! Test app builder that mirrors main.rs wiring with an injectable mailer.
//!
//! # Usage
//!
//! ```ignore
//! use crate::common::app_builder::TestAppBuilder;
//!
//! #[tokio::test]
//! async fn test_with_full_app() {
//!     let (app, mailer) = TestAppBuilder::with_mock_mailer().build_with_mock();
//!     // Use app.oneshot(...) to send requests, then inspect mailer.sent()
//! }
//! ```
//!
//! # Preset Builders
//!
//! - [`TestAppBuilder::minimal()`] - No mailer, no security headers
//! - [`TestAppBuilder::with_mock_mailer()`] - Recording mailer and default security headers

use std::sync::Arc;

use axum::Router;
use header_analyzer::{
    config::SecurityHeadersConfig,
    http::build_router,
    mail::{mock::MockMailSender, MailSender},
    page::PageState,
};

/// Builder for test applications that mirrors main.rs wiring.
pub struct TestAppBuilder {
    /// Recording mailer (None disables mail delivery)
    mailer: Option<Arc<MockMailSender>>,
    /// Security headers config (disabled unless set)
    security_headers: SecurityHeadersConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mailer: None,
            security_headers: SecurityHeadersConfig {
                enabled: false,
                ..SecurityHeadersConfig::default()
            },
        }
    }

    /// App without mail delivery or security headers.
    #[must_use]
    pub fn minimal() -> Self {
        Self::new()
    }

    /// App with a recording mailer and default security headers.
    #[must_use]
    pub fn with_mock_mailer() -> Self {
        Self::new()
            .with_mailer(Arc::new(MockMailSender::new()))
            .with_security_headers_default()
    }

    /// Use a specific mock mailer (keep a clone to inspect it).
    #[must_use]
    pub fn with_mailer(mut self, mailer: Arc<MockMailSender>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    /// Enable security headers with default configuration.
    #[must_use]
    pub fn with_security_headers_default(mut self) -> Self {
        self.security_headers = SecurityHeadersConfig::default();
        self
    }

    /// Enable security headers with custom configuration.
    #[must_use]
    pub fn with_security_headers(mut self, config: SecurityHeadersConfig) -> Self {
        self.security_headers = config;
        self
    }

    /// Build the Axum router.
    #[must_use]
    pub fn build(self) -> Router {
        self.build_with_mock().0
    }

    /// Build the router and hand back the mock mailer, if any.
    #[must_use]
    pub fn build_with_mock(self) -> (Router, Option<Arc<MockMailSender>>) {
        let mailer = self
            .mailer
            .clone()
            .map(|mock| mock as Arc<dyn MailSender>);

        let app = build_router(PageState::new(mailer), &self.security_headers);
        (app, self.mailer)
    }
}
