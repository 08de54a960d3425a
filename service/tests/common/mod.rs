//! Common test utilities for integration tests.
//!
//! - [`app_builder::TestAppBuilder`] - Build test Axum apps through the same
//!   `build_router` that `main.rs` uses, with a recording mail sender

pub mod app_builder;
