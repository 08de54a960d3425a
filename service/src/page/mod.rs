//! The header page: `GET /` lists the request headers, `POST /` emails them.
//!
//! Handlers read the mailer from an `Extension<PageState>` layer; when the
//! state carries no mailer, the form is hidden and submissions report that
//! delivery is not configured.

pub mod controller;
pub mod render;

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Extension},
    http::HeaderMap,
    response::Html,
    routing::get,
    Form, Router,
};

use crate::headers::extract;
use crate::mail::MailSender;
pub use controller::{compose_body, submit, EmailForm, Feedback, SUBJECT};
use render::{render_page, PageView};

/// Shared handler state, cloned per request.
#[derive(Clone, Default)]
pub struct PageState {
    pub mailer: Option<Arc<dyn MailSender>>,
}

impl PageState {
    pub fn new(mailer: Option<Arc<dyn MailSender>>) -> Self {
        Self { mailer }
    }
}

/// Routes for the header page.
pub fn router() -> Router {
    Router::new().route("/", get(show_page).post(submit_email))
}

#[allow(clippy::unused_async)] // Required for Axum handler signature
pub async fn show_page(
    Extension(state): Extension<PageState>,
    headers: HeaderMap,
) -> Html<String> {
    let entries = extract(&headers);
    Html(render_page(&PageView {
        headers: &entries,
        feedback: None,
        mail_enabled: state.mailer.is_some(),
    }))
}

pub async fn submit_email(
    Extension(state): Extension<PageState>,
    headers: HeaderMap,
    form: Result<Form<EmailForm>, FormRejection>,
) -> Html<String> {
    // An unreadable body is reported like an empty address.
    let form = form.map_or_else(
        |rejection| {
            tracing::debug!(error = %rejection, "unreadable form submission");
            EmailForm::default()
        },
        |Form(form)| form,
    );

    let entries = extract(&headers);
    let feedback = submit(state.mailer.as_deref(), &form, &entries).await;

    Html(render_page(&PageView {
        headers: &entries,
        feedback: Some(feedback),
        mail_enabled: state.mailer.is_some(),
    }))
}
