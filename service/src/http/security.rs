//! Security headers applied to every response.
//!
//! The header set is built once from [`SecurityHeadersConfig`] and shared
//! through an `Extension`; the middleware copies it onto each response.

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION,
        },
        HeaderMap, HeaderValue,
    },
    middleware::{self, Next},
    response::Response,
    Extension, Router,
};

use crate::config::SecurityHeadersConfig;

/// Build security headers from configuration.
///
/// Values that are not valid header values are skipped.
#[must_use]
pub fn build_security_headers(config: &SecurityHeadersConfig) -> Arc<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block"));

    let configured = [
        (X_FRAME_OPTIONS, config.frame_options.as_str()),
        (CONTENT_SECURITY_POLICY, config.content_security_policy.as_str()),
        (REFERRER_POLICY, config.referrer_policy.as_str()),
    ];
    for (name, value) in configured {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                headers.insert(name, value);
            }
            Err(_) => tracing::warn!(header = %name, "skipping invalid security header value"),
        }
    }

    // HSTS only makes sense behind HTTPS
    if config.hsts_enabled {
        let hsts = if config.hsts_include_subdomains {
            format!("max-age={}; includeSubDomains", config.hsts_max_age)
        } else {
            format!("max-age={}", config.hsts_max_age)
        };
        if let Ok(value) = HeaderValue::from_str(&hsts) {
            headers.insert(STRICT_TRANSPORT_SECURITY, value);
        }
    }

    Arc::new(headers)
}

/// Copy the shared security headers onto the response.
pub async fn security_headers_middleware(
    Extension(headers): Extension<Arc<HeaderMap>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let response_headers = response.headers_mut();
    for (k, v) in headers.iter() {
        response_headers.insert(k.clone(), v.clone());
    }
    response
}

/// Wrap `app` with the security headers middleware when enabled.
///
/// Must be applied last so the headers reach every route.
#[must_use]
pub fn with_security_headers(app: Router, config: &SecurityHeadersConfig) -> Router {
    if !config.enabled {
        return app;
    }
    app.layer(middleware::from_fn(security_headers_middleware))
        .layer(Extension(build_security_headers(config)))
}
