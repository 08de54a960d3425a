#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::Parser;
use header_analyzer::{
    config::Config,
    http::build_router,
    mail::{MailSender, SmtpMailSender},
    page::PageState,
};
use tracing_subscriber::EnvFilter;

/// Show the request headers a server sees and email them on request.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// YAML configuration file (HA_* environment variables override it)
    #[arg(long, default_value = "config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    // Load and validate configuration first (fail-fast)
    let config = Config::load_from(&args.config).map_err(|e| anyhow::anyhow!("{e}"))?;

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Init banner so container logs clearly show startup
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "header-analyzer starting up"
    );

    let mailer: Option<Arc<dyn MailSender>> = match &config.mail {
        Some(mail) => {
            let sender: Arc<dyn MailSender> = Arc::new(
                SmtpMailSender::from_config(mail)
                    .context("failed to initialise SMTP transport")?,
            );
            tracing::info!(
                host = %mail.host,
                port = mail.port,
                tls = mail.tls_enable,
                timeout_secs = mail.timeout_secs,
                "mail delivery enabled"
            );
            Some(sender)
        }
        None => {
            tracing::warn!("no mail configuration found - email delivery disabled");
            None
        }
    };

    let app = build_router(PageState::new(mailer), &config.security_headers);

    let ip = config
        .server
        .host
        .parse()
        .with_context(|| format!("invalid server.host '{}'", config.server.host))?;
    let addr = SocketAddr::new(ip, config.server.port);
    tracing::info!("Starting server at http://{}/", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
