//! `docsum serve`: run the HTTP server.

use crate::cli::output::{self, Styled};
use crate::config::Config;
use crate::pipeline::Pipeline;
use crate::server::{self, AppState};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;

/// Start the server and block until Ctrl-C.
pub async fn run(host: Option<String>, port: Option<u16>) -> Result<()> {
    let s = Styled::new();

    let mut config = Config::from_env().context("loading configuration")?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let pipeline = Pipeline::from_config(&config)?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        model = %config.model,
        scratch_dir = %config.scratch_dir.display(),
        "starting Docsum v{}",
        env!("CARGO_PKG_VERSION")
    );

    if !output::is_quiet() {
        eprintln!(
            "  {} Docsum v{} listening on {}",
            s.ok_sym(),
            env!("CARGO_PKG_VERSION"),
            s.cyan(&format!("http://{addr}"))
        );
    }

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("received shutdown signal");
    };

    server::serve(listener, AppState { pipeline }, shutdown).await?;

    if !output::is_quiet() {
        eprintln!("  {} Docsum stopped.", s.ok_sym());
    }
    Ok(())
}
