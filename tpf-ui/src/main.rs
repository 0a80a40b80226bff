//! tpf-ui - Portfolio submission service
//!
//! Serves the student submission form and the teacher-facing review
//! views over an in-memory record store. There is no persistence: all
//! submitted records and uploaded images live for the process only.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tpf_common::{config, MediaStore, MemberStore};
use tpf_ui::{build_router, AppState};

/// Command-line arguments for tpf-ui
#[derive(Parser, Debug)]
#[command(name = "tpf-ui")]
#[command(about = "TCAS portfolio submission service")]
#[command(version)]
struct Args {
    /// Listen address override (host:port)
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting TCAS Portfolio Submission (tpf-ui) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    // Listen address: CLI > environment > config file > default
    let addr = config::resolve_listen_addr(args.listen.as_deref(), "TPF_UI_LISTEN")?;

    // All state is in-memory; a restart starts empty
    let state = AppState::new(MemberStore::new(), MediaStore::new());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("tpf-ui listening on http://{}", addr);
    info!("Student form: http://{}/student/form", addr);
    info!("Member list:  http://{}/teacher/member", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
