//! Concurrency-ramp load tester for a multipart file-upload endpoint.
//!
//! Fires batches of identical upload requests at increasing concurrency
//! levels and stops at the first level that produces any error, reporting
//! per-level success/error counts and elapsed time.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use upload_ramp::{build_http_client, RampConfig, RampController, UploadTarget};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Local file uploaded on every attempt.
    #[arg(long)]
    file: PathBuf,

    /// Value for the list_id field sent alongside the file.
    #[arg(long)]
    list_id: String,

    /// Upload endpoint URL.
    #[arg(long)]
    endpoint: String,

    /// Authorization header value, sent verbatim.
    #[arg(long)]
    auth_token: String,

    /// First concurrency level.
    #[arg(long, default_value_t = 10)]
    start_concurrency: usize,

    /// Level increment per ramp step.
    #[arg(long, default_value_t = 10)]
    step: usize,

    /// Highest concurrency level to attempt.
    #[arg(long, default_value_t = 1000)]
    max_concurrency: usize,
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging();

    let target = UploadTarget {
        file_path: args.file,
        list_id: args.list_id,
        endpoint_url: args.endpoint,
        auth_token: args.auth_token,
    };
    let config = RampConfig {
        start: args.start_concurrency,
        step: args.step,
        ceiling: args.max_concurrency,
    };

    let client = build_http_client()?;
    let controller = RampController::new(client, target, config)?;
    let results = controller.run().await;

    // Observed errors stop the ramp but are not a process failure.
    info!(levels_run = results.len(), "test completed");
    Ok(())
}
