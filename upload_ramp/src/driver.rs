//! Runs one ramp step: a fixed number of concurrent upload attempts joined
//! at a barrier and reduced to per-level counts.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest_middleware::ClientWithMiddleware;
use tokio::task::JoinSet;
use tracing::debug;

use crate::config::UploadTarget;
use crate::upload::{run_attempt, RequestOutcome};

/// Aggregate of one ramp step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelResult {
    pub concurrency: usize,
    pub success_count: usize,
    pub error_count: usize,
    pub elapsed: Duration,
}

/// Launches exactly `level` concurrent attempts against `target` and blocks
/// until every one of them has produced an outcome.
///
/// Attempt failures are tallied, never propagated, and one attempt's failure
/// does not affect its siblings. Completion order does not affect the counts.
/// `elapsed` covers start to last completion, so it is dominated by the
/// slowest attempt.
pub async fn run_level(client: &ClientWithMiddleware, target: Arc<UploadTarget>, level: usize) -> LevelResult {
    let start = Instant::now();

    let mut attempts = JoinSet::new();
    for _ in 0..level {
        let client = client.clone();
        let target = Arc::clone(&target);
        attempts.spawn(async move { run_attempt(&client, &target).await });
    }

    let mut success_count = 0;
    let mut error_count = 0;
    while let Some(joined) = attempts.join_next().await {
        let outcome = match joined {
            Ok(outcome) => outcome,
            // A panicked attempt still counts against the level.
            Err(e) => RequestOutcome::Failure {
                reason: format!("attempt task failed: {e}"),
            },
        };
        match outcome {
            RequestOutcome::Success => success_count += 1,
            RequestOutcome::Failure { reason } => {
                debug!(concurrency = level, %reason, "upload attempt failed");
                error_count += 1;
            },
        }
    }

    LevelResult {
        concurrency: level,
        success_count,
        error_count,
        elapsed: start.elapsed(),
    }
}
