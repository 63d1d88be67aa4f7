//! Ramp controller: walks the concurrency ladder until the first error or
//! the ceiling.

use std::sync::Arc;

use reqwest_middleware::ClientWithMiddleware;
use tracing::info;

use crate::config::{RampConfig, UploadTarget};
use crate::driver::{run_level, LevelResult};
use crate::error::Result;

pub struct RampController {
    client: ClientWithMiddleware,
    target: Arc<UploadTarget>,
    config: RampConfig,
}

impl RampController {
    pub fn new(client: ClientWithMiddleware, target: UploadTarget, config: RampConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client,
            target: Arc::new(target),
            config,
        })
    }

    /// Runs levels `start, start + step, ...` while `level <= ceiling`,
    /// stopping after the first level that produces any error.
    ///
    /// Every level is reported as it completes; the full ordered sequence of
    /// level results is also returned for programmatic use.
    pub async fn run(&self) -> Vec<LevelResult> {
        let mut results = Vec::new();

        info!(
            endpoint = %self.target.endpoint_url,
            start = self.config.start,
            step = self.config.step,
            ceiling = self.config.ceiling,
            "starting concurrency ramp"
        );

        let mut level = self.config.start;
        while level <= self.config.ceiling {
            info!(concurrency = level, "testing level");
            let result = run_level(&self.client, Arc::clone(&self.target), level).await;
            info!(
                concurrency = result.concurrency,
                success = result.success_count,
                errors = result.error_count,
                elapsed_ms = result.elapsed.as_millis() as u64,
                "level complete"
            );

            let hit_errors = result.error_count > 0;
            results.push(result);
            if hit_errors {
                info!(concurrency = level, "reached error threshold, stopping ramp");
                return results;
            }

            level += self.config.step;
        }

        info!(ceiling = self.config.ceiling, "ramp exhausted without errors");
        results
    }
}
