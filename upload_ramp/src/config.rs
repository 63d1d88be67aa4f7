use std::path::PathBuf;

use crate::error::{Result, UploadRampError};

/// Describes the upload under test. Constant for the process lifetime and
/// shared read-only by every concurrent attempt.
#[derive(Debug, Clone)]
pub struct UploadTarget {
    /// Local file whose bytes are uploaded on every attempt.
    pub file_path: PathBuf,
    /// Value substituted into the `json` form field.
    pub list_id: String,
    /// Full URL of the upload endpoint.
    pub endpoint_url: String,
    /// Sent verbatim as the `Authorization` header, no scheme prefix.
    pub auth_token: String,
}

/// Concurrency ramp parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampConfig {
    /// First concurrency level.
    pub start: usize,
    /// Level increment per ramp step.
    pub step: usize,
    /// Highest level the ramp will attempt.
    pub ceiling: usize,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            start: 10,
            step: 10,
            ceiling: 1000,
        }
    }
}

impl RampConfig {
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 {
            return Err(UploadRampError::InvalidConfig("start concurrency must be at least 1".to_string()));
        }
        if self.step == 0 {
            return Err(UploadRampError::InvalidConfig("ramp step must be nonzero".to_string()));
        }
        Ok(())
    }
}
