#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::config::{RampConfig, UploadTarget};
pub use crate::driver::{run_level, LevelResult};
pub use crate::error::UploadRampError;
pub use crate::http_client::build_http_client;
pub use crate::ramp::RampController;
pub use crate::upload::{build_upload_request, run_attempt, send_upload, RequestOutcome, UPLOAD_PART_FILENAME};

mod config;
mod driver;
mod error;
mod http_client;
mod ramp;
mod upload;
