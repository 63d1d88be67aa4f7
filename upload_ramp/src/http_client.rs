use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::error::Result;

/// Builds the HTTP client shared by all upload attempts in a run.
///
/// No request timeout is configured: a hung connection blocks its attempt,
/// and with it the whole ramp step. That matches the behavior of the tool
/// this replaces and is a known limitation.
pub fn build_http_client() -> Result<ClientWithMiddleware> {
    let reqwest_client = reqwest::Client::builder().build()?;
    Ok(ClientBuilder::new(reqwest_client).build())
}
