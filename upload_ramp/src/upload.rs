//! Builds and sends a single multipart upload attempt.

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, Request, StatusCode, Url};
use reqwest_middleware::ClientWithMiddleware;

use crate::config::UploadTarget;
use crate::error::{Result, UploadRampError};

/// On-wire filename for the multipart file part. The endpoint keys off this
/// literal name, not the local file name, so it is fixed regardless of
/// `UploadTarget::file_path`.
pub const UPLOAD_PART_FILENAME: &str = "4lakh1.csv";

/// Classification of one upload attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success,
    Failure { reason: String },
}

/// Builds the multipart POST for `target`: a `file` part holding the file
/// bytes under the fixed on-wire name, followed by a `json` field carrying
/// the list id. Performs no network I/O.
pub async fn build_upload_request(client: &ClientWithMiddleware, target: &UploadTarget) -> Result<Request> {
    let contents = tokio::fs::read(&target.file_path)
        .await
        .map_err(|source| UploadRampError::FileOpen {
            path: target.file_path.clone(),
            source,
        })?;

    // The list id is substituted verbatim; the endpoint expects this exact
    // string and no JSON escaping is applied.
    let json_field = format!("{{\"list_id\": \"{}\"}}", target.list_id);

    let form = Form::new()
        .part("file", Part::bytes(contents).file_name(UPLOAD_PART_FILENAME))
        .text("json", json_field);

    let auth = HeaderValue::from_str(&target.auth_token).map_err(|_| UploadRampError::InvalidAuthToken)?;
    let url = Url::parse(&target.endpoint_url)?;

    let request = client
        .request(Method::POST, url)
        .header(AUTHORIZATION, auth)
        .multipart(form)
        .build()?;

    Ok(request)
}

/// Executes a built request on the shared client and classifies the result.
///
/// The response body is drained before classifying so the connection is
/// released whatever the status code.
pub async fn send_upload(client: &ClientWithMiddleware, request: Request) -> RequestOutcome {
    let response = match client.execute(request).await {
        Ok(response) => response,
        Err(e) => {
            return RequestOutcome::Failure { reason: e.to_string() };
        },
    };

    let status = response.status();
    let drained = response.bytes().await;

    if status != StatusCode::OK {
        return RequestOutcome::Failure {
            reason: format!("unexpected status code: {}", status.as_u16()),
        };
    }
    if let Err(e) = drained {
        return RequestOutcome::Failure { reason: e.to_string() };
    }

    RequestOutcome::Success
}

/// One complete attempt: build then send, with every error funneled into the
/// outcome rather than propagated.
pub async fn run_attempt(client: &ClientWithMiddleware, target: &UploadTarget) -> RequestOutcome {
    match build_upload_request(client, target).await {
        Ok(request) => send_upload(client, request).await,
        Err(e) => RequestOutcome::Failure { reason: e.to_string() },
    }
}
