use rfa_core::{PipelineResponse, SubmissionError};
use rfa_logging::{rfa_debug, rfa_warn};
use url::Url;

use crate::{ClientSettings, MultipartBody, SettingsError};

#[async_trait::async_trait]
pub trait PipelineTransport: Send + Sync {
    /// Sends one job. Non-2xx answers and IO failures both come back as `Err`.
    async fn send(&self, body: MultipartBody) -> Result<PipelineResponse, SubmissionError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self, SettingsError> {
        let endpoint = settings.endpoint()?;

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| SettingsError::Client(err.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl PipelineTransport for ReqwestTransport {
    async fn send(&self, body: MultipartBody) -> Result<PipelineResponse, SubmissionError> {
        rfa_debug!(
            "POST {} ({} text parts, {} file bytes)",
            self.endpoint,
            body.text.len(),
            body.file_bytes()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(body.into_form())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(|err| {
                rfa_warn!("Failed to read error body for HTTP {}: {}", status, err);
                map_reqwest_error(err)
            })?;
            return Err(SubmissionError::HttpStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        PipelineResponse::from_slice(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmissionError {
    if err.is_timeout() {
        return SubmissionError::unknown(format!("request timed out: {err}"));
    }
    SubmissionError::unknown(err.to_string())
}
