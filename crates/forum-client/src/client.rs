use std::time::Duration;

use forum_types::{CreateMessageRequest, ErrorBody, Message};
use reqwest::{Response, StatusCode};

use crate::config::UpstreamConfig;
use crate::error::UpstreamError;

const MESSAGES_PATH: &str = "/api/messages";

/// Client for the storage API. One attempt per call, no retries.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl StorageClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Client)?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        Self::new(config.base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn messages_url(&self) -> String {
        format!("{}{}", self.base_url, MESSAGES_PATH)
    }

    /// `GET /api/messages`, newest first.
    pub async fn list_messages(&self) -> Result<Vec<Message>, UpstreamError> {
        let response = self
            .http_client
            .get(self.messages_url())
            .send()
            .await
            .map_err(UpstreamError::Unavailable)?;

        let response = check_status(response).await?;
        response.json().await.map_err(UpstreamError::Decode)
    }

    /// `POST /api/messages`. A 400 comes back as [`UpstreamError::Refused`].
    pub async fn create_message(&self, username: &str, content: &str) -> Result<Message, UpstreamError> {
        let response = self
            .http_client
            .post(self.messages_url())
            .json(&CreateMessageRequest::new(username, content))
            .send()
            .await
            .map_err(UpstreamError::Unavailable)?;

        let response = check_status(response).await?;
        response.json().await.map_err(UpstreamError::Decode)
    }
}

async fn check_status(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::BAD_REQUEST {
        let reason = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(e) => {
                tracing::debug!("400 from storage service without error body: {}", e);
                "message refused by storage service".to_string()
            }
        };
        return Err(UpstreamError::Refused(reason));
    }

    Err(UpstreamError::Status(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = StorageClient::new("http://api:3000/", Duration::from_secs(1)).unwrap();

        assert_eq!(client.base_url(), "http://api:3000");
        assert_eq!(client.messages_url(), "http://api:3000/api/messages");
    }
}
