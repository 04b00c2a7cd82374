use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MSG_NETWORK_ERROR, MSG_SUBMIT_FAILED};
use crate::entities::contact_submission;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("relay returned {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

/// Result of a contact submission as shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success(String),
    Failure(String),
}

#[derive(Debug, Serialize)]
struct ContactPayload<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Any response body the relay produces
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RelayReply {
    pub success: bool,
    pub message: Option<String>,
    pub details: Option<String>,
    pub error: Option<String>,
}

impl RelayReply {
    /// Map an HTTP status and reply body to what the visitor sees
    pub fn into_outcome(self, status_ok: bool) -> SubmitOutcome {
        if status_ok && self.success {
            SubmitOutcome::Success(self.message.unwrap_or_default())
        } else {
            SubmitOutcome::Failure(
                self.message
                    .or(self.details)
                    .or(self.error)
                    .unwrap_or_else(|| MSG_SUBMIT_FAILED.to_string()),
            )
        }
    }
}

#[derive(Debug, Deserialize)]
struct SubmissionsReply {
    #[allow(dead_code)]
    success: bool,
    count: usize,
    submissions: Vec<contact_submission::Model>,
}

/// Listing returned by `GET /contact-submissions`
#[derive(Debug, Clone)]
pub struct SubmissionList {
    pub count: usize,
    pub submissions: Vec<contact_submission::Model>,
}

/// HTTP client for the contact relay
#[derive(Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl RelayClient {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.anon_key.is_empty() {
            request
        } else {
            request.bearer_auth(&self.anon_key)
        }
    }

    /// Submit the contact form. Never retries; transport failures become the
    /// generic network message.
    pub async fn submit_contact(&self, name: &str, email: &str, message: &str) -> SubmitOutcome {
        log::info!("Contact: submitting form for {}", email);

        let request = self
            .authorized(self.http.post(self.url("/contact")))
            .json(&ContactPayload { name, email, message });

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Contact: submission failed: {}", e);
                return SubmitOutcome::Failure(MSG_NETWORK_ERROR.to_string());
            }
        };

        let status_ok = response.status().is_success();
        log::info!("Contact: relay answered {}", response.status());
        match response.json::<RelayReply>().await {
            Ok(reply) => reply.into_outcome(status_ok),
            Err(e) => {
                log::error!("Contact: unreadable relay reply: {}", e);
                SubmitOutcome::Failure(MSG_NETWORK_ERROR.to_string())
            }
        }
    }

    pub async fn fetch_submissions(&self) -> Result<SubmissionList, ClientError> {
        let response = self
            .authorized(self.http.get(self.url("/contact-submissions")))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reply = response.json::<RelayReply>().await.unwrap_or_default();
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message: reply
                    .error
                    .or(reply.details)
                    .unwrap_or_else(|| "Failed to fetch submissions".to_string()),
            });
        }

        let reply = response.json::<SubmissionsReply>().await?;
        Ok(SubmissionList {
            count: reply.count,
            submissions: reply.submissions,
        })
    }

    /// True when `/health` answers `{"status":"ok"}`
    pub async fn health(&self) -> Result<bool, ClientError> {
        let response = self.http.get(self.url("/health")).send().await?;
        let body = response.json::<serde_json::Value>().await?;
        Ok(body.get("status").and_then(|s| s.as_str()) == Some("ok"))
    }
}
