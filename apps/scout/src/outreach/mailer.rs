//! Mail dispatch. `Mailer::send` never fails; every problem is reported as an
//! `EmailResult` with `status = "error"`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

pub const SMARTLEAD_SEND_URL: &str = "https://api.smartlead.ai/v1/send";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailResult {
    /// "sent" or "error".
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Body returned by the mail API, verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl EmailResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            response: None,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.status == "sent"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail<'a> {
    pub to: &'a str,
    pub subject: &'a str,
    pub body: &'a str,
    pub from: &'a str,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> EmailResult;
}

#[derive(Clone)]
pub struct SmartleadMailer {
    client: Client,
    api_key: Option<String>,
    from: String,
    url: String,
}

impl SmartleadMailer {
    pub fn new(api_key: Option<String>, from: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            from,
            url: SMARTLEAD_SEND_URL.to_string(),
        }
    }

    async fn post(&self, api_key: &str, email: &OutgoingEmail<'_>) -> Result<Value, MailError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Some deployments answer 200 with an empty body.
        let text = response.text().await?;
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[async_trait]
impl Mailer for SmartleadMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> EmailResult {
        let Some(api_key) = self.api_key.as_deref() else {
            return EmailResult::error("SMARTLEAD_API_KEY not set");
        };
        if to.trim().is_empty() {
            return EmailResult::error("candidate has no email address");
        }

        let email = OutgoingEmail {
            to,
            subject,
            body,
            from: &self.from,
        };

        match self.post(api_key, &email).await {
            Ok(response) => {
                info!("Email sent to {}", to);
                EmailResult {
                    status: "sent".to_string(),
                    message: None,
                    response: Some(response),
                }
            }
            Err(err) => {
                warn!("Email to {} failed: {}", to, err);
                EmailResult::error(err.to_string())
            }
        }
    }
}
