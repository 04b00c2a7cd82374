//! Best-effort notification email for new submissions

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::ValidContact;
use crate::config::EmailConfig;
use crate::constants::{RESEND_API_URL, RESEND_KEY_PREFIX};
use crate::repositories::DeliveryUpdate;

/// Sends the notification for a stored submission. Implementations never
/// fail the request: every outcome is reported as a [`DeliveryUpdate`].
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, contact: &ValidContact, submitted_at: DateTime<Utc>) -> DeliveryUpdate;
}

/// Why email is switched off, or the usable API key
pub fn gate_api_key(api_key: Option<&str>) -> Result<&str, String> {
    match api_key {
        None | Some("") => Err("Email service not configured".to_string()),
        Some(key) if !key.starts_with(RESEND_KEY_PREFIX) => Err(format!(
            "Email service invalid format (must start with \"{}\")",
            RESEND_KEY_PREFIX
        )),
        Some(key) => Ok(key),
    }
}

#[derive(Debug, Serialize)]
struct EmailPayload<'a> {
    from: &'a str,
    to: &'a [String],
    subject: String,
    html: String,
    reply_to: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmailResponse {
    id: Option<String>,
}

/// Notifier backed by the Resend HTTP API
pub struct ResendNotifier {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    from: String,
    to: Vec<String>,
}

impl ResendNotifier {
    pub fn new(config: &EmailConfig, api_key: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(Duration::from_secs(10)).build()?;
        Ok(Self {
            client,
            api_url: RESEND_API_URL.to_string(),
            api_key,
            from: config.from.clone(),
            to: config.to.clone(),
        })
    }

    /// Point at a different API endpoint
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[async_trait]
impl Notifier for ResendNotifier {
    async fn notify(&self, contact: &ValidContact, submitted_at: DateTime<Utc>) -> DeliveryUpdate {
        let api_key = match gate_api_key(self.api_key.as_deref()) {
            Ok(key) => key,
            Err(note) => {
                log::info!("Relay: {}, storing submission only", note);
                return DeliveryUpdate::Disabled { note };
            }
        };

        let payload = EmailPayload {
            from: &self.from,
            to: &self.to,
            subject: format!("Portfolio Contact: {} wants to connect!", contact.name),
            html: render_email_html(contact, submitted_at),
            reply_to: &contact.email,
        };

        let response = match self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::error!("Relay: email request failed: {}", e);
                return DeliveryUpdate::Failed {
                    error: e.to_string(),
                    status_code: None,
                };
            }
        };

        let status = response.status();
        if !status.is_success() {
            let error = response.text().await.unwrap_or_default();
            log::error!("Relay: email delivery failed with status {}: {}", status, error);
            return DeliveryUpdate::Failed {
                error,
                status_code: Some(status.as_u16()),
            };
        }

        let email_id = response.json::<EmailResponse>().await.ok().and_then(|r| r.id);
        log::info!("Relay: notification email sent ({:?})", email_id);
        DeliveryUpdate::Sent { email_id }
    }
}

/// Notifier that never sends anything
pub struct DisabledNotifier {
    note: String,
}

impl DisabledNotifier {
    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }
}

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn notify(&self, _contact: &ValidContact, _submitted_at: DateTime<Utc>) -> DeliveryUpdate {
        DeliveryUpdate::Disabled {
            note: self.note.clone(),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTML body of the notification. User input is escaped and message line
/// breaks become `<br>`.
pub fn render_email_html(contact: &ValidContact, submitted_at: DateTime<Utc>) -> String {
    let name = escape_html(&contact.name);
    let email = escape_html(&contact.email);
    let message = escape_html(&contact.message).replace('\n', "<br>");

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #F89A1C;">New Contact Form Submission</h2>
  <p><strong>Name:</strong> {name}</p>
  <p><strong>Email:</strong> <a href="mailto:{email}">{email}</a></p>
  <p><strong>Message:</strong></p>
  <p style="line-height: 1.6;">{message}</p>
  <hr>
  <p style="color: #888; font-size: 12px;">Sent from your portfolio at {sent}</p>
</div>"#,
        sent = submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
