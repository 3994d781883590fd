//! Outbound mail delivery for enquiry handling.
//!
//! Delivery goes through the [`MailClient`] trait so handlers and tests can
//! run against a mock while production talks to the Resend HTTP API.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::templates;

/// A submitted enquiry from the lead-capture form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Enquiry {
    /// Submitter name.
    #[serde(default)]
    pub name: Option<String>,
    /// Submitter email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Website the enquiry is about.
    #[serde(default)]
    pub website: Option<String>,
    /// Selected service package, if any.
    #[serde(default)]
    pub package: Option<String>,
    /// Free-form message, if any.
    #[serde(default)]
    pub message: Option<String>,
}

impl Enquiry {
    /// Whether all required fields are present and non-empty.
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.website]
            .iter()
            .all(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }

    /// Submitter name, defaulting to empty.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Submitter email, defaulting to empty.
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// Website, defaulting to empty.
    pub fn website(&self) -> &str {
        self.website.as_deref().unwrap_or_default()
    }
}

/// A single email handed to the delivery service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundEmail {
    /// Sender identity, e.g. `Discoverable <onboarding@resend.dev>`.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Optional reply-to address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

/// Error type for mail delivery.
#[derive(Debug, Clone)]
pub struct MailError {
    message: String,
}

impl MailError {
    /// Build a mail error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for MailError {}

/// Trait for mail delivery operations.
pub trait MailClient {
    /// Dispatch an email and return the delivery service's message id.
    fn send(&self, email: &OutboundEmail) -> Result<String, MailError>;
}

/// Mock mail client used for local development and testing.
#[derive(Debug, Default, Clone)]
pub struct MockMailClient;

impl MailClient for MockMailClient {
    fn send(&self, email: &OutboundEmail) -> Result<String, MailError> {
        if email.to.trim().is_empty() {
            return Err(MailError::new("recipient is required"));
        }
        if email.from.trim().is_empty() {
            return Err(MailError::new("sender is required"));
        }
        if email.subject.trim().is_empty() {
            return Err(MailError::new("subject is required"));
        }
        Ok(Uuid::new_v4().to_string())
    }
}

#[derive(Deserialize)]
struct ResendResponse {
    id: String,
}

/// Mail client backed by the Resend HTTP API.
#[derive(Debug, Clone)]
pub struct ResendClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl ResendClient {
    /// Build a Resend client from environment variables.
    #[cfg_attr(test, allow(dead_code))]
    pub fn from_env() -> Self {
        let base_url = std::env::var("RESEND_API_URL")
            .unwrap_or_else(|_| "https://api.resend.com".to_string());
        let api_key = std::env::var("RESEND_API_KEY").ok();
        Self {
            base_url,
            api_key,
            client: Client::new(),
        }
    }

    /// Build a Resend client against an explicit endpoint.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(api_key.into()),
            client: Client::new(),
        }
    }
}

impl MailClient for ResendClient {
    fn send(&self, email: &OutboundEmail) -> Result<String, MailError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| MailError::new("RESEND_API_KEY is required"))?;
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .map_err(|err| MailError::new(format!("resend request failed: {err}")))?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(MailError::new(format!(
                "resend api error ({status}): {body}"
            )));
        }
        let body: ResendResponse = response
            .json()
            .map_err(|err| MailError::new(format!("resend response decode failed: {err}")))?;
        if body.id.is_empty() {
            return Err(MailError::new("resend response missing id"));
        }
        Ok(body.id)
    }
}

/// Mail delivery service for enquiry notifications and auto-replies.
#[derive(Clone)]
pub struct MailService {
    client: Arc<dyn MailClient + Send + Sync>,
    from: String,
    notification_to: String,
}

impl MailService {
    /// Build a mail service with the mock client.
    pub fn mock() -> Self {
        Self::new(Arc::new(MockMailClient))
    }

    /// Build a mail service with an explicit client.
    pub fn new(client: Arc<dyn MailClient + Send + Sync>) -> Self {
        let from = std::env::var("DISCOVERABLE_MAIL_FROM")
            .unwrap_or_else(|_| "Discoverable <onboarding@resend.dev>".to_string());
        let notification_to = std::env::var("NOTIFICATION_EMAIL")
            .unwrap_or_else(|_| "hello@discoverable.cc".to_string());
        Self {
            client,
            from,
            notification_to,
        }
    }

    /// Build a mail service from environment configuration.
    #[cfg_attr(test, allow(dead_code))]
    pub fn from_env() -> Self {
        let mode = std::env::var("DISCOVERABLE_MAIL_MODE").unwrap_or_else(|_| "live".to_string());
        if mode.eq_ignore_ascii_case("mock") {
            return Self::mock();
        }
        Self::new(Arc::new(ResendClient::from_env()))
    }

    /// Send the internal notification for an enquiry, returning the message id.
    pub fn send_notification(&self, enquiry: &Enquiry) -> Result<String, MailError> {
        let submitted_at = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        let email = OutboundEmail {
            from: self.from.clone(),
            to: self.notification_to.clone(),
            subject: templates::notification_subject(enquiry),
            html: templates::notification_html(enquiry, &submitted_at),
            reply_to: Some(enquiry.email().to_string()),
        };
        self.client.send(&email)
    }

    /// Send the auto-reply to the submitter, returning the message id.
    pub fn send_auto_reply(&self, enquiry: &Enquiry) -> Result<String, MailError> {
        let email = OutboundEmail {
            from: self.from.clone(),
            to: enquiry.email().to_string(),
            subject: templates::auto_reply_subject(),
            html: templates::auto_reply_html(enquiry),
            reply_to: None,
        };
        self.client.send(&email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::POST;
    use httpmock::MockServer;

    fn sample_enquiry() -> Enquiry {
        Enquiry {
            name: Some("Ada Lovelace".to_string()),
            email: Some("ada@example.com".to_string()),
            website: Some("https://example.com".to_string()),
            package: Some("Growth".to_string()),
            message: Some("Please audit our site.".to_string()),
        }
    }

    #[test]
    fn required_fields_check_rejects_missing_and_empty() {
        assert!(sample_enquiry().has_required_fields());

        let mut missing = sample_enquiry();
        missing.name = None;
        assert!(!missing.has_required_fields());

        let mut empty = sample_enquiry();
        empty.website = Some(String::new());
        assert!(!empty.has_required_fields());
    }

    #[test]
    fn mock_client_returns_message_id() {
        let service = MailService::mock();
        let id = service
            .send_notification(&sample_enquiry())
            .expect("notification");
        assert!(!id.is_empty());

        let reply_id = service
            .send_auto_reply(&sample_enquiry())
            .expect("auto-reply");
        assert!(!reply_id.is_empty());
    }

    #[test]
    fn mock_client_rejects_blank_recipient() {
        let client = MockMailClient;
        let email = OutboundEmail {
            from: "Discoverable <onboarding@resend.dev>".to_string(),
            to: "  ".to_string(),
            subject: "subject".to_string(),
            html: "<p>body</p>".to_string(),
            reply_to: None,
        };
        assert!(client.send(&email).is_err());
    }

    #[test]
    fn resend_client_posts_email_and_reads_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/emails")
                .header("Authorization", "Bearer test-key")
                .json_body_partial(r#"{"to": "hello@discoverable.cc"}"#);
            then.status(200)
                .json_body(serde_json::json!({"id": "msg-123"}));
        });

        let service = MailService::new(Arc::new(ResendClient::new(server.base_url(), "test-key")));
        let id = service
            .send_notification(&sample_enquiry())
            .expect("notification");

        mock.assert();
        assert_eq!(id, "msg-123");
    }

    #[test]
    fn resend_client_surfaces_api_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/emails");
            then.status(500).body("boom");
        });

        let service = MailService::new(Arc::new(ResendClient::new(server.base_url(), "test-key")));
        let err = service
            .send_notification(&sample_enquiry())
            .expect_err("failure");
        assert!(err.to_string().contains("resend api error"));
    }

    #[test]
    fn resend_client_requires_api_key() {
        let client = ResendClient {
            base_url: "https://api.resend.com".to_string(),
            api_key: None,
            client: Client::new(),
        };
        let email = OutboundEmail {
            from: "a".to_string(),
            to: "b".to_string(),
            subject: "c".to_string(),
            html: "d".to_string(),
            reply_to: None,
        };
        let err = client.send(&email).expect_err("missing key");
        assert!(err.to_string().contains("RESEND_API_KEY"));
    }

    #[test]
    fn notification_uses_reply_to_of_submitter() {
        struct CapturingClient(std::sync::Mutex<Option<OutboundEmail>>);
        impl MailClient for CapturingClient {
            fn send(&self, email: &OutboundEmail) -> Result<String, MailError> {
                *self.0.lock().expect("lock") = Some(email.clone());
                Ok("captured".to_string())
            }
        }

        let client = Arc::new(CapturingClient(std::sync::Mutex::new(None)));
        let service = MailService::new(client.clone());
        service
            .send_notification(&sample_enquiry())
            .expect("notification");

        let email = client.0.lock().expect("lock").clone().expect("email");
        assert_eq!(email.reply_to.as_deref(), Some("ada@example.com"));
        assert_eq!(email.to, "hello@discoverable.cc");
        assert!(email.subject.contains("Ada Lovelace"));
    }
}
