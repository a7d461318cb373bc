use crate::configuration::FormBackendSettings;
use crate::domain::ContactSubmission;
use crate::util::error_chain_fmt;
use anyhow::Context;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde_json::Value;

/// Client for the hosted form-intake service.
#[derive(Debug, Clone)]
pub struct FormClient {
    http_client: Client,
    endpoint: Url,
}

/// What the form backend said about a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub status: u16,
    pub ok: bool,
}

impl Acknowledgment {
    pub fn is_accepted(&self) -> bool {
        self.status == 200 || self.ok
    }
}

#[derive(thiserror::Error)]
pub enum TransportError {
    #[error("Failed to reach the form backend.")]
    Unreachable(#[source] reqwest::Error),
    #[error("The form backend replied with a malformed acknowledgment.")]
    MalformedAcknowledgment(#[source] serde_json::Error),
    #[error("The form backend replied {0} with a null acknowledgment.")]
    NullAcknowledgment(u16),
}

impl std::fmt::Debug for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl FormClient {
    pub fn new(settings: &FormBackendSettings) -> Result<Self, anyhow::Error> {
        let endpoint = settings
            .endpoint()
            .with_context(|| format!("Invalid form backend url {}", settings.base_url))?;
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .context("Failed to build the form backend http client.")?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[tracing::instrument(
        name = "Send a contact submission to the form backend",
        skip(self, submission),
        fields(endpoint = %self.endpoint, contact_email = %submission.email)
    )]
    pub async fn send_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<Acknowledgment, TransportError> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .form(&submission.form_body())
            .send()
            .await
            .map_err(TransportError::Unreachable)?;
        let status = response.status().as_u16();
        tracing::info!(status, "Form backend responded");

        let raw_body = response.bytes().await.map_err(TransportError::Unreachable)?;
        let body: Value =
            serde_json::from_slice(&raw_body).map_err(TransportError::MalformedAcknowledgment)?;
        tracing::debug!(?body, "Form backend acknowledgment");

        // A 200 settles the outcome without looking at the body.
        let ok = match &body {
            Value::Object(fields) => fields.get("ok").and_then(Value::as_bool).unwrap_or(false),
            Value::Null if status != 200 => return Err(TransportError::NullAcknowledgment(status)),
            _ => false,
        };
        Ok(Acknowledgment { status, ok })
    }
}
