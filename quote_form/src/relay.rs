use std::collections::HashMap;

use anyhow::Context;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use serde_json::{json, Value};
use shared_kernel::http_client::{HttpClient, HttpClientError};
use thiserror::Error;
use url::Url;

use crate::config::SETTINGS_CONFIG;
use crate::data_transfer::Submission;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Internal error")]
    InternalError(#[from] anyhow::Error),
    #[error("The content provider rejected the submission")]
    Rejected { status: u16 },
}

/// A submission accepted by the site endpoint, carried to the provider
/// exactly as it arrived.
#[derive(Clone, Debug)]
pub struct SubmissionPayload {
    pub form: Value,
    pub submission_data: Value,
}

/// Provider create responses wrap the stored document.
#[derive(Deserialize, Debug)]
struct CreatedSubmission {
    doc: Submission,
}

/// Server-side half of the submit flow: forwards accepted submissions
/// into the provider's form-submissions collection, attaching the api
/// key when one is configured.
#[derive(Clone)]
pub struct SubmissionRelay {
    create_url: Url,
    api_key: Option<Secret<String>>,
}

impl SubmissionRelay {
    pub fn new() -> anyhow::Result<Self> {
        match &SETTINGS_CONFIG.provider.api_key {
            Some(api_key) => Self::with_credentials(&SETTINGS_CONFIG.provider.host, api_key.clone()),
            None => Self::with_host(&SETTINGS_CONFIG.provider.host),
        }
    }

    pub fn with_host(host: &str) -> anyhow::Result<Self> {
        let host = host.trim_end_matches('/');
        let create_url = Url::parse(&format!("{host}/api/form-submissions"))
            .context("Failed to parse url")?;
        Ok(SubmissionRelay {
            create_url,
            api_key: None,
        })
    }

    pub fn with_credentials(host: &str, api_key: Secret<String>) -> anyhow::Result<Self> {
        let relay = Self::with_host(host)?;
        Ok(SubmissionRelay {
            api_key: Some(api_key),
            ..relay
        })
    }

    #[tracing::instrument(err, skip(self, payload), level = "info")]
    pub async fn forward(&self, payload: SubmissionPayload) -> Result<Submission, RelayError> {
        let mut headers = HashMap::new();
        if let Some(api_key) = &self.api_key {
            headers.insert(
                "Authorization",
                format!("users API-Key {}", api_key.expose_secret()),
            );
        }

        let body = json!({
            "form": payload.form,
            "submissionData": payload.submission_data
        });
        let created: CreatedSubmission =
            HttpClient::post_json(self.create_url.clone(), headers, body)
                .await
                .map_err(|error| match error {
                    HttpClientError::ErrorResponse { status, .. }
                        if (400..500).contains(&status) =>
                    {
                        RelayError::Rejected { status }
                    }
                    other => RelayError::InternalError(other.into()),
                })?;
        Ok(created.doc)
    }
}
