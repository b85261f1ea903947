use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{anyhow, Context};
use content::documents::forms::{ConfirmationType, Form};
use serde::Deserialize;
use serde_json::{json, Value};
use shared_kernel::http_client::HttpClient;
use thiserror::Error;
use url::Url;

use crate::config::SETTINGS_CONFIG;
use crate::data_transfer::Submission;
use crate::fields::{validate, SubmissionValues, ValidationErrors};

/// What the caller should do once the submission is stored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Confirmation {
    /// Render the configured thank-you content, if the form has any.
    Message { message: Option<Value> },
    /// Navigate to the configured url.
    Redirect { url: String },
}

#[derive(Debug)]
pub struct SubmitOutcome {
    pub submission: Submission,
    pub confirmation: Confirmation,
}

#[derive(Error, Debug)]
pub enum SubmitQuoteError {
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("A submission is already in progress")]
    AlreadyInFlight,
    #[error("Something went wrong. Please try again.")]
    RequestFailed(#[source] anyhow::Error),
}

/// Envelope the submissions endpoint replies with.
#[derive(Deserialize, Debug)]
struct SubmissionAcknowledgement {
    success: bool,
    submission: Option<Submission>,
}

/// Posts completed quote forms to the site's submissions endpoint.
///
/// One client instance serves one rendered form, so at most one
/// submission is allowed in flight at a time. Repeated submit clicks
/// while a request is pending fail immediately without sending anything.
pub struct QuoteFormClient {
    endpoint: Url,
    in_flight: AtomicBool,
}

impl QuoteFormClient {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_host(&SETTINGS_CONFIG.site.host)
    }

    pub fn with_host(host: &str) -> anyhow::Result<Self> {
        let host = host.trim_end_matches('/');
        let endpoint = Url::parse(&format!("{host}/api/form-submissions"))
            .context("Failed to parse url")?;
        Ok(QuoteFormClient {
            endpoint,
            in_flight: AtomicBool::new(false),
        })
    }

    /// Validates the answers and posts them. Validation failures are
    /// returned per field and never reach the network; transport and
    /// server failures collapse into one retryable message.
    #[tracing::instrument(err, skip(self, form, values), level = "info")]
    pub async fn submit(
        &self,
        form: &Form,
        values: &SubmissionValues,
    ) -> Result<SubmitOutcome, SubmitQuoteError> {
        let _in_flight =
            InFlight::begin(&self.in_flight).ok_or(SubmitQuoteError::AlreadyInFlight)?;

        validate(&form.fields, values).map_err(SubmitQuoteError::Validation)?;

        let body = json!({ "form": form.id, "submissionData": values });
        let acknowledgement: SubmissionAcknowledgement =
            HttpClient::post_json(self.endpoint.clone(), HashMap::new(), body)
                .await
                .map_err(|err| SubmitQuoteError::RequestFailed(err.into()))?;

        let submission = match acknowledgement {
            SubmissionAcknowledgement {
                success: true,
                submission: Some(submission),
            } => submission,
            _ => {
                return Err(SubmitQuoteError::RequestFailed(anyhow!(
                    "the submissions endpoint reported failure"
                )))
            }
        };

        Ok(SubmitOutcome {
            confirmation: confirmation_for(form),
            submission,
        })
    }
}

/// The redirect mode only applies when a target url is actually
/// configured; otherwise the form falls back to message mode.
fn confirmation_for(form: &Form) -> Confirmation {
    match (form.confirmation_type, &form.redirect) {
        (ConfirmationType::Redirect, Some(redirect)) => Confirmation::Redirect {
            url: redirect.url.clone(),
        },
        _ => Confirmation::Message {
            message: form.confirmation_message.clone(),
        },
    }
}

/// Holds the in-flight flag for the duration of one submission attempt
/// and releases it however the attempt ends.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn begin(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then(|| InFlight(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::{Confirmation, QuoteFormClient, SubmitQuoteError};
    use crate::fields::{FieldName, SubmissionValues};
    use content::documents::forms::Form;
    use httpmock::prelude::*;
    use serde_json::json;

    fn form(extra: serde_json::Value) -> Form {
        let mut document = json!({
            "id": 7,
            "title": "Get A Quote",
            "fields": [
                { "blockType": "text", "name": "fullName", "label": "Full Name", "required": true },
                { "blockType": "email", "name": "email", "label": "Email", "required": true }
            ]
        });
        document
            .as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(document).unwrap()
    }

    fn answers() -> SubmissionValues {
        SubmissionValues::from([
            (FieldName::from("fullName"), json!("Ada Lovelace")),
            (FieldName::from("email"), json!("ada@example.com")),
        ])
    }

    #[tokio::test]
    async fn valid_answers_are_posted_with_the_form_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/form-submissions")
                .json_body(json!({
                    "form": "7",
                    "submissionData": {
                        "fullName": "Ada Lovelace",
                        "email": "ada@example.com"
                    }
                }));
            then.status(201).json_body(json!({
                "success": true,
                "submission": { "id": 41, "createdAt": "2023-05-04T08:30:00.000Z" }
            }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let outcome = client.submit(&form(json!({})), &answers()).await.unwrap();

        mock.assert();
        assert_eq!(&outcome.submission.id, "41");
        assert_eq!(outcome.confirmation, Confirmation::Message { message: None });
    }

    #[tokio::test]
    async fn the_configured_thank_you_message_is_surfaced() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201).json_body(json!({
                "success": true,
                "submission": { "id": "41" }
            }));
        });

        let message = json!([{ "children": [{ "text": "Thank you for your submission!" }] }]);
        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let outcome = client
            .submit(
                &form(json!({
                    "confirmationType": "message",
                    "confirmationMessage": message.clone()
                })),
                &answers(),
            )
            .await
            .unwrap();

        assert_eq!(
            outcome.confirmation,
            Confirmation::Message {
                message: Some(message)
            }
        );
    }

    #[tokio::test]
    async fn redirect_mode_returns_the_configured_url() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201).json_body(json!({
                "success": true,
                "submission": { "id": "41" }
            }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let outcome = client
            .submit(
                &form(json!({
                    "confirmationType": "redirect",
                    "redirect": { "url": "/thank-you" }
                })),
                &answers(),
            )
            .await
            .unwrap();

        assert_eq!(
            outcome.confirmation,
            Confirmation::Redirect {
                url: "/thank-you".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn redirect_mode_without_a_url_falls_back_to_message_mode() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201).json_body(json!({
                "success": true,
                "submission": { "id": "41" }
            }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let outcome = client
            .submit(&form(json!({ "confirmationType": "redirect" })), &answers())
            .await
            .unwrap();

        assert_eq!(outcome.confirmation, Confirmation::Message { message: None });
    }

    #[tokio::test]
    async fn invalid_answers_never_reach_the_network() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201);
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let result = client
            .submit(&form(json!({})), &SubmissionValues::new())
            .await;

        let error = result.unwrap_err();
        match error {
            SubmitQuoteError::Validation(errors) => {
                assert_eq!(errors.message_for("fullName"), Some("Full Name is required"));
                assert_eq!(errors.message_for("email"), Some("Email is required"));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
        assert_eq!(mock.hits(), 0);
    }

    #[tokio::test]
    async fn endpoint_failures_collapse_into_one_retryable_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(400)
                .json_body(json!({ "error": "Missing required fields" }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let error = client.submit(&form(json!({})), &answers()).await.unwrap_err();

        assert!(matches!(error, SubmitQuoteError::RequestFailed(_)));
        assert_eq!(error.to_string(), "Something went wrong. Please try again.");
    }

    #[tokio::test]
    async fn an_unsuccessful_acknowledgement_is_a_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(200).json_body(json!({ "success": false }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let error = client.submit(&form(json!({})), &answers()).await.unwrap_err();

        assert_eq!(error.to_string(), "Something went wrong. Please try again.");
    }

    #[tokio::test]
    async fn only_one_submission_runs_at_a_time() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201).json_body(json!({
                "success": true,
                "submission": { "id": "41" }
            }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let form = form(json!({}));
        let values = answers();

        let (first, second) =
            tokio::join!(client.submit(&form, &values), client.submit(&form, &values));

        assert!(first.is_ok());
        assert!(matches!(
            second.unwrap_err(),
            SubmitQuoteError::AlreadyInFlight
        ));
        assert_eq!(mock.hits(), 1);
    }

    #[tokio::test]
    async fn the_guard_releases_after_each_attempt() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201).json_body(json!({
                "success": true,
                "submission": { "id": "41" }
            }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let form = form(json!({}));
        let values = answers();

        client.submit(&form, &values).await.unwrap();
        client.submit(&form, &values).await.unwrap();
    }
}
