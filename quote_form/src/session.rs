use content::documents::forms::Form;
use serde_json::Value;

use crate::fields::{initial_values, FieldName, SubmissionValues, ValidationErrors};
use crate::submit::{Confirmation, QuoteFormClient, SubmitQuoteError};

/// Where the visitor is in the submit flow.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    Editing { errors: Option<ValidationErrors> },
    Submitting,
    Succeeded { confirmation: Confirmation },
    Failed { message: String },
}

/// Tracks one visitor's pass through a quote form: the answers entered
/// so far and the phase the flow is in. A failed submission keeps the
/// answers so nothing typed is lost; success clears them back to the
/// form's defaults.
pub struct QuoteFormSession {
    form: Form,
    values: SubmissionValues,
    phase: Phase,
}

impl QuoteFormSession {
    pub fn new(form: Form) -> Self {
        let values = initial_values(&form.fields);
        QuoteFormSession {
            form,
            values,
            phase: Phase::Editing { errors: None },
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn values(&self) -> &SubmissionValues {
        &self.values
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting)
    }

    /// Records one answer. Ignored while a submission is in flight, the
    /// same way inputs are disabled then.
    pub fn enter(&mut self, field: impl Into<FieldName>, value: Value) {
        if self.is_submitting() {
            return;
        }
        self.values.insert(field.into(), value);
    }

    /// Runs the submit flow once. Validation failures return to editing
    /// with per-field messages, transport failures keep the answers and
    /// surface one message, success clears the form.
    pub async fn submit(&mut self, client: &QuoteFormClient) -> &Phase {
        let previous = std::mem::replace(&mut self.phase, Phase::Submitting);
        match client.submit(&self.form, &self.values).await {
            Ok(outcome) => {
                self.values = initial_values(&self.form.fields);
                self.phase = Phase::Succeeded {
                    confirmation: outcome.confirmation,
                };
            }
            Err(SubmitQuoteError::AlreadyInFlight) => {
                // Another submission owns the client, drop this attempt.
                self.phase = previous;
            }
            Err(SubmitQuoteError::Validation(errors)) => {
                self.phase = Phase::Editing {
                    errors: Some(errors),
                };
            }
            Err(error) => {
                self.phase = Phase::Failed {
                    message: error.to_string(),
                };
            }
        }
        &self.phase
    }

    /// The "submit another request" action: back to a blank form.
    pub fn reset(&mut self) {
        self.values = initial_values(&self.form.fields);
        self.phase = Phase::Editing { errors: None };
    }
}

#[cfg(test)]
mod tests {
    use super::{Phase, QuoteFormSession};
    use crate::fields::FieldName;
    use crate::submit::{Confirmation, QuoteFormClient};
    use content::documents::forms::Form;
    use httpmock::prelude::*;
    use serde_json::json;

    fn form() -> Form {
        serde_json::from_value(json!({
            "id": 7,
            "title": "Get A Quote",
            "fields": [
                { "blockType": "text", "name": "fullName", "label": "Full Name", "required": true },
                { "blockType": "select", "name": "location", "label": "Preferred Location", "defaultValue": "hong-kong", "options": [
                    { "label": "Hong Kong", "value": "hong-kong" }
                ]}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn a_fresh_session_starts_editing_with_the_form_defaults() {
        let session = QuoteFormSession::new(form());

        assert_eq!(session.phase(), &Phase::Editing { errors: None });
        assert_eq!(
            session.values().get(&FieldName::from("location")),
            Some(&json!("hong-kong"))
        );
        assert!(!session.is_submitting());
    }

    #[test]
    fn answers_accumulate_while_editing() {
        let mut session = QuoteFormSession::new(form());
        session.enter("fullName", json!("Ada Lovelace"));
        session.enter("fullName", json!("Ada King"));

        assert_eq!(
            session.values().get(&FieldName::from("fullName")),
            Some(&json!("Ada King"))
        );
    }

    #[tokio::test]
    async fn a_successful_submission_clears_the_form() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201).json_body(json!({
                "success": true,
                "submission": { "id": "41" }
            }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let mut session = QuoteFormSession::new(form());
        session.enter("fullName", json!("Ada Lovelace"));

        let phase = session.submit(&client).await;
        assert_eq!(
            phase,
            &Phase::Succeeded {
                confirmation: Confirmation::Message { message: None }
            }
        );
        assert!(session.values().get(&FieldName::from("fullName")).is_none());
        assert_eq!(
            session.values().get(&FieldName::from("location")),
            Some(&json!("hong-kong"))
        );
    }

    #[tokio::test]
    async fn validation_failures_return_to_editing_without_posting() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201);
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let mut session = QuoteFormSession::new(form());

        session.submit(&client).await;
        match session.phase() {
            Phase::Editing {
                errors: Some(errors),
            } => {
                assert_eq!(errors.message_for("fullName"), Some("Full Name is required"));
            }
            other => panic!("expected editing with errors, got {other:?}"),
        }
        assert_eq!(mock.hits(), 0);
    }

    #[tokio::test]
    async fn a_failed_submission_keeps_the_answers() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(400)
                .json_body(json!({ "error": "Missing required fields" }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let mut session = QuoteFormSession::new(form());
        session.enter("fullName", json!("Ada Lovelace"));

        let phase = session.submit(&client).await;
        assert_eq!(
            phase,
            &Phase::Failed {
                message: "Something went wrong. Please try again.".to_owned()
            }
        );
        assert_eq!(
            session.values().get(&FieldName::from("fullName")),
            Some(&json!("Ada Lovelace"))
        );
    }

    #[tokio::test]
    async fn a_retry_after_a_failure_can_succeed() {
        let server = MockServer::start();
        let mut rejection = server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(400).json_body(json!({
                "error": "An error occurred while submitting the form"
            }));
        });

        let client = QuoteFormClient::with_host(&server.base_url()).unwrap();
        let mut session = QuoteFormSession::new(form());
        session.enter("fullName", json!("Ada Lovelace"));

        session.submit(&client).await;
        assert!(matches!(session.phase(), Phase::Failed { .. }));

        rejection.delete();
        server.mock(|when, then| {
            when.method(POST).path("/api/form-submissions");
            then.status(201).json_body(json!({
                "success": true,
                "submission": { "id": "41" }
            }));
        });

        session.submit(&client).await;
        assert!(matches!(session.phase(), Phase::Succeeded { .. }));
    }

    #[test]
    fn reset_returns_to_a_clean_slate() {
        let mut session = QuoteFormSession::new(form());
        session.enter("fullName", json!("Ada Lovelace"));
        session.enter("location", json!("central"));

        session.reset();

        assert_eq!(session.phase(), &Phase::Editing { errors: None });
        assert!(session.values().get(&FieldName::from("fullName")).is_none());
        assert_eq!(
            session.values().get(&FieldName::from("location")),
            Some(&json!("hong-kong"))
        );
    }
}
