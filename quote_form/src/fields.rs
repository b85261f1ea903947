use std::collections::HashMap;

use content::documents::forms::FormField;
use serde_json::Value;
use shared_kernel::string_key;
use thiserror::Error;

string_key!(FieldName);

/// The visitor's answers keyed by field name, exactly as they will be
/// forwarded as `submissionData`.
pub type SubmissionValues = HashMap<FieldName, Value>;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldError {
    pub field: FieldName,
    pub message: String,
}

/// One entry per failing field, in the order the fields appear on the
/// form.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[error("{}", self.summary())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message to render under one field, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == *field)
            .map(|error| error.message.as_str())
    }

    fn summary(&self) -> String {
        self.errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Seeds the answer map from the fields' configured default values, the
/// state a fresh or reset form starts from.
pub fn initial_values(fields: &[FormField]) -> SubmissionValues {
    let mut values = SubmissionValues::new();
    for field in fields {
        let name = match field.name() {
            Some(name) => FieldName::from(name),
            None => continue,
        };
        match field {
            FormField::Text(input) | FormField::Textarea(input) | FormField::Email(input) => {
                if let Some(default) = &input.default_value {
                    values.insert(name, Value::from(default.clone()));
                }
            }
            FormField::Select(input) => {
                if let Some(default) = &input.default_value {
                    values.insert(name, Value::from(default.clone()));
                }
            }
            FormField::Checkbox(input) => {
                if let Some(default) = input.default_value {
                    values.insert(name, Value::from(default));
                }
            }
            FormField::Message(_) => {}
        }
    }
    values
}

/// Checks the answers against the form definition. A required field
/// fails when its value is missing, null or blank, and a required
/// checkbox must actually be ticked. Email fields must also look like an
/// email address whenever they are filled in.
pub fn validate(fields: &[FormField], values: &SubmissionValues) -> Result<(), ValidationErrors> {
    use validator::validate_email;

    let mut errors = Vec::new();
    for field in fields {
        let name = match field.name() {
            Some(name) => name,
            None => continue,
        };
        let label = field.label().unwrap_or(name);
        let value = values.get(&FieldName::from(name));

        if field.is_required() && is_blank(field, value) {
            errors.push(FieldError {
                field: FieldName::from(name),
                message: format!("{label} is required"),
            });
            continue;
        }

        if let FormField::Email(_) = field {
            if let Some(text) = value.and_then(Value::as_str) {
                if !text.trim().is_empty() && !validate_email(text) {
                    errors.push(FieldError {
                        field: FieldName::from(name),
                        message: format!("{label} must be a valid email address"),
                    });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}

fn is_blank(field: &FormField, value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(Value::Bool(checked)) => matches!(field, FormField::Checkbox(_)) && !checked,
        Some(_) => false,
    }
}
