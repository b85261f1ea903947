use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_kernel::DocumentId;

use super::Document;

/// A quote form as configured in the provider's form builder. Each entry
/// in `fields` is a block tagged with its kind.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Form {
    pub id: DocumentId,
    pub title: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(rename = "submitButtonLabel")]
    pub submit_button_label: Option<String>,
    #[serde(rename = "confirmationType", default)]
    pub confirmation_type: ConfirmationType,
    /// Rich text tree shown after a successful submission.
    #[serde(rename = "confirmationMessage")]
    pub confirmation_message: Option<Value>,
    pub redirect: Option<RedirectTarget>,
}

impl Document for Form {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfirmationType {
    #[default]
    #[serde(rename = "message")]
    Message,
    #[serde(rename = "redirect")]
    Redirect,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RedirectTarget {
    pub url: String,
}

/// The block kinds the form builder can emit. Unknown kinds fail
/// deserialization rather than being silently dropped.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "blockType")]
pub enum FormField {
    #[serde(rename = "text")]
    Text(TextInput),
    #[serde(rename = "textarea")]
    Textarea(TextInput),
    #[serde(rename = "email")]
    Email(TextInput),
    #[serde(rename = "select")]
    Select(SelectInput),
    #[serde(rename = "checkbox")]
    Checkbox(CheckboxInput),
    #[serde(rename = "message")]
    Message(MessageBlock),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TextInput {
    pub name: String,
    pub label: Option<String>,
    /// Column width hint as a percentage, when the form lays fields out
    /// side by side.
    pub width: Option<f64>,
    #[serde(rename = "defaultValue")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectInput {
    pub name: String,
    pub label: Option<String>,
    pub width: Option<f64>,
    #[serde(rename = "defaultValue")]
    pub default_value: Option<String>,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckboxInput {
    pub name: String,
    pub label: Option<String>,
    pub width: Option<f64>,
    #[serde(rename = "defaultValue")]
    pub default_value: Option<bool>,
    #[serde(default)]
    pub required: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MessageBlock {
    pub message: Option<Value>,
}

impl FormField {
    /// The submission key for this field. Message blocks collect nothing
    /// and so have no name.
    pub fn name(&self) -> Option<&str> {
        match self {
            FormField::Text(field) | FormField::Textarea(field) | FormField::Email(field) => {
                Some(&field.name)
            }
            FormField::Select(field) => Some(&field.name),
            FormField::Checkbox(field) => Some(&field.name),
            FormField::Message(_) => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            FormField::Text(field) | FormField::Textarea(field) | FormField::Email(field) => {
                field.label.as_deref()
            }
            FormField::Select(field) => field.label.as_deref(),
            FormField::Checkbox(field) => field.label.as_deref(),
            FormField::Message(_) => None,
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            FormField::Text(field) | FormField::Textarea(field) | FormField::Email(field) => {
                field.required
            }
            FormField::Select(field) => field.required,
            FormField::Checkbox(field) => field.required,
            FormField::Message(_) => false,
        }
    }

    /// Whether the field collects a value from the visitor.
    pub fn is_input(&self) -> bool {
        !matches!(self, FormField::Message(_))
    }
}
