use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_kernel::DocumentId;

/// A stored submission as the provider returns it after creation. Only
/// the id is guaranteed; the rest is echoed back to the site untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Submission {
    pub id: DocumentId,
    #[serde(rename = "submissionData", skip_serializing_if = "Option::is_none")]
    pub submission_data: Option<Value>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}
