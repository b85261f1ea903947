use serde::{Deserialize, Serialize};
use shared_kernel::DocumentId;

use super::media::Media;
use super::{Document, Linked};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SizeOption {
    pub label: String,
    /// Size range in cubic meters, e.g. "0.1-5m³".
    pub size: String,
    #[serde(rename = "isDefault", default)]
    pub is_default: bool,
    pub image: Option<Linked<Media>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SizeEstimator {
    pub id: DocumentId,
    pub title: String,
    #[serde(default)]
    pub sizes: Vec<SizeOption>,
}

impl Document for SizeEstimator {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}
