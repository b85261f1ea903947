use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_kernel::DocumentId;

use super::media::Media;
use super::{Document, Linked};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigationLink {
    pub id: DocumentId,
    pub label: String,
    pub url: String,
}

impl Document for NavigationLink {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuickLink {
    pub id: DocumentId,
    pub title: String,
    pub url: String,
    pub icon: Option<Linked<Media>>,
    #[serde(default)]
    pub order: i64,
}

impl Document for QuickLink {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AboutUs {
    pub id: DocumentId,
    pub title: String,
    /// Rich text tree, kept as raw JSON for the renderer.
    pub content: Option<Value>,
    pub image: Option<Linked<Media>>,
}

impl Document for AboutUs {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceFeature {
    pub feature: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Service {
    pub id: DocumentId,
    pub title: String,
    pub image: Option<Linked<Media>>,
    #[serde(default)]
    pub features: Vec<ServiceFeature>,
}

impl Document for Service {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}
