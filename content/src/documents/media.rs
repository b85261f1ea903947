use serde::{Deserialize, Serialize};
use shared_kernel::DocumentId;

use super::Document;

/// An uploaded asset. The provider returns `url` relative to its own host
/// when local storage is used, so it stays an opaque string here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Media {
    pub id: DocumentId,
    pub alt: Option<String>,
    pub url: Option<String>,
}

impl Document for Media {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}
