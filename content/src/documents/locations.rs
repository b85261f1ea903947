use serde::{Deserialize, Serialize};
use shared_kernel::DocumentId;

use super::media::Media;
use super::{Document, Linked};

/// A district within a city location. Facilities reference districts both
/// as their primary district and as nearby ones.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct District {
    pub id: DocumentId,
    pub name: String,
    pub city: Option<Linked<Location>>,
    #[serde(default)]
    pub order: i64,
}

impl Document for District {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

/// A city-level location grouping the districts shown as filter chips.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub id: DocumentId,
    pub name: String,
    pub image: Option<Linked<Media>>,
    pub url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub districts: Vec<Linked<District>>,
}

impl Location {
    /// Ids of the districts belonging to this location, at any population
    /// depth.
    pub fn district_ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.districts.iter().map(Linked::document_id)
    }
}

impl Document for Location {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}
