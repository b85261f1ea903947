use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared_kernel::{non_empty_string, DocumentId};

use super::locations::District;
use super::media::Media;
use super::{Document, Linked};

non_empty_string!(FacilitySlugInner);

lazy_static! {
    static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
}

/// Url key of a facility page, e.g. `kwun-tong-storage`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FacilitySlug(FacilitySlugInner);

impl FacilitySlug {
    pub fn inner(&self) -> String {
        self.0.inner()
    }
}

impl TryFrom<String> for FacilitySlug {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let non_empty_string = FacilitySlugInner::try_from(value)?;

        let is_valid = SLUG_REGEX.is_match(non_empty_string.as_ref());
        if is_valid {
            return Ok(FacilitySlug(non_empty_string));
        }
        Err(format!("{} is an invalid slug", non_empty_string.as_ref()))
    }
}

impl AsRef<str> for FacilitySlug {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FacilityImage {
    pub image: Linked<Media>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FacilityFeature {
    pub feature: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AvailableSize {
    pub size: String,
    pub price: Option<String>,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapPoint {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// A storage facility. Its primary district decides which location it
/// belongs to, while `nearby_districts` widens the district filter match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StorageFacility {
    pub id: DocumentId,
    pub name: String,
    pub district: Linked<District>,
    pub address: String,
    /// Rich text tree, kept as raw JSON for the renderer.
    pub description: Option<Value>,
    #[serde(default)]
    pub images: Vec<FacilityImage>,
    #[serde(default)]
    pub features: Vec<FacilityFeature>,
    #[serde(rename = "availableSizes", default)]
    pub available_sizes: Vec<AvailableSize>,
    #[serde(rename = "contactNumber")]
    pub contact_number: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "openingHours")]
    pub opening_hours: Option<String>,
    #[serde(rename = "mapLocation")]
    pub map_location: Option<MapPoint>,
    pub slug: String,
    #[serde(rename = "nearbyDistricts", default)]
    pub nearby_districts: Vec<Linked<District>>,
}

impl StorageFacility {
    pub fn nearby_district_ids(&self) -> impl Iterator<Item = &DocumentId> {
        self.nearby_districts.iter().map(Linked::document_id)
    }
}

impl Document for StorageFacility {
    fn id(&self) -> &DocumentId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::{FacilitySlug, StorageFacility};
    use rstest::rstest;
    use serde_json::json;
    use shared_kernel::DocumentId;

    #[test]
    fn well_formed_slugs_are_accepted() {
        let slug = FacilitySlug::try_from("kwun-tong-storage".to_string()).unwrap();
        assert_eq!(slug.as_ref(), "kwun-tong-storage");
    }

    #[rstest]
    #[case::blank("   ")]
    #[case::uppercase("Kwun-Tong")]
    #[case::spaces("kwun tong")]
    #[case::trailing_hyphen("kwun-tong-")]
    #[case::path_segment("facilities/kwun-tong")]
    fn malformed_slugs_are_rejected(#[case] raw: &str) {
        let result = FacilitySlug::try_from(raw.to_string());
        assert!(result.is_err());
    }

    #[test]
    fn facility_parses_with_unresolved_district_relationships() {
        let facility: StorageFacility = serde_json::from_value(json!({
            "id": 9,
            "name": "Kwun Tong Storage",
            "district": 3,
            "address": "123 Hoi Yuen Road",
            "slug": "kwun-tong-storage",
            "nearbyDistricts": [4, 5]
        }))
        .unwrap();

        assert_eq!(facility.district.document_id(), &DocumentId::from(3));
        let nearby = facility.nearby_district_ids().collect::<Vec<_>>();
        assert_eq!(nearby, vec![&DocumentId::from(4), &DocumentId::from(5)]);
    }
}
