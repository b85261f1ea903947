use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::facilities::StorageFacility;
use super::forms::Form;
use super::hero::Hero;
use super::locations::Location;
use super::media::Media;
use super::site::{AboutUs, NavigationLink, QuickLink, Service};
use super::size_estimator::SizeEstimator;
use super::Linked;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NavigationItem {
    pub link: Linked<NavigationLink>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuickLinkItem {
    pub link: Linked<QuickLink>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocationItem {
    pub location: Linked<Location>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceItem {
    pub service: Linked<Service>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FacilityItem {
    pub facility: Linked<StorageFacility>,
}

/// The single home page document. Every relationship is optional so that a
/// partially configured page still renders, with the affected sections
/// omitted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HomePage {
    pub logo: Option<Linked<Media>>,
    #[serde(default)]
    pub navigation: Vec<NavigationItem>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub hero: Option<Linked<Hero>>,
    #[serde(rename = "quickLinks", default)]
    pub quick_links: Vec<QuickLinkItem>,
    #[serde(default)]
    pub locations: Vec<LocationItem>,
    #[serde(rename = "aboutUs")]
    pub about_us: Option<Linked<AboutUs>>,
    #[serde(rename = "servicesTitle")]
    pub services_title: Option<String>,
    #[serde(default)]
    pub services: Vec<ServiceItem>,
    #[serde(rename = "sizeEstimator")]
    pub size_estimator: Option<Linked<SizeEstimator>>,
    #[serde(rename = "featuredFacilities", default)]
    pub featured_facilities: Vec<FacilityItem>,
    #[serde(rename = "contactFormTitle")]
    pub contact_form_title: Option<String>,
    #[serde(rename = "quoteForm")]
    pub quote_form: Option<Linked<Form>>,
}

impl HomePage {
    /// Locations populated deeply enough to be usable, in page order.
    /// Unresolved entries are skipped.
    pub fn resolved_locations(&self) -> Vec<&Location> {
        self.locations
            .iter()
            .filter_map(|item| item.location.resolved())
            .collect_vec()
    }

    /// Featured facilities populated deeply enough to be usable.
    /// Unresolved entries are skipped.
    pub fn resolved_facilities(&self) -> Vec<&StorageFacility> {
        self.featured_facilities
            .iter()
            .filter_map(|item| item.facility.resolved())
            .collect_vec()
    }

    pub fn resolved_hero(&self) -> Option<&Hero> {
        self.hero.as_ref().and_then(Linked::resolved)
    }
}
