use content::documents::facilities::StorageFacility;
use content::documents::locations::{District, Location};
use content::documents::Linked;
use itertools::Itertools;
use shared_kernel::DocumentId;

use crate::visibility::visible_facilities;

/// Interactive state over the facility filter: one selected location whose
/// districts become the refinement chips, plus an optional selected
/// district.
#[derive(Debug)]
pub struct FacilityBrowser {
    locations: Vec<Location>,
    facilities: Vec<StorageFacility>,
    selected_location: Option<DocumentId>,
    selected_district: Option<DocumentId>,
}

impl FacilityBrowser {
    /// The first location in page order starts selected, mirroring the
    /// initial render. With no locations at all, no restriction applies.
    pub fn new(locations: Vec<Location>, facilities: Vec<StorageFacility>) -> Self {
        let selected_location = locations.first().map(|location| location.id.clone());
        FacilityBrowser {
            locations,
            facilities,
            selected_location,
            selected_district: None,
        }
    }

    pub fn selected_location(&self) -> Option<&DocumentId> {
        self.selected_location.as_ref()
    }

    pub fn selected_district(&self) -> Option<&DocumentId> {
        self.selected_district.as_ref()
    }

    /// Switching to a different location clears the district refinement.
    /// Re-selecting the current location keeps it.
    pub fn select_location(&mut self, location_id: DocumentId) {
        if self.selected_location.as_ref() == Some(&location_id) {
            return;
        }
        self.selected_location = Some(location_id);
        self.selected_district = None;
    }

    /// Selecting a district that is not among the current location's chips
    /// is ignored.
    pub fn select_district(&mut self, district_id: DocumentId) {
        let offered = self
            .available_districts()
            .iter()
            .any(|district| district.id == district_id);
        if offered {
            self.selected_district = Some(district_id);
        } else {
            tracing::debug!("district {district_id} is not offered for the selected location");
        }
    }

    /// The "All" chip.
    pub fn clear_district(&mut self) {
        self.selected_district = None;
    }

    /// District chips for the selected location, skipping districts the
    /// provider left unresolved.
    pub fn available_districts(&self) -> Vec<&District> {
        self.selected_location
            .as_ref()
            .and_then(|location_id| {
                self.locations
                    .iter()
                    .find(|location| &location.id == location_id)
            })
            .map(|location| {
                location
                    .districts
                    .iter()
                    .filter_map(Linked::resolved)
                    .collect_vec()
            })
            .unwrap_or_default()
    }

    /// Facilities visible under the current selection, in their original
    /// order. An empty result means "no facilities found", not a failure.
    pub fn visible(&self) -> Vec<&StorageFacility> {
        visible_facilities(
            &self.locations,
            &self.facilities,
            self.selected_location.as_ref(),
            self.selected_district.as_ref(),
        )
    }

    /// Display names for a facility's nearby districts, resolved against
    /// the selected location's chips. Districts outside them are omitted.
    pub fn nearby_district_names<'s>(&'s self, facility: &StorageFacility) -> Vec<&'s str> {
        let available = self.available_districts();
        facility
            .nearby_district_ids()
            .filter_map(|nearby_id| {
                available
                    .iter()
                    .find(|district| &district.id == nearby_id)
                    .map(|district| district.name.as_str())
            })
            .collect_vec()
    }
}
