use std::collections::HashSet;

use content::documents::facilities::StorageFacility;
use content::documents::locations::Location;
use itertools::Itertools;
use shared_kernel::DocumentId;

/// Applies the two-stage facility filter.
///
/// With a location selected, only facilities whose primary district belongs
/// to that location's district set remain. With a district also selected,
/// a facility stays visible when that district is its primary district or
/// one of its nearby districts. Absent selections impose no restriction.
///
/// Relative order of `facilities` is preserved. A selected location that
/// does not exist has an empty district set, so nothing is visible.
pub fn visible_facilities<'a>(
    locations: &[Location],
    facilities: &'a [StorageFacility],
    selected_location: Option<&DocumentId>,
    selected_district: Option<&DocumentId>,
) -> Vec<&'a StorageFacility> {
    let location_district_ids: Option<HashSet<&DocumentId>> =
        selected_location.map(|location_id| {
            locations
                .iter()
                .find(|location| &location.id == location_id)
                .map(|location| location.district_ids().collect())
                .unwrap_or_default()
        });

    facilities
        .iter()
        .filter(|facility| match &location_district_ids {
            Some(district_ids) => district_ids.contains(facility.district.document_id()),
            None => true,
        })
        .filter(|facility| match selected_district {
            Some(district_id) => {
                facility.district.document_id() == district_id
                    || facility
                        .nearby_district_ids()
                        .any(|nearby_id| nearby_id == district_id)
            }
            None => true,
        })
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use content::documents::facilities::StorageFacility;
    use content::documents::locations::Location;
    use itertools::Itertools;
    use rstest::rstest;
    use serde_json::json;
    use shared_kernel::DocumentId;

    use super::visible_facilities;

    fn hong_kong_fixture() -> (Vec<Location>, Vec<StorageFacility>) {
        let locations = serde_json::from_value(json!([
            {
                "id": "HK",
                "name": "Hong Kong",
                "districts": [
                    { "id": "CEN", "name": "Central" },
                    { "id": "TST", "name": "Tsim Sha Tsui" }
                ]
            },
            {
                "id": "MO",
                "name": "Macau",
                "districts": [
                    { "id": "TAI", "name": "Taipa" }
                ]
            }
        ]))
        .unwrap();
        let facilities = serde_json::from_value(json!([
            {
                "id": "f1",
                "name": "Central Storage",
                "district": { "id": "CEN", "name": "Central" },
                "address": "1 Queen's Road",
                "slug": "central-storage"
            },
            {
                "id": "f2",
                "name": "Tsim Sha Tsui Storage",
                "district": { "id": "TST", "name": "Tsim Sha Tsui" },
                "address": "2 Nathan Road",
                "slug": "tsim-sha-tsui-storage",
                "nearbyDistricts": [{ "id": "CEN", "name": "Central" }]
            },
            {
                "id": "f3",
                "name": "Taipa Storage",
                "district": { "id": "TAI", "name": "Taipa" },
                "address": "3 Rua do Cunha",
                "slug": "taipa-storage"
            }
        ]))
        .unwrap();
        (locations, facilities)
    }

    #[rstest]
    #[case::no_district_restriction(None, vec!["f1", "f2"])]
    #[case::nearby_districts_count_as_a_match(Some("CEN"), vec!["f1", "f2"])]
    #[case::primary_district_only(Some("TST"), vec!["f2"])]
    fn facilities_match_on_primary_or_nearby_district(
        #[case] district: Option<&str>,
        #[case] expected: Vec<&str>,
    ) {
        let (locations, facilities) = hong_kong_fixture();
        let location = DocumentId::from("HK");
        let district = district.map(DocumentId::from);

        let visible =
            visible_facilities(&locations, &facilities, Some(&location), district.as_ref());

        let ids: Vec<&str> = visible
            .iter()
            .map(|facility| facility.id.as_ref())
            .collect_vec();
        assert_eq!(ids, expected);
    }

    #[test]
    fn no_location_selection_shows_every_facility() {
        let (locations, facilities) = hong_kong_fixture();
        let visible = visible_facilities(&locations, &facilities, None, None);
        assert_eq!(visible.len(), facilities.len());
    }

    #[test]
    fn an_unknown_location_matches_nothing() {
        let (locations, facilities) = hong_kong_fixture();
        let location = DocumentId::from("SG");
        let visible = visible_facilities(&locations, &facilities, Some(&location), None);
        assert!(visible.is_empty());
    }

    #[test]
    fn facility_order_is_preserved() {
        let (locations, facilities) = hong_kong_fixture();
        let location = DocumentId::from("HK");
        let visible = visible_facilities(&locations, &facilities, Some(&location), None);
        let ids: Vec<&str> = visible
            .iter()
            .map(|facility| facility.id.as_ref())
            .collect_vec();
        assert_eq!(ids, vec!["f1", "f2"]);
    }
}
