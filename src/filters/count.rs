use super::criteria::FilterCriteria;

/// Number of filter dimensions that differ from their defaults.
///
/// Each numeric field is compared against its own default. The nested
/// `property_age` range counts once when either bound moved.
pub fn active_filter_count(criteria: &FilterCriteria) -> usize {
    let defaults = &FilterCriteria::DEFAULT;

    let dimensions = [
        !criteria.query.trim().is_empty(),
        criteria.min_price != defaults.min_price,
        criteria.max_price != defaults.max_price,
        !criteria.property_types.is_empty(),
        criteria.min_beds != defaults.min_beds,
        criteria.min_baths != defaults.min_baths,
        criteria.min_square_feet != defaults.min_square_feet,
        criteria.max_square_feet != defaults.max_square_feet,
        !criteria.school_districts.is_empty(),
        !criteria.neighborhoods.is_empty(),
        criteria.max_commute_time != defaults.max_commute_time,
        criteria.property_age != defaults.property_age,
        !criteria.features.is_empty(),
    ];

    dimensions.iter().filter(|active| **active).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::criteria::{FilterUpdate, PropertyAge};
    use std::collections::BTreeSet;

    #[test]
    fn test_default_counts_zero() {
        assert_eq!(active_filter_count(&FilterCriteria::default()), 0);
    }

    #[test]
    fn test_property_types_and_min_beds() {
        let mut criteria = FilterCriteria::default();
        criteria.update(FilterUpdate::PropertyTypes(
            ["house".to_string()].into_iter().collect(),
        ));
        criteria.update(FilterUpdate::MinBeds(2.0));
        assert_eq!(active_filter_count(&criteria), 2);
    }

    #[test]
    fn test_whitespace_query_is_inactive() {
        let mut criteria = FilterCriteria::default();
        criteria.update(FilterUpdate::Query("   ".to_string()));
        assert_eq!(active_filter_count(&criteria), 0);
        // ...but still differs structurally from the default
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn test_numeric_fields_compare_to_own_default() {
        let mut criteria = FilterCriteria::default();
        // 0 is the default for min fields, not for max fields
        criteria.update(FilterUpdate::MaxSquareFeet(0));
        criteria.update(FilterUpdate::MinPrice(5_000_000.0));
        assert_eq!(active_filter_count(&criteria), 2);

        criteria.update(FilterUpdate::MaxCommuteTime(30.0));
        assert_eq!(active_filter_count(&criteria), 3);
    }

    #[test]
    fn test_property_age_counts_once() {
        let mut criteria = FilterCriteria::default();
        criteria.update(FilterUpdate::PropertyAge(PropertyAge { min: 10, max: 50 }));
        assert_eq!(active_filter_count(&criteria), 1);
    }

    #[test]
    fn test_every_dimension_active() {
        let mut criteria = FilterCriteria::default();
        let one = |s: &str| -> BTreeSet<String> { [s.to_string()].into_iter().collect() };
        for update in [
            FilterUpdate::Query("loft".to_string()),
            FilterUpdate::MinPrice(1.0),
            FilterUpdate::MaxPrice(2.0),
            FilterUpdate::PropertyTypes(one("condo")),
            FilterUpdate::MinBeds(1.0),
            FilterUpdate::MinBaths(1.0),
            FilterUpdate::MinSquareFeet(1),
            FilterUpdate::MaxSquareFeet(2),
            FilterUpdate::SchoolDistricts(one("Palo Alto Unified")),
            FilterUpdate::Neighborhoods(one("SoHo")),
            FilterUpdate::MaxCommuteTime(15.0),
            FilterUpdate::PropertyAge(PropertyAge { min: 0, max: 10 }),
            FilterUpdate::Features(one("Fireplace")),
        ] {
            criteria.update(update);
        }
        assert_eq!(active_filter_count(&criteria), 13);
    }
}
