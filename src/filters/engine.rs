//! Multi-predicate listing filter.
//!
//! A listing passes when every active predicate accepts it. A criteria field
//! sitting at its default value is inactive and accepts everything, so the
//! default criteria keep every listing. Predicates over optional listing data
//! accept listings that lack that data.

use super::criteria::{FilterCriteria, UNBOUNDED_COMMUTE_MINUTES};
use crate::models::Listing;
use chrono::{Datelike, Utc};
use std::collections::BTreeSet;
use tracing::debug;

/// Filter `listings` against `criteria`, using the current UTC year for
/// property age.
pub fn apply(criteria: &FilterCriteria, listings: &[Listing]) -> Vec<Listing> {
    apply_at(criteria, listings, Utc::now().year())
}

/// Filter `listings` against `criteria` with an explicit reference year.
///
/// Preserves the relative order of the input.
pub fn apply_at(criteria: &FilterCriteria, listings: &[Listing], current_year: i32) -> Vec<Listing> {
    let query = criteria.query.to_lowercase();
    let features: Vec<String> = criteria.features.iter().map(|f| f.to_lowercase()).collect();

    let filtered: Vec<Listing> = listings
        .iter()
        .filter(|listing| matches_prepared(criteria, &query, &features, listing, current_year))
        .cloned()
        .collect();

    debug!(
        "Filtered {} listings down to {} (active filters: {})",
        listings.len(),
        filtered.len(),
        criteria.has_active_filters()
    );

    filtered
}

/// Whether a single listing satisfies every active predicate
pub fn matches(criteria: &FilterCriteria, listing: &Listing, current_year: i32) -> bool {
    let query = criteria.query.to_lowercase();
    let features: Vec<String> = criteria.features.iter().map(|f| f.to_lowercase()).collect();
    matches_prepared(criteria, &query, &features, listing, current_year)
}

fn matches_prepared(
    criteria: &FilterCriteria,
    query: &str,
    features: &[String],
    listing: &Listing,
    current_year: i32,
) -> bool {
    let defaults = &FilterCriteria::DEFAULT;

    matches_query(query, listing)
        && listing.price >= criteria.min_price
        && below_max(listing.price, criteria.max_price, defaults.max_price)
        && matches_property_type(&criteria.property_types, listing)
        && listing.bedrooms >= criteria.min_beds
        && listing.bathrooms >= criteria.min_baths
        && listing.square_feet >= criteria.min_square_feet
        && below_max(
            listing.square_feet,
            criteria.max_square_feet,
            defaults.max_square_feet,
        )
        && member_or_absent(&criteria.school_districts, listing.school_district.as_deref())
        && member_or_absent(&criteria.neighborhoods, listing.neighborhood.as_deref())
        && matches_commute(criteria.max_commute_time, listing.commute_time)
        && matches_age(criteria, listing, current_year)
        && matches_features(features, &listing.features)
}

/// `query` must already be lowercased
fn matches_query(query: &str, listing: &Listing) -> bool {
    query.is_empty() || listing.search_text().to_lowercase().contains(query)
}

/// Upper bounds at or above their default do not cap the value
fn below_max<T: PartialOrd>(value: T, max: T, default_max: T) -> bool {
    max >= default_max || value <= max
}

fn matches_property_type(types: &BTreeSet<String>, listing: &Listing) -> bool {
    types.is_empty() || types.contains(&listing.property_type)
}

/// Missing listing data passes through
fn member_or_absent(allowed: &BTreeSet<String>, value: Option<&str>) -> bool {
    match value {
        Some(value) if !allowed.is_empty() => allowed.contains(value),
        _ => true,
    }
}

fn matches_commute(max_commute_time: f64, commute_time: Option<f64>) -> bool {
    if max_commute_time >= UNBOUNDED_COMMUTE_MINUTES {
        return true;
    }
    commute_time.map_or(true, |minutes| minutes <= max_commute_time)
}

fn matches_age(criteria: &FilterCriteria, listing: &Listing, current_year: i32) -> bool {
    listing
        .age(current_year)
        .map_or(true, |age| criteria.property_age.admits(age))
}

/// Every requested feature must be a substring of at least one listing
/// feature. `requested` must already be lowercased.
fn matches_features(requested: &[String], features: &[String]) -> bool {
    if requested.is_empty() {
        return true;
    }
    let features: Vec<String> = features.iter().map(|f| f.to_lowercase()).collect();
    requested
        .iter()
        .all(|wanted| features.iter().any(|feature| feature.contains(wanted.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::criteria::{FilterUpdate, PropertyAge};
    use pretty_assertions::assert_eq;

    const YEAR: i32 = 2024;

    fn listing(id: u64, price: f64) -> Listing {
        Listing {
            id,
            title: format!("Listing {}", id),
            address: format!("{} Ocean Ave", id),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            zip_code: None,
            price,
            property_type: "house".to_string(),
            bedrooms: 3.0,
            bathrooms: 2.0,
            square_feet: 1800,
            description: "Bright and open".to_string(),
            features: vec![],
            images: vec![],
            listing_date: None,
            status: None,
            school_district: None,
            neighborhood: None,
            commute_time: None,
            year_built: None,
        }
    }

    fn ids(listings: &[Listing]) -> Vec<u64> {
        listings.iter().map(|l| l.id).collect()
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn criteria_with(update: FilterUpdate) -> FilterCriteria {
        let mut criteria = FilterCriteria::default();
        criteria.update(update);
        criteria
    }

    #[test]
    fn test_default_criteria_keeps_everything_in_order() {
        let listings = vec![listing(3, 100.0), listing(1, 200.0), listing(2, 300.0)];
        let result = apply_at(&FilterCriteria::default(), &listings, YEAR);
        assert_eq!(result, listings);
    }

    #[test]
    fn test_empty_input() {
        let criteria = criteria_with(FilterUpdate::MinBeds(2.0));
        assert!(apply_at(&criteria, &[], YEAR).is_empty());
    }

    #[test]
    fn test_price_range_inclusive() {
        let listings = vec![
            listing(1, 100_000.0),
            listing(2, 250_000.0),
            listing(3, 500_000.0),
            listing(4, 750_000.0),
        ];
        let mut criteria = FilterCriteria::default();
        criteria.update(FilterUpdate::MinPrice(200_000.0));
        criteria.update(FilterUpdate::MaxPrice(600_000.0));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![2, 3]);

        criteria.update(FilterUpdate::MinPrice(250_000.0));
        criteria.update(FilterUpdate::MaxPrice(500_000.0));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![2, 3]);
    }

    #[test]
    fn test_default_max_bounds_do_not_cap() {
        let mut mansion = listing(1, 12_000_000.0);
        mansion.square_feet = 15_000;
        assert!(matches(&FilterCriteria::default(), &mansion, YEAR));

        let criteria = criteria_with(FilterUpdate::MaxPrice(4_999_999.0));
        assert!(!matches(&criteria, &mansion, YEAR));

        let criteria = criteria_with(FilterUpdate::MaxSquareFeet(9_999));
        assert!(!matches(&criteria, &mansion, YEAR));
    }

    #[test]
    fn test_max_bounds_above_default_stay_uncapped() {
        let mut mansion = listing(1, 12_000_000.0);
        mansion.square_feet = 15_000;
        mansion.year_built = Some(1880);

        for update in [
            FilterUpdate::MaxPrice(5_000_001.0),
            FilterUpdate::MaxPrice(5_000_000.0),
            FilterUpdate::MaxSquareFeet(10_001),
            FilterUpdate::MaxSquareFeet(10_000),
            FilterUpdate::PropertyAge(PropertyAge { min: 0, max: 101 }),
            FilterUpdate::PropertyAge(PropertyAge { min: -5, max: 100 }),
        ] {
            let criteria = criteria_with(update.clone());
            assert!(matches(&criteria, &mansion, YEAR), "{:?}", update);
        }
    }

    #[test]
    fn test_single_age_bound_applies_alone() {
        let mut old = listing(1, 1.0);
        old.year_built = Some(1880);
        let mut future = listing(2, 1.0);
        future.year_built = Some(2026);

        // Only the lower bound moved: the 144-year-old house passes
        let criteria = criteria_with(FilterUpdate::PropertyAge(PropertyAge { min: 1, max: 100 }));
        assert!(matches(&criteria, &old, YEAR));
        assert!(!matches(&criteria, &future, YEAR));

        let criteria = criteria_with(FilterUpdate::PropertyAge(PropertyAge { min: 0, max: 99 }));
        assert!(!matches(&criteria, &old, YEAR));
        assert!(matches(&criteria, &future, YEAR));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let mut a = listing(1, 1.0);
        a.description = "Stunning POOL views".to_string();
        let b = listing(2, 1.0);

        let criteria = criteria_with(FilterUpdate::Query("pool".to_string()));
        assert_eq!(ids(&apply_at(&criteria, &[a, b], YEAR)), vec![1]);
    }

    #[test]
    fn test_query_spans_fields_only_with_single_space() {
        let a = listing(1, 1.0);
        // address "1 Ocean Ave" + " " + city "Los Angeles"
        let criteria = criteria_with(FilterUpdate::Query("ave los".to_string()));
        assert_eq!(ids(&apply_at(&criteria, &[a.clone()], YEAR)), vec![1]);

        let criteria = criteria_with(FilterUpdate::Query("avelos".to_string()));
        assert!(apply_at(&criteria, &[a], YEAR).is_empty());
    }

    #[test]
    fn test_property_type_membership() {
        let house = listing(1, 1.0);
        let mut condo = listing(2, 1.0);
        condo.property_type = "condo".to_string();

        let criteria = criteria_with(FilterUpdate::PropertyTypes(set(&["condo"])));
        assert_eq!(ids(&apply_at(&criteria, &[house, condo], YEAR)), vec![2]);
    }

    #[test]
    fn test_beds_and_baths_minimums() {
        let mut small = listing(1, 1.0);
        small.bedrooms = 1.0;
        small.bathrooms = 1.0;
        let mut large = listing(2, 1.0);
        large.bedrooms = 4.0;
        large.bathrooms = 2.5;
        let listings = vec![small, large];

        let criteria = criteria_with(FilterUpdate::MinBeds(2.0));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![2]);

        let criteria = criteria_with(FilterUpdate::MinBaths(2.5));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![2]);
    }

    #[test]
    fn test_square_feet_range() {
        let mut a = listing(1, 1.0);
        a.square_feet = 900;
        let mut b = listing(2, 1.0);
        b.square_feet = 2500;

        let mut criteria = FilterCriteria::default();
        criteria.update(FilterUpdate::MinSquareFeet(900));
        criteria.update(FilterUpdate::MaxSquareFeet(2000));
        assert_eq!(ids(&apply_at(&criteria, &[a, b], YEAR)), vec![1]);
    }

    #[test]
    fn test_missing_school_district_passes_through() {
        let unknown = listing(1, 1.0);
        let mut elsewhere = listing(2, 1.0);
        elsewhere.school_district = Some("Los Angeles Unified".to_string());
        let mut inside = listing(3, 1.0);
        inside.school_district = Some("Beverly Hills Unified".to_string());

        let criteria =
            criteria_with(FilterUpdate::SchoolDistricts(set(&["Beverly Hills Unified"])));
        assert_eq!(
            ids(&apply_at(&criteria, &[unknown, elsewhere, inside], YEAR)),
            vec![1, 3]
        );
    }

    #[test]
    fn test_neighborhood_pass_through() {
        let unknown = listing(1, 1.0);
        let mut soho = listing(2, 1.0);
        soho.neighborhood = Some("SoHo".to_string());

        let criteria = criteria_with(FilterUpdate::Neighborhoods(set(&["Chelsea"])));
        assert_eq!(ids(&apply_at(&criteria, &[unknown, soho], YEAR)), vec![1]);
    }

    #[test]
    fn test_commute_only_enforced_below_sentinel() {
        let mut far = listing(1, 1.0);
        far.commute_time = Some(90.0);
        let mut near = listing(2, 1.0);
        near.commute_time = Some(20.0);
        let unknown = listing(3, 1.0);
        let listings = vec![far, near, unknown];

        let criteria = criteria_with(FilterUpdate::MaxCommuteTime(60.0));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![1, 2, 3]);

        let criteria = criteria_with(FilterUpdate::MaxCommuteTime(20.0));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![2, 3]);
    }

    #[test]
    fn test_property_age_bounds() {
        let mut new_build = listing(1, 1.0);
        new_build.year_built = Some(2020);
        let mut old = listing(2, 1.0);
        old.year_built = Some(1900);
        let unknown = listing(3, 1.0);
        let listings = vec![new_build, old, unknown];

        // The default range is inactive, so the 124-year-old house stays
        assert_eq!(
            ids(&apply_at(&FilterCriteria::default(), &listings, YEAR)),
            vec![1, 2, 3]
        );

        let criteria = criteria_with(FilterUpdate::PropertyAge(PropertyAge { min: 0, max: 99 }));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![1, 3]);

        let criteria = criteria_with(FilterUpdate::PropertyAge(PropertyAge { min: 4, max: 200 }));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![1, 2, 3]);

        let criteria = criteria_with(FilterUpdate::PropertyAge(PropertyAge { min: 5, max: 200 }));
        assert_eq!(ids(&apply_at(&criteria, &listings, YEAR)), vec![2, 3]);
    }

    #[test]
    fn test_features_and_of_or() {
        let mut a = listing(1, 1.0);
        a.features = vec!["Swimming Pool".to_string(), "Central Air".to_string()];

        let criteria = criteria_with(FilterUpdate::Features(set(&["pool", "gym"])));
        assert!(apply_at(&criteria, &[a.clone()], YEAR).is_empty());

        let criteria = criteria_with(FilterUpdate::Features(set(&["pool"])));
        assert_eq!(ids(&apply_at(&criteria, &[a.clone()], YEAR)), vec![1]);

        let criteria = criteria_with(FilterUpdate::Features(set(&["POOL", "air"])));
        assert_eq!(ids(&apply_at(&criteria, &[a], YEAR)), vec![1]);
    }

    #[test]
    fn test_feature_match_is_not_symmetric() {
        let mut a = listing(1, 1.0);
        a.features = vec!["Pool".to_string()];

        // "Swimming Pool" is not contained in "Pool"
        let criteria = criteria_with(FilterUpdate::Features(set(&["Swimming Pool"])));
        assert!(!matches(&criteria, &a, YEAR));
    }

    #[test]
    fn test_all_predicates_combine_with_and() {
        let mut a = listing(1, 400_000.0);
        a.property_type = "condo".to_string();
        let b = listing(2, 400_000.0);
        let c = listing(3, 900_000.0);

        let mut criteria = FilterCriteria::default();
        criteria.update(FilterUpdate::MaxPrice(500_000.0));
        criteria.update(FilterUpdate::PropertyTypes(set(&["house"])));
        assert_eq!(ids(&apply_at(&criteria, &[a, b, c], YEAR)), vec![2]);
    }
}
