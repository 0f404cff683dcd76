use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Commute limit that means "no limit"
pub const UNBOUNDED_COMMUTE_MINUTES: f64 = 60.0;

/// Inclusive bounds on property age in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAge {
    pub min: i32,
    pub max: i32,
}

impl PropertyAge {
    pub const DEFAULT: PropertyAge = PropertyAge { min: 0, max: 100 };

    /// Each bound only applies once it is moved inside the default range.
    pub fn admits(&self, age: i32) -> bool {
        (self.min <= Self::DEFAULT.min || age >= self.min)
            && (self.max >= Self::DEFAULT.max || age <= self.max)
    }
}

impl Default for PropertyAge {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Filter criteria for browsing listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    /// Free-text query over address, city, state, title and description
    pub query: String,
    pub min_price: f64,
    pub max_price: f64,
    /// Accepted property types; empty accepts any
    pub property_types: BTreeSet<String>,
    pub min_beds: f64,
    pub min_baths: f64,
    pub min_square_feet: u32,
    pub max_square_feet: u32,
    pub school_districts: BTreeSet<String>,
    pub neighborhoods: BTreeSet<String>,
    /// Maximum commute in minutes; 60 disables the check
    pub max_commute_time: f64,
    pub property_age: PropertyAge,
    /// Requested amenities, each matched as a substring of some listing feature
    pub features: BTreeSet<String>,
}

impl FilterCriteria {
    /// Criteria with no active filters
    pub const DEFAULT: FilterCriteria = FilterCriteria {
        query: String::new(),
        min_price: 0.0,
        max_price: 5_000_000.0,
        property_types: BTreeSet::new(),
        min_beds: 0.0,
        min_baths: 0.0,
        min_square_feet: 0,
        max_square_feet: 10_000,
        school_districts: BTreeSet::new(),
        neighborhoods: BTreeSet::new(),
        max_commute_time: UNBOUNDED_COMMUTE_MINUTES,
        property_age: PropertyAge::DEFAULT,
        features: BTreeSet::new(),
    };

    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Set exactly one field
    pub fn update(&mut self, update: FilterUpdate) {
        match update {
            FilterUpdate::Query(value) => self.query = value,
            FilterUpdate::MinPrice(value) => self.min_price = value,
            FilterUpdate::MaxPrice(value) => self.max_price = value,
            FilterUpdate::PropertyTypes(value) => self.property_types = value,
            FilterUpdate::MinBeds(value) => self.min_beds = value,
            FilterUpdate::MinBaths(value) => self.min_baths = value,
            FilterUpdate::MinSquareFeet(value) => self.min_square_feet = value,
            FilterUpdate::MaxSquareFeet(value) => self.max_square_feet = value,
            FilterUpdate::SchoolDistricts(value) => self.school_districts = value,
            FilterUpdate::Neighborhoods(value) => self.neighborhoods = value,
            FilterUpdate::MaxCommuteTime(value) => self.max_commute_time = value,
            FilterUpdate::PropertyAge(value) => self.property_age = value,
            FilterUpdate::Features(value) => self.features = value,
        }
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::DEFAULT;
    }

    /// True when any field differs from [`FilterCriteria::DEFAULT`]
    pub fn has_active_filters(&self) -> bool {
        *self != Self::DEFAULT
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single-field change to [`FilterCriteria`].
///
/// Serialized as `{"field": "minPrice", "value": 200000}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FilterUpdate {
    Query(String),
    MinPrice(f64),
    MaxPrice(f64),
    PropertyTypes(BTreeSet<String>),
    MinBeds(f64),
    MinBaths(f64),
    MinSquareFeet(u32),
    MaxSquareFeet(u32),
    SchoolDistricts(BTreeSet<String>),
    Neighborhoods(BTreeSet<String>),
    MaxCommuteTime(f64),
    PropertyAge(PropertyAge),
    Features(BTreeSet<String>),
}

impl FilterUpdate {
    /// Name of the field this update targets
    pub fn field_name(&self) -> &'static str {
        match self {
            FilterUpdate::Query(_) => "query",
            FilterUpdate::MinPrice(_) => "minPrice",
            FilterUpdate::MaxPrice(_) => "maxPrice",
            FilterUpdate::PropertyTypes(_) => "propertyTypes",
            FilterUpdate::MinBeds(_) => "minBeds",
            FilterUpdate::MinBaths(_) => "minBaths",
            FilterUpdate::MinSquareFeet(_) => "minSquareFeet",
            FilterUpdate::MaxSquareFeet(_) => "maxSquareFeet",
            FilterUpdate::SchoolDistricts(_) => "schoolDistricts",
            FilterUpdate::Neighborhoods(_) => "neighborhoods",
            FilterUpdate::MaxCommuteTime(_) => "maxCommuteTime",
            FilterUpdate::PropertyAge(_) => "propertyAge",
            FilterUpdate::Features(_) => "features",
        }
    }
}
