use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Core property listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "Id", alias = "id")]
    pub id: u64,
    pub title: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub zip_code: Option<String>,
    pub price: f64,
    pub property_type: String,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub square_feet: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub listing_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,

    // Enrichment fields; any of them may be missing from the store
    #[serde(default)]
    pub school_district: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub commute_time: Option<f64>,
    #[serde(default)]
    pub year_built: Option<i32>,
}

impl Listing {
    /// Text the free-form query is matched against.
    ///
    /// Fields are joined with a single space so a query never matches
    /// across a field boundary without that space.
    pub fn search_text(&self) -> String {
        [
            self.address.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.title.as_str(),
            self.description.as_str(),
        ]
        .join(" ")
    }

    /// Age in whole years relative to `current_year`, if the build year is known
    pub fn age(&self, current_year: i32) -> Option<i32> {
        self.year_built.map(|year| current_year - year)
    }
}
