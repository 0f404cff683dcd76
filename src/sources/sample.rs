use crate::errors::ListingError;
use crate::models::Listing;
use crate::sources::traits::ListingSource;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

/// Built-in catalogue used when no listing file is configured
#[derive(Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ListingSource for SampleSource {
    async fn get_all(&self) -> Result<Vec<Listing>, ListingError> {
        Ok(sample_listings())
    }

    async fn get_by_id(&self, id: u64) -> Result<Listing, ListingError> {
        sample_listings()
            .into_iter()
            .find(|listing| listing.id == id)
            .ok_or(ListingError::NotFound(id))
    }

    fn source_name(&self) -> &'static str {
        "Sample catalogue"
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Sample listings covering every property type and enrichment field
pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 1,
            title: "Modern Beverly Hills Estate".to_string(),
            address: "1200 Summit Dr".to_string(),
            city: "Beverly Hills".to_string(),
            state: "CA".to_string(),
            zip_code: Some("90210".to_string()),
            price: 4_750_000.0,
            property_type: "house".to_string(),
            bedrooms: 5.0,
            bathrooms: 4.5,
            square_feet: 5200,
            description: "Gated estate with canyon views and a resort-style backyard.".to_string(),
            features: strings(&["Swimming Pool", "Gym/Fitness Center", "Fireplace", "Central Air"]),
            images: vec![],
            listing_date: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).single(),
            status: Some("active".to_string()),
            school_district: Some("Beverly Hills Unified".to_string()),
            neighborhood: Some("Beverly Hills".to_string()),
            commute_time: Some(35.0),
            year_built: Some(2015),
        },
        Listing {
            id: 2,
            title: "Santa Monica Beach Condo".to_string(),
            address: "101 Ocean Ave".to_string(),
            city: "Santa Monica".to_string(),
            state: "CA".to_string(),
            zip_code: Some("90401".to_string()),
            price: 1_350_000.0,
            property_type: "condo".to_string(),
            bedrooms: 2.0,
            bathrooms: 2.0,
            square_feet: 1250,
            description: "Steps from the pier with an ocean-facing balcony.".to_string(),
            features: strings(&["Balcony/Terrace", "Parking Garage", "In-Unit Laundry"]),
            images: vec![],
            listing_date: Utc.with_ymd_and_hms(2024, 4, 18, 9, 0, 0).single(),
            status: Some("active".to_string()),
            school_district: Some("Santa Monica-Malibu Unified".to_string()),
            neighborhood: Some("Santa Monica".to_string()),
            commute_time: Some(25.0),
            year_built: Some(1998),
        },
        Listing {
            id: 3,
            title: "Venice Craftsman Bungalow".to_string(),
            address: "45 Rose Ave".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            zip_code: Some("90291".to_string()),
            price: 1_895_000.0,
            property_type: "house".to_string(),
            bedrooms: 3.0,
            bathrooms: 2.0,
            square_feet: 1650,
            description: "Restored 1920s craftsman a few blocks from the boardwalk.".to_string(),
            features: strings(&["Hardwood Floors", "Fireplace", "Pet Friendly"]),
            images: vec![],
            listing_date: Utc.with_ymd_and_hms(2024, 2, 11, 9, 0, 0).single(),
            status: Some("active".to_string()),
            school_district: Some("Los Angeles Unified".to_string()),
            neighborhood: Some("Venice Beach".to_string()),
            commute_time: None,
            year_built: Some(1924),
        },
        Listing {
            id: 4,
            title: "Downtown LA Loft".to_string(),
            address: "600 S Spring St".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            zip_code: Some("90014".to_string()),
            price: 725_000.0,
            property_type: "condo".to_string(),
            bedrooms: 1.0,
            bathrooms: 1.0,
            square_feet: 980,
            description: "Converted bank building loft with 14-foot ceilings.".to_string(),
            features: strings(&["Gym/Fitness Center", "Stainless Steel Appliances", "Central Air"]),
            images: vec![],
            listing_date: Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).single(),
            status: Some("active".to_string()),
            school_district: None,
            neighborhood: Some("Downtown".to_string()),
            commute_time: Some(10.0),
            year_built: Some(1912),
        },
        Listing {
            id: 5,
            title: "Hollywood Hills Townhouse".to_string(),
            address: "2250 N Beachwood Dr".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            zip_code: Some("90068".to_string()),
            price: 1_150_000.0,
            property_type: "townhouse".to_string(),
            bedrooms: 3.0,
            bathrooms: 2.5,
            square_feet: 1800,
            description: "Three-level townhouse below the Hollywood sign.".to_string(),
            features: strings(&["Balcony/Terrace", "Walk-in Closet", "Dishwasher"]),
            images: vec![],
            listing_date: Utc.with_ymd_and_hms(2024, 1, 22, 9, 0, 0).single(),
            status: Some("pending".to_string()),
            school_district: Some("Los Angeles Unified".to_string()),
            neighborhood: Some("Hollywood".to_string()),
            commute_time: Some(40.0),
            year_built: Some(2006),
        },
        Listing {
            id: 6,
            title: "SoHo Cast-Iron Loft".to_string(),
            address: "72 Greene St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: Some("10012".to_string()),
            price: 3_900_000.0,
            property_type: "condo".to_string(),
            bedrooms: 3.0,
            bathrooms: 2.0,
            square_feet: 2400,
            description: "Full-floor loft in a landmarked cast-iron building.".to_string(),
            features: strings(&["Hardwood Floors", "In-Unit Laundry", "Central Air"]),
            images: vec![],
            listing_date: Utc.with_ymd_and_hms(2024, 3, 29, 9, 0, 0).single(),
            status: Some("active".to_string()),
            school_district: Some("Manhattan School District".to_string()),
            neighborhood: Some("SoHo".to_string()),
            commute_time: Some(15.0),
            year_built: Some(1880),
        },
        Listing {
            id: 7,
            title: "Brooklyn Heights Brownstone Apartment".to_string(),
            address: "30 Remsen St".to_string(),
            city: "Brooklyn".to_string(),
            state: "NY".to_string(),
            zip_code: Some("11201".to_string()),
            price: 6_500.0,
            property_type: "apartment".to_string(),
            bedrooms: 2.0,
            bathrooms: 1.0,
            square_feet: 1100,
            description: "Parlor-floor rental with original moldings.".to_string(),
            features: strings(&["Fireplace", "Pet Friendly", "Dishwasher"]),
            images: vec![],
            listing_date: Utc.with_ymd_and_hms(2024, 4, 2, 9, 0, 0).single(),
            status: Some("active".to_string()),
            school_district: Some("Brooklyn School District".to_string()),
            neighborhood: Some("Brooklyn Heights".to_string()),
            commute_time: Some(30.0),
            year_built: None,
        },
        Listing {
            id: 8,
            title: "Palo Alto Family Home".to_string(),
            address: "880 Waverley St".to_string(),
            city: "Palo Alto".to_string(),
            state: "CA".to_string(),
            zip_code: Some("94301".to_string()),
            price: 3_250_000.0,
            property_type: "house".to_string(),
            bedrooms: 4.0,
            bathrooms: 3.0,
            square_feet: 2300,
            description: "Walkable to University Ave, top-rated schools.".to_string(),
            features: strings(&["Swimming Pool", "Hardwood Floors", "Central Air", "Dishwasher"]),
            images: vec![],
            listing_date: Utc.with_ymd_and_hms(2024, 2, 27, 9, 0, 0).single(),
            status: Some("active".to_string()),
            school_district: Some("Palo Alto Unified".to_string()),
            neighborhood: None,
            commute_time: Some(50.0),
            year_built: Some(1965),
        },
    ]
}
