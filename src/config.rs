use crate::filters::{FilterUpdate, PropertyAge};
use clap::{Args, Parser, Subcommand};
use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Search, filter and save property listings
#[derive(Debug, Parser)]
#[command(name = "listing-scout", version, about)]
pub struct Cli {
    /// JSON file with listings; the built-in sample catalogue is used when unset
    #[arg(long, global = true, env = "LISTING_SCOUT_DATA")]
    pub data: Option<PathBuf>,

    /// Where saved listings are kept
    #[arg(
        long,
        global = true,
        env = "LISTING_SCOUT_SAVED",
        default_value = "saved_listings.json"
    )]
    pub saved: PathBuf,

    /// Listings per page
    #[arg(long, global = true, env = "LISTING_SCOUT_PAGE_SIZE", default_value = "12")]
    pub page_size: NonZeroUsize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter listings and print one page
    Browse(BrowseArgs),
    /// Print a single listing
    Show { id: u64 },
    /// Manage saved listings
    #[command(subcommand)]
    Saved(SavedCommand),
}

#[derive(Debug, Subcommand)]
pub enum SavedCommand {
    /// List saved listings, most recent first
    List,
    /// Save a listing
    Add {
        id: u64,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Remove a saved listing
    Remove { id: u64 },
    /// Save the listing if unsaved, otherwise remove it
    Toggle { id: u64 },
    /// Replace the notes on a saved listing
    Note { id: u64, notes: String },
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Text matched against address, city, state, title and description
    #[arg(long, short)]
    pub query: Option<String>,
    #[arg(long)]
    pub min_price: Option<f64>,
    #[arg(long)]
    pub max_price: Option<f64>,
    /// Property type to include; repeatable
    #[arg(long = "type", value_name = "TYPE")]
    pub property_types: Vec<String>,
    #[arg(long)]
    pub min_beds: Option<f64>,
    #[arg(long)]
    pub min_baths: Option<f64>,
    #[arg(long)]
    pub min_sqft: Option<u32>,
    #[arg(long)]
    pub max_sqft: Option<u32>,
    /// School district to include; repeatable
    #[arg(long = "district", value_name = "DISTRICT")]
    pub school_districts: Vec<String>,
    /// Neighborhood to include; repeatable
    #[arg(long = "neighborhood", value_name = "NEIGHBORHOOD")]
    pub neighborhoods: Vec<String>,
    /// Maximum commute in minutes (60 means no limit)
    #[arg(long)]
    pub max_commute: Option<f64>,
    #[arg(long)]
    pub min_age: Option<i32>,
    #[arg(long)]
    pub max_age: Option<i32>,
    /// Required amenity, matched as a substring; repeatable
    #[arg(long = "feature", value_name = "FEATURE")]
    pub features: Vec<String>,
    /// Page to show; out-of-range values are clamped
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,
    /// Print the page as JSON
    #[arg(long)]
    pub json: bool,
}

impl BrowseArgs {
    /// One update per flag that was given
    pub fn filter_updates(&self) -> Vec<FilterUpdate> {
        let mut updates = Vec::new();
        let set = |values: &[String]| values.iter().cloned().collect::<BTreeSet<_>>();

        if let Some(query) = &self.query {
            updates.push(FilterUpdate::Query(query.clone()));
        }
        if let Some(value) = self.min_price {
            updates.push(FilterUpdate::MinPrice(value));
        }
        if let Some(value) = self.max_price {
            updates.push(FilterUpdate::MaxPrice(value));
        }
        if !self.property_types.is_empty() {
            updates.push(FilterUpdate::PropertyTypes(set(&self.property_types)));
        }
        if let Some(value) = self.min_beds {
            updates.push(FilterUpdate::MinBeds(value));
        }
        if let Some(value) = self.min_baths {
            updates.push(FilterUpdate::MinBaths(value));
        }
        if let Some(value) = self.min_sqft {
            updates.push(FilterUpdate::MinSquareFeet(value));
        }
        if let Some(value) = self.max_sqft {
            updates.push(FilterUpdate::MaxSquareFeet(value));
        }
        if !self.school_districts.is_empty() {
            updates.push(FilterUpdate::SchoolDistricts(set(&self.school_districts)));
        }
        if !self.neighborhoods.is_empty() {
            updates.push(FilterUpdate::Neighborhoods(set(&self.neighborhoods)));
        }
        if let Some(value) = self.max_commute {
            updates.push(FilterUpdate::MaxCommuteTime(value));
        }
        if self.min_age.is_some() || self.max_age.is_some() {
            updates.push(FilterUpdate::PropertyAge(PropertyAge {
                min: self.min_age.unwrap_or(PropertyAge::DEFAULT.min),
                max: self.max_age.unwrap_or(PropertyAge::DEFAULT.max),
            }));
        }
        if !self.features.is_empty() {
            updates.push(FilterUpdate::Features(set(&self.features)));
        }

        updates
    }
}
