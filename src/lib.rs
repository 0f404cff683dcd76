//! Listing browser core: filter, paginate and save property listings.

pub mod browse;
pub mod config;
pub mod errors;
pub mod filters;
pub mod format;
pub mod models;
pub mod pagination;
pub mod saved;
pub mod sources;

pub use browse::BrowseSession;
pub use errors::{ListingError, SavedError};
pub use filters::{FilterCriteria, FilterUpdate, PropertyAge};
pub use models::Listing;
pub use pagination::{PageLink, PageSequencer};
