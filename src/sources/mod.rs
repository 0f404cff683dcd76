pub mod json_file;
pub mod sample;
pub mod traits;

pub use json_file::JsonFileSource;
pub use sample::{sample_listings, SampleSource};
pub use traits::ListingSource;
