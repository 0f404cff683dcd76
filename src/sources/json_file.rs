use crate::errors::ListingError;
use crate::models::Listing;
use crate::sources::traits::ListingSource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Listing store backed by a JSON array on disk.
///
/// The file is re-read on every call so edits show up without a restart.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Listing>, ListingError> {
        let path = self.path.display().to_string();
        debug!("Reading listings from {}", path);

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ListingError::Read {
                path: path.clone(),
                source,
            })?;

        let listings: Vec<Listing> =
            serde_json::from_str(&raw).map_err(|source| ListingError::Parse {
                path: path.clone(),
                source,
            })?;

        info!("Loaded {} listings from {}", listings.len(), path);
        Ok(listings)
    }
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn get_all(&self) -> Result<Vec<Listing>, ListingError> {
        self.load().await
    }

    async fn get_by_id(&self, id: u64) -> Result<Listing, ListingError> {
        self.load()
            .await?
            .into_iter()
            .find(|listing| listing.id == id)
            .ok_or(ListingError::NotFound(id))
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
