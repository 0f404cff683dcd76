//! Saved listings, keyed by listing id and persisted as a JSON file.

use crate::errors::SavedError;
use crate::models::Listing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A bookmark on a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedListing {
    pub listing_id: u64,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: String,
}

/// A saved entry joined with its listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedEntry<'a> {
    #[serde(flatten)]
    pub saved: &'a SavedListing,
    pub listing: &'a Listing,
}

/// Result of [`SavedListings::toggle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Saved,
    Removed,
}

pub struct SavedListings {
    path: PathBuf,
    entries: Vec<SavedListing>,
}

impl SavedListings {
    /// Open the store at `path`; a missing file is an empty store
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, SavedError> {
        let path = path.into();

        let entries = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No saved listings at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[SavedListing] {
        &self.entries
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_saved(&self, listing_id: u64) -> bool {
        self.entries.iter().any(|e| e.listing_id == listing_id)
    }

    pub async fn save(&mut self, listing_id: u64, notes: &str) -> Result<SavedListing, SavedError> {
        if self.is_saved(listing_id) {
            return Err(SavedError::AlreadySaved(listing_id));
        }

        let saved = SavedListing {
            listing_id,
            saved_at: Utc::now(),
            notes: notes.trim().to_string(),
        };

        let mut next = self.entries.clone();
        next.push(saved.clone());
        self.commit(next).await?;

        info!("Saved listing {}", listing_id);
        Ok(saved)
    }

    pub async fn remove(&mut self, listing_id: u64) -> Result<(), SavedError> {
        let next: Vec<SavedListing> = self
            .entries
            .iter()
            .filter(|e| e.listing_id != listing_id)
            .cloned()
            .collect();

        if next.len() == self.entries.len() {
            return Err(SavedError::NotSaved(listing_id));
        }

        self.commit(next).await?;
        info!("Removed listing {} from saved", listing_id);
        Ok(())
    }

    pub async fn update_notes(
        &mut self,
        listing_id: u64,
        notes: &str,
    ) -> Result<SavedListing, SavedError> {
        let mut next = self.entries.clone();
        let entry = next
            .iter_mut()
            .find(|e| e.listing_id == listing_id)
            .ok_or(SavedError::NotSaved(listing_id))?;
        entry.notes = notes.trim().to_string();
        let updated = entry.clone();

        self.commit(next).await?;
        info!("Updated notes for listing {}", listing_id);
        Ok(updated)
    }

    pub async fn toggle(&mut self, listing_id: u64) -> Result<Toggled, SavedError> {
        if self.is_saved(listing_id) {
            self.remove(listing_id).await?;
            Ok(Toggled::Removed)
        } else {
            self.save(listing_id, "").await?;
            Ok(Toggled::Saved)
        }
    }

    /// Saved entries whose listing still exists, most recently saved first
    pub fn list<'a>(&'a self, listings: &'a [Listing]) -> Vec<SavedEntry<'a>> {
        let mut joined: Vec<SavedEntry<'a>> = self
            .entries
            .iter()
            .filter_map(|saved| {
                listings
                    .iter()
                    .find(|l| l.id == saved.listing_id)
                    .map(|listing| SavedEntry { saved, listing })
            })
            .collect();

        joined.sort_by(|a, b| b.saved.saved_at.cmp(&a.saved.saved_at));
        joined
    }

    /// Write `next` to disk, then adopt it; a failed write leaves the store unchanged
    async fn commit(&mut self, next: Vec<SavedListing>) -> Result<(), SavedError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&next)?;
        tokio::fs::write(&self.path, json).await?;
        debug!("Wrote {} saved listings to {}", next.len(), self.path.display());

        self.entries = next;
        Ok(())
    }
}
