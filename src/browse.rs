//! Browse session: criteria, filtered listings and paging kept in step.

use crate::filters::{self, FilterCriteria, FilterUpdate};
use crate::models::Listing;
use crate::pagination::{Page, PageLink, PageSequencer};
use chrono::{Datelike, Utc};
use std::num::NonZeroUsize;
use tracing::debug;

/// State of one browsing session.
///
/// The filtered list is recomputed eagerly whenever the listings or the
/// criteria change, and the page is reset to 1 at the same time.
/// Before any listings arrive the session behaves as an empty list.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    criteria: FilterCriteria,
    listings: Vec<Listing>,
    filtered: Vec<Listing>,
    sequencer: PageSequencer,
    current_year: i32,
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new(crate::pagination::DEFAULT_PAGE_SIZE)
    }
}

impl BrowseSession {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self::with_current_year(page_size, Utc::now().year())
    }

    /// Session that measures property age against `current_year`
    pub fn with_current_year(page_size: NonZeroUsize, current_year: i32) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            listings: Vec::new(),
            filtered: Vec::new(),
            sequencer: PageSequencer::new(page_size),
            current_year,
        }
    }

    pub fn set_listings(&mut self, listings: Vec<Listing>) {
        self.listings = listings;
        self.refilter();
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn update_filter(&mut self, update: FilterUpdate) {
        debug!("Updating filter {}", update.field_name());
        self.criteria.update(update);
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.criteria.reset();
        self.refilter();
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters()
    }

    pub fn active_filter_count(&self) -> usize {
        filters::active_filter_count(&self.criteria)
    }

    /// Every listing matching the criteria, in source order
    pub fn filtered(&self) -> &[Listing] {
        &self.filtered
    }

    pub fn current_page(&self) -> Page<'_, Listing> {
        self.sequencer.page(&self.filtered)
    }

    pub fn total_pages(&self) -> usize {
        self.sequencer.total_pages()
    }

    pub fn go_to_page(&mut self, page: i64) {
        self.sequencer.go_to_page(page);
    }

    pub fn go_to_next_page(&mut self) {
        self.sequencer.go_to_next_page();
    }

    pub fn go_to_previous_page(&mut self) {
        self.sequencer.go_to_previous_page();
    }

    pub fn reset_page(&mut self) {
        self.sequencer.reset_page();
    }

    pub fn visible_pages(&self) -> Vec<PageLink> {
        self.sequencer.visible_pages()
    }

    fn refilter(&mut self) {
        self.filtered = filters::apply_at(&self.criteria, &self.listings, self.current_year);
        self.sequencer.set_total_items(self.filtered.len());
        self.sequencer.reset_page();
        debug!(
            "{} of {} listings match, {} pages",
            self.filtered.len(),
            self.listings.len(),
            self.sequencer.total_pages()
        );
    }
}
