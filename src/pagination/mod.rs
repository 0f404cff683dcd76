//! Page slicing and navigation over an ordered list.
//!
//! Page numbers are 1-indexed. Every navigation request is clamped into
//! `[1, max(total_pages, 1)]`; nothing here returns an error.

use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Listings shown per page in the browse view
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(size) => size,
    None => panic!("page size must be positive"),
};

/// Page-button slots in the pagination control
pub const DEFAULT_PAGE_BUDGET: usize = 7;

/// Number of pages needed for `item_count` items; 0 when there are none
pub fn total_pages(item_count: usize, page_size: NonZeroUsize) -> usize {
    item_count.div_ceil(page_size.get())
}

/// Clamp a requested page into `[1, max(total_pages, 1)]`
pub fn clamp_page(page: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    if page < 1 {
        1
    } else {
        usize::try_from(page).map_or(last, |page| page.min(last))
    }
}

/// One page of items plus navigation state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Slice out `page` of `items`, clamping the page number
pub fn paginate<T>(items: &[T], page: i64, page_size: NonZeroUsize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let current_page = clamp_page(page, total_pages);

    let start = ((current_page - 1) * page_size.get()).min(items.len());
    let end = (start + page_size.get()).min(items.len());

    Page {
        items: &items[start..end],
        current_page,
        total_pages,
        has_next_page: current_page < total_pages,
        has_previous_page: current_page > 1,
    }
}

/// Current page over a list whose length is supplied by the owner.
///
/// The sequencer does not notice when the underlying list changes; the
/// owner calls [`PageSequencer::set_total_items`] and, when the list was
/// re-filtered, [`PageSequencer::reset_page`].
#[derive(Debug, Clone)]
pub struct PageSequencer {
    page_size: NonZeroUsize,
    current_page: usize,
    total_items: usize,
}

impl Default for PageSequencer {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageSequencer {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_size,
            current_page: 1,
            total_items: 0,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Current page, clamped against the present item count
    pub fn current_page(&self) -> usize {
        clamp_page(self.current_page as i64, self.total_pages())
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page() < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page() > 1
    }

    pub fn go_to_page(&mut self, page: i64) {
        self.current_page = clamp_page(page, self.total_pages());
    }

    pub fn go_to_next_page(&mut self) {
        self.go_to_page(self.current_page() as i64 + 1);
    }

    pub fn go_to_previous_page(&mut self) {
        self.go_to_page(self.current_page() as i64 - 1);
    }

    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    /// Visible slice of `items` at the current page
    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.current_page as i64, self.page_size)
    }

    /// Page list for the pagination control
    pub fn visible_pages(&self) -> Vec<PageLink> {
        visible_pages(self.current_page(), self.total_pages())
    }
}

/// An entry in the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageLink {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageLink::Page(page) => serializer.serialize_u64(*page as u64),
            PageLink::Ellipsis => serializer.serialize_str("…"),
        }
    }
}

impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLink::Page(page) => write!(f, "{}", page),
            PageLink::Ellipsis => write!(f, "…"),
        }
    }
}

/// Page list with seven slots, e.g. `1 … 9 10 11 … 20`
pub fn visible_pages(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    visible_pages_with_budget(current_page, total_pages, DEFAULT_PAGE_BUDGET)
}

/// Page list that fits in `budget` slots (at least 5).
///
/// With `edge = budget - 2` pages in the leading or trailing run, the
/// leading run is used while `current_page < edge` and the trailing
/// run once `current_page >= total_pages - (edge - 2)`. For seven slots
/// that gives the breakpoints 4 and `total_pages - 3`. An out-of-range
/// `current_page` is clamped into `[1, total_pages]` first.
pub fn visible_pages_with_budget(
    current_page: usize,
    total_pages: usize,
    budget: usize,
) -> Vec<PageLink> {
    let budget = budget.max(5);

    if total_pages <= budget {
        return (1..=total_pages).map(PageLink::Page).collect();
    }

    let current_page = current_page.clamp(1, total_pages);
    let edge = budget - 2;
    let radius = (budget - 5) / 2;
    let mut pages = Vec::with_capacity(budget);

    if current_page < edge {
        pages.extend((1..=edge).map(PageLink::Page));
        pages.push(PageLink::Ellipsis);
        pages.push(PageLink::Page(total_pages));
    } else if current_page >= total_pages - (edge - 2) {
        pages.push(PageLink::Page(1));
        pages.push(PageLink::Ellipsis);
        pages.extend((total_pages - edge + 1..=total_pages).map(PageLink::Page));
    } else {
        pages.push(PageLink::Page(1));
        pages.push(PageLink::Ellipsis);
        pages.extend((current_page - radius..=current_page + radius).map(PageLink::Page));
        pages.push(PageLink::Ellipsis);
        pages.push(PageLink::Page(total_pages));
    }

    pages
}
