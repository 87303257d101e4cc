//! Incremental "load more" pagination
//!
//! Pure functions over the filtered list. The page size only grows, and it
//! is not reset when the filter changes.

use serde::Serialize;

/// Posts added by every "load more"
pub const PAGE_INCREMENT: usize = 12;

/// Number of posts currently allowed on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PageSize(usize);

impl Default for PageSize {
    fn default() -> Self {
        PageSize(PAGE_INCREMENT)
    }
}

impl PageSize {
    pub fn get(self) -> usize {
        self.0
    }

    /// The page size after one more "load more"
    pub fn grow(self) -> Self {
        PageSize(self.0.saturating_add(PAGE_INCREMENT))
    }
}

/// Visible prefix of `items`
pub fn paginate<T>(items: &[T], page_size: PageSize) -> &[T] {
    let end = page_size.get().min(items.len());
    &items[..end]
}

/// Whether the "load more" control is shown
pub fn has_more(total_items: usize, page_size: PageSize) -> bool {
    page_size.get() < total_items
}
