use std::num::NonZeroUsize;

use bizdir_core::DEFAULT_PAGE_SIZE;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub page_size: NonZeroUsize,
}

impl PageConfig {
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// One page of an ordered result set.
///
/// `page` is the page actually served, after clamping into `[1, total_pages]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultPage<T> {
    pub items: Vec<T>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Number of pages needed for `len` items; never less than one.
#[must_use]
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Slice `items` into the requested page.
///
/// Page numbers below one are read as one and numbers past the end are clamped
/// to the last page, so this never fails and never slices out of range.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page_size: NonZeroUsize, page_number: usize) -> ResultPage<T> {
    let total_pages = total_pages(items.len(), page_size);
    let page = page_number.clamp(1, total_pages);

    let start = (page - 1).saturating_mul(page_size.get()).min(items.len());
    let end = start.saturating_add(page_size.get()).min(items.len());

    ResultPage {
        items: items[start..end].to_vec(),
        total_matched: items.len(),
        total_pages,
        page,
    }
}
