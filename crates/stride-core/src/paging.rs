//! # Paging Module
//!
//! Slice pagination for in-memory listings.
//!
//! ## Clamping Rules
//! - Page numbers are 1-indexed; anything below 1 becomes page 1
//! - Limits are clamped into [1, [`crate::MAX_PAGE_SIZE`]]
//! - A page past the end yields an empty data slice, never an error
//!
//! Pagination happens over already-fetched rows; catalogs here are a few
//! hundred products, so slicing in memory is simpler than LIMIT/OFFSET
//! bookkeeping in every query.

use serde::Serialize;

use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

// =============================================================================
// Page
// =============================================================================

/// One page of a listing, plus the metadata clients need to render paging
/// controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// Cuts one page out of a full result set.
///
/// ## Example
/// ```rust
/// use stride_core::paging::paginate;
///
/// let items: Vec<i32> = (1..=25).collect();
/// let page = paginate(&items, 3, 10);
///
/// assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
/// assert_eq!(page.total, 25);
/// assert_eq!(page.total_pages, 3);
/// ```
pub fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> Page<T> {
    let page = page.max(1);
    let limit = limit.clamp(1, MAX_PAGE_SIZE);

    let total = items.len();
    let total_pages = total.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit);
    let data = if start >= total {
        Vec::new()
    } else {
        items[start..(start + limit).min(total)].to_vec()
    };

    Page {
        data,
        page,
        limit,
        total,
        total_pages,
    }
}

/// [`paginate`] with the shop's default page size.
pub fn paginate_default<T: Clone>(items: &[T], page: usize) -> Page<T> {
    paginate(items, page, DEFAULT_PAGE_SIZE)
}

// =============================================================================
// Unit Tests
// =============================================================================
