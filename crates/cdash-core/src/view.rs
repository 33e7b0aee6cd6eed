//! Collection view engine: search, pagination and page-selector windows
//!
//! Everything here is a pure function of `(collection, query, page, page_size)`
//! and is recomputed on every render. The policy that a changed query resets
//! the current page lives with the page state that owns the query, not here.

use serde::{Serialize, Serializer};

use crate::types::User;

/// Number of page buttons shown before the selector starts truncating
pub const PAGE_WINDOW_SIZE: usize = 5;

/// Visible slice of a filtered collection plus the figures around it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionView<'a> {
    /// Items on the requested page, in collection order
    pub page_items: Vec<&'a User>,
    /// `ceil(filtered_total / page_size)`, 0 for an empty result
    pub total_pages: usize,
    /// 1-based index of the first item on the page, 0 when the page is empty
    pub range_start: usize,
    /// 1-based index of the last item on the page, 0 when the page is empty
    pub range_end: usize,
    /// Number of items matching the query
    pub filtered_total: usize,
}

impl CollectionView<'_> {
    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }
}

/// One entry of the page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(usize),
    Ellipsis,
}

impl std::fmt::Display for PageEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageEntry::Page(n) => write!(f, "{n}"),
            PageEntry::Ellipsis => write!(f, "..."),
        }
    }
}

impl Serialize for PageEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageEntry::Page(n) => serializer.serialize_u64(*n as u64),
            PageEntry::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Users matching `query` on name, email or company name, case-insensitively
///
/// A blank query matches everything. Order is always preserved.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let query = query.trim();
    if query.is_empty() {
        return users.iter().collect();
    }

    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| {
            user.name.to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
                || user.company.name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Number of pages needed for `total` items; a zero page size counts as one
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Filter `users` by `query` and cut out page `current_page` (1-based)
///
/// `current_page` is not clamped: a page outside `1..=total_pages` yields an
/// empty slice with a zero range. Callers own navigation bounds.
pub fn compute_view<'a>(
    users: &'a [User],
    query: &str,
    current_page: usize,
    page_size: usize,
) -> CollectionView<'a> {
    let filtered = filter_users(users, query);
    let filtered_total = filtered.len();
    let page_size = page_size.max(1);
    let total_pages = total_pages(filtered_total, page_size);

    if current_page == 0 || current_page > total_pages {
        return CollectionView {
            page_items: Vec::new(),
            total_pages,
            range_start: 0,
            range_end: 0,
            filtered_total,
        };
    }

    let offset = (current_page - 1) * page_size;
    let range_end = (offset + page_size).min(filtered_total);
    let page_items: Vec<&User> = filtered
        .into_iter()
        .skip(offset)
        .take(page_size)
        .collect();

    CollectionView {
        page_items,
        total_pages,
        range_start: offset + 1,
        range_end,
        filtered_total,
    }
}

/// Page numbers for a selector, truncated with ellipses beyond five pages
///
/// The first and last page are always present once truncation kicks in, and
/// the result never has more than seven entries.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageEntry> {
    if total_pages <= PAGE_WINDOW_SIZE {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut pages = Vec::with_capacity(PAGE_WINDOW_SIZE + 2);
    if current_page <= 3 {
        pages.extend((1..=4).map(PageEntry::Page));
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        pages.push(PageEntry::Page(1));
        pages.push(PageEntry::Ellipsis);
        pages.extend((total_pages - 3..=total_pages).map(PageEntry::Page));
    } else {
        pages.push(PageEntry::Page(1));
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(current_page - 1));
        pages.push(PageEntry::Page(current_page));
        pages.push(PageEntry::Page(current_page + 1));
        pages.push(PageEntry::Ellipsis);
        pages.push(PageEntry::Page(total_pages));
    }
    pages
}
