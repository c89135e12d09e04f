//! Client-side pagination over already-fetched lists

/// One page of a slice
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page
    pub items: &'a [T],
    /// 1-based page number actually shown (after clamping)
    pub number: usize,
    /// Total pages; at least 1 even for an empty list
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.number > 1
    }
}

/// Returns page `page` (1-based) of `items`, `per_page` at a time.
///
/// Out-of-range page numbers are clamped to the first or last page. A
/// `per_page` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use gradpath::views::pagination::paginate;
///
/// let items: Vec<u32> = (1..=8).collect();
/// let page = paginate(&items, 2, 6);
/// assert_eq!(page.items, &[7, 8]);
/// assert_eq!(page.total_pages, 2);
/// ```
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Page<'_, T> {
    let per_page = per_page.max(1);
    let total_pages = ((items.len() + per_page - 1) / per_page).max(1);
    let number = page.clamp(1, total_pages);
    let start = ((number - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());
    Page {
        items: &items[start..end],
        number,
        total_pages,
    }
}
