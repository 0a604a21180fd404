//! Client-side pagination over an in-memory collection

/// Page sizes offered in the page-size selector.
pub const PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Page size used until the user picks another one.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    per_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Paginator {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// `max(1, ceil(len / per_page))`
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.per_page).max(1)
    }

    /// Index of the first record on the current page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Move to `page`, clamped to `1..=total_pages(len)`.
    pub fn set_page(&mut self, page: usize, len: usize) {
        self.page = page.clamp(1, self.total_pages(len));
    }

    /// Change the page size and go back to the first page.
    ///
    /// Returns `false` (and changes nothing) when `per_page` is not one of
    /// [`PER_PAGE_OPTIONS`].
    pub fn set_per_page(&mut self, per_page: usize) -> bool {
        if !PER_PAGE_OPTIONS.contains(&per_page) {
            tracing::warn!(per_page, "Ignoring unsupported page size");
            return false;
        }

        self.per_page = per_page;
        self.page = 1;
        true
    }

    /// Records `[offset, offset + per_page)` of `rows`, cut short at the end.
    pub fn visible<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.offset().min(rows.len());
        let end = (start + self.per_page).min(rows.len());
        &rows[start..end]
    }
}

/// Page numbers to show as buttons: at most `width` pages around `page`.
pub fn page_window(page: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let width = width.clamp(1, total_pages);
    let page = page.clamp(1, total_pages);

    let mut start = page.saturating_sub(width / 2).max(1);
    if start + width - 1 > total_pages {
        start = total_pages + 1 - width;
    }

    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let paginator = Paginator::default();
        assert_eq!(paginator.page(), 1);
        assert_eq!(paginator.per_page(), 10);
        assert_eq!(paginator.offset(), 0);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        assert_eq!(Paginator::default().total_pages(0), 1);
    }

    #[test]
    fn test_seven_records_five_per_page() {
        let rows: Vec<u32> = (1..=7).collect();
        let mut paginator = Paginator::default();
        assert!(paginator.set_per_page(5));

        assert_eq!(paginator.total_pages(rows.len()), 2);
        assert_eq!(paginator.visible(&rows), [1, 2, 3, 4, 5]);

        paginator.set_page(2, rows.len());
        assert_eq!(paginator.offset(), 5);
        assert_eq!(paginator.visible(&rows), [6, 7]);
    }

    #[test]
    fn test_set_per_page_resets_page() {
        let mut paginator = Paginator::default();
        paginator.set_page(3, 50);
        assert_eq!(paginator.page(), 3);

        assert!(paginator.set_per_page(20));
        assert_eq!(paginator.page(), 1);
        assert_eq!(paginator.per_page(), 20);
    }

    #[test]
    fn test_rejects_unknown_page_size() {
        let mut paginator = Paginator::default();
        paginator.set_page(2, 30);

        assert!(!paginator.set_per_page(7));
        assert_eq!(paginator.per_page(), 10);
        assert_eq!(paginator.page(), 2);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut paginator = Paginator::default();
        paginator.set_page(99, 25);
        assert_eq!(paginator.page(), 3);

        paginator.set_page(0, 25);
        assert_eq!(paginator.page(), 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 1, 5), vec![1]);
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn total_pages_formula(len in 0usize..500, option in 0usize..PER_PAGE_OPTIONS.len()) {
            let per_page = PER_PAGE_OPTIONS[option];
            let mut paginator = Paginator::default();
            paginator.set_per_page(per_page);

            let expected = std::cmp::max(1, (len + per_page - 1) / per_page);
            prop_assert_eq!(paginator.total_pages(len), expected);
        }

        #[test]
        fn visible_slice_matches_offset(
            len in 0usize..200,
            option in 0usize..PER_PAGE_OPTIONS.len(),
            page in 1usize..50,
        ) {
            let rows: Vec<usize> = (0..len).collect();
            let mut paginator = Paginator::default();
            paginator.set_per_page(PER_PAGE_OPTIONS[option]);
            paginator.set_page(page, len);

            let offset = (paginator.page() - 1) * paginator.per_page();
            let visible = paginator.visible(&rows);

            prop_assert_eq!(paginator.offset(), offset);
            prop_assert!(visible.len() <= paginator.per_page());
            let expected_end = (offset + paginator.per_page()).min(len);
            prop_assert_eq!(visible, &rows[offset.min(len)..expected_end]);
        }
    }
}
