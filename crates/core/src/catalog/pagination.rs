//! Fixed-size pagination with clamping.

use std::num::NonZeroUsize;

use serde::Serialize;

/// Default number of products per catalog page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(size) => size,
    None => unreachable!(),
};

/// One page of a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a, T> {
    /// Items on this page, in list order.
    pub items: &'a [T],
    /// Zero-based index actually served, after clamping.
    pub index: usize,
    /// Number of pages, never less than one.
    pub total_pages: usize,
    /// Length of the whole list.
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> Page<'_, T> {
    /// Index of the following page, or `None` on the last page.
    #[must_use]
    pub const fn next_index(&self) -> Option<usize> {
        if self.index + 1 < self.total_pages {
            Some(self.index + 1)
        } else {
            None
        }
    }

    /// Index of the preceding page, or `None` on the first page.
    #[must_use]
    pub const fn prev_index(&self) -> Option<usize> {
        self.index.checked_sub(1)
    }
}

/// Number of pages needed for `len` items, at least one.
#[must_use]
pub const fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    let pages = len.div_ceil(page_size.get());
    if pages == 0 { 1 } else { pages }
}

/// Cut a page out of a list.
///
/// A `page_index` past the end is clamped to the last page, so a list that
/// shrank under a stale index still shows its final items instead of an
/// empty page.
///
/// ```
/// use std::num::NonZeroUsize;
/// use remakeup_core::catalog::paginate;
///
/// let items: Vec<u32> = (0..25).collect();
/// let size = NonZeroUsize::new(12).unwrap();
///
/// let page = paginate(&items, 5, size);
/// assert_eq!(page.index, 2);
/// assert_eq!(page.items, &[24]);
/// ```
#[must_use]
pub fn paginate<T>(items: &[T], page_index: usize, page_size: NonZeroUsize) -> Page<'_, T> {
    let total_pages = total_pages(items.len(), page_size);
    let index = page_index.min(total_pages - 1);
    let slice = items.chunks(page_size.get()).nth(index).unwrap_or_default();

    Page {
        items: slice,
        index,
        total_pages,
        total_items: items.len(),
        page_size: page_size.get(),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, size(12)), 1);
        assert_eq!(total_pages(12, size(12)), 1);
        assert_eq!(total_pages(13, size(12)), 2);
        assert_eq!(total_pages(25, size(12)), 3);
    }

    #[test]
    fn test_clamps_past_the_end() {
        let items: Vec<u32> = (0..25).collect();
        let clamped = paginate(&items, 5, size(12));
        let last = paginate(&items, 2, size(12));

        assert_eq!(clamped.total_pages, 3);
        assert_eq!(clamped.index, 2);
        assert_eq!(clamped.items, last.items);
        assert_eq!(clamped.items, &[24]);
    }

    #[test]
    fn test_middle_page() {
        let items: Vec<u32> = (0..25).collect();
        let page = paginate(&items, 1, size(12));
        assert_eq!(page.items.first(), Some(&12));
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.prev_index(), Some(0));
        assert_eq!(page.next_index(), Some(2));
    }

    #[test]
    fn test_empty_list_has_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 3, size(12));
        assert_eq!(page.index, 0);
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.next_index(), None);
        assert_eq!(page.prev_index(), None);
    }

    #[test]
    fn test_navigation_stops_at_boundaries() {
        let items: Vec<u32> = (0..24).collect();
        assert_eq!(paginate(&items, 0, size(12)).prev_index(), None);
        assert_eq!(paginate(&items, 1, size(12)).next_index(), None);
    }

    proptest! {
        #[test]
        fn pages_rebuild_the_list(len in 0usize..200, page_size in 1usize..40) {
            let items: Vec<usize> = (0..len).collect();
            let page_size = size(page_size);
            let pages = total_pages(items.len(), page_size);

            let rebuilt: Vec<usize> = (0..pages)
                .flat_map(|i| paginate(&items, i, page_size).items.to_vec())
                .collect();

            prop_assert_eq!(rebuilt, items);
        }

        #[test]
        fn index_is_always_valid(len in 0usize..200, page_size in 1usize..40, index in 0usize..500) {
            let items: Vec<usize> = (0..len).collect();
            let page = paginate(&items, index, size(page_size));

            prop_assert!(page.index < page.total_pages);
            prop_assert!(page.items.len() <= page_size);
            prop_assert_eq!(page.items.is_empty(), items.is_empty());
        }
    }
}
