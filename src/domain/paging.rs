//! Paging - Fixed-Size Page Window Math
//!
//! Pages are 1-based. A list of zero items has zero pages.

use std::ops::Range;

/// A navigation request coming from the pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// Step back one page
    Previous,
    /// Step forward one page
    Next,
    /// Jump straight to a page number
    Jump(usize),
}

/// Number of pages needed for `len` items
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Index range of `page` within a list of `len` items, clipped to the list
pub fn page_range(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Pull `page` into `1..=page_count`, treating an empty list as page 1
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

/// Resolve a navigation request against the current page.
///
/// Requests that would leave `1..=page_count` leave the page unchanged.
pub fn navigate(current: usize, page_count: usize, request: PageRequest) -> usize {
    match request {
        PageRequest::Previous if current > 1 => current - 1,
        PageRequest::Next if current < page_count => current + 1,
        PageRequest::Jump(page) if (1..=page_count).contains(&page) => page,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn last_page_holds_remainder() {
        assert_eq!(page_range(1, 10, 25), 0..10);
        assert_eq!(page_range(2, 10, 25), 10..20);
        assert_eq!(page_range(3, 10, 25), 20..25);
        assert_eq!(page_range(4, 10, 25), 25..25);
        assert_eq!(page_range(1, 10, 0), 0..0);
    }

    #[test]
    fn every_full_page_has_page_size_rows() {
        for len in 0..45 {
            let pages = page_count(len, 10);
            for page in 1..=pages {
                let range = page_range(page, 10, len);
                if page < pages {
                    assert_eq!(range.len(), 10);
                } else {
                    assert_eq!(range.len(), len - (pages - 1) * 10);
                }
            }
        }
    }

    #[test]
    fn navigation_is_a_noop_at_boundaries() {
        assert_eq!(navigate(1, 3, PageRequest::Previous), 1);
        assert_eq!(navigate(2, 3, PageRequest::Previous), 1);
        assert_eq!(navigate(3, 3, PageRequest::Next), 3);
        assert_eq!(navigate(2, 3, PageRequest::Next), 3);
        assert_eq!(navigate(1, 0, PageRequest::Next), 1);
    }

    #[test]
    fn jump_outside_range_is_ignored() {
        assert_eq!(navigate(1, 3, PageRequest::Jump(3)), 3);
        assert_eq!(navigate(2, 3, PageRequest::Jump(0)), 2);
        assert_eq!(navigate(2, 3, PageRequest::Jump(4)), 2);
    }

    #[test]
    fn clamp_keeps_page_within_bounds() {
        assert_eq!(clamp_page(5, 3), 3);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(4, 0), 1);
        assert_eq!(clamp_page(2, 3), 2);
    }
}
