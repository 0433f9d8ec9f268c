//! Pagination Utilities
//!
//! Page-window arithmetic shared by the news board.

/// Number of pages needed for `count` items. Zero items (or a zero page size) means zero pages.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice of `items` shown on `page_index`, clamped to bounds
pub fn list_page<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page after `page`, wrapping around. Unchanged when there is at most one page.
pub fn next_page(page: usize, total: usize) -> usize {
    if total <= 1 {
        return page;
    }
    (page + 1) % total
}

/// Page before `page`, wrapping around. Unchanged when there is at most one page.
pub fn prev_page(page: usize, total: usize) -> usize {
    if total <= 1 {
        return page;
    }
    (page % total + total - 1) % total
}

/// Clamp `page` to the last existing page (0 when there are none)
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.min(total.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 3), 0);
        assert_eq!(total_pages(1, 3), 1);
        assert_eq!(total_pages(3, 3), 1);
        assert_eq!(total_pages(4, 3), 2);
        assert_eq!(total_pages(10, 3), 4);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_list_page_windows() {
        let items = ['A', 'B', 'C', 'D'];
        assert_eq!(list_page(&items, 0, 3), &['A', 'B', 'C']);
        assert_eq!(list_page(&items, 1, 3), &['D']);
        // Out of range pages are empty, not a panic
        assert!(list_page(&items, 2, 3).is_empty());
        assert!(list_page(&items, usize::MAX, 3).is_empty());
        assert!(list_page::<char>(&[], 0, 3).is_empty());
    }

    #[test]
    fn test_next_page_cycles() {
        for count in 1..20 {
            for size in 1..5 {
                let total = total_pages(count, size);
                for start in 0..total {
                    let mut page = start;
                    for _ in 0..total {
                        page = next_page(page, total);
                    }
                    assert_eq!(page, start, "count={} size={}", count, size);

                    let mut page = start;
                    for _ in 0..total {
                        page = prev_page(page, total);
                    }
                    assert_eq!(page, start, "count={} size={}", count, size);
                }
            }
        }
    }

    #[test]
    fn test_wrap_and_single_page() {
        assert_eq!(next_page(1, 2), 0);
        assert_eq!(prev_page(0, 2), 1);
        assert_eq!(next_page(0, 1), 0);
        assert_eq!(prev_page(0, 1), 0);
        assert_eq!(next_page(0, 0), 0);
        assert_eq!(prev_page(0, 0), 0);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(3, 2), 1);
        assert_eq!(clamp_page(1, 2), 1);
        assert_eq!(clamp_page(4, 0), 0);
    }
}
