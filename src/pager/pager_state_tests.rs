//! Tests for pager state

use super::*;
use proptest::prelude::*;

use PageIndicator::{Ellipsis, Page};

#[test]
fn test_total_pages() {
    assert_eq!(total_pages(0, 5), 0);
    assert_eq!(total_pages(1, 5), 1);
    assert_eq!(total_pages(5, 5), 1);
    assert_eq!(total_pages(6, 5), 2);
    assert_eq!(total_pages(12, 5), 3);
    assert_eq!(total_pages(12, 0), 0);
}

#[test]
fn test_compute_visible_second_page_of_twelve() {
    let items: Vec<usize> = (0..12).collect();

    let visible = compute_visible(&items, 5, 2);

    assert_eq!(visible, &[5, 6, 7, 8, 9]);
}

#[test]
fn test_compute_visible_last_page_is_partial() {
    let items: Vec<usize> = (0..12).collect();

    assert_eq!(compute_visible(&items, 5, 3), &[10, 11]);
}

#[test]
fn test_compute_visible_out_of_range_is_empty() {
    let items: Vec<usize> = (0..12).collect();

    assert!(compute_visible(&items, 5, 4).is_empty());
    assert!(compute_visible(&items, 5, 0).is_empty());
    assert!(compute_visible(&items, 0, 1).is_empty());
    assert!(compute_visible(&items, 5, usize::MAX).is_empty());
}

#[test]
fn test_indicators_no_ellipsis_when_all_pages_fit() {
    assert_eq!(
        compute_page_indicators(2, 3, 2),
        vec![Page(1), Page(2), Page(3)]
    );
    assert_eq!(
        compute_page_indicators(3, 5, 2),
        vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
    );
}

#[test]
fn test_indicators_empty_for_zero_pages() {
    assert!(compute_page_indicators(1, 0, 2).is_empty());
}

#[test]
fn test_indicators_single_page() {
    assert_eq!(compute_page_indicators(1, 1, 2), vec![Page(1)]);
}

#[test]
fn test_indicators_both_gaps_collapsed() {
    assert_eq!(
        compute_page_indicators(6, 20, 2),
        vec![
            Page(1),
            Ellipsis,
            Page(4),
            Page(5),
            Page(6),
            Page(7),
            Page(8),
            Ellipsis,
            Page(20)
        ]
    );
}

#[test]
fn test_indicators_single_skipped_page_becomes_ellipsis() {
    assert_eq!(
        compute_page_indicators(1, 5, 2),
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(5)]
    );
}

#[test]
fn test_indicators_current_page_out_of_range() {
    // Collection shrank under a stale page: still bounded by 1 and the last page
    assert_eq!(
        compute_page_indicators(10, 3, 2),
        vec![Page(1), Ellipsis, Page(3)]
    );
}

#[test]
fn test_pager_defaults() {
    let pager = Pager::default();

    assert_eq!(pager.page_size(), DEFAULT_PAGE_SIZE);
    assert_eq!(pager.current_page(), 1);
    assert_eq!(pager.total_pages(), 0);
}

#[test]
fn test_pager_zero_page_size_is_bumped() {
    assert_eq!(Pager::new(0).page_size(), 1);
}

#[test]
fn test_on_page_change_bounds() {
    let mut pager = Pager::new(5);
    pager.set_len(12);

    assert_eq!(pager.on_page_change(0), PageChange::Ignored);
    assert_eq!(pager.on_page_change(4), PageChange::Ignored);
    assert_eq!(pager.current_page(), 1);

    assert_eq!(pager.on_page_change(3), PageChange::Accepted);
    assert_eq!(pager.current_page(), 3);
}

#[test]
fn test_on_page_change_empty_collection_ignores_everything() {
    let mut pager = Pager::new(5);

    assert_eq!(pager.on_page_change(1), PageChange::Ignored);
    assert_eq!(pager.current_page(), 1);
}

#[test]
fn test_navigation_helpers_stop_at_boundaries() {
    let mut pager = Pager::new(5);
    pager.set_len(12);

    assert_eq!(pager.prev(), PageChange::Ignored);
    assert_eq!(pager.next(), PageChange::Accepted);
    assert_eq!(pager.next(), PageChange::Accepted);
    assert_eq!(pager.current_page(), 3);
    assert_eq!(pager.next(), PageChange::Ignored);
    assert!(!pager.has_next());
    assert!(pager.has_prev());

    assert_eq!(pager.first(), PageChange::Accepted);
    assert_eq!(pager.current_page(), 1);
    assert_eq!(pager.last(), PageChange::Accepted);
    assert_eq!(pager.current_page(), 3);
}

#[test]
fn test_set_len_clamps_after_shrink() {
    let mut pager = Pager::new(5);
    pager.set_len(11);
    pager.last();
    assert_eq!(pager.current_page(), 3);

    // Deleting the only row on the last page moves back a page
    pager.set_len(10);
    assert_eq!(pager.current_page(), 2);

    pager.set_len(0);
    assert_eq!(pager.current_page(), 1);
}

#[test]
fn test_set_len_growth_keeps_page() {
    let mut pager = Pager::new(5);
    pager.set_len(12);
    pager.on_page_change(2);

    pager.set_len(40);

    assert_eq!(pager.current_page(), 2);
}

#[test]
fn test_reset() {
    let mut pager = Pager::new(5);
    pager.set_len(30);
    pager.last();

    pager.reset();

    assert_eq!(pager.current_page(), 1);
}

#[test]
fn test_visible_and_row_numbers() {
    let items: Vec<char> = "abcdefghijkl".chars().collect();
    let mut pager = Pager::new(5);
    pager.set_len(items.len());
    pager.on_page_change(2);

    assert_eq!(pager.visible(&items), &['f', 'g', 'h', 'i', 'j']);
    assert_eq!(pager.row_number(0), 6);
    assert_eq!(pager.absolute_index(4), 9);
}

#[test]
fn test_with_window() {
    let mut pager = Pager::new(1).with_window(1);
    pager.set_len(9);
    pager.on_page_change(5);

    assert_eq!(
        pager.indicators(),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Slices of every valid page are disjoint, ordered, and cover the items
    #[test]
    fn prop_pages_partition_items(len in 0usize..200, page_size in 1usize..20) {
        let items: Vec<usize> = (0..len).collect();
        let mut rebuilt = Vec::with_capacity(len);

        for page in 1..=total_pages(len, page_size) {
            let slice = compute_visible(&items, page_size, page);
            prop_assert!(!slice.is_empty());
            prop_assert!(slice.len() <= page_size);
            rebuilt.extend_from_slice(slice);
        }

        prop_assert_eq!(rebuilt, items);
    }

    /// First and last page always shown, numbers increase, no double ellipsis
    #[test]
    fn prop_indicator_shape(total in 1usize..200, current_seed in 0usize..400, window in 0usize..5) {
        let current = current_seed % (total + 2);
        let indicators = compute_page_indicators(current, total, window);

        prop_assert_eq!(indicators.first(), Some(&Page(1)));
        prop_assert_eq!(indicators.last(), Some(&Page(total)));

        let pages: Vec<usize> = indicators
            .iter()
            .filter_map(|i| match i {
                Page(p) => Some(*p),
                Ellipsis => None,
            })
            .collect();
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));

        prop_assert!(
            indicators
                .windows(2)
                .all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis))
        );
    }

    /// Every page within the window of an in-range current page is listed
    #[test]
    fn prop_window_pages_listed(total in 1usize..100, current_seed in 0usize..100, window in 0usize..5) {
        let current = current_seed % total + 1;
        let indicators = compute_page_indicators(current, total, window);

        let lo = current.saturating_sub(window).max(1);
        let hi = (current + window).min(total);
        for page in lo..=hi {
            prop_assert!(indicators.contains(&Page(page)));
        }
    }

    /// Only pages in 1..=total_pages are accepted
    #[test]
    fn prop_page_change_accepts_only_valid(len in 0usize..100, requested in 0usize..30) {
        let mut pager = Pager::new(5);
        pager.set_len(len);
        let before = pager.current_page();

        let outcome = pager.on_page_change(requested);

        if requested >= 1 && requested <= pager.total_pages() {
            prop_assert_eq!(outcome, PageChange::Accepted);
            prop_assert_eq!(pager.current_page(), requested);
        } else {
            prop_assert_eq!(outcome, PageChange::Ignored);
            prop_assert_eq!(pager.current_page(), before);
        }
    }
}
