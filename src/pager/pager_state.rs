//! Pager state and pure page computations

/// Rows per page when nothing else is configured
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Pages shown on each side of the current page in the indicator bar
pub const DEFAULT_WINDOW: usize = 2;

/// One entry of the page-index bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndicator {
    /// A clickable page number (1-based)
    Page(usize),
    /// A collapsed run of skipped pages. Not clickable.
    Ellipsis,
}

/// Outcome of a page-change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChange {
    Accepted,
    Ignored,
}

impl PageChange {
    pub fn is_accepted(self) -> bool {
        self == PageChange::Accepted
    }
}

/// Number of pages needed for `len` items, `0` for an empty collection
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Returns `items[(current_page - 1) * page_size .. current_page * page_size]`,
/// truncated at the end of `items`.
///
/// The page is not clamped: a page past the end (or page 0) yields an empty
/// slice. Callers keep `current_page` in range via [`Pager::set_len`].
pub fn compute_visible<T>(items: &[T], page_size: usize, current_page: usize) -> &[T] {
    if page_size == 0 || current_page == 0 {
        return &[];
    }

    let start = (current_page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());

    &items[start..end]
}

/// Builds the condensed page-index bar.
///
/// Page 1 and `total_pages` are always present, as is every page within
/// `window` of `current_page`. Each run of skipped pages becomes a single
/// [`PageIndicator::Ellipsis`].
pub fn compute_page_indicators(
    current_page: usize,
    total_pages: usize,
    window: usize,
) -> Vec<PageIndicator> {
    let mut indicators = Vec::new();
    let mut last_shown = 0;

    for page in 1..=total_pages {
        let in_window = page.abs_diff(current_page) <= window;
        if page != 1 && page != total_pages && !in_window {
            continue;
        }

        if last_shown != 0 && page > last_shown + 1 {
            indicators.push(PageIndicator::Ellipsis);
        }
        indicators.push(PageIndicator::Page(page));
        last_shown = page;
    }

    indicators
}

/// Page position for one list screen
///
/// Tracks the collection length rather than the collection itself so the
/// owning screen keeps its items in whatever container it likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    window: usize,
    current_page: usize,
    total_items: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// Create a pager positioned on page 1. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            window: DEFAULT_WINDOW,
            current_page: 1,
            total_items: 0,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Record a new collection length and pull the current page back into
    /// `1..=max(1, total_pages)`.
    pub fn set_len(&mut self, len: usize) {
        self.total_items = len;
        let last = self.total_pages().max(1);
        if self.current_page > last {
            #[cfg(debug_assertions)]
            log::debug!(
                "Pager clamped page {} -> {} after length change to {}",
                self.current_page,
                last,
                len
            );
            self.current_page = last;
        }
    }

    /// Move to `requested_page` if it lies in `1..=total_pages`, otherwise
    /// leave the position untouched.
    pub fn on_page_change(&mut self, requested_page: usize) -> PageChange {
        if requested_page == 0 || requested_page > self.total_pages() {
            return PageChange::Ignored;
        }
        self.current_page = requested_page;
        PageChange::Accepted
    }

    pub fn first(&mut self) -> PageChange {
        self.on_page_change(1)
    }

    pub fn prev(&mut self) -> PageChange {
        self.on_page_change(self.current_page.saturating_sub(1))
    }

    pub fn next(&mut self) -> PageChange {
        self.on_page_change(self.current_page.saturating_add(1))
    }

    pub fn last(&mut self) -> PageChange {
        self.on_page_change(self.total_pages())
    }

    /// Back to page 1 (search text changed, tab reloaded)
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Slice of `items` shown on the current page
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        compute_visible(items, self.page_size, self.current_page)
    }

    pub fn indicators(&self) -> Vec<PageIndicator> {
        compute_page_indicators(self.current_page, self.total_pages(), self.window)
    }

    /// 1-based position in the whole collection of the `index`-th visible row
    pub fn row_number(&self, index: usize) -> usize {
        (self.current_page - 1) * self.page_size + index + 1
    }

    /// Index into the full collection of the `index`-th visible row
    pub fn absolute_index(&self, index: usize) -> usize {
        self.row_number(index) - 1
    }
}

#[cfg(test)]
#[path = "pager_state_tests.rs"]
mod pager_state_tests;
