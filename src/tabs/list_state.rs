//! Loaded collection + filter + pager + row selection for one tab

use crate::pager::{PageChange, Pager};

/// Where a tab's collection currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Never requested
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// A tab's list: every loaded record, the subset passing the tab's filter,
/// and the page/selection position within that subset.
#[derive(Debug)]
pub struct ListState<T> {
    items: Vec<T>,
    filtered: Vec<usize>,
    pub pager: Pager,
    selected: usize,
    load: LoadState,
    pending_request: Option<u64>,
}

impl<T> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            filtered: Vec::new(),
            pager: Pager::new(page_size),
            selected: 0,
            load: LoadState::Idle,
            pending_request: None,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_idle(&self) -> bool {
        self.load == LoadState::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.load == LoadState::Loading
    }

    /// Mark a fetch as issued. `None` means the request never left.
    pub fn begin_load(&mut self, request_id: Option<u64>) {
        match request_id {
            Some(id) => {
                self.pending_request = Some(id);
                self.load = LoadState::Loading;
            }
            None => {
                self.pending_request = None;
                self.load = LoadState::Failed("Not connected to the server".to_string());
            }
        }
    }

    /// Whether `request_id` answers the most recent fetch. Answers to older
    /// fetches must be dropped so a slow stale response never overwrites a
    /// newer one.
    pub fn is_pending(&self, request_id: u64) -> bool {
        self.pending_request == Some(request_id)
    }

    /// Install a freshly loaded collection, keeping the page where possible
    pub fn finish_load(&mut self, items: Vec<T>, keep: impl Fn(&T) -> bool) {
        self.items = items;
        self.pending_request = None;
        self.load = LoadState::Loaded;
        self.refilter(keep);
    }

    pub fn fail_load(&mut self, message: String) {
        self.pending_request = None;
        self.load = LoadState::Failed(message);
    }

    /// Recompute the filtered subset and clamp page and selection
    pub fn refilter(&mut self, keep: impl Fn(&T) -> bool) {
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| keep(item))
            .map(|(i, _)| i)
            .collect();
        self.pager.set_len(self.filtered.len());
        self.clamp_selection();
    }

    /// Refilter after the filter itself changed: back to page 1, first row
    pub fn apply_new_filter(&mut self, keep: impl Fn(&T) -> bool) {
        self.pager.reset();
        self.selected = 0;
        self.refilter(keep);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Records on the current page, in display order
    pub fn visible(&self) -> Vec<&T> {
        self.pager
            .visible(&self.filtered)
            .iter()
            .map(|&i| &self.items[i])
            .collect()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&T> {
        let index = *self.pager.visible(&self.filtered).get(self.selected)?;
        self.items.get(index)
    }

    pub fn select_next(&mut self) {
        let visible = self.pager.visible(&self.filtered).len();
        if self.selected + 1 < visible {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let visible = self.pager.visible(&self.filtered).len();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    fn after_page_change(&mut self, change: PageChange) -> PageChange {
        if change.is_accepted() {
            self.selected = 0;
        }
        change
    }

    pub fn next_page(&mut self) -> PageChange {
        let change = self.pager.next();
        self.after_page_change(change)
    }

    pub fn prev_page(&mut self) -> PageChange {
        let change = self.pager.prev();
        self.after_page_change(change)
    }

    pub fn first_page(&mut self) -> PageChange {
        let change = self.pager.first();
        self.after_page_change(change)
    }

    pub fn last_page(&mut self) -> PageChange {
        let change = self.pager.last();
        self.after_page_change(change)
    }

    /// Drop every record matching `pred`, then refilter with `keep`
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool, keep: impl Fn(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        let removed = before - self.items.len();
        if removed > 0 {
            self.refilter(keep);
        }
        removed
    }

    /// Apply `update` to every record matching `pred`, then refilter with `keep`
    pub fn update_where(
        &mut self,
        pred: impl Fn(&T) -> bool,
        update: impl Fn(&mut T),
        keep: impl Fn(&T) -> bool,
    ) -> usize {
        let mut updated = 0;
        for item in self.items.iter_mut().filter(|item| pred(item)) {
            update(item);
            updated += 1;
        }
        if updated > 0 {
            self.refilter(keep);
        }
        updated
    }
}

#[cfg(test)]
#[path = "list_state_tests.rs"]
mod list_state_tests;
