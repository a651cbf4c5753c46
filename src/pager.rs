//! Client-side pagination
//!
//! Computes the visible slice of an ordered collection and a condensed
//! page-index bar (`1 … 4 5 [6] 7 8 … 20`). Item types are opaque: only the
//! collection length matters to the pager.

pub mod pager_render;
mod pager_state;

pub use pager_render::render_pager;
pub use pager_state::{
    DEFAULT_PAGE_SIZE, DEFAULT_WINDOW, PageChange, PageIndicator, Pager, compute_page_indicators,
    compute_visible, total_pages,
};
