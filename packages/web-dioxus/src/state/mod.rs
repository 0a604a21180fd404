//! View state for the draft listings table

mod pagination;

pub use pagination::*;

use std::cell::Cell;
use std::rc::Rc;

use crate::api::FETCH_ERROR_FALLBACK;
use crate::types::Lowongan;

/// Outcome of the one fetch a table performs.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded(Vec<Lowongan>),
}

/// What the table body shows right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TableView<'a> {
    Loading,
    Error(&'a str),
    Empty,
    Rows { offset: usize, rows: &'a [Lowongan] },
}

/// Fetched listings, load status and pagination of one table instance.
///
/// Starts in [`LoadState::Loading`] and moves to `Failed` or `Loaded` exactly
/// once; there is no way back to `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftTableState {
    load: LoadState,
    paginator: Paginator,
}

impl Default for DraftTableState {
    fn default() -> Self {
        Self::new()
    }
}

impl DraftTableState {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            paginator: Paginator::default(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// All fetched listings; empty until the fetch succeeds.
    pub fn listings(&self) -> &[Lowongan] {
        match &self.load {
            LoadState::Loaded(listings) => listings,
            _ => &[],
        }
    }

    /// Apply the fetch outcome. Only the first call has an effect.
    ///
    /// A blank error message is replaced by [`FETCH_ERROR_FALLBACK`].
    pub fn resolve(&mut self, result: Result<Vec<Lowongan>, String>) -> bool {
        if !self.is_loading() {
            tracing::warn!("Draft listings already resolved, ignoring late result");
            return false;
        }

        self.load = match result {
            Ok(listings) => {
                tracing::debug!(count = listings.len(), "Draft listings loaded");
                LoadState::Loaded(listings)
            }
            Err(message) if message.trim().is_empty() => {
                LoadState::Failed(FETCH_ERROR_FALLBACK.to_string())
            }
            Err(message) => {
                tracing::debug!(%message, "Draft listings failed to load");
                LoadState::Failed(message)
            }
        };
        true
    }

    pub fn paginator(&self) -> Paginator {
        self.paginator
    }

    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages(self.listings().len())
    }

    pub fn set_page(&mut self, page: usize) {
        let len = self.listings().len();
        self.paginator.set_page(page, len);
    }

    pub fn set_per_page(&mut self, per_page: usize) -> bool {
        self.paginator.set_per_page(per_page)
    }

    /// Listings on the current page.
    pub fn visible_rows(&self) -> &[Lowongan] {
        self.paginator.visible(self.listings())
    }

    pub fn view(&self) -> TableView<'_> {
        match &self.load {
            LoadState::Loading => TableView::Loading,
            LoadState::Failed(message) => TableView::Error(message),
            LoadState::Loaded(_) => {
                let rows = self.visible_rows();
                if rows.is_empty() {
                    TableView::Empty
                } else {
                    TableView::Rows {
                        offset: self.paginator.offset(),
                        rows,
                    }
                }
            }
        }
    }
}

/// Cancelled when the owning component is torn down.
///
/// An in-flight fetch checks this before writing its result, so a response
/// that arrives after unmount never touches disposed state.
#[derive(Debug, Clone, Default)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}
