//! Load state for the product listing, plus the teardown guard.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::CatalogError;
use crate::product::Product;

/// Phase of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadPhase {
    /// Before the first settle. The UI shows a progress indicator.
    Loading,
    /// The fully-populated listing, published in a single transition so
    /// observers never see a partial list.
    Ready(Vec<Product>),
    /// The load failed; the UI shows the message in place of the list.
    Failed(CatalogError),
}

/// State owned by the grid's loader.
///
/// Starts in `Loading` and settles at most once per mount. There is no
/// refresh, so a settled state never returns to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    phase: LoadPhase,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
        }
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    /// Items of the published listing; empty until `Ready`.
    pub fn items(&self) -> &[Product] {
        match &self.phase {
            LoadPhase::Ready(items) => items,
            _ => &[],
        }
    }

    /// Apply the outcome of the fetch.
    ///
    /// The first settle wins; later attempts are ignored, so a settled state
    /// can never change or revert within the mount's lifetime.
    pub fn settle(&mut self, outcome: Result<Vec<Product>, CatalogError>) {
        if !self.is_loading() {
            tracing::debug!("ignoring settle on an already-settled listing");
            return;
        }
        self.phase = match outcome {
            Ok(items) => LoadPhase::Ready(items),
            Err(err) => LoadPhase::Failed(err),
        };
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Teardown guard captured when the loader is activated.
///
/// A clone travels with the in-flight load; the consumer cancels the token
/// on teardown, and the load checks it before settling, so no state mutation
/// can happen after the grid is gone. The flag is read-then-written on the
/// single UI thread (`Rc`, deliberately not `Arc`).
#[derive(Debug, Clone)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
