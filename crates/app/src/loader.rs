//! One-shot catalog loader with a teardown guard.

use leptos::*;

use storefront_catalog::{CancelToken, ListState, decorate_stock};

use crate::api;

/// Owns the grid's [`ListState`] and the in-flight fetch.
///
/// Activation is tied to component mount: the fetch starts immediately and
/// the decorated listing is published in a single state transition. A load
/// that outlives its component is discarded silently.
#[derive(Clone, Copy)]
pub struct CatalogLoader {
    state: RwSignal<ListState>,
}

impl CatalogLoader {
    /// Start the single catalog load for this mount.
    ///
    /// Registers a cleanup hook that cancels the in-flight load; the guard
    /// is checked before the signal is touched, so a torn-down grid never
    /// observes a state change.
    pub fn activate() -> Self {
        let state = create_rw_signal(ListState::new());
        let token = CancelToken::new();

        on_cleanup({
            let token = token.clone();
            move || token.cancel()
        });

        spawn_local(async move {
            let outcome = api::fetch_products().await.map(|mut items| {
                decorate_stock(&mut items, &mut rand::thread_rng());
                items
            });

            if token.is_cancelled() {
                tracing::debug!("catalog load finished after teardown, discarding");
                return;
            }

            if let Err(err) = &outcome {
                tracing::error!("catalog load failed: {err}");
            }

            state.update(|listing| listing.settle(outcome));
        });

        Self { state }
    }

    /// Read handle for the grid.
    pub fn state(&self) -> RwSignal<ListState> {
        self.state
    }
}
