//! `storefront-catalog`
//!
//! **Responsibility:** Domain layer of the storefront.
//!
//! Pure data and state machinery (no IO, no HTTP, no rendering): wire
//! decoding of product records, price display, synthetic stock decoration,
//! the one-shot load state with its teardown guard, and the per-card
//! variant model. The frontend crate projects this state into the view.

pub mod error;
pub mod product;
pub mod state;
pub mod stock;
pub mod variant;

pub use error::{CatalogError, CatalogResult};
pub use product::{CallToAction, Product, ProductId};
pub use state::{CancelToken, ListState, LoadPhase};
pub use stock::{IN_STOCK_RATE, decorate_stock};
pub use variant::Variant;
