//! Product records and display formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Catalog entry identifier, unique and stable per listing.
///
/// Used as the rendering key for cards, so it must stay stable across
/// re-renders of the same listing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One product as served by the catalog endpoint.
///
/// `in_stock` is optional on the wire (`inStock`); after
/// [`decorate_stock`](crate::stock::decorate_stock) it is always `Some`.
/// Fields the endpoint sends beyond these (description, category, rating)
/// are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Non-negative decimal amount. Display rounding lives in
    /// [`Product::price_label`].
    pub price: Decimal,
    /// URI of a raster image.
    pub image: String,
    /// Synthetic availability flag; not a real inventory signal.
    #[serde(rename = "inStock", default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl Product {
    /// Missing stock information means the product is treated as available.
    pub fn is_available(&self) -> bool {
        self.in_stock.unwrap_or(true)
    }

    /// Price as a currency-like string with exactly two fractional digits.
    ///
    /// Rounds halves away from zero: `19.995` formats as `$20.00`.
    pub fn price_label(&self) -> String {
        let rounded = self
            .price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${rounded:.2}")
    }

    /// Stock-driven primary action for this product's card.
    pub fn call_to_action(&self) -> CallToAction {
        if self.is_available() {
            CallToAction::AddToCart
        } else {
            CallToAction::OutOfStock
        }
    }
}

/// Primary action shown on a card, derived from availability.
///
/// The button deliberately has no handler (there is no cart subsystem);
/// enablement only governs interactivity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CallToAction {
    AddToCart,
    OutOfStock,
}

impl CallToAction {
    pub fn label(&self) -> &'static str {
        match self {
            CallToAction::AddToCart => "Add to Cart",
            CallToAction::OutOfStock => "Out of Stock",
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, CallToAction::AddToCart)
    }
}
