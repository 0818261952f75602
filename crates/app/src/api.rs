//! Catalog endpoint bindings using the browser fetch API.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, window};

use storefront_catalog::{CatalogError, Product};

/// The fixed catalog listing endpoint. One `GET` per grid mount, no timeout,
/// no retry.
pub const CATALOG_URL: &str = "https://fakestoreapi.com/products/";

/// Fetch the full product listing from the catalog endpoint.
///
/// Stock flags are not decorated here; the loader owns that step.
pub async fn fetch_products() -> Result<Vec<Product>, CatalogError> {
    fetch_json(CATALOG_URL).await
}

/// Issue a `GET` to `url` and decode the JSON body.
///
/// The browser parses the body (`Response::json()`); `serde-wasm-bindgen`
/// does the typed decode, so a non-conforming listing surfaces as
/// [`CatalogError::Parse`].
async fn fetch_json<T>(url: &str) -> Result<T, CatalogError>
where
    T: serde::de::DeserializeOwned,
{
    let window = window().ok_or_else(|| CatalogError::network("no window object"))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| CatalogError::network(format_js(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| CatalogError::network(format_js(&e)))?;

    if !response.ok() {
        return Err(CatalogError::api(response.status(), response.status_text()));
    }

    let body = response
        .json()
        .map_err(|e| CatalogError::parse(format_js(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| CatalogError::parse(format_js(&e)))?;

    serde_wasm_bindgen::from_value(body).map_err(|e| CatalogError::parse(e.to_string()))
}

fn format_js(value: &JsValue) -> String {
    format!("{value:?}")
}
