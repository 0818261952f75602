//! Leptos components: the storefront page, the product grid, and one card.

use leptos::*;

use storefront_catalog::{LoadPhase, Product, Variant};

use crate::loader::CatalogLoader;

/// Root component mounted onto the document body.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app">
            <header>
                <h1>"Storefront"</h1>
            </header>
            <main>
                <ProductGrid/>
            </main>
        </div>
    }
}

/// Product listing: activates the loader exactly once per mount, then fans
/// out to one card per item, keyed by product id.
#[component]
fn ProductGrid() -> impl IntoView {
    let loader = CatalogLoader::activate();
    let state = loader.state();

    view! {
        <section class="product-grid">
            {move || {
                let listing = state.get();
                match listing.phase() {
                    LoadPhase::Loading => view! {
                        <div class="grid-loading">
                            <progress aria-label="Loading products"></progress>
                        </div>
                    }
                    .into_view(),
                    LoadPhase::Ready(items) => {
                        let items = items.clone();
                        view! {
                            <ul class="card-grid">
                                <For
                                    each=move || items.clone()
                                    key=|product| product.id
                                    children=|product: Product| view! { <ProductCard product=product/> }
                                />
                            </ul>
                        }
                        .into_view()
                    }
                    LoadPhase::Failed(err) => view! {
                        <div class="grid-error" role="alert">
                            <p>"Could not load the catalog."</p>
                            <p class="grid-error-detail">{err.to_string()}</p>
                        </div>
                    }
                    .into_view(),
                }
            }}
        </section>
    }
}

/// One product card: image, single-line title, price, variant selector, and
/// the stock-driven action. Selection state is private to this instance and
/// dropped with it.
#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let variant = create_rw_signal(Variant::default());
    let cta = product.call_to_action();

    view! {
        <li class="product-card">
            <img class="card-image" src=product.image.clone() alt=product.title.clone()/>
            <div class="card-body">
                <h2 class="card-title">{product.title.clone()}</h2>
                <p class="card-price">{product.price_label()}</p>
                <label class="card-variant">
                    "Variant"
                    <select
                        prop:value=move || variant.get().label().to_string()
                        on:change=move |ev| {
                            if let Some(choice) = Variant::from_label(&event_target_value(&ev)) {
                                variant.set(choice);
                            }
                        }
                    >
                        {Variant::ALL
                            .iter()
                            .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <div class="card-actions">
                // No click handler: there is no cart subsystem to hand off to.
                <button class="card-cta" disabled=!cta.is_enabled()>
                    {cta.label()}
                </button>
            </div>
        </li>
    }
}
