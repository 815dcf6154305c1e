use crate::config::AppConfig;
use crate::dashboards::d404_product_sales::{ProductSalesDashboard, SalesStore};
use crate::layout::Navbar;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Single sales store for the page, shared via context.
    let store = SalesStore::new(&config);
    provide_context(store);

    // Fetch once on mount
    Effect::new(move |_| store.load());

    view! {
        <ConfigProvider>
            <div class="app" style="background: #F3F4F6; min-height: 100vh;">
                <Navbar />
                <ProductSalesDashboard />
            </div>
        </ConfigProvider>
    }
}
