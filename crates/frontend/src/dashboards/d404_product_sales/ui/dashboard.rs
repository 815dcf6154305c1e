use super::product_details::ProductDetails;
use super::sales_chart::SalesChart;
use super::sales_table::SalesTable;
use crate::dashboards::d404_product_sales::aggregation::group_by_month;
use crate::dashboards::d404_product_sales::state::{FetchStatus, SalesStore};
use crate::shared::components::Panel;
use contracts::dashboards::d404_product_sales::ProductDto;
use leptos::prelude::*;
use thaw::*;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const FAILED_MESSAGE: &str = "Failed to fetch sales data. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No product data available.";

/// Product sales dashboard: details on the left, chart and table on the right
#[component]
pub fn ProductSalesDashboard() -> impl IntoView {
    let store = use_context::<SalesStore>().expect("SalesStore context not found");
    let snapshot = store.snapshot();

    let status = Memo::new(move |_| snapshot.with(|s| s.status()));
    let product = Memo::new(move |_| snapshot.with(|s| s.product().cloned()));

    view! {
        <div id="d404_product_sales--dashboard" class="d404-dashboard">
            {move || match status.get() {
                FetchStatus::Loading => view! {
                    <p class="d404-status">{LOADING_MESSAGE}</p>
                }
                .into_any(),
                FetchStatus::Failed => view! {
                    <div class="d404-status d404-status--error">
                        <p>{FAILED_MESSAGE}</p>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| store.load()>
                            "Try again"
                        </Button>
                    </div>
                }
                .into_any(),
                FetchStatus::Idle | FetchStatus::Succeeded => match product.get() {
                    Some(product) => view! { <ProductView product=product /> }.into_any(),
                    None => view! { <p class="d404-status">{EMPTY_MESSAGE}</p> }.into_any(),
                },
            }}
        </div>
    }
}

#[component]
fn ProductView(product: ProductDto) -> impl IntoView {
    let monthly = group_by_month(&product.sales);
    let records = product.sales.clone();

    view! {
        <div style="display: grid; grid-template-columns: minmax(220px, 1fr) 3fr; gap: 16px; padding: 32px 16px 16px 16px;">
            <Panel>
                <ProductDetails product=product />
            </Panel>

            <div>
                <Panel title="Retail Sales" style="padding: 16px; margin-bottom: 56px;">
                    <SalesChart data=monthly />
                </Panel>

                <Panel>
                    <SalesTable records=records />
                </Panel>
            </div>
        </div>
    }
}
