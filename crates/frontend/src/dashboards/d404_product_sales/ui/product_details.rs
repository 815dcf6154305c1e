use contracts::dashboards::d404_product_sales::ProductDto;
use leptos::prelude::*;
use thaw::*;

/// Picture, title, subtitle and tag chips of the product
#[component]
pub fn ProductDetails(product: ProductDto) -> impl IntoView {
    let ProductDto {
        title,
        subtitle,
        image,
        tags,
        ..
    } = product;
    let alt = title.clone();

    view! {
        <div class="product-details" style="padding-top: 16px;">
            <img
                src=image
                alt=alt
                style="display: block; height: 128px; width: 128px; margin: 0 auto; border-radius: 6px; object-fit: contain;"
            />
            <h2 style="font-size: 18px; font-weight: 700; margin: 16px 0 0 0; text-align: center;">{title}</h2>
            <p style="font-size: 14px; color: #9CA3AF; text-align: center; margin: 8px 16px 0 16px;">{subtitle}</p>

            <div style="border-top: 1px solid #D1D5DB; margin-top: 16px;"></div>

            <div style="display: flex; flex-wrap: wrap; justify-content: center; gap: 8px; margin: 16px 8px;">
                {tags
                    .into_iter()
                    .map(|tag| view! { <Badge appearance=BadgeAppearance::Outline>{tag}</Badge> })
                    .collect_view()}
            </div>

            <div style="border-bottom: 1px solid #D1D5DB;"></div>
        </div>
    }
}
