use leptos::prelude::*;

/// White card used for the dashboard sections
#[component]
pub fn Panel(
    /// Optional heading shown above the content
    #[prop(optional, into)]
    title: Option<String>,

    /// Extra inline style for the card
    #[prop(optional)]
    style: &'static str,

    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="panel"
            style=format!("background: #fff; border-radius: 6px; box-shadow: 0 1px 3px rgba(0,0,0,.12); {}", style)
        >
            {title.map(|t| view! {
                <h2 class="panel__title" style="font-size: 18px; font-weight: 400; color: #4B4B4B; margin: 0 0 16px 0;">{t}</h2>
            })}
            {children()}
        </section>
    }
}
