//! Navbar component - brand bar at the top of the page.

use leptos::prelude::*;

pub const LOGO_PATH: &str = "/stackline_logo.svg";

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <div
            class="navbar"
            style="background: #00284d; padding: 24px; display: flex; align-items: center; justify-content: space-between;"
        >
            <img src=LOGO_PATH alt="Stackline Logo" style="height: 24px;" />
        </div>
    }
}
