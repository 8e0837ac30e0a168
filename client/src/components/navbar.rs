//! Fixed top navigation with scrollspy links and the theme toggle.

use leptos::prelude::*;

use crate::consts::{DARK_MODE_TOGGLE_ID, SITE_TITLE};
use crate::state::ui::UiState;

/// In-page anchors, in the order the sections appear.
pub const NAV_LINKS: &[(&str, &str)] =
    &[("#home", "Home"), ("#about", "About"), ("#projects", "Projects"), ("#contact", "Contact")];

/// Top navbar. Styling reacts to scroll position; the active link follows
/// the section under the scrollspy marker line.
#[component]
pub fn Navbar(on_toggle_theme: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let links = NAV_LINKS
        .iter()
        .map(|&(href, label)| {
            view! {
                <li class="nav-item">
                    <a class="nav-link" class:active=move || ui.with(|u| u.is_nav_active(href)) href=href>
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar fixed-top" class:navbar-scrolled=move || ui.with(|u| u.navbar_scrolled)>
            <div class="container navbar__inner">
                <a class="navbar-brand" href="#home">{SITE_TITLE}</a>
                <ul class="navbar-nav">{links}</ul>
                <button
                    id=DARK_MODE_TOGGLE_ID
                    class="btn dark-mode-toggle"
                    on:click=move |_| on_toggle_theme.run(())
                    title="Toggle dark mode (Ctrl+D)"
                    aria-label="Toggle dark mode"
                >
                    {move || if ui.with(|u| u.theme.is_dark()) { "☀" } else { "☾" }}
                </button>
            </div>
        </nav>
    }
}
