//! Floating scroll-to-top control.

use leptos::prelude::*;

use crate::consts::SCROLL_TOP_BUTTON_ID;
use crate::state::ui::UiState;
use crate::util::scroll;

/// Hidden until the page is scrolled past the threshold.
#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            id=SCROLL_TOP_BUTTON_ID
            class="scroll-top-btn"
            style:display=move || if ui.with(|u| u.scroll_top_visible) { "block" } else { "none" }
            on:click=move |_| scroll::scroll_to_top()
            title="Back to top"
            aria-label="Back to top"
        >
            "↑"
        </button>
    }
}
