//! Scroll-driven chrome: navbar styling, scroll-to-top visibility, scrollspy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page registers one window scroll listener. It samples `scrollY` and
//! the section geometry here, then writes the derived flags into `UiState`;
//! components only read those flags.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{NAVBAR_SCROLL_THRESHOLD, SCROLL_TOP_THRESHOLD, SCROLLSPY_OFFSET};

/// Vertical extent of one `section[id]` in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        self.top <= y && self.top + self.height > y
    }
}

#[must_use]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

#[must_use]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

/// First section, in document order, under the scrollspy marker line.
#[must_use]
pub fn current_section(sections: &[SectionBounds], scroll_y: f64) -> Option<&str> {
    let marker = scroll_y + SCROLLSPY_OFFSET;
    sections.iter().find(|s| s.contains(marker)).map(|s| s.id.as_str())
}

/// Whether an in-page nav link points at the current section.
#[must_use]
pub fn nav_link_active(href: &str, current: Option<&str>) -> bool {
    current.is_some_and(|id| href.strip_prefix('#') == Some(id))
}

/// Current window scroll offset; zero outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Measure every `section[id]` on the page, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        let Ok(nodes) = doc.query_selector_all("section[id]") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds {
                id: el.id(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}
