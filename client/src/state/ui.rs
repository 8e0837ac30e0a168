//! Page chrome state (theme, navbar, scroll-to-top, scrollspy).
//!
//! DESIGN
//! ======
//! Keeps presentation flags out of gallery state so the scroll listener and
//! theme controls can evolve independently of project data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::scroll::{self, SectionBounds};
use crate::util::theme::Theme;

/// UI state shared through Leptos context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    /// Navbar uses its compact scrolled style.
    pub navbar_scrolled: bool,
    pub scroll_top_visible: bool,
    /// Id of the section under the scrollspy marker line, if any.
    pub active_section: Option<String>,
}

impl UiState {
    /// Recompute every scroll-derived flag from one sample.
    pub fn apply_scroll(&mut self, scroll_y: f64, sections: &[SectionBounds]) {
        self.navbar_scrolled = scroll::navbar_scrolled(scroll_y);
        self.scroll_top_visible = scroll::scroll_top_visible(scroll_y);
        self.active_section = scroll::current_section(sections, scroll_y).map(str::to_owned);
    }

    #[must_use]
    pub fn is_nav_active(&self, href: &str) -> bool {
        scroll::nav_link_active(href, self.active_section.as_deref())
    }
}
