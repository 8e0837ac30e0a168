//! Page-wide constants: resource locations, scroll thresholds, timing.
//!
//! These values form the contract between the rendered page template and the
//! interaction handlers. Renaming an element id here without updating the
//! stylesheet breaks the wiring.

/// Location of the project collection, relative to the site root.
pub const PROJECTS_URL: &str = "/projects.json";

/// Image shown on a card when the project has none.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/320x180/EEE/AAA?text=Project+Image";

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class applied to `<body>` while dark mode is on.
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Navbar switches to its compact style past this many pixels.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll-to-top button appears past this many pixels.
pub const SCROLL_TOP_THRESHOLD: f64 = 200.0;

/// Scrollspy marker offset below the viewport top, roughly the navbar height.
pub const SCROLLSPY_OFFSET: f64 = 100.0;

/// Length of the card fade-out before the gallery swaps content.
pub const FADE_OUT_MS: u32 = 250;

pub const SKILL_FILTER_ID: &str = "project-skills-filter";
pub const PROJECTS_CONTAINER_ID: &str = "projects-container";
pub const DARK_MODE_TOGGLE_ID: &str = "darkModeToggle";
pub const SCROLL_TOP_BUTTON_ID: &str = "scrollTopBtn";

/// Brand text in the navbar and the document title.
pub const SITE_TITLE: &str = "Portfolio";
