//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the project gallery while reading/writing
//! shared state from Leptos context providers.

pub mod gallery;
pub mod navbar;
pub mod project_card;
pub mod scroll_top;
pub mod skill_filter;
