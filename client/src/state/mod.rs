//! Reactive application state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gallery` owns project data and the active skill filter; `ui` owns theme
//! and scroll-derived chrome flags. Both are provided as `RwSignal` contexts.

pub mod gallery;
pub mod ui;
