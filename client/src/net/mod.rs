//! Networking for the project gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the one-shot collection fetch and `types` defines the
//! `projects.json` document schema.

pub mod api;
pub mod types;
