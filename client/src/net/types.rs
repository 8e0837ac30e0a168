//! Project document schema as served from `projects.json`.
//!
//! DESIGN
//! ======
//! No schema validation beyond field types. Optional collections default to
//! empty and blank optional URLs read as absent, so hand-edited documents with
//! `"image": ""` behave the same as documents that omit the field.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::consts::PLACEHOLDER_IMAGE;

/// A single portfolio entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technology tags in authoring order.
    #[serde(default)]
    pub tech: Vec<String>,
    /// Source repository URL.
    pub link: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Live deployment URL, if the project has one.
    #[serde(default)]
    pub project_url: Option<String>,
}

impl Project {
    /// Image URL for the card, falling back to the shared placeholder.
    #[must_use]
    pub fn image_src(&self) -> &str {
        non_blank(self.image.as_deref()).unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Deployment URL when present and non-blank.
    #[must_use]
    pub fn live_url(&self) -> Option<&str> {
        non_blank(self.project_url.as_deref())
    }

    /// Whether the project carries every tag in `skills`.
    #[must_use]
    pub fn has_all<S: AsRef<str>>(&self, skills: &[S]) -> bool {
        skills
            .iter()
            .all(|skill| self.tech.iter().any(|t| t == skill.as_ref()))
    }

    /// JSON-encoded tech list, exposed on each card as `data-tech`.
    #[must_use]
    pub fn tech_attr(&self) -> String {
        serde_json::to_string(&self.tech).unwrap_or_else(|_| "[]".to_owned())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
