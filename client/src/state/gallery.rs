//! Project gallery state: loaded projects, derived skills, active filter.
//!
//! DESIGN
//! ======
//! The project list and skill set are written once when loading completes and
//! read-only afterwards. The active filter is the only state mutated by user
//! interaction. Matching and chip derivation are pure functions over this state
//! so they can be exercised without a browser.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::BTreeSet;

use crate::net::api::LoadError;
use crate::net::types::Project;

/// Sorted, duplicate-free union of every project's tech tags.
///
/// Ordering is by Unicode scalar value, which agrees with UTF-16 code-unit
/// order for every tag outside the U+E000..=U+FFFF vs. supplementary-plane mix.
#[must_use]
pub fn derive_skills(projects: &[Project]) -> Vec<String> {
    projects
        .iter()
        .flat_map(|p| p.tech.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Skills currently selected for narrowing the gallery, in selection order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActiveFilter {
    skills: Vec<String>,
}

impl ActiveFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    #[must_use]
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn clear(&mut self) {
        self.skills.clear();
    }

    /// Apply one chip interaction.
    ///
    /// `None` or an empty skill is the "All" chip and clears the filter.
    /// Otherwise a selected skill is removed and an unselected one is appended.
    pub fn toggle(&mut self, skill: Option<&str>) {
        let Some(skill) = skill.filter(|s| !s.is_empty()) else {
            self.clear();
            return;
        };
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_owned());
        }
    }

    /// AND across selected skills; an empty filter matches everything.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        project.has_all(&self.skills)
    }
}

/// Positions of matching projects, in original order.
#[must_use]
pub fn matching_indices(projects: &[Project], filter: &ActiveFilter) -> Vec<usize> {
    projects
        .iter()
        .enumerate()
        .filter(|(_, p)| filter.matches(p))
        .map(|(i, _)| i)
        .collect()
}

/// One rendered filter control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterChip {
    pub label: String,
    /// Value carried in `data-skill`; empty for the "All" chip.
    pub skill: String,
    pub active: bool,
}

/// The "All" chip followed by one chip per skill.
#[must_use]
pub fn filter_chips(skills: &[String], filter: &ActiveFilter) -> Vec<FilterChip> {
    let all = FilterChip { label: "All".to_owned(), skill: String::new(), active: filter.is_empty() };
    std::iter::once(all)
        .chain(skills.iter().map(|skill| FilterChip {
            label: skill.clone(),
            skill: skill.clone(),
            active: filter.contains(skill),
        }))
        .collect()
}

/// Progress of the one-shot collection load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Pending,
    Ready,
    Failed(LoadError),
}

/// Gallery state shared through Leptos context.
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub filter: ActiveFilter,
    pub status: LoadStatus,
}

impl GalleryState {
    /// Install a freshly loaded collection and reset the filter.
    pub fn set_loaded(&mut self, projects: Vec<Project>) {
        self.skills = derive_skills(&projects);
        self.projects = projects;
        self.filter.clear();
        self.status = LoadStatus::Ready;
    }

    pub fn set_failed(&mut self, err: LoadError) {
        self.status = LoadStatus::Failed(err);
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    pub fn toggle_skill(&mut self, skill: Option<&str>) {
        self.filter.toggle(skill);
    }

    /// Indices of the projects the current filter lets through.
    #[must_use]
    pub fn visible(&self) -> Vec<usize> {
        matching_indices(&self.projects, &self.filter)
    }

    #[must_use]
    pub fn chips(&self) -> Vec<FilterChip> {
        filter_chips(&self.skills, &self.filter)
    }

    /// Chips to render: none until the collection has loaded, so a failed
    /// load leaves the filter row empty along with the gallery.
    #[must_use]
    pub fn visible_chips(&self) -> Vec<FilterChip> {
        if self.is_ready() { self.chips() } else { Vec::new() }
    }
}
