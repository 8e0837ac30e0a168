//! Skill filter chips above the project gallery.
//!
//! The whole chip row is re-derived from gallery state on every change, so
//! chip order and active marks always mirror the current filter exactly.

use leptos::prelude::*;

use crate::consts::SKILL_FILTER_ID;
use crate::state::gallery::{FilterChip, GalleryState};

/// "All" plus one chip per skill. Renders nothing until projects are loaded.
#[component]
pub fn SkillFilter() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let chips = move || gallery.with(GalleryState::visible_chips);

    view! {
        <div id=SKILL_FILTER_ID class="skill-filter">
            {move || chips().into_iter().map(|chip| view! { <SkillChip chip=chip gallery=gallery/> }).collect_view()}
        </div>
    }
}

#[component]
fn SkillChip(chip: FilterChip, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let FilterChip { label, skill, active } = chip;
    let data_skill = skill.clone();
    let on_click = move |_| gallery.update(|g| g.toggle_skill(Some(&skill)));

    view! {
        <button class="skill-filter-btn" class:active=active data-skill=data_skill on:click=on_click>
            {label}
        </button>
    }
}
