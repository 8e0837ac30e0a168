//! Card for a single project in the gallery.
//!
//! DESIGN
//! ======
//! Cards are plain projections of a `Project`; the only reactive input is the
//! fade flag driven by the gallery transition.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::net::types::Project;

const EXTERNAL_REL: &str = "noopener noreferrer";

/// Alt text for a card image.
#[must_use]
pub fn screenshot_alt(title: &str) -> String {
    format!("{title} screenshot")
}

/// One project: image, title, description, tech badges, optional highlights,
/// optional live link, and the source link.
#[component]
pub fn ProjectCard(project: Project, #[prop(into)] fading: Signal<bool>) -> impl IntoView {
    let tech_attr = project.tech_attr();
    let image_src = project.image_src().to_owned();
    let live_url = project.live_url().map(str::to_owned);
    let Project { title, description, tech, link, highlights, .. } = project;
    let alt = screenshot_alt(&title);

    let badges = tech
        .into_iter()
        .map(|t| view! { <span class="tech-badge">{t}</span> })
        .collect_view();

    let highlights_block = (!highlights.is_empty()).then(|| {
        view! {
            <div class="project-highlights">
                {highlights
                    .into_iter()
                    .map(|h| view! { <div class="highlight-text">{h}</div> })
                    .collect_view()}
            </div>
        }
    });

    let live_action = live_url.map(|url| {
        view! {
            <a href=url target="_blank" rel=EXTERNAL_REL class="project-card__action">
                <button class="btn btn-outline-secondary">"View Project"</button>
            </a>
        }
    });

    view! {
        <div class="project-card" class:project-fade-out=move || fading.get() data-tech=tech_attr>
            <img src=image_src alt=alt class="project-image"/>
            <div class="project-card__body">
                <h4 class="project-card__title">{title}</h4>
                <p class="project-card__description">{description}</p>
                <div class="project-card__tech">{badges}</div>
                {highlights_block}
                {live_action}
                <a href=link target="_blank" rel=EXTERNAL_REL class="project-card__action">
                    <button class="btn btn-primary">"View on GitHub"</button>
                </a>
            </div>
        </div>
    }
}
