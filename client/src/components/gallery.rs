//! Project gallery: one-shot load plus filtered, fading card grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! `load_projects` runs once per page load and fills `GalleryState`. The grid
//! watches that state, asks `CardTransition` how to swap to the new matching
//! set, and schedules the deferred half with a `gloo-timers` timeout.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::consts::PROJECTS_CONTAINER_ID;
use crate::net::api;
use crate::state::gallery::GalleryState;
use crate::util::transition::{CardTransition, SwapPlan};

/// Fetch the collection from `url` and install it, or record the failure.
///
/// Failures go to the console and leave the gallery empty; there is no retry.
pub async fn load_projects(url: &str, gallery: RwSignal<GalleryState>) {
    match api::fetch_projects(url).await {
        Ok(projects) => {
            #[cfg(feature = "hydrate")]
            log::info!("loaded {} projects from {url}", projects.len());
            gallery.update(|g| g.set_loaded(projects));
        }
        Err(err) => {
            #[cfg(feature = "hydrate")]
            log::error!("Error loading projects: {err}");
            gallery.update(|g| g.set_failed(err));
        }
    }
}

/// Card grid for the projects matching the active filter.
#[component]
pub fn ProjectGallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let transition = RwSignal::new(CardTransition::default());

    #[cfg(feature = "hydrate")]
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    Effect::new(move || {
        let target = gallery.with(GalleryState::visible);
        let Some(SwapPlan::Deferred { delay_ms, generation }) = transition.try_update(|t| t.request(target)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            let timeout = Timeout::new(delay_ms, move || {
                transition.update(|t| {
                    t.complete(generation);
                });
            });
            // Replacing the handle drops, and so cancels, any older swap.
            *pending.borrow_mut() = Some(timeout);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = delay_ms;
            transition.update(|t| {
                t.complete(generation);
            });
        }
    });

    let shown = Memo::new(move |_| transition.with(|t| t.shown().to_vec()));
    let fading = Signal::derive(move || transition.with(CardTransition::is_fading));

    let cards = move || {
        let indices = shown.get();
        gallery.with_untracked(|g| {
            indices
                .iter()
                .filter_map(|&i| g.projects.get(i).cloned())
                .map(|project| view! { <ProjectCard project=project fading=fading/> })
                .collect_view()
        })
    };

    view! {
        <div id=PROJECTS_CONTAINER_ID class="projects-grid">
            {cards}
        </div>
    }
}
