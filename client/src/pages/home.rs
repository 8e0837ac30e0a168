//! Single-page portfolio: hero, about, projects, contact.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It wires the window-level listeners (scroll,
//! keyboard), applies the stored theme, and starts the one gallery load.
//! Section ids here are the scrollspy targets named in the navbar.

use leptos::prelude::*;

use crate::components::gallery::ProjectGallery;
use crate::components::navbar::Navbar;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::skill_filter::SkillFilter;
use crate::state::gallery::GalleryState;
use crate::state::ui::UiState;
use crate::util::theme;

/// Portfolio landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();

    let on_toggle_theme = Callback::new(move |()| {
        let next = theme::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::consts::PROJECTS_URL;
        use crate::util::{scroll, shortcuts};

        let sync_scroll = move || {
            let sections = scroll::section_bounds();
            let y = scroll::scroll_y();
            ui.update(|u| u.apply_scroll(y, &sections));
        };

        let scroll_handle = window_event_listener(leptos::ev::scroll, move |_| sync_scroll());
        let key_handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if shortcuts::is_theme_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
                ev.prevent_default();
                on_toggle_theme.run(());
            }
        });
        on_cleanup(move || {
            scroll_handle.remove();
            key_handle.remove();
        });

        // Runs once after hydration: stored theme first, then the initial
        // scroll sample, which needs mounted sections to measure.
        Effect::new(move || {
            let initial = theme::read_preference();
            theme::apply(initial);
            ui.update(|u| u.theme = initial);
            sync_scroll();
        });

        leptos::task::spawn_local(crate::components::gallery::load_projects(PROJECTS_URL, gallery));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = gallery;
    }

    view! {
        <Navbar on_toggle_theme=on_toggle_theme/>
        <main class="home-page">
            <section id="home" class="hero">
                <div class="container">
                    <h1 class="hero__title">"Hi, welcome to my portfolio"</h1>
                    <p class="hero__lead">
                        "Software engineer building reliable systems and the tools around them."
                    </p>
                    <a class="btn btn-primary" href="#projects">"See my work"</a>
                </div>
            </section>

            <section id="about" class="about">
                <div class="container">
                    <h2>"About"</h2>
                    <p>
                        "I enjoy turning rough ideas into small, well-tested programs. "
                        "The projects below are filterable by the skills they use."
                    </p>
                </div>
            </section>

            <section id="projects" class="projects">
                <div class="container">
                    <h2>"Projects"</h2>
                    <SkillFilter/>
                    <ProjectGallery/>
                </div>
            </section>

            <section id="contact" class="contact">
                <div class="container">
                    <h2>"Contact"</h2>
                    <p>"Reach out through any of the project repositories."</p>
                </div>
            </section>
        </main>
        <ScrollTopButton/>
    }
}
