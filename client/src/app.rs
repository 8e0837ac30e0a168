//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::consts::SITE_TITLE;
use crate::pages::home::HomePage;
use crate::state::{gallery::GalleryState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the gallery and UI state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let gallery = RwSignal::new(GalleryState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(gallery);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=SITE_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
