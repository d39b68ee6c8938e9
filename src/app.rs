//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::{study_session::StudySessionPage, study_sessions::StudySessionsPage};
use crate::routes::SESSIONS_PATH;

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
/// Provides the backend API config and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_build_env());

    view! {
        <Stylesheet id="leptos" href="/pkg/lang-portal.css"/>
        <Title text="Language Portal"/>

        <Router>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=SESSIONS_PATH/> }/>
                    <Route path=StaticSegment("sessions") view=StudySessionsPage/>
                    <Route path=(StaticSegment("sessions"), ParamSegment("id")) view=StudySessionPage/>
                </Routes>
            </main>
        </Router>
    }
}
