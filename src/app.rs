//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::context::AuthContext;
use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};

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
/// Provides the auth context and holds back the routed pages until the
/// persisted session has been restored, so no page renders against a
/// half-initialized auth state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = AuthContext::new(&ClientConfig::from_build_env());
    provide_context(auth.clone());
    let ready = auth.ready();

    // Session storage only exists in the browser; effects never run on the server.
    Effect::new(move || auth.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/sensorboard.css"/>
        <Title text="Sensor Dashboard"/>

        <Router>
            <Show
                when=move || ready.get()
                fallback=|| view! { <p class="app-loading">"Loading..."</p> }
            >
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=DashboardPage/>
                </Routes>
            </Show>
        </Router>
    }
}
