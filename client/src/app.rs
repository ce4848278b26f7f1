//! Root application component and the session controller.
//!
//! `App` owns the only `RwSignal<SessionState>`. `SessionRoot` turns it into
//! the props each screen needs and picks which screen to mount.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{login::LoginPage, main_page::MainPage};
use crate::state::session::{ActiveView, SessionState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru" data-theme="dark" class="dark-mode">
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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Keep the document theme in step with the flag.
    Effect::new(move || crate::util::dark_mode::apply(session.with(|s| s.dark_mode)));

    view! {
        <Stylesheet id="leptos" href="/pkg/terrea-web.css"/>
        <Title text="Terrea"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SessionRoot/>
            </Routes>
        </Router>
    }
}

/// Mounts exactly one of the login or main screens.
#[component]
fn SessionRoot() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let dark_mode = Signal::derive(move || session.with(|s| s.dark_mode));
    let on_toggle_theme = Callback::new(move |()| {
        session.update(|s| {
            s.toggle_dark_mode();
        });
    });
    let set_authenticated = Callback::new(move |value: bool| {
        session.update(|s| s.set_authenticated(value));
    });

    // Memoized so a theme change does not remount the form and drop its input.
    let active = Memo::new(move |_| session.with(SessionState::active_view));

    move || match active.get() {
        ActiveView::Login => view! {
            <LoginPage
                dark_mode=dark_mode
                on_toggle_theme=on_toggle_theme
                set_authenticated=set_authenticated
            />
        }
        .into_any(),
        ActiveView::Main => view! {
            <MainPage
                dark_mode=dark_mode
                on_toggle_theme=on_toggle_theme
                set_authenticated=set_authenticated
            />
        }
        .into_any(),
    }
}
