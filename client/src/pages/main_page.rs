//! Authenticated landing page.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::components::theme_toggle::ThemeToggle;
use crate::util::dark_mode::themed_class;

/// Landing page shown once the session is authenticated. Logout only flips
/// the local flag; the endpoint is not contacted.
#[component]
pub fn MainPage(
    #[prop(into)] dark_mode: Signal<bool>,
    #[prop(into)] on_toggle_theme: Callback<()>,
    #[prop(into)] set_authenticated: Callback<bool>,
) -> impl IntoView {
    let on_logout = move |_| {
        log::info!("logout");
        set_authenticated.run(false);
    };

    view! {
        <div class=move || themed_class("main-page", dark_mode.get())>
            <SiteHeader dark_mode=dark_mode/>
            <div class="main-content">
                <h1 class="main-content__title">"Добро пожаловать на главную страницу!"</h1>
                <button type="button" class="btn main-content__logout" on:click=on_logout>
                    "Выйти"
                </button>
            </div>
            <ThemeToggle dark_mode=dark_mode on_toggle=on_toggle_theme/>
        </div>
    }
}
