//! Header bar for the authenticated page: logo, section links, account buttons.
//!
//! The section entries and account buttons are placeholders with no
//! behavior yet.

use leptos::prelude::*;

use crate::util::dark_mode::themed_class;

/// Landing site the logo points at.
pub const LOGO_URL: &str = "https://example.com/";

/// Section labels in display order.
pub const NAV_ITEMS: [&str; 5] = ["Продукты", "Цены", "Обучение", "О нас", "Q&A"];

#[component]
pub fn SiteHeader(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
    view! {
        <header class="header">
            <nav class="header__nav">
                <a href=LOGO_URL class="header__logo">"Terrea"</a>
                <ul class="header__nav-list">
                    {NAV_ITEMS
                        .iter()
                        .map(|label| view! { <li class="header__nav-item">{*label}</li> })
                        .collect_view()}
                </ul>
                <div class="header__account">
                    <button type="button" class="btn header__register">"Регистрация"</button>
                    <button
                        type="button"
                        class=move || format!("btn {}", themed_class("header__sign-in", dark_mode.get()))
                    >
                        "Войти"
                    </button>
                </div>
            </nav>
        </header>
    }
}
