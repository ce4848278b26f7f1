//! Email + password login page with a demo bypass.
//!
//! The page owns its `LoginForm` signal. Session changes go out through
//! `set_authenticated`; the page never touches session state directly.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::HttpAuthApi;
use crate::state::login::{LoginForm, login_without_auth, submit_credentials};
use crate::util::dark_mode::themed_class;

/// "Forgot password" target.
pub const FORGOT_PASSWORD_URL: &str = "https://example.com";

/// Free-trial sign-up target.
pub const SIGN_UP_URL: &str = "https://example.com";

#[component]
pub fn LoginPage(
    #[prop(into)] dark_mode: Signal<bool>,
    #[prop(into)] on_toggle_theme: Callback<()>,
    #[prop(into)] set_authenticated: Callback<bool>,
) -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let api = HttpAuthApi::default();
            let outcome = submit_credentials(&api, credentials).await;
            if form.try_update(|f| f.finish(outcome)).unwrap_or(false) {
                set_authenticated.run(true);
            }
        });
    };

    let on_bypass = move |_| login_without_auth(|value| set_authenticated.run(value));

    view! {
        <div class=move || themed_class("login-page", dark_mode.get())>
            <div class="login-card">
                <h2 class="login-card__title">"Авторизируйтесь в ваш аккаунт"</h2>
                <form class="login-form" on:submit=on_submit>
                    <label for="email" class="login-label">"Email адрес"</label>
                    <input
                        class="login-input"
                        type="email"
                        id="email"
                        name="email"
                        autocomplete="email"
                        required=true
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.email = value);
                        }
                    />
                    <div class="login-form__row">
                        <label for="password" class="login-label">"Пароль"</label>
                        <a href=FORGOT_PASSWORD_URL class="login-link">"Забыли пароль?"</a>
                    </div>
                    <input
                        class="login-input"
                        type="password"
                        id="password"
                        name="password"
                        autocomplete="current-password"
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.password = value);
                        }
                    />
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || form.with(LoginForm::is_submitting)
                    >
                        "Войти"
                    </button>
                    <button class="login-button login-button--bypass" type="button" on:click=on_bypass>
                        "Войти без авторизации"
                    </button>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="login-message login-message--error">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                </form>
                <p class="login-card__footer">
                    "Не пользователь? "
                    <a href=SIGN_UP_URL class="login-link">"Начните бесплатную пробную подписку 14 дней"</a>
                </p>
            </div>
            <ThemeToggle dark_mode=dark_mode on_toggle=on_toggle_theme/>
        </div>
    }
}
