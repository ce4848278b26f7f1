//! Corner button that switches between dark and light themes.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::util::dark_mode::themed_class;

/// Glyph for the current theme: the sun offers light mode, the moon dark.
pub fn toggle_glyph(dark_mode: bool) -> &'static str {
    if dark_mode { "☀" } else { "☾" }
}

pub fn toggle_title(dark_mode: bool) -> &'static str {
    if dark_mode { "Светлый режим" } else { "Тёмный режим" }
}

/// Stateless theme switch. Renders `dark_mode` and calls `on_toggle` on click.
#[component]
pub fn ThemeToggle(#[prop(into)] dark_mode: Signal<bool>, #[prop(into)] on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || format!("btn {}", themed_class("theme-toggle", dark_mode.get()))
            title=move || toggle_title(dark_mode.get())
            on:click=move |_| on_toggle.run(())
        >
            {move || toggle_glyph(dark_mode.get())}
        </button>
    }
}
