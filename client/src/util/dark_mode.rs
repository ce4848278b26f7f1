//! Theme application on the document root.
//!
//! Sets `data-theme` and the `.dark-mode` class on `<html>` so both the page
//! background and the form controls pick up the palette. The preference is
//! not stored; every page load starts from the session default.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Value written to the `data-theme` attribute.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// BEM class list for `block`, with its `--dark` modifier when enabled.
pub fn themed_class(block: &str, enabled: bool) -> String {
    if enabled { format!("{block} {block}--dark") } else { block.to_owned() }
}

/// Apply the theme to the `<html>` element. No-op outside the browser.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
            let class_list = el.class_list();
            if enabled {
                let _ = class_list.add_1("dark-mode");
            } else {
                let _ = class_list.remove_1("dark-mode");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
