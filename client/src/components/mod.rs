//! Reusable UI building blocks shared by both pages.

pub mod site_header;
pub mod theme_toggle;
