//! Browser helpers.

pub mod dark_mode;
