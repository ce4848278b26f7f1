//! Page modules for the two top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives the theme flag and session callbacks as props and
//! delegates shared chrome to `components`.

pub mod login;
pub mod main_page;
