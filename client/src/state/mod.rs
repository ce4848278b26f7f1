//! Client-side state models.
//!
//! DESIGN
//! ======
//! `session` is the app-wide pair of flags; `login` is local to the login
//! page. Both are plain structs wrapped in `RwSignal` by their owners.

pub mod login;
pub mod session;
