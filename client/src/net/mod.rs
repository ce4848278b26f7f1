//! Network layer for the external authentication endpoint.
//!
//! ARCHITECTURE
//! ============
//! `types` holds the wire payloads; `api` performs the request and
//! classifies the response into a `LoginError`.

pub mod api;
pub mod types;
