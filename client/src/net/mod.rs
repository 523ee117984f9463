//! Networking modules for the content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the verifier's `AuthApi` over `gloo-net` and adds the
//! post and admin calls the pages make; `types` defines their payloads.

pub mod api;
pub mod types;
