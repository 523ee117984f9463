//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared `AuthState` and `Notice` signals from Leptos
//! context; route guards also consult the session for stored evidence.

pub mod guards;
pub mod layout;
pub mod post_card;
pub mod toast;
