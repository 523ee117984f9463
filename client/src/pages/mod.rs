//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and requests. Access control is applied by
//! the guard component wrapping the route in `app`, never inside the page.

pub mod admin;
pub mod create_post;
pub mod home;
pub mod login;
pub mod my_posts;
pub mod profile;
pub mod register;
