//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route guard and talks to the session only through the
//! `SessionHandle` in context.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;
pub mod section;
