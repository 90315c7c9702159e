//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Pages that need a signed-in operator are wrapped in
//! `ProtectedRoute` by the router, never by themselves.

pub mod accounting;
pub mod admin;
pub mod home;
pub mod login;
pub mod register;
pub mod send_sms;
pub mod user_phones;
