//! Shared client state provided through Leptos context.

pub mod admin;
pub mod session;
