//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the calls, `types` defines the JSON bodies, and `error`
//! carries the failure shape every call site collapses into an alert.

pub mod api;
pub mod error;
pub mod types;
