//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, alerts) and small
//! pure transforms from page and component logic so they can be unit
//! tested natively.

pub mod auth;
pub mod form;
pub mod lines;
pub mod notify;
pub mod storage;
pub mod token;
