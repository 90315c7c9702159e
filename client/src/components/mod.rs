//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and admin forms while reading the
//! session from the Leptos context provided by `App`.

pub mod dynamic_route_form;
pub mod nav_bar;
pub mod new_role_form;
pub mod new_user_form;
pub mod protected_route;
pub mod role_select;
