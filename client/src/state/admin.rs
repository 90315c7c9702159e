//! Admin dashboard list state.
//!
//! DESIGN
//! ======
//! The dashboard fetches users and roles once on mount and owns this state
//! in a page-scoped signal. Mutations patch it locally after the backend
//! accepts them instead of refetching.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{Role, User};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminState {
    pub users: Vec<User>,
    pub roles: Vec<Role>,
}

impl AdminState {
    /// Record a role change the backend accepted. Returns `false` when no
    /// listed user has `username`.
    pub fn apply_role_change(&mut self, username: &str, role: &str) -> bool {
        let mut changed = false;
        for user in self.users.iter_mut().filter(|u| u.username == username) {
            role.clone_into(&mut user.role);
            changed = true;
        }
        changed
    }
}

/// First role the backend listed, used as the new-user default.
pub fn first_role_name(roles: &[Role]) -> Option<&str> {
    roles.first().map(|r| r.name.as_str())
}
