use super::*;

fn user(name: &str, role: &str) -> User {
    User { username: name.to_owned(), role: role.to_owned() }
}

fn role(id: u64, name: &str) -> Role {
    Role { id, name: name.to_owned(), description: String::new() }
}

#[test]
fn apply_role_change_patches_matching_user_only() {
    let mut state = AdminState { users: vec![user("alice", "user"), user("bob", "user")], roles: vec![] };
    assert!(state.apply_role_change("bob", "admin"));
    assert_eq!(state.users, vec![user("alice", "user"), user("bob", "admin")]);
}

#[test]
fn apply_role_change_unknown_user_is_noop() {
    let mut state = AdminState { users: vec![user("alice", "user")], roles: vec![] };
    assert!(!state.apply_role_change("carol", "admin"));
    assert_eq!(state.users, vec![user("alice", "user")]);
}

#[test]
fn first_role_name_is_first_listed() {
    assert_eq!(first_role_name(&[role(2, "user"), role(1, "admin")]), Some("user"));
}

#[test]
fn first_role_name_none_without_roles() {
    assert_eq!(first_role_name(&[]), None);
}
