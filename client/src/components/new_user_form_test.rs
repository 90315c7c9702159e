use super::*;

fn filled() -> NewUserDraft {
    NewUserDraft { username: " dora ".to_owned(), password: "s3cret".to_owned(), role: "user".to_owned() }
}

#[test]
fn validate_builds_trimmed_account() {
    assert_eq!(
        filled().validate(),
        Ok(NewAccount { username: "dora".to_owned(), password: "s3cret".to_owned(), role: "user".to_owned() })
    );
}

#[test]
fn validate_rejects_each_blank_field() {
    let blanks = [
        NewUserDraft { username: "  ".to_owned(), ..filled() },
        NewUserDraft { password: String::new(), ..filled() },
        NewUserDraft { role: String::new(), ..filled() },
    ];
    for draft in blanks {
        assert_eq!(draft.validate(), Err("Username, password and role are required."), "{draft:?}");
    }
}

#[test]
fn validate_keeps_password_verbatim() {
    let draft = NewUserDraft { password: " padded ".to_owned(), ..filled() };
    assert_eq!(draft.validate().unwrap().password, " padded ");
}

#[test]
fn settle_clears_role_for_reselection() {
    assert_eq!(settle(&filled(), true), NewUserDraft::default());
    assert_eq!(settle(&filled(), false), filled());
}
