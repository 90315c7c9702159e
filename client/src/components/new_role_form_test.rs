use super::*;

#[test]
fn validate_requires_name_and_description() {
    let missing = Err("Role name and description are required.");
    assert_eq!(NewRoleDraft::default().validate(), missing);
    assert_eq!(
        NewRoleDraft { name: "billing".to_owned(), description: " ".to_owned() }.validate(),
        missing
    );
    assert_eq!(
        NewRoleDraft { name: String::new(), description: "pays".to_owned() }.validate(),
        missing
    );
}

#[test]
fn validate_trims_fields() {
    let draft = NewRoleDraft { name: " billing ".to_owned(), description: " pays invoices\n".to_owned() };
    assert_eq!(
        draft.validate(),
        Ok(NewRole { name: "billing".to_owned(), description: "pays invoices".to_owned() })
    );
}
