use super::*;

fn filled() -> DynamicRouteDraft {
    DynamicRouteDraft {
        path: " /reports ".to_owned(),
        method: RouteMethod::Post,
        endpoints: "http://a:8080/x\n\n  http://b:8080/y  \n".to_owned(),
        need_accounting: true,
    }
}

#[test]
fn validate_splits_endpoints_and_trims_path() {
    assert_eq!(
        filled().validate(),
        Ok(DynamicRoute {
            path: "/reports".to_owned(),
            method: RouteMethod::Post,
            endpoints: vec!["http://a:8080/x".to_owned(), "http://b:8080/y".to_owned()],
            need_accounting: true,
        })
    );
}

#[test]
fn validate_requires_path() {
    let draft = DynamicRouteDraft { path: "   ".to_owned(), ..filled() };
    assert_eq!(draft.validate(), Err("Path and at least one endpoint are required."));
}

#[test]
fn validate_rejects_whitespace_only_endpoints() {
    let draft = DynamicRouteDraft { endpoints: "\n   \n".to_owned(), ..filled() };
    assert_eq!(draft.validate(), Err("Path and at least one endpoint are required."));
}

#[test]
fn default_draft_answers_any_method_without_accounting() {
    let draft = DynamicRouteDraft::default();
    assert_eq!(draft.method, RouteMethod::Any);
    assert!(!draft.need_accounting);
}

#[test]
fn settle_resets_method_after_success() {
    assert_eq!(settle(&filled(), true).method, RouteMethod::Any);
    assert_eq!(settle(&filled(), false), filled());
}
