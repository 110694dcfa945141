use crate::{RuleErrors, RuleResult};

#[test]
fn accept_carries_value_and_position() {
    let result = RuleResult::accept('a', 1);
    assert!(result.is_accepted());
    assert_eq!(result.pos(), Some(1));
    assert_eq!(result.value(), Some(&'a'));
    assert!(result.errors().is_none());
}

#[test]
fn reject_has_single_error_with_empty_path() {
    let result: RuleResult<()> = RuleResult::reject("nope", 7);
    let errors = result.errors().expect("rejected");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().message(), "nope");
    assert_eq!(errors.first().pos(), 7);
    assert!(errors.first().path().is_empty());
}

#[test]
fn map_transforms_value_only() {
    let mapped = RuleResult::accept(20, 3).map(|v| v + 1);
    assert_eq!(mapped, RuleResult::accept(21, 3));
}

#[test]
fn map_passes_rejection_through() {
    let rejected: RuleResult<i32> = RuleResult::reject("nope", 2);
    let expected = rejected.errors().cloned();
    let mapped = rejected.map(|v| v.to_string());
    assert_eq!(mapped.errors().cloned(), expected);
}

#[test]
fn with_path_only_touches_rejections() {
    let accepted = RuleResult::accept((), 0).with_path("x");
    assert_eq!(accepted, RuleResult::accept((), 0));

    let rejected: RuleResult<()> = RuleResult::reject("nope", 0).with_path("x");
    assert_eq!(rejected.errors().unwrap().first().path(), ["x"]);
}

#[test]
fn into_result_splits_variants() {
    assert_eq!(RuleResult::accept("v", 4).into_result(), Ok(("v", 4)));

    let rejected: RuleResult<&str> = RuleResult::reject("nope", 1);
    let err: RuleErrors = rejected.into_value().unwrap_err();
    assert_eq!(err.first().message(), "nope");
}
