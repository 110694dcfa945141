use gramr_core::RuleResult;

use super::{Chain, Rule};

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

fn letter(expected: char) -> Rule<char, char> {
    Rule::next_if(move |c: &char| *c == expected).path(expected.to_string())
}

#[test]
fn empty_chain_is_zero_width() {
    let empty = Rule::<char, ()>::chain().done();

    assert_eq!(empty.run_at(&chars("abc"), 2), RuleResult::accept((), 2));
}

#[test]
fn push_accumulates_in_order() {
    let abc = Rule::chain()
        .push(letter('a'))
        .push(letter('b'))
        .push(letter('c'))
        .done();

    assert_eq!(
        abc.run(&chars("abcd")),
        RuleResult::accept(('a', 'b', 'c'), 3)
    );
}

#[test]
fn skip_runs_but_drops_value() {
    let ac = Rule::chain()
        .push(letter('a'))
        .skip(letter('b'))
        .push(letter('c'))
        .done();

    assert_eq!(ac.run(&chars("abc")), RuleResult::accept(('a', 'c'), 3));
}

#[test]
fn failure_in_middle_returns_that_rejection() {
    let abc = Rule::chain()
        .push(letter('a'))
        .push(letter('b'))
        .push(letter('c'))
        .done();

    let result = abc.run(&chars("axc"));

    assert_eq!(result.errors(), letter('b').run_at(&chars("axc"), 1).errors());
    insta::assert_snapshot!(result.errors().unwrap(), @"b at 1: condition unmet");
}

#[test]
fn skipped_failure_still_fails() {
    let ab = Rule::chain().push(letter('a')).skip(letter('b')).done();

    let result = ab.run(&chars("a"));

    insta::assert_snapshot!(result.errors().unwrap(), @"b at 1: cursor out of range (input size: 1, position: 1)");
}

#[test]
fn from_rule_extends_existing_tuple() {
    let ab = Rule::chain().push(letter('a')).push(letter('b')).done();
    let abc = Chain::from_rule(ab).push(letter('c')).done();

    assert_eq!(abc.run(&chars("abc")), RuleResult::accept(('a', 'b', 'c'), 3));
}

#[test]
fn twelve_slots() {
    let digit = || Rule::next_if(|c: &char| c.is_ascii_digit());
    let all = Rule::chain()
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .push(digit())
        .done();

    let result = all.run(&chars("0123456789ab"));
    assert!(result.is_rejected());

    let (first, .., last) = all.run(&chars("012345678901")).into_value().unwrap();
    assert_eq!((first, last), ('0', '1'));
}
