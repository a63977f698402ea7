//! `AND`, `OR` and `NOT` composition scenarios.

use riddle::{CompileError, FilterExpr};
use tests::{compile, matches, with_leaf};

fn int_is(value: &str) -> FilterExpr {
    FilterExpr::equal("a.b.int32_value", value)
}

fn string_is(value: &str) -> FilterExpr {
    FilterExpr::equal("a.b.string_value", value)
}

#[test]
fn and_requires_every_sub_filter() {
    let record = with_leaf(|leaf| {
        leaf.set("int32_value", 1);
        leaf.set("string_value", "x");
    });
    assert!(matches(&FilterExpr::and(vec![int_is("1"), string_is("x")]), &record));
    assert!(!matches(&FilterExpr::and(vec![int_is("1"), string_is("y")]), &record));
    assert!(!matches(&FilterExpr::and(vec![int_is("2"), string_is("x")]), &record));
}

#[test]
fn or_requires_any_sub_filter() {
    let record = with_leaf(|leaf| leaf.set("int32_value", 1));
    assert!(matches(&FilterExpr::or(vec![int_is("2"), int_is("1")]), &record));
    assert!(matches(&FilterExpr::or(vec![int_is("1"), int_is("2")]), &record));
    assert!(!matches(&FilterExpr::or(vec![int_is("2"), int_is("3")]), &record));
}

#[test]
fn not_negates_the_conjunction_of_its_children() {
    // NOT [c1, c2] is !(c1 && c2), not (!c1 && !c2)
    let record = with_leaf(|leaf| {
        leaf.set("int32_value", 1);
        leaf.set("string_value", "x");
    });

    let one_holds = FilterExpr::not(vec![int_is("1"), string_is("y")]);
    assert!(matches(&one_holds, &record));

    let both_hold = FilterExpr::not(vec![int_is("1"), string_is("x")]);
    assert!(!matches(&both_hold, &record));

    let neither_holds = FilterExpr::not(vec![int_is("2"), string_is("y")]);
    assert!(matches(&neither_holds, &record));
}

#[test]
fn single_child_not_is_plain_negation() {
    let record = with_leaf(|leaf| leaf.set("int32_value", 1));
    assert!(!matches(&FilterExpr::not(vec![int_is("1")]), &record));
    assert!(matches(&FilterExpr::not(vec![int_is("2")]), &record));
}

#[test]
fn compositions_nest_arbitrarily() {
    let expr = FilterExpr::or(vec![
        FilterExpr::and(vec![int_is("1"), string_is("x")]),
        FilterExpr::not(vec![FilterExpr::has("a.b.int32_value")]),
    ]);

    // first arm
    let record = with_leaf(|leaf| {
        leaf.set("int32_value", 1);
        leaf.set("string_value", "x");
    });
    assert!(matches(&expr, &record));

    // second arm: int32_value unset
    let record = with_leaf(|leaf| leaf.set("string_value", "q"));
    assert!(matches(&expr, &record));

    // neither arm
    let record = with_leaf(|leaf| leaf.set("int32_value", 2));
    assert!(!matches(&expr, &record));
}

#[test]
fn empty_sub_filters_are_rejected() {
    for expr in [
        FilterExpr::and(Vec::new()),
        FilterExpr::or(Vec::new()),
        FilterExpr::not(Vec::new()),
    ] {
        assert!(matches!(
            compile(&expr),
            Err(CompileError::MissingSubFilters { .. })
        ));
    }
}

#[test]
fn sub_filter_errors_surface_from_any_depth() {
    let expr = FilterExpr::and(vec![
        int_is("1"),
        FilterExpr::or(vec![FilterExpr::equal("a.b.nope", "1")]),
    ]);
    assert!(matches!(
        compile(&expr),
        Err(CompileError::InvalidPath { .. })
    ));
}
