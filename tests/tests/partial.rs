//! `PARTIAL` scenarios: sub-filters re-rooted at a nested sub-record.

use riddle::{CompileError, FilterExpr};
use tests::{compile, matches, root_record, with_leaf};

fn both_equal() -> FilterExpr {
    FilterExpr::partial(
        "a.b",
        vec![
            FilterExpr::equal("int32_value", "1"),
            FilterExpr::equal("int64_value", "1"),
        ],
    )
}

#[test]
fn all_sub_filters_must_hold() {
    let record = with_leaf(|leaf| {
        leaf.set("int32_value", 1);
        leaf.set("int64_value", 1i64);
    });
    assert!(matches(&both_equal(), &record));

    let record = with_leaf(|leaf| {
        leaf.set("int32_value", 1);
        leaf.set("int64_value", 2i64);
    });
    assert!(!matches(&both_equal(), &record));
}

#[test]
fn sub_filters_resolve_against_the_sub_schema() {
    // "int32_value" resolves under Leaf, not under Root
    assert!(matches!(
        compile(&FilterExpr::equal("int32_value", "1")),
        Err(CompileError::InvalidPath { .. })
    ));
    assert!(compile(&both_equal()).is_ok());
}

#[test]
fn unset_sub_record_behaves_as_empty() {
    let unset = root_record();
    let zeros = FilterExpr::partial(
        "a.b",
        vec![
            FilterExpr::equal("int32_value", "0"),
            FilterExpr::equal("string_value", ""),
        ],
    );
    assert!(matches(&zeros, &unset));

    let present = FilterExpr::partial("a.b", vec![FilterExpr::has("int32_value")]);
    assert!(!matches(&present, &unset));

    let nonzero = FilterExpr::partial("a.b", vec![FilterExpr::equal("int32_value", "1")]);
    assert!(!matches(&nonzero, &unset));
}

#[test]
fn partials_nest() {
    let expr = FilterExpr::partial(
        "a",
        vec![FilterExpr::partial(
            "b",
            vec![FilterExpr::equal("string_value", "deep")],
        )],
    );
    assert!(matches(&expr, &with_leaf(|leaf| leaf.set("string_value", "deep"))));
    assert!(!matches(&expr, &with_leaf(|leaf| leaf.set("string_value", "shallow"))));
    assert!(!matches(&expr, &root_record())); // "" != "deep"
}

#[test]
fn partial_mixes_with_other_operators() {
    let expr = FilterExpr::partial(
        "a.b",
        vec![
            FilterExpr::gt("int32_value", "5"),
            FilterExpr::any_in("string_values", "x,y"),
        ],
    );
    let record = with_leaf(|leaf| {
        leaf.set("int32_value", 6);
        leaf.push("string_values", "y");
    });
    assert!(matches(&expr, &record));
}

#[test]
fn scalar_terminal_is_unsupported() {
    let expr = FilterExpr::partial("a.b.int32_value", vec![FilterExpr::always()]);
    assert!(matches!(
        compile(&expr),
        Err(CompileError::UnsupportedType { .. })
    ));
}

#[test]
fn name_and_sub_filters_are_required() {
    let expr = FilterExpr {
        op: riddle::Op::Partial,
        name: None,
        value: None,
        sub_filters: vec![FilterExpr::always()],
    };
    assert!(matches!(
        compile(&expr),
        Err(CompileError::MissingName { .. })
    ));

    let expr = FilterExpr::partial("a.b", Vec::new());
    assert!(matches!(
        compile(&expr),
        Err(CompileError::MissingSubFilters { .. })
    ));
}

#[test]
fn repeated_message_terminal_is_an_invalid_path() {
    let expr = FilterExpr::partial("repeated_a", vec![FilterExpr::always()]);
    assert!(matches!(
        compile(&expr),
        Err(CompileError::InvalidPath { .. })
    ));
}
