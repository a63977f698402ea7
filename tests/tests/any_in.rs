//! `ANY_IN` scenarios: membership of any repeated element in a literal
//! list.

use riddle::{CompileError, FilterExpr};
use tests::{compile, matches, root_record, with_leaf};

#[test]
fn first_hit_wins_regardless_of_position() {
    let expr = FilterExpr::any_in("a.b.int32_values", "1,2");
    let hit = with_leaf(|leaf| {
        leaf.push("int32_values", 3);
        leaf.push("int32_values", 1);
    });
    assert!(matches(&expr, &hit));

    let miss = with_leaf(|leaf| leaf.push("int32_values", 3));
    assert!(!matches(&expr, &miss));
}

#[test]
fn empty_repeated_field_never_matches() {
    let expr = FilterExpr::any_in("a.b.int32_values", "0,1,2");
    assert!(!matches(&expr, &root_record()));
    // even a list containing zero needs at least one element to scan
    let populated_elsewhere = with_leaf(|leaf| leaf.set("int32_value", 0));
    assert!(!matches(&expr, &populated_elsewhere));
}

#[test]
fn enum_elements_match_by_number() {
    let expr = FilterExpr::any_in("a.b.enum_values", "TEST_ENUM_2,3");
    let record = with_leaf(|leaf| {
        leaf.push("enum_values", riddle::Value::Enum(1));
        leaf.push("enum_values", riddle::Value::Enum(3));
    });
    assert!(matches(&expr, &record));

    let miss = with_leaf(|leaf| leaf.push("enum_values", riddle::Value::Enum(1)));
    assert!(!matches(&expr, &miss));
}

#[test]
fn string_elements_match_byte_exact() {
    let expr = FilterExpr::any_in("a.b.string_values", "a,b");
    let record = with_leaf(|leaf| {
        leaf.push("string_values", "c");
        leaf.push("string_values", "b");
    });
    assert!(matches(&expr, &record));

    let miss = with_leaf(|leaf| leaf.push("string_values", "B"));
    assert!(!matches(&expr, &miss));
}

#[test]
fn bool_and_wide_integer_elements() {
    let record = with_leaf(|leaf| {
        leaf.push("bool_values", false);
        leaf.push("uint64_values", 7u64);
    });
    assert!(matches(
        &FilterExpr::any_in("a.b.bool_values", "false"),
        &record
    ));
    assert!(matches(
        &FilterExpr::any_in("a.b.uint64_values", "6,7"),
        &record
    ));
    assert!(!matches(
        &FilterExpr::any_in("a.b.uint64_values", "8"),
        &record
    ));
}

#[test]
fn singular_terminal_is_unsupported() {
    assert!(matches!(
        compile(&FilterExpr::any_in("a.b.int32_value", "1")),
        Err(CompileError::UnsupportedType { .. })
    ));
}

#[test]
fn repeated_message_terminal_is_unsupported() {
    assert!(matches!(
        compile(&FilterExpr::any_in("repeated_a", "1")),
        Err(CompileError::UnsupportedType { .. })
    ));
}

#[test]
fn non_terminal_repeated_is_an_invalid_path() {
    assert!(matches!(
        compile(&FilterExpr::any_in("repeated_a.b.int32_values", "1")),
        Err(CompileError::InvalidPath { .. })
    ));
}

#[test]
fn malformed_elements_are_value_parse_errors() {
    assert!(matches!(
        compile(&FilterExpr::any_in("a.b.int32_values", "1,1.5")),
        Err(CompileError::ValueParse { .. })
    ));
}

#[test]
fn missing_name_and_value_are_rejected() {
    let mut expr = FilterExpr::new(riddle::Op::AnyIn);
    expr.value = Some("1".to_owned());
    assert!(matches!(
        compile(&expr),
        Err(CompileError::MissingName { .. })
    ));

    let mut expr = FilterExpr::new(riddle::Op::AnyIn);
    expr.name = Some("a.b.int32_values".to_owned());
    assert!(matches!(
        compile(&expr),
        Err(CompileError::MissingValue { .. })
    ));
}
