//! `HAS` scenarios: explicit presence and repeated non-emptiness.

use riddle::{CompileError, FilterExpr};
use tests::{compile, matches, root_record, with_leaf};

#[test]
fn explicitly_set_zero_is_present() {
    let set_to_zero = with_leaf(|leaf| leaf.set("int32_value", 0));
    assert!(matches(&FilterExpr::has("a.b.int32_value"), &set_to_zero));
    assert!(!matches(&FilterExpr::has("a.b.int32_value"), &root_record()));
}

#[test]
fn empty_string_set_is_present() {
    let record = with_leaf(|leaf| leaf.set("string_value", ""));
    assert!(matches(&FilterExpr::has("a.b.string_value"), &record));
    assert!(!matches(&FilterExpr::has("a.b.string_value"), &root_record()));
}

#[test]
fn repeated_presence_means_non_empty() {
    let record = with_leaf(|leaf| leaf.push("int32_values", 1));
    assert!(matches(&FilterExpr::has("a.b.int32_values"), &record));
    assert!(!matches(&FilterExpr::has("a.b.int32_values"), &root_record()));
}

#[test]
fn message_fields_have_presence_too() {
    let mut record = root_record();
    assert!(!matches(&FilterExpr::has("a"), &record));
    record.message_mut("a");
    assert!(matches(&FilterExpr::has("a"), &record));
    assert!(!matches(&FilterExpr::has("a.b"), &record));
}

#[test]
fn repeated_message_fields_count_elements() {
    let mut record = root_record();
    assert!(!matches(&FilterExpr::has("repeated_a"), &record));
    let element = riddle::DynRecord::new(tests::inner());
    record.push("repeated_a", element);
    assert!(matches(&FilterExpr::has("repeated_a"), &record));
}

#[test]
fn unset_ancestors_hide_the_field() {
    let record = root_record();
    assert!(!matches(&FilterExpr::has("a.b.int32_value"), &record));
}

#[test]
fn name_is_required_and_must_resolve() {
    assert!(matches!(
        compile(&FilterExpr::new(riddle::Op::Has)),
        Err(CompileError::MissingName { .. })
    ));
    assert!(matches!(
        compile(&FilterExpr::has("a.b.nope")),
        Err(CompileError::InvalidPath { .. })
    ));
    assert!(matches!(
        compile(&FilterExpr::has("repeated_a.b")),
        Err(CompileError::InvalidPath { .. })
    ));
}
