//! Dispatch-level behavior: operator recognition, `TRUE`, and the
//! lifecycle guarantees of a compiled filter.

use riddle::{CompileError, FieldFilter, FilterExpr, Op};
use tests::{compile, compile_json, root_record, with_leaf};

#[test]
fn true_matches_every_record() {
    let filter = compile(&FilterExpr::always()).unwrap();
    assert!(filter.is_match(&root_record()));
    assert!(filter.is_match(&with_leaf(|leaf| leaf.set("int32_value", 5))));
}

#[test]
fn true_rejects_extra_fields() {
    let mut expr = FilterExpr::always();
    expr.name = Some("a".to_owned());
    assert!(matches!(
        compile(&expr),
        Err(CompileError::ExtraFields { .. })
    ));

    let mut expr = FilterExpr::always();
    expr.value = Some("1".to_owned());
    assert!(matches!(
        compile(&expr),
        Err(CompileError::ExtraFields { .. })
    ));

    let mut expr = FilterExpr::always();
    expr.sub_filters = vec![FilterExpr::always()];
    assert!(matches!(
        compile(&expr),
        Err(CompileError::ExtraFields { .. })
    ));
}

#[test]
fn regexp_is_unsupported() {
    let expr = FilterExpr {
        op: Op::Regexp,
        name: Some("a.b.string_value".to_owned()),
        value: Some(".*".to_owned()),
        sub_filters: Vec::new(),
    };
    assert!(matches!(
        compile(&expr),
        Err(CompileError::UnsupportedOp { .. })
    ));
}

#[test]
fn unspecified_op_is_invalid() {
    assert!(matches!(
        compile(&FilterExpr::default()),
        Err(CompileError::InvalidOp { .. })
    ));
}

#[test]
fn conjunction_of_equalities_over_two_fields() {
    let filter = compile_json(
        r#"{
            "op": "AND",
            "sub_filters": [
                {"op": "EQUAL", "name": "a.b.int32_value", "value": "1"},
                {"op": "EQUAL", "name": "a.b.int64_value", "value": "1"}
            ]
        }"#,
    )
    .unwrap();

    let matching = with_leaf(|leaf| {
        leaf.set("int32_value", 1);
        leaf.set("int64_value", 1i64);
    });
    assert!(filter.is_match(&matching));

    let mismatching = with_leaf(|leaf| {
        leaf.set("int32_value", 1);
        leaf.set("int64_value", 2i64);
    });
    assert!(!filter.is_match(&mismatching));
}

#[test]
fn compiled_filter_outlives_its_expression() {
    let filter = {
        let name = String::from("a.b.string_value");
        let value = String::from("transient");
        let expr = FilterExpr::equal(name, value);
        compile(&expr).unwrap()
        // expr and its strings drop here
    };
    let record = with_leaf(|leaf| leaf.set("string_value", "transient"));
    assert!(filter.is_match(&record));
}

#[test]
fn compilation_is_idempotent() {
    let expr = FilterExpr::or(vec![
        FilterExpr::equal("a.b.int32_value", "3"),
        FilterExpr::has("a.b.string_value"),
    ]);
    let first = compile(&expr).unwrap();
    let second = compile(&expr).unwrap();

    let records = [
        root_record(),
        with_leaf(|leaf| leaf.set("int32_value", 3)),
        with_leaf(|leaf| leaf.set("string_value", "")),
        with_leaf(|leaf| leaf.set("int32_value", 4)),
    ];
    for record in &records {
        assert_eq!(first.is_match(record), second.is_match(record));
    }
}

#[test]
fn filters_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let filter = compile(&FilterExpr::equal("a.b.int32_value", "1")).unwrap();
    assert_send_sync(&filter);

    let record = with_leaf(|leaf| leaf.set("int32_value", 1));
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert!(filter.is_match(&record)));
        }
    });
}

#[test]
fn expressions_compile_relative_to_their_root_schema() {
    let expr = FilterExpr::equal("b.int32_value", "7");
    let filter = FieldFilter::new(&tests::inner(), &expr).unwrap();
    let mut record = riddle::DynRecord::new(tests::inner());
    record.message_mut("b").set("int32_value", 7);
    assert!(filter.is_match(&record));

    // the same path does not resolve from Root
    assert!(matches!(
        compile(&expr),
        Err(CompileError::InvalidPath { .. })
    ));
}
