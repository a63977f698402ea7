//! Property-based invariants of compilation and matching.

use proptest::prelude::*;
use riddle::{DynRecord, FieldFilter, FilterExpr};
use tests::{compile, matches, with_leaf};

/// A sparse assignment to the `a.b` leaf's fields.
#[derive(Debug, Clone)]
struct LeafValues {
    int32: Option<i32>,
    int64: Option<i64>,
    boolean: Option<bool>,
    enum_number: Option<i32>,
    string: Option<String>,
}

impl LeafValues {
    fn any_set(&self) -> bool {
        self.int32.is_some()
            || self.int64.is_some()
            || self.boolean.is_some()
            || self.enum_number.is_some()
            || self.string.is_some()
    }

    fn record(&self) -> DynRecord {
        with_leaf(|leaf| {
            if let Some(v) = self.int32 {
                leaf.set("int32_value", v);
            }
            if let Some(v) = self.int64 {
                leaf.set("int64_value", v);
            }
            if let Some(v) = self.boolean {
                leaf.set("bool_value", v);
            }
            if let Some(v) = self.enum_number {
                leaf.set("enum_value", v);
            }
            if let Some(v) = &self.string {
                leaf.set("string_value", v.as_str());
            }
        })
    }
}

fn leaf_values() -> impl Strategy<Value = LeafValues> {
    (
        proptest::option::of(-3..4i32),
        proptest::option::of(-3..4i64),
        proptest::option::of(any::<bool>()),
        proptest::option::of(1..4i32),
        proptest::option::of("[ab]{0,2}"),
    )
        .prop_map(|(int32, int64, boolean, enum_number, string)| LeafValues {
            int32,
            int64,
            boolean,
            enum_number,
            string,
        })
}

fn leaf_expr() -> impl Strategy<Value = FilterExpr> {
    prop_oneof![
        (-3..4i32).prop_map(|v| FilterExpr::equal("a.b.int32_value", v.to_string())),
        (-3..4i32).prop_map(|v| FilterExpr::gt("a.b.int32_value", v.to_string())),
        (-3..4i64).prop_map(|v| FilterExpr::lt("a.b.int64_value", v.to_string())),
        "[ab]{0,2}".prop_map(|v| FilterExpr::equal("a.b.string_value", v)),
        (1..4i32).prop_map(|v| FilterExpr::equal("a.b.enum_value", v.to_string())),
        Just(FilterExpr::has("a.b.int32_value")),
        Just(FilterExpr::has("a.b.string_value")),
        Just(FilterExpr::always()),
        proptest::collection::vec(-3..4i32, 1..4).prop_map(|vs| {
            let list = vs.iter().map(ToString::to_string).collect::<Vec<_>>();
            FilterExpr::in_set("a.b.int32_value", list.join(","))
        }),
    ]
}

proptest! {
    #[test]
    fn and_matches_iff_every_child_matches(
        children in proptest::collection::vec(leaf_expr(), 1..4),
        values in leaf_values(),
    ) {
        let record = values.record();
        let expected = children.iter().all(|child| matches(child, &record));
        prop_assert_eq!(matches(&FilterExpr::and(children), &record), expected);
    }

    #[test]
    fn or_matches_iff_any_child_matches(
        children in proptest::collection::vec(leaf_expr(), 1..4),
        values in leaf_values(),
    ) {
        let record = values.record();
        let expected = children.iter().any(|child| matches(child, &record));
        prop_assert_eq!(matches(&FilterExpr::or(children), &record), expected);
    }

    #[test]
    fn not_negates_the_conjunction(
        children in proptest::collection::vec(leaf_expr(), 1..4),
        values in leaf_values(),
    ) {
        let record = values.record();
        let expected = !children.iter().all(|child| matches(child, &record));
        prop_assert_eq!(matches(&FilterExpr::not(children), &record), expected);
    }

    #[test]
    fn matching_is_deterministic_and_compilation_idempotent(
        expr in leaf_expr(),
        values in leaf_values(),
    ) {
        let record = values.record();
        let first = compile(&expr).unwrap();
        let second = compile(&expr).unwrap();
        let outcome = first.is_match(&record);
        prop_assert_eq!(first.is_match(&record), outcome);
        prop_assert_eq!(second.is_match(&record), outcome);
    }

    #[test]
    fn duplicate_list_entries_are_irrelevant(
        entries in proptest::collection::vec(-3..4i32, 1..5),
        values in leaf_values(),
    ) {
        let record = values.record();
        let list = entries.iter().map(ToString::to_string).collect::<Vec<_>>();
        let plain = FilterExpr::in_set("a.b.int32_value", list.join(","));
        let doubled = FilterExpr::in_set(
            "a.b.int32_value",
            [list.clone(), list].concat().join(","),
        );
        prop_assert_eq!(matches(&plain, &record), matches(&doubled, &record));
    }

    #[test]
    fn records_round_trip_through_their_own_filter(values in leaf_values()) {
        prop_assume!(values.any_set());
        let record = values.record();
        let filter = FieldFilter::from_record(&record).unwrap();
        prop_assert!(filter.is_match(&record));
    }

    #[test]
    fn compiled_filters_borrow_nothing_from_the_expression(value in "[ab]{0,2}") {
        let record = with_leaf(|leaf| leaf.set("string_value", value.as_str()));
        let filter = {
            let expr = FilterExpr::equal("a.b.string_value", value);
            compile(&expr).unwrap()
        };
        prop_assert!(filter.is_match(&record));
    }
}
