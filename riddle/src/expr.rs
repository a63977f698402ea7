//! The filter expression wire form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The operator of a [`FilterExpr`] node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Op {
    /// The wire format's zero value; never compiles.
    #[default]
    Unspecified,
    /// Presence of a field.
    Has,
    /// Equality against a singular field.
    Equal,
    /// Greater-than against a singular integer field.
    Gt,
    /// Less-than against a singular integer field.
    Lt,
    /// Membership of a singular field's value in a set.
    In,
    /// Reserved; compiling it is an unsupported-operation error.
    Regexp,
    /// Disjunction of sub-filters.
    Or,
    /// Conjunction of sub-filters.
    And,
    /// Negated conjunction of sub-filters.
    Not,
    /// Re-roots sub-filters at a nested sub-record.
    Partial,
    /// Matches every record.
    True,
    /// Any element of a repeated field is a member of a set.
    AnyIn,
}

/// One node of a declarative filter expression.
///
/// Leaf operators carry a dotted field `name` and, except for `HAS`, a
/// string `value`; composite operators carry `sub_filters`. The compiler
/// ([`FieldFilter::new`](crate::FieldFilter::new)) copies everything it
/// keeps, so an expression can be dropped once compiled.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterExpr {
    /// The operator.
    pub op: Op,
    /// Dotted field name, for operators addressing a field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// String literal or comma-separated literal list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Child expressions, for composite operators.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_filters: Vec<FilterExpr>,
}

impl FilterExpr {
    /// An expression with the given operator and nothing else set.
    pub fn new(op: Op) -> Self {
        Self {
            op,
            ..Self::default()
        }
    }

    fn leaf(op: Op, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            op,
            name: Some(name.into()),
            value: Some(value.into()),
            sub_filters: Vec::new(),
        }
    }

    fn composite(op: Op, sub_filters: Vec<FilterExpr>) -> Self {
        Self {
            op,
            name: None,
            value: None,
            sub_filters,
        }
    }

    /// `HAS name`.
    pub fn has(name: impl Into<String>) -> Self {
        Self {
            op: Op::Has,
            name: Some(name.into()),
            value: None,
            sub_filters: Vec::new(),
        }
    }

    /// `EQUAL name value`.
    pub fn equal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf(Op::Equal, name, value)
    }

    /// `GT name value`.
    pub fn gt(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf(Op::Gt, name, value)
    }

    /// `LT name value`.
    pub fn lt(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::leaf(Op::Lt, name, value)
    }

    /// `IN name values`, `values` being a comma-separated list.
    pub fn in_set(name: impl Into<String>, values: impl Into<String>) -> Self {
        Self::leaf(Op::In, name, values)
    }

    /// `ANY_IN name values`, `values` being a comma-separated list.
    pub fn any_in(name: impl Into<String>, values: impl Into<String>) -> Self {
        Self::leaf(Op::AnyIn, name, values)
    }

    /// `AND sub_filters`.
    pub fn and(sub_filters: Vec<FilterExpr>) -> Self {
        Self::composite(Op::And, sub_filters)
    }

    /// `OR sub_filters`.
    pub fn or(sub_filters: Vec<FilterExpr>) -> Self {
        Self::composite(Op::Or, sub_filters)
    }

    /// `NOT sub_filters`.
    pub fn not(sub_filters: Vec<FilterExpr>) -> Self {
        Self::composite(Op::Not, sub_filters)
    }

    /// `PARTIAL name sub_filters`.
    pub fn partial(name: impl Into<String>, sub_filters: Vec<FilterExpr>) -> Self {
        Self {
            op: Op::Partial,
            name: Some(name.into()),
            value: None,
            sub_filters,
        }
    }

    /// `TRUE`: matches every record.
    pub fn always() -> Self {
        Self::new(Op::True)
    }
}

/// Renders the expression as JSON; compile errors embed this rendition to
/// identify the offending sub-expression.
impl fmt::Display for FilterExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => f.write_str("<unrenderable filter>"),
        }
    }
}
