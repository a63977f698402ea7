//! Compile-time errors.
//!
//! Everything that can go wrong goes wrong at compile time; matching a
//! compiled [`FieldFilter`](crate::FieldFilter) never fails. Each variant
//! carries `filter`, a rendition of the offending sub-expression (its JSON
//! for compilation errors, the field name for record-conversion errors).

use crate::expr::Op;
use riddle_core::{Kind, ParseError, PathError};
use snafu::Snafu;

/// A filter expression or record could not be compiled into a
/// [`FieldFilter`](crate::FieldFilter).
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CompileError {
    /// The operator is unrecognized or unset.
    #[snafu(display("invalid op in field filter: {filter}"))]
    InvalidOp {
        /// The offending sub-expression.
        filter: String,
    },

    /// The operator is reserved but not implemented (`REGEXP`).
    #[snafu(display("REGEXP field filter is not implemented: {filter}"))]
    UnsupportedOp {
        /// The offending sub-expression.
        filter: String,
    },

    /// The operator requires `name`, which is absent.
    #[snafu(display("name must be set when op is {op}: {filter}"))]
    MissingName {
        /// The operator.
        op: Op,
        /// The offending sub-expression.
        filter: String,
    },

    /// The operator requires `value`, which is absent.
    #[snafu(display("value must be set when op is {op}: {filter}"))]
    MissingValue {
        /// The operator.
        op: Op,
        /// The offending sub-expression.
        filter: String,
    },

    /// The operator requires at least one sub-filter.
    #[snafu(display("sub_filters must not be empty when op is {op}: {filter}"))]
    MissingSubFilters {
        /// The operator.
        op: Op,
        /// The offending sub-expression.
        filter: String,
    },

    /// `TRUE` carries a name, a value or sub-filters.
    #[snafu(display("name, value and sub_filters are not allowed when op is TRUE: {filter}"))]
    ExtraFields {
        /// The offending sub-expression.
        filter: String,
    },

    /// The dotted name does not resolve against the schema.
    #[snafu(display("{source}: {filter}"))]
    InvalidPath {
        /// The resolution failure.
        source: PathError,
        /// The offending sub-expression.
        filter: String,
    },

    /// The terminal field's kind is incompatible with the operator.
    #[snafu(display("unsupported field type {kind} for op {op}: {filter}"))]
    UnsupportedType {
        /// The operator.
        op: Op,
        /// The terminal field's kind.
        kind: Kind,
        /// The offending sub-expression.
        filter: String,
    },

    /// The literal, or an element of the literal list, does not parse as
    /// the terminal field's kind.
    #[snafu(display("{source}: {filter}"))]
    ValueParse {
        /// The parse failure.
        source: ParseError,
        /// The offending sub-expression.
        filter: String,
    },

    /// A repeated field is present in a record being converted to a filter.
    #[snafu(display("repeated field {field} cannot be converted to an equality filter"))]
    InvalidInput {
        /// The repeated field's name.
        field: String,
    },

    /// An enum field of a record being converted holds a number with no
    /// named value, so it cannot be rendered.
    #[snafu(display("enum field {field} holds {number}, which names no value"))]
    UnknownEnumNumber {
        /// The enum field's name.
        field: String,
        /// The nameless number.
        number: i32,
    },
}
