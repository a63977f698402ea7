//! The `IN` filter.

use crate::{
    error::{CompileError, InvalidPathSnafu, UnsupportedTypeSnafu, ValueParseSnafu},
    expr::FilterExpr,
    filter::{require_name, require_value},
};
use ahash::AHashSet;
use riddle_core::{access, parse, FieldPath, FieldType, MessageDescriptor, Record};
use snafu::ResultExt;
use std::sync::Arc;

/// Tests whether a singular field's value is a member of a set parsed from
/// a comma-separated literal list, monomorphised over the field's kind.
///
/// Enum sets hold value-numbers; string sets hold raw, untrimmed elements.
/// An unset field reads as its zero value, so a list containing the zero
/// value matches an unset field.
#[derive(Debug, Clone)]
pub enum InFilter {
    /// `int32` membership.
    Int32 {
        /// Path to the field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<i32>,
    },
    /// `int64` membership.
    Int64 {
        /// Path to the field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<i64>,
    },
    /// `uint32` membership.
    UInt32 {
        /// Path to the field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<u32>,
    },
    /// `uint64` membership.
    UInt64 {
        /// Path to the field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<u64>,
    },
    /// `bool` membership.
    Bool {
        /// Path to the field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<bool>,
    },
    /// Enum membership, by value-number.
    Enum {
        /// Path to the field.
        path: FieldPath,
        /// The parsed value-number set.
        numbers: AHashSet<i32>,
    },
    /// String membership, byte-exact.
    String {
        /// Path to the field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<String>,
    },
}

impl InFilter {
    pub(crate) fn new(
        descriptor: &Arc<MessageDescriptor>,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        let name = require_name(expr)?;
        let value = require_value(expr)?;
        let path = FieldPath::resolve(descriptor, name, false).context(InvalidPathSnafu {
            filter: expr.to_string(),
        })?;
        build(path, value, expr)
    }

    pub(crate) fn is_match<R: Record>(&self, record: &R) -> bool {
        match self {
            Self::Int32 { path, values } => values.contains(&access::int32_of(record, path)),
            Self::Int64 { path, values } => values.contains(&access::int64_of(record, path)),
            Self::UInt32 { path, values } => values.contains(&access::uint32_of(record, path)),
            Self::UInt64 { path, values } => values.contains(&access::uint64_of(record, path)),
            Self::Bool { path, values } => values.contains(&access::bool_of(record, path)),
            Self::Enum { path, numbers } => numbers.contains(&access::enum_of(record, path)),
            Self::String { path, values } => values.contains(access::string_of(record, path)),
        }
    }
}

fn build(path: FieldPath, value: &str, expr: &FilterExpr) -> Result<InFilter, CompileError> {
    let parse_context = || ValueParseSnafu {
        filter: expr.to_string(),
    };
    match path.terminal().field_type() {
        FieldType::Int32 => Ok(InFilter::Int32 {
            values: parse::parse_values(value).with_context(|_| parse_context())?,
            path,
        }),
        FieldType::Int64 => Ok(InFilter::Int64 {
            values: parse::parse_values(value).with_context(|_| parse_context())?,
            path,
        }),
        FieldType::UInt32 => Ok(InFilter::UInt32 {
            values: parse::parse_values(value).with_context(|_| parse_context())?,
            path,
        }),
        FieldType::UInt64 => Ok(InFilter::UInt64 {
            values: parse::parse_values(value).with_context(|_| parse_context())?,
            path,
        }),
        FieldType::Bool => Ok(InFilter::Bool {
            values: parse::parse_values(value).with_context(|_| parse_context())?,
            path,
        }),
        FieldType::Enum(schema) => Ok(InFilter::Enum {
            numbers: parse::parse_enum_values(schema, value).with_context(|_| parse_context())?,
            path,
        }),
        FieldType::String => Ok(InFilter::String {
            values: parse::parse_string_values(value),
            path,
        }),
        other @ (FieldType::Float | FieldType::Double | FieldType::Message(_)) => {
            UnsupportedTypeSnafu {
                op: expr.op,
                kind: other.kind(),
                filter: expr.to_string(),
            }
            .fail()
        }
    }
}
