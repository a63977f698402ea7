//! The `ANY_IN` filter.

use crate::{
    error::{CompileError, InvalidPathSnafu, UnsupportedTypeSnafu, ValueParseSnafu},
    expr::FilterExpr,
    filter::{require_name, require_value},
};
use ahash::AHashSet;
use riddle_core::{access, parse, FieldPath, FieldType, MessageDescriptor, Record};
use snafu::{ensure, ResultExt};
use std::sync::Arc;

/// Tests whether any element of a repeated field is a member of a set
/// parsed from a comma-separated literal list, monomorphised over the
/// field's kind.
///
/// Elements are scanned in stored order and the first hit short-circuits;
/// an empty repeated field never matches. The terminal field must be
/// repeated and must not be a message.
#[derive(Debug, Clone)]
pub enum AnyInFilter {
    /// `int32` elements.
    Int32 {
        /// Path to the repeated field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<i32>,
    },
    /// `int64` elements.
    Int64 {
        /// Path to the repeated field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<i64>,
    },
    /// `uint32` elements.
    UInt32 {
        /// Path to the repeated field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<u32>,
    },
    /// `uint64` elements.
    UInt64 {
        /// Path to the repeated field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<u64>,
    },
    /// `bool` elements.
    Bool {
        /// Path to the repeated field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<bool>,
    },
    /// Enum elements, by value-number.
    Enum {
        /// Path to the repeated field.
        path: FieldPath,
        /// The parsed value-number set.
        numbers: AHashSet<i32>,
    },
    /// String elements, byte-exact.
    String {
        /// Path to the repeated field.
        path: FieldPath,
        /// The parsed value set.
        values: AHashSet<String>,
    },
}

impl AnyInFilter {
    pub(crate) fn new(
        descriptor: &Arc<MessageDescriptor>,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        let name = require_name(expr)?;
        let value = require_value(expr)?;
        let path = FieldPath::resolve(descriptor, name, true).context(InvalidPathSnafu {
            filter: expr.to_string(),
        })?;
        ensure!(
            path.terminal().is_repeated(),
            UnsupportedTypeSnafu {
                op: expr.op,
                kind: path.terminal().kind(),
                filter: expr.to_string(),
            }
        );
        let parse_context = || ValueParseSnafu {
            filter: expr.to_string(),
        };
        match path.terminal().field_type() {
            FieldType::Int32 => Ok(Self::Int32 {
                values: parse::parse_values(value).with_context(|_| parse_context())?,
                path,
            }),
            FieldType::Int64 => Ok(Self::Int64 {
                values: parse::parse_values(value).with_context(|_| parse_context())?,
                path,
            }),
            FieldType::UInt32 => Ok(Self::UInt32 {
                values: parse::parse_values(value).with_context(|_| parse_context())?,
                path,
            }),
            FieldType::UInt64 => Ok(Self::UInt64 {
                values: parse::parse_values(value).with_context(|_| parse_context())?,
                path,
            }),
            FieldType::Bool => Ok(Self::Bool {
                values: parse::parse_values(value).with_context(|_| parse_context())?,
                path,
            }),
            FieldType::Enum(schema) => Ok(Self::Enum {
                numbers: parse::parse_enum_values(schema, value)
                    .with_context(|_| parse_context())?,
                path,
            }),
            FieldType::String => Ok(Self::String {
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

    pub(crate) fn is_match<R: Record>(&self, record: &R) -> bool {
        match self {
            Self::Int32 { path, values } => (0..access::len_of(record, path))
                .any(|i| values.contains(&access::int32_at(record, path, i))),
            Self::Int64 { path, values } => (0..access::len_of(record, path))
                .any(|i| values.contains(&access::int64_at(record, path, i))),
            Self::UInt32 { path, values } => (0..access::len_of(record, path))
                .any(|i| values.contains(&access::uint32_at(record, path, i))),
            Self::UInt64 { path, values } => (0..access::len_of(record, path))
                .any(|i| values.contains(&access::uint64_at(record, path, i))),
            Self::Bool { path, values } => (0..access::len_of(record, path))
                .any(|i| values.contains(&access::bool_at(record, path, i))),
            Self::Enum { path, numbers } => (0..access::len_of(record, path))
                .any(|i| numbers.contains(&access::enum_at(record, path, i))),
            Self::String { path, values } => (0..access::len_of(record, path))
                .any(|i| values.contains(access::string_at(record, path, i))),
        }
    }
}
