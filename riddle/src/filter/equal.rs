//! The `EQUAL` filter.

use crate::{
    error::{CompileError, InvalidPathSnafu, UnsupportedTypeSnafu, ValueParseSnafu},
    expr::FilterExpr,
    filter::{parse_literal, require_name, require_value},
};
use riddle_core::{access, parse, FieldPath, FieldType, MessageDescriptor, Record};
use snafu::ResultExt;
use std::sync::Arc;

/// Tests a singular field for equality with a typed literal, monomorphised
/// over the field's resolved kind.
///
/// An unset scalar field reads as its zero value, so `EQUAL` against the
/// zero value matches an unset field; use `HAS` to test presence.
#[derive(Debug, Clone)]
pub enum EqualFilter {
    /// `int32` comparison.
    Int32 {
        /// Path to the field.
        path: FieldPath,
        /// The literal compared against.
        value: i32,
    },
    /// `int64` comparison.
    Int64 {
        /// Path to the field.
        path: FieldPath,
        /// The literal compared against.
        value: i64,
    },
    /// `uint32` comparison.
    UInt32 {
        /// Path to the field.
        path: FieldPath,
        /// The literal compared against.
        value: u32,
    },
    /// `uint64` comparison.
    UInt64 {
        /// Path to the field.
        path: FieldPath,
        /// The literal compared against.
        value: u64,
    },
    /// `bool` comparison.
    Bool {
        /// Path to the field.
        path: FieldPath,
        /// The literal compared against.
        value: bool,
    },
    /// Enum comparison, by value-number.
    Enum {
        /// Path to the field.
        path: FieldPath,
        /// The value-number compared against.
        number: i32,
    },
    /// Byte-exact string comparison. The literal is copied out of the
    /// expression.
    String {
        /// Path to the field.
        path: FieldPath,
        /// The literal compared against.
        value: String,
    },
}

impl EqualFilter {
    pub(crate) fn new(
        descriptor: &Arc<MessageDescriptor>,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        let name = require_name(expr)?;
        let value = require_value(expr)?;
        let path = FieldPath::resolve(descriptor, name, false).context(InvalidPathSnafu {
            filter: expr.to_string(),
        })?;
        match path.terminal().field_type() {
            FieldType::Int32 => Ok(Self::Int32 {
                value: parse_literal(value, expr)?,
                path,
            }),
            FieldType::Int64 => Ok(Self::Int64 {
                value: parse_literal(value, expr)?,
                path,
            }),
            FieldType::UInt32 => Ok(Self::UInt32 {
                value: parse_literal(value, expr)?,
                path,
            }),
            FieldType::UInt64 => Ok(Self::UInt64 {
                value: parse_literal(value, expr)?,
                path,
            }),
            FieldType::Bool => Ok(Self::Bool {
                value: parse_literal(value, expr)?,
                path,
            }),
            FieldType::Enum(schema) => {
                let number = parse::parse_enum(schema, value)
                    .context(ValueParseSnafu {
                        filter: expr.to_string(),
                    })?
                    .number();
                Ok(Self::Enum { number, path })
            }
            FieldType::String => Ok(Self::String {
                value: value.to_owned(),
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
            Self::Int32 { path, value } => access::int32_of(record, path) == *value,
            Self::Int64 { path, value } => access::int64_of(record, path) == *value,
            Self::UInt32 { path, value } => access::uint32_of(record, path) == *value,
            Self::UInt64 { path, value } => access::uint64_of(record, path) == *value,
            Self::Bool { path, value } => access::bool_of(record, path) == *value,
            Self::Enum { path, number } => access::enum_of(record, path) == *number,
            Self::String { path, value } => access::string_of(record, path) == value,
        }
    }
}
