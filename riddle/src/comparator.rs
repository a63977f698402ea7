//! Three-way comparison between an integer field and a literal.

use crate::{
    error::{CompileError, UnsupportedTypeSnafu},
    expr::FilterExpr,
    filter::parse_literal,
};
use riddle_core::{access, FieldPath, FieldType, Record};

/// Outcome of an [`IntegerComparator`] probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    /// The field's value is greater than the literal.
    GreaterThan,
    /// The field's value equals the literal.
    Equal,
    /// The field's value is less than the literal.
    LessThan,
    /// The field is unset; `GT` and `LT` both treat this as no match.
    Invalid,
}

/// Compares an integer field against a literal parsed once at compile time,
/// monomorphised over the field's width.
///
/// Shared by the `GT` and `LT` filters. Non-integer fields are rejected at
/// construction.
#[derive(Debug, Clone)]
pub enum IntegerComparator {
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
}

impl IntegerComparator {
    /// Builds a comparator for the integer field `path` addresses.
    ///
    /// # Errors
    /// Returns [`CompileError::UnsupportedType`] for a non-integer terminal
    /// field and [`CompileError::ValueParse`] when `literal` does not parse
    /// as the field's width.
    pub(crate) fn new(
        path: FieldPath,
        literal: &str,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        match path.terminal().field_type() {
            FieldType::Int32 => Ok(Self::Int32 {
                value: parse_literal(literal, expr)?,
                path,
            }),
            FieldType::Int64 => Ok(Self::Int64 {
                value: parse_literal(literal, expr)?,
                path,
            }),
            FieldType::UInt32 => Ok(Self::UInt32 {
                value: parse_literal(literal, expr)?,
                path,
            }),
            FieldType::UInt64 => Ok(Self::UInt64 {
                value: parse_literal(literal, expr)?,
                path,
            }),
            other => UnsupportedTypeSnafu {
                op: expr.op,
                kind: other.kind(),
                filter: expr.to_string(),
            }
            .fail(),
        }
    }

    /// Compares the field in `record` against the literal.
    ///
    /// [`CompareResult::Invalid`] when the field is unset; otherwise the
    /// ordering of the field's value relative to the literal, reading
    /// through unset parent records as usual.
    pub fn compare<R: Record>(&self, record: &R) -> CompareResult {
        if !access::has_field(record, self.path()) {
            return CompareResult::Invalid;
        }
        match self {
            Self::Int32 { path, value } => three_way(access::int32_of(record, path), *value),
            Self::Int64 { path, value } => three_way(access::int64_of(record, path), *value),
            Self::UInt32 { path, value } => three_way(access::uint32_of(record, path), *value),
            Self::UInt64 { path, value } => three_way(access::uint64_of(record, path), *value),
        }
    }

    fn path(&self) -> &FieldPath {
        match self {
            Self::Int32 { path, .. }
            | Self::Int64 { path, .. }
            | Self::UInt32 { path, .. }
            | Self::UInt64 { path, .. } => path,
        }
    }
}

fn three_way<T: Ord>(field: T, literal: T) -> CompareResult {
    match field.cmp(&literal) {
        std::cmp::Ordering::Greater => CompareResult::GreaterThan,
        std::cmp::Ordering::Less => CompareResult::LessThan,
        std::cmp::Ordering::Equal => CompareResult::Equal,
    }
}
