//! The compiled filter tree.
//!
//! [`FieldFilter`] is the executable form of a
//! [`FilterExpr`](crate::FilterExpr): an immutable tree with one node type
//! per operator, each node holding resolved field paths and typed literals
//! so that matching re-parses nothing. A compiled tree borrows nothing from
//! the expression it was built from and is freely shareable across threads.

use crate::{
    error::{
        CompileError, InvalidOpSnafu, MissingNameSnafu, MissingSubFiltersSnafu, MissingValueSnafu,
        UnsupportedOpSnafu, ValueParseSnafu,
    },
    expr::{FilterExpr, Op},
};
use riddle_core::{parse::FromLiteral, MessageDescriptor, Record};
use snafu::{ensure, OptionExt, ResultExt};
use std::sync::Arc;
use tracing::trace;

pub mod and;
pub mod any_in;
pub mod equal;
pub mod gt;
pub mod has;
pub mod in_;
pub mod lt;
pub mod not;
pub mod or;
pub mod partial;
pub mod true_;

pub use {
    and::AndFilter, any_in::AnyInFilter, equal::EqualFilter, gt::GtFilter, has::HasFilter,
    in_::InFilter, lt::LtFilter, not::NotFilter, or::OrFilter, partial::PartialFilter,
    true_::TrueFilter,
};

/// A compiled filter over records of one schema.
///
/// Build one with [`new`](FieldFilter::new) (from an expression) or
/// [`from_record`](FieldFilter::from_record) (from a populated record),
/// then probe records with [`is_match`](FieldFilter::is_match).
#[derive(Debug, Clone)]
pub enum FieldFilter {
    /// Matches every record.
    True(TrueFilter),
    /// Field presence.
    Has(HasFilter),
    /// Equality against a typed literal.
    Equal(EqualFilter),
    /// Greater-than over an integer field.
    Gt(GtFilter),
    /// Less-than over an integer field.
    Lt(LtFilter),
    /// Membership of a singular field in a value set.
    In(InFilter),
    /// Membership of any element of a repeated field in a value set.
    AnyIn(AnyInFilter),
    /// Sub-filters re-rooted at a nested sub-record.
    Partial(PartialFilter),
    /// Conjunction.
    And(AndFilter),
    /// Disjunction.
    Or(OrFilter),
    /// Negated conjunction.
    Not(NotFilter),
}

impl FieldFilter {
    /// Compiles `expr` against the record schema `descriptor`.
    ///
    /// # Errors
    /// Returns a [`CompileError`] when the expression is structurally
    /// invalid, addresses a field the schema does not have, pairs an
    /// operator with an incompatible field kind, or carries a literal that
    /// does not parse as the field's kind.
    pub fn new(descriptor: &Arc<MessageDescriptor>, expr: &FilterExpr) -> Result<Self, CompileError> {
        trace!(op = %expr.op, schema = descriptor.name(), "compiling field filter");
        match expr.op {
            Op::Has => HasFilter::new(descriptor, expr).map(Self::Has),
            Op::Equal => EqualFilter::new(descriptor, expr).map(Self::Equal),
            Op::Gt => GtFilter::new(descriptor, expr).map(Self::Gt),
            Op::Lt => LtFilter::new(descriptor, expr).map(Self::Lt),
            Op::In => InFilter::new(descriptor, expr).map(Self::In),
            Op::AnyIn => AnyInFilter::new(descriptor, expr).map(Self::AnyIn),
            Op::Partial => PartialFilter::new(descriptor, expr).map(Self::Partial),
            Op::And => AndFilter::new(descriptor, expr).map(Self::And),
            Op::Or => OrFilter::new(descriptor, expr).map(Self::Or),
            Op::Not => NotFilter::new(descriptor, expr).map(Self::Not),
            Op::True => TrueFilter::new(expr).map(Self::True),
            Op::Regexp => UnsupportedOpSnafu {
                filter: expr.to_string(),
            }
            .fail(),
            Op::Unspecified => InvalidOpSnafu {
                filter: expr.to_string(),
            }
            .fail(),
        }
    }

    /// Converts `record` into an equality filter over its set fields and
    /// compiles it against the record's own schema.
    ///
    /// # Errors
    /// Returns a [`CompileError`] when the record cannot be converted (a
    /// repeated or floating-point field is set) or the resulting
    /// expression does not compile.
    pub fn from_record<R: Record>(record: &R) -> Result<Self, CompileError> {
        let expr = crate::convert::record_to_filter(record)?;
        Self::new(record.descriptor(), &expr)
    }

    /// Whether `record` satisfies this filter.
    ///
    /// `record` must be an instance of the schema the filter was compiled
    /// against. Matching is pure: it reads the record, mutates nothing and
    /// cannot fail.
    pub fn is_match<R: Record>(&self, record: &R) -> bool {
        match self {
            Self::True(f) => f.is_match(),
            Self::Has(f) => f.is_match(record),
            Self::Equal(f) => f.is_match(record),
            Self::Gt(f) => f.is_match(record),
            Self::Lt(f) => f.is_match(record),
            Self::In(f) => f.is_match(record),
            Self::AnyIn(f) => f.is_match(record),
            Self::Partial(f) => f.is_match(record),
            Self::And(f) => f.is_match(record),
            Self::Or(f) => f.is_match(record),
            Self::Not(f) => f.is_match(record),
        }
    }
}

/// The `name` an operator requires, or [`CompileError::MissingName`].
pub(crate) fn require_name(expr: &FilterExpr) -> Result<&str, CompileError> {
    expr.name.as_deref().context(MissingNameSnafu {
        op: expr.op,
        filter: expr.to_string(),
    })
}

/// The `value` an operator requires, or [`CompileError::MissingValue`].
pub(crate) fn require_value(expr: &FilterExpr) -> Result<&str, CompileError> {
    expr.value.as_deref().context(MissingValueSnafu {
        op: expr.op,
        filter: expr.to_string(),
    })
}

/// The non-empty `sub_filters` an operator requires, or
/// [`CompileError::MissingSubFilters`].
pub(crate) fn require_sub_filters(expr: &FilterExpr) -> Result<&[FilterExpr], CompileError> {
    ensure!(
        !expr.sub_filters.is_empty(),
        MissingSubFiltersSnafu {
            op: expr.op,
            filter: expr.to_string(),
        }
    );
    Ok(&expr.sub_filters)
}

/// Parses `literal` as `T`, wrapping failures with the offending
/// expression.
pub(crate) fn parse_literal<T: FromLiteral>(
    literal: &str,
    expr: &FilterExpr,
) -> Result<T, CompileError> {
    T::from_literal(literal).context(ValueParseSnafu {
        filter: expr.to_string(),
    })
}

/// Compiles every child of `expr` against `descriptor`, in order.
pub(crate) fn compile_sub_filters(
    descriptor: &Arc<MessageDescriptor>,
    sub_filters: &[FilterExpr],
) -> Result<Vec<FieldFilter>, CompileError> {
    sub_filters
        .iter()
        .map(|sub| FieldFilter::new(descriptor, sub))
        .collect()
}
