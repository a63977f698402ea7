//! The `GT` filter.

use crate::{
    comparator::{CompareResult, IntegerComparator},
    error::{CompileError, InvalidPathSnafu},
    expr::FilterExpr,
    filter::{require_name, require_value},
};
use riddle_core::{FieldPath, MessageDescriptor, Record};
use snafu::ResultExt;
use std::sync::Arc;

/// Matches when an integer field's value is strictly greater than the
/// literal. An unset field never matches.
#[derive(Debug, Clone)]
pub struct GtFilter {
    comparator: IntegerComparator,
}

impl GtFilter {
    pub(crate) fn new(
        descriptor: &Arc<MessageDescriptor>,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        let name = require_name(expr)?;
        let value = require_value(expr)?;
        let path = FieldPath::resolve(descriptor, name, false).context(InvalidPathSnafu {
            filter: expr.to_string(),
        })?;
        let comparator = IntegerComparator::new(path, value, expr)?;
        Ok(Self { comparator })
    }

    pub(crate) fn is_match<R: Record>(&self, record: &R) -> bool {
        self.comparator.compare(record) == CompareResult::GreaterThan
    }
}
