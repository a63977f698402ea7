//! The `NOT` filter.

use crate::{error::CompileError, expr::FilterExpr, filter::AndFilter};
use riddle_core::{MessageDescriptor, Record};
use std::sync::Arc;

/// Matches when the conjunction of the sub-filters does not.
///
/// `NOT [c1, c2, ...]` negates the whole conjunction, `!(c1 && c2 && ...)`,
/// not each sub-filter individually.
#[derive(Debug, Clone)]
pub struct NotFilter {
    inner: AndFilter,
}

impl NotFilter {
    pub(crate) fn new(
        descriptor: &Arc<MessageDescriptor>,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        let inner = AndFilter::new(descriptor, expr)?;
        Ok(Self { inner })
    }

    pub(crate) fn is_match<R: Record>(&self, record: &R) -> bool {
        !self.inner.is_match(record)
    }
}
