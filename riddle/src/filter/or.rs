//! The `OR` filter.

use crate::{
    error::CompileError,
    expr::FilterExpr,
    filter::{compile_sub_filters, require_sub_filters, FieldFilter},
};
use riddle_core::{MessageDescriptor, Record};
use std::sync::Arc;

/// Matches when any sub-filter matches; sub-filters are probed in source
/// order and the first hit short-circuits.
#[derive(Debug, Clone)]
pub struct OrFilter {
    sub_filters: Vec<FieldFilter>,
}

impl OrFilter {
    pub(crate) fn new(
        descriptor: &Arc<MessageDescriptor>,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        let sub_exprs = require_sub_filters(expr)?;
        let sub_filters = compile_sub_filters(descriptor, sub_exprs)?;
        Ok(Self { sub_filters })
    }

    pub(crate) fn is_match<R: Record>(&self, record: &R) -> bool {
        self.sub_filters.iter().any(|f| f.is_match(record))
    }
}
