//! The `TRUE` filter.

use crate::{
    error::{CompileError, ExtraFieldsSnafu},
    expr::FilterExpr,
};
use snafu::ensure;

/// Matches every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueFilter;

impl TrueFilter {
    pub(crate) fn new(expr: &FilterExpr) -> Result<Self, CompileError> {
        ensure!(
            expr.name.is_none() && expr.value.is_none() && expr.sub_filters.is_empty(),
            ExtraFieldsSnafu {
                filter: expr.to_string(),
            }
        );
        Ok(TrueFilter)
    }

    pub(crate) fn is_match(&self) -> bool {
        true
    }
}
