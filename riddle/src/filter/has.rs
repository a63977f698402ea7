//! The `HAS` filter.

use crate::{
    error::{CompileError, InvalidPathSnafu},
    expr::FilterExpr,
    filter::require_name,
};
use riddle_core::{access, FieldPath, MessageDescriptor, Record};
use snafu::ResultExt;
use std::sync::Arc;

/// Tests explicit presence of a singular field, or non-emptiness of a
/// repeated one.
///
/// This is the only operator that can tell an unset scalar apart from one
/// set to its zero value.
#[derive(Debug, Clone)]
pub struct HasFilter {
    path: FieldPath,
}

impl HasFilter {
    pub(crate) fn new(
        descriptor: &Arc<MessageDescriptor>,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        let name = require_name(expr)?;
        let path = FieldPath::resolve(descriptor, name, true).context(InvalidPathSnafu {
            filter: expr.to_string(),
        })?;
        Ok(Self { path })
    }

    pub(crate) fn is_match<R: Record>(&self, record: &R) -> bool {
        access::has_field(record, &self.path)
    }
}
