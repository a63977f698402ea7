//! The `PARTIAL` filter.

use crate::{
    error::{CompileError, InvalidPathSnafu, UnsupportedTypeSnafu},
    expr::FilterExpr,
    filter::{compile_sub_filters, require_name, require_sub_filters, FieldFilter},
};
use riddle_core::{access, FieldPath, FieldType, MessageDescriptor, Record};
use snafu::ResultExt;
use std::sync::Arc;

/// Re-roots a conjunction of sub-filters at a nested sub-record.
///
/// Sub-filters are compiled against the sub-record's schema and evaluated
/// against the sub-record. When the sub-record is unset they see an empty
/// record, so they read zero values and find no field present.
#[derive(Debug, Clone)]
pub struct PartialFilter {
    path: FieldPath,
    sub_descriptor: Arc<MessageDescriptor>,
    sub_filters: Vec<FieldFilter>,
}

impl PartialFilter {
    pub(crate) fn new(
        descriptor: &Arc<MessageDescriptor>,
        expr: &FilterExpr,
    ) -> Result<Self, CompileError> {
        let name = require_name(expr)?;
        let sub_exprs = require_sub_filters(expr)?;
        let path = FieldPath::resolve(descriptor, name, false).context(InvalidPathSnafu {
            filter: expr.to_string(),
        })?;
        let sub_descriptor = match path.terminal().field_type() {
            FieldType::Message(sub_descriptor) => Arc::clone(sub_descriptor),
            other => {
                return UnsupportedTypeSnafu {
                    op: expr.op,
                    kind: other.kind(),
                    filter: expr.to_string(),
                }
                .fail()
            }
        };
        let sub_filters = compile_sub_filters(&sub_descriptor, sub_exprs)?;
        Ok(Self {
            path,
            sub_descriptor,
            sub_filters,
        })
    }

    pub(crate) fn is_match<R: Record>(&self, record: &R) -> bool {
        match access::message_of(record, &self.path) {
            Some(sub_record) => self.sub_filters.iter().all(|f| f.is_match(sub_record)),
            None => {
                let empty = R::empty(Arc::clone(&self.sub_descriptor));
                self.sub_filters.iter().all(|f| f.is_match(&empty))
            }
        }
    }
}
