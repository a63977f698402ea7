//! Reflecting a populated record into an equality filter.

use crate::{
    error::{CompileError, InvalidInputSnafu, UnknownEnumNumberSnafu, UnsupportedTypeSnafu},
    expr::{FilterExpr, Op},
};
use riddle_core::{FieldType, Record};
use snafu::{ensure, OptionExt};

/// Converts `record` into an `AND` of one sub-filter per set field: `EQUAL`
/// for scalar, bool, enum and string fields, a nested `PARTIAL` for message
/// fields. Unset fields contribute nothing.
///
/// The resulting expression, compiled against the record's schema, matches
/// exactly the records whose corresponding fields equal the source
/// record's; an all-unset record yields an `AND` with no sub-filters, which
/// does not compile.
///
/// # Errors
/// Returns [`CompileError::InvalidInput`] when a repeated field is present,
/// [`CompileError::UnsupportedType`] for a set `float` or `double` field
/// and [`CompileError::UnknownEnumNumber`] for an enum field holding a
/// number with no named value.
pub fn record_to_filter<R: Record>(record: &R) -> Result<FilterExpr, CompileError> {
    let mut sub_filters = Vec::new();
    for field in record.set_fields() {
        ensure!(
            !field.is_repeated(),
            InvalidInputSnafu { field: field.name() }
        );
        let name = field.name();
        let sub_filter = match field.field_type() {
            FieldType::Int32 => FilterExpr::equal(name, record.get_int32(&field).to_string()),
            FieldType::Int64 => FilterExpr::equal(name, record.get_int64(&field).to_string()),
            FieldType::UInt32 => FilterExpr::equal(name, record.get_uint32(&field).to_string()),
            FieldType::UInt64 => FilterExpr::equal(name, record.get_uint64(&field).to_string()),
            FieldType::Bool => {
                let value = if record.get_bool(&field) { "true" } else { "false" };
                FilterExpr::equal(name, value)
            }
            FieldType::Enum(schema) => {
                let number = record.get_enum(&field);
                let value = schema
                    .value_by_number(number)
                    .context(UnknownEnumNumberSnafu {
                        field: name,
                        number,
                    })?;
                FilterExpr::equal(name, value.name())
            }
            FieldType::String => FilterExpr::equal(name, record.get_string(&field)),
            FieldType::Message(_) => {
                let Some(sub_record) = record.get_message(&field) else {
                    continue;
                };
                FilterExpr::partial(name, vec![record_to_filter(sub_record)?])
            }
            other @ (FieldType::Float | FieldType::Double) => {
                return UnsupportedTypeSnafu {
                    op: Op::Equal,
                    kind: other.kind(),
                    filter: name,
                }
                .fail()
            }
        };
        sub_filters.push(sub_filter);
    }
    Ok(FilterExpr::and(sub_filters))
}
