//! Typed reads through a [`FieldPath`].
//!
//! These helpers walk a record's nested sub-records to the path's parent
//! message and read the terminal field there. An unset sub-record anywhere
//! along the walk behaves as an empty message: scalar reads yield the
//! kind's zero value, presence is `false` and repeated fields are empty.

use crate::{path::FieldPath, record::Record};
use paste::paste;

/// Walks all non-terminal fields of `path` through
/// [`get_message`](Record::get_message), yielding the message the terminal
/// field is read from. `None` when any sub-record along the walk is unset.
pub fn parent_of<'r, R: Record>(record: &'r R, path: &FieldPath) -> Option<&'r R> {
    let mut current = Some(record);
    for field in path.ancestors() {
        current = current?.get_message(field);
    }
    current
}

/// Presence of the terminal field: explicitly set for singular fields,
/// non-empty for repeated fields.
pub fn has_field<R: Record>(record: &R, path: &FieldPath) -> bool {
    parent_of(record, path).is_some_and(|parent| parent.has(path.terminal()))
}

/// Number of elements in the repeated terminal field.
pub fn len_of<R: Record>(record: &R, path: &FieldPath) -> usize {
    parent_of(record, path).map_or(0, |parent| parent.field_len(path.terminal()))
}

macro_rules! scalar_accessors {
    ($($kind:ident: $ty:ty),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Reads the singular `", stringify!($kind), "` terminal field; zero value if unset.")]
                pub fn [<$kind _of>]<R: Record>(record: &R, path: &FieldPath) -> $ty {
                    parent_of(record, path)
                        .map_or(<$ty>::default(), |parent| parent.[<get_ $kind>](path.terminal()))
                }

                #[doc = concat!("Reads element `index` of the repeated `", stringify!($kind), "` terminal field.")]
                pub fn [<$kind _at>]<R: Record>(record: &R, path: &FieldPath, index: usize) -> $ty {
                    parent_of(record, path)
                        .map_or(<$ty>::default(), |parent| parent.[<get_repeated_ $kind>](path.terminal(), index))
                }
            )*
        }
    };
}

scalar_accessors! {
    int32: i32,
    int64: i64,
    uint32: u32,
    uint64: u64,
    bool: bool,
}

/// Reads the singular enum terminal field as its value-number; `0` if unset.
pub fn enum_of<R: Record>(record: &R, path: &FieldPath) -> i32 {
    parent_of(record, path).map_or(0, |parent| parent.get_enum(path.terminal()))
}

/// Reads element `index` of the repeated enum terminal field as its
/// value-number.
pub fn enum_at<R: Record>(record: &R, path: &FieldPath, index: usize) -> i32 {
    parent_of(record, path).map_or(0, |parent| parent.get_repeated_enum(path.terminal(), index))
}

/// Reads the singular `float` terminal field; `0.0` if unset.
pub fn float_of<R: Record>(record: &R, path: &FieldPath) -> f32 {
    parent_of(record, path).map_or(0.0, |parent| parent.get_float(path.terminal()))
}

/// Reads the singular `double` terminal field; `0.0` if unset.
pub fn double_of<R: Record>(record: &R, path: &FieldPath) -> f64 {
    parent_of(record, path).map_or(0.0, |parent| parent.get_double(path.terminal()))
}

/// Reads the singular string terminal field; `""` if unset.
pub fn string_of<'r, R: Record>(record: &'r R, path: &FieldPath) -> &'r str {
    parent_of(record, path).map_or("", |parent| parent.get_string(path.terminal()))
}

/// Reads element `index` of the repeated string terminal field.
pub fn string_at<'r, R: Record>(record: &'r R, path: &FieldPath, index: usize) -> &'r str {
    parent_of(record, path).map_or("", |parent| parent.get_repeated_string(path.terminal(), index))
}

/// Reads the singular message terminal field; `None` when it, or any
/// sub-record above it, is unset.
pub fn message_of<'r, R: Record>(record: &'r R, path: &FieldPath) -> Option<&'r R> {
    parent_of(record, path).and_then(|parent| parent.get_message(path.terminal()))
}
