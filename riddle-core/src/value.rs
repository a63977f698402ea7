//! Dynamic field values.

use crate::{kind::Kind, record::DynRecord};
use derive_more::From;

/// A dynamically typed field value, one variant per field [`Kind`].
///
/// Enum values are carried as their value-number; the owning
/// [`EnumDescriptor`](crate::schema::EnumDescriptor) maps numbers back to
/// names when needed.
#[derive(Debug, Clone, PartialEq, From)]
pub enum Value {
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 32-bit unsigned integer.
    UInt32(u32),
    /// 64-bit unsigned integer.
    UInt64(u64),
    /// 32-bit floating point.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    /// Boolean.
    Bool(bool),
    /// Enum value-number.
    #[from(ignore)]
    Enum(i32),
    /// UTF-8 string.
    String(String),
    /// Nested record.
    #[from(ignore)]
    Message(DynRecord),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<DynRecord> for Value {
    fn from(value: DynRecord) -> Self {
        Value::Message(value)
    }
}

impl Value {
    /// The [`Kind`] this value belongs to.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int32(_) => Kind::Int32,
            Value::Int64(_) => Kind::Int64,
            Value::UInt32(_) => Kind::UInt32,
            Value::UInt64(_) => Kind::UInt64,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::Bool(_) => Kind::Bool,
            Value::Enum(_) => Kind::Enum,
            Value::String(_) => Kind::String,
            Value::Message(_) => Kind::Message,
        }
    }
}
