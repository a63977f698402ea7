//! Field kind classification.

/// The static classification of a field's type.
///
/// Mirrors the set of kinds a schema can declare for a field. `Enum` and
/// `Message` fields additionally carry their enum or message schema on the
/// [`FieldType`](crate::schema::FieldType) that produced this `Kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Boolean.
    Bool,
    /// Enumeration, carried as its value-number.
    Enum,
    /// UTF-8 string.
    String,
    /// Nested record.
    Message,
}

impl Kind {
    /// Returns `true` for the four integer kinds.
    pub fn is_integer(self) -> bool {
        matches!(self, Kind::Int32 | Kind::Int64 | Kind::UInt32 | Kind::UInt64)
    }

    /// Returns `true` for `Kind::Message`.
    pub fn is_message(self) -> bool {
        matches!(self, Kind::Message)
    }

    /// Returns `true` for `Kind::Float` and `Kind::Double`.
    pub fn is_floating_point(self) -> bool {
        matches!(self, Kind::Float | Kind::Double)
    }
}
