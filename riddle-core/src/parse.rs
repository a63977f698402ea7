//! Conversion of string literals into typed values and value sets.

use crate::{
    kind::Kind,
    schema::{EnumDescriptor, EnumValueDescriptor},
};
use ahash::AHashSet;
use snafu::{OptionExt, Snafu};
use std::hash::Hash;

/// A string literal could not be converted to the required kind.
#[derive(Debug, Snafu)]
pub enum ParseError {
    /// The literal is not a valid rendition of the scalar kind, or does not
    /// fit its width.
    #[snafu(display("cannot convert {input:?} to {kind}"))]
    Scalar {
        /// The target kind.
        kind: Kind,
        /// The offending literal.
        input: String,
    },

    /// The literal names no value of the enum, by name or by number.
    #[snafu(display("cannot convert {input:?} to enum {name}"))]
    UnknownEnumValue {
        /// The enum's type name.
        name: String,
        /// The offending literal.
        input: String,
    },
}

/// A scalar kind that can be parsed from its textual rendition.
pub trait FromLiteral: Sized {
    /// The kind produced, for error reporting.
    const KIND: Kind;

    /// Parses `input`.
    ///
    /// # Errors
    /// Returns [`ParseError::Scalar`] when `input` is not a valid rendition
    /// of the kind.
    fn from_literal(input: &str) -> Result<Self, ParseError>;
}

macro_rules! numeric_from_literal {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FromLiteral for $ty {
                const KIND: Kind = Kind::$kind;

                fn from_literal(input: &str) -> Result<Self, ParseError> {
                    input.parse().ok().context(ScalarSnafu {
                        kind: Self::KIND,
                        input,
                    })
                }
            }
        )*
    };
}

numeric_from_literal! {
    i32 => Int32,
    i64 => Int64,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
}

impl FromLiteral for bool {
    const KIND: Kind = Kind::Bool;

    // The accepted token set matches the numeric-string bool parser of the
    // wire format this engine grew up with: true/false, t/f, yes/no, y/n,
    // 1/0, ASCII-case-insensitive.
    fn from_literal(input: &str) -> Result<Self, ParseError> {
        const TRUE: [&str; 5] = ["true", "t", "yes", "y", "1"];
        const FALSE: [&str; 5] = ["false", "f", "no", "n", "0"];
        if TRUE.iter().any(|token| input.eq_ignore_ascii_case(token)) {
            Ok(true)
        } else if FALSE.iter().any(|token| input.eq_ignore_ascii_case(token)) {
            Ok(false)
        } else {
            ScalarSnafu {
                kind: Self::KIND,
                input,
            }
            .fail()
        }
    }
}

/// Resolves `input` against an enum schema, first by value name, then, when
/// `input` is a base-10 integer, by value-number.
///
/// # Errors
/// Returns [`ParseError::UnknownEnumValue`] when neither lookup succeeds.
pub fn parse_enum<'s>(
    schema: &'s EnumDescriptor,
    input: &str,
) -> Result<&'s EnumValueDescriptor, ParseError> {
    schema
        .value_by_name(input)
        .or_else(|| {
            let number = input.parse::<i32>().ok()?;
            schema.value_by_number(number)
        })
        .context(UnknownEnumValueSnafu {
            name: schema.name(),
            input,
        })
}

/// Parses a comma-separated list of scalar literals into a set.
///
/// The list is split on `,` with no quoting and no trimming, so elements
/// cannot themselves contain a comma and whitespace is significant. Every
/// element must parse; duplicates collapse.
///
/// # Errors
/// Returns [`ParseError::Scalar`] for the first element that does not parse.
pub fn parse_values<T>(input: &str) -> Result<AHashSet<T>, ParseError>
where
    T: FromLiteral + Eq + Hash,
{
    input.split(',').map(T::from_literal).collect()
}

/// Splits a comma-separated list into a set of raw strings.
///
/// No quoting and no trimming: `"a,,b"` yields `{"a", "", "b"}`, and a
/// string containing a comma cannot be represented.
pub fn parse_string_values(input: &str) -> AHashSet<String> {
    input.split(',').map(str::to_owned).collect()
}

/// Parses a comma-separated list of enum value names or numbers into a set
/// of value-numbers.
///
/// # Errors
/// Returns [`ParseError::UnknownEnumValue`] for the first element that
/// resolves to no value of the enum.
pub fn parse_enum_values(
    schema: &EnumDescriptor,
    input: &str,
) -> Result<AHashSet<i32>, ParseError> {
    input
        .split(',')
        .map(|element| parse_enum(schema, element).map(EnumValueDescriptor::number))
        .collect()
}
