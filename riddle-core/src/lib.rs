//! Record model and reflection primitives for `riddle`.
//!
//! This crate defines the schema side of the engine: field [`Kind`]s, the
//! [`MessageDescriptor`] / [`EnumDescriptor`] handles that describe record
//! types, the [`Record`] trait through which the filter engine reads any
//! host record representation, and the [`DynRecord`] in-memory adapter.
//!
//! It also provides the two leaf utilities everything above is built from:
//! - [`path`]: resolution of dotted field names against a schema, yielding a
//!   [`FieldPath`] of field handles.
//! - [`parse`]: conversion of string literals into typed scalar values, enum
//!   values and comma-separated value sets.

#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]

pub mod access;
pub mod kind;
pub mod parse;
pub mod path;
pub mod record;
pub mod schema;
pub mod value;

pub use {
    kind::Kind,
    parse::{parse_enum, parse_enum_values, parse_string_values, parse_values, FromLiteral, ParseError},
    path::{FieldPath, PathError},
    record::{DynRecord, Record},
    schema::{EnumDescriptor, EnumValueDescriptor, FieldDescriptor, FieldType, MessageDescriptor},
    value::Value,
};
