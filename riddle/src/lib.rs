//! Schema-aware field filters over reflective records.
//!
//! A [`FilterExpr`] is a declarative tree of Boolean and comparison
//! operators over dotted field paths. Compiling one against a record
//! schema ([`MessageDescriptor`]) yields a [`FieldFilter`]: an immutable,
//! reusable predicate that decides membership for any record of that
//! schema. All validation and literal parsing happens at compile time;
//! matching is pure and cannot fail.
//!
//! Records are read through the [`Record`] trait, so any host record
//! representation can be matched; [`DynRecord`] is the bundled in-memory
//! implementation.
//!
//! ```
//! use riddle::{DynRecord, FieldFilter, FilterExpr, MessageDescriptor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let schema = MessageDescriptor::builder("Event")
//!     .string("country")
//!     .int32("clicks")
//!     .finish();
//!
//! let expr: FilterExpr = serde_json::from_str(
//!     r#"{
//!         "op": "AND",
//!         "sub_filters": [
//!             {"op": "EQUAL", "name": "country", "value": "de"},
//!             {"op": "GT", "name": "clicks", "value": "10"}
//!         ]
//!     }"#,
//! )?;
//! let filter = FieldFilter::new(&schema, &expr)?;
//!
//! let mut event = DynRecord::new(schema);
//! event.set("country", "de");
//! event.set("clicks", 12);
//! assert!(filter.is_match(&event));
//!
//! event.set("clicks", 10);
//! assert!(!filter.is_match(&event));
//! # Ok(())
//! # }
//! ```
//!
//! A populated record can itself become a filter:
//! [`FieldFilter::from_record`] reflects every set field into an equality
//! test (see [`convert::record_to_filter`]).

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod comparator;
pub mod convert;
pub mod error;
pub mod expr;
pub mod filter;

pub use {
    comparator::{CompareResult, IntegerComparator},
    error::CompileError,
    expr::{FilterExpr, Op},
    filter::FieldFilter,
};

#[doc(no_inline)]
pub use riddle_core::{
    access, parse, DynRecord, EnumDescriptor, FieldDescriptor, FieldPath, FieldType, Kind,
    MessageDescriptor, ParseError, PathError, Record, Value,
};
