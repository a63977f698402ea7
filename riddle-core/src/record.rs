//! The record reflection contract and the in-memory `DynRecord` adapter.
//!
//! [`Record`] is the only runtime contract the filter engine imposes on a
//! host record system. Any representation that can answer these reads can
//! be matched against; [`DynRecord`] is the bundled implementation for
//! records whose schema is assembled at runtime.

use crate::{
    schema::{FieldDescriptor, FieldType, MessageDescriptor},
    value::Value,
};
use paste::paste;
use std::{collections::BTreeMap, sync::Arc};

/// Read access to one record instance.
///
/// Reads are always performed with a [`FieldDescriptor`] belonging to the
/// record's own [`MessageDescriptor`]; supplying a field of some other
/// schema is a contract violation and implementations are free to panic.
///
/// Singular scalar reads on an unset field yield the kind's zero value
/// (`0`, `0.0`, `false`, `""`); whether a field is explicitly set is
/// answered by [`has`](Record::has). Unset sub-records read as `None` and
/// the engine substitutes an [`empty`](Record::empty) instance where one is
/// required.
pub trait Record: Sized {
    /// The schema this record is an instance of.
    fn descriptor(&self) -> &Arc<MessageDescriptor>;

    /// Constructs an empty instance of the given schema: nothing set, all
    /// scalars at their zero value.
    fn empty(descriptor: Arc<MessageDescriptor>) -> Self;

    /// Presence: for a singular field, whether it is explicitly set; for a
    /// repeated field, whether it has at least one element.
    fn has(&self, field: &FieldDescriptor) -> bool;

    /// Reads a singular `int32` field; `0` if unset.
    fn get_int32(&self, field: &FieldDescriptor) -> i32;
    /// Reads a singular `int64` field; `0` if unset.
    fn get_int64(&self, field: &FieldDescriptor) -> i64;
    /// Reads a singular `uint32` field; `0` if unset.
    fn get_uint32(&self, field: &FieldDescriptor) -> u32;
    /// Reads a singular `uint64` field; `0` if unset.
    fn get_uint64(&self, field: &FieldDescriptor) -> u64;
    /// Reads a singular `float` field; `0.0` if unset.
    fn get_float(&self, field: &FieldDescriptor) -> f32;
    /// Reads a singular `double` field; `0.0` if unset.
    fn get_double(&self, field: &FieldDescriptor) -> f64;
    /// Reads a singular `bool` field; `false` if unset.
    fn get_bool(&self, field: &FieldDescriptor) -> bool;
    /// Reads a singular enum field as its value-number; `0` if unset.
    fn get_enum(&self, field: &FieldDescriptor) -> i32;
    /// Reads a singular string field; `""` if unset.
    fn get_string(&self, field: &FieldDescriptor) -> &str;

    /// Reads a singular message field; `None` if unset.
    fn get_message(&self, field: &FieldDescriptor) -> Option<&Self>;

    /// Number of elements in a repeated field; `0` if empty or unset.
    fn field_len(&self, field: &FieldDescriptor) -> usize;

    /// Reads element `index` of a repeated `int32` field.
    fn get_repeated_int32(&self, field: &FieldDescriptor, index: usize) -> i32;
    /// Reads element `index` of a repeated `int64` field.
    fn get_repeated_int64(&self, field: &FieldDescriptor, index: usize) -> i64;
    /// Reads element `index` of a repeated `uint32` field.
    fn get_repeated_uint32(&self, field: &FieldDescriptor, index: usize) -> u32;
    /// Reads element `index` of a repeated `uint64` field.
    fn get_repeated_uint64(&self, field: &FieldDescriptor, index: usize) -> u64;
    /// Reads element `index` of a repeated `bool` field.
    fn get_repeated_bool(&self, field: &FieldDescriptor, index: usize) -> bool;
    /// Reads element `index` of a repeated enum field as its value-number.
    fn get_repeated_enum(&self, field: &FieldDescriptor, index: usize) -> i32;
    /// Reads element `index` of a repeated string field.
    fn get_repeated_string(&self, field: &FieldDescriptor, index: usize) -> &str;

    /// The fields explicitly present in this record, in schema declaration
    /// order. Singular unset fields are absent; repeated fields appear when
    /// non-empty.
    fn set_fields(&self) -> Vec<Arc<FieldDescriptor>>;
}

/// Storage for one field of a [`DynRecord`].
#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Singular(Value),
    Repeated(Vec<Value>),
}

/// An in-memory record over a runtime-assembled schema.
///
/// Writers ([`set`](DynRecord::set), [`push`](DynRecord::push),
/// [`message_mut`](DynRecord::message_mut)) validate against the schema and
/// panic on misuse, mirroring the host reflection systems this adapter
/// stands in for; reads follow the [`Record`] contract and never fail.
#[derive(Debug, Clone)]
pub struct DynRecord {
    descriptor: Arc<MessageDescriptor>,
    fields: BTreeMap<usize, Slot>,
}

impl PartialEq for DynRecord {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor.name() == other.descriptor.name() && self.fields == other.fields
    }
}

impl DynRecord {
    /// Creates an empty record of the given schema.
    pub fn new(descriptor: Arc<MessageDescriptor>) -> Self {
        Self {
            descriptor,
            fields: BTreeMap::new(),
        }
    }

    /// Sets a singular field.
    ///
    /// An `i32` written to an enum field is accepted as a value-number.
    ///
    /// # Panics
    /// Panics if the field does not exist, is repeated, or the value's kind
    /// does not match the field's declared type.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let field = self.field_named(name);
        assert!(
            !field.is_repeated(),
            "field {name} of {} is repeated; use push",
            self.descriptor.name()
        );
        let value = Self::conform(&field, value.into());
        self.fields.insert(field.index(), Slot::Singular(value));
    }

    /// Appends an element to a repeated field.
    ///
    /// # Panics
    /// Panics if the field does not exist, is singular, or the value's kind
    /// does not match the field's declared type.
    pub fn push(&mut self, name: &str, value: impl Into<Value>) {
        let field = self.field_named(name);
        assert!(
            field.is_repeated(),
            "field {name} of {} is singular; use set",
            self.descriptor.name()
        );
        let value = Self::conform(&field, value.into());
        match self
            .fields
            .entry(field.index())
            .or_insert_with(|| Slot::Repeated(Vec::new()))
        {
            Slot::Repeated(values) => values.push(value),
            Slot::Singular(_) => unreachable!("singular slot under a repeated field"),
        }
    }

    /// Clears a field, returning it to the unset state.
    pub fn clear(&mut self, name: &str) {
        let field = self.field_named(name);
        self.fields.remove(&field.index());
    }

    /// Mutable access to a singular message field, setting it to an empty
    /// sub-record first if it is unset.
    ///
    /// # Panics
    /// Panics if the field does not exist or is not a singular message.
    pub fn message_mut(&mut self, name: &str) -> &mut DynRecord {
        let field = self.field_named(name);
        let child = match field.field_type() {
            FieldType::Message(child) if !field.is_repeated() => Arc::clone(child),
            _ => panic!(
                "field {name} of {} is not a singular message",
                self.descriptor.name()
            ),
        };
        let slot = self
            .fields
            .entry(field.index())
            .or_insert_with(|| Slot::Singular(Value::Message(DynRecord::new(child))));
        match slot {
            Slot::Singular(Value::Message(record)) => record,
            _ => unreachable!("non-message slot under a message field"),
        }
    }

    fn field_named(&self, name: &str) -> Arc<FieldDescriptor> {
        match self.descriptor.field_by_name(name) {
            Some(field) => Arc::clone(field),
            None => panic!("no field {name} in {}", self.descriptor.name()),
        }
    }

    /// Checks `value` against the field's declared type, converting an
    /// `Int32` written to an enum field into an `Enum` value-number.
    fn conform(field: &FieldDescriptor, value: Value) -> Value {
        let value = match (field.field_type(), value) {
            (FieldType::Enum(_), Value::Int32(number)) => Value::Enum(number),
            (_, value) => value,
        };
        match (field.field_type(), &value) {
            (FieldType::Enum(schema), Value::Enum(number)) => {
                assert!(
                    schema.value_by_number(*number).is_some(),
                    "enum {} has no value with number {number}",
                    schema.name()
                );
            }
            // schemas assembled separately are interchangeable when they
            // describe the same type, so match by type name
            (FieldType::Message(schema), Value::Message(record)) => {
                assert!(
                    schema.name() == record.descriptor().name(),
                    "record of type {} written to field {} of type {}",
                    record.descriptor().name(),
                    field.name(),
                    schema.name()
                );
            }
            (field_type, value) => {
                assert!(
                    field_type.kind() == value.kind(),
                    "{} value written to {} field {}",
                    value.kind(),
                    field_type.kind(),
                    field.name()
                );
            }
        }
        value
    }

    fn slot(&self, field: &FieldDescriptor) -> Option<&Slot> {
        self.fields.get(&field.index())
    }

    fn element(&self, field: &FieldDescriptor, index: usize) -> &Value {
        match self.slot(field) {
            Some(Slot::Repeated(values)) => &values[index],
            _ => panic!(
                "index {index} out of range for repeated field {}",
                field.name()
            ),
        }
    }
}

macro_rules! dyn_scalar_reads {
    ($($kind:ident => $variant:ident, $ty:ty, $zero:expr);* $(;)?) => {
        paste! {
            $(
                fn [<get_ $kind>](&self, field: &FieldDescriptor) -> $ty {
                    match self.slot(field) {
                        Some(Slot::Singular(Value::$variant(v))) => *v,
                        None => $zero,
                        Some(_) => panic!(
                            concat!("field {} is not a singular ", stringify!($kind)),
                            field.name()
                        ),
                    }
                }

                fn [<get_repeated_ $kind>](&self, field: &FieldDescriptor, index: usize) -> $ty {
                    match self.element(field, index) {
                        Value::$variant(v) => *v,
                        _ => panic!(
                            concat!("field {} is not a repeated ", stringify!($kind)),
                            field.name()
                        ),
                    }
                }
            )*
        }
    };
}

impl Record for DynRecord {
    fn descriptor(&self) -> &Arc<MessageDescriptor> {
        &self.descriptor
    }

    fn empty(descriptor: Arc<MessageDescriptor>) -> Self {
        DynRecord::new(descriptor)
    }

    fn has(&self, field: &FieldDescriptor) -> bool {
        match self.slot(field) {
            Some(Slot::Singular(_)) => true,
            Some(Slot::Repeated(values)) => !values.is_empty(),
            None => false,
        }
    }

    dyn_scalar_reads! {
        int32 => Int32, i32, 0;
        int64 => Int64, i64, 0;
        uint32 => UInt32, u32, 0;
        uint64 => UInt64, u64, 0;
        bool => Bool, bool, false;
    }

    fn get_enum(&self, field: &FieldDescriptor) -> i32 {
        match self.slot(field) {
            Some(Slot::Singular(Value::Enum(v))) => *v,
            None => 0,
            Some(_) => panic!("field {} is not a singular enum", field.name()),
        }
    }

    fn get_repeated_enum(&self, field: &FieldDescriptor, index: usize) -> i32 {
        match self.element(field, index) {
            Value::Enum(v) => *v,
            _ => panic!("field {} is not a repeated enum", field.name()),
        }
    }

    fn get_float(&self, field: &FieldDescriptor) -> f32 {
        match self.slot(field) {
            Some(Slot::Singular(Value::Float(v))) => *v,
            None => 0.0,
            Some(_) => panic!("field {} is not a singular float", field.name()),
        }
    }

    fn get_double(&self, field: &FieldDescriptor) -> f64 {
        match self.slot(field) {
            Some(Slot::Singular(Value::Double(v))) => *v,
            None => 0.0,
            Some(_) => panic!("field {} is not a singular double", field.name()),
        }
    }

    fn get_string(&self, field: &FieldDescriptor) -> &str {
        match self.slot(field) {
            Some(Slot::Singular(Value::String(v))) => v.as_str(),
            None => "",
            Some(_) => panic!("field {} is not a singular string", field.name()),
        }
    }

    fn get_message(&self, field: &FieldDescriptor) -> Option<&Self> {
        match self.slot(field) {
            Some(Slot::Singular(Value::Message(record))) => Some(record),
            None => None,
            Some(_) => panic!("field {} is not a singular message", field.name()),
        }
    }

    fn field_len(&self, field: &FieldDescriptor) -> usize {
        match self.slot(field) {
            Some(Slot::Repeated(values)) => values.len(),
            None => 0,
            Some(Slot::Singular(_)) => panic!("field {} is not repeated", field.name()),
        }
    }

    fn get_repeated_string(&self, field: &FieldDescriptor, index: usize) -> &str {
        match self.element(field, index) {
            Value::String(v) => v.as_str(),
            _ => panic!("field {} is not a repeated string", field.name()),
        }
    }

    fn set_fields(&self) -> Vec<Arc<FieldDescriptor>> {
        self.fields
            .iter()
            .filter(|(_, slot)| !matches!(slot, Slot::Repeated(values) if values.is_empty()))
            .filter_map(|(&index, _)| self.descriptor.field(index).cloned())
            .collect()
    }
}
