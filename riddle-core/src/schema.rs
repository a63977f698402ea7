//! Schema handles: message, field and enum descriptors.
//!
//! Descriptors are plain, immutable data built once through the fluent
//! builders and shared as [`Arc`]s. A descriptor graph is acyclic; a
//! compiled filter holds `Arc`s into it, so handles must simply stay alive
//! for as long as any filter compiled against them.

use crate::kind::Kind;
use paste::paste;
use std::{collections::HashMap, sync::Arc};

/// One named value of an [`EnumDescriptor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValueDescriptor {
    name: String,
    number: i32,
}

impl EnumValueDescriptor {
    /// The value's declared name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value's number.
    pub fn number(&self) -> i32 {
        self.number
    }
}

/// Describes an enumeration: an ordered set of named numbers.
#[derive(Debug)]
pub struct EnumDescriptor {
    name: String,
    values: Vec<EnumValueDescriptor>,
    by_name: HashMap<String, usize>,
    by_number: HashMap<i32, usize>,
}

impl EnumDescriptor {
    /// Starts building an enum schema with the given type name.
    pub fn builder(name: impl Into<String>) -> EnumBuilder {
        EnumBuilder {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// The enum's type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All declared values, in declaration order.
    pub fn values(&self) -> &[EnumValueDescriptor] {
        &self.values
    }

    /// Looks a value up by its declared name.
    pub fn value_by_name(&self, name: &str) -> Option<&EnumValueDescriptor> {
        self.by_name.get(name).map(|&i| &self.values[i])
    }

    /// Looks a value up by its number.
    pub fn value_by_number(&self, number: i32) -> Option<&EnumValueDescriptor> {
        self.by_number.get(&number).map(|&i| &self.values[i])
    }
}

/// Builder for [`EnumDescriptor`].
#[derive(Debug)]
pub struct EnumBuilder {
    name: String,
    values: Vec<EnumValueDescriptor>,
}

impl EnumBuilder {
    /// Adds a named value.
    #[must_use]
    pub fn value(mut self, name: impl Into<String>, number: i32) -> Self {
        self.values.push(EnumValueDescriptor {
            name: name.into(),
            number,
        });
        self
    }

    /// Finishes the enum schema.
    pub fn finish(self) -> Arc<EnumDescriptor> {
        let by_name = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.name.clone(), i))
            .collect();
        let by_number = self
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.number, i))
            .collect();
        Arc::new(EnumDescriptor {
            name: self.name,
            values: self.values,
            by_name,
            by_number,
        })
    }
}

/// The declared type of a field.
#[derive(Debug, Clone)]
pub enum FieldType {
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
    /// UTF-8 string.
    String,
    /// Enumeration with its schema.
    Enum(Arc<EnumDescriptor>),
    /// Nested record with its schema.
    Message(Arc<MessageDescriptor>),
}

impl FieldType {
    /// The [`Kind`] classification of this type.
    pub fn kind(&self) -> Kind {
        match self {
            FieldType::Int32 => Kind::Int32,
            FieldType::Int64 => Kind::Int64,
            FieldType::UInt32 => Kind::UInt32,
            FieldType::UInt64 => Kind::UInt64,
            FieldType::Float => Kind::Float,
            FieldType::Double => Kind::Double,
            FieldType::Bool => Kind::Bool,
            FieldType::String => Kind::String,
            FieldType::Enum(_) => Kind::Enum,
            FieldType::Message(_) => Kind::Message,
        }
    }
}

/// Describes one field of a [`MessageDescriptor`].
#[derive(Debug)]
pub struct FieldDescriptor {
    name: String,
    index: usize,
    repeated: bool,
    field_type: FieldType,
}

impl FieldDescriptor {
    /// The field's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's position within its message, stable for the lifetime of
    /// the descriptor. Records key their storage by this index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the field is repeated.
    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    /// The field's declared type.
    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }

    /// The field's [`Kind`] classification.
    pub fn kind(&self) -> Kind {
        self.field_type.kind()
    }

    /// The enum schema, for enum-typed fields.
    pub fn enum_type(&self) -> Option<&Arc<EnumDescriptor>> {
        match &self.field_type {
            FieldType::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// The child message schema, for message-typed fields.
    pub fn message_type(&self) -> Option<&Arc<MessageDescriptor>> {
        match &self.field_type {
            FieldType::Message(m) => Some(m),
            _ => None,
        }
    }
}

/// Describes a record type: its named, typed fields.
#[derive(Debug)]
pub struct MessageDescriptor {
    name: String,
    fields: Vec<Arc<FieldDescriptor>>,
    by_name: HashMap<String, usize>,
}

impl MessageDescriptor {
    /// Starts building a message schema with the given type name.
    pub fn builder(name: impl Into<String>) -> MessageBuilder {
        MessageBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// The message's type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All fields, in declaration order.
    pub fn fields(&self) -> &[Arc<FieldDescriptor>] {
        &self.fields
    }

    /// Looks a field up by name.
    pub fn field_by_name(&self, name: &str) -> Option<&Arc<FieldDescriptor>> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    /// Looks a field up by its [`FieldDescriptor::index`].
    pub fn field(&self, index: usize) -> Option<&Arc<FieldDescriptor>> {
        self.fields.get(index)
    }
}

/// Builder for [`MessageDescriptor`].
#[derive(Debug)]
pub struct MessageBuilder {
    name: String,
    fields: Vec<Arc<FieldDescriptor>>,
}

macro_rules! scalar_field_methods {
    ($($method:ident => $variant:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("Adds a singular `", stringify!($method), "` field.")]
                #[must_use]
                pub fn $method(self, name: impl Into<String>) -> Self {
                    self.field(name, false, FieldType::$variant)
                }

                #[doc = concat!("Adds a repeated `", stringify!($method), "` field.")]
                #[must_use]
                pub fn [<repeated_ $method>](self, name: impl Into<String>) -> Self {
                    self.field(name, true, FieldType::$variant)
                }
            )*
        }
    };
}

impl MessageBuilder {
    scalar_field_methods!(
        int32 => Int32,
        int64 => Int64,
        uint32 => UInt32,
        uint64 => UInt64,
        float => Float,
        double => Double,
        boolean => Bool,
        string => String,
    );

    /// Adds a singular enum field.
    #[must_use]
    pub fn enumeration(self, name: impl Into<String>, schema: Arc<EnumDescriptor>) -> Self {
        self.field(name, false, FieldType::Enum(schema))
    }

    /// Adds a repeated enum field.
    #[must_use]
    pub fn repeated_enumeration(self, name: impl Into<String>, schema: Arc<EnumDescriptor>) -> Self {
        self.field(name, true, FieldType::Enum(schema))
    }

    /// Adds a singular message field.
    #[must_use]
    pub fn message(self, name: impl Into<String>, schema: Arc<MessageDescriptor>) -> Self {
        self.field(name, false, FieldType::Message(schema))
    }

    /// Adds a repeated message field.
    #[must_use]
    pub fn repeated_message(self, name: impl Into<String>, schema: Arc<MessageDescriptor>) -> Self {
        self.field(name, true, FieldType::Message(schema))
    }

    /// Adds a field with an explicit cardinality and type.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, repeated: bool, field_type: FieldType) -> Self {
        let index = self.fields.len();
        self.fields.push(Arc::new(FieldDescriptor {
            name: name.into(),
            index,
            repeated,
            field_type,
        }));
        self
    }

    /// Finishes the message schema.
    pub fn finish(self) -> Arc<MessageDescriptor> {
        let by_name = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, f)| (f.name.clone(), i))
            .collect();
        Arc::new(MessageDescriptor {
            name: self.name,
            fields: self.fields,
            by_name,
        })
    }
}
