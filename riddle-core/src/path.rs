//! Resolution of dotted field names against a schema.

use crate::schema::{FieldDescriptor, MessageDescriptor};
use snafu::{ensure, OptionExt, Snafu};
use std::{fmt, sync::Arc};

/// A dotted field name could not be resolved against a schema.
#[derive(Debug, Snafu)]
pub enum PathError {
    /// A segment of the name does not exist in the schema it is resolved
    /// against, or the name descends into a non-message field.
    #[snafu(display("the field name is invalid: {name}"))]
    UnknownField {
        /// The full dotted name.
        name: String,
    },

    /// The name traverses or, when not allowed, ends in a repeated field.
    #[snafu(display("repeated field is not allowed in the path: {name}"))]
    DisallowedRepeated {
        /// The full dotted name.
        name: String,
    },
}

/// An ordered, non-empty sequence of field handles addressing a possibly
/// nested field.
///
/// Every non-terminal handle refers to a singular message field; the
/// terminal may be repeated only when the path was resolved with
/// `allow_repeated`.
#[derive(Debug, Clone)]
pub struct FieldPath {
    fields: Vec<Arc<FieldDescriptor>>,
}

impl FieldPath {
    /// Resolves `name`, split on `.`, against `descriptor`.
    ///
    /// `allow_repeated` permits the terminal field (and only the terminal
    /// field) to be repeated.
    ///
    /// # Errors
    /// Returns [`PathError::UnknownField`] when a segment is missing or the
    /// name descends through a non-message field, and
    /// [`PathError::DisallowedRepeated`] when a repeated field appears in a
    /// disallowed position.
    pub fn resolve(
        descriptor: &Arc<MessageDescriptor>,
        name: &str,
        allow_repeated: bool,
    ) -> Result<Self, PathError> {
        let mut fields: Vec<Arc<FieldDescriptor>> = Vec::new();
        let mut current: Option<&Arc<MessageDescriptor>> = Some(descriptor);
        for segment in name.split('.') {
            let field = current
                .and_then(|message| message.field_by_name(segment))
                .context(UnknownFieldSnafu { name })?;
            fields.push(Arc::clone(field));
            current = field.message_type();
        }
        // split never yields nothing, so the path is non-empty here
        ensure!(
            fields.iter().rev().skip(1).all(|f| !f.is_repeated()),
            DisallowedRepeatedSnafu { name }
        );
        ensure!(
            allow_repeated || !fields[fields.len() - 1].is_repeated(),
            DisallowedRepeatedSnafu { name }
        );
        Ok(Self { fields })
    }

    /// The field the path addresses.
    pub fn terminal(&self) -> &Arc<FieldDescriptor> {
        &self.fields[self.fields.len() - 1]
    }

    /// All handles before the terminal, each a singular message field.
    pub fn ancestors(&self) -> &[Arc<FieldDescriptor>] {
        &self.fields[..self.fields.len() - 1]
    }

    /// All handles, root first.
    pub fn fields(&self) -> &[Arc<FieldDescriptor>] {
        &self.fields
    }

    /// Number of handles in the path; at least 1.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always `false`; paths are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(field.name())?;
        }
        Ok(())
    }
}
