// File: src/outcome.rs
// Purpose: Result of a validation pass

use serde::Serialize;

use crate::rules::FieldRef;

/// The first failing rule of one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError<H> {
    pub field: FieldRef<H>,
    pub message: String,
}

impl<H> FieldError<H> {
    pub fn new(field: FieldRef<H>, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failures of a validation pass, in the order the fields were visited.
///
/// A field appears at most once: checking stops at its first failing rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationOutcome<H> {
    errors: Vec<FieldError<H>>,
}

impl<H> Default for ValidationOutcome<H> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<H> ValidationOutcome<H> {
    /// Create an outcome with no failures
    pub fn success() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, error: FieldError<H>) {
        self.errors.push(error);
    }

    /// True when no field failed; callers use this to decide whether to proceed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError<H>] {
        &self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError<H>> {
        self.errors.iter()
    }

    /// Message for a field that was referenced by name
    pub fn message_for(&self, name: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field.name() == Some(name))
            .map(|error| error.message.as_str())
    }

    /// The failing fields, in order
    pub fn fields(&self) -> impl Iterator<Item = &FieldRef<H>> {
        self.errors.iter().map(|error| &error.field)
    }

    pub fn into_errors(self) -> Vec<FieldError<H>> {
        self.errors
    }
}

impl<H> IntoIterator for ValidationOutcome<H> {
    type Item = FieldError<H>;
    type IntoIter = std::vec::IntoIter<FieldError<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, H> IntoIterator for &'a ValidationOutcome<H> {
    type Item = &'a FieldError<H>;
    type IntoIter = std::slice::Iter<'a, FieldError<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
