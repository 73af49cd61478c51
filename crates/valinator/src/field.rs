// File: src/field.rs
// Purpose: Traits the engine uses to reach field values

use std::collections::HashMap;
use std::fmt;

use crate::rules::FieldRef;

/// Access to the live fields being validated.
///
/// The engine resolves every target through this trait, reads and trims the
/// value, and writes the trimmed value back. Implementations decide what a
/// field is: an in-memory [`Form`](crate::Form), a DOM input, a request body.
pub trait FieldAccessor {
    /// A resolved, live reference to one field.
    type Handle: Clone + fmt::Debug;

    /// Find the field a reference points to, or `None` if it does not exist.
    fn resolve(&self, field: &FieldRef<Self::Handle>) -> Option<Self::Handle>;

    fn value(&self, handle: &Self::Handle) -> String;

    fn set_value(&mut self, handle: &Self::Handle, value: &str);

    /// Disabled fields are never validated.
    fn is_disabled(&self, handle: &Self::Handle) -> bool;
}

/// Read-only lookup of other fields by name, handed to cross-field checks.
pub trait FieldLookup {
    /// The current trimmed value of the named field, if it exists.
    fn field_value(&self, name: &str) -> Option<String>;
}

/// No fields at all; cross-field checks always fail against it.
impl FieldLookup for () {
    fn field_value(&self, _name: &str) -> Option<String> {
        None
    }
}

impl FieldLookup for HashMap<String, String> {
    fn field_value(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.trim().to_string())
    }
}

/// Adapts a [`FieldAccessor`] into a [`FieldLookup`].
pub(crate) struct AccessorLookup<'a, A: ?Sized>(pub(crate) &'a A);

impl<A> FieldLookup for AccessorLookup<'_, A>
where
    A: FieldAccessor + ?Sized,
{
    fn field_value(&self, name: &str) -> Option<String> {
        let handle = self.0.resolve(&FieldRef::Name(name.to_string()))?;
        Some(self.0.value(&handle).trim().to_string())
    }
}
