// File: src/form.rs
// Purpose: In-memory form that the engine can validate

use serde::{Deserialize, Serialize};

use crate::field::FieldAccessor;
use crate::rules::FieldRef;

/// Handle to a field of a [`Form`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldId(usize);

/// One input of a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            disabled: false,
        }
    }
}

/// Named fields in document order.
///
/// Like a page, several fields may share a name; a name resolves to the
/// first of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Form {
    fields: Vec<Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_field(Field::new(name, value));
        self
    }

    pub fn with_disabled_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut field = Field::new(name, value);
        field.disabled = true;
        self.add_field(field);
        self
    }

    pub fn add_field(&mut self, field: Field) -> FieldId {
        self.fields.push(field);
        FieldId(self.fields.len() - 1)
    }

    /// Handle of the first field with this name
    pub fn id(&self, name: &str) -> Option<FieldId> {
        self.fields
            .iter()
            .position(|field| field.name == name)
            .map(FieldId)
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(id.0)
    }

    /// Current value of the first field with this name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.id(name)
            .and_then(|id| self.field(id))
            .map(|field| field.value.as_str())
    }

    pub fn set_disabled(&mut self, id: FieldId, disabled: bool) {
        if let Some(field) = self.fields.get_mut(id.0) {
            field.disabled = disabled;
        }
    }

    /// Simulate the user editing a field. Returns whether the value changed,
    /// which is when an error display should hear about it.
    pub fn input(&mut self, id: FieldId, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.fields.get_mut(id.0) {
            Some(field) if field.value != value => {
                field.value = value;
                true
            }
            _ => false,
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<Field>> for Form {
    fn from(fields: Vec<Field>) -> Self {
        Self { fields }
    }
}

impl FromIterator<Field> for Form {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl FieldAccessor for Form {
    type Handle = FieldId;

    fn resolve(&self, field: &FieldRef<FieldId>) -> Option<FieldId> {
        match field {
            FieldRef::Name(name) => self.id(name),
            FieldRef::Handle(id) => self.field(*id).map(|_| *id),
        }
    }

    fn value(&self, handle: &FieldId) -> String {
        self.field(*handle)
            .map(|field| field.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, handle: &FieldId, value: &str) {
        if let Some(field) = self.fields.get_mut(handle.0) {
            field.value = value.to_string();
        }
    }

    fn is_disabled(&self, handle: &FieldId) -> bool {
        self.field(*handle).is_some_and(|field| field.disabled)
    }
}
