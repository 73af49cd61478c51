// File: src/schema.rs
// Purpose: Rule definitions as data (JSON, TOML, JS objects)

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::error::SchemaError;
use crate::rules::{FieldRef, Nullable, RuleDefinition, RuleMap, RuleSpec, Targets, NULLABLE};

/// One rule definition as written in a document:
///
/// ```json
/// { "target": "password",
///   "rules": { "required": "Please fill in a password",
///              "matchWith": "password_check|The passwords do not match" } }
/// ```
///
/// `element` is accepted as an alias of `target`.
#[derive(Debug, Deserialize)]
pub struct DefinitionSchema {
    #[serde(alias = "element")]
    pub target: TargetSchema,

    #[serde(default)]
    pub rules: IndexMap<String, RuleValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TargetSchema {
    One(String),
    Many(Vec<String>),
}

/// A rule's value in a document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    Flag(bool),
    Message(String),
    Number(f64),
    /// Anything else (lists, objects, null); the rule is skipped.
    Unsupported(IgnoredAny),
}

/// One definition or a list of them, the shape documents and JS values use.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DefinitionsSchema {
    One(DefinitionSchema),
    Many(Vec<DefinitionSchema>),
}

impl DefinitionsSchema {
    pub fn into_vec(self) -> Vec<DefinitionSchema> {
        match self {
            DefinitionsSchema::One(schema) => vec![schema],
            DefinitionsSchema::Many(schemas) => schemas,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlDocument {
    #[serde(default)]
    definitions: Vec<DefinitionSchema>,
}

impl RuleValue {
    /// Truthiness of the value as a `nullable` flag: `true`, any non-empty
    /// text and any non-zero number count as set.
    fn is_truthy(&self) -> bool {
        match self {
            RuleValue::Flag(flag) => *flag,
            RuleValue::Message(text) => !text.is_empty(),
            RuleValue::Number(number) => *number != 0.0 && !number.is_nan(),
            RuleValue::Unsupported(_) => false,
        }
    }
}

impl DefinitionSchema {
    /// Build the engine's definition.
    ///
    /// Empty field names point at no field. A definition left without any
    /// target is kept and simply matches nothing.
    pub fn into_definition<H>(self, index: usize) -> RuleDefinition<H> {
        let names: Vec<String> = match self.target {
            TargetSchema::One(name) => vec![name],
            TargetSchema::Many(names) => names,
        };
        let mut names: Vec<String> = names.into_iter().filter(|name| !name.is_empty()).collect();

        let target = match names.len() {
            0 => {
                tracing::debug!("Rule definition {} has no target fields, nothing to check", index);
                Targets::Many(Vec::new())
            }
            1 => Targets::One(FieldRef::Name(names.remove(0))),
            _ => Targets::Many(names.into_iter().map(FieldRef::Name).collect()),
        };

        let mut rules = RuleMap::new();
        for (name, value) in self.rules {
            match (name.as_str(), value) {
                (NULLABLE, value) => rules.set_nullable(Nullable::from(value.is_truthy())),
                (_, RuleValue::Message(message)) => rules.insert(name, RuleSpec::Literal(message)),
                (_, value) => {
                    tracing::debug!("Rule '{}' has no message ({:?}), skipping", name, value)
                }
            }
        }

        RuleDefinition { target, rules }
    }
}

/// Convert already-deserialized schemas, e.g. from a JS value.
pub fn from_schemas<H>(schemas: Vec<DefinitionSchema>) -> Vec<RuleDefinition<H>> {
    schemas
        .into_iter()
        .enumerate()
        .map(|(index, schema)| schema.into_definition(index))
        .collect()
}

/// Read definitions from a JSON document holding one definition or a list.
///
/// ```
/// let definitions = valinator::schema::from_json::<valinator::FieldId>(r#"[
///     { "target": "first_name", "rules": { "required": "Please fill in your first name" } },
///     { "target": ["phone", "mobile"], "rules": { "nullable": true, "phone": "Invalid number" } }
/// ]"#).unwrap();
///
/// assert_eq!(definitions.len(), 2);
/// ```
pub fn from_json<H>(json: &str) -> Result<Vec<RuleDefinition<H>>, SchemaError> {
    let schemas = serde_json::from_str::<DefinitionsSchema>(json)?;
    Ok(from_schemas(schemas.into_vec()))
}

/// Read definitions from a TOML document with `[[definitions]]` tables.
///
/// ```toml
/// [[definitions]]
/// target = "age"
/// rules = { required = "Age is required", minNumber = "18|You must be an adult" }
/// ```
pub fn from_toml<H>(toml: &str) -> Result<Vec<RuleDefinition<H>>, SchemaError> {
    let document: TomlDocument = toml::from_str(toml)?;
    Ok(from_schemas(document.definitions))
}
