// File: src/rules.rs
// Purpose: Rule definitions: which fields, which checks, which messages

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// Rule name that marks a field as nullable instead of naming a check.
pub const NULLABLE: &str = "nullable";

/// Separates a check's option from its message: `"8|Too short"`.
pub const OPTION_SEPARATOR: char = '|';

/// A reference to a field, either by name or by a handle the caller already
/// resolved through its field accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(untagged)]
pub enum FieldRef<H> {
    Name(String),
    Handle(H),
}

impl<H> FieldRef<H> {
    /// The field name, if this reference is by name.
    pub fn name(&self) -> Option<&str> {
        match self {
            FieldRef::Name(name) => Some(name),
            FieldRef::Handle(_) => None,
        }
    }
}

impl<H: fmt::Debug> fmt::Display for FieldRef<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Name(name) => f.write_str(name),
            FieldRef::Handle(handle) => write!(f, "{:?}", handle),
        }
    }
}

impl<H> From<&str> for FieldRef<H> {
    fn from(name: &str) -> Self {
        FieldRef::Name(name.to_string())
    }
}

impl<H> From<String> for FieldRef<H> {
    fn from(name: String) -> Self {
        FieldRef::Name(name)
    }
}

/// The field(s) a definition applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum Targets<H> {
    One(FieldRef<H>),
    Many(Vec<FieldRef<H>>),
}

impl<H> Targets<H> {
    /// Handle a single target and a list of targets the same way.
    pub fn as_slice(&self) -> &[FieldRef<H>] {
        match self {
            Targets::One(field) => std::slice::from_ref(field),
            Targets::Many(fields) => fields,
        }
    }
}

impl<H> From<FieldRef<H>> for Targets<H> {
    fn from(field: FieldRef<H>) -> Self {
        Targets::One(field)
    }
}

impl<H> From<Vec<FieldRef<H>>> for Targets<H> {
    fn from(fields: Vec<FieldRef<H>>) -> Self {
        Targets::Many(fields)
    }
}

impl<H> From<&str> for Targets<H> {
    fn from(name: &str) -> Self {
        Targets::One(name.into())
    }
}

impl<H> From<String> for Targets<H> {
    fn from(name: String) -> Self {
        Targets::One(name.into())
    }
}

impl<H> From<Vec<&str>> for Targets<H> {
    fn from(names: Vec<&str>) -> Self {
        Targets::Many(names.into_iter().map(FieldRef::from).collect())
    }
}

impl<H, const N: usize> From<[&str; N]> for Targets<H> {
    fn from(names: [&str; N]) -> Self {
        Targets::Many(names.into_iter().map(FieldRef::from).collect())
    }
}

/// The message (and option) for one rule, fixed or decided at validation time.
pub enum RuleSpec {
    /// `"message"` or `"option|message"`.
    Literal(String),
    /// Evaluated on every pass; `None` skips the rule for this pass.
    Conditional(Box<dyn Fn() -> Option<String>>),
}

impl RuleSpec {
    /// Resolve the spec to its raw `option|message` text.
    pub fn resolve(&self) -> Option<Cow<'_, str>> {
        match self {
            RuleSpec::Literal(text) => Some(Cow::Borrowed(text)),
            RuleSpec::Conditional(condition) => condition().map(Cow::Owned),
        }
    }
}

impl fmt::Debug for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleSpec::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            RuleSpec::Conditional(_) => f.write_str("Conditional(..)"),
        }
    }
}

impl From<&str> for RuleSpec {
    fn from(text: &str) -> Self {
        RuleSpec::Literal(text.to_string())
    }
}

impl From<String> for RuleSpec {
    fn from(text: String) -> Self {
        RuleSpec::Literal(text)
    }
}

/// Whether an empty value skips every other rule on the field.
#[derive(Default)]
pub enum Nullable {
    #[default]
    Never,
    Always,
    When(Box<dyn Fn() -> bool>),
}

impl Nullable {
    pub fn is_active(&self) -> bool {
        match self {
            Nullable::Never => false,
            Nullable::Always => true,
            Nullable::When(condition) => condition(),
        }
    }
}

impl From<bool> for Nullable {
    fn from(flag: bool) -> Self {
        if flag {
            Nullable::Always
        } else {
            Nullable::Never
        }
    }
}

impl fmt::Debug for Nullable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nullable::Never => f.write_str("Never"),
            Nullable::Always => f.write_str("Always"),
            Nullable::When(_) => f.write_str("When(..)"),
        }
    }
}

/// Ordered rule name → spec mapping for one definition.
///
/// Checks run in insertion order. Inserting a name that is already present
/// replaces its spec without moving it.
///
/// ```
/// use valinator::RuleMap;
///
/// let rules = RuleMap::new()
///     .nullable()
///     .rule("minLength", "8|Password needs to be at least 8 characters long")
///     .rule("matchWith", "password_check|Passwords need to match");
///
/// assert_eq!(rules.len(), 2);
/// assert!(rules.nullable_flag().is_active());
/// ```
#[derive(Debug, Default)]
pub struct RuleMap {
    nullable: Nullable,
    rules: IndexMap<String, RuleSpec>,
}

impl RuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip all checks when the value is empty.
    pub fn nullable(mut self) -> Self {
        self.nullable = Nullable::Always;
        self
    }

    /// Skip all checks when the value is empty and `condition` holds.
    pub fn nullable_when(mut self, condition: impl Fn() -> bool + 'static) -> Self {
        self.nullable = Nullable::When(Box::new(condition));
        self
    }

    /// Add a check with a literal `message` or `option|message`.
    pub fn rule(mut self, name: impl Into<String>, spec: impl Into<RuleSpec>) -> Self {
        self.insert(name, spec.into());
        self
    }

    /// Add a check whose message is decided on each pass; returning `None`
    /// skips it.
    pub fn rule_when(
        mut self,
        name: impl Into<String>,
        condition: impl Fn() -> Option<String> + 'static,
    ) -> Self {
        self.insert(name, RuleSpec::Conditional(Box::new(condition)));
        self
    }

    pub fn set_nullable(&mut self, nullable: Nullable) {
        self.nullable = nullable;
    }

    /// Insert or replace a rule. The reserved `nullable` name is not a check
    /// and is ignored here; use [`RuleMap::set_nullable`].
    pub fn insert(&mut self, name: impl Into<String>, spec: RuleSpec) {
        let name = name.into();
        if name == NULLABLE {
            tracing::debug!("Ignoring '{}' as a check name; it is a flag", NULLABLE);
            return;
        }
        self.rules.insert(name, spec);
    }

    pub fn nullable_flag(&self) -> &Nullable {
        &self.nullable
    }

    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.rules.get(name)
    }

    /// Rules in the order they run.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSpec)> {
        self.rules.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A set of rules applied to one or more fields.
#[derive(Debug)]
pub struct RuleDefinition<H> {
    pub target: Targets<H>,
    pub rules: RuleMap,
}

impl<H> RuleDefinition<H> {
    pub fn new(target: impl Into<Targets<H>>, rules: RuleMap) -> Self {
        Self {
            target: target.into(),
            rules,
        }
    }
}

// Lets `validate` take one definition or a list of them.
impl<H> AsRef<[RuleDefinition<H>]> for RuleDefinition<H> {
    fn as_ref(&self) -> &[RuleDefinition<H>] {
        std::slice::from_ref(self)
    }
}

/// Split `option|message` on the first separator.
///
/// ```
/// use valinator::rules::split_option;
///
/// assert_eq!(split_option("8|Too short"), (Some("8"), "Too short"));
/// assert_eq!(split_option("a|b|c"), (Some("a"), "b|c"));
/// assert_eq!(split_option("Required"), (None, "Required"));
/// ```
pub fn split_option(spec: &str) -> (Option<&str>, &str) {
    match spec.split_once(OPTION_SEPARATOR) {
        Some((option, message)) => (Some(option), message),
        None => (None, spec),
    }
}
