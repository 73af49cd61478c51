// File: src/registry.rs
// Purpose: Named, pluggable check functions

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::field::FieldLookup;

type CheckFn = dyn Fn(&str, Option<&str>, &dyn FieldLookup) -> bool + Send + Sync;

/// A named check: `true` means the value passes.
///
/// Most checks only look at the (trimmed) value and the rule's option.
/// Cross-field checks also get a [`FieldLookup`] to read other fields.
#[derive(Clone)]
pub struct Check(Arc<CheckFn>);

impl Check {
    /// A check over the value and its option.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> bool + Send + Sync + 'static,
    {
        Self::cross_field(move |value, option, _fields| check(value, option))
    }

    /// A check that can read other fields by name.
    pub fn cross_field<F>(check: F) -> Self
    where
        F: Fn(&str, Option<&str>, &dyn FieldLookup) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(check))
    }

    pub fn call(&self, value: &str, option: Option<&str>, fields: &dyn FieldLookup) -> bool {
        (self.0)(value, option, fields)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Check(..)")
    }
}

/// The value must equal the current value of the field named by the option.
fn match_with(value: &str, option: Option<&str>, fields: &dyn FieldLookup) -> bool {
    option
        .and_then(|name| fields.field_value(name))
        .is_some_and(|other| other == value)
}

/// Checks by name.
///
/// Looking up a name that is not registered gives `None`; the engine treats
/// that as "nothing to check".
#[derive(Clone, Default)]
pub struct CheckRegistry {
    checks: HashMap<String, Check>,
}

impl CheckRegistry {
    /// A registry with no checks at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding every default check.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register_all(
            valinator_checks::DEFAULT_CHECKS
                .iter()
                .map(|(name, predicate)| (*name, Check::new(*predicate))),
        );
        registry.register_check("matchWith", Check::cross_field(match_with));
        registry
    }

    /// Install or replace a single check. Returns the check it replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, check: F) -> Option<Check>
    where
        F: Fn(&str, Option<&str>) -> bool + Send + Sync + 'static,
    {
        self.register_check(name, Check::new(check))
    }

    pub fn register_check(&mut self, name: impl Into<String>, check: Check) -> Option<Check> {
        let name = name.into();
        let previous = self.checks.insert(name.clone(), check);
        if previous.is_some() {
            tracing::debug!("Replaced check '{}'", name);
        }
        previous
    }

    /// Merge checks into the registry. Names already present are overwritten;
    /// every other registered check is left alone.
    pub fn register_all<I, N>(&mut self, checks: I)
    where
        I: IntoIterator<Item = (N, Check)>,
        N: Into<String>,
    {
        for (name, check) in checks {
            self.register_check(name, check);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Check> {
        self.checks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Check> {
        self.checks.remove(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.checks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.names())
            .finish()
    }
}
