// File: src/engine.rs
// Purpose: Run rule definitions against fields and collect the failures

use crate::config::{EngineConfig, UnknownCheckPolicy};
use crate::field::{AccessorLookup, FieldAccessor};
use crate::outcome::{FieldError, ValidationOutcome};
use crate::registry::{Check, CheckRegistry};
use crate::reporter::ErrorReporter;
use crate::rules::{split_option, FieldRef, RuleDefinition, RuleMap};

/// The validation engine.
///
/// Owns its check registry, so every engine can carry its own custom
/// checks. Validating never changes the engine; registering checks needs
/// `&mut self`.
///
/// ```
/// use valinator::{ErrorDisplay, Form, RuleDefinition, RuleMap, Validator};
///
/// let validator = Validator::new();
/// let mut form = Form::new()
///     .with_field("password", "  hunter2 ")
///     .with_field("password_check", "hunter3");
/// let mut display = ErrorDisplay::default();
///
/// let outcome = validator.validate(
///     &mut form,
///     &mut display,
///     RuleDefinition::new(
///         "password",
///         RuleMap::new()
///             .rule("required", "Please fill in a password")
///             .rule("matchWith", "password_check|The passwords do not match"),
///     ),
/// );
///
/// assert_eq!(outcome.message_for("password"), Some("The passwords do not match"));
/// assert_eq!(form.get("password"), Some("hunter2"));
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    registry: CheckRegistry,
    config: EngineConfig,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// An engine with the default checks and configuration
    pub fn new() -> Self {
        Self::with_registry(CheckRegistry::with_defaults(), EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_registry(CheckRegistry::with_defaults(), config)
    }

    pub fn with_registry(registry: CheckRegistry, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CheckRegistry {
        &mut self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Add or replace a check. See [`CheckRegistry::register`].
    pub fn register<F>(&mut self, name: impl Into<String>, check: F) -> Option<Check>
    where
        F: Fn(&str, Option<&str>) -> bool + Send + Sync + 'static,
    {
        self.registry.register(name, check)
    }

    pub fn register_check(&mut self, name: impl Into<String>, check: Check) -> Option<Check> {
        self.registry.register_check(name, check)
    }

    /// Merge checks into the registry. See [`CheckRegistry::register_all`].
    pub fn register_all<I, N>(&mut self, checks: I)
    where
        I: IntoIterator<Item = (N, Check)>,
        N: Into<String>,
    {
        self.registry.register_all(checks)
    }

    /// Validate fields against one definition or a list of them.
    ///
    /// Each target field that exists and is enabled gets its error cleared
    /// and its value trimmed (and written back). A nullable field with an
    /// empty value passes. Otherwise rules run in order until the first one
    /// fails; that failure is reported and recorded, and the field's
    /// remaining rules are skipped.
    ///
    /// Missing fields, disabled fields, rules whose condition returns
    /// `None` and rules naming an unregistered check are all skipped
    /// silently.
    pub fn validate<A, R, D>(
        &self,
        fields: &mut A,
        reporter: &mut R,
        definitions: D,
    ) -> ValidationOutcome<A::Handle>
    where
        A: FieldAccessor + ?Sized,
        R: ErrorReporter<A::Handle> + ?Sized,
        D: AsRef<[RuleDefinition<A::Handle>]>,
    {
        let definitions = definitions.as_ref();
        let mut outcome = ValidationOutcome::success();

        for definition in definitions {
            for field in definition.target.as_slice() {
                if let Some(message) =
                    self.validate_field(fields, reporter, field, &definition.rules)
                {
                    outcome.push(FieldError::new(field.clone(), message));
                }
            }
        }

        tracing::debug!(
            "Validated {} definition(s): {} field(s) failed",
            definitions.len(),
            outcome.len()
        );
        outcome
    }

    /// Returns the message of the first failing rule, if any.
    fn validate_field<A, R>(
        &self,
        fields: &mut A,
        reporter: &mut R,
        field: &FieldRef<A::Handle>,
        rules: &RuleMap,
    ) -> Option<String>
    where
        A: FieldAccessor + ?Sized,
        R: ErrorReporter<A::Handle> + ?Sized,
    {
        let Some(handle) = fields.resolve(field) else {
            tracing::trace!("Field '{}' not found, skipping", field);
            return None;
        };

        if fields.is_disabled(&handle) {
            tracing::trace!("Field '{}' is disabled, skipping", field);
            return None;
        }

        reporter.clear_error(&handle);

        let value = fields.value(&handle).trim().to_string();
        fields.set_value(&handle, &value);

        let nullable = rules.nullable_flag().is_active();
        if nullable && value.is_empty() {
            tracing::trace!("Field '{}' is empty and nullable", field);
            return None;
        }

        for (name, spec) in rules.iter() {
            let Some(resolved) = spec.resolve() else {
                tracing::trace!("Rule '{}' on '{}' is switched off", name, field);
                continue;
            };
            let (option, message) = split_option(&resolved);

            let Some(check) = self.registry.get(name) else {
                self.unknown_check(name, field);
                continue;
            };

            if !check.call(&value, option, &AccessorLookup(&*fields)) {
                tracing::debug!("Field '{}' failed rule '{}'", field, name);
                reporter.set_error(&handle, message);
                return Some(message.to_string());
            }
        }

        None
    }

    fn unknown_check<H: std::fmt::Debug>(&self, name: &str, field: &FieldRef<H>) {
        match self.config.unknown_checks {
            UnknownCheckPolicy::Ignore => {
                tracing::debug!("No check named '{}' (field '{}'), skipping", name, field)
            }
            UnknownCheckPolicy::Warn => {
                tracing::warn!("No check named '{}' (field '{}'), skipping", name, field)
            }
        }
    }
}
