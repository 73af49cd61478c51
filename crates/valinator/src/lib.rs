//! Valinator - declarative form validation
//!
//! Rules are attached to fields by name (or handle) and checked in order.
//! Each field reports at most one error: its first failing rule.
//!
//! ```
//! use valinator::{ErrorDisplay, Form, RuleDefinition, RuleMap, Validator};
//!
//! let mut form = Form::new()
//!     .with_field("name", "  ")
//!     .with_field("email", " ann@example.com ");
//!
//! let definitions = [
//!     RuleDefinition::new("name", RuleMap::new().rule("required", "Please fill in your name")),
//!     RuleDefinition::new("email", RuleMap::new().rule("email", "Invalid email")),
//! ];
//!
//! let validator = Validator::new();
//! let mut display = ErrorDisplay::default();
//! let outcome = validator.validate(&mut form, &mut display, &definitions);
//!
//! assert_eq!(outcome.message_for("name"), Some("Please fill in your name"));
//! assert_eq!(form.get("email"), Some("ann@example.com"));
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod form;
pub mod outcome;
pub mod registry;
pub mod reporter;
pub mod rules;
pub mod schema;

pub use config::{Config, DisplayConfig, EngineConfig, UnknownCheckPolicy};
pub use engine::Validator;
pub use error::SchemaError;
pub use field::{FieldAccessor, FieldLookup};
pub use form::{Field, FieldId, Form};
pub use outcome::{FieldError, ValidationOutcome};
pub use registry::{Check, CheckRegistry};
pub use reporter::{CallbackReporter, Decoration, ErrorDisplay, ErrorReporter};
pub use rules::{FieldRef, Nullable, RuleDefinition, RuleMap, RuleSpec, Targets};
pub use schema::{DefinitionSchema, DefinitionsSchema, RuleValue, TargetSchema};

// The predicates behind the default checks
pub use valinator_checks as checks;
