// File: src/reporter.rs
// Purpose: Showing and clearing field errors

use maud::Escaper;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use std::hash::Hash;

use crate::config::DisplayConfig;
use crate::form::FieldId;

/// Receives error notifications from the engine.
///
/// The engine clears a field's error before checking it again, and sets one
/// when a rule fails. How errors are shown is up to the implementation.
pub trait ErrorReporter<H> {
    fn set_error(&mut self, field: &H, message: &str);

    fn clear_error(&mut self, field: &H);
}

/// Reports nothing.
impl<H> ErrorReporter<H> for () {
    fn set_error(&mut self, _field: &H, _message: &str) {}

    fn clear_error(&mut self, _field: &H) {}
}

/// Custom error handlers that replace the default presentation.
///
/// ```
/// use valinator::{CallbackReporter, ErrorReporter};
///
/// let mut shown = Vec::new();
/// let mut reporter = CallbackReporter::new(
///     |field: &&str, message: &str| shown.push(format!("{field}: {message}")),
///     |_field: &&str| {},
/// );
/// reporter.set_error(&"email", "Invalid email");
/// drop(reporter);
/// assert_eq!(shown, ["email: Invalid email"]);
/// ```
pub struct CallbackReporter<S, C> {
    on_set: S,
    on_clear: C,
}

impl<S, C> CallbackReporter<S, C> {
    pub fn new(on_set: S, on_clear: C) -> Self {
        Self { on_set, on_clear }
    }
}

impl<H, S, C> ErrorReporter<H> for CallbackReporter<S, C>
where
    S: FnMut(&H, &str),
    C: FnMut(&H),
{
    fn set_error(&mut self, field: &H, message: &str) {
        (self.on_set)(field, message)
    }

    fn clear_error(&mut self, field: &H) {
        (self.on_clear)(field)
    }
}

/// How an input with an error is decorated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    /// Class added to the input
    pub input_class: String,
    /// Text of the message element next to the input
    pub message: String,
}

/// The default presentation: an error class on the input and a message
/// element right after it.
///
/// Setting an error also arms a change listener on the field (one per
/// field); the next [`notify_change`](ErrorDisplay::notify_change) for that
/// field clears the error, the way typing into an input removes its message.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<H = FieldId> {
    config: DisplayConfig,
    decorations: HashMap<H, Decoration>,
    listeners: HashSet<H>,
}

impl<H: Eq + Hash + Clone> Default for ErrorDisplay<H> {
    fn default() -> Self {
        Self::new(DisplayConfig::default())
    }
}

impl<H: Eq + Hash + Clone> ErrorDisplay<H> {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            decorations: HashMap::new(),
            listeners: HashSet::new(),
        }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Class for inputs that get an error from now on
    pub fn set_input_error_class(&mut self, class: impl Into<String>) {
        self.config.input_error_class = class.into();
    }

    pub fn set_message_tag(&mut self, tag: impl Into<String>) {
        self.config.message_tag = tag.into();
    }

    pub fn set_message_class(&mut self, class: impl Into<String>) {
        self.config.message_class = class.into();
    }

    pub fn decoration(&self, field: &H) -> Option<&Decoration> {
        self.decorations.get(field)
    }

    pub fn has_error(&self, field: &H) -> bool {
        self.decorations.contains_key(field)
    }

    pub fn message(&self, field: &H) -> Option<&str> {
        self.decorations.get(field).map(|decoration| decoration.message.as_str())
    }

    /// Number of fields currently showing an error
    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    /// The field's value changed. Fires its listener, if armed, which clears
    /// the error. Returns whether an error was cleared.
    pub fn notify_change(&mut self, field: &H) -> bool {
        if !self.listeners.contains(field) {
            return false;
        }
        self.clear_error(field);
        true
    }

    /// Markup of the message element, e.g.
    /// `<span class="valinator-error-message">Invalid email</span>`.
    /// The message and class are HTML-escaped.
    pub fn render_message(&self, field: &H) -> Option<String> {
        let decoration = self.decorations.get(field)?;
        let tag = &self.config.message_tag;

        let mut markup = String::new();
        write!(markup, "<{} class=\"", tag).ok()?;
        Escaper::new(&mut markup)
            .write_str(&self.config.message_class)
            .ok()?;
        markup.push_str("\">");
        Escaper::new(&mut markup)
            .write_str(&decoration.message)
            .ok()?;
        write!(markup, "</{}>", tag).ok()?;
        Some(markup)
    }
}

impl<H: Eq + Hash + Clone> ErrorReporter<H> for ErrorDisplay<H> {
    fn set_error(&mut self, field: &H, message: &str) {
        self.decorations.insert(
            field.clone(),
            Decoration {
                input_class: self.config.input_error_class.clone(),
                message: message.to_string(),
            },
        );
        self.listeners.insert(field.clone());
    }

    fn clear_error(&mut self, field: &H) {
        self.decorations.remove(field);
        self.listeners.remove(field);
    }
}
