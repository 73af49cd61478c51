//! Valinator WASM
//!
//! WebAssembly bindings for valinator.
//! Validates form values in the browser with the same checks and rules as the
//! Rust side.

use indexmap::IndexMap;
use serde::Serialize;
use valinator::schema::{self, DefinitionSchema, DefinitionsSchema};
use valinator::{CheckRegistry, Field, FieldId, Form, ValidationOutcome, Validator};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of validating a form, returned to JavaScript
#[derive(Serialize, Debug)]
pub struct FormReport {
    /// `[{ field, message }]`, first failure per field
    pub errors: ValidationOutcome<FieldId>,
    /// Field values after trimming, first field per name
    pub values: IndexMap<String, String>,
}

/// Validate fields against rule definitions with the default checks.
pub fn validate_fields(fields: Vec<Field>, definitions: Vec<DefinitionSchema>) -> FormReport {
    let definitions = schema::from_schemas::<FieldId>(definitions);
    let mut form = Form::from(fields);

    let errors = Validator::new().validate(&mut form, &mut (), &definitions);

    let mut values = IndexMap::new();
    for field in form.fields() {
        values
            .entry(field.name.clone())
            .or_insert_with(|| field.value.clone());
    }

    FormReport { errors, values }
}

/// Run one default check. `None` when no check has that name.
///
/// There are no other fields here, so `matchWith` always fails.
pub fn check(name: &str, value: &str, option: Option<&str>) -> Option<bool> {
    CheckRegistry::with_defaults()
        .get(name)
        .map(|check| check.call(value, option, &()))
}

/// Validate a form
///
/// # Arguments
/// * `fields` - Array of `{ name, value, disabled? }`
/// * `definitions` - One rule definition or an array of them
///
/// # Returns
/// `{ errors: [{ field, message }], values: { name: trimmedValue } }`
///
/// # Example (JavaScript)
/// ```javascript
/// const report = validateForm(
///     [{ name: 'email', value: ' ann@example ' }],
///     [{ target: 'email', rules: { required: 'Required', email: 'Invalid email' } }]
/// );
/// // report.errors == [{ field: 'email', message: 'Invalid email' }]
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(fields: JsValue, definitions: JsValue) -> Result<JsValue, JsValue> {
    let fields: Vec<Field> = serde_wasm_bindgen::from_value(fields)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse fields: {}", e)))?;
    let definitions: DefinitionsSchema = serde_wasm_bindgen::from_value(definitions)
        .map_err(|e| {
            let message = format!("Failed to parse definitions: {}", e);
            web_sys::console::error_1(&JsValue::from_str(&message));
            JsValue::from_str(&message)
        })?;

    let report = validate_fields(fields, definitions.into_vec());

    // Plain objects instead of JS Maps
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(report.serialize(&serializer)?)
}

/// Run a single default check; `undefined` when the name is unknown
#[wasm_bindgen(js_name = runCheck)]
pub fn run_check(name: &str, value: &str, option: Option<String>) -> Option<bool> {
    check(name, value, option.as_deref())
}

/// Names of the default checks, sorted
#[wasm_bindgen(js_name = checkNames)]
pub fn check_names() -> Vec<String> {
    CheckRegistry::with_defaults()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect()
}
