// Integration tests for the validation engine
// Run with: cargo test -p valinator --test validate_integration

use pretty_assertions::assert_eq;
use rstest::rstest;
use valinator::{
    schema, Check, Config, ErrorDisplay, FieldError, FieldId, FieldRef, Form, RuleDefinition,
    RuleMap, UnknownCheckPolicy, Validator,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn run(form: &mut Form, definitions: &[RuleDefinition<FieldId>]) -> Vec<(String, String)> {
    let validator = Validator::new();
    validator
        .validate(form, &mut (), definitions)
        .into_iter()
        .map(|error| (error.field.to_string(), error.message))
        .collect()
}

fn pair(field: &str, message: &str) -> (String, String) {
    (field.to_string(), message.to_string())
}

#[test]
fn test_signup_form_end_to_end() {
    init_tracing();

    let mut form = Form::new()
        .with_field("name", "")
        .with_field("pwd", "x")
        .with_field("pwd2", "y");

    let definitions = [
        RuleDefinition::new("name", RuleMap::new().rule("required", "fill in name")),
        RuleDefinition::new(
            "pwd",
            RuleMap::new()
                .rule("required", "fill in pwd")
                .rule("matchWith", "pwd2|must match"),
        ),
    ];

    let validator = Validator::new();
    let outcome = validator.validate(&mut form, &mut (), &definitions);

    assert_eq!(
        outcome.into_errors(),
        vec![
            FieldError::new(FieldRef::Name("name".to_string()), "fill in name"),
            FieldError::new(FieldRef::Name("pwd".to_string()), "must match"),
        ]
    );
}

#[rstest]
#[case("", true)]
#[case("   ", true)]
#[case("\t\n", true)]
#[case("a", false)]
#[case("  Ann  ", false)]
fn test_required_fails_only_on_blank(#[case] value: &str, #[case] fails: bool) {
    let mut form = Form::new().with_field("name", value);
    let definitions = [RuleDefinition::new(
        "name",
        RuleMap::new().rule("required", "Required"),
    )];

    assert_eq!(!run(&mut form, &definitions).is_empty(), fails);
}

#[rstest]
#[case("abcd", "4", true, true)]
#[case("abc", "4", false, true)]
#[case("abcde", "4", true, false)]
#[case("  ab  ", "2", true, true)]
#[case("héllo", "5", true, true)]
fn test_length_bounds_count_trimmed_chars(
    #[case] value: &str,
    #[case] bound: &str,
    #[case] passes_min: bool,
    #[case] passes_max: bool,
) {
    let mut form = Form::new()
        .with_field("min", value)
        .with_field("max", value);
    let definitions = [
        RuleDefinition::new(
            "min",
            RuleMap::new().rule("minLength", format!("{}|too short", bound)),
        ),
        RuleDefinition::new(
            "max",
            RuleMap::new().rule("maxLength", format!("{}|too long", bound)),
        ),
    ];

    let errors = run(&mut form, &definitions);
    assert_eq!(errors.contains(&pair("min", "too short")), !passes_min);
    assert_eq!(errors.contains(&pair("max", "too long")), !passes_max);
}

#[rstest]
#[case("12", true)]
#[case("-3.5", true)]
#[case("12abc", false)]
#[case("abc", false)]
fn test_numeric_field(#[case] value: &str, #[case] passes: bool) {
    let mut form = Form::new().with_field("age", value);
    let definitions = [RuleDefinition::new(
        "age",
        RuleMap::new().rule("numeric", "Not a number"),
    )];

    assert_eq!(run(&mut form, &definitions).is_empty(), passes);
}

#[test]
fn test_empty_value_is_not_numeric() {
    let mut form = Form::new().with_field("age", "");
    let definitions = [RuleDefinition::new(
        "age",
        RuleMap::new().rule("numeric", "Not a number"),
    )];

    assert_eq!(run(&mut form, &definitions), vec![pair("age", "Not a number")]);
}

#[test]
fn test_match_with_compares_trimmed_values() {
    let mut form = Form::new()
        .with_field("email", " ann@example.com")
        .with_field("email_check", "ann@example.com   ");
    let definitions = [RuleDefinition::new(
        "email",
        RuleMap::new().rule("matchWith", "email_check|Emails differ"),
    )];
    assert!(run(&mut form, &definitions).is_empty());

    let id = form.id("email_check").unwrap();
    form.input(id, " bob@example.com ");
    assert_eq!(run(&mut form, &definitions), vec![pair("email", "Emails differ")]);
}

#[test]
fn test_match_with_missing_other_field_fails() {
    let mut form = Form::new().with_field("pwd", "secret");
    let definitions = [RuleDefinition::new(
        "pwd",
        RuleMap::new().rule("matchWith", "pwd_check|Passwords differ"),
    )];

    assert_eq!(run(&mut form, &definitions), vec![pair("pwd", "Passwords differ")]);
}

#[rstest]
#[case("", vec![])]
#[case("   ", vec![])]
#[case("ab", vec![pair("nick", "too short")])]
#[case("abcdef", vec![])]
fn test_nullable_short_circuit(#[case] value: &str, #[case] expected: Vec<(String, String)>) {
    let mut form = Form::new().with_field("nick", value);
    let definitions = [RuleDefinition::new(
        "nick",
        RuleMap::new().nullable().rule("minLength", "5|too short"),
    )];

    assert_eq!(run(&mut form, &definitions), expected);
}

#[test]
fn test_only_first_failure_is_reported() {
    let mut form = Form::new().with_field("pwd", "");
    let definitions = [RuleDefinition::new(
        "pwd",
        RuleMap::new()
            .rule("required", "Please fill in a password")
            .rule("minLength", "8|Too short"),
    )];

    assert_eq!(
        run(&mut form, &definitions),
        vec![pair("pwd", "Please fill in a password")]
    );
}

#[rstest]
#[case(UnknownCheckPolicy::Ignore)]
#[case(UnknownCheckPolicy::Warn)]
fn test_unknown_check_never_fails(#[case] policy: UnknownCheckPolicy) {
    init_tracing();

    let config = Config::from_toml_str(&format!(
        "[engine]\nunknown_checks = \"{}\"\n",
        match policy {
            UnknownCheckPolicy::Ignore => "ignore",
            UnknownCheckPolicy::Warn => "warn",
        }
    ))
    .unwrap();
    assert_eq!(config.engine.unknown_checks, policy);

    let validator = Validator::with_config(config.engine);
    let mut form = Form::new().with_field("name", "");
    let definitions = [RuleDefinition::new(
        "name",
        RuleMap::new().rule("requird", "typo").rule("isbn", "ISBN"),
    )];

    assert!(validator.validate(&mut form, &mut (), &definitions).is_valid());
}

#[test]
fn test_overwriting_a_default_check_keeps_the_others() {
    let mut validator = Validator::new();
    let replaced = validator.register("required", |value: &str, _option: Option<&str>| {
        value == "yes"
    });
    assert!(replaced.is_some());

    let mut form = Form::new()
        .with_field("terms", "no")
        .with_field("email", "not-an-email")
        .with_field("age", "17");
    let definitions = [
        RuleDefinition::new("terms", RuleMap::new().rule("required", "Accept the terms")),
        RuleDefinition::new("email", RuleMap::new().rule("email", "Invalid email")),
        RuleDefinition::new(
            "age",
            RuleMap::new().rule("minNumber", "18|You must be an adult"),
        ),
    ];

    let outcome = validator.validate(&mut form, &mut (), &definitions);
    assert_eq!(outcome.message_for("terms"), Some("Accept the terms"));
    assert_eq!(outcome.message_for("email"), Some("Invalid email"));
    assert_eq!(outcome.message_for("age"), Some("You must be an adult"));
    assert_eq!(validator.registry().len(), 14);
}

#[test]
fn test_register_all_adds_cross_field_checks() {
    let mut validator = Validator::new();
    validator.register_all([
        (
            "differentFrom",
            Check::cross_field(|value, option, fields| {
                option
                    .and_then(|name| fields.field_value(name))
                    .map_or(true, |other| other != value)
            }),
        ),
        ("even", Check::new(|value, _| value.len() % 2 == 0)),
    ]);

    let mut form = Form::new()
        .with_field("user", "ann")
        .with_field("pwd", "ann");
    let definitions = [RuleDefinition::new(
        "pwd",
        RuleMap::new()
            .rule("differentFrom", "user|Password cannot be your user name")
            .rule("even", "odd length"),
    )];

    let outcome = validator.validate(&mut form, &mut (), &definitions);
    assert_eq!(
        outcome.message_for("pwd"),
        Some("Password cannot be your user name")
    );
}

#[test]
fn test_error_display_follows_validation_and_edits() {
    let mut form = Form::new()
        .with_field("email", "nope")
        .with_field("phone", "+31 (0)20 123 4567");
    let definitions = [
        RuleDefinition::new("email", RuleMap::new().rule("email", "Invalid email")),
        RuleDefinition::new("phone", RuleMap::new().rule("phone", "Invalid number")),
    ];

    let validator = Validator::new();
    let mut display = ErrorDisplay::default();
    let outcome = validator.validate(&mut form, &mut display, &definitions);
    assert_eq!(outcome.len(), 1);

    let email = form.id("email").unwrap();
    let phone = form.id("phone").unwrap();
    assert_eq!(display.message(&email), Some("Invalid email"));
    assert!(!display.has_error(&phone));

    // Typing into the field removes its message
    if form.input(email, "ann@example.com") {
        display.notify_change(&email);
    }
    assert!(display.is_empty());

    let outcome = validator.validate(&mut form, &mut display, &definitions);
    assert!(outcome.is_valid());
}

#[test]
fn test_definitions_from_json() {
    let definitions = schema::from_json::<FieldId>(
        r#"[
            { "target": "first_name", "rules": {
                "required": "Please fill in your first name",
                "personName": "Please use letters only"
            } },
            { "target": ["phone", "mobile"], "rules": {
                "nullable": true,
                "phone": "Invalid number"
            } },
            { "element": "color", "rules": { "hexColor": "Pick a color" } }
        ]"#,
    )
    .unwrap();

    let mut form = Form::new()
        .with_field("first_name", "Zoë_2!")
        .with_field("phone", "")
        .with_field("mobile", "abc")
        .with_field("color", "#A0f");

    assert_eq!(
        run(&mut form, &definitions),
        vec![
            pair("first_name", "Please use letters only"),
            pair("mobile", "Invalid number"),
        ]
    );
}

#[test]
fn test_definition_without_target_does_not_hide_others() {
    let definitions = schema::from_json::<FieldId>(
        r#"[
            { "target": "name", "rules": { "required": "fill in name" } },
            { "target": [], "rules": { "required": "x" } },
            { "target": "", "rules": { "required": "y" } }
        ]"#,
    )
    .unwrap();

    let mut form = Form::new().with_field("name", "").with_field("", "");
    assert_eq!(run(&mut form, &definitions), vec![pair("name", "fill in name")]);
}

#[rstest]
#[case("1", "", vec![])]
#[case("1", "ab", vec![pair("nick", "too short")])]
#[case("0", "", vec![pair("nick", "too short")])]
fn test_numeric_nullable_flag_in_documents(
    #[case] flag: &str,
    #[case] value: &str,
    #[case] expected: Vec<(String, String)>,
) {
    let definitions = schema::from_json::<FieldId>(&format!(
        r#"{{ "target": "nick", "rules": {{ "nullable": {}, "minLength": "5|too short" }} }}"#,
        flag
    ))
    .unwrap();

    let mut form = Form::new().with_field("nick", value);
    assert_eq!(run(&mut form, &definitions), expected);
}
