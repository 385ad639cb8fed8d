#![allow(clippy::unwrap_used, clippy::expect_used)]

/// Scenario 2: Derive Launch Configuration
///
/// Templating, sugar app types and gated placements on the general path.
mod common;

use common::{option, params, record, record_with_extensions, HOST};
use ltikit_core::catalog::{AppType, ExtensionKind, PrivacyLevel};
use ltikit_core::derive::derive_launch_config;
use ltikit_core::model::ExtensionSettings;
use std::collections::BTreeMap;

#[test]
fn test_scenario_02_template_runtime_params_and_escape() {
    // GIVEN a launch URL template using a plain and an escaped token
    let mut tool = record("t", "Tool");
    tool.launch_url = Some("{{a}}-{{escape:b}}".to_string());

    // WHEN deriving with both params supplied
    let config = derive_launch_config(&tool, &params(&[("a", "x"), ("b", "y z")]), HOST);

    // THEN both are substituted and the escaped one is URL-encoded
    assert_eq!(config.launch_url.as_deref(), Some("x-y%20z"));
}

#[test]
fn test_scenario_02_template_falls_back_to_option_default() {
    // GIVEN an option default for `a` and nothing for `b`
    let mut tool = record("t", "Tool");
    tool.launch_url = Some("{{a}}-{{escape:b}}".to_string());
    tool.config_options = vec![option("a", "fallback")];

    // WHEN deriving without params
    let config = derive_launch_config(&tool, &BTreeMap::new(), HOST);

    // THEN the default fills `a` and `b` resolves to empty
    assert_eq!(config.launch_url.as_deref(), Some("fallback-"));
}

#[test]
fn test_scenario_02_open_launch_declared_placement_only() {
    // GIVEN an open_launch tool declaring only resource_selection
    let mut tool = record_with_extensions("khan", &[ExtensionKind::ResourceSelection]);
    tool.app_type = Some(AppType::OpenLaunch);

    // WHEN deriving
    let config = derive_launch_config(&tool, &BTreeMap::new(), HOST);

    // THEN the placement points at the synthesized redirect
    let redirect = format!("{}/tool_redirect?id=khan", HOST);
    let selection = config.resource_selection.as_ref().unwrap();
    assert_eq!(selection.launch_url, redirect);
    assert_eq!(config.launch_url.as_deref(), Some(redirect.as_str()));

    // AND the undeclared editor button is absent
    assert!(config.editor_button.is_none());

    // AND privacy is forced to anonymous with dialog defaults
    assert_eq!(config.privacy_level, PrivacyLevel::Anonymous);
    assert_eq!(selection.width, Some(690));
    assert_eq!(selection.height, Some(530));
}

#[test]
fn test_scenario_02_data_tool_no_launch() {
    // GIVEN a data tool with no_launch and no declared extensions
    let mut tool = record("data1", "Data Tool");
    tool.app_type = Some(AppType::Data);
    tool.no_launch = true;

    // WHEN deriving
    let config = derive_launch_config(&tool, &BTreeMap::new(), HOST);

    // THEN the top-level launch URL is null
    assert_eq!(config.launch_url, None);
    let json = serde_json::to_value(&config).unwrap();
    assert!(json.get("launch_url").unwrap().is_null());

    // AND both dialog placements are still emitted with the redirect URL
    let redirect = format!("{}/tool_redirect?id=data1", HOST);
    assert_eq!(config.editor_button.as_ref().unwrap().launch_url, redirect);
    assert_eq!(config.resource_selection.as_ref().unwrap().launch_url, redirect);
}

#[test]
fn test_scenario_02_course_nav_without_option_is_opt_in_by_default() {
    // GIVEN course_nav declared and no matching config option
    let mut tool = record_with_extensions("t", &[ExtensionKind::CourseNav]);
    tool.launch_url = Some("/launch".to_string());

    // WHEN deriving without a runtime override
    let config = derive_launch_config(&tool, &BTreeMap::new(), HOST);

    // THEN the course navigation block is emitted with a host-absolute URL
    let nav = config.course_navigation.as_ref().unwrap();
    assert_eq!(nav.launch_url, format!("{}/launch", HOST));
    assert_eq!(nav.link_text, "Tool");
}

#[test]
fn test_scenario_02_declared_option_gates_placement() {
    // GIVEN user_nav declared AND an option of the same name
    let mut tool = record_with_extensions("t", &[ExtensionKind::UserNav]);
    tool.launch_url = Some("https://tool.example".to_string());
    tool.config_options = vec![option("user_nav", "")];

    // WHEN deriving without opting in
    let off = derive_launch_config(&tool, &BTreeMap::new(), HOST);
    // THEN the placement is withheld
    assert!(off.user_navigation.is_none());

    // WHEN opting in with anything but "1"
    let still_off = derive_launch_config(&tool, &params(&[("user_nav", "true")]), HOST);
    assert!(still_off.user_navigation.is_none());

    // WHEN opting in with the literal "1"
    let on = derive_launch_config(&tool, &params(&[("user_nav", "1")]), HOST);
    assert!(on.user_navigation.is_some());
}

#[test]
fn test_scenario_02_undeclared_extension_never_emitted() {
    let tool = record("t", "Tool");
    let config = derive_launch_config(&tool, &params(&[("course_nav", "1")]), HOST);
    assert_eq!(config.placements().count(), 0);
}

#[test]
fn test_scenario_02_link_text_resolution_order() {
    // GIVEN a declared link-text option and a raw per-extension link text
    let mut tool = record_with_extensions("t", &[ExtensionKind::CourseNav, ExtensionKind::AccountNav]);
    tool.config_options = vec![option("course_nav_link_text", "Option Text")];
    tool.extension_settings.insert(
        ExtensionKind::AccountNav,
        ExtensionSettings {
            link_text: Some("Raw {{who}}".to_string()),
            ..ExtensionSettings::default()
        },
    );

    // WHEN deriving with a runtime override for course_nav
    let p = params(&[("course_nav_link_text", "Runtime"), ("who", "Admin")]);
    let config = derive_launch_config(&tool, &p, HOST);

    // THEN the runtime value wins where an option is declared
    assert_eq!(config.course_navigation.as_ref().unwrap().link_text, "Runtime");
    // AND the raw field is substituted where no option exists
    assert_eq!(config.account_navigation.as_ref().unwrap().link_text, "Raw Admin");

    // WHEN deriving without the override
    let config = derive_launch_config(&tool, &BTreeMap::new(), HOST);
    // THEN the declared option default is used
    assert_eq!(config.course_navigation.as_ref().unwrap().link_text, "Option Text");
}

#[test]
fn test_scenario_02_dialog_placements_inherit_icon_and_size() {
    // GIVEN an editor button with its own width and record-level height
    let mut tool = record_with_extensions("t", &[ExtensionKind::EditorButton, ExtensionKind::HomeworkSubmission]);
    tool.width = Some(400);
    tool.height = Some(300);
    tool.extension_settings.insert(
        ExtensionKind::EditorButton,
        ExtensionSettings {
            width: Some(800),
            icon_url: Some("https://tool.example/button.png".to_string()),
            ..ExtensionSettings::default()
        },
    );

    // WHEN deriving
    let config = derive_launch_config(&tool, &BTreeMap::new(), HOST);

    // THEN per-placement values override record values
    let button = config.editor_button.as_ref().unwrap();
    assert_eq!(button.width, Some(800));
    assert_eq!(button.height, Some(300));
    assert_eq!(button.icon_url.as_deref(), Some("https://tool.example/button.png"));

    // AND the homework placement falls back to the resolved top-level icon
    let homework = config.homework_submission.as_ref().unwrap();
    assert_eq!(
        homework.icon_url.as_deref(),
        Some(format!("{}/tools/t/icon.png", HOST).as_str())
    );
    assert_eq!(homework.width, Some(400));
}

#[test]
fn test_scenario_02_general_path_substitutes_domain_and_custom_fields() {
    // GIVEN templated domain and custom fields
    let mut tool = record("t", "{{school}} Tool");
    tool.domain = Some("{{school}}.example".to_string());
    tool.custom_fields = Some(BTreeMap::from([(
        "course".to_string(),
        "{{escape:course}}".to_string(),
    )]));
    tool.icon_url = Some("https://tool.example/icon.png".to_string());

    // WHEN deriving
    let p = params(&[("school", "state"), ("course", "Math 1")]);
    let config = derive_launch_config(&tool, &p, HOST);

    // THEN every templated value resolves
    assert_eq!(config.name, "state Tool");
    assert_eq!(config.domain.as_deref(), Some("state.example"));
    assert_eq!(
        config.custom_fields.as_ref().unwrap().get("course").map(String::as_str),
        Some("Math%201")
    );
    // AND an explicit icon is kept
    assert_eq!(config.icon_url.as_deref(), Some("https://tool.example/icon.png"));
    // AND no launch URL is invented
    assert_eq!(config.launch_url, None);
}

#[test]
fn test_scenario_02_course_nav_visibility_and_default() {
    let mut tool = record_with_extensions("t", &[ExtensionKind::CourseNav]);
    tool.config_options = vec![option("course_nav_visibility", "admins")];
    tool.extension_settings.insert(
        ExtensionKind::CourseNav,
        ExtensionSettings {
            default: Some("disabled".to_string()),
            ..ExtensionSettings::default()
        },
    );

    let config = derive_launch_config(&tool, &BTreeMap::new(), HOST);

    let nav = config.course_navigation.as_ref().unwrap();
    assert_eq!(nav.visibility.as_deref(), Some("admins"));
    assert_eq!(nav.default.as_deref(), Some("disabled"));
}

#[test]
fn test_scenario_02_derivation_is_deterministic() {
    let mut tool = record_with_extensions("t", &ExtensionKind::ALL);
    tool.launch_url = Some("/go?x={{x}}".to_string());
    let p = params(&[("x", "1")]);

    let first = derive_launch_config(&tool, &p, HOST);
    let second = derive_launch_config(&tool, &p, HOST);

    assert_eq!(first, second);
    assert_eq!(first.placements().count(), 6);
}
