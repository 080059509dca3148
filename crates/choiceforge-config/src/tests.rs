//! Tests for session configuration.

use super::*;
use choiceforge_core::CellIdentifier;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        title = "choose an option"
        requires_selection = false
        selected = ["OB"]

        [rule]
        type = "all"
        min = 1
        max = 3

        [[sections]]
        title = "Options"
        options = [
            { key = "OA", title = "Option A" },
            { key = "OB", title = "Option B", detail = "Extras" },
        ]
    "#;

    let config = SessionConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.title.as_deref(), Some("choose an option"));
    assert!(!config.requires_selection);
    assert_eq!(config.rule.to_rule(), RuleSpec::all(1, Some(3)));
    assert_eq!(config.selected, vec!["OB".to_string()]);
    assert_eq!(config.sections[0].options[1].detail.as_deref(), Some("Extras"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        rule:
          type: sectioned
          section_min: 1
          section_max: 2
          total_min: 0
        sections:
          - title: Options
            options:
              - key: OA
                title: Option A
          - options:
              - key: CA
                title: Choice A
    "#;

    let config = SessionConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.rule.to_rule(), RuleSpec::sectioned(1, Some(2), 0, None));
    assert!(config.requires_selection);
    assert_eq!(config.sections.len(), 2);
    assert_eq!(config.sections[1].title, None);
}

#[test]
fn test_defaults() {
    let config = SessionConfig::from_toml_str("").unwrap();
    assert_eq!(config.rule, RuleConfig::default());
    assert_eq!(config.rule.to_rule(), RuleSpec::single());
    assert!(config.requires_selection);
    assert!(config.sections.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_presets() {
    for (name, rule) in [
        ("single", RuleSpec::single()),
        ("multiple", RuleSpec::multiple()),
        ("single_sectioned", RuleSpec::single_sectioned()),
        ("multiple_sectioned", RuleSpec::multiple_sectioned()),
    ] {
        let toml = format!("[rule]\ntype = \"preset\"\nname = \"{name}\"\n");
        let config = SessionConfig::from_toml_str(&toml).unwrap();
        assert_eq!(config.rule.to_rule(), rule);
    }
}

#[test]
fn test_unknown_rule_type_is_rejected() {
    let err = SessionConfig::from_toml_str("[rule]\ntype = \"some\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = SessionConfig::new()
        .with_title("pick one")
        .with_rule(RuleConfig::Preset {
            name: RulePreset::Multiple,
        })
        .with_section(
            SectionConfig::titled("Options")
                .with_option(OptionConfig::new("OA", "Option A"))
                .with_option(OptionConfig::new("OB", "Option B").with_detail("Extras")),
        )
        .with_section(SectionConfig::new().with_option(OptionConfig::new("CA", "Choice A")))
        .with_selected(["OA"]);

    assert_eq!(config.title.as_deref(), Some("pick one"));
    assert_eq!(config.sections.len(), 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_to_layout() {
    let config = SessionConfig::new()
        .with_section(
            SectionConfig::titled("Options")
                .with_option(OptionConfig::new("OA", "Option A"))
                .with_option(OptionConfig::new("OB", "Option B").with_detail("Extras")),
        )
        .with_section(SectionConfig::new().with_option(OptionConfig::new("CA", "Choice A")));

    let layout = config.to_layout();
    let ob = "OB".to_string();
    let ca = "CA".to_string();

    assert_eq!(layout.section_count(), 2);
    assert_eq!(layout.section_of(&ca), Some(1));
    assert_eq!(layout.title_for(&ob), Some("Option B"));
    assert_eq!(layout.identifier_for(&ob), CellIdentifier::Detail);
    assert_eq!(layout.section_label(0), "Options");
    assert_eq!(layout.section_label(1), "Section 1");
}

#[test]
fn test_validate_rejects_duplicate_keys() {
    let config = SessionConfig::new()
        .with_section(SectionConfig::new().with_option(OptionConfig::new("OA", "Option A")))
        .with_section(SectionConfig::new().with_option(OptionConfig::new("OA", "Again")));

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_unknown_selection() {
    let config = SessionConfig::new()
        .with_section(SectionConfig::new().with_option(OptionConfig::new("OA", "Option A")))
        .with_selected(["ZZ"]);

    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_impossible_rule() {
    let config = SessionConfig::new().with_rule(RuleConfig::All {
        min: 2,
        max: Some(1),
    });

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err: ChoiceForgeError = err.into();
    assert!(matches!(err, ChoiceForgeError::Config(_)));
}

#[test]
fn test_missing_file() {
    let err = SessionConfig::load("does/not/exist.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_rule_spec_tables_parse_as_rule_config() {
    for rule in [
        RuleSpec::all(1, Some(3)),
        RuleSpec::all(2, None),
        RuleSpec::sectioned(1, Some(2), 2, Some(4)),
        RuleSpec::single_sectioned(),
    ] {
        let table = toml::to_string(&rule).unwrap();
        let config: RuleConfig = toml::from_str(&table).unwrap();
        assert_eq!(config, RuleConfig::from(rule));
        assert_eq!(config.to_rule(), rule);

        let back: RuleSpec = toml::from_str(&toml::to_string(&config).unwrap()).unwrap();
        assert_eq!(back, rule);
    }
}

#[test]
fn test_with_rule_from_spec() {
    let config = SessionConfig::new().with_rule(RuleSpec::all(0, Some(2)).into());
    assert_eq!(config.rule.to_rule(), RuleSpec::all(0, Some(2)));
}
