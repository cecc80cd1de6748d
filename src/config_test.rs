use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json_str("{}").expect("defaults are valid");
    assert_eq!(config, SiteConfig::default());
    assert_eq!(config.typewriter.phrases.len(), 3);
    assert_eq!(config.typewriter.typing_ms, 80);
    assert_eq!(config.typewriter.erase_ms, 40);
    assert_eq!(config.typewriter.hold_ms, 2500);
    assert_eq!(config.typewriter.pause_ms, 500);
    assert_eq!(config.scroll.throttle_ms, 100);
    assert_eq!(config.theme_key, "theme");
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json_str(r#"{ "typewriter": { "phrases": ["Hi", "Yo"], "hold_ms": 50 } }"#)
        .expect("valid override");
    assert_eq!(config.typewriter.phrases, vec!["Hi".to_owned(), "Yo".to_owned()]);
    assert_eq!(config.typewriter.hold_ms, 50);
    assert_eq!(config.typewriter.typing_ms, 80);
}

#[test]
fn empty_phrase_list_is_rejected() {
    let err = SiteConfig::from_json_str(r#"{ "typewriter": { "phrases": [] } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NoPhrases));
}

#[test]
fn empty_phrase_is_rejected_with_index() {
    let config = TypewriterConfig { phrases: vec!["a".into(), String::new()], ..TypewriterConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyPhrase { index: 1 })));
}

#[test]
fn zero_delay_is_rejected_by_name() {
    let config = TypewriterConfig { erase_ms: 0, ..TypewriterConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::NonPositiveDelay { name: "erase_ms" })));

    let err = SiteConfig::from_json_str(r#"{ "scroll": { "throttle_ms": 0 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveDelay { name: "throttle_ms" }));
}

#[test]
fn malformed_json_is_reported() {
    let err = SiteConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson(_)));
}

#[test]
fn negative_delay_fails_to_deserialize() {
    let err = SiteConfig::from_json_str(r#"{ "typewriter": { "typing_ms": -5 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson(_)));
}
