use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_level_strings_when_from_str_then_matching_filters() {
    let cases = [
        ("off", LevelFilter::Off),
        ("error", LevelFilter::Error),
        ("warn", LevelFilter::Warn),
        ("info", LevelFilter::Info),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ];

    for (input, expected) in cases {
        assert_eq!(LogLevel::from_str(input).unwrap().0, expected);
    }
}

#[test]
fn given_mixed_case_when_from_str_then_case_insensitive() {
    assert_eq!(LogLevel::from_str("DEBUG").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("Warn").unwrap().0, LevelFilter::Warn);
}

#[test]
fn given_unknown_level_when_from_str_then_err() {
    assert!(LogLevel::from_str("verbose").is_err());
}

#[test]
fn given_unknown_level_in_toml_when_deserialize_then_falls_back_to_default() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        level: LogLevel,
    }

    let wrapper: Wrapper = toml::from_str(r#"level = "verbose""#).unwrap();

    assert_eq!(wrapper.level, LogLevel::default());
}
