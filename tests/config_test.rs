mod common;

use common::TestEnvironment;
use subscription_section::config::{AppConfig, ConfigError};
use subscription_section::i18n::Language;
use subscription_section::payment::{PlanId, SubscriptionStatus};
use subscription_section::ui::format::Locale;

#[test]
fn test_missing_file_gives_defaults() {
    let env = TestEnvironment::new().unwrap();

    let config = AppConfig::load(&env.config_path).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_full_config() {
    let env = TestEnvironment::new().unwrap();
    let path = env
        .write_config(
            r#"
[display]
language = "en"
locale = "en-US"

[demo]
status = "expired"
expiry_date = "2026-10-20"
current_plan = "1-year"
"#,
        )
        .unwrap();

    let config = AppConfig::load(path).unwrap();
    assert_eq!(config.display.language, Language::English);
    assert_eq!(config.display.locale, Locale::EnUs);

    let props = config.demo.props();
    assert_eq!(props.status, SubscriptionStatus::Expired);
    assert_eq!(props.expiry_date, "2026-10-20");
    assert_eq!(props.known_plan(), Some(PlanId::OneYear));
}

#[test]
fn test_malformed_file_is_an_error() {
    let env = TestEnvironment::new().unwrap();
    let path = env.write_config("[display\nlanguage = ").unwrap();

    let err = AppConfig::load(path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_unreadable_path_is_an_error() {
    let env = TestEnvironment::new().unwrap();
    // A directory exists but cannot be read as a file
    let err = AppConfig::load(env.temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
