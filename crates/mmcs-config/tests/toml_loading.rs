//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed file and env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use mmcs_config::MmcsConfig;
use mmcs_core::enums::WeekTypeOption;

#[test]
fn loads_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_week_type_option = "upper"

[preferences]
path = "./prefs.toml"

[report]
subject = "Schedule error"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(MmcsConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = MmcsConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.general.default_week_type_option, WeekTypeOption::Upper);
        assert_eq!(config.preferences.path, "./prefs.toml");
        assert_eq!(config.report.subject, "Schedule error");
        Ok(())
    });
}

#[test]
fn missing_sections_keep_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_week_type_option = "lower"
"#,
        )?;

        let config: MmcsConfig = Figment::from(Serialized::defaults(MmcsConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_week_type_option, WeekTypeOption::Lower);
        assert!(config.preferences.path.is_empty());
        assert_eq!(config.report.subject, "Ошибка в расписании");
        Ok(())
    });
}

#[test]
fn unknown_option_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_week_type_option = "sideways"
"#,
        )?;

        let result: Result<MmcsConfig, _> =
            Figment::from(Serialized::defaults(MmcsConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_figment() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mmcs")?;
        jail.create_file(
            ".mmcs/config.toml",
            r#"
[report]
subject = "from project"
"#,
        )?;

        let config = MmcsConfig::load().expect("config loads");
        assert_eq!(config.report.subject, "from project");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_week_type_option = "upper"
"#,
        )?;
        jail.set_env("MMCS_GENERAL__DEFAULT_WEEK_TYPE_OPTION", "full");

        let config: MmcsConfig = Figment::from(Serialized::defaults(MmcsConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MMCS_").split("__"))
            .extract()?;

        assert_eq!(config.general.default_week_type_option, WeekTypeOption::Full);
        Ok(())
    });
}
