use chrono::NaiveDate;
use config_engine::{ConfigError, ConfigLoader, GenerationConfig, ENV_PREFIX};
use error_common::{codes, SynthError};
use figment::Jail;
use logger_redacted::LogFormat;
use serde::Serialize;

#[test]
fn test_defaults_without_sources() {
    Jail::expect_with(|_jail| {
        let config = ConfigLoader::new().load().map_err(|e| e.to_string())?;
        assert_eq!(config, GenerationConfig::default());
        assert_eq!(config.seed, 42);
        assert_eq!(config.claims_per_patient, 3);
        Ok(())
    });
}

#[test]
fn test_toml_file_then_env() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "claimgen.toml",
            r#"
                seed = 7
                patients = 25
                providers = 4
                reference_date = "2024-06-30"

                [logging]
                format = "json"
            "#,
        )?;
        jail.set_env("CLAIMGEN_PROVIDERS", "12");
        jail.set_env("CLAIMGEN_LOGGING__LEVEL", "debug");

        let config = ConfigLoader::new()
            .with_file("claimgen.toml")
            .map_err(|e| e.to_string())?
            .with_env(ENV_PREFIX)
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.seed, 7);
        assert_eq!(config.patients, 25);
        assert_eq!(config.providers, 12);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "debug");
        Ok(())
    });
}

#[test]
fn test_yaml_file() {
    Jail::expect_with(|jail| {
        jail.create_file("claimgen.yaml", "patients: 3\nnotes_per_claim: 2\n")?;

        let config = ConfigLoader::new()
            .with_file("claimgen.yaml")
            .map_err(|e| e.to_string())?
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.patients, 3);
        assert_eq!(config.notes_per_claim, 2);
        Ok(())
    });
}

#[derive(Serialize)]
struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    patients: Option<usize>,
}

#[test]
fn test_overrides_win_and_absent_fields_keep_earlier_values() {
    Jail::expect_with(|jail| {
        jail.set_env("CLAIMGEN_PATIENTS", "50");

        let config = ConfigLoader::new()
            .with_env(ENV_PREFIX)
            .with_overrides(&Overrides {
                seed: Some(99),
                patients: None,
            })
            .load()
            .map_err(|e| e.to_string())?;

        assert_eq!(config.seed, 99);
        assert_eq!(config.patients, 50);
        Ok(())
    });
}

#[test]
fn test_negative_count_is_a_configuration_error() {
    Jail::expect_with(|jail| {
        jail.create_file("claimgen.toml", "patients = -5\n")?;

        let result = ConfigLoader::new()
            .with_file("claimgen.toml")
            .map_err(|e| e.to_string())?
            .load();

        let err = result.expect_err("negative count must not load");
        assert!(matches!(err, ConfigError::ParseError(_)));

        let synth: SynthError = err.into();
        assert_eq!(synth.code(), codes::configuration::SOURCE_UNREADABLE);
        Ok(())
    });
}

#[test]
fn test_zero_patients_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("CLAIMGEN_PATIENTS", "0");

        let err = ConfigLoader::new()
            .with_env(ENV_PREFIX)
            .load()
            .expect_err("zero patients must not load");
        assert!(matches!(err, ConfigError::ValidationError(_)));

        let synth: SynthError = err.into();
        assert_eq!(synth.code(), codes::configuration::DEGENERATE_PARAMETER);
        Ok(())
    });
}

#[test]
fn test_missing_file_is_reported() {
    Jail::expect_with(|_jail| {
        let err = ConfigLoader::new()
            .with_file("does-not-exist.toml")
            .expect_err("missing file");
        assert!(matches!(err, ConfigError::FileNotFound(_)));
        Ok(())
    });
}
