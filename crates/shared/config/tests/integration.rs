pub mod fixtures;

#[cfg(test)]
mod validation {
    use super::fixtures::*;
    use serde_json::json;
    use tkernel_config::domain::{CompatibilityRecord, FeatureFlag, ValidationMode};
    use tkernel_config::{ConfigSchema, ConfigVersionPolicy};

    #[test]
    fn unknown_root_key_depends_on_mode() {
        let schema = ConfigSchema::new();

        let config = schema.validate(&legacy_tolerant(), KERNEL, "development").unwrap();
        assert_eq!(config.validation_mode(), ValidationMode::Tolerant);

        let mut strict = legacy_tolerant();
        strict["validation_mode"] = json!("strict");
        let err = schema.validate(&strict, KERNEL, "development").unwrap_err();
        assert!(err.is_structure_error(), "{err}");
        assert!(err.to_string().contains("legacy_sidebar"), "{err}");
    }

    #[test]
    fn tolerant_in_production_is_a_version_error() {
        let schema = ConfigSchema::new();

        for version in ["0.9", "1.0"] {
            let mut raw = legacy_tolerant();
            raw["config_version"] = json!(version);
            let err = schema.validate(&raw, KERNEL, "production").unwrap_err();
            assert!(err.is_version_error(), "{version}: {err}");
        }
    }

    #[test]
    fn tolerant_window_follows_the_kernel_version() {
        let schema = ConfigSchema::new();

        assert!(schema.validate(&legacy_tolerant(), "0.1.0", "staging").is_ok());

        let err = schema.validate(&legacy_tolerant(), "0.2.0", "staging").unwrap_err();
        assert!(err.is_version_error(), "{err}");
    }

    #[test]
    fn unknown_config_version_rejected_in_both_modes() {
        let schema = ConfigSchema::new();

        for mode in ["strict", "tolerant"] {
            let raw = json!({
                "theme": "aurora",
                "text_domain": "aurora",
                "config_version": "2.0",
                "validation_mode": mode
            });
            let err = schema.validate(&raw, KERNEL, "development").unwrap_err();
            assert!(err.is_version_error(), "{mode}: {err}");
        }
    }

    #[test]
    fn strict_config_is_fully_typed() {
        let config = ConfigSchema::new().validate(&current_strict(), KERNEL, "production").unwrap();

        assert_eq!(config.text_domain(), "aurora");
        assert_eq!(config.config_version(), "1.0");
        assert_eq!(config.feature_flags()["dark_mode"], FeatureFlag::Bool(true));
        assert_eq!(config.feature_flags()["hero"], FeatureFlag::from("video"));
        assert_eq!(config.paths()["templates"], "templates");
        assert_eq!(config.options()["layout"], json!({ "sidebar": "left" }));
    }

    #[test]
    fn custom_policy_is_honoured() {
        let policy = ConfigVersionPolicy::default().with_entry("1.0", CompatibilityRecord::removed());
        let schema = ConfigSchema::with_policy(policy);

        let err = schema.validate(&current_strict(), KERNEL, "development").unwrap_err();

        assert_eq!(err.kind(), "RemovedVersion");
        assert!(schema.policy().record("0.9").is_some());
    }
}

#[cfg(test)]
mod loading {
    use super::fixtures::*;
    use serde_json::json;
    use tkernel_config::{ConfigSchema, export_json, load_raw_config};

    #[test]
    fn loads_json_toml_and_yaml() {
        let files = [
            (
                "theme.json",
                r#"{ "theme": "aurora", "text_domain": "aurora", "config_version": "1.0",
                     "feature_flags": { "dark_mode": true, "columns": 3 } }"#,
            ),
            (
                "theme.toml",
                "theme = \"aurora\"\ntext_domain = \"aurora\"\nconfig_version = \"1.0\"\n\n\
                 [feature_flags]\ndark_mode = true\ncolumns = 3\n",
            ),
            (
                "theme.yaml",
                "theme: aurora\ntext_domain: aurora\nconfig_version: \"1.0\"\n\
                 feature_flags:\n  dark_mode: true\n  columns: 3\n",
            ),
        ];

        for (name, contents) in files {
            let (_dir, path) = write_config(name, contents);

            let raw = load_raw_config(&path).unwrap();
            let config = ConfigSchema::new().validate(&raw, KERNEL, "cli").unwrap();

            assert_eq!(config.theme(), "aurora", "{name}");
            assert_eq!(raw["feature_flags"], json!({ "dark_mode": true, "columns": 3 }), "{name}");
        }
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_raw_config(dir.path().join("absent.json")).unwrap_err();

        assert!(err.is_usage_error());
        assert_eq!(err.kind(), "Load");
    }

    #[test]
    fn malformed_file_is_a_usage_error() {
        let (_dir, path) = write_config("theme.json", "{ \"theme\": ");

        let err = load_raw_config(&path).unwrap_err();

        assert!(err.is_usage_error());
    }

    #[test]
    fn export_round_trips_through_validation() {
        let config = ConfigSchema::new().validate(&current_strict(), KERNEL, "cli").unwrap();

        let exported = export_json(&config).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&exported).unwrap();
        let again = ConfigSchema::new().validate(&reparsed, KERNEL, "cli").unwrap();

        assert_eq!(config, again);
    }
}
