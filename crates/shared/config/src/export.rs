use crate::error::{ConfigError, ConfigErrorExt};
use crate::validated::ValidatedConfig;

/// Renders a validated config as pretty-printed JSON.
///
/// Keys: `theme`, `text_domain`, `config_version`, `validation_mode`,
/// `feature_flags`, `paths`, `options`.
///
/// # Errors
/// Returns [`ConfigError::Export`] if serialization fails.
pub fn export_json(config: &ValidatedConfig) -> Result<String, ConfigError> {
    let json = serde_json::to_string_pretty(config).context("Serializing validated config")?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigSchema;
    use serde_json::{Value, json};

    #[test]
    fn exports_every_section() {
        let raw = json!({
            "theme": "aurora",
            "text_domain": "aurora-td",
            "config_version": "1.0",
            "feature_flags": { "dark_mode": true, "columns": 3 },
            "paths": { "assets": "dist/assets" },
            "options": { "layout": "wide" }
        });
        let config = ConfigSchema::new().validate(&raw, "0.1.0", "cli").unwrap();

        let exported = export_json(&config).unwrap();

        let parsed: Value = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed["validation_mode"], "strict");
        assert_eq!(parsed["feature_flags"], json!({ "columns": 3, "dark_mode": true }));
        assert_eq!(parsed["paths"]["assets"], "dist/assets");
        assert_eq!(parsed["options"], json!({ "layout": "wide" }));
        assert!(exported.contains("\n  \"theme\": \"aurora\""));
        assert!(exported.contains("dist/assets"), "slashes stay unescaped");
    }

    #[test]
    fn key_order_is_stable() {
        let raw = json!({ "config_version": "1.0", "text_domain": "td", "theme": "t" });
        let config = ConfigSchema::new().validate(&raw, "0.1.0", "cli").unwrap();

        let exported = export_json(&config).unwrap();

        let positions: Vec<usize> = [
            "theme",
            "text_domain",
            "config_version",
            "validation_mode",
            "feature_flags",
            "paths",
            "options",
        ]
        .iter()
        .map(|key| exported.find(&format!("\"{key}\":")).unwrap())
        .collect();
        assert!(positions.is_sorted());
    }
}
