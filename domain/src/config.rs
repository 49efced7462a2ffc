//! Configuration loading for the contact form.
//!
//! Defaults live on [`ContactFormConfig`]; a page may supply a JSON override
//! (any subset of keys, plus an optional `variant`). Overrides are checked for
//! consistency before use.

use anyhow::{ensure, Context, Result};
use tracing::{debug, info};
use shared::{ContactFormConfig, ContactFormSettings};

/// Parse optional JSON settings, falling back to defaults when absent or blank
pub fn load_settings(raw: Option<&str>) -> Result<ContactFormSettings> {
    let settings = match raw.map(str::trim) {
        None | Some("") => {
            debug!("No contact form settings override supplied, using defaults");
            ContactFormSettings::default()
        }
        Some(json) => {
            let settings: ContactFormSettings =
                serde_json::from_str(json).context("Failed to parse contact form settings")?;
            info!("Loaded contact form settings override for {:?} variant", settings.variant);
            settings
        }
    };

    validate_config(&settings.form)?;
    Ok(settings)
}

/// Check that limits are internally consistent
pub fn validate_config(config: &ContactFormConfig) -> Result<()> {
    ensure!(config.min_name_length > 0, "min_name_length must be greater than 0");
    ensure!(
        config.min_name_length <= config.max_name_length,
        "min_name_length ({}) exceeds max_name_length ({})",
        config.min_name_length,
        config.max_name_length
    );
    ensure!(config.min_message_length > 0, "min_message_length must be greater than 0");
    ensure!(
        config.min_message_length <= config.max_message_length,
        "min_message_length ({}) exceeds max_message_length ({})",
        config.min_message_length,
        config.max_message_length
    );
    ensure!(config.max_attachment_bytes > 0, "max_attachment_bytes must be greater than 0");
    ensure!(config.success_countdown_secs > 0, "success_countdown_secs must be greater than 0");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FormVariant;

    #[test]
    fn test_load_settings_defaults() {
        assert_eq!(load_settings(None).unwrap(), ContactFormSettings::default());
        assert_eq!(load_settings(Some("   ")).unwrap(), ContactFormSettings::default());
    }

    #[test]
    fn test_load_settings_override() {
        let settings = load_settings(Some(r#"{"variant": "extended", "submit_delay_ms": 10}"#)).unwrap();
        assert_eq!(settings.variant, FormVariant::Extended);
        assert_eq!(settings.form.submit_delay_ms, 10);
        assert_eq!(settings.form.max_name_length, 50);
    }

    #[test]
    fn test_load_settings_malformed_json() {
        let err = load_settings(Some("{not json")).unwrap_err();
        assert!(err.to_string().contains("Failed to parse contact form settings"));
    }

    #[test]
    fn test_validate_config_rejects_inverted_bounds() {
        let config = ContactFormConfig {
            min_message_length: 600,
            ..ContactFormConfig::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("min_message_length"));
    }

    #[test]
    fn test_validate_config_rejects_zero_countdown() {
        let config = ContactFormConfig {
            success_countdown_secs: 0,
            ..ContactFormConfig::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
