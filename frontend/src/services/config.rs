use contact_form_domain::load_settings;
use shared::ContactFormSettings;

use crate::services::logging::Logger;

/// Id of the `<script type="application/json">` element holding page settings
pub const SETTINGS_ELEMENT_ID: &str = "contact-form-config";

/// Read the page's settings override, falling back to defaults if it is
/// missing or unusable
pub fn read_settings() -> ContactFormSettings {
    let raw = gloo::utils::document()
        .get_element_by_id(SETTINGS_ELEMENT_ID)
        .and_then(|element| element.text_content());

    settings_or_default(raw.as_deref())
}

pub fn settings_or_default(raw: Option<&str>) -> ContactFormSettings {
    match load_settings(raw) {
        Ok(settings) => settings,
        Err(e) => {
            Logger::warn_with_component("config", &format!("Ignoring contact form settings: {:#}", e));
            ContactFormSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FormVariant;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_missing_element_gives_defaults() {
        assert_eq!(read_settings(), ContactFormSettings::default());
    }

    #[wasm_bindgen_test]
    fn test_override_applied() {
        let settings = settings_or_default(Some(r#"{"variant": "extended", "success_countdown_secs": 3}"#));
        assert_eq!(settings.variant, FormVariant::Extended);
        assert_eq!(settings.form.success_countdown_secs, 3);
    }

    #[wasm_bindgen_test]
    fn test_broken_override_falls_back() {
        assert_eq!(settings_or_default(Some("{not json")), ContactFormSettings::default());
        assert_eq!(
            settings_or_default(Some(r#"{"min_message_length": 600}"#)),
            ContactFormSettings::default()
        );
    }
}
