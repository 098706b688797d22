use std::collections::HashMap;

use serde::Deserialize;

/// Envelope of `/api/translations/{lang}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslationsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_translations_envelope() {
        let response: TranslationsResponse = serde_json::from_str(
            r#"{
                "success": true,
                "language": "fr",
                "translations": {"dashboard": "Tableau de bord", "logout": "Déconnexion"}
            }"#,
        )
        .unwrap();

        assert!(response.success);
        assert_eq!(
            response.translations.get("dashboard").map(String::as_str),
            Some("Tableau de bord")
        );
    }
}
