//! Localization store: selected language plus the active translation set.
//!
//! The translation set is replaced wholesale whenever the language changes.
//! While a fetch is pending the previous set stays visible; if the fetch
//! fails (transport error or rejected payload) the built-in English set is
//! installed until `set_language` succeeds again.

use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::TranslationsResponse;
use crate::services::ApiClient;
use crate::utils::{i18n, storage};

const LANGUAGE_KEY: &str = "language";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "fr" => Language::French,
            _ => Language::English,
        }
    }
}

#[derive(Clone)]
pub struct LanguageContext {
    pub language: Language,
    translations: Rc<HashMap<String, String>>,
    pub set_language: Callback<Language>,
}

impl PartialEq for LanguageContext {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && Rc::ptr_eq(&self.translations, &other.translations)
    }
}

impl LanguageContext {
    /// Look up a display string; unknown keys render as themselves so a
    /// sparse server set never blanks out the UI.
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let language = use_state(initial_language);
    let translations = use_state(|| Rc::new(i18n::fallback_translations()));

    {
        let translations = translations.clone();
        use_effect_with(*language, move |lang| {
            let lang = *lang;
            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::new();
                let path = format!("/api/translations/{}", lang.as_str());
                match client.get::<TranslationsResponse>(&path, None).await {
                    Ok(response) if response.success => {
                        translations.set(Rc::new(response.translations));
                    }
                    Ok(_) => {
                        log::warn!(
                            "translations request for '{}' rejected, keeping built-in English set",
                            lang.as_str()
                        );
                        translations.set(Rc::new(i18n::fallback_translations()));
                    }
                    Err(e) => {
                        log::error!("error fetching translations: {}", e);
                        translations.set(Rc::new(i18n::fallback_translations()));
                    }
                }
            });
            || ()
        });
    }

    let set_language = {
        let language = language.clone();
        Callback::from(move |lang: Language| {
            if let Some(local) = storage::get_local_storage() {
                let _ = local.set_item(LANGUAGE_KEY, lang.as_str());
            }
            language.set(lang);
        })
    };

    let context = LanguageContext {
        language: *language,
        translations: (*translations).clone(),
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { props.children.clone() }
        </ContextProvider<LanguageContext>>
    }
}

fn initial_language() -> Language {
    storage::get_local_storage()
        .and_then(|local| local.get_item(LANGUAGE_KEY).ok().flatten())
        .map(|code| Language::from_code(&code))
        .unwrap_or_default()
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("LanguageContext not provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::English, Language::French] {
            assert_eq!(Language::from_code(lang.as_str()), lang);
        }
    }

    #[test]
    fn unsupported_codes_fall_back_to_english() {
        assert_eq!(Language::from_code("sw"), Language::English);
        assert_eq!(Language::from_code(""), Language::English);
    }
}
