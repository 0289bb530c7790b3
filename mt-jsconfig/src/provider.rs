//! The machine-translation providers the config script describes.

/// A translation service whose key and language list reach the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Apertium,
    Microsoft,
}

impl Provider {
    /// Emission order.
    pub const ALL: [Provider; 2] = [Provider::Apertium, Provider::Microsoft];

    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Apertium => "apertium",
            Provider::Microsoft => "microsoft",
        }
    }

    /// Global variable holding the API key.
    pub fn key_var(&self) -> &'static str {
        match self {
            Provider::Apertium => "APERTIUM_API_KEY",
            Provider::Microsoft => "MICROSOFT_API_KEY",
        }
    }

    /// Global variable holding the supported language list.
    pub fn langs_var(&self) -> &'static str {
        match self {
            Provider::Apertium => "APERTIUM_LANGS",
            Provider::Microsoft => "MICROSOFT_LANGS",
        }
    }

    /// Convert a locale-style language code (`pt_BR`) to the code the
    /// service understands. Apertium codes pass through unchanged.
    pub fn convert_language(&self, language: &str) -> String {
        match self {
            Provider::Apertium => language.to_string(),
            Provider::Microsoft => {
                let lang = language.replace('_', "-").to_lowercase();
                match lang.as_str() {
                    "zh-tw" => "zh-CHT".into(),
                    "zh-cn" => "zh-CHS".into(),
                    _ => lang,
                }
            }
        }
    }
}
