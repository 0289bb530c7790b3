/// Render context: the four optional values the config script is built from.
/// Transient; built per request and discarded after emission.
use crate::provider::Provider;

/// Values supplied to one render call.
///
/// `None` means the value was not supplied and its declaration is omitted.
/// `Some` is always emitted, even when the string or list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigContext {
    pub apertium_api_key: Option<String>,
    pub apertium_langs: Option<Vec<String>>,
    pub microsoft_api_key: Option<String>,
    pub microsoft_langs: Option<Vec<String>>,
}

impl ConfigContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apertium_api_key(mut self, key: impl Into<String>) -> Self {
        self.apertium_api_key = Some(key.into());
        self
    }

    pub fn apertium_langs<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.apertium_langs = Some(langs.into_iter().map(Into::into).collect());
        self
    }

    pub fn microsoft_api_key(mut self, key: impl Into<String>) -> Self {
        self.microsoft_api_key = Some(key.into());
        self
    }

    pub fn microsoft_langs<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.microsoft_langs = Some(langs.into_iter().map(Into::into).collect());
        self
    }

    /// The API key supplied for `provider`, if any.
    pub fn key(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Apertium => self.apertium_api_key.as_deref(),
            Provider::Microsoft => self.microsoft_api_key.as_deref(),
        }
    }

    /// The language list supplied for `provider`, if any.
    pub fn langs(&self, provider: Provider) -> Option<&[String]> {
        match provider {
            Provider::Apertium => self.apertium_langs.as_deref(),
            Provider::Microsoft => self.microsoft_langs.as_deref(),
        }
    }

    /// True when no value is present; such a context renders to "".
    pub fn is_empty(&self) -> bool {
        Provider::ALL
            .iter()
            .all(|&p| self.key(p).is_none() && self.langs(p).is_none())
    }

    /// Copy with every language list rewritten to the codes its provider
    /// expects (see [`Provider::convert_language`]).
    pub fn with_converted_languages(&self) -> Self {
        let convert = |provider: Provider, langs: &Option<Vec<String>>| {
            langs.as_ref().map(|list| {
                list.iter()
                    .map(|lang| provider.convert_language(lang))
                    .collect()
            })
        };
        Self {
            apertium_api_key: self.apertium_api_key.clone(),
            apertium_langs: convert(Provider::Apertium, &self.apertium_langs),
            microsoft_api_key: self.microsoft_api_key.clone(),
            microsoft_langs: convert(Provider::Microsoft, &self.microsoft_langs),
        }
    }
}
