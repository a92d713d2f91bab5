use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// Active site language. Drives both UI direction and CMS content selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Locale code sent to Strapi as the `locale` query variable.
    pub fn strapi_code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Value of the `og:locale` meta tag.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Ar => "ar_SA",
        }
    }

    /// `dir` attribute on the html root.
    pub fn text_direction(self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar => "rtl",
        }
    }

    /// Parse a stored/query language code. Anything unknown falls back to English.
    pub fn parse(code: &str) -> Locale {
        match code.trim() {
            "ar" => Locale::Ar,
            _ => Locale::En,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.strapi_code())
    }
}

/// Persistence port for the language preference. The web frontend backs this
/// with a cookie, tests and the CLI with memory.
pub trait PreferenceStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// In-memory store, mostly for tests and single-process use.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<std::collections::HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

const LANGUAGE_KEY: &str = "language";

/// Explicit language provider: holds the active locale and persists changes
/// through the injected store instead of touching any ambient global.
pub struct LocalePreference<S: PreferenceStore> {
    store: S,
    current: RwLock<Locale>,
}

impl<S: PreferenceStore> LocalePreference<S> {
    /// Load the saved preference, defaulting to English when none is stored.
    pub fn load(store: S) -> Self {
        let current = store
            .read(LANGUAGE_KEY)
            .map(|code| Locale::parse(&code))
            .unwrap_or_default();
        Self {
            store,
            current: RwLock::new(current),
        }
    }

    pub fn current(&self) -> Locale {
        *self.current.read().unwrap()
    }

    pub fn change(&self, locale: Locale) {
        *self.current.write().unwrap() = locale;
        self.store.write(LANGUAGE_KEY, locale.strapi_code());
    }
}
