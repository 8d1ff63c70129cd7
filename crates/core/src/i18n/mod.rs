//! Interface languages and string lookup.
//!
//! Lookup never fails: a key missing from the active table falls back to
//! English, and a key missing everywhere is returned as-is.

mod tables;

use std::fmt;

/// Preference key under which the chosen language code is stored.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Marathi];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
        }
    }

    /// Unrecognised codes yield `None`.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::English),
            "hi" => Some(Language::Hindi),
            "mr" => Some(Language::Marathi),
            _ => None,
        }
    }

    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Marathi => "मराठी",
        }
    }

    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            Language::Hindi | Language::Marathi => "🇮🇳",
        }
    }

    /// Locale tag handed to speech recognition.
    #[must_use]
    pub fn speech_locale(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Hindi => "hi-IN",
            Language::Marathi => "mr-IN",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::English => tables::ENGLISH,
            Language::Hindi => tables::HINDI,
            Language::Marathi => tables::MARATHI,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.native_name())
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|(candidate, value)| (*candidate == key).then_some(*value))
}

/// Resolve `key` for `language`.
#[must_use]
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    lookup(language.table(), key)
        .or_else(|| lookup(tables::ENGLISH, key))
        .unwrap_or(key)
}

/// Replace every `{name}` placeholder in `template`.
#[must_use]
pub fn fill(template: &str, name: &str, value: &str) -> String {
    template.replace(&format!("{{{name}}}"), value)
}
