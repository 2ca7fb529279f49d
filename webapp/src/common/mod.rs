pub mod config;
pub mod host;
pub mod i18n;
pub mod icons;
pub mod state;
pub mod style;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Tr,
    En,
}

impl Language {
    #[cfg(test)]
    pub fn all() -> [Self; 2] {
        [Self::Tr, Self::En]
    }

    pub fn other(self) -> Self {
        match self {
            Self::Tr => Self::En,
            Self::En => Self::Tr,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Tr => "TR",
            Self::En => "EN",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn other(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
        };
        write!(f, "{}", name)
    }
}

/// A pair of static strings for copy that is selected inline by language
/// rather than through the translation table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized {
    pub tr: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(tr: &'static str, en: &'static str) -> Self {
        Self { tr, en }
    }

    pub fn get(self, lang: Language) -> &'static str {
        match lang {
            Language::Tr => self.tr,
            Language::En => self.en,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_other_is_an_involution() {
        for lang in Language::all() {
            assert_ne!(lang.other(), lang);
            assert_eq!(lang.other().other(), lang);
        }
    }

    #[test]
    fn theme_other_is_an_involution() {
        assert_eq!(Theme::Light.other(), Theme::Dark);
        assert_eq!(Theme::Dark.other().other(), Theme::Dark);
    }

    #[test]
    fn localized_picks_by_language() {
        let l = Localized::new("OKU", "READ");
        assert_eq!(l.get(Language::Tr), "OKU");
        assert_eq!(l.get(Language::En), "READ");
    }

    #[test]
    fn display_forms() {
        assert_eq!(Language::Tr.to_string(), "TR");
        assert_eq!(Language::En.to_string(), "EN");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
