// SPDX-License-Identifier: MPL-2.0
//! Display locales and the layout direction derived from them.
//!
//! The application ships exactly three locales. Everything the UI renders is
//! determined by the single active [`Locale`]: the Fluent bundle strings, the
//! window title, and the layout [`Direction`].

use unic_langid::LanguageIdentifier;

/// One of the three display languages the office serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Arabic, the office's home language.
    #[default]
    Ar,
    /// English.
    En,
    /// Turkish.
    Tr,
}

/// Horizontal layout flow for the active locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    RightToLeft,
    LeftToRight,
}

impl Locale {
    /// Every supported locale, in picker order.
    pub const ALL: [Locale; 3] = [Locale::Ar, Locale::En, Locale::Tr];

    /// The two-letter code used in the config file and on the CLI.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Parses a stored or CLI-supplied code. Anything outside the closed set
    /// returns `None`; callers fall back to the default locale.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "ar" => Some(Locale::Ar),
            "en" => Some(Locale::En),
            "tr" => Some(Locale::Tr),
            _ => None,
        }
    }

    /// Layout direction, a pure function of the locale.
    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::RightToLeft,
            Locale::En | Locale::Tr => Direction::LeftToRight,
        }
    }

    /// Language identifier for the Fluent bundle boundary.
    pub fn lang_id(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("locale codes are valid language identifiers")
    }

    /// Fluent key holding the language's native display name.
    pub fn name_key(self) -> &'static str {
        match self {
            Locale::Ar => "language-name-ar",
            Locale::En => "language-name-en",
            Locale::Tr => "language-name-tr",
        }
    }
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::RightToLeft)
    }
}

/// Resolves the startup locale: CLI override first, then the persisted
/// preference, then the default (`ar`). Invalid values at either source are
/// treated as absent rather than rejected.
pub fn initial_locale(cli_lang: Option<&str>, stored: Option<&str>) -> Locale {
    if let Some(locale) = cli_lang.and_then(Locale::from_code) {
        return locale;
    }
    if let Some(locale) = stored.and_then(Locale::from_code) {
        return locale;
    }
    Locale::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_arabic() {
        assert_eq!(Locale::default(), Locale::Ar);
    }

    #[test]
    fn arabic_lays_out_right_to_left() {
        assert_eq!(Locale::Ar.direction(), Direction::RightToLeft);
        assert!(Locale::Ar.direction().is_rtl());
    }

    #[test]
    fn latin_script_locales_lay_out_left_to_right() {
        assert_eq!(Locale::En.direction(), Direction::LeftToRight);
        assert_eq!(Locale::Tr.direction(), Direction::LeftToRight);
        assert!(!Locale::Tr.direction().is_rtl());
    }

    #[test]
    fn codes_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Locale::from_code("fr"), None);
        assert_eq!(Locale::from_code(""), None);
        assert_eq!(Locale::from_code("AR"), None);
    }

    #[test]
    fn initial_locale_defaults_to_arabic_without_preference() {
        assert_eq!(initial_locale(None, None), Locale::Ar);
    }

    #[test]
    fn initial_locale_uses_stored_preference() {
        assert_eq!(initial_locale(None, Some("tr")), Locale::Tr);
    }

    #[test]
    fn initial_locale_ignores_invalid_stored_value() {
        assert_eq!(initial_locale(None, Some("fr")), Locale::Ar);
        assert_eq!(initial_locale(None, Some("")), Locale::Ar);
    }

    #[test]
    fn cli_override_wins_over_stored_preference() {
        assert_eq!(initial_locale(Some("en"), Some("tr")), Locale::En);
    }

    #[test]
    fn invalid_cli_override_falls_through_to_stored() {
        assert_eq!(initial_locale(Some("de"), Some("en")), Locale::En);
    }

    #[test]
    fn lang_ids_parse() {
        for locale in Locale::ALL {
            assert_eq!(locale.lang_id().language.as_str(), locale.code());
        }
    }
}
