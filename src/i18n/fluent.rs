use crate::app::config::Config;
use crate::locale::{self, Locale};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    current_locale: Locale,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();

        for locale in Locale::ALL {
            let filename = format!("{}.ftl", locale.code());
            if let Some(content) = Asset::get(&filename) {
                let res = FluentResource::try_new(
                    String::from_utf8_lossy(content.data.as_ref()).to_string(),
                )
                .expect("Failed to parse FTL file.");
                let mut bundle = FluentBundle::new(vec![locale.lang_id()]);
                bundle.add_resource(res).expect("Failed to add resource.");
                bundles.insert(locale, bundle);
            }
        }

        let current_locale = locale::initial_locale(
            cli_lang.as_deref(),
            config.general.language.as_deref(),
        );

        Self {
            bundles,
            current_locale,
        }
    }

    /// Switches the active locale. Idempotent: re-selecting the current
    /// locale leaves the state untouched.
    pub fn set_locale(&mut self, locale: Locale) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> Locale {
        self.current_locale
    }

    /// True iff `locale` is the active one. Exactly one locale satisfies
    /// this at any time.
    pub fn is_active(&self, locale: Locale) -> bool {
        self.current_locale == locale
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}
