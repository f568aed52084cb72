// SPDX-License-Identifier: MPL-2.0
//! Locale-independent page content.
//!
//! Every section of the page is described here as structured data: currency
//! pairs with their posted figures, service and trust cards as pairs of
//! Fluent keys, the office's contact channels as fixed URIs. The view code
//! iterates these records once; localized wording lives in the Fluent
//! resources, never here.

/// In-page anchors the navigation links target, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Rates,
    Trust,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hero, Section::Rates, Section::Trust, Section::Contact];

    /// Fluent key for the nav link label pointing at this section.
    pub fn nav_key(self) -> &'static str {
        match self {
            Section::Hero => "nav-home",
            Section::Rates => "nav-rates",
            Section::Trust => "nav-trust",
            Section::Contact => "nav-contact",
        }
    }

    /// Fluent key for the footer quick-link label (footer wording differs
    /// slightly from the navbar's).
    pub fn footer_key(self) -> &'static str {
        match self {
            Section::Hero => "footer-link-home",
            Section::Rates => "footer-link-rates",
            Section::Trust => "footer-link-trust",
            Section::Contact => "footer-link-contact",
        }
    }
}

/// Posted direction of a rate since the previous update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// A posted buy/sell quote for one currency pair.
///
/// Figures are display literals, exactly as chalked on the office board.
#[derive(Debug, Clone, Copy)]
pub struct RateCard {
    pub pair: &'static str,
    /// Fluent key for the currency's long name.
    pub name_key: &'static str,
    pub buy: &'static str,
    pub sell: &'static str,
    pub trend: Trend,
}

pub const RATES: [RateCard; 3] = [
    RateCard {
        pair: "USD/SYP",
        name_key: "rate-usd-name",
        buy: "13,150",
        sell: "13,250",
        trend: Trend::Up,
    },
    RateCard {
        pair: "EUR/SYP",
        name_key: "rate-eur-name",
        buy: "14,280",
        sell: "14,390",
        trend: Trend::Up,
    },
    RateCard {
        pair: "TRY/SYP",
        name_key: "rate-try-name",
        buy: "490",
        sell: "510",
        trend: Trend::Down,
    },
];

/// One of the office's service offerings.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCard {
    pub title_key: &'static str,
    pub body_key: &'static str,
}

pub const SERVICES: [ServiceCard; 3] = [
    ServiceCard {
        title_key: "service-transfers-title",
        body_key: "service-transfers-body",
    },
    ServiceCard {
        title_key: "service-exchange-title",
        body_key: "service-exchange-body",
    },
    ServiceCard {
        title_key: "service-financial-title",
        body_key: "service-financial-body",
    },
];

/// A reason-to-trust card in the trust section.
#[derive(Debug, Clone, Copy)]
pub struct TrustFeature {
    pub title_key: &'static str,
    pub body_key: &'static str,
}

pub const TRUST_FEATURES: [TrustFeature; 3] = [
    TrustFeature {
        title_key: "trust-speed-title",
        body_key: "trust-speed-body",
    },
    TrustFeature {
        title_key: "trust-transparency-title",
        body_key: "trust-transparency-body",
    },
    TrustFeature {
        title_key: "trust-team-title",
        body_key: "trust-team-body",
    },
];

/// One figure in the statistics strip.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label_key: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: "5+",
        label_key: "stat-years",
    },
    Stat {
        value: "2000+",
        label_key: "stat-customers",
    },
    Stat {
        value: "15",
        label_key: "stat-countries",
    },
    Stat {
        value: "24/7",
        label_key: "stat-support",
    },
];

/// Ways to reach the office. The URIs are opaque literals; the application
/// hands them to the OS and never constructs or validates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Phone,
    WhatsApp,
    Telegram,
    Map,
}

impl ContactChannel {
    /// Channels shown as cards in the contact section.
    pub const CARDS: [ContactChannel; 3] = [
        ContactChannel::Phone,
        ContactChannel::WhatsApp,
        ContactChannel::Telegram,
    ];

    pub fn uri(self) -> &'static str {
        match self {
            ContactChannel::Phone => "tel:+905355002504",
            ContactChannel::WhatsApp => "https://wa.me/905355002504",
            ContactChannel::Telegram => "https://t.me/alhaderfinancial",
            ContactChannel::Map => "https://maps.google.com/?q=Al-Mahallak+Al-Janoubi,+Aleppo",
        }
    }

    /// Fluent key for the card title. WhatsApp and Telegram keep their brand
    /// names across all locales, so their keys resolve to the same value in
    /// every bundle.
    pub fn title_key(self) -> &'static str {
        match self {
            ContactChannel::Phone => "contact-call-title",
            ContactChannel::WhatsApp => "contact-whatsapp-title",
            ContactChannel::Telegram => "contact-telegram-title",
            ContactChannel::Map => "contact-map-open",
        }
    }

    /// Display detail under the card title, if the channel has one.
    pub fn detail(self) -> Option<&'static str> {
        match self {
            ContactChannel::Phone | ContactChannel::WhatsApp => Some(PHONE_DISPLAY),
            ContactChannel::Telegram => Some(TELEGRAM_HANDLE),
            ContactChannel::Map => None,
        }
    }
}

/// The office phone number as printed on the board.
pub const PHONE_DISPLAY: &str = "+90 535 500 25 04";

/// The office's Telegram handle.
pub const TELEGRAM_HANDLE: &str = "@alhaderfinancial";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_rate_cards_are_posted() {
        assert_eq!(RATES.len(), 3);
        assert!(RATES.iter().any(|r| r.pair == "USD/SYP"));
        assert!(RATES.iter().any(|r| r.pair == "EUR/SYP"));
        assert!(RATES.iter().any(|r| r.pair == "TRY/SYP"));
    }

    #[test]
    fn lira_trend_is_down() {
        let try_card = RATES.iter().find(|r| r.pair == "TRY/SYP").unwrap();
        assert_eq!(try_card.trend, Trend::Down);
    }

    #[test]
    fn contact_uris_use_expected_schemes() {
        assert!(ContactChannel::Phone.uri().starts_with("tel:"));
        assert!(ContactChannel::WhatsApp.uri().starts_with("https://wa.me/"));
        assert!(ContactChannel::Telegram.uri().starts_with("https://t.me/"));
        assert!(ContactChannel::Map.uri().starts_with("https://"));
    }

    #[test]
    fn card_channels_all_have_details() {
        for channel in ContactChannel::CARDS {
            assert!(channel.detail().is_some());
        }
    }

    #[test]
    fn sections_cover_all_nav_targets() {
        assert_eq!(Section::ALL.len(), 4);
        assert_eq!(Section::ALL[0], Section::Hero);
        assert_eq!(Section::ALL[3], Section::Contact);
    }
}
