// Provider style configuration shared by every card view
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKey {
    Kalshi,
    Manifold,
    Limitless,
    Predictit,
    Polymarket,
    Zeitgeist,
}

impl ProviderKey {
    pub const ALL: [ProviderKey; 6] = [
        ProviderKey::Kalshi,
        ProviderKey::Manifold,
        ProviderKey::Limitless,
        ProviderKey::Predictit,
        ProviderKey::Polymarket,
        ProviderKey::Zeitgeist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKey::Kalshi => "kalshi",
            ProviderKey::Manifold => "manifold",
            ProviderKey::Limitless => "limitless",
            ProviderKey::Predictit => "predictit",
            ProviderKey::Polymarket => "polymarket",
            ProviderKey::Zeitgeist => "zeitgeist",
        }
    }

    pub fn config(&self) -> ProviderConfig {
        provider_config(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTone {
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderConfig {
    pub key: ProviderKey,
    pub label: &'static str,
    pub icon: &'static str, // path under /public
    pub bg_hex: &'static str,
    pub text_tone: TextTone,
    pub border_hex: Option<&'static str>,
}

pub fn provider_config(key: ProviderKey) -> ProviderConfig {
    let (label, icon, bg_hex, text_tone) = match key {
        ProviderKey::Kalshi => ("Kalshi", "/K-Kalshi.svg", "#179F61", TextTone::Light),
        ProviderKey::Manifold => ("Manifold", "/Manifold.svg", "#4337C4", TextTone::Light),
        ProviderKey::Limitless => ("Limitless", "/Limitless.svg", "#DCF58D", TextTone::Dark),
        ProviderKey::Predictit => ("PredictIt", "/Predictit.svg", "#07A0BA", TextTone::Light),
        ProviderKey::Polymarket => ("Polymarket", "/Polymarket.svg", "#1751F0", TextTone::Light),
        ProviderKey::Zeitgeist => ("Zeitgeist", "/Zeitgeist.svg", "#FFFFFF", TextTone::Dark),
    };
    ProviderConfig {
        key,
        label,
        icon,
        bg_hex,
        text_tone,
        border_hex: Some(bg_hex),
    }
}
