use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::providers::ProviderKey;

/// One sample of a probability series. `time` is unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub time: i64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSpec {
    pub label: String,
    pub color: String,
    pub current_probability: f64,
}

impl OutcomeSpec {
    pub fn new(label: &str, color: &str, current_probability: f64) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
            current_probability,
        }
    }
}

/// A labeled line series, one per market outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub data: Vec<TimePoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandlePoint {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    pub label: String,
    pub data: Vec<CandlePoint>,
}

/// Zoom presets offered by the chart toolbar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimePeriod {
    #[serde(rename = "15m")]
    Minutes15,
    #[serde(rename = "1h")]
    Hour1,
    #[serde(rename = "6h")]
    Hours6,
    #[serde(rename = "1d")]
    Day1,
    All,
}

impl TimePeriod {
    pub const ALL_PERIODS: [TimePeriod; 5] = [
        TimePeriod::Minutes15,
        TimePeriod::Hour1,
        TimePeriod::Hours6,
        TimePeriod::Day1,
        TimePeriod::All,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimePeriod::Minutes15 => "15m",
            TimePeriod::Hour1 => "1h",
            TimePeriod::Hours6 => "6h",
            TimePeriod::Day1 => "1d",
            TimePeriod::All => "All",
        }
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown time period '{0}'. Use one of 15m, 1h, 6h, 1d, All")]
pub struct ParseTimePeriodError(pub String);

impl FromStr for TimePeriod {
    type Err = ParseTimePeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "15m" => Ok(TimePeriod::Minutes15),
            "1h" => Ok(TimePeriod::Hour1),
            "6h" => Ok(TimePeriod::Hours6),
            "1d" => Ok(TimePeriod::Day1),
            "All" | "all" => Ok(TimePeriod::All),
            other => Err(ParseTimePeriodError(other.to_string())),
        }
    }
}

/// A single resolution option shown on a card, probability in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub label: String,
    pub probability: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Active,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

// Demo position fields are display strings, e.g. "1,580¢" or "+155.83%".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub status: PositionStatus,
    pub side: Side,
    pub size: String,
    pub sold: String,
    pub remaining: String,
    pub pnl: String,
}

/// Canonical market card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub provider: ProviderKey,
    pub liquidity: String,
    pub created_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub yes_percentage: f64,
    pub no_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sparkline: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<Vec<Outcome>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl CardData {
    /// Key used to seed per-card jitter: `"<id>-<provider>"`.
    pub fn jitter_key(&self) -> String {
        format!("{}-{}", self.id, self.provider.as_str())
    }
}
