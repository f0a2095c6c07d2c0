// Synthetic market time-series generation
pub mod market;
pub mod outcome;
pub mod seeded;
pub mod sparkline;

pub use market::{
    generate_market_series, generate_prediction_market_chart_data, get_card_chart_data,
    get_fed_rate_decision_chart_data,
};
pub use outcome::{generate_outcome_time_series, WalkParams};
pub use seeded::{hash_string_to_seed, jitter_series, SeededRandom};
pub use sparkline::generate_sparkline_data;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shared::models::{CandleSeries, CardData, Series, TimePoint};

use crate::candles::convert_line_to_candlestick_data;
use crate::config::ChartSettings;

/// Bundles settings, a random source and an optional pinned clock so callers
/// don't have to thread them through every generator call.
pub struct ChartDataGenerator {
    settings: ChartSettings,
    rng: ChaCha8Rng,
    pinned_now: Option<DateTime<Utc>>,
}

impl ChartDataGenerator {
    pub fn new(settings: ChartSettings) -> Self {
        Self {
            settings,
            rng: ChaCha8Rng::from_entropy(),
            pinned_now: None,
        }
    }

    /// Reproducible generator: same seed and clock give the same charts.
    pub fn with_seed(settings: ChartSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: ChaCha8Rng::seed_from_u64(seed),
            pinned_now: None,
        }
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.pinned_now = Some(now);
        self
    }

    pub fn settings(&self) -> &ChartSettings {
        &self.settings
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.pinned_now.unwrap_or_else(Utc::now)
    }

    pub fn card_chart(&mut self, card: &CardData) -> Vec<Series> {
        let now = self.now();
        let specs = market::card_outcome_specs(
            card.outcomes.as_deref(),
            Some(card.yes_percentage),
            Some(card.no_percentage),
        );
        tracing::debug!(card_id = %card.id, outcomes = specs.len(), "Generating card chart");
        generate_market_series(
            &mut self.rng,
            now,
            &specs,
            self.settings.full_days,
            self.settings.full_points_per_day,
        )
    }

    pub fn card_candles(&mut self, card: &CardData) -> Vec<CandleSeries> {
        let series = self.card_chart(card);
        convert_line_to_candlestick_data(&series, self.settings.hours_per_candle)
    }

    pub fn sparkline(&mut self, current_value: f64) -> Vec<TimePoint> {
        let (days, volatility) = (self.settings.sparkline_days, self.settings.sparkline_volatility);
        self.sparkline_with(current_value, days, volatility)
    }

    pub fn sparkline_with(&mut self, current_value: f64, days: u32, volatility: f64) -> Vec<TimePoint> {
        let now = self.now();
        generate_sparkline_data(&mut self.rng, now, current_value, days, volatility)
    }

    /// Deterministic per card: seeded from the card's id and provider.
    pub fn hover_sparkline(&self, card: &CardData) -> Vec<f64> {
        jitter_series(card.sparkline.as_deref(), self.settings.jitter_amplitude, &card.jitter_key())
    }
}
