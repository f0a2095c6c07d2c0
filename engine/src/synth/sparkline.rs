// Compact single-series walk for card previews
use chrono::{DateTime, Utc};
use rand::Rng;
use shared::models::TimePoint;
use shared::utils::round2;

use super::outcome::point_time;

pub const DEFAULT_SPARKLINE_DAYS: u32 = 7;
pub const DEFAULT_SPARKLINE_VOLATILITY: f64 = 0.08;
/// 4-hour intervals.
pub const SPARKLINE_POINTS_PER_DAY: u32 = 6;

pub const SPARKLINE_MIN: f64 = 0.1;
pub const SPARKLINE_MAX: f64 = 99.9;

const START_VARIANCE: f64 = 0.6; // -30% to +30%
const MOMENTUM_DECAY: f64 = 0.9;

pub fn generate_sparkline_data<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    current_value: f64,
    days: u32,
    volatility: f64,
) -> Vec<TimePoint> {
    let total = days as usize * SPARKLINE_POINTS_PER_DAY as usize;
    let now_secs = now.timestamp();

    let variance = (rng.gen::<f64>() - 0.5) * START_VARIANCE;
    let mut value = current_value * (1.0 + variance);
    let base_trend = (current_value - value) / total as f64;
    let mut momentum = 0.0;

    let mut data = Vec::with_capacity(total);
    for i in 0..total {
        let random_change = (rng.gen::<f64>() - 0.5) * volatility * 3.0;
        momentum = momentum * MOMENTUM_DECAY + random_change;

        value += base_trend + momentum;
        value = value.clamp(SPARKLINE_MIN, SPARKLINE_MAX);

        data.push(TimePoint {
            time: point_time(now_secs, i, total, SPARKLINE_POINTS_PER_DAY),
            value: round2(value),
        });
    }
    data
}
