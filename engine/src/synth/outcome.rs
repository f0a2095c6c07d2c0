// Single-outcome probability walk
use chrono::{DateTime, Utc};
use rand::Rng;
use shared::models::TimePoint;
use shared::utils::round2;
use std::f64::consts::PI;

pub const SECONDS_PER_DAY: i64 = 86_400;

pub const OUTCOME_MIN: f64 = 0.5;
pub const OUTCOME_MAX: f64 = 99.5;

const MOMENTUM_DECAY: f64 = 0.95;
// One day of hourly points.
const TAIL_POINTS: usize = 24;

/// Window and noise level for a generated walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    pub days: u32,
    pub points_per_day: u32,
    pub volatility: f64,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            days: 30,
            points_per_day: 24,
            volatility: 0.08,
        }
    }
}

impl WalkParams {
    pub fn total_points(&self) -> usize {
        self.days as usize * self.points_per_day as usize
    }
}

/// Timestamp of point `index` in a window of `total` evenly spaced points
/// ending one step before `now`.
pub(crate) fn point_time(now_secs: i64, index: usize, total: usize, points_per_day: u32) -> i64 {
    let step = SECONDS_PER_DAY as f64 / f64::from(points_per_day);
    now_secs - ((total - index) as f64 * step).round() as i64
}

/// Generates a probability trajectory from `start_value` toward `end_value`.
///
/// Each step adds a constant trend, two sine waves (a slow one with three
/// cycles over the window and a faster one with seven), and a momentum term
/// fed by uniform shocks. Values are clamped to `[0.5, 99.5]`.
///
/// The walk alone does not land on `end_value`, so a second pass ramps the
/// last day of points linearly onto it. The first point is the start value.
pub fn generate_outcome_time_series<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    start_value: f64,
    end_value: f64,
    params: WalkParams,
) -> Vec<TimePoint> {
    let total = params.total_points();
    if total == 0 {
        return Vec::new();
    }

    let now_secs = now.timestamp();
    let volatility = params.volatility;
    let base_trend = (end_value - start_value) / total as f64;

    let slow_frequency = (2.0 * PI) / (total as f64 / 3.0);
    let fast_frequency = (2.0 * PI) / (total as f64 / 7.0);
    let slow_amplitude = volatility * 8.0;
    let fast_amplitude = volatility * 4.0;

    let mut data = Vec::with_capacity(total);
    let mut current = start_value.clamp(OUTCOME_MIN, OUTCOME_MAX);
    data.push(TimePoint {
        time: point_time(now_secs, 0, total, params.points_per_day),
        value: round2(current),
    });

    let mut momentum = 0.0;
    for i in 1..total {
        let step = i as f64;
        let slow_wave = (step * slow_frequency).sin() * slow_amplitude;
        let fast_wave = (step * fast_frequency + PI / 3.0).sin() * fast_amplitude;
        let shock = (rng.gen::<f64>() - 0.5) * volatility * 3.0;
        momentum = momentum * MOMENTUM_DECAY + shock;

        current += base_trend + slow_wave + fast_wave + momentum;
        current = current.clamp(OUTCOME_MIN, OUTCOME_MAX);

        data.push(TimePoint {
            time: point_time(now_secs, i, total, params.points_per_day),
            value: round2(current),
        });
    }

    // Second pass: the first point stays at the start value.
    let tail = TAIL_POINTS.min(total - 1);
    if tail > 0 {
        let adjustment = (end_value - current) / tail as f64;
        for (k, point) in data[total - tail..].iter_mut().enumerate() {
            let corrected = point.value + adjustment * (k + 1) as f64;
            point.value = round2(corrected.clamp(OUTCOME_MIN, OUTCOME_MAX));
        }
    }

    tracing::trace!(points = data.len(), start_value, end_value, volatility, "Generated outcome series");
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_length_and_spacing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let params = WalkParams { days: 3, points_per_day: 96, volatility: 0.1 };
        let data = generate_outcome_time_series(&mut rng, fixed_now(), 40.0, 60.0, params);
        assert_eq!(data.len(), 3 * 96);
        for pair in data.windows(2) {
            assert_eq!(pair[1].time - pair[0].time, 900);
        }
        let now = fixed_now().timestamp();
        assert_eq!(data.last().unwrap().time, now - 900);
        assert_eq!(data[0].time, now - 3 * SECONDS_PER_DAY);
    }

    #[test]
    fn test_starts_at_start_and_lands_near_end() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let data = generate_outcome_time_series(&mut rng, fixed_now(), 25.0, 70.0, WalkParams::default());
            assert_eq!(data[0].value, 25.0);
            let last = data.last().unwrap().value;
            assert!((last - 70.0).abs() <= 2.0, "seed {} ended at {}", seed, last);
        }
    }

    #[test]
    fn test_values_stay_in_bounds() {
        for seed in 0..10 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let params = WalkParams { days: 30, points_per_day: 96, volatility: 0.12 };
            let data = generate_outcome_time_series(&mut rng, fixed_now(), 95.0, 99.9, params);
            assert!(data.iter().all(|p| (OUTCOME_MIN..=OUTCOME_MAX).contains(&p.value)));
        }
    }

    #[test]
    fn test_values_rounded_to_cents() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let data = generate_outcome_time_series(&mut rng, fixed_now(), 50.0, 45.0, WalkParams::default());
        for p in &data {
            let cents = p.value * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6, "{} not rounded", p.value);
        }
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = generate_outcome_time_series(&mut ChaCha8Rng::seed_from_u64(3), fixed_now(), 10.0, 20.0, WalkParams::default());
        let b = generate_outcome_time_series(&mut ChaCha8Rng::seed_from_u64(3), fixed_now(), 10.0, 20.0, WalkParams::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_and_single_point_windows() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let empty = WalkParams { days: 0, points_per_day: 24, volatility: 0.08 };
        assert!(generate_outcome_time_series(&mut rng, fixed_now(), 10.0, 20.0, empty).is_empty());

        let single = WalkParams { days: 1, points_per_day: 1, volatility: 0.08 };
        let data = generate_outcome_time_series(&mut rng, fixed_now(), 10.0, 20.0, single);
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].value, 10.0);
    }
}
