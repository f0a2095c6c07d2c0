// Multi-outcome chart data whose starting values sum to 100
use chrono::{DateTime, Utc};
use rand::Rng;
use shared::models::{Outcome, OutcomeSpec, Series};

use super::outcome::{generate_outcome_time_series, WalkParams, OUTCOME_MAX, OUTCOME_MIN};

pub const FULL_CHART_DAYS: u32 = 30;
/// 15-minute granularity.
pub const FULL_CHART_POINTS_PER_DAY: u32 = 96;

pub const MAX_CARD_OUTCOMES: usize = 7;
pub const OUTCOME_PALETTE: [&str; MAX_CARD_OUTCOMES] = [
    "#FFFFFF", // White
    "#179F61", // Green
    "#0BA5EC", // Blue
    "#DCF58D", // Yellow-green
    "#EE46BC", // Pink
    "#7A5AF8", // Purple
    "#F79009", // Orange
];
pub const YES_COLOR: &str = "#31D482";
pub const NO_COLOR: &str = "#F97066";

const START_VARIANCE: f64 = 0.8; // -40% to +40%
const MIN_VOLATILITY: f64 = 0.08;
const VOLATILITY_SPREAD: f64 = 0.04;

/// Full 30-day chart at 15-minute resolution.
pub fn generate_prediction_market_chart_data<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    outcomes: &[OutcomeSpec],
) -> Vec<Series> {
    generate_market_series(rng, now, outcomes, FULL_CHART_DAYS, FULL_CHART_POINTS_PER_DAY)
}

/// Same as [`generate_prediction_market_chart_data`] over a caller-chosen window.
///
/// Outcomes walk independently once their starting values are normalized, so
/// the sum-to-100 property holds at the first timestamp only.
pub fn generate_market_series<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    outcomes: &[OutcomeSpec],
    days: u32,
    points_per_day: u32,
) -> Vec<Series> {
    if outcomes.is_empty() {
        return Vec::new();
    }

    let raw_starts: Vec<f64> = outcomes
        .iter()
        .map(|o| {
            let variance = (rng.gen::<f64>() - 0.5) * START_VARIANCE;
            (o.current_probability * (1.0 + variance)).max(OUTCOME_MIN)
        })
        .collect();
    let start_sum: f64 = raw_starts.iter().sum();
    let normalized: Vec<f64> = raw_starts.iter().map(|v| v / start_sum * 100.0).collect();
    let starts = apportion_cents(&normalized);

    let series: Vec<Series> = outcomes
        .iter()
        .zip(starts)
        .map(|(outcome, start)| {
            let volatility = MIN_VOLATILITY + rng.gen::<f64>() * VOLATILITY_SPREAD;
            let params = WalkParams { days, points_per_day, volatility };
            Series {
                label: outcome.label.clone(),
                color: Some(outcome.color.clone()),
                data: generate_outcome_time_series(&mut *rng, now, start, outcome.current_probability, params),
            }
        })
        .collect();

    tracing::debug!(
        outcomes = series.len(),
        points = series.first().map_or(0, |s| s.data.len()),
        "Generated prediction market chart data"
    );
    series
}

/// Rounds normalized starting values to cents while keeping their total at
/// exactly 100.00 and each value inside the outcome bounds.
///
/// Largest-remainder apportionment: floor every value, then hand the missing
/// cents to the values that lost the most to flooring. With a single outcome
/// (or more than 200) the bounds cannot all hold and the values are only
/// clamped.
fn apportion_cents(normalized: &[f64]) -> Vec<f64> {
    const TOTAL: i64 = 10_000;
    let lo = (OUTCOME_MIN * 100.0) as i64;
    let hi = (OUTCOME_MAX * 100.0) as i64;

    let n = normalized.len() as i64;
    if n * lo > TOTAL || n * hi < TOTAL {
        return normalized.iter().map(|v| v.clamp(OUTCOME_MIN, OUTCOME_MAX)).collect();
    }

    let exact: Vec<f64> = normalized.iter().map(|v| v * 100.0).collect();
    let mut cents: Vec<i64> = exact.iter().map(|e| (e.floor() as i64).clamp(lo, hi)).collect();
    let mut missing = TOTAL - cents.iter().sum::<i64>();

    while missing != 0 {
        let remainder = |i: usize| exact[i] - cents[i] as f64;
        let pick = if missing > 0 {
            (0..cents.len())
                .filter(|&i| cents[i] < hi)
                .max_by(|&a, &b| remainder(a).total_cmp(&remainder(b)))
        } else {
            (0..cents.len())
                .filter(|&i| cents[i] > lo)
                .min_by(|&a, &b| remainder(a).total_cmp(&remainder(b)))
        };
        let Some(idx) = pick else { break };
        let delta = missing.signum();
        cents[idx] += delta;
        missing -= delta;
    }

    cents.into_iter().map(|c| c as f64 / 100.0).collect()
}

/// Chart data for a card: its outcomes when it has any (at most seven,
/// coloured from the palette), otherwise a Yes/No pair defaulting to 50/50.
pub fn get_card_chart_data<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    outcomes: Option<&[Outcome]>,
    yes_percentage: Option<f64>,
    no_percentage: Option<f64>,
) -> Vec<Series> {
    let specs = card_outcome_specs(outcomes, yes_percentage, no_percentage);
    generate_prediction_market_chart_data(rng, now, &specs)
}

pub(crate) fn card_outcome_specs(
    outcomes: Option<&[Outcome]>,
    yes_percentage: Option<f64>,
    no_percentage: Option<f64>,
) -> Vec<OutcomeSpec> {
    match outcomes {
        Some(list) if !list.is_empty() => list
            .iter()
            .take(MAX_CARD_OUTCOMES)
            .zip(OUTCOME_PALETTE.iter().cycle())
            .map(|(o, color)| OutcomeSpec::new(&o.label, color, o.probability))
            .collect(),
        _ => {
            if yes_percentage.is_none() || no_percentage.is_none() {
                tracing::warn!(?yes_percentage, ?no_percentage, "Missing Yes/No percentage, defaulting to 50");
            }
            vec![
                OutcomeSpec::new("Yes", YES_COLOR, yes_percentage.unwrap_or(50.0)),
                OutcomeSpec::new("No", NO_COLOR, no_percentage.unwrap_or(50.0)),
            ]
        }
    }
}

/// Preset for the Federal Reserve rate decision market.
pub fn get_fed_rate_decision_chart_data<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<Series> {
    generate_prediction_market_chart_data(
        rng,
        now,
        &[
            OutcomeSpec::new("25 bps decrease", "#FFFFFF", 80.0),
            OutcomeSpec::new("50+ bps decrease", "#179F61", 15.8),
            OutcomeSpec::new("No change", "#0BA5EC", 4.5),
            OutcomeSpec::new("25+ bps increase", "#DCF58D", 0.7),
        ],
    )
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

    fn first_sum(series: &[Series]) -> f64 {
        series.iter().map(|s| s.data[0].value).sum()
    }

    fn outcome(label: &str, probability: f64) -> Outcome {
        Outcome { label: label.to_string(), probability, volume: None }
    }

    #[test]
    fn test_yes_no_fallback_end_to_end() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let series = get_card_chart_data(&mut rng, fixed_now(), None, Some(70.0), Some(30.0));
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Yes");
        assert_eq!(series[1].label, "No");
        assert_eq!(series[0].color.as_deref(), Some(YES_COLOR));
        assert_eq!(series[1].color.as_deref(), Some(NO_COLOR));
        for s in &series {
            assert_eq!(s.data.len(), 30 * 96);
        }
        assert!((first_sum(&series) - 100.0).abs() < 1e-6);
        assert!((series[0].data.last().unwrap().value - 70.0).abs() <= 2.0);
        assert!((series[1].data.last().unwrap().value - 30.0).abs() <= 2.0);
    }

    #[test]
    fn test_missing_percentages_default_to_even_market() {
        let specs = card_outcome_specs(None, None, None);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].current_probability, 50.0);
        assert_eq!(specs[1].current_probability, 50.0);

        let no_outcomes: &[Outcome] = &[];
        let specs = card_outcome_specs(Some(no_outcomes), Some(12.0), None);
        assert_eq!(specs[0].current_probability, 12.0);
        assert_eq!(specs[1].current_probability, 50.0);
    }

    #[test]
    fn test_card_outcomes_capped_and_coloured() {
        let outcomes: Vec<Outcome> = (0..9).map(|i| outcome(&format!("O{}", i), 10.0)).collect();
        let specs = card_outcome_specs(Some(outcomes.as_slice()), Some(1.0), Some(99.0));
        assert_eq!(specs.len(), MAX_CARD_OUTCOMES);
        assert_eq!(specs[0].color, "#FFFFFF");
        assert_eq!(specs[6].color, "#F79009");
        assert_eq!(specs[6].label, "O6");
    }

    #[test]
    fn test_first_values_sum_to_hundred_for_many_markets() {
        for seed in 0..25 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let series = get_fed_rate_decision_chart_data(&mut rng, fixed_now());
            assert_eq!(series.len(), 4);
            assert!((first_sum(&series) - 100.0).abs() < 1e-6, "seed {}: {}", seed, first_sum(&series));
            for s in &series {
                assert!(s.data.iter().all(|p| (OUTCOME_MIN..=OUTCOME_MAX).contains(&p.value)));
            }
        }
    }

    #[test]
    fn test_zero_probability_outcomes_respect_bounds() {
        let specs = vec![
            OutcomeSpec::new("A", "#fff", 0.0),
            OutcomeSpec::new("B", "#fff", 0.0),
            OutcomeSpec::new("C", "#fff", 100.0),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let series = generate_market_series(&mut rng, fixed_now(), &specs, 2, 24);
        assert!((first_sum(&series) - 100.0).abs() < 1e-6);
        assert!(series.iter().all(|s| s.data[0].value >= OUTCOME_MIN));
    }

    #[test]
    fn test_apportion_keeps_total() {
        let starts = apportion_cents(&[100.0 / 3.0, 100.0 / 3.0, 100.0 / 3.0]);
        let total: f64 = starts.iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(starts.iter().filter(|v| **v == 33.34).count(), 1);

        let single = apportion_cents(&[100.0]);
        assert_eq!(single, vec![OUTCOME_MAX]);
    }

    #[test]
    fn test_empty_outcomes() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(generate_prediction_market_chart_data(&mut rng, fixed_now(), &[]).is_empty());
    }
}
