// Line series to OHLC candle aggregation
use shared::models::{CandlePoint, CandleSeries, Series, TimePoint};
use shared::utils::round2;

/// Four candles per day.
pub const DEFAULT_HOURS_PER_CANDLE: u32 = 6;

struct Bucket {
    time: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl Bucket {
    fn start(time: i64, value: f64) -> Self {
        Self { time, open: value, high: value, low: value, close: value }
    }

    fn push(&mut self, value: f64) {
        self.high = self.high.max(value);
        self.low = self.low.min(value);
        self.close = value;
    }

    fn finish(self) -> CandlePoint {
        CandlePoint {
            time: self.time,
            open: round2(self.open),
            high: round2(self.high),
            low: round2(self.low),
            close: round2(self.close),
        }
    }
}

/// Groups points into epoch-aligned windows of `hours_per_candle` hours.
///
/// Points are taken in arrival order; a window closes as soon as a point from
/// a different window arrives, and the trailing partial window is emitted as
/// a shorter candle. A width of zero is treated as one hour.
pub fn convert_to_candlestick_data(line_data: &[TimePoint], hours_per_candle: u32) -> Vec<CandlePoint> {
    if line_data.is_empty() {
        return Vec::new();
    }
    if hours_per_candle == 0 {
        tracing::warn!("Candle width of 0 hours requested, using 1 hour");
    }
    let window = i64::from(hours_per_candle.max(1)) * 3600;

    let mut candles = Vec::new();
    let mut current: Option<Bucket> = None;

    for point in line_data {
        let bucket_time = point.time.div_euclid(window) * window;
        if let Some(bucket) = current.as_mut().filter(|b| b.time == bucket_time) {
            bucket.push(point.value);
            continue;
        }
        if let Some(done) = current.take() {
            candles.push(done.finish());
        }
        current = Some(Bucket::start(bucket_time, point.value));
    }
    if let Some(done) = current {
        candles.push(done.finish());
    }
    candles
}

/// Converts every series, keeping labels.
pub fn convert_line_to_candlestick_data(line_series: &[Series], hours_per_candle: u32) -> Vec<CandleSeries> {
    line_series
        .iter()
        .map(|series| CandleSeries {
            label: series.label.clone(),
            data: convert_to_candlestick_data(&series.data, hours_per_candle),
        })
        .collect()
}
