// Zoom presets: each period shows a fixed look-back window ending at the latest point
use serde::Serialize;
use shared::models::{TimePeriod, TimePoint};

const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    pub from: i64,
    pub to: i64,
}

impl TimeRange {
    pub fn contains(&self, time: i64) -> bool {
        self.from <= time && time <= self.to
    }
}

pub fn lookback_seconds(period: TimePeriod) -> i64 {
    match period {
        TimePeriod::Minutes15 => 6 * SECONDS_PER_HOUR,
        TimePeriod::Hour1 => 2 * SECONDS_PER_DAY,
        TimePeriod::Hours6 => 7 * SECONDS_PER_DAY,
        TimePeriod::Day1 => 14 * SECONDS_PER_DAY,
        TimePeriod::All => 30 * SECONDS_PER_DAY,
    }
}

/// `latest_time` is unix seconds.
pub fn get_visible_time_range(period: TimePeriod, latest_time: i64) -> TimeRange {
    TimeRange {
        from: latest_time - lookback_seconds(period),
        to: latest_time,
    }
}

/// Points of `data` inside `range`. Data stays untouched; zooming never regenerates.
pub fn visible_points(data: &[TimePoint], range: TimeRange) -> &[TimePoint] {
    let start = data.partition_point(|p| p.time < range.from);
    let end = data.partition_point(|p| p.time <= range.to);
    &data[start..end.max(start)]
}
