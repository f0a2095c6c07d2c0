// CSV export of generated line and candle series
use csv::Writer;
use serde::Serialize;
use shared::models::{CandleSeries, Series};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

#[derive(Serialize)]
struct LineRow<'a> {
    label: &'a str,
    time: i64,
    value: f64,
}

#[derive(Serialize)]
struct CandleRow<'a> {
    label: &'a str,
    time: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

/// Columns: label,time,value. One row per point, series in order.
pub fn write_series_csv<W: Write>(writer: W, series: &[Series]) -> Result<usize> {
    let mut wtr = Writer::from_writer(writer);
    let mut rows = 0;
    if series.iter().all(|s| s.data.is_empty()) {
        wtr.write_record(["label", "time", "value"])?;
    }
    for s in series {
        for point in &s.data {
            wtr.serialize(LineRow { label: &s.label, time: point.time, value: point.value })?;
            rows += 1;
        }
    }
    wtr.flush()?;
    Ok(rows)
}

/// Columns: label,time,open,high,low,close.
pub fn write_candles_csv<W: Write>(writer: W, series: &[CandleSeries]) -> Result<usize> {
    let mut wtr = Writer::from_writer(writer);
    let mut rows = 0;
    if series.iter().all(|s| s.data.is_empty()) {
        wtr.write_record(["label", "time", "open", "high", "low", "close"])?;
    }
    for s in series {
        for c in &s.data {
            wtr.serialize(CandleRow {
                label: &s.label,
                time: c.time,
                open: c.open,
                high: c.high,
                low: c.low,
                close: c.close,
            })?;
            rows += 1;
        }
    }
    wtr.flush()?;
    Ok(rows)
}

pub fn export_series_to_file(path: &Path, series: &[Series]) -> Result<usize> {
    let file = File::create(path)?;
    let rows = write_series_csv(file, series)?;
    tracing::info!(path = %path.display(), rows, "Exported line series");
    Ok(rows)
}

pub fn export_candles_to_file(path: &Path, series: &[CandleSeries]) -> Result<usize> {
    let file = File::create(path)?;
    let rows = write_candles_csv(file, series)?;
    tracing::info!(path = %path.display(), rows, "Exported candle series");
    Ok(rows)
}
