// Chart generation settings, loaded from a JSON file or left at their defaults
use serde::Deserialize;
use std::path::Path;

use crate::error::{ChartError, Result};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    /// Window used for full market charts.
    pub full_days: u32,
    /// 96 points per day is one point every 15 minutes.
    pub full_points_per_day: u32,
    pub sparkline_days: u32,
    pub sparkline_volatility: f64,
    pub hours_per_candle: u32,
    /// Amplitude fraction used for hover-sparkline jitter.
    pub jitter_amplitude: f64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        ChartSettings {
            full_days: 30,
            full_points_per_day: 96,
            sparkline_days: 7,
            sparkline_volatility: 0.08,
            hours_per_candle: 6,
            jitter_amplitude: 0.15,
        }
    }
}

impl ChartSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: ChartSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&content)?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded chart settings");
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.full_points_per_day == 0 {
            return Err(ChartError::ConfigError("full_points_per_day must be greater than 0".to_string()));
        }
        if self.hours_per_candle == 0 {
            return Err(ChartError::ConfigError("hours_per_candle must be greater than 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = ChartSettings::from_json_str(r#"{ "hours_per_candle": 4 }"#).unwrap();
        assert_eq!(settings.hours_per_candle, 4);
        assert_eq!(settings.full_days, 30);
        assert_eq!(settings.full_points_per_day, 96);
        assert_eq!(settings.sparkline_days, 7);
    }

    #[test]
    fn test_zero_candle_width_rejected() {
        let err = ChartSettings::from_json_str(r#"{ "hours_per_candle": 0 }"#).unwrap_err();
        assert!(matches!(err, ChartError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "full_days": 14, "sparkline_volatility": 0.05 }}"#).unwrap();
        file.flush().unwrap();
        let settings = ChartSettings::load(file.path()).unwrap();
        assert_eq!(settings.full_days, 14);
        assert_eq!(settings.sparkline_volatility, 0.05);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ChartSettings::load("does_not_exist.json");
        assert!(matches!(result, Err(ChartError::IoError { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let result = ChartSettings::from_json_str("{ not json");
        assert!(matches!(result, Err(ChartError::JsonError { .. })));
    }
}
