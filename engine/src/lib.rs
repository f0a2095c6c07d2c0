// Chart engine library root
pub mod candles;
pub mod config;
pub mod data;
pub mod error;
pub mod search;
pub mod state;
pub mod synth;
pub mod time_range;

pub use error::{ChartError, Result};
