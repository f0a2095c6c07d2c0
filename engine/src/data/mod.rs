pub mod csv_export;
pub mod demo_cards;
pub mod market_data;

pub use csv_export::{write_candles_csv, write_series_csv};
pub use market_data::MarketCatalog;
