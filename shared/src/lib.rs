pub mod models;
pub mod providers;
pub mod utils;

// Plain data shared by the chart engine and whatever renders its output.
