pub mod airports;
pub mod app;
pub mod chart;
pub mod client;
pub mod config;
pub mod errors;
pub mod fares;
pub mod handlers;
pub mod models;
pub mod series;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use client::FareSeriesBuilder;
pub use config::Config;
pub use errors::FetchError;
pub use state::AppState;
pub use storage::load_data;
