//! Forecast construction on top of the fitted trend model

pub mod demand;

pub use demand::{forecast_demand, DemandForecast};
