//! # forecast-core
//!
//! Trend and demand forecasting over numeric time series.
//! This is the core library of the forecast API.
//!
//! ## Capabilities
//!
//! - **Linear Regression** - Ordinary least-squares trend fitting over
//!   equally-spaced time steps
//! - **Demand Forecast** - Summed horizon forecast with a residual-based
//!   confidence band
//! - **Reports** - Forecast error histograms and accuracy comparison
//!
//! ## Example
//!
//! ```rust
//! use forecast_core::prelude::*;
//!
//! let data = vec![10.0, 20.0, 30.0];
//! let mut model = LinearRegression::new();
//! model.fit(&data).unwrap();
//! let next = model.predict_at(data.len() as f64).unwrap();
//! assert!((next - 40.0).abs() < 1e-10);
//! ```

pub mod algorithms;
pub mod forecast;
pub mod reports;
mod error;

pub use error::{ForecastError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::linear_regression::LinearRegression;
    pub use crate::algorithms::Predictor;
    pub use crate::error::{ForecastError, Result};
    pub use crate::forecast::demand::{forecast_demand, DemandForecast};
    pub use crate::reports::accuracy::{accuracy_ratio, format_percent, mean_accuracy};
    pub use crate::reports::histogram::{residual_histogram, HistogramBin};
}
