//! Forecast error types
//!
//! Defines the standardized error type for all forecasting operations.

use thiserror::Error;

/// Result type alias for forecasting operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// The input series contains no observations
    #[error("Empty series: at least one observation is required")]
    EmptySeries,

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,
}
