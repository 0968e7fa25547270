//! Time series prediction algorithms
//!
//! The trend and demand endpoints share a single model: ordinary
//! least-squares linear regression over equally-spaced time steps.

pub mod linear_regression;

pub use linear_regression::LinearRegression;

/// Common trait for time series predictors
pub trait Predictor {
    /// Fit the model to historical data
    fn fit(&mut self, data: &[f64]) -> crate::Result<()>;

    /// Predict future values
    fn predict(&self, steps: usize) -> crate::Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
