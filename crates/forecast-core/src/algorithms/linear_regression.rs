//! Linear Regression for time series forecasting
//!
//! Uses ordinary least squares (OLS) to fit a linear trend to time series
//! data indexed by position. Observations are treated as zero-indexed,
//! equally-spaced time steps.

use crate::algorithms::Predictor;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Linear Regression model for time series
///
/// Fits y = intercept + slope * t where t is the time index.
///
/// A single observation (or any series with a degenerate OLS denominator)
/// fits a flat line at the series mean.
///
/// # Example
///
/// ```rust
/// use forecast_core::algorithms::linear_regression::LinearRegression;
/// use forecast_core::algorithms::Predictor;
///
/// let data = vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0];
/// let mut model = LinearRegression::new();
/// model.fit(&data).unwrap();
///
/// let forecast = model.predict(3).unwrap();
/// // Predicts approximately [22, 24, 26]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Y-intercept
    intercept: f64,
    /// Slope (trend per time unit)
    slope: f64,
    /// Number of observations used in fitting
    n_observations: usize,
    /// R-squared value
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Create a new linear regression model
    pub fn new() -> Self {
        Self {
            intercept: 0.0,
            slope: 0.0,
            n_observations: 0,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Get the slope (trend per time unit)
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get R-squared (coefficient of determination)
    ///
    /// `0.0` for a constant series, where the total sum of squares is zero.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Predict value at a specific time index
    pub fn predict_at(&self, t: f64) -> Result<f64> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        Ok(self.intercept + self.slope * t)
    }

    /// Fitted values at each observed time index
    pub fn fitted_values(&self) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }
        Ok((0..self.n_observations)
            .map(|i| self.intercept + self.slope * i as f64)
            .collect())
    }

    /// Get residuals (observed minus fitted) from the fit
    pub fn residuals(&self, data: &[f64]) -> Vec<f64> {
        if !self.fitted {
            return Vec::new();
        }

        data.iter()
            .enumerate()
            .map(|(i, &y)| y - (self.intercept + self.slope * i as f64))
            .collect()
    }
}

impl Predictor for LinearRegression {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        let n = data.len() as f64;
        self.n_observations = data.len();

        // Time indices: 0, 1, 2, ...
        let sum_t: f64 = (0..data.len()).map(|i| i as f64).sum();
        let sum_y: f64 = data.iter().sum();
        let sum_t2: f64 = (0..data.len()).map(|i| (i * i) as f64).sum();
        let sum_ty: f64 = data.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();

        // OLS formulas; a singular denominator (single point) degenerates
        // to a flat line at the mean
        let denominator = n * sum_t2 - sum_t * sum_t;
        if denominator.abs() < 1e-10 {
            self.slope = 0.0;
            self.intercept = sum_y / n;
        } else {
            self.slope = (n * sum_ty - sum_t * sum_y) / denominator;
            self.intercept = (sum_y - self.slope * sum_t) / n;
        }

        // Calculate R-squared
        let mean_y = sum_y / n;
        let ss_tot: f64 = data.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let predicted = self.intercept + self.slope * i as f64;
                (y - predicted).powi(2)
            })
            .sum();

        self.r_squared = if ss_tot > 0.0 {
            1.0 - ss_res / ss_tot
        } else {
            0.0
        };

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }

        let mut forecasts = Vec::with_capacity(steps);
        for i in 0..steps {
            let t = (self.n_observations + i) as f64;
            forecasts.push(self.intercept + self.slope * t);
        }

        Ok(forecasts)
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
