//! Demand forecasts with confidence bands
//!
//! Sums linear-trend predictions over a forecast horizon and derives a
//! symmetric uncertainty band from the in-sample residual spread.

use crate::algorithms::{LinearRegression, Predictor};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Z-score for a ~95% confidence interval
const Z_95: f64 = 1.96;

/// Demand forecast over a fixed horizon
///
/// All values are unrounded; callers round at the serialization edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandForecast {
    /// Summed point forecast over the horizon
    pub point: f64,
    /// Lower bound, clamped to be non-negative
    pub lower: f64,
    /// Upper bound, clamped to never fall below `lower`
    pub upper: f64,
    /// Half-width of the confidence band
    pub band: f64,
    /// Per-step future predictions
    pub future: Vec<f64>,
}

impl DemandForecast {
    /// Confidence label of the form `"±P%"`
    ///
    /// `P` is the band as a percentage of the point forecast, rounded and
    /// capped at 100. A zero point forecast reports `"±0%"`.
    pub fn confidence_label(&self) -> String {
        let pct = if self.point == 0.0 {
            0
        } else {
            ((100.0 * self.band / self.point.max(1e-6)).round() as i64).min(100)
        };
        format!("±{}%", pct)
    }
}

/// Forecast demand over the next `horizon` time steps
///
/// Fits a linear trend to the observed units, predicts the `horizon` future
/// indices (none when `horizon <= 0`), and widens the band linearly with the
/// horizon length: `band = 1.96 * std(residuals) * max(1, horizon)`.
///
/// Returns an error only when `units` is empty; callers guard first.
pub fn forecast_demand(units: &[f64], horizon: i64) -> Result<DemandForecast> {
    let mut model = LinearRegression::new();
    model.fit(units)?;

    let future = model.predict(horizon.max(0) as usize)?;
    let point: f64 = future.iter().sum();

    let residuals = model.residuals(units);
    let std_dev = population_std(&residuals);
    let band = Z_95 * std_dev * horizon.max(1) as f64;

    let lower = (point - band).max(0.0);
    let upper = (point + band).max(lower);

    Ok(DemandForecast {
        point,
        lower,
        upper,
        band,
        future,
    })
}

/// Population standard deviation
fn population_std(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;

    #[test]
    fn test_perfect_trend_has_no_band() {
        let units = vec![10.0, 12.0, 14.0];
        let result = forecast_demand(&units, 2).unwrap();

        // Residuals are all zero, so the band collapses
        assert!((result.band - 0.0).abs() < 1e-10);
        assert!((result.future[0] - 16.0).abs() < 1e-10);
        assert!((result.future[1] - 18.0).abs() < 1e-10);
        assert!((result.point - 34.0).abs() < 1e-10);
        assert!((result.lower - 34.0).abs() < 1e-10);
        assert!((result.upper - 34.0).abs() < 1e-10);
        assert_eq!(result.confidence_label(), "±0%");
    }

    #[test]
    fn test_band_widens_with_horizon() {
        let units = vec![10.0, 20.0, 10.0, 20.0, 10.0, 20.0];

        let short = forecast_demand(&units, 1).unwrap();
        let long = forecast_demand(&units, 4).unwrap();

        assert!(long.band > short.band);
        assert!((long.band / short.band - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_horizon_keeps_band_floor() {
        let units = vec![10.0, 20.0, 10.0, 20.0];

        let result = forecast_demand(&units, 0).unwrap();
        assert!(result.future.is_empty());
        assert!((result.point - 0.0).abs() < 1e-10);
        // max(1, horizon) keeps the band from collapsing
        assert!(result.band > 0.0);
        assert!((result.lower - 0.0).abs() < 1e-10);
        assert!(result.upper >= result.lower);

        let negative = forecast_demand(&units, -3).unwrap();
        assert!(negative.future.is_empty());
        assert!((negative.band - result.band).abs() < 1e-10);
    }

    #[test]
    fn test_bounds_hold_for_negative_units() {
        let units = vec![-5.0, -10.0, -15.0, -20.0];
        let result = forecast_demand(&units, 3).unwrap();

        assert!(result.lower >= 0.0);
        assert!(result.upper >= result.lower);
    }

    #[test]
    fn test_empty_units_is_an_error() {
        assert_eq!(
            forecast_demand(&[], 3).unwrap_err(),
            ForecastError::EmptySeries
        );
    }

    #[test]
    fn test_confidence_label_caps_at_100() {
        let forecast = DemandForecast {
            point: 10.0,
            lower: 0.0,
            upper: 60.0,
            band: 50.0,
            future: vec![10.0],
        };
        // 50 / 10 = 500%, capped
        assert_eq!(forecast.confidence_label(), "±100%");
    }

    #[test]
    fn test_confidence_label_rounds() {
        let forecast = DemandForecast {
            point: 66.0,
            lower: 39.7,
            upper: 92.3,
            band: 26.3,
            future: vec![20.0, 22.0, 24.0],
        };
        // 26.3 / 66 = 39.85% -> 40
        assert_eq!(forecast.confidence_label(), "±40%");
    }

    #[test]
    fn test_population_std() {
        assert!((population_std(&[]) - 0.0).abs() < 1e-10);
        assert!((population_std(&[3.0]) - 0.0).abs() < 1e-10);
        assert!((population_std(&[-2.0, 2.0]) - 2.0).abs() < 1e-10);
    }
}
