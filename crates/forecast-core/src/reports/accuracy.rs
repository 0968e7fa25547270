//! Forecast accuracy metrics
//!
//! Symmetric accuracy ratio between actual and predicted values, plus the
//! percentage formatting shared by the comparison report.

/// Symmetric accuracy ratio in `[0, 1]`
///
/// `min / max` of the two values when both are positive; `0.0` otherwise.
/// Symmetric: over- and under-prediction by the same factor score equally.
pub fn accuracy_ratio(actual: f64, predicted: f64) -> f64 {
    if actual > 0.0 && predicted > 0.0 {
        actual.min(predicted) / actual.max(predicted)
    } else {
        0.0
    }
}

/// Mean of a set of accuracy ratios, `0.0` when empty
pub fn mean_accuracy(ratios: &[f64]) -> f64 {
    if ratios.is_empty() {
        return 0.0;
    }
    ratios.iter().sum::<f64>() / ratios.len() as f64
}

/// Format a ratio as a percentage with one decimal place, e.g. `"80.0%"`
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_ratio_is_symmetric() {
        let a = accuracy_ratio(100.0, 80.0);
        let b = accuracy_ratio(80.0, 100.0);
        assert!((a - 0.8).abs() < 1e-10);
        assert!((a - b).abs() < 1e-10);
    }

    #[test]
    fn test_non_positive_values_score_zero() {
        assert_eq!(accuracy_ratio(0.0, 50.0), 0.0);
        assert_eq!(accuracy_ratio(50.0, 0.0), 0.0);
        assert_eq!(accuracy_ratio(-10.0, 50.0), 0.0);
        assert_eq!(accuracy_ratio(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_ratio_stays_in_unit_interval() {
        for (a, p) in [(1.0, 1000.0), (1000.0, 1.0), (37.0, 37.0)] {
            let r = accuracy_ratio(a, p);
            assert!((0.0..=1.0).contains(&r));
        }
        assert!((accuracy_ratio(37.0, 37.0) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_mean_accuracy() {
        assert_eq!(mean_accuracy(&[]), 0.0);
        assert!((mean_accuracy(&[0.5, 1.0]) - 0.75).abs() < 1e-10);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.8), "80.0%");
        assert_eq!(format_percent(0.0), "0.0%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.9667), "96.7%");
    }
}
