//! Forecast quality reports
//!
//! Residual histograms and accuracy comparisons between actual and
//! predicted values.

pub mod accuracy;
pub mod histogram;

pub use accuracy::{accuracy_ratio, format_percent, mean_accuracy};
pub use histogram::{residual_histogram, HistogramBin};
