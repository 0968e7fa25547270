//! API route handlers
//!
//! Every handler is a pure request/response transform. Missing fields
//! default to zero or empty; empty input collections yield degenerate
//! defaults instead of error status codes.

use axum::Json;
use forecast_core::prelude::*;
use serde::{Deserialize, Serialize};

fn default_horizon() -> i64 {
    3
}

// ============================================================================
// Trend forecast
// ============================================================================

/// One observation in a trend series; index = time step
#[derive(Debug, Deserialize)]
pub struct SeriesPoint {
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Deserialize)]
pub struct TrendRequest {
    #[serde(default)]
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, Serialize)]
pub struct TrendResponse {
    pub predicted: Vec<f64>,
    pub next: f64,
    pub r2: f64,
}

pub async fn trend(Json(req): Json<TrendRequest>) -> Json<TrendResponse> {
    let values: Vec<f64> = req.series.iter().map(|p| p.value).collect();
    if values.is_empty() {
        return Json(TrendResponse {
            predicted: Vec::new(),
            next: 0.0,
            r2: 0.0,
        });
    }

    let mut model = LinearRegression::new();
    model.fit(&values).unwrap();

    Json(TrendResponse {
        predicted: model.fitted_values().unwrap(),
        next: model.predict_at(values.len() as f64).unwrap(),
        r2: model.r_squared(),
    })
}

// ============================================================================
// Demand forecast
// ============================================================================

/// One observation in a demand series; index = time step
#[derive(Debug, Deserialize)]
pub struct DemandItem {
    #[serde(default)]
    pub units: f64,
}

#[derive(Debug, Deserialize)]
pub struct DemandRequest {
    #[serde(default)]
    pub items: Vec<DemandItem>,
    #[serde(default = "default_horizon")]
    pub horizon: i64,
}

#[derive(Debug, Serialize)]
pub struct DemandResponse {
    pub point: i64,
    pub lower: i64,
    pub upper: i64,
    pub confidence: String,
    pub future: Vec<f64>,
}

pub async fn demand(Json(req): Json<DemandRequest>) -> Json<DemandResponse> {
    let units: Vec<f64> = req.items.iter().map(|i| i.units).collect();
    if units.is_empty() {
        return Json(DemandResponse {
            point: 0,
            lower: 0,
            upper: 0,
            confidence: "±0%".to_string(),
            future: Vec::new(),
        });
    }

    let forecast = forecast_demand(&units, req.horizon).unwrap();

    Json(DemandResponse {
        point: forecast.point.round() as i64,
        lower: forecast.lower.round() as i64,
        upper: forecast.upper.round() as i64,
        confidence: forecast.confidence_label(),
        future: forecast.future,
    })
}

// ============================================================================
// Forecast error histogram
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ErrorsRequest {
    #[serde(default)]
    pub actual: Vec<f64>,
    #[serde(default)]
    pub predicted: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub hist: Vec<HistogramBin>,
}

pub async fn errors(Json(req): Json<ErrorsRequest>) -> Json<ErrorsResponse> {
    Json(ErrorsResponse {
        hist: residual_histogram(&req.actual, &req.predicted),
    })
}

// ============================================================================
// Forecast comparison
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CompareRow {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub actual: f64,
    #[serde(default)]
    pub predicted: f64,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub rows: Vec<CompareRow>,
}

#[derive(Debug, Serialize)]
pub struct ComparedRow {
    pub event: String,
    pub actual: i64,
    pub predicted: i64,
    pub accuracy: String,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub rows: Vec<ComparedRow>,
    pub average: String,
}

pub async fn compare(Json(req): Json<CompareRequest>) -> Json<CompareResponse> {
    let mut rows = Vec::with_capacity(req.rows.len());
    let mut ratios = Vec::with_capacity(req.rows.len());

    for row in req.rows {
        let ratio = accuracy_ratio(row.actual, row.predicted);
        ratios.push(ratio);
        rows.push(ComparedRow {
            event: row.event,
            actual: row.actual.round() as i64,
            predicted: row.predicted.round() as i64,
            accuracy: format_percent(ratio),
        });
    }

    let average = format_percent(mean_accuracy(&ratios));

    Json(CompareResponse { rows, average })
}
