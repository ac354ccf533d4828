use serde_json::{Map, Value};

use crate::api::api_objects::PredictionResponse;

/// The three possible results of one submit: a price, an error body from the
/// backend, or no connection at all. Exactly one of these happens per call.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictOutcome {
    Price(f64),
    BackendError(String),
    Unreachable(String),
}

/// One synchronous round trip to the prediction endpoint. No retries and no
/// timeout, matching the reference form behavior.
pub fn request_prediction(endpoint: &str, features: &Map<String, Value>) -> PredictOutcome {
    let client = reqwest::blocking::Client::new();
    match client.post(endpoint).json(features).send() {
        Ok(response) => {
            if response.status().is_success() {
                match response.json::<PredictionResponse>() {
                    Ok(body) => PredictOutcome::Price(body.prediction),
                    Err(e) => {
                        PredictOutcome::BackendError(format!("unreadable response body: {}", e))
                    }
                }
            } else {
                // Show the raw error body, which carries the `detail` message.
                let body = response.text().unwrap_or_default();
                PredictOutcome::BackendError(body)
            }
        }
        Err(e) => PredictOutcome::Unreachable(e.to_string()),
    }
}

/// Two-decimal, thousands-separated dollar rendering, e.g. `$14,250.75`.
/// A non-finite value from a non-conforming backend is rendered as-is
/// instead of going through the digit-grouping path.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
