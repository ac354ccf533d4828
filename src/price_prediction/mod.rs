pub mod feature_schema;
pub mod price_model;

use thiserror::Error;

/// Everything that can go wrong between receiving a feature map and
/// returning a price. The Display strings are the wire-level `detail`
/// messages, so they must stay stable.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("Model not loaded on server.")]
    ModelUnavailable,

    #[error("Prediction Error: missing required feature '{0}'")]
    MissingFeature(&'static str),

    #[error("Prediction Error: {0}")]
    Inference(String),
}
