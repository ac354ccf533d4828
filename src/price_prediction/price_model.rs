use ndarray::{Array, ArrayD};
use ort::{inputs, session::Session, value::Value};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::price_prediction::PredictError;
use crate::price_prediction::feature_schema::FeatureRow;

// The session is behind Arc<tokio::sync::Mutex<>> because ort needs &mut
// for inference while actix shares the handle across workers.
enum ModelState {
    Ready(Arc<Mutex<Session>>),
    Unavailable(String),
}

/// Read-only handle around the trained ONNX artifact. Constructed once at
/// startup and injected into the handlers; a failed load yields an explicit
/// unavailable state instead of refusing to start.
pub struct PriceModel {
    state: ModelState,
}

impl PriceModel {
    /// Tries to load the artifact from `model_path`. Never fails: a broken or
    /// missing artifact produces an unavailable handle that answers every
    /// prediction with [`PredictError::ModelUnavailable`].
    pub fn load(model_path: &str) -> Self {
        match Session::builder().and_then(|mut builder| builder.commit_from_file(model_path)) {
            Ok(session) => {
                println!("Model loaded successfully from {}", model_path);
                PriceModel {
                    state: ModelState::Ready(Arc::new(Mutex::new(session))),
                }
            }
            Err(e) => {
                eprintln!("Could not load model from {}. Reason: {}", model_path, e);
                PriceModel::unavailable(&e.to_string())
            }
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        PriceModel {
            state: ModelState::Unavailable(reason.to_string()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, ModelState::Ready(_))
    }

    /// Runs one inference over a single validated row and returns the price
    /// estimate. The model output must be a finite scalar; anything else is
    /// reported as an inference error rather than passed through.
    pub async fn predict(&self, row: &FeatureRow) -> Result<f64, PredictError> {
        let session = match &self.state {
            ModelState::Ready(session) => session.clone(),
            ModelState::Unavailable(_) => return Err(PredictError::ModelUnavailable),
        };

        // The model consumes a one-row table, so reshape the flat row to (1, N).
        let input_array = Array::from_shape_vec((1, row.len()), row.values().to_vec())
            .map_err(|e| PredictError::Inference(e.to_string()))?;
        let input_array_dyn: ArrayD<f32> = input_array.into_dyn();
        let input_value =
            Value::from_array(input_array_dyn).map_err(|e| PredictError::Inference(e.to_string()))?;

        let (output_shape, output_data) = {
            let mut session_guard = session.lock().await;
            let session = &mut *session_guard;

            // Owned copies of the names to avoid borrowing the session twice.
            let input_name = session.inputs()[0].name().to_string();
            let output_name = session.outputs()[0].name().to_string();

            let outputs = session
                .run(inputs![input_name.as_str() => input_value])
                .map_err(|e| PredictError::Inference(e.to_string()))?;

            let (shape, data) = outputs[output_name.as_str()]
                .try_extract_tensor::<f32>()
                .map_err(|e| PredictError::Inference(e.to_string()))?;
            (shape.to_vec(), data.to_vec())
        };

        scalar_from_output(&output_shape, &output_data)
    }
}

/// Pulls the single price estimate out of the raw model output. Regression
/// output is (1, 1) or (1,); either way the scalar is first. Empty or
/// non-finite output is an inference error, never a result.
fn scalar_from_output(shape: &[i64], data: &[f32]) -> Result<f64, PredictError> {
    let prediction = match data.first() {
        Some(value) => *value as f64,
        None => {
            return Err(PredictError::Inference(format!(
                "model returned an empty output of shape {:?}",
                shape
            )));
        }
    };

    if !prediction.is_finite() {
        return Err(PredictError::Inference(
            "model returned a non-finite prediction".to_string(),
        ));
    }
    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_prediction::feature_schema::FEATURE_COLUMNS;
    use std::collections::HashMap;

    fn zeroed_row() -> FeatureRow {
        let features: HashMap<String, f64> = FEATURE_COLUMNS
            .iter()
            .map(|column| (column.to_string(), 0.0))
            .collect();
        FeatureRow::from_map(&features).unwrap()
    }

    #[tokio::test]
    async fn missing_artifact_marks_model_unavailable() {
        let model = PriceModel::load("models/does_not_exist.onnx");
        assert!(!model.is_loaded());
    }

    #[tokio::test]
    async fn unavailable_model_rejects_every_prediction() {
        let model = PriceModel::unavailable("artifact missing");
        let err = model.predict(&zeroed_row()).await.unwrap_err();
        assert_eq!(err.to_string(), "Model not loaded on server.");
    }

    #[test]
    fn scalar_output_passes_through() {
        assert_eq!(scalar_from_output(&[1, 1], &[14250.75]).unwrap(), 14250.75_f32 as f64);
        assert_eq!(scalar_from_output(&[1], &[999.0]).unwrap(), 999.0);
    }

    #[test]
    fn empty_output_is_an_inference_error() {
        let err = scalar_from_output(&[0], &[]).unwrap_err();
        assert!(err.to_string().starts_with("Prediction Error: "));
    }

    #[test]
    fn non_finite_output_is_an_inference_error() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let err = scalar_from_output(&[1, 1], &[bad]).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Prediction Error: model returned a non-finite prediction"
            );
        }
    }
}
