use actix_web::{HttpResponse, Responder, web};
use std::collections::HashMap;

use crate::api::api_objects::{ErrorDetail, HealthResponse, PredictionResponse};
use crate::price_prediction::PredictError;
use crate::price_prediction::feature_schema::FeatureRow;
use crate::price_prediction::price_model::PriceModel;

fn error_response(error: &PredictError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorDetail {
        detail: error.to_string(),
    })
}

/// POST /predict: flat feature-name -> number map in, `{"prediction": n}` out.
/// The unavailable-model check comes first so a dead artifact answers the same
/// way no matter what the caller sent.
pub async fn handle_predict(
    features: web::Json<HashMap<String, f64>>,
    model: web::Data<PriceModel>,
) -> impl Responder {
    if !model.is_loaded() {
        return error_response(&PredictError::ModelUnavailable);
    }

    let row = match FeatureRow::from_map(&features) {
        Ok(row) => row,
        Err(e) => return error_response(&e),
    };

    match model.predict(&row).await {
        Ok(prediction) => HttpResponse::Ok().json(PredictionResponse { prediction }),
        Err(e) => error_response(&e),
    }
}

pub async fn handle_health(model: web::Data<PriceModel>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: model.is_loaded(),
    })
}
