use actix_web::{App, HttpServer, web};
use anyhow::Context;

use car_valuation::api::api_handlers::{handle_health, handle_predict};
use car_valuation::price_prediction::price_model::PriceModel;
use car_valuation::utils::load_config;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();

    // Load once, share read-only across workers. A failed load keeps the
    // server up; /predict answers 500 until a restart with a working artifact.
    let model = web::Data::new(PriceModel::load(&config.model_path));

    println!("Server listening on {}", config.bind_address);
    HttpServer::new(move || {
        App::new()
            .app_data(model.clone())
            .route("/predict", web::post().to(handle_predict))
            .route("/health", web::get().to(handle_health))
    })
    .bind(config.bind_address.as_str())
    .with_context(|| format!("failed to bind {}", config.bind_address))?
    .run()
    .await?;
    Ok(())
}
