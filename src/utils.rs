use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub bind_address: String,
    pub model_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: "0.0.0.0:8000".to_string(),
            model_path: "models/car_price_model.onnx".to_string(),
        }
    }
}

pub fn load_config() -> Config {
    // Loads configuration file. Keys:
    //    bind_address: where the HTTP server listens
    //    model_path: the model artifact exported by the training pipeline
    match std::fs::read_to_string("config.yaml") {
        Ok(config_content) => match serde_yaml::from_str::<Config>(&config_content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to parse config.yaml: {}, using defaults",
                    e
                );
                Config::default()
            }
        },
        Err(_) => {
            eprintln!("Warning: config.yaml not found, using defaults");
            Config::default()
        }
    }
}
