pub mod api;
pub mod client;
pub mod price_prediction;
pub mod utils;
