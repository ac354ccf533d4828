use clap::Parser;

use car_valuation::client::backend::{PredictOutcome, format_currency, request_prediction};
use car_valuation::client::encoder::encode_features;
use car_valuation::client::form::{CarForm, Category, Color, DriveWheels, FuelType, GearboxType};

/// Command-line stand-in for the valuation form: each flag is one form
/// control, defaults match the form's initial state. One submit, one
/// synchronous round trip.
#[derive(Parser, Debug)]
#[command(name = "valuation-client", about = "Ask the backend for a price estimate")]
struct Cli {
    /// Prediction endpoint of the backend server
    #[arg(long, default_value = "http://127.0.0.1:8000/predict")]
    endpoint: String,

    /// Manufacturing year
    #[arg(long, default_value_t = 2018, value_parser = clap::value_parser!(u32).range(1950..=2026))]
    year: u32,

    /// Leather interior (yes/no)
    #[arg(long, default_value = "yes", value_parser = parse_yes_no)]
    leather_interior: bool,

    /// Steering side (left/right)
    #[arg(long, default_value = "left", value_parser = parse_steering)]
    steering: bool,

    /// Number of airbags
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(0..=16))]
    airbags: u32,

    /// Exterior color
    #[arg(long, value_enum, default_value = "red")]
    color: Color,

    /// Body category
    #[arg(long, value_enum, default_value = "sedan")]
    category: Category,

    /// Engine volume in liters (0.0 - 10.0)
    #[arg(long, default_value_t = 2.0, value_parser = parse_engine_volume)]
    engine_volume: f64,

    /// Cylinder count
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=16))]
    cylinders: u32,

    /// Engine type (turbo/non-turbo)
    #[arg(long, default_value = "non-turbo", value_parser = parse_engine_type)]
    engine_type: bool,

    /// Drive configuration
    #[arg(long, value_enum, default_value = "fwd")]
    drive_wheels: DriveWheels,

    /// Gearbox type
    #[arg(long, value_enum, default_value = "automatic")]
    gearbox: GearboxType,

    /// Current mileage
    #[arg(long, default_value_t = 50_000, value_parser = clap::value_parser!(u64).range(0..=1_000_000))]
    mileage: u64,

    /// Fuel type
    #[arg(long, value_enum, default_value = "petrol")]
    fuel: FuelType,
}

fn parse_yes_no(s: &str) -> Result<bool, String> {
    match s {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(format!("expected 'yes' or 'no', got '{}'", s)),
    }
}

fn parse_steering(s: &str) -> Result<bool, String> {
    match s {
        "left" => Ok(true),
        "right" => Ok(false),
        _ => Err(format!("expected 'left' or 'right', got '{}'", s)),
    }
}

fn parse_engine_type(s: &str) -> Result<bool, String> {
    match s {
        "turbo" => Ok(true),
        "non-turbo" => Ok(false),
        _ => Err(format!("expected 'turbo' or 'non-turbo', got '{}'", s)),
    }
}

fn parse_engine_volume(s: &str) -> Result<f64, String> {
    let volume: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=10.0).contains(&volume) {
        Ok(volume)
    } else {
        Err(format!("engine volume must be within 0.0-10.0, got {}", volume))
    }
}

fn main() {
    let cli = Cli::parse();

    let form = CarForm {
        year: cli.year,
        leather_interior: cli.leather_interior,
        left_wheel: cli.steering,
        airbags: cli.airbags,
        color: cli.color,
        category: cli.category,
        engine_volume: cli.engine_volume,
        cylinders: cli.cylinders,
        turbo: cli.engine_type,
        drive_wheels: cli.drive_wheels,
        gearbox: cli.gearbox,
        mileage: cli.mileage,
        fuel: cli.fuel,
    };
    let features = encode_features(&form);

    println!("Requesting price estimate from {} ...", cli.endpoint);
    match request_prediction(&cli.endpoint, &features) {
        PredictOutcome::Price(price) => {
            println!("Estimated market price: {}", format_currency(price));
        }
        PredictOutcome::BackendError(body) => {
            eprintln!("Backend error: {}", body);
            std::process::exit(1);
        }
        PredictOutcome::Unreachable(reason) => {
            eprintln!(
                "Could not connect to the backend. Is the prediction server running? ({})",
                reason
            );
            std::process::exit(1);
        }
    }
}
