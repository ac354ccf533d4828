use serde_json::{Map, Value, json};

use crate::client::form::{CarForm, Category, Color, DriveWheels, FuelType, GearboxType};

/// Expands the raw form selections into the flat feature map the backend
/// schema expects: booleans become 0/1, each enum group becomes its one-hot
/// indicator set, numerics pass through under their schema key names.
/// Pure function of the form, no hidden state.
pub fn encode_features(form: &CarForm) -> Map<String, Value> {
    let mut features = Map::new();

    features.insert("year".to_string(), json!(form.year));
    features.insert(
        "Leather interior".to_string(),
        json!(form.leather_interior as u8),
    );
    features.insert("Engine volume".to_string(), json!(form.engine_volume));
    features.insert("Mileage".to_string(), json!(form.mileage));
    features.insert("Cylinders".to_string(), json!(form.cylinders));
    features.insert("Wheel".to_string(), json!(form.left_wheel as u8));
    features.insert("Airbags".to_string(), json!(form.airbags));
    features.insert("Engine Type".to_string(), json!(form.turbo as u8));

    for gearbox in GearboxType::ALL {
        features.insert(
            format!("Gear box type_{}", gearbox.label()),
            json!((gearbox == form.gearbox) as u8),
        );
    }
    for drive in DriveWheels::ALL {
        features.insert(
            format!("Drive wheels_{}", drive.label()),
            json!((drive == form.drive_wheels) as u8),
        );
    }
    for fuel in FuelType::ALL {
        features.insert(
            format!("Fuel_{}", fuel.label()),
            json!((fuel == form.fuel) as u8),
        );
    }
    for color in Color::ALL {
        features.insert(
            format!("Color_{}", color.label()),
            json!((color == form.color) as u8),
        );
    }
    for category in Category::ALL {
        features.insert(
            format!("Category_{}", category.label()),
            json!((category == form.category) as u8),
        );
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price_prediction::feature_schema::FEATURE_COLUMNS;

    fn reference_form() -> CarForm {
        CarForm {
            year: 2018,
            leather_interior: true,
            left_wheel: true,
            airbags: 6,
            color: Color::Red,
            category: Category::Sedan,
            engine_volume: 2.0,
            cylinders: 4,
            turbo: false,
            drive_wheels: DriveWheels::FrontWheelDrive,
            gearbox: GearboxType::Automatic,
            mileage: 50_000,
            fuel: FuelType::Petrol,
        }
    }

    fn indicator_keys<'a>(features: &'a Map<String, Value>, prefix: &str) -> Vec<&'a String> {
        features.keys().filter(|k| k.starts_with(prefix)).collect()
    }

    #[test]
    fn encoding_covers_the_full_schema() {
        let features = encode_features(&reference_form());
        assert_eq!(features.len(), FEATURE_COLUMNS.len());
        for column in FEATURE_COLUMNS {
            assert!(features.contains_key(column), "missing column {}", column);
        }
    }

    #[test]
    fn encoding_is_idempotent() {
        let form = reference_form();
        assert_eq!(encode_features(&form), encode_features(&form));
    }

    #[test]
    fn one_hot_groups_have_exactly_one_indicator_set() {
        // Every selection in every group, not just the defaults.
        for color in Color::ALL {
            let mut form = reference_form();
            form.color = color;
            let features = encode_features(&form);
            let set: Vec<_> = indicator_keys(&features, "Color_")
                .into_iter()
                .filter(|k| features[*k] == json!(1))
                .collect();
            assert_eq!(set, vec![&format!("Color_{}", color.label())]);
        }
        for category in Category::ALL {
            let mut form = reference_form();
            form.category = category;
            let features = encode_features(&form);
            let set: Vec<_> = indicator_keys(&features, "Category_")
                .into_iter()
                .filter(|k| features[*k] == json!(1))
                .collect();
            assert_eq!(set, vec![&format!("Category_{}", category.label())]);
        }
        for gearbox in GearboxType::ALL {
            let mut form = reference_form();
            form.gearbox = gearbox;
            let features = encode_features(&form);
            let set: Vec<_> = indicator_keys(&features, "Gear box type_")
                .into_iter()
                .filter(|k| features[*k] == json!(1))
                .collect();
            assert_eq!(set, vec![&format!("Gear box type_{}", gearbox.label())]);
        }
        for drive in DriveWheels::ALL {
            let mut form = reference_form();
            form.drive_wheels = drive;
            let features = encode_features(&form);
            let set: Vec<_> = indicator_keys(&features, "Drive wheels_")
                .into_iter()
                .filter(|k| features[*k] == json!(1))
                .collect();
            assert_eq!(set, vec![&format!("Drive wheels_{}", drive.label())]);
        }
        for fuel in FuelType::ALL {
            let mut form = reference_form();
            form.fuel = fuel;
            let features = encode_features(&form);
            let set: Vec<_> = indicator_keys(&features, "Fuel_")
                .into_iter()
                .filter(|k| features[*k] == json!(1))
                .collect();
            assert_eq!(set, vec![&format!("Fuel_{}", fuel.label())]);
        }
    }

    #[test]
    fn reference_scenario_encodes_as_expected() {
        let features = encode_features(&reference_form());

        assert_eq!(features["year"], json!(2018));
        assert_eq!(features["Mileage"], json!(50_000));
        assert_eq!(features["Leather interior"], json!(1));
        assert_eq!(features["Wheel"], json!(1));
        assert_eq!(features["Airbags"], json!(6));
        assert_eq!(features["Engine volume"], json!(2.0));
        assert_eq!(features["Cylinders"], json!(4));
        assert_eq!(features["Engine Type"], json!(0));

        assert_eq!(features["Gear box type_Automatic"], json!(1));
        assert_eq!(features["Drive wheels_FWD"], json!(1));
        assert_eq!(features["Fuel_Petrol"], json!(1));
        assert_eq!(features["Color_Red"], json!(1));
        assert_eq!(features["Category_Sedan"], json!(1));

        // All sibling indicators stay 0.
        for (key, value) in &features {
            let is_selected = matches!(
                key.as_str(),
                "Gear box type_Automatic"
                    | "Drive wheels_FWD"
                    | "Fuel_Petrol"
                    | "Color_Red"
                    | "Category_Sedan"
            );
            let is_indicator = ["Gear box type_", "Drive wheels_", "Fuel_", "Color_", "Category_"]
                .iter()
                .any(|p| key.starts_with(p));
            if is_indicator && !is_selected {
                assert_eq!(*value, json!(0), "sibling {} should be 0", key);
            }
        }
    }
}
