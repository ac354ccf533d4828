use std::collections::HashMap;

use crate::price_prediction::PredictError;

/// The columns the price model was fit on, in training order. The model
/// consumes a positional row, so this order is part of the artifact contract
/// and must not be rearranged without re-exporting the model.
pub const FEATURE_COLUMNS: [&str; 46] = [
    "year",
    "Leather interior",
    "Engine volume",
    "Mileage",
    "Cylinders",
    "Wheel",
    "Airbags",
    "Engine Type",
    "Gear box type_Automatic",
    "Gear box type_Manual",
    "Gear box type_Tiptronic",
    "Gear box type_Variator",
    "Drive wheels_4WD",
    "Drive wheels_FWD",
    "Drive wheels_RWD",
    "Fuel_Diesel",
    "Fuel_Hybrid",
    "Fuel_Hydrogen",
    "Fuel_LPG",
    "Fuel_Petrol",
    "Fuel_Plug-in Hybrid",
    "Color_Black",
    "Color_Blue",
    "Color_Brown",
    "Color_Carnelian red",
    "Color_Golden",
    "Color_Green",
    "Color_Grey",
    "Color_Orange",
    "Color_Pink",
    "Color_Purple",
    "Color_Red",
    "Color_Silver",
    "Color_Sky blue",
    "Color_White",
    "Color_Yellow",
    "Category_Coupe",
    "Category_Goods wagon",
    "Category_Hatchback",
    "Category_Jeep",
    "Category_Limousine",
    "Category_Microbus",
    "Category_Minivan",
    "Category_Pickup",
    "Category_Sedan",
    "Category_Universal",
];

/// One inference row: the caller's flat feature map reordered into the
/// positional layout of [`FEATURE_COLUMNS`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<f32>,
}

impl FeatureRow {
    /// Validates the request map against the enumerated schema and builds the
    /// row. Every required column must be present; unknown extra keys are
    /// ignored since they cannot influence the positional row.
    pub fn from_map(features: &HashMap<String, f64>) -> Result<Self, PredictError> {
        let mut values = Vec::with_capacity(FEATURE_COLUMNS.len());
        for column in FEATURE_COLUMNS {
            match features.get(column) {
                Some(value) => values.push(*value as f32),
                None => return Err(PredictError::MissingFeature(column)),
            }
        }
        Ok(FeatureRow { values })
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
