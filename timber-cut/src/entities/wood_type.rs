use serde::{Deserialize, Serialize};

/// Species of timber a configuration is priced and rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoodType {
    #[default]
    Walnut,
    Oak,
    Cherry,
    Teak,
    Pine,
}

impl WoodType {
    pub fn name(self) -> &'static str {
        match self {
            WoodType::Walnut => "Black Walnut",
            WoodType::Oak => "White Oak",
            WoodType::Cherry => "American Cherry",
            WoodType::Teak => "Burmese Teak",
            WoodType::Pine => "Yellow Pine",
        }
    }

    /// Hex color used for rendering and cut effects
    pub fn color(self) -> &'static str {
        match self {
            WoodType::Walnut => "#5d4037",
            WoodType::Oak => "#e0cda7",
            WoodType::Cherry => "#8b4513",
            WoodType::Teak => "#c19a6b",
            WoodType::Pine => "#f4e99b",
        }
    }

    pub fn price_multiplier(self) -> f64 {
        match self {
            WoodType::Walnut => 2.5,
            WoodType::Oak => 1.8,
            WoodType::Cherry => 2.0,
            WoodType::Teak => 3.0,
            WoodType::Pine => 1.0,
        }
    }
}
