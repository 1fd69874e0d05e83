use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Weather on the battle field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum WeatherType {
    #[string = "Sunny"]
    #[alias = "Sun"]
    Sunny,
    #[string = "Rain"]
    Rain,
    #[string = "Sandstorm"]
    Sandstorm,
    #[string = "Hail"]
    Hail,
    #[string = "Snow"]
    Snow,
    #[string = "Fog"]
    Fog,
    #[string = "HeavyRain"]
    HeavyRain,
    #[string = "HarshSun"]
    HarshSun,
    #[string = "StrongWinds"]
    StrongWinds,
}

impl WeatherType {
    /// Does the weather deal damage at the end of each turn?
    pub fn is_damaging(&self) -> bool {
        matches!(self, Self::Sandstorm | Self::Hail)
    }

    /// Is the weather one of the primal kinds, which normal weather cannot replace?
    pub fn is_primal(&self) -> bool {
        matches!(self, Self::HeavyRain | Self::HarshSun | Self::StrongWinds)
    }
}

/// Terrain on the battle field.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum TerrainType {
    #[string = "Misty"]
    Misty,
    #[string = "Electric"]
    Electric,
    #[string = "Grassy"]
    Grassy,
    #[string = "Psychic"]
    Psychic,
}
