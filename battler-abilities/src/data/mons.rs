use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::common::Id;

/// The gender of a Mon.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Gender {
    #[string = "M"]
    #[alias = "Male"]
    Male,
    #[string = "F"]
    #[alias = "Female"]
    Female,
    #[string = "U"]
    #[alias = "Genderless"]
    #[default]
    Genderless,
}

/// An item held by a Mon, or left on the field after battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldItem {
    pub id: Id,
    pub name: String,
}

impl HeldItem {
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        let name = name.into();
        Self {
            id: Id::from(name.as_str()),
            name,
        }
    }
}
