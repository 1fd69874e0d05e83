use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The outcome of a move against a single target.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum HitResult {
    #[string = "Effective"]
    Effective,
    #[string = "SuperEffective"]
    SuperEffective,
    #[string = "NotVeryEffective"]
    NotVeryEffective,
    #[string = "OneHitKo"]
    OneHitKo,
    #[string = "NoEffect"]
    NoEffect,
    #[string = "Status"]
    Status,
    #[string = "Fail"]
    Fail,
    #[string = "Miss"]
    Miss,
    #[string = "Other"]
    Other,
    #[string = "Immune"]
    Immune,
}

impl HitResult {
    /// Did the move deal damage?
    pub fn dealt_damage(&self) -> bool {
        *self < Self::NoEffect
    }
}
