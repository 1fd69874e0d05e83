use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A persistent status effect on a Mon.
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
pub enum StatusEffect {
    #[string = "psn"]
    #[alias = "Poison"]
    Poison,
    #[string = "tox"]
    #[alias = "Toxic"]
    Toxic,
    #[string = "par"]
    #[alias = "Paralysis"]
    Paralysis,
    #[string = "slp"]
    #[alias = "Sleep"]
    Sleep,
    #[string = "frz"]
    #[alias = "Freeze"]
    Freeze,
    #[string = "brn"]
    #[alias = "Burn"]
    Burn,
}

impl StatusEffect {
    /// Describes the status effect in a sentence, such as "prevents paralysis."
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Poison | Self::Toxic => "poisoning",
            Self::Paralysis => "paralysis",
            Self::Sleep => "sleep",
            Self::Freeze => "freezing",
            Self::Burn => "burn",
        }
    }

    /// Message suffix shown when the status is cured.
    pub fn cure_text(&self) -> &'static str {
        match self {
            Self::Poison | Self::Toxic => "was cured of its poison!",
            Self::Paralysis => "was cured of paralysis!",
            Self::Sleep => "woke up!",
            Self::Freeze => "was defrosted!",
            Self::Burn => "was cured of its burn!",
        }
    }
}

/// A volatile condition attached to a Mon while it is active.
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
pub enum BattlerTagType {
    #[string = "Flinched"]
    Flinched,
    #[string = "Confused"]
    Confused,
    #[string = "Infatuated"]
    Infatuated,
    #[string = "Sturdy"]
    Sturdy,
    #[string = "FireBoost"]
    FireBoost,
    #[string = "Charged"]
    Charged,
    #[string = "Protosynthesis"]
    Protosynthesis,
    #[string = "QuarkDrive"]
    QuarkDrive,
    #[string = "Trapped"]
    Trapped,
    #[string = "Drowsy"]
    Drowsy,
    #[string = "SlowStart"]
    SlowStart,
    #[string = "Truant"]
    Truant,
}

impl BattlerTagType {
    /// Describes the tag in a sentence, such as "prevents confusion."
    pub fn descriptor(&self) -> &'static str {
        match self {
            Self::Flinched => "flinching",
            Self::Confused => "confusion",
            Self::Infatuated => "infatuation",
            Self::Sturdy => "one-hit knockouts",
            Self::FireBoost => "fire boosting",
            Self::Charged => "charging",
            Self::Protosynthesis => "protosynthesis",
            Self::QuarkDrive => "quark drive",
            Self::Trapped => "trapping",
            Self::Drowsy => "drowsiness",
            Self::SlowStart => "slow starting",
            Self::Truant => "loafing around",
        }
    }
}
