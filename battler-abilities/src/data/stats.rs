use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A permanent stat of a Mon, calculated from its species, level, and training.
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
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "Special Attack"]
    #[alias = "SpAtk"]
    SpAtk,
    #[string = "spd"]
    #[alias = "Special Defense"]
    #[alias = "SpDef"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

impl Stat {
    /// The stages that can be boosted in battle for this stat, if any.
    pub fn battle_stat(&self) -> Option<BattleStat> {
        match self {
            Self::HP => None,
            Self::Atk => Some(BattleStat::Atk),
            Self::Def => Some(BattleStat::Def),
            Self::SpAtk => Some(BattleStat::SpAtk),
            Self::SpDef => Some(BattleStat::SpDef),
            Self::Spe => Some(BattleStat::Spe),
        }
    }
}

/// A stat whose stages can be changed during battle.
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
pub enum BattleStat {
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "Special Attack"]
    #[alias = "SpAtk"]
    SpAtk,
    #[string = "spd"]
    #[alias = "Special Defense"]
    #[alias = "SpDef"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Acc,
    #[string = "eva"]
    #[alias = "Evasion"]
    Eva,
}

impl BattleStat {
    /// Every battle stat, in display order.
    pub const ALL: [BattleStat; 7] = [
        Self::Atk,
        Self::Def,
        Self::SpAtk,
        Self::SpDef,
        Self::Spe,
        Self::Acc,
        Self::Eva,
    ];

    /// The permanent stats that back a battle stat, which excludes accuracy and evasion.
    pub const BASE: [BattleStat; 5] = [
        Self::Atk,
        Self::Def,
        Self::SpAtk,
        Self::SpDef,
        Self::Spe,
    ];

    /// The name shown in battle messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Atk => "Attack",
            Self::Def => "Defense",
            Self::SpAtk => "Sp. Atk",
            Self::SpDef => "Sp. Def",
            Self::Spe => "Speed",
            Self::Acc => "accuracy",
            Self::Eva => "evasiveness",
        }
    }

    /// The permanent stat backing this battle stat, if any.
    pub fn stat(&self) -> Option<Stat> {
        match self {
            Self::Atk => Some(Stat::Atk),
            Self::Def => Some(Stat::Def),
            Self::SpAtk => Some(Stat::SpAtk),
            Self::SpDef => Some(Stat::SpDef),
            Self::Spe => Some(Stat::Spe),
            Self::Acc | Self::Eva => None,
        }
    }
}
