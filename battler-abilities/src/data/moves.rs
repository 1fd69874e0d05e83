use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    common::{
        FastHashSet,
        Id,
        Identifiable,
    },
    data::Type,
};

/// The category of a move, which determines the stats used for damage.
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
pub enum MoveCategory {
    #[string = "Physical"]
    #[default]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}

/// The targets a move may hit.
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
pub enum MoveTarget {
    #[string = "User"]
    User,
    #[string = "Other"]
    Other,
    #[string = "AllOthers"]
    AllOthers,
    #[string = "NearOther"]
    #[default]
    NearOther,
    #[string = "AllNearOthers"]
    AllNearOthers,
    #[string = "NearEnemy"]
    NearEnemy,
    #[string = "AllNearEnemies"]
    AllNearEnemies,
    #[string = "RandomNearEnemy"]
    RandomNearEnemy,
    #[string = "AllEnemies"]
    AllEnemies,
    #[string = "NearAlly"]
    NearAlly,
    #[string = "UserAndAllies"]
    UserAndAllies,
    #[string = "All"]
    All,
    #[string = "UserSide"]
    UserSide,
    #[string = "EnemySide"]
    EnemySide,
    #[string = "BothSides"]
    BothSides,
}

impl MoveTarget {
    /// Can the move hit more than one target?
    pub fn is_multi_target(&self) -> bool {
        matches!(
            self,
            Self::AllOthers
                | Self::AllNearOthers
                | Self::AllNearEnemies
                | Self::AllEnemies
                | Self::UserAndAllies
                | Self::All
                | Self::UserSide
                | Self::EnemySide
                | Self::BothSides
        )
    }

    /// Does the move pick a single target, such that it can be redirected?
    pub fn is_redirectable(&self) -> bool {
        matches!(self, Self::NearOther | Self::Other)
    }
}

/// A flag that categorizes a move for the purposes of other effects.
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
pub enum MoveFlag {
    /// The move makes contact with the target.
    #[string = "Contact"]
    Contact,
    #[string = "Sound"]
    Sound,
    #[string = "Punch"]
    Punch,
    #[string = "Bite"]
    Bite,
    #[string = "Pulse"]
    Pulse,
    #[string = "Powder"]
    Powder,
    #[string = "Bullet"]
    #[alias = "Ballistic"]
    Bullet,
    #[string = "Slicing"]
    Slicing,
    /// The move heals the user.
    #[string = "Triage"]
    Triage,
    /// The move damages the user.
    #[string = "Recoil"]
    Recoil,
    /// The move may flinch the target on its own.
    #[string = "Flinch"]
    Flinch,
    #[string = "Wind"]
    Wind,
}

/// Data about a move, as needed by ability effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: Id,
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: Type,
    pub category: MoveCategory,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub priority: i8,
    #[serde(default)]
    pub target: MoveTarget,
    #[serde(default)]
    pub flags: FastHashSet<MoveFlag>,
}

impl MoveData {
    /// Does the move have the given flag?
    pub fn has_flag(&self, flag: MoveFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Can the move hit more than one target?
    pub fn is_multi_target(&self) -> bool {
        self.target.is_multi_target()
    }
}

impl Identifiable for MoveData {
    fn id(&self) -> &Id {
        &self.id
    }
}
