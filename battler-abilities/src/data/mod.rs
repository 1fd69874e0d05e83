mod conditions;
mod field;
mod hit_result;
mod mons;
mod moves;
mod stats;
mod types;

pub use conditions::{
    BattlerTagType,
    StatusEffect,
};
pub use field::{
    TerrainType,
    WeatherType,
};
pub use hit_result::HitResult;
pub use mons::{
    Gender,
    HeldItem,
};
pub use moves::{
    MoveCategory,
    MoveData,
    MoveFlag,
    MoveTarget,
};
pub use stats::{
    BattleStat,
    Stat,
};
pub use types::Type;
