use std::{
    fmt,
    fmt::Debug,
    sync::Arc,
};

use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    battle::{
        Battle,
        MonHandle,
    },
    common::Id,
    data::{
        BattleStat,
        BattlerTagType,
        Gender,
        MoveCategory,
        MoveData,
        MoveFlag,
        Stat,
        StatusEffect,
        TerrainType,
        Type,
        WeatherType,
    },
    error::WrapOptionError,
    rng::rand_util,
};

type MonPredicate = dyn Fn(&dyn Battle, MonHandle) -> Result<bool> + Send + Sync;

/// A code-defined predicate over a Mon.
#[derive(Clone)]
pub struct ConditionFn(Arc<MonPredicate>);

impl Debug for ConditionFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConditionFn")
    }
}

/// A predicate over the battle state of a Mon, gating whether an ability or attribute applies.
///
/// Conditions are evaluated every time an attribute is considered, against the battle state at
/// that moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Condition {
    /// The weather is one of the given kinds, and its effects are not suppressed.
    Weather { weathers: Vec<WeatherType> },
    /// The terrain is one of the given kinds.
    Terrain { terrains: Vec<TerrainType> },
    /// The Mon has any status.
    HasStatus,
    /// The Mon has one of the given statuses.
    Status { statuses: Vec<StatusEffect> },
    HasTag { tag: BattlerTagType },
    /// The Mon's remaining HP is at most the given fraction of its maximum HP.
    HpRatioAtMost { ratio: f64 },
    HpFull,
    /// The last attack the Mon received was a critical hit.
    LastHitCritical,
    Not { condition: Box<Condition> },
    All { conditions: Vec<Condition> },
    Any { conditions: Vec<Condition> },
    #[serde(skip)]
    Custom(ConditionFn),
}

impl Condition {
    /// Creates a condition from code.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&dyn Battle, MonHandle) -> Result<bool> + Send + Sync + 'static,
    {
        Self::Custom(ConditionFn(Arc::new(f)))
    }

    pub fn weather<I>(weathers: I) -> Self
    where
        I: IntoIterator<Item = WeatherType>,
    {
        Self::Weather {
            weathers: weathers.into_iter().collect(),
        }
    }

    pub fn not(condition: Condition) -> Self {
        Self::Not {
            condition: Box::new(condition),
        }
    }

    /// Evaluates the condition for the Mon.
    pub fn evaluate(&self, battle: &dyn Battle, mon: MonHandle) -> Result<bool> {
        match self {
            Self::Weather { weathers } => {
                if battle.weather_suppressed()? {
                    return Ok(false);
                }
                Ok(battle
                    .weather()?
                    .is_some_and(|weather| weathers.contains(&weather)))
            }
            Self::Terrain { terrains } => Ok(battle
                .terrain()?
                .is_some_and(|terrain| terrains.contains(&terrain))),
            Self::HasStatus => Ok(battle.status(mon)?.is_some()),
            Self::Status { statuses } => Ok(battle
                .status(mon)?
                .is_some_and(|status| statuses.contains(&status))),
            Self::HasTag { tag } => battle.has_tag(mon, *tag),
            Self::HpRatioAtMost { ratio } => Ok(hp_ratio(battle, mon)? <= *ratio),
            Self::HpFull => Ok(battle.hp(mon)? >= battle.max_hp(mon)?),
            Self::LastHitCritical => battle.last_hit_critical(mon),
            Self::Not { condition } => Ok(!condition.evaluate(battle, mon)?),
            Self::All { conditions } => {
                for condition in conditions {
                    if !condition.evaluate(battle, mon)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Any { conditions } => {
                for condition in conditions {
                    if condition.evaluate(battle, mon)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Custom(f) => (f.0)(battle, mon),
        }
    }
}

/// The fraction of maximum HP the Mon has remaining.
pub fn hp_ratio(battle: &dyn Battle, mon: MonHandle) -> Result<f64> {
    let max_hp = battle.max_hp(mon)?;
    if max_hp == 0 {
        return Ok(0.0);
    }
    Ok(battle.hp(mon)? as f64 / max_hp as f64)
}

/// The participants of a move, as seen by a [`MoveCondition`].
#[derive(Clone, Copy)]
pub struct MoveUse<'m> {
    /// The Mon using the move.
    pub user: MonHandle,
    /// The Mon the move is used against.
    pub target: MonHandle,
    pub move_data: &'m MoveData,
}

type MovePredicate = dyn Fn(&dyn Battle, MoveUse) -> Result<bool> + Send + Sync;

/// A code-defined predicate over a move use.
#[derive(Clone)]
pub struct MoveConditionFn(Arc<MovePredicate>);

impl Debug for MoveConditionFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoveConditionFn")
    }
}

/// A predicate over a move being used by one Mon against another.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MoveCondition {
    Type { move_type: Type },
    Category { category: MoveCategory },
    Flag { flag: MoveFlag },
    /// The move is one of the given moves.
    Moves { moves: Vec<Id> },
    /// The base power of the move is positive and at most the given value.
    PowerAtMost { power: u32 },
    /// The move's type is at least this effective against the target.
    EffectivenessAtLeast { multiplier: f64 },
    /// The move's type is at most this effective against the target.
    EffectivenessAtMost { multiplier: f64 },
    TargetHpFull,
    UserHpFull,
    /// User and target have the same gender, and neither is genderless.
    SameGender,
    /// User and target have different genders, and neither is genderless.
    OppositeGender,
    /// The user has any status.
    UserHasStatus,
    /// The user targets itself.
    SelfTargeted,
    /// The target is in the given form.
    TargetForm { form: u8 },
    Not { condition: Box<MoveCondition> },
    All { conditions: Vec<MoveCondition> },
    Any { conditions: Vec<MoveCondition> },
    #[serde(skip)]
    Custom(MoveConditionFn),
}

impl MoveCondition {
    /// Creates a move condition from code.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&dyn Battle, MoveUse) -> Result<bool> + Send + Sync + 'static,
    {
        Self::Custom(MoveConditionFn(Arc::new(f)))
    }

    pub fn move_type(move_type: Type) -> Self {
        Self::Type { move_type }
    }

    pub fn not(condition: MoveCondition) -> Self {
        Self::Not {
            condition: Box::new(condition),
        }
    }

    /// Evaluates the condition for the move use.
    pub fn evaluate(&self, battle: &dyn Battle, move_use: MoveUse) -> Result<bool> {
        let MoveUse {
            user,
            target,
            move_data,
        } = move_use;
        match self {
            Self::Type { move_type } => Ok(move_data.move_type == *move_type),
            Self::Category { category } => Ok(move_data.category == *category),
            Self::Flag { flag } => Ok(move_data.has_flag(*flag)),
            Self::Moves { moves } => Ok(moves.contains(&move_data.id)),
            Self::PowerAtMost { power } => Ok(move_data.power > 0 && move_data.power <= *power),
            Self::EffectivenessAtLeast { multiplier } => {
                Ok(battle.attack_type_effectiveness(target, move_data.move_type)? >= *multiplier)
            }
            Self::EffectivenessAtMost { multiplier } => {
                Ok(battle.attack_type_effectiveness(target, move_data.move_type)? <= *multiplier)
            }
            Self::TargetHpFull => Ok(battle.hp(target)? >= battle.max_hp(target)?),
            Self::UserHpFull => Ok(battle.hp(user)? >= battle.max_hp(user)?),
            Self::SameGender => {
                let (user, target) = (battle.gender(user)?, battle.gender(target)?);
                Ok(user != Gender::Genderless && user == target)
            }
            Self::OppositeGender => {
                let (user, target) = (battle.gender(user)?, battle.gender(target)?);
                Ok(user != Gender::Genderless
                    && target != Gender::Genderless
                    && user != target)
            }
            Self::UserHasStatus => Ok(battle.status(user)?.is_some()),
            Self::SelfTargeted => Ok(user == target),
            Self::TargetForm { form } => Ok(battle.form_index(target)? == *form),
            Self::Not { condition } => Ok(!condition.evaluate(battle, move_use)?),
            Self::All { conditions } => {
                for condition in conditions {
                    if !condition.evaluate(battle, move_use)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Self::Any { conditions } => {
                for condition in conditions {
                    if condition.evaluate(battle, move_use)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Self::Custom(f) => (f.0)(battle, move_use),
        }
    }
}

/// A predicate over a stat stage change that already happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatChangeCondition {
    Lowered,
    Raised,
}

impl StatChangeCondition {
    pub fn evaluate(&self, levels: i8) -> bool {
        match self {
            Self::Lowered => levels < 0,
            Self::Raised => levels > 0,
        }
    }
}

/// Selects the stat an effect changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatSelector {
    Fixed { stat: BattleStat },
    /// The Mon's highest stat, excluding HP. Ties go to the stat listed first.
    Highest,
    /// A random stat, excluding accuracy and evasion.
    Random,
}

impl StatSelector {
    pub fn select(&self, battle: &mut dyn Battle, mon: MonHandle) -> Result<BattleStat> {
        match self {
            Self::Fixed { stat } => Ok(*stat),
            Self::Highest => {
                let mut best = BattleStat::Atk;
                let mut best_value = 0;
                for (battle_stat, stat) in [
                    (BattleStat::Atk, Stat::Atk),
                    (BattleStat::Def, Stat::Def),
                    (BattleStat::SpAtk, Stat::SpAtk),
                    (BattleStat::SpDef, Stat::SpDef),
                    (BattleStat::Spe, Stat::Spe),
                ] {
                    let value = battle.stat(mon, stat)?;
                    if value > best_value {
                        best = battle_stat;
                        best_value = value;
                    }
                }
                Ok(best)
            }
            Self::Random => Ok(*rand_util::sample_slice(battle.prng(), &BattleStat::BASE)
                .wrap_expectation("no stats to choose from")?),
        }
    }
}

type FormSelector = dyn Fn(&dyn Battle, MonHandle) -> Result<u8> + Send + Sync;

/// A code-defined form selector.
#[derive(Clone)]
pub struct FormFn(Arc<FormSelector>);

impl Debug for FormFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormFn")
    }
}

/// Selects the form a Mon should be in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FormRule {
    Fixed { form: u8 },
    /// One form at or below an HP threshold, another above it.
    HpThreshold { ratio: f64, at_or_below: u8, above: u8 },
    /// One form until the Mon is hit by the current move, another after.
    HitCount { unhit: u8, hit: u8 },
    /// One form under the given weather, another otherwise.
    Weather {
        weathers: Vec<WeatherType>,
        matched: u8,
        otherwise: u8,
    },
    #[serde(skip)]
    Custom(FormFn),
}

impl FormRule {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&dyn Battle, MonHandle) -> Result<u8> + Send + Sync + 'static,
    {
        Self::Custom(FormFn(Arc::new(f)))
    }

    /// The form the Mon should be in.
    pub fn select(&self, battle: &dyn Battle, mon: MonHandle) -> Result<u8> {
        match self {
            Self::Fixed { form } => Ok(*form),
            Self::HpThreshold {
                ratio,
                at_or_below,
                above,
            } => {
                if hp_ratio(battle, mon)? <= *ratio {
                    Ok(*at_or_below)
                } else {
                    Ok(*above)
                }
            }
            Self::HitCount { unhit, hit } => {
                if battle.hit_count(mon)? == 0 {
                    Ok(*unhit)
                } else {
                    Ok(*hit)
                }
            }
            Self::Weather {
                weathers,
                matched,
                otherwise,
            } => {
                let matched_weather = Condition::Weather {
                    weathers: weathers.clone(),
                }
                .evaluate(battle, mon)?;
                if matched_weather {
                    Ok(*matched)
                } else {
                    Ok(*otherwise)
                }
            }
            Self::Custom(f) => (f.0)(battle, mon),
        }
    }
}
