use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::{
        EffectTag,
        FormRule,
        StatSelector,
        effects::defend::change_form,
        hp_ratio,
    },
    battle::MonHandle,
    common::Id,
    data::{
        BattleStat,
        BattlerTagType,
        Stat,
        TerrainType,
        WeatherType,
    },
    dispatch::EffectContext,
};

fn default_show_ability() -> bool {
    true
}

/// The fraction of maximum HP restored when switching out.
const SWITCH_OUT_HEAL_RATIO: f64 = 0.33;

/// Queues a stat change for the Mon itself, or for each of its opponents.
fn change_stats(
    context: &mut EffectContext,
    stats: &[BattleStat],
    levels: i8,
    self_target: bool,
) -> Result<bool> {
    let mon = context.mon();
    if self_target {
        context
            .battle_mut()
            .queue_stat_change(mon, true, stats, levels)?;
        return Ok(true);
    }
    for opponent in context.battle().opponents(mon)? {
        context
            .battle_mut()
            .queue_stat_change(opponent, false, stats, levels)?;
    }
    Ok(true)
}

/// Effects applied once when the battle starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostBattleInitEffect {
    FormChange {
        form: FormRule,
    },
    StatChange {
        stats: Vec<BattleStat>,
        levels: i8,
        #[serde(default)]
        self_target: bool,
    },
}

impl PostBattleInitEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::FormChange { .. } => EffectTag::PostBattleInitFormChange,
            Self::StatChange { .. } => EffectTag::PostBattleInitStatChange,
        }
    }

    pub fn apply(&self, context: &mut EffectContext) -> Result<bool> {
        match self {
            Self::FormChange { form } => change_form(context, form),
            Self::StatChange {
                stats,
                levels,
                self_target,
            } => change_stats(context, stats, *levels, *self_target),
        }
    }
}

/// Effects applied after the Mon knocks out any Mon, including its allies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostKnockOutEffect {
    StatChange {
        stat: StatSelector,
        levels: i8,
    },
    /// Takes over the ability of an ally that was knocked out.
    CopyFaintedAllyAbility,
}

impl PostKnockOutEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::StatChange { .. } => EffectTag::PostKnockOutStatChange,
            Self::CopyFaintedAllyAbility => EffectTag::CopyFaintedAllyAbility,
        }
    }

    pub fn apply(&self, context: &mut EffectContext, knocked_out: MonHandle) -> Result<bool> {
        let mon = context.mon();
        match self {
            Self::StatChange { stat, levels } => {
                let stat = stat.select(context.battle_mut(), mon)?;
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, &[stat], *levels)?;
                Ok(true)
            }
            Self::CopyFaintedAllyAbility => {
                if knocked_out == mon
                    || context.battle().side(knocked_out)? != context.battle().side(mon)?
                {
                    return Ok(false);
                }
                let Some(ability) = context.ability_of(knocked_out)? else {
                    return Ok(false);
                };
                if ability.has_tag(EffectTag::UncopiableAbility) {
                    return Ok(false);
                }
                context.battle_mut().set_ability(mon, ability.id.clone())?;
                context.set_trigger_message(format!(
                    "{}'s {} was taken over!",
                    context.name_of(knocked_out)?,
                    ability.name
                ));
                Ok(true)
            }
        }
    }
}

/// Effects applied after the Mon knocks out an opponent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostVictoryEffect {
    StatChange { stat: StatSelector, levels: i8 },
}

impl PostVictoryEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::StatChange { .. } => EffectTag::PostVictoryStatChange,
        }
    }

    pub fn apply(&self, context: &mut EffectContext) -> Result<bool> {
        let mon = context.mon();
        match self {
            Self::StatChange { stat, levels } => {
                let stat = stat.select(context.battle_mut(), mon)?;
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, &[stat], *levels)?;
                Ok(true)
            }
        }
    }
}

/// Effects applied when the Mon enters the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostSummonEffect {
    /// Announces the ability.
    ///
    /// `{mon}` in the message is replaced with the name of the Mon.
    Message {
        message: String,
    },
    AddTag {
        tag: BattlerTagType,
        #[serde(default)]
        turns: u8,
        #[serde(default = "default_show_ability")]
        show_ability: bool,
    },
    StatChange {
        stats: Vec<BattleStat>,
        levels: i8,
        #[serde(default)]
        self_target: bool,
    },
    /// Raises Attack or Special Attack, whichever targets the opponents' weaker defense.
    Download,
    WeatherChange {
        weather: WeatherType,
    },
    TerrainChange {
        terrain: TerrainType,
    },
    FormChange {
        form: FormRule,
    },
    /// Copies the ability of a random opponent.
    Trace {
        /// Abilities that can be traced even though they cannot normally be copied.
        #[serde(default)]
        exceptions: Vec<Id>,
    },
    /// Transforms into a random opponent.
    Transform,
}

impl PostSummonEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::Message { .. } => EffectTag::PostSummonMessage,
            Self::AddTag { .. } => EffectTag::PostSummonAddTag,
            Self::StatChange { .. } => EffectTag::PostSummonStatChange,
            Self::Download => EffectTag::Download,
            Self::WeatherChange { .. } => EffectTag::PostSummonWeatherChange,
            Self::TerrainChange { .. } => EffectTag::PostSummonTerrainChange,
            Self::FormChange { .. } => EffectTag::PostSummonFormChange,
            Self::Trace { .. } => EffectTag::Trace,
            Self::Transform => EffectTag::PostSummonTransform,
        }
    }

    pub fn show_ability(&self) -> bool {
        match self {
            Self::AddTag { show_ability, .. } => *show_ability,
            _ => true,
        }
    }

    pub fn apply(&self, context: &mut EffectContext) -> Result<bool> {
        let mon = context.mon();
        match self {
            Self::Message { message } => {
                let message = message.replace("{mon}", &context.mon_name()?);
                context.set_trigger_message(message);
                Ok(true)
            }
            Self::AddTag { tag, turns, .. } => {
                context.battle_mut().add_tag(mon, *tag, *turns, Some(mon))
            }
            Self::StatChange {
                stats,
                levels,
                self_target,
            } => change_stats(context, stats, *levels, *self_target),
            Self::Download => {
                let mut total_def = 0;
                let mut total_spdef = 0;
                for opponent in context.battle().opponents(mon)? {
                    total_def += context.battle().stat(opponent, Stat::Def)?;
                    total_spdef += context.battle().stat(opponent, Stat::SpDef)?;
                }
                if total_def == 0 || total_spdef == 0 {
                    return Ok(false);
                }
                let stat = if total_def < total_spdef {
                    BattleStat::Atk
                } else {
                    BattleStat::SpAtk
                };
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, &[stat], 1)?;
                Ok(true)
            }
            Self::WeatherChange { weather } => {
                if context.battle().weather_immutable()? {
                    return Ok(false);
                }
                context.battle_mut().try_set_weather(*weather, mon)
            }
            Self::TerrainChange { terrain } => context.battle_mut().try_set_terrain(*terrain, mon),
            Self::FormChange { form } => change_form(context, form),
            Self::Trace { exceptions } => {
                let opponents = context.battle().opponents(mon)?;
                let Some(target) = context.sample(&opponents).copied() else {
                    return Ok(false);
                };
                let Some(ability) = context.ability_of(target)? else {
                    return Ok(false);
                };
                if ability.has_tag(EffectTag::UncopiableAbility)
                    && !exceptions.contains(&ability.id)
                {
                    return Ok(false);
                }
                context.battle_mut().set_ability(mon, ability.id.clone())?;
                context.set_trigger_message(format!(
                    "{} traced {}'s {}!",
                    context.mon_name()?,
                    context.name_of(target)?,
                    ability.name
                ));
                Ok(true)
            }
            Self::Transform => {
                let opponents = context.battle().opponents(mon)?;
                let Some(target) = context.sample(&opponents).copied() else {
                    return Ok(false);
                };
                if !context.battle_mut().transform_into(mon, target)? {
                    return Ok(false);
                }
                context.set_trigger_message(format!(
                    "{} transformed into {}!",
                    context.mon_name()?,
                    context.name_of(target)?
                ));
                Ok(true)
            }
        }
    }
}

/// Effects applied as the Mon leaves the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PreSwitchOutEffect {
    /// Cures the Mon's status.
    ResetStatus,
    /// Restores a third of the Mon's maximum HP.
    Heal,
}

impl PreSwitchOutEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::ResetStatus => EffectTag::PreSwitchOutResetStatus,
            Self::Heal => EffectTag::PreSwitchOutHeal,
        }
    }

    pub fn apply(&self, context: &mut EffectContext) -> Result<bool> {
        let mon = context.mon();
        match self {
            Self::ResetStatus => {
                if context.battle().status(mon)?.is_none() {
                    return Ok(false);
                }
                context.battle_mut().cure_status(mon)?;
                Ok(true)
            }
            Self::Heal => {
                if hp_ratio(context.battle(), mon)? >= 1.0 {
                    return Ok(false);
                }
                let amount =
                    (context.battle().max_hp(mon)? as f64 * SWITCH_OUT_HEAL_RATIO).floor() as u32;
                context.battle_mut().heal(mon, amount)?;
                Ok(true)
            }
        }
    }
}

/// Effects applied once the battle is won.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostBattleEffect {
    /// Picks up an item left on the field.
    Loot,
}

impl PostBattleEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::Loot => EffectTag::PostBattleLoot,
        }
    }

    pub fn apply(&self, context: &mut EffectContext) -> Result<bool> {
        let mon = context.mon();
        match self {
            Self::Loot => {
                let loot = context.battle().post_battle_loot()?;
                if loot.is_empty() {
                    return Ok(false);
                }
                let index = context.random_int(loot.len() as u64) as usize;
                if !context.battle_mut().try_claim_post_battle_loot(mon, index)? {
                    return Ok(false);
                }
                if let Some(item) = loot.get(index) {
                    context.set_trigger_message(format!(
                        "{} picked up {}!",
                        context.mon_name()?,
                        item.name
                    ));
                }
                Ok(true)
            }
        }
    }
}
