use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::{
        ApplyEvent,
        EffectTag,
        HookCategory,
        MoveCondition,
        MoveUse,
        hp_ratio,
    },
    data::{
        BattleStat,
        StatusEffect,
        TerrainType,
        Type,
        WeatherType,
    },
    dispatch::EffectContext,
    error::missing_hook_argument_error,
};

fn default_increment() -> i64 {
    1
}

/// Effects of the generic hook, consulted by battle checks that do not belong to a single moment.
///
/// Each effect reads the arguments of [`ApplyEvent`] it needs. A missing argument is a fault in
/// the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ApplyEffect {
    /// Cancels recoil damage.
    BlockRecoilDamage,
    /// Halves the "one in N" odds of a double battle, to a minimum of 1.
    DoubleBattleChance,
    /// Cancels theft of the Mon's held item.
    BlockItemTheft,
    /// Adds 0.5 to a same-type attack bonus that is already in effect.
    StabBoost,
    /// Changes a move of one type into another type, multiplying its power.
    MoveTypeChangePowerMultiplier {
        match_type: Type,
        new_type: Type,
        multiplier: f64,
    },
    /// Marks critical hits against the Mon as blocked.
    BlockCrit,
    /// Marks the Mon's attacks as having a raised critical hit stage.
    BonusCrit,
    /// Cancels damage that does not come from attacks.
    BlockNonDirectDamage,
    /// Cancels one-hit knockout moves.
    BlockOneHitKo,
    /// Raises the priority of matching moves.
    IncrementMovePriority {
        when: MoveCondition,
        #[serde(default = "default_increment")]
        increment: i64,
    },
    /// Zeroes the opponent's stat stages for a calculation.
    IgnoreOpponentStatChanges,
    /// Multiplies stat stage changes to the Mon.
    StatChangeMultiplier { multiplier: i64 },
    /// Cancels the attack reduction from burns.
    BypassBurnDamageReduction,
    /// Doubles the effect of berries.
    DoubleBerryEffect,
    /// Cancels berry use by opponents.
    PreventBerryUse,
    /// Guarantees escape from wild battles.
    RunSuccess,
    /// Multi-hit moves always hit the maximum number of times.
    MaxMultiHit,
    /// Draws single-target moves to the Mon.
    RedirectMove,
    /// Draws single-target moves of the type to the Mon.
    RedirectTypeMove { move_type: Type },
    /// Halves the remaining duration of a status.
    ReduceStatusEffectDuration { status: StatusEffect },
    /// Changes the Mon's stats when it flinches.
    FlinchStatChange { stats: Vec<BattleStat>, levels: i8 },
    /// Doubles the HP threshold at which berries are eaten.
    ReduceBerryUseThreshold,
    WeightMultiplier { multiplier: f64 },
    /// The Mon's moves ignore ignorable abilities of their targets.
    MoveAbilityBypass {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        when: Option<MoveCondition>,
    },
    /// Suppresses the abilities of every other Mon on the field.
    SuppressFieldAbilities,
    /// Sets the weather when the battle moves to a new biome.
    PostBiomeChangeWeatherChange { weather: WeatherType },
    /// Sets the terrain when the battle moves to a new biome.
    PostBiomeChangeTerrainChange { terrain: TerrainType },
    /// The Mon's moves never make contact.
    IgnoreContact,
    /// Moves used by or against the Mon never miss.
    AlwaysHit,
    /// Opponents' moves use additional PP.
    IncreasePp,
    UncopiableAbility,
    UnsuppressableAbility,
    UnswappableAbility,
    NoTransformAbility,
    NoFusionAbility,
}

impl ApplyEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::BlockRecoilDamage => EffectTag::BlockRecoilDamage,
            Self::DoubleBattleChance => EffectTag::DoubleBattleChance,
            Self::BlockItemTheft => EffectTag::BlockItemTheft,
            Self::StabBoost => EffectTag::StabBoost,
            Self::MoveTypeChangePowerMultiplier { .. } => EffectTag::MoveTypeChangePowerMultiplier,
            Self::BlockCrit => EffectTag::BlockCrit,
            Self::BonusCrit => EffectTag::BonusCrit,
            Self::BlockNonDirectDamage => EffectTag::BlockNonDirectDamage,
            Self::BlockOneHitKo => EffectTag::BlockOneHitKo,
            Self::IncrementMovePriority { .. } => EffectTag::IncrementMovePriority,
            Self::IgnoreOpponentStatChanges => EffectTag::IgnoreOpponentStatChanges,
            Self::StatChangeMultiplier { .. } => EffectTag::StatChangeMultiplier,
            Self::BypassBurnDamageReduction => EffectTag::BypassBurnDamageReduction,
            Self::DoubleBerryEffect => EffectTag::DoubleBerryEffect,
            Self::PreventBerryUse => EffectTag::PreventBerryUse,
            Self::RunSuccess => EffectTag::RunSuccess,
            Self::MaxMultiHit => EffectTag::MaxMultiHit,
            Self::RedirectMove => EffectTag::RedirectMove,
            Self::RedirectTypeMove { .. } => EffectTag::RedirectTypeMove,
            Self::ReduceStatusEffectDuration { .. } => EffectTag::ReduceStatusEffectDuration,
            Self::FlinchStatChange { .. } => EffectTag::FlinchStatChange,
            Self::ReduceBerryUseThreshold => EffectTag::ReduceBerryUseThreshold,
            Self::WeightMultiplier { .. } => EffectTag::WeightMultiplier,
            Self::MoveAbilityBypass { .. } => EffectTag::MoveAbilityBypass,
            Self::SuppressFieldAbilities => EffectTag::SuppressFieldAbilities,
            Self::PostBiomeChangeWeatherChange { .. } => EffectTag::PostBiomeChangeWeatherChange,
            Self::PostBiomeChangeTerrainChange { .. } => EffectTag::PostBiomeChangeTerrainChange,
            Self::IgnoreContact => EffectTag::IgnoreContact,
            Self::AlwaysHit => EffectTag::AlwaysHit,
            Self::IncreasePp => EffectTag::IncreasePp,
            Self::UncopiableAbility => EffectTag::UncopiableAbility,
            Self::UnsuppressableAbility => EffectTag::UnsuppressableAbility,
            Self::UnswappableAbility => EffectTag::UnswappableAbility,
            Self::NoTransformAbility => EffectTag::NoTransformAbility,
            Self::NoFusionAbility => EffectTag::NoFusionAbility,
        }
    }

    pub fn families(&self) -> Vec<EffectTag> {
        match self {
            Self::RedirectTypeMove { .. } => vec![EffectTag::RedirectMove],
            Self::PostBiomeChangeWeatherChange { .. }
            | Self::PostBiomeChangeTerrainChange { .. } => vec![EffectTag::PostBiomeChange],
            _ => Vec::new(),
        }
    }

    pub fn show_ability(&self) -> bool {
        !matches!(
            self,
            Self::DoubleBattleChance
                | Self::IgnoreOpponentStatChanges
                | Self::BypassBurnDamageReduction
                | Self::MoveAbilityBypass { .. }
                | Self::SuppressFieldAbilities
                | Self::UncopiableAbility
                | Self::UnsuppressableAbility
                | Self::UnswappableAbility
                | Self::NoTransformAbility
                | Self::NoFusionAbility
        )
    }

    fn require<T>(&self, value: Option<T>, argument: &'static str) -> Result<T> {
        value.ok_or_else(|| missing_hook_argument_error(HookCategory::Apply, self.tag(), argument))
    }

    pub fn apply(&self, context: &mut EffectContext, event: &mut ApplyEvent) -> Result<bool> {
        match self {
            Self::BlockRecoilDamage => {
                self.require(event.cancelled.as_deref_mut(), "cancelled")?
                    .set(true);
                context.set_trigger_message(context.ability_message("protected it from recoil!")?);
                Ok(true)
            }
            Self::DoubleBattleChance => {
                self.require(event.number.as_deref_mut(), "number")?
                    .update(|chance| (chance / 2.0).max(1.0));
                Ok(true)
            }
            Self::BlockItemTheft => {
                self.require(event.cancelled.as_deref_mut(), "cancelled")?
                    .set(true);
                context.set_trigger_message(context.ability_message("prevents item theft!")?);
                Ok(true)
            }
            Self::StabBoost => {
                let multiplier = self.require(event.number.as_deref_mut(), "number")?;
                if multiplier.value() > 1.0 {
                    multiplier.update(|multiplier| multiplier + 0.5);
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Self::MoveTypeChangePowerMultiplier {
                match_type,
                new_type,
                multiplier,
            } => {
                let move_type = self.require(event.move_type.as_deref_mut(), "move_type")?;
                if move_type.value() != *match_type {
                    return Ok(false);
                }
                move_type.set(*new_type);
                self.require(event.number.as_deref_mut(), "number")?
                    .update(|power| power * multiplier);
                Ok(true)
            }
            Self::BlockCrit | Self::BonusCrit => {
                self.require(event.flag.as_deref_mut(), "flag")?.set(true);
                Ok(true)
            }
            Self::BlockNonDirectDamage
            | Self::BlockOneHitKo
            | Self::BypassBurnDamageReduction
            | Self::PreventBerryUse => {
                self.require(event.cancelled.as_deref_mut(), "cancelled")?
                    .set(true);
                Ok(true)
            }
            Self::IncrementMovePriority { when, increment } => {
                let move_data = self.require(event.move_data, "move")?;
                let mon = context.mon();
                if !when.evaluate(
                    context.battle(),
                    MoveUse {
                        user: mon,
                        target: mon,
                        move_data,
                    },
                )? {
                    return Ok(false);
                }
                self.require(event.integer.as_deref_mut(), "integer")?
                    .update(|priority| priority + increment);
                Ok(true)
            }
            Self::IgnoreOpponentStatChanges => {
                self.require(event.integer.as_deref_mut(), "integer")?.set(0);
                Ok(true)
            }
            Self::StatChangeMultiplier { multiplier } => {
                self.require(event.integer.as_deref_mut(), "integer")?
                    .update(|levels| levels * multiplier);
                Ok(true)
            }
            Self::DoubleBerryEffect => {
                self.require(event.number.as_deref_mut(), "number")?
                    .update(|amount| amount * 2.0);
                Ok(true)
            }
            Self::RunSuccess => {
                self.require(event.integer.as_deref_mut(), "integer")?
                    .set(256);
                Ok(true)
            }
            Self::MaxMultiHit => {
                self.require(event.integer.as_deref_mut(), "integer")?.set(0);
                Ok(true)
            }
            Self::RedirectMove => self.redirect(context, event, None),
            Self::RedirectTypeMove { move_type } => self.redirect(context, event, Some(*move_type)),
            Self::ReduceStatusEffectDuration { status } => {
                if self.require(event.status, "status")? != *status {
                    return Ok(false);
                }
                self.require(event.integer.as_deref_mut(), "integer")?
                    .update(|turns| turns.div_euclid(2));
                Ok(true)
            }
            Self::FlinchStatChange { stats, levels } => {
                let mon = context.mon();
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, stats, *levels)?;
                Ok(true)
            }
            Self::ReduceBerryUseThreshold => {
                let ratio = hp_ratio(context.battle(), context.mon())?;
                let threshold = self.require(event.number.as_deref_mut(), "number")?;
                if threshold.value() < ratio {
                    threshold.update(|threshold| threshold * 2.0);
                    Ok(threshold.value() >= ratio)
                } else {
                    Ok(false)
                }
            }
            Self::WeightMultiplier { multiplier } => {
                self.require(event.number.as_deref_mut(), "number")?
                    .update(|weight| weight * multiplier);
                Ok(true)
            }
            Self::MoveAbilityBypass { when } => {
                if let Some(when) = when {
                    let move_data = self.require(event.move_data, "move")?;
                    let mon = context.mon();
                    if !when.evaluate(
                        context.battle(),
                        MoveUse {
                            user: mon,
                            target: mon,
                            move_data,
                        },
                    )? {
                        return Ok(false);
                    }
                }
                self.require(event.cancelled.as_deref_mut(), "cancelled")?
                    .set(true);
                Ok(true)
            }
            Self::SuppressFieldAbilities => {
                let ability = self.require(event.ability, "ability")?;
                if ability.has_tag(EffectTag::UnsuppressableAbility)
                    || ability.has_tag(EffectTag::SuppressFieldAbilities)
                {
                    return Ok(false);
                }
                self.require(event.cancelled.as_deref_mut(), "cancelled")?
                    .set(true);
                Ok(true)
            }
            Self::PostBiomeChangeWeatherChange { weather } => {
                if context.battle().weather_immutable()? {
                    return Ok(false);
                }
                let mon = context.mon();
                context.battle_mut().try_set_weather(*weather, mon)
            }
            Self::PostBiomeChangeTerrainChange { terrain } => {
                let mon = context.mon();
                context.battle_mut().try_set_terrain(*terrain, mon)
            }
            Self::IgnoreContact
            | Self::AlwaysHit
            | Self::IncreasePp
            | Self::UncopiableAbility
            | Self::UnsuppressableAbility
            | Self::UnswappableAbility
            | Self::NoTransformAbility
            | Self::NoFusionAbility => Ok(false),
        }
    }

    fn redirect(
        &self,
        context: &mut EffectContext,
        event: &mut ApplyEvent,
        move_type: Option<Type>,
    ) -> Result<bool> {
        let move_data = self.require(event.move_data, "move")?;
        if !move_data.target.is_redirectable() {
            return Ok(false);
        }
        if move_type.is_some_and(|move_type| move_type != move_data.move_type) {
            return Ok(false);
        }
        let target = self.require(event.target.as_deref_mut(), "target")?;
        if target.value() == context.mon() {
            return Ok(false);
        }
        target.set(context.mon());
        Ok(true)
    }
}
