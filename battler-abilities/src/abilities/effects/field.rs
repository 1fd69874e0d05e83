use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::{
        EffectTag,
        PreWeatherEffectEvent,
        hp_ratio,
    },
    battle::{
        Battle,
        MonHandle,
    },
    data::{
        BattlerTagType,
        TerrainType,
        WeatherType,
    },
    dispatch::EffectContext,
};

fn default_factor() -> u32 {
    1
}

/// HP restored or lost per weather lapse, as a fraction of maximum HP scaled by the factor.
fn weather_fraction(max_hp: u32, factor: u32) -> f64 {
    max_hp as f64 / (16.0 / factor as f64)
}

/// Effects applied before the weather affects the Mon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PreWeatherEffect {
    /// Blocks damage from the given weathers, or from all weathers if none are given.
    BlockWeatherDamage {
        #[serde(default)]
        weathers: Vec<WeatherType>,
    },
    /// Suppresses the effects of the weather.
    SuppressWeatherEffect {
        /// Also suppresses weather that cannot be replaced.
        #[serde(default)]
        affects_immutable: bool,
    },
}

impl PreWeatherEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::BlockWeatherDamage { .. } => EffectTag::BlockWeatherDamage,
            Self::SuppressWeatherEffect { .. } => EffectTag::SuppressWeatherEffect,
        }
    }

    pub fn families(&self) -> Vec<EffectTag> {
        match self {
            Self::BlockWeatherDamage { .. } => vec![EffectTag::PreWeatherDamage],
            Self::SuppressWeatherEffect { .. } => Vec::new(),
        }
    }

    pub fn apply(
        &self,
        context: &mut EffectContext,
        event: &mut PreWeatherEffectEvent,
    ) -> Result<bool> {
        match self {
            Self::BlockWeatherDamage { weathers } => {
                let blocked = weathers.is_empty()
                    || event
                        .weather
                        .is_some_and(|weather| weathers.contains(&weather));
                if !blocked {
                    return Ok(false);
                }
                event.cancelled.set(true);
                Ok(true)
            }
            Self::SuppressWeatherEffect { affects_immutable } => {
                if !affects_immutable && context.battle().weather_immutable()? {
                    return Ok(false);
                }
                event.cancelled.set(true);
                Ok(true)
            }
        }
    }
}

/// Effects applied after the weather changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostWeatherChangeEffect {
    AddTag {
        tag: BattlerTagType,
        #[serde(default)]
        turns: u8,
        weathers: Vec<WeatherType>,
    },
}

impl PostWeatherChangeEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::AddTag { .. } => EffectTag::PostWeatherChangeAddTag,
        }
    }

    pub fn apply(&self, context: &mut EffectContext, weather: WeatherType) -> Result<bool> {
        match self {
            Self::AddTag {
                tag,
                turns,
                weathers,
            } => {
                if !weathers.contains(&weather) {
                    return Ok(false);
                }
                let mon = context.mon();
                context.battle_mut().add_tag(mon, *tag, *turns, Some(mon))
            }
        }
    }
}

/// Effects applied each turn the weather lasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostWeatherLapseEffect {
    /// Restores `factor / 16` of maximum HP.
    Heal {
        #[serde(default = "default_factor")]
        factor: u32,
        weathers: Vec<WeatherType>,
    },
    /// Loses `factor / 16` of maximum HP while damaged.
    Damage {
        #[serde(default = "default_factor")]
        factor: u32,
        weathers: Vec<WeatherType>,
    },
}

impl PostWeatherLapseEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::Heal { .. } => EffectTag::PostWeatherLapseHeal,
            Self::Damage { .. } => EffectTag::PostWeatherLapseDamage,
        }
    }

    fn weathers(&self) -> &[WeatherType] {
        match self {
            Self::Heal { weathers, .. } | Self::Damage { weathers, .. } => weathers,
        }
    }

    pub fn intrinsic_condition(&self, battle: &dyn Battle, _: MonHandle) -> Result<bool> {
        if battle.weather_suppressed()? {
            return Ok(false);
        }
        Ok(battle
            .weather()?
            .is_some_and(|weather| self.weathers().contains(&weather)))
    }

    pub fn apply(&self, context: &mut EffectContext) -> Result<bool> {
        let mon = context.mon();
        if hp_ratio(context.battle(), mon)? >= 1.0 {
            return Ok(false);
        }
        let max_hp = context.battle().max_hp(mon)?;
        match self {
            Self::Heal { factor, .. } => {
                let amount = (weather_fraction(max_hp, *factor).floor() as u32).max(1);
                context.battle_mut().heal(mon, amount)?;
                context.set_trigger_message(
                    context.ability_message("restored its HP a little!")?,
                );
                Ok(true)
            }
            Self::Damage { factor, .. } => {
                let amount = weather_fraction(max_hp, *factor).ceil() as u32;
                context.battle_mut().damage(mon, amount)?;
                context.set_trigger_message(format!(
                    "{} is hurt by its {}!",
                    context.mon_name()?,
                    context.ability_name()
                ));
                Ok(true)
            }
        }
    }
}

/// Effects applied after the terrain changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostTerrainChangeEffect {
    AddTag {
        tag: BattlerTagType,
        #[serde(default)]
        turns: u8,
        terrains: Vec<TerrainType>,
    },
}

impl PostTerrainChangeEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::AddTag { .. } => EffectTag::PostTerrainChangeAddTag,
        }
    }

    pub fn apply(&self, context: &mut EffectContext, terrain: TerrainType) -> Result<bool> {
        match self {
            Self::AddTag {
                tag,
                turns,
                terrains,
            } => {
                if !terrains.contains(&terrain) {
                    return Ok(false);
                }
                let mon = context.mon();
                context.battle_mut().add_tag(mon, *tag, *turns, Some(mon))
            }
        }
    }
}
