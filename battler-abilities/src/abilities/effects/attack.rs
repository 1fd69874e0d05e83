use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::{
        BattleStatMultiplierEvent,
        EffectTag,
        MoveCondition,
        MoveUse,
        PostAttackEvent,
        PreAttackEvent,
        effects::defend::steal_held_item,
        hp_ratio,
    },
    battle::{
        Battle,
        MonHandle,
    },
    data::{
        BattleStat,
        BattlerTagType,
        StatusEffect,
        Type,
    },
    dispatch::EffectContext,
};

fn default_low_hp_multiplier() -> f64 {
    1.5
}

fn default_multiplier() -> f64 {
    1.0
}

/// The HP ratio at or below which low-HP power boosts activate.
const LOW_HP_RATIO: f64 = 0.33;

/// Effects applied to a Mon about to use a move against a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PreAttackEffect {
    /// Multiplies the power of matching moves.
    MovePowerBoost {
        when: MoveCondition,
        multiplier: f64,
    },
    /// Multiplies the power of moves of the type while the Mon is at low HP.
    LowHpMoveTypePowerBoost {
        move_type: Type,
        #[serde(default = "default_low_hp_multiplier")]
        multiplier: f64,
    },
    /// Changes the type of matching moves, multiplying their power.
    MoveTypeChange {
        new_type: Type,
        #[serde(default = "default_multiplier")]
        multiplier: f64,
        when: MoveCondition,
    },
    /// Multiplies the power of matching moves used by any Mon on the field.
    ///
    /// Only selected through its family, since the battle checks every Mon on the field for it
    /// separately.
    FieldMovePowerBoost {
        when: MoveCondition,
        multiplier: f64,
    },
}

impl PreAttackEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::MovePowerBoost { .. } => EffectTag::MovePowerBoost,
            Self::LowHpMoveTypePowerBoost { .. } => EffectTag::LowHpMoveTypePowerBoost,
            Self::MoveTypeChange { .. } => EffectTag::MoveTypeChange,
            Self::FieldMovePowerBoost { .. } => EffectTag::FieldMovePowerBoost,
        }
    }

    pub fn families(&self) -> Vec<EffectTag> {
        match self {
            Self::MovePowerBoost { .. } | Self::LowHpMoveTypePowerBoost { .. } => {
                vec![EffectTag::VariableMovePower]
            }
            Self::MoveTypeChange { .. } => Vec::new(),
            Self::FieldMovePowerBoost { .. } => vec![EffectTag::FieldVariableMovePower],
        }
    }

    pub fn show_ability(&self) -> bool {
        !matches!(self, Self::FieldMovePowerBoost { .. })
    }

    pub fn intrinsic_condition(&self, battle: &dyn Battle, mon: MonHandle) -> Result<bool> {
        match self {
            Self::LowHpMoveTypePowerBoost { .. } => Ok(hp_ratio(battle, mon)? <= LOW_HP_RATIO),
            _ => Ok(true),
        }
    }

    pub fn apply(&self, context: &mut EffectContext, event: &mut PreAttackEvent) -> Result<bool> {
        let move_use = MoveUse {
            user: context.mon(),
            target: event.defender,
            move_data: event.move_data,
        };
        match self {
            Self::MovePowerBoost { when, multiplier }
            | Self::FieldMovePowerBoost { when, multiplier } => {
                if !when.evaluate(context.battle(), move_use)? {
                    return Ok(false);
                }
                event.power.update(|power| power * multiplier);
                Ok(true)
            }
            Self::LowHpMoveTypePowerBoost {
                move_type,
                multiplier,
            } => {
                if event.move_data.move_type != *move_type {
                    return Ok(false);
                }
                event.power.update(|power| power * multiplier);
                Ok(true)
            }
            Self::MoveTypeChange {
                new_type,
                multiplier,
                when,
            } => {
                if !when.evaluate(context.battle(), move_use)? {
                    return Ok(false);
                }
                if let Some(move_type) = event.move_type.as_deref_mut() {
                    move_type.set(*new_type);
                }
                event.power.update(|power| power * multiplier);
                Ok(true)
            }
        }
    }
}

/// Effects applied to a Mon after it uses a move against a target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostAttackEffect {
    /// Steals a held item from the target after damaging it.
    StealHeldItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        when: Option<MoveCondition>,
    },
    /// Inflicts a status on the target.
    ApplyStatus {
        #[serde(default)]
        contact_required: bool,
        chance: u32,
        statuses: Vec<StatusEffect>,
    },
    /// Applies a random tag to the target.
    ApplyTag {
        #[serde(default)]
        contact_required: bool,
        chance: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        when: Option<MoveCondition>,
        tags: Vec<BattlerTagType>,
    },
}

impl PostAttackEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::StealHeldItem { .. } => EffectTag::PostAttackStealHeldItem,
            Self::ApplyStatus { .. } => EffectTag::PostAttackApplyStatus,
            Self::ApplyTag { .. } => EffectTag::PostAttackApplyTag,
        }
    }

    pub fn apply(&self, context: &mut EffectContext, event: PostAttackEvent) -> Result<bool> {
        let mon = context.mon();
        let PostAttackEvent {
            defender,
            move_data,
            hit_result,
        } = event;
        let move_use = MoveUse {
            user: mon,
            target: defender,
            move_data,
        };
        match self {
            Self::StealHeldItem { when } => {
                if !hit_result.dealt_damage() {
                    return Ok(false);
                }
                if let Some(when) = when {
                    if !when.evaluate(context.battle(), move_use)? {
                        return Ok(false);
                    }
                }
                steal_held_item(context, defender)
            }
            Self::ApplyStatus {
                contact_required,
                chance,
                statuses,
            } => {
                if mon == defender
                    || (*contact_required && !context.makes_contact(move_data, mon)?)
                    || !context.roll_percent(*chance)
                {
                    return Ok(false);
                }
                let Some(status) = context.sample(statuses).copied() else {
                    return Ok(false);
                };
                context
                    .battle_mut()
                    .try_set_status(defender, status, Some(mon))
            }
            Self::ApplyTag {
                contact_required,
                chance,
                when,
                tags,
            } => {
                if mon == defender
                    || (*contact_required && !context.makes_contact(move_data, mon)?)
                {
                    return Ok(false);
                }
                let chance = match when {
                    Some(when) if !when.evaluate(context.battle(), move_use)? => 0,
                    _ => *chance,
                };
                if !context.roll_percent(chance) {
                    return Ok(false);
                }
                let Some(tag) = context.sample(tags).copied() else {
                    return Ok(false);
                };
                context.battle_mut().add_tag(defender, tag, 0, Some(mon))
            }
        }
    }
}

/// Effects that modify the stats of a Mon as they are calculated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BattleStatMultiplierEffect {
    Multiply { stat: BattleStat, multiplier: f64 },
}

impl BattleStatMultiplierEffect {
    pub fn tag(&self) -> EffectTag {
        EffectTag::BattleStatMultiplier
    }

    pub fn apply(
        &self,
        _: &mut EffectContext,
        event: &mut BattleStatMultiplierEvent,
    ) -> Result<bool> {
        match self {
            Self::Multiply { stat, multiplier } => {
                if event.stat != *stat {
                    return Ok(false);
                }
                event.value.update(|value| value * multiplier);
                Ok(true)
            }
        }
    }
}
