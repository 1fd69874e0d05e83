use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::{
        CheckTrappedEvent,
        EffectTag,
        FormRule,
        effects::defend::change_form,
        hp_ratio,
    },
    data::BattleStat,
    dispatch::EffectContext,
};

/// Effects applied at the end of each turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostTurnEffect {
    /// Cures the Mon's status.
    ResetStatus {
        /// Only cures on a one-in-N roll.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        one_in: Option<u64>,
    },
    StatChange {
        stats: Vec<BattleStat>,
        levels: i8,
    },
    /// Restores a sixteenth of maximum HP.
    Heal,
    FormChange {
        form: FormRule,
    },
}

impl PostTurnEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::ResetStatus { .. } => EffectTag::PostTurnResetStatus,
            Self::StatChange { .. } => EffectTag::PostTurnStatChange,
            Self::Heal => EffectTag::PostTurnHeal,
            Self::FormChange { .. } => EffectTag::PostTurnFormChange,
        }
    }

    pub fn apply(&self, context: &mut EffectContext) -> Result<bool> {
        let mon = context.mon();
        match self {
            Self::ResetStatus { one_in } => {
                if let Some(one_in) = one_in {
                    if context.random_int(*one_in) != 0 {
                        return Ok(false);
                    }
                }
                let Some(status) = context.battle().status(mon)? else {
                    return Ok(false);
                };
                context.set_trigger_message(format!(
                    "{} {}",
                    context.mon_name()?,
                    status.cure_text()
                ));
                context.battle_mut().cure_status(mon)?;
                Ok(true)
            }
            Self::StatChange { stats, levels } => {
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, stats, *levels)?;
                Ok(true)
            }
            Self::Heal => {
                if hp_ratio(context.battle(), mon)? >= 1.0 {
                    return Ok(false);
                }
                let amount = (context.battle().max_hp(mon)? / 16).max(1);
                context.battle_mut().heal(mon, amount)?;
                context.set_trigger_message(
                    context.ability_message("restored its HP a little!")?,
                );
                Ok(true)
            }
            Self::FormChange { form } => change_form(context, form),
        }
    }
}

/// Effects applied when an opponent checks whether it can switch out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CheckTrappedEffect {
    /// Prevents the opponent from switching out.
    ArenaTrap,
}

impl CheckTrappedEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::ArenaTrap => EffectTag::ArenaTrap,
        }
    }

    pub fn apply(&self, context: &mut EffectContext, event: &mut CheckTrappedEvent) -> Result<bool> {
        match self {
            Self::ArenaTrap => {
                event.trapped.set(true);
                context.set_trigger_message(context.ability_message("prevents switching!")?);
                Ok(true)
            }
        }
    }
}
