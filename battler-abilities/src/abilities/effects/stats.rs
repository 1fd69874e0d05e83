use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::{
        EffectTag,
        PostStatChangeEvent,
        PreStatChangeEvent,
        StatChangeCondition,
    },
    data::BattleStat,
    dispatch::EffectContext,
};

/// Effects applied before a stat of the Mon is lowered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PreStatChangeEffect {
    /// Prevents the stat, or every stat if none is given, from being lowered.
    ProtectStat {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stat: Option<BattleStat>,
    },
}

impl PreStatChangeEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::ProtectStat { .. } => EffectTag::ProtectStat,
        }
    }

    pub fn apply(
        &self,
        context: &mut EffectContext,
        event: &mut PreStatChangeEvent,
    ) -> Result<bool> {
        match self {
            Self::ProtectStat { stat } => {
                if stat.is_some_and(|stat| stat != event.stat) {
                    return Ok(false);
                }
                event.cancelled.set(true);
                let protected = match stat {
                    Some(stat) => stat.display_name(),
                    None => "stats",
                };
                context.set_trigger_message(
                    context.ability_message(&format!("prevents lowering its {protected}!"))?,
                );
                Ok(true)
            }
        }
    }
}

/// Effects applied after stats of the Mon change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostStatChangeEffect {
    /// Changes stats of the Mon in response to an opponent changing its stats.
    StatChange {
        condition: StatChangeCondition,
        stats: Vec<BattleStat>,
        levels: i8,
    },
}

impl PostStatChangeEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::StatChange { .. } => EffectTag::PostStatChangeStatChange,
        }
    }

    pub fn apply(&self, context: &mut EffectContext, event: PostStatChangeEvent) -> Result<bool> {
        match self {
            Self::StatChange {
                condition,
                stats,
                levels,
            } => {
                if event.self_targeted || !condition.evaluate(event.levels) {
                    return Ok(false);
                }
                let mon = context.mon();
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, stats, *levels)?;
                Ok(true)
            }
        }
    }
}
