use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::{
        EffectTag,
        PreApplyBattlerTagEvent,
        PreSetStatusEvent,
    },
    data::{
        BattlerTagType,
        StatusEffect,
    },
    dispatch::EffectContext,
};

/// Effects applied before a status is inflicted on the Mon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PreSetStatusEffect {
    /// Prevents the given statuses, or every status if the list is empty.
    StatusEffectImmunity {
        #[serde(default)]
        statuses: Vec<StatusEffect>,
    },
}

impl PreSetStatusEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::StatusEffectImmunity { .. } => EffectTag::StatusEffectImmunity,
        }
    }

    pub fn apply(&self, context: &mut EffectContext, event: &mut PreSetStatusEvent) -> Result<bool> {
        match self {
            Self::StatusEffectImmunity { statuses } => {
                if !statuses.is_empty() && !statuses.contains(&event.status) {
                    return Ok(false);
                }
                event.cancelled.set(true);
                let prevented = if statuses.is_empty() {
                    "status problems"
                } else {
                    event.status.descriptor()
                };
                context.set_trigger_message(
                    context.ability_message(&format!("prevents {prevented}!"))?,
                );
                Ok(true)
            }
        }
    }
}

/// Effects applied before a volatile tag is attached to the Mon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PreApplyBattlerTagEffect {
    BattlerTagImmunity { tag: BattlerTagType },
}

impl PreApplyBattlerTagEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::BattlerTagImmunity { .. } => EffectTag::BattlerTagImmunity,
        }
    }

    pub fn apply(
        &self,
        context: &mut EffectContext,
        event: &mut PreApplyBattlerTagEvent,
    ) -> Result<bool> {
        match self {
            Self::BattlerTagImmunity { tag } => {
                if event.tag != *tag {
                    return Ok(false);
                }
                event.cancelled.set(true);
                context.set_trigger_message(
                    context.ability_message(&format!("prevents {}!", tag.descriptor()))?,
                );
                Ok(true)
            }
        }
    }
}
