//! Concrete ability effects, grouped by the hook they respond to.

mod attack;
mod defend;
mod field;
mod generic;
mod lifecycle;
mod stats;
mod status;
mod turn;

use std::{
    fmt,
    fmt::Debug,
    sync::Arc,
};

use anyhow::Result;
pub use attack::{
    BattleStatMultiplierEffect,
    PostAttackEffect,
    PreAttackEffect,
};
pub use defend::{
    PostDefendEffect,
    PostFaintEffect,
    PreDefendEffect,
};
pub use field::{
    PostTerrainChangeEffect,
    PostWeatherChangeEffect,
    PostWeatherLapseEffect,
    PreWeatherEffect,
};
pub use generic::ApplyEffect;
pub use lifecycle::{
    PostBattleEffect,
    PostBattleInitEffect,
    PostKnockOutEffect,
    PostSummonEffect,
    PostVictoryEffect,
    PreSwitchOutEffect,
};
use serde::{
    Deserialize,
    Serialize,
};
pub use stats::{
    PostStatChangeEffect,
    PreStatChangeEffect,
};
pub use status::{
    PreApplyBattlerTagEffect,
    PreSetStatusEffect,
};
pub use turn::{
    CheckTrappedEffect,
    PostTurnEffect,
};

use crate::{
    abilities::{
        EffectTag,
        HookCategory,
        HookEvent,
    },
    battle::{
        Battle,
        MonHandle,
    },
    dispatch::EffectContext,
};

/// An ability effect defined in code, outside of the built-in effects.
///
/// Custom effects go through the same dispatch as built-in effects: they are selected by tag,
/// gated by conditions, and presented by the dispatcher.
pub trait CustomEffect: Send + Sync {
    /// The name of the effect, which doubles as its concrete tag.
    fn name(&self) -> &'static str;

    /// The hook the effect responds to.
    fn hook(&self) -> HookCategory;

    /// Family tags the effect belongs to, in addition to its hook and concrete tag.
    fn families(&self) -> Vec<EffectTag> {
        Vec::new()
    }

    fn show_ability(&self) -> bool {
        true
    }

    /// Applies the effect, returning whether it took effect.
    ///
    /// The event always belongs to [`Self::hook`].
    fn apply(&self, context: &mut EffectContext, event: &mut HookEvent) -> Result<bool>;
}

/// A shared reference to a [`CustomEffect`].
#[derive(Clone)]
pub struct CustomEffectRef(pub Arc<dyn CustomEffect>);

impl Debug for CustomEffectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomEffect({})", self.0.name())
    }
}

/// The behavior of an ability attribute.
///
/// Every effect belongs to exactly one hook. Effects are stateless and shared between every Mon
/// with the ability.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "hook")]
pub enum Effect {
    Apply(ApplyEffect),
    PostBattleInit(PostBattleInitEffect),
    PreDefend(PreDefendEffect),
    PostDefend(PostDefendEffect),
    PreAttack(PreAttackEffect),
    PostAttack(PostAttackEffect),
    BattleStatMultiplier(BattleStatMultiplierEffect),
    PostKnockOut(PostKnockOutEffect),
    PostVictory(PostVictoryEffect),
    PostSummon(PostSummonEffect),
    PreSwitchOut(PreSwitchOutEffect),
    PreStatChange(PreStatChangeEffect),
    PostStatChange(PostStatChangeEffect),
    PreSetStatus(PreSetStatusEffect),
    PreApplyBattlerTag(PreApplyBattlerTagEffect),
    PreWeatherEffect(PreWeatherEffect),
    PostWeatherChange(PostWeatherChangeEffect),
    PostWeatherLapse(PostWeatherLapseEffect),
    PostTerrainChange(PostTerrainChangeEffect),
    PostTurn(PostTurnEffect),
    CheckTrapped(CheckTrappedEffect),
    PostBattle(PostBattleEffect),
    PostFaint(PostFaintEffect),
    #[serde(skip)]
    Custom(CustomEffectRef),
}

impl Effect {
    /// Wraps a code-defined effect.
    pub fn custom<E>(effect: E) -> Self
    where
        E: CustomEffect + 'static,
    {
        Self::Custom(CustomEffectRef(Arc::new(effect)))
    }

    /// The hook the effect responds to.
    pub fn hook(&self) -> HookCategory {
        match self {
            Self::Apply(_) => HookCategory::Apply,
            Self::PostBattleInit(_) => HookCategory::PostBattleInit,
            Self::PreDefend(_) => HookCategory::PreDefend,
            Self::PostDefend(_) => HookCategory::PostDefend,
            Self::PreAttack(_) => HookCategory::PreAttack,
            Self::PostAttack(_) => HookCategory::PostAttack,
            Self::BattleStatMultiplier(_) => HookCategory::BattleStatMultiplier,
            Self::PostKnockOut(_) => HookCategory::PostKnockOut,
            Self::PostVictory(_) => HookCategory::PostVictory,
            Self::PostSummon(_) => HookCategory::PostSummon,
            Self::PreSwitchOut(_) => HookCategory::PreSwitchOut,
            Self::PreStatChange(_) => HookCategory::PreStatChange,
            Self::PostStatChange(_) => HookCategory::PostStatChange,
            Self::PreSetStatus(_) => HookCategory::PreSetStatus,
            Self::PreApplyBattlerTag(_) => HookCategory::PreApplyBattlerTag,
            Self::PreWeatherEffect(_) => HookCategory::PreWeatherEffect,
            Self::PostWeatherChange(_) => HookCategory::PostWeatherChange,
            Self::PostWeatherLapse(_) => HookCategory::PostWeatherLapse,
            Self::PostTerrainChange(_) => HookCategory::PostTerrainChange,
            Self::PostTurn(_) => HookCategory::PostTurn,
            Self::CheckTrapped(_) => HookCategory::CheckTrapped,
            Self::PostBattle(_) => HookCategory::PostBattle,
            Self::PostFaint(_) => HookCategory::PostFaint,
            Self::Custom(effect) => effect.0.hook(),
        }
    }

    /// The concrete tag of the effect, which names its behavior.
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::Apply(effect) => effect.tag(),
            Self::PostBattleInit(effect) => effect.tag(),
            Self::PreDefend(effect) => effect.tag(),
            Self::PostDefend(effect) => effect.tag(),
            Self::PreAttack(effect) => effect.tag(),
            Self::PostAttack(effect) => effect.tag(),
            Self::BattleStatMultiplier(effect) => effect.tag(),
            Self::PostKnockOut(effect) => effect.tag(),
            Self::PostVictory(effect) => effect.tag(),
            Self::PostSummon(effect) => effect.tag(),
            Self::PreSwitchOut(effect) => effect.tag(),
            Self::PreStatChange(effect) => effect.tag(),
            Self::PostStatChange(effect) => effect.tag(),
            Self::PreSetStatus(effect) => effect.tag(),
            Self::PreApplyBattlerTag(effect) => effect.tag(),
            Self::PreWeatherEffect(effect) => effect.tag(),
            Self::PostWeatherChange(effect) => effect.tag(),
            Self::PostWeatherLapse(effect) => effect.tag(),
            Self::PostTerrainChange(effect) => effect.tag(),
            Self::PostTurn(effect) => effect.tag(),
            Self::CheckTrapped(effect) => effect.tag(),
            Self::PostBattle(effect) => effect.tag(),
            Self::PostFaint(effect) => effect.tag(),
            Self::Custom(effect) => EffectTag::Custom(effect.0.name()),
        }
    }

    /// Family tags of the effect, between its hook and its concrete tag.
    fn families(&self) -> Vec<EffectTag> {
        match self {
            Self::Apply(effect) => effect.families(),
            Self::PreDefend(effect) => effect.families(),
            Self::PreAttack(effect) => effect.families(),
            Self::PreWeatherEffect(effect) => effect.families(),
            Self::Custom(effect) => effect.0.families(),
            _ => Vec::new(),
        }
    }

    /// Every tag that selects the effect: the root tag of its hook, its families, and its
    /// concrete tag.
    pub fn tags(&self) -> Vec<EffectTag> {
        let mut tags = Vec::new();
        if !self.excluded_from_root() {
            tags.extend(self.hook().root_tag());
        }
        tags.extend(self.families());
        tags.push(self.tag());
        tags
    }

    /// Effects only selected through their families, never through the root of their hook.
    fn excluded_from_root(&self) -> bool {
        matches!(
            self,
            Self::PreAttack(PreAttackEffect::FieldMovePowerBoost { .. })
        )
    }

    /// Is the ability banner shown by default when the effect applies?
    pub fn show_ability(&self) -> bool {
        match self {
            Self::Apply(effect) => effect.show_ability(),
            Self::PreAttack(effect) => effect.show_ability(),
            Self::BattleStatMultiplier(_) => false,
            Self::PostSummon(effect) => effect.show_ability(),
            Self::CheckTrapped(_) => false,
            Self::Custom(effect) => effect.0.show_ability(),
            _ => true,
        }
    }

    /// Checks the condition built into the effect itself.
    pub fn intrinsic_condition(&self, battle: &dyn Battle, mon: MonHandle) -> Result<bool> {
        match self {
            Self::PreAttack(effect) => effect.intrinsic_condition(battle, mon),
            Self::PostDefend(effect) => effect.intrinsic_condition(battle, mon),
            Self::PostWeatherLapse(effect) => effect.intrinsic_condition(battle, mon),
            _ => Ok(true),
        }
    }

    /// Applies the effect for the Mon the context belongs to.
    ///
    /// Returns whether the effect took effect. An event for a different hook is never applied.
    pub fn apply(&self, context: &mut EffectContext, event: &mut HookEvent) -> Result<bool> {
        match (self, event) {
            (Self::Apply(effect), HookEvent::Apply(event)) => effect.apply(context, event),
            (Self::PostBattleInit(effect), HookEvent::PostBattleInit) => effect.apply(context),
            (Self::PreDefend(effect), HookEvent::PreDefend(event)) => effect.apply(context, event),
            (Self::PostDefend(effect), HookEvent::PostDefend(event)) => {
                effect.apply(context, *event)
            }
            (Self::PreAttack(effect), HookEvent::PreAttack(event)) => effect.apply(context, event),
            (Self::PostAttack(effect), HookEvent::PostAttack(event)) => {
                effect.apply(context, *event)
            }
            (Self::BattleStatMultiplier(effect), HookEvent::BattleStatMultiplier(event)) => {
                effect.apply(context, event)
            }
            (Self::PostKnockOut(effect), HookEvent::PostKnockOut { knocked_out }) => {
                effect.apply(context, *knocked_out)
            }
            (Self::PostVictory(effect), HookEvent::PostVictory) => effect.apply(context),
            (Self::PostSummon(effect), HookEvent::PostSummon) => effect.apply(context),
            (Self::PreSwitchOut(effect), HookEvent::PreSwitchOut) => effect.apply(context),
            (Self::PreStatChange(effect), HookEvent::PreStatChange(event)) => {
                effect.apply(context, event)
            }
            (Self::PostStatChange(effect), HookEvent::PostStatChange(event)) => {
                effect.apply(context, *event)
            }
            (Self::PreSetStatus(effect), HookEvent::PreSetStatus(event)) => {
                effect.apply(context, event)
            }
            (Self::PreApplyBattlerTag(effect), HookEvent::PreApplyBattlerTag(event)) => {
                effect.apply(context, event)
            }
            (Self::PreWeatherEffect(effect), HookEvent::PreWeatherEffect(event)) => {
                effect.apply(context, event)
            }
            (Self::PostWeatherChange(effect), HookEvent::PostWeatherChange { weather }) => {
                effect.apply(context, *weather)
            }
            (Self::PostWeatherLapse(effect), HookEvent::PostWeatherLapse { .. }) => {
                effect.apply(context)
            }
            (Self::PostTerrainChange(effect), HookEvent::PostTerrainChange { terrain }) => {
                effect.apply(context, *terrain)
            }
            (Self::PostTurn(effect), HookEvent::PostTurn) => effect.apply(context),
            (Self::CheckTrapped(effect), HookEvent::CheckTrapped(event)) => {
                effect.apply(context, event)
            }
            (Self::PostBattle(effect), HookEvent::PostBattle) => effect.apply(context),
            (Self::PostFaint(effect), HookEvent::PostFaint(event)) => {
                effect.apply(context, *event)
            }
            (Self::Custom(effect), event) if effect.0.hook() == event.hook() => {
                effect.0.apply(context, event)
            }
            _ => Ok(false),
        }
    }
}
