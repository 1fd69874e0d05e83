mod ability;
mod attribute;
mod condition;
mod effects;
mod hook;
mod tag;

pub use ability::{
    Ability,
    AbilityBuilder,
    AbilityData,
    AbilityFlag,
};
pub use attribute::{
    Attribute,
    AttributeData,
};
pub use condition::{
    Condition,
    ConditionFn,
    FormFn,
    FormRule,
    MoveCondition,
    MoveConditionFn,
    MoveUse,
    StatChangeCondition,
    StatSelector,
    hp_ratio,
};
pub use effects::{
    ApplyEffect,
    BattleStatMultiplierEffect,
    CheckTrappedEffect,
    CustomEffect,
    CustomEffectRef,
    Effect,
    PostAttackEffect,
    PostBattleEffect,
    PostBattleInitEffect,
    PostDefendEffect,
    PostFaintEffect,
    PostKnockOutEffect,
    PostStatChangeEffect,
    PostSummonEffect,
    PostTerrainChangeEffect,
    PostTurnEffect,
    PostVictoryEffect,
    PostWeatherChangeEffect,
    PostWeatherLapseEffect,
    PreApplyBattlerTagEffect,
    PreAttackEffect,
    PreDefendEffect,
    PreSetStatusEffect,
    PreStatChangeEffect,
    PreSwitchOutEffect,
    PreWeatherEffect,
};
pub use hook::{
    ApplyEvent,
    BattleStatMultiplierEvent,
    CheckTrappedEvent,
    HookCategory,
    HookEvent,
    MoveHitEvent,
    PostAttackEvent,
    PostStatChangeEvent,
    PreApplyBattlerTagEvent,
    PreAttackEvent,
    PreDefendEvent,
    PreSetStatusEvent,
    PreStatChangeEvent,
    PreWeatherEffectEvent,
};
pub use tag::EffectTag;
