use std::fmt::{
    self,
    Display,
};

/// A tag that selects ability attributes for a dispatch.
///
/// Every attribute carries several tags: the root tag of its hook, the tags of any families it
/// belongs to, and its own concrete tag. Dispatching with a root tag runs every attribute of the
/// hook, while dispatching with a family or concrete tag narrows the set.
///
/// The generic hook has no root tag, since its attributes are unrelated to one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTag {
    // Hook roots.
    PostBattleInit,
    PreDefend,
    PostDefend,
    PreAttack,
    PostAttack,
    BattleStatMultiplier,
    PostKnockOut,
    PostVictory,
    PostSummon,
    PreSwitchOut,
    PreStatChange,
    PostStatChange,
    PreSetStatus,
    PreApplyBattlerTag,
    PreWeatherEffect,
    PostWeatherChange,
    PostWeatherLapse,
    PostTerrainChange,
    PostTurn,
    CheckTrapped,
    PostBattle,
    PostFaint,

    // Families.
    TypeImmunity,
    MoveImmunity,
    VariableMovePower,
    FieldVariableMovePower,
    PreWeatherDamage,
    RedirectMove,
    PostBiomeChange,

    // Generic hook.
    BlockRecoilDamage,
    DoubleBattleChance,
    BlockItemTheft,
    StabBoost,
    MoveTypeChangePowerMultiplier,
    BlockCrit,
    BonusCrit,
    BlockNonDirectDamage,
    BlockOneHitKo,
    IncrementMovePriority,
    IgnoreOpponentStatChanges,
    StatChangeMultiplier,
    BypassBurnDamageReduction,
    DoubleBerryEffect,
    PreventBerryUse,
    RunSuccess,
    MaxMultiHit,
    RedirectTypeMove,
    ReduceStatusEffectDuration,
    FlinchStatChange,
    ReduceBerryUseThreshold,
    WeightMultiplier,
    MoveAbilityBypass,
    SuppressFieldAbilities,
    PostBiomeChangeWeatherChange,
    PostBiomeChangeTerrainChange,
    IgnoreContact,
    AlwaysHit,
    IncreasePp,
    UncopiableAbility,
    UnsuppressableAbility,
    UnswappableAbility,
    NoTransformAbility,
    NoFusionAbility,

    // Concrete effects of the other hooks.
    PostBattleInitFormChange,
    PostBattleInitStatChange,
    PreDefendFormChange,
    PreDefendFullHpEndure,
    ReceivedMoveDamageMultiplier,
    PreDefendMovePowerToOne,
    TypeImmunityHeal,
    TypeImmunityStatChange,
    TypeImmunityAddTag,
    NonSuperEffectiveImmunity,
    FieldPriorityMoveImmunity,
    MoveImmunityStatChange,
    PostDefendDisguise,
    PostDefendFormChange,
    PostDefendStatChange,
    PostDefendApplyTag,
    PostDefendTypeChange,
    PostDefendTerrainChange,
    PostDefendContactApplyStatus,
    PostDefendContactApplyTagChance,
    PostDefendCritStatChange,
    PostDefendContactDamage,
    PostDefendWeatherChange,
    PostDefendAbilitySwap,
    PostDefendAbilityGive,
    PostDefendStealHeldItem,
    MovePowerBoost,
    LowHpMoveTypePowerBoost,
    MoveTypeChange,
    FieldMovePowerBoost,
    PostAttackStealHeldItem,
    PostAttackApplyStatus,
    PostAttackApplyTag,
    PostKnockOutStatChange,
    CopyFaintedAllyAbility,
    PostVictoryStatChange,
    PostSummonMessage,
    PostSummonAddTag,
    PostSummonStatChange,
    Download,
    PostSummonWeatherChange,
    PostSummonTerrainChange,
    PostSummonFormChange,
    Trace,
    PostSummonTransform,
    PreSwitchOutResetStatus,
    PreSwitchOutHeal,
    ProtectStat,
    PostStatChangeStatChange,
    StatusEffectImmunity,
    BattlerTagImmunity,
    BlockWeatherDamage,
    SuppressWeatherEffect,
    PostWeatherChangeAddTag,
    PostWeatherLapseHeal,
    PostWeatherLapseDamage,
    PostTerrainChangeAddTag,
    PostTurnResetStatus,
    PostTurnStatChange,
    PostTurnHeal,
    PostTurnFormChange,
    ArenaTrap,
    PostBattleLoot,
    PostFaintContactDamage,

    /// A tag for an effect defined outside of this crate.
    Custom(&'static str),
}

impl Display for EffectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(name) => write!(f, "{name}"),
            _ => write!(f, "{self:?}"),
        }
    }
}
