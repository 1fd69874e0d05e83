use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    abilities::{
        Ability,
        EffectTag,
    },
    battle::MonHandle,
    common::{
        BooleanHolder,
        IntegerHolder,
        NumberHolder,
        TargetHolder,
        TypeHolder,
    },
    data::{
        BattleStat,
        BattlerTagType,
        HitResult,
        MoveData,
        StatusEffect,
        TerrainType,
        WeatherType,
    },
};

/// A moment in battle at which abilities are consulted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum HookCategory {
    /// Checks made throughout the battle that do not belong to a single moment.
    #[string = "Apply"]
    Apply,
    #[string = "PostBattleInit"]
    PostBattleInit,
    #[string = "PreDefend"]
    PreDefend,
    #[string = "PostDefend"]
    PostDefend,
    #[string = "PreAttack"]
    PreAttack,
    #[string = "PostAttack"]
    PostAttack,
    #[string = "BattleStatMultiplier"]
    BattleStatMultiplier,
    #[string = "PostKnockOut"]
    PostKnockOut,
    #[string = "PostVictory"]
    PostVictory,
    #[string = "PostSummon"]
    PostSummon,
    #[string = "PreSwitchOut"]
    PreSwitchOut,
    #[string = "PreStatChange"]
    PreStatChange,
    #[string = "PostStatChange"]
    PostStatChange,
    #[string = "PreSetStatus"]
    PreSetStatus,
    #[string = "PreApplyBattlerTag"]
    PreApplyBattlerTag,
    #[string = "PreWeatherEffect"]
    PreWeatherEffect,
    #[string = "PostWeatherChange"]
    PostWeatherChange,
    #[string = "PostWeatherLapse"]
    PostWeatherLapse,
    #[string = "PostTerrainChange"]
    PostTerrainChange,
    #[string = "PostTurn"]
    PostTurn,
    #[string = "CheckTrapped"]
    CheckTrapped,
    #[string = "PostBattle"]
    PostBattle,
    #[string = "PostFaint"]
    PostFaint,
}

impl HookCategory {
    /// The tag selecting every attribute of the hook, if the hook has one.
    pub fn root_tag(&self) -> Option<EffectTag> {
        match self {
            Self::Apply => None,
            Self::PostBattleInit => Some(EffectTag::PostBattleInit),
            Self::PreDefend => Some(EffectTag::PreDefend),
            Self::PostDefend => Some(EffectTag::PostDefend),
            Self::PreAttack => Some(EffectTag::PreAttack),
            Self::PostAttack => Some(EffectTag::PostAttack),
            Self::BattleStatMultiplier => Some(EffectTag::BattleStatMultiplier),
            Self::PostKnockOut => Some(EffectTag::PostKnockOut),
            Self::PostVictory => Some(EffectTag::PostVictory),
            Self::PostSummon => Some(EffectTag::PostSummon),
            Self::PreSwitchOut => Some(EffectTag::PreSwitchOut),
            Self::PreStatChange => Some(EffectTag::PreStatChange),
            Self::PostStatChange => Some(EffectTag::PostStatChange),
            Self::PreSetStatus => Some(EffectTag::PreSetStatus),
            Self::PreApplyBattlerTag => Some(EffectTag::PreApplyBattlerTag),
            Self::PreWeatherEffect => Some(EffectTag::PreWeatherEffect),
            Self::PostWeatherChange => Some(EffectTag::PostWeatherChange),
            Self::PostWeatherLapse => Some(EffectTag::PostWeatherLapse),
            Self::PostTerrainChange => Some(EffectTag::PostTerrainChange),
            Self::PostTurn => Some(EffectTag::PostTurn),
            Self::CheckTrapped => Some(EffectTag::CheckTrapped),
            Self::PostBattle => Some(EffectTag::PostBattle),
            Self::PostFaint => Some(EffectTag::PostFaint),
        }
    }

    /// Is the ability banner shown without its entrance animation?
    ///
    /// These hooks resolve while the Mon is leaving the field or while the weather is resolving,
    /// when there is no time to animate.
    pub fn instant_banner(&self) -> bool {
        matches!(self, Self::PreSwitchOut | Self::PreWeatherEffect)
    }

    /// Are trigger messages shown immediately, rather than queued?
    pub fn immediate_messages(&self) -> bool {
        matches!(self, Self::CheckTrapped)
    }
}

/// Arguments for the generic hook.
///
/// Each attribute of the generic hook reads the arguments it needs and fails if they are missing,
/// so callers pass what the selected attribute family expects.
#[derive(Default)]
pub struct ApplyEvent<'e> {
    pub cancelled: Option<&'e mut BooleanHolder>,
    pub move_data: Option<&'e MoveData>,
    pub status: Option<StatusEffect>,
    pub ability: Option<&'e Ability>,
    pub number: Option<&'e mut NumberHolder>,
    pub integer: Option<&'e mut IntegerHolder>,
    pub flag: Option<&'e mut BooleanHolder>,
    pub target: Option<&'e mut TargetHolder>,
    pub move_type: Option<&'e mut TypeHolder>,
}

impl<'e> ApplyEvent<'e> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancelled(mut self, cancelled: &'e mut BooleanHolder) -> Self {
        self.cancelled = Some(cancelled);
        self
    }

    pub fn with_move(mut self, move_data: &'e MoveData) -> Self {
        self.move_data = Some(move_data);
        self
    }

    pub fn with_status(mut self, status: StatusEffect) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_ability(mut self, ability: &'e Ability) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn with_number(mut self, number: &'e mut NumberHolder) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_integer(mut self, integer: &'e mut IntegerHolder) -> Self {
        self.integer = Some(integer);
        self
    }

    pub fn with_flag(mut self, flag: &'e mut BooleanHolder) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn with_target(mut self, target: &'e mut TargetHolder) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_move_type(mut self, move_type: &'e mut TypeHolder) -> Self {
        self.move_type = Some(move_type);
        self
    }
}

/// Arguments for [`HookCategory::PreDefend`].
pub struct PreDefendEvent<'e> {
    pub attacker: MonHandle,
    pub move_data: &'e MoveData,
    pub cancelled: &'e mut BooleanHolder,
    /// Damage multiplier for the incoming move, or its power for effects that adjust power.
    pub value: &'e mut NumberHolder,
}

/// Arguments for [`HookCategory::PostDefend`] and [`HookCategory::PostFaint`].
#[derive(Clone, Copy)]
pub struct MoveHitEvent<'e> {
    pub attacker: MonHandle,
    pub move_data: &'e MoveData,
    pub hit_result: HitResult,
}

/// Arguments for [`HookCategory::PreAttack`].
pub struct PreAttackEvent<'e> {
    pub defender: MonHandle,
    pub move_data: &'e MoveData,
    pub power: &'e mut NumberHolder,
    /// The type the move will use, if the caller allows it to change.
    pub move_type: Option<&'e mut TypeHolder>,
}

/// Arguments for [`HookCategory::PostAttack`].
#[derive(Clone, Copy)]
pub struct PostAttackEvent<'e> {
    pub defender: MonHandle,
    pub move_data: &'e MoveData,
    pub hit_result: HitResult,
}

/// Arguments for [`HookCategory::BattleStatMultiplier`].
pub struct BattleStatMultiplierEvent<'e> {
    pub stat: BattleStat,
    pub value: &'e mut NumberHolder,
}

/// Arguments for [`HookCategory::PreStatChange`].
pub struct PreStatChangeEvent<'e> {
    pub stat: BattleStat,
    pub cancelled: &'e mut BooleanHolder,
}

/// Arguments for [`HookCategory::PostStatChange`].
#[derive(Clone, Copy)]
pub struct PostStatChangeEvent<'e> {
    pub stats: &'e [BattleStat],
    pub levels: i8,
    pub self_targeted: bool,
}

/// Arguments for [`HookCategory::PreSetStatus`].
pub struct PreSetStatusEvent<'e> {
    pub status: StatusEffect,
    pub cancelled: &'e mut BooleanHolder,
}

/// Arguments for [`HookCategory::PreApplyBattlerTag`].
pub struct PreApplyBattlerTagEvent<'e> {
    pub tag: BattlerTagType,
    pub cancelled: &'e mut BooleanHolder,
}

/// Arguments for [`HookCategory::PreWeatherEffect`].
pub struct PreWeatherEffectEvent<'e> {
    pub weather: Option<WeatherType>,
    pub cancelled: &'e mut BooleanHolder,
}

/// Arguments for [`HookCategory::CheckTrapped`].
pub struct CheckTrappedEvent<'e> {
    /// The Mon that may be trapped.
    pub trapped_mon: MonHandle,
    pub trapped: &'e mut BooleanHolder,
}

/// The arguments of a single hook dispatch.
pub enum HookEvent<'e> {
    Apply(ApplyEvent<'e>),
    PostBattleInit,
    PreDefend(PreDefendEvent<'e>),
    PostDefend(MoveHitEvent<'e>),
    PreAttack(PreAttackEvent<'e>),
    PostAttack(PostAttackEvent<'e>),
    BattleStatMultiplier(BattleStatMultiplierEvent<'e>),
    PostKnockOut { knocked_out: MonHandle },
    PostVictory,
    PostSummon,
    PreSwitchOut,
    PreStatChange(PreStatChangeEvent<'e>),
    PostStatChange(PostStatChangeEvent<'e>),
    PreSetStatus(PreSetStatusEvent<'e>),
    PreApplyBattlerTag(PreApplyBattlerTagEvent<'e>),
    PreWeatherEffect(PreWeatherEffectEvent<'e>),
    PostWeatherChange { weather: WeatherType },
    PostWeatherLapse { weather: WeatherType },
    PostTerrainChange { terrain: TerrainType },
    PostTurn,
    CheckTrapped(CheckTrappedEvent<'e>),
    PostBattle,
    PostFaint(MoveHitEvent<'e>),
}

impl HookEvent<'_> {
    /// The hook these arguments belong to.
    pub fn hook(&self) -> HookCategory {
        match self {
            Self::Apply(_) => HookCategory::Apply,
            Self::PostBattleInit => HookCategory::PostBattleInit,
            Self::PreDefend(_) => HookCategory::PreDefend,
            Self::PostDefend(_) => HookCategory::PostDefend,
            Self::PreAttack(_) => HookCategory::PreAttack,
            Self::PostAttack(_) => HookCategory::PostAttack,
            Self::BattleStatMultiplier(_) => HookCategory::BattleStatMultiplier,
            Self::PostKnockOut { .. } => HookCategory::PostKnockOut,
            Self::PostVictory => HookCategory::PostVictory,
            Self::PostSummon => HookCategory::PostSummon,
            Self::PreSwitchOut => HookCategory::PreSwitchOut,
            Self::PreStatChange(_) => HookCategory::PreStatChange,
            Self::PostStatChange(_) => HookCategory::PostStatChange,
            Self::PreSetStatus(_) => HookCategory::PreSetStatus,
            Self::PreApplyBattlerTag(_) => HookCategory::PreApplyBattlerTag,
            Self::PreWeatherEffect(_) => HookCategory::PreWeatherEffect,
            Self::PostWeatherChange { .. } => HookCategory::PostWeatherChange,
            Self::PostWeatherLapse { .. } => HookCategory::PostWeatherLapse,
            Self::PostTerrainChange { .. } => HookCategory::PostTerrainChange,
            Self::PostTurn => HookCategory::PostTurn,
            Self::CheckTrapped(_) => HookCategory::CheckTrapped,
            Self::PostBattle => HookCategory::PostBattle,
            Self::PostFaint(_) => HookCategory::PostFaint,
        }
    }
}
