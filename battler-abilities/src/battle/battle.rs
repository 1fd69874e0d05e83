use anyhow::Result;

use crate::{
    battle::{
        AbilitySlot,
        MonHandle,
        PresentationEvent,
    },
    common::Id,
    data::{
        BattleStat,
        BattlerTagType,
        Gender,
        HeldItem,
        Stat,
        StatusEffect,
        TerrainType,
        Type,
        WeatherType,
    },
    rng::PseudoRandomNumberGenerator,
};

/// The battle, as seen by ability effects.
///
/// The battle owns every Mon, the field, the presentation queue, and the random number generator.
/// Ability effects read and mutate battle state exclusively through this trait. Methods that
/// "try" to do something report whether the action took place, since other effects (including
/// other abilities) may prevent it.
///
/// Every method fails only for faults, such as an invalid [`MonHandle`].
pub trait Battle {
    /// The display name of the Mon.
    fn mon_name(&self, mon: MonHandle) -> Result<String>;

    /// The active ability of the Mon.
    fn ability(&self, mon: MonHandle) -> Result<Id>;

    /// The passive ability of the Mon, if it has one.
    fn passive_ability(&self, mon: MonHandle) -> Result<Option<Id>>;

    /// Replaces the active ability of the Mon.
    fn set_ability(&mut self, mon: MonHandle, ability: Id) -> Result<()>;

    /// Has the Mon fainted?
    fn fainted(&self, mon: MonHandle) -> Result<bool>;

    /// Is the ability in the given slot suppressed by a field-wide or Mon-specific effect?
    fn ability_suppressed(&self, mon: MonHandle, slot: AbilitySlot) -> Result<bool>;

    fn hp(&self, mon: MonHandle) -> Result<u32>;

    fn max_hp(&self, mon: MonHandle) -> Result<u32>;

    /// The index of the Mon's current form.
    fn form_index(&self, mon: MonHandle) -> Result<u8>;

    /// Changes the Mon into the form at the given index.
    fn try_change_form(&mut self, mon: MonHandle, form: u8) -> Result<bool>;

    fn gender(&self, mon: MonHandle) -> Result<Gender>;

    /// The current types of the Mon.
    fn types(&self, mon: MonHandle) -> Result<Vec<Type>>;

    /// Overwrites the types of the Mon.
    fn set_types(&mut self, mon: MonHandle, types: Vec<Type>) -> Result<()>;

    /// The calculated value of a stat, without stat stages applied.
    fn stat(&self, mon: MonHandle, stat: Stat) -> Result<u32>;

    fn status(&self, mon: MonHandle) -> Result<Option<StatusEffect>>;

    /// Inflicts a status on the Mon, which fails if it already has one or is immune.
    fn try_set_status(
        &mut self,
        mon: MonHandle,
        status: StatusEffect,
        source: Option<MonHandle>,
    ) -> Result<bool>;

    fn cure_status(&mut self, mon: MonHandle) -> Result<()>;

    fn has_tag(&self, mon: MonHandle, tag: BattlerTagType) -> Result<bool>;

    /// Attaches a volatile tag to the Mon for a number of turns (0 for indefinitely).
    fn add_tag(
        &mut self,
        mon: MonHandle,
        tag: BattlerTagType,
        turns: u8,
        source: Option<MonHandle>,
    ) -> Result<bool>;

    /// Heals the Mon, returning the amount of HP restored.
    fn heal(&mut self, mon: MonHandle, amount: u32) -> Result<u32>;

    /// Damages the Mon directly, returning the amount of HP lost.
    fn damage(&mut self, mon: MonHandle, amount: u32) -> Result<u32>;

    /// Schedules a stat stage change, which resolves in its own phase after the current effect.
    fn queue_stat_change(
        &mut self,
        mon: MonHandle,
        self_targeted: bool,
        stats: &[BattleStat],
        levels: i8,
    ) -> Result<()>;

    /// The effectiveness multiplier of an attack of the given type against the Mon.
    fn attack_type_effectiveness(&self, mon: MonHandle, attack_type: Type) -> Result<f64>;

    /// The number of times the Mon has been hit by the current move.
    fn hit_count(&self, mon: MonHandle) -> Result<u32>;

    /// Damage dealt to the Mon by the current move.
    fn damage_dealt_this_turn(&self, mon: MonHandle) -> Result<u32>;

    /// Was the last attack the Mon received a critical hit?
    fn last_hit_critical(&self, mon: MonHandle) -> Result<bool>;

    /// Active, non-fainted opponents of the Mon.
    fn opponents(&self, mon: MonHandle) -> Result<Vec<MonHandle>>;

    /// Active, non-fainted allies of the Mon, excluding itself.
    fn allies(&self, mon: MonHandle) -> Result<Vec<MonHandle>>;

    /// The side of the field the Mon belongs to.
    fn side(&self, mon: MonHandle) -> Result<usize>;

    /// Transforms the Mon into a copy of the target.
    fn transform_into(&mut self, mon: MonHandle, target: MonHandle) -> Result<bool>;

    /// Items held by the Mon that can be taken from it.
    fn held_items(&self, mon: MonHandle) -> Result<Vec<HeldItem>>;

    /// Moves an item from one Mon to another.
    ///
    /// Returns once the transfer has fully resolved.
    fn try_transfer_held_item(
        &mut self,
        item: &HeldItem,
        from: MonHandle,
        to: MonHandle,
    ) -> Result<bool>;

    /// Items left on the field, available to collect after battle.
    fn post_battle_loot(&self) -> Result<Vec<HeldItem>>;

    /// Gives the loot at the given index to the Mon.
    fn try_claim_post_battle_loot(&mut self, mon: MonHandle, index: usize) -> Result<bool>;

    fn weather(&self) -> Result<Option<WeatherType>>;

    /// Can the current weather be replaced?
    fn weather_immutable(&self) -> Result<bool>;

    /// Are the effects of the current weather suppressed?
    fn weather_suppressed(&self) -> Result<bool>;

    fn try_set_weather(&mut self, weather: WeatherType, source: MonHandle) -> Result<bool>;

    fn terrain(&self) -> Result<Option<TerrainType>>;

    fn try_set_terrain(&mut self, terrain: TerrainType, source: MonHandle) -> Result<bool>;

    /// Forwards a presentation request.
    ///
    /// Returns once the presentation layer has accepted the request.
    fn present(&mut self, event: PresentationEvent) -> Result<()>;

    /// The random number generator for the battle.
    fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator;
}
