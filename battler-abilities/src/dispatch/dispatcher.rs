use std::sync::Arc;

use anyhow::Result;

use crate::{
    abilities::{
        Ability,
        ApplyEvent,
        Attribute,
        BattleStatMultiplierEvent,
        CheckTrappedEvent,
        EffectTag,
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
    },
    battle::{
        AbilitySlot,
        Battle,
        MonHandle,
        PresentationEvent,
    },
    catalog::AbilityCatalog,
    common::{
        BooleanHolder,
        Id,
        NumberHolder,
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
    dispatch::{
        DispatchOptions,
        EffectContext,
    },
    error::{
        DispatchDepthError,
        WrapError,
    },
};

/// Resolves ability effects for battle hooks.
///
/// Combat code calls one entry point per hook with the Mon whose abilities should respond and a
/// tag selecting the attributes to consider. The dispatcher walks the active ability and then the
/// passive ability of the Mon, applying every eligible attribute in declaration order.
///
/// A dispatcher tracks the hooks it is currently resolving, so effects that dispatch other hooks
/// cannot recurse indefinitely.
pub struct Dispatcher<'c> {
    catalog: &'c AbilityCatalog,
    options: DispatchOptions,
    active: Vec<(MonHandle, HookCategory)>,
}

impl<'c> Dispatcher<'c> {
    /// Maximum number of nested dispatches.
    pub const MAX_DEPTH: usize = 10;

    /// Creates a new dispatcher over the catalog.
    pub fn new(catalog: &'c AbilityCatalog) -> Self {
        Self {
            catalog,
            options: DispatchOptions::default(),
            active: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: DispatchOptions) -> Self {
        self.options = options;
        self
    }

    /// Suppresses all presentation.
    pub fn quiet(mut self) -> Self {
        self.options.quiet = true;
        self
    }

    /// Makes abilities flagged as ignorable ineligible.
    pub fn ignoring_ignorable(mut self) -> Self {
        self.options.ignore_ignorable = true;
        self
    }

    pub fn catalog(&self) -> &'c AbilityCatalog {
        self.catalog
    }

    pub fn options(&self) -> DispatchOptions {
        self.options
    }

    /// Dispatches a hook with arguments already packaged as a [`HookEvent`].
    pub fn dispatch(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        event: &mut HookEvent,
    ) -> Result<()> {
        self.dispatch_with_options(battle, mon, tag, event, self.options)
    }

    pub(crate) fn dispatch_with_options(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        event: &mut HookEvent,
        options: DispatchOptions,
    ) -> Result<()> {
        let hook = event.hook();
        if self.active.contains(&(mon, hook)) {
            log::debug!("skipping re-entrant {hook} dispatch for mon {mon}");
            return Ok(());
        }
        if self.active.len() >= Self::MAX_DEPTH {
            return Err(DispatchDepthError {
                max_depth: Self::MAX_DEPTH,
                hook,
                mon,
            }
            .wrap_error());
        }

        self.active.push((mon, hook));
        let result = self.run(battle, mon, tag, event, options);
        self.active.pop();
        result
    }

    fn run(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        event: &mut HookEvent,
        options: DispatchOptions,
    ) -> Result<()> {
        let hook = event.hook();
        // Swapping abilities mid-dispatch takes effect on the next dispatch.
        let slots = self.snapshot(battle, mon)?;
        for (slot, ability) in slots {
            let Some(ability) = ability else {
                continue;
            };
            if !self.eligible(battle, mon, slot, &ability, options)? {
                continue;
            }
            for attribute in ability.attributes_with_tag(tag) {
                if attribute.hook() != hook {
                    continue;
                }
                if !Self::applicable(battle, mon, &ability, attribute)? {
                    continue;
                }

                let mut context = EffectContext::new(
                    self,
                    battle,
                    mon,
                    slot,
                    &ability,
                    hook,
                    options.quiet,
                );
                let applied = attribute.effect().apply(&mut context, event)?;
                let message = context.take_trigger_message();
                if !applied {
                    continue;
                }

                log::trace!(
                    "applied {} of {} for mon {mon}",
                    attribute.effect().tag(),
                    ability.id
                );
                if options.quiet {
                    continue;
                }
                if attribute.show_ability() {
                    battle.present(PresentationEvent::AbilityBanner {
                        mon,
                        passive: slot.is_passive(),
                        instant: hook.instant_banner(),
                    })?;
                }
                if let Some(text) = message {
                    battle.present(PresentationEvent::Message {
                        text,
                        immediate: hook.immediate_messages(),
                    })?;
                }
            }
        }
        Ok(())
    }

    /// Does an eligible ability slot of the Mon carry an applicable attribute selected by the tag?
    ///
    /// Nothing is applied. Used for querying marker attributes, such as abilities that cannot be
    /// copied.
    pub fn has_effect(&self, battle: &dyn Battle, mon: MonHandle, tag: EffectTag) -> Result<bool> {
        self.has_effect_with_options(battle, mon, tag, self.options)
    }

    pub(crate) fn has_effect_with_options(
        &self,
        battle: &dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        options: DispatchOptions,
    ) -> Result<bool> {
        for (slot, ability) in self.snapshot(battle, mon)? {
            let Some(ability) = ability else {
                continue;
            };
            if !self.eligible(battle, mon, slot, &ability, options)? {
                continue;
            }
            for attribute in ability.attributes_with_tag(tag) {
                if Self::applicable(battle, mon, &ability, attribute)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn snapshot(
        &self,
        battle: &dyn Battle,
        mon: MonHandle,
    ) -> Result<[(AbilitySlot, Option<Arc<Ability>>); 2]> {
        let active = self.lookup(battle.ability(mon)?);
        let passive = match battle.passive_ability(mon)? {
            Some(id) => self.lookup(id),
            None => None,
        };
        Ok([(AbilitySlot::Active, active), (AbilitySlot::Passive, passive)])
    }

    fn lookup(&self, id: Id) -> Option<Arc<Ability>> {
        match self.catalog.get(&id) {
            Some(ability) => Some(ability.clone()),
            None => {
                log::debug!("ability {id} does not exist");
                None
            }
        }
    }

    fn eligible(
        &self,
        battle: &dyn Battle,
        mon: MonHandle,
        slot: AbilitySlot,
        ability: &Ability,
        options: DispatchOptions,
    ) -> Result<bool> {
        if ability.is_none() {
            return Ok(false);
        }
        if !ability.bypass_faint && battle.fainted(mon)? {
            return Ok(false);
        }
        if options.ignore_ignorable && ability.ignorable {
            return Ok(false);
        }
        Ok(!battle.ability_suppressed(mon, slot)?)
    }

    fn applicable(
        battle: &dyn Battle,
        mon: MonHandle,
        ability: &Ability,
        attribute: &Attribute,
    ) -> Result<bool> {
        if !ability.conditions_hold(battle, mon)? {
            return Ok(false);
        }
        if let Some(condition) = attribute.extra_condition() {
            if !condition.evaluate(battle, mon)? {
                return Ok(false);
            }
        }
        attribute.effect().intrinsic_condition(battle, mon)
    }

    /// Dispatches [`HookCategory::Apply`].
    pub fn apply(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        event: ApplyEvent,
    ) -> Result<()> {
        self.dispatch(battle, mon, tag, &mut HookEvent::Apply(event))
    }

    /// Dispatches [`HookCategory::PostBattleInit`].
    pub fn apply_post_battle_init(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
    ) -> Result<()> {
        self.dispatch(battle, mon, tag, &mut HookEvent::PostBattleInit)
    }

    /// Dispatches [`HookCategory::PreDefend`] for the Mon being attacked.
    pub fn apply_pre_defend(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        attacker: MonHandle,
        move_data: &MoveData,
        cancelled: &mut BooleanHolder,
        value: &mut NumberHolder,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PreDefend(PreDefendEvent {
                attacker,
                move_data,
                cancelled,
                value,
            }),
        )
    }

    /// Dispatches [`HookCategory::PostDefend`] for the Mon that was attacked.
    pub fn apply_post_defend(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        attacker: MonHandle,
        move_data: &MoveData,
        hit_result: HitResult,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PostDefend(MoveHitEvent {
                attacker,
                move_data,
                hit_result,
            }),
        )
    }

    /// Dispatches [`HookCategory::PreAttack`] for the attacking Mon.
    pub fn apply_pre_attack(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        defender: MonHandle,
        move_data: &MoveData,
        power: &mut NumberHolder,
        move_type: Option<&mut TypeHolder>,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PreAttack(PreAttackEvent {
                defender,
                move_data,
                power,
                move_type,
            }),
        )
    }

    /// Dispatches [`HookCategory::PostAttack`] for the attacking Mon.
    pub fn apply_post_attack(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        defender: MonHandle,
        move_data: &MoveData,
        hit_result: HitResult,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PostAttack(PostAttackEvent {
                defender,
                move_data,
                hit_result,
            }),
        )
    }

    /// Dispatches [`HookCategory::BattleStatMultiplier`].
    pub fn apply_battle_stat_multiplier(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        stat: BattleStat,
        value: &mut NumberHolder,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::BattleStatMultiplier(BattleStatMultiplierEvent { stat, value }),
        )
    }

    /// Dispatches [`HookCategory::PostKnockOut`] for a Mon that witnessed a knockout.
    pub fn apply_post_knock_out(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        knocked_out: MonHandle,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PostKnockOut { knocked_out },
        )
    }

    /// Dispatches [`HookCategory::PostVictory`] for the Mon that knocked out its target.
    pub fn apply_post_victory(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
    ) -> Result<()> {
        self.dispatch(battle, mon, tag, &mut HookEvent::PostVictory)
    }

    /// Dispatches [`HookCategory::PostSummon`] for a Mon entering the field.
    pub fn apply_post_summon(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
    ) -> Result<()> {
        self.dispatch(battle, mon, tag, &mut HookEvent::PostSummon)
    }

    /// Dispatches [`HookCategory::PreSwitchOut`] for a Mon leaving the field.
    pub fn apply_pre_switch_out(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
    ) -> Result<()> {
        self.dispatch(battle, mon, tag, &mut HookEvent::PreSwitchOut)
    }

    /// Dispatches [`HookCategory::PreStatChange`].
    pub fn apply_pre_stat_change(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        stat: BattleStat,
        cancelled: &mut BooleanHolder,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PreStatChange(PreStatChangeEvent { stat, cancelled }),
        )
    }

    /// Dispatches [`HookCategory::PostStatChange`].
    pub fn apply_post_stat_change(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        stats: &[BattleStat],
        levels: i8,
        self_targeted: bool,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PostStatChange(PostStatChangeEvent {
                stats,
                levels,
                self_targeted,
            }),
        )
    }

    /// Dispatches [`HookCategory::PreSetStatus`].
    pub fn apply_pre_set_status(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        status: StatusEffect,
        cancelled: &mut BooleanHolder,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PreSetStatus(PreSetStatusEvent { status, cancelled }),
        )
    }

    /// Dispatches [`HookCategory::PreApplyBattlerTag`].
    pub fn apply_pre_apply_battler_tag(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        battler_tag: BattlerTagType,
        cancelled: &mut BooleanHolder,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PreApplyBattlerTag(PreApplyBattlerTagEvent {
                tag: battler_tag,
                cancelled,
            }),
        )
    }

    /// Dispatches [`HookCategory::PreWeatherEffect`].
    pub fn apply_pre_weather_effect(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        weather: Option<WeatherType>,
        cancelled: &mut BooleanHolder,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PreWeatherEffect(PreWeatherEffectEvent { weather, cancelled }),
        )
    }

    /// Dispatches [`HookCategory::PostWeatherChange`].
    pub fn apply_post_weather_change(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        weather: WeatherType,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PostWeatherChange { weather },
        )
    }

    /// Dispatches [`HookCategory::PostWeatherLapse`] at the end of a turn with active weather.
    pub fn apply_post_weather_lapse(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        weather: WeatherType,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PostWeatherLapse { weather },
        )
    }

    /// Dispatches [`HookCategory::PostTerrainChange`].
    pub fn apply_post_terrain_change(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        terrain: TerrainType,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PostTerrainChange { terrain },
        )
    }

    /// Dispatches [`HookCategory::PostTurn`].
    pub fn apply_post_turn(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
    ) -> Result<()> {
        self.dispatch(battle, mon, tag, &mut HookEvent::PostTurn)
    }

    /// Dispatches [`HookCategory::CheckTrapped`] for a Mon that may trap the given Mon.
    pub fn apply_check_trapped(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        trapped_mon: MonHandle,
        trapped: &mut BooleanHolder,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::CheckTrapped(CheckTrappedEvent {
                trapped_mon,
                trapped,
            }),
        )
    }

    /// Dispatches [`HookCategory::PostBattle`].
    pub fn apply_post_battle(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
    ) -> Result<()> {
        self.dispatch(battle, mon, tag, &mut HookEvent::PostBattle)
    }

    /// Dispatches [`HookCategory::PostFaint`] for the Mon that fainted.
    pub fn apply_post_faint(
        &mut self,
        battle: &mut dyn Battle,
        mon: MonHandle,
        tag: EffectTag,
        attacker: MonHandle,
        move_data: &MoveData,
        hit_result: HitResult,
    ) -> Result<()> {
        self.dispatch(
            battle,
            mon,
            tag,
            &mut HookEvent::PostFaint(MoveHitEvent {
                attacker,
                move_data,
                hit_result,
            }),
        )
    }
}
