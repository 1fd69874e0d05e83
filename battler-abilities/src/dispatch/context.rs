use std::sync::Arc;

use anyhow::Result;

use crate::{
    abilities::{
        Ability,
        EffectTag,
        HookCategory,
        HookEvent,
    },
    battle::{
        AbilitySlot,
        Battle,
        MonHandle,
        PresentationEvent,
    },
    catalog::AbilityCatalog,
    data::{
        MoveData,
        MoveFlag,
    },
    dispatch::{
        DispatchOptions,
        Dispatcher,
    },
    rng::rand_util,
};

/// The context an effect applies in: the battle, the Mon whose ability is resolving, and the
/// dispatcher that selected the effect.
pub struct EffectContext<'d, 'c> {
    dispatcher: &'d mut Dispatcher<'c>,
    battle: &'d mut dyn Battle,
    mon: MonHandle,
    slot: AbilitySlot,
    ability: &'d Ability,
    hook: HookCategory,
    quiet: bool,
    trigger_message: Option<String>,
}

impl<'d, 'c> EffectContext<'d, 'c> {
    pub(crate) fn new(
        dispatcher: &'d mut Dispatcher<'c>,
        battle: &'d mut dyn Battle,
        mon: MonHandle,
        slot: AbilitySlot,
        ability: &'d Ability,
        hook: HookCategory,
        quiet: bool,
    ) -> Self {
        Self {
            dispatcher,
            battle,
            mon,
            slot,
            ability,
            hook,
            quiet,
            trigger_message: None,
        }
    }

    /// The Mon whose ability is resolving.
    pub fn mon(&self) -> MonHandle {
        self.mon
    }

    pub fn slot(&self) -> AbilitySlot {
        self.slot
    }

    /// The ability that is resolving.
    pub fn ability(&self) -> &Ability {
        self.ability
    }

    pub fn ability_name(&self) -> &str {
        &self.ability.name
    }

    pub fn hook(&self) -> HookCategory {
        self.hook
    }

    /// Is presentation suppressed?
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    pub fn battle(&self) -> &dyn Battle {
        self.battle
    }

    pub fn battle_mut(&mut self) -> &mut dyn Battle {
        self.battle
    }

    pub fn catalog(&self) -> &'c AbilityCatalog {
        self.dispatcher.catalog()
    }

    /// The display name of the Mon whose ability is resolving.
    pub fn mon_name(&self) -> Result<String> {
        self.battle.mon_name(self.mon)
    }

    pub fn name_of(&self, mon: MonHandle) -> Result<String> {
        self.battle.mon_name(mon)
    }

    /// A message about the resolving ability, such as "Pikachu's Static {suffix}".
    pub fn ability_message(&self, suffix: &str) -> Result<String> {
        Ok(format!(
            "{}'s {} {suffix}",
            self.mon_name()?,
            self.ability_name()
        ))
    }

    /// Sets the message shown after the ability banner if the effect applies.
    pub fn set_trigger_message<S>(&mut self, message: S)
    where
        S: Into<String>,
    {
        self.trigger_message = Some(message.into());
    }

    pub(crate) fn take_trigger_message(&mut self) -> Option<String> {
        self.trigger_message.take()
    }

    /// Presents a message right away, unless presentation is suppressed.
    pub fn queue_message<S>(&mut self, message: S) -> Result<()>
    where
        S: Into<String>,
    {
        if self.quiet {
            return Ok(());
        }
        self.battle.present(PresentationEvent::Message {
            text: message.into(),
            immediate: self.hook.immediate_messages(),
        })
    }

    /// Rolls a percent chance against the battle's random number generator.
    pub fn roll_percent(&mut self, chance: u32) -> bool {
        rand_util::percent(self.battle.prng(), chance)
    }

    /// A random integer in the range `[0, n)`.
    pub fn random_int(&mut self, n: u64) -> u64 {
        rand_util::random_int(self.battle.prng(), n)
    }

    /// A random element of the slice.
    pub fn sample<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        rand_util::sample_slice(self.battle.prng(), items)
    }

    /// The active ability of another Mon, if it names a known ability.
    pub fn ability_of(&self, mon: MonHandle) -> Result<Option<Arc<Ability>>> {
        let id = self.battle.ability(mon)?;
        Ok(self.dispatcher.catalog().get(&id).cloned())
    }

    /// Does an eligible ability slot of the Mon carry an applicable attribute selected by the tag?
    pub fn has_effect(&self, mon: MonHandle, tag: EffectTag) -> Result<bool> {
        self.dispatcher
            .has_effect_with_options(self.battle, mon, tag, DispatchOptions::nested())
    }

    /// Does the move make contact when used by the attacker?
    ///
    /// Abilities of the attacker can prevent contact.
    pub fn makes_contact(&self, move_data: &MoveData, attacker: MonHandle) -> Result<bool> {
        if !move_data.has_flag(MoveFlag::Contact) {
            return Ok(false);
        }
        Ok(!self.has_effect(attacker, EffectTag::IgnoreContact)?)
    }

    /// Dispatches a hook for another Mon from inside this effect.
    ///
    /// Nested dispatches never present anything.
    pub fn dispatch(
        &mut self,
        mon: MonHandle,
        tag: EffectTag,
        event: &mut HookEvent,
    ) -> Result<()> {
        self.dispatcher
            .dispatch_with_options(self.battle, mon, tag, event, DispatchOptions::nested())
    }
}
