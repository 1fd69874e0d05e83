use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    abilities::{
        ApplyEvent,
        EffectTag,
        FormRule,
        HookEvent,
        MoveCondition,
        MoveHitEvent,
        MoveUse,
        PreDefendEvent,
        hp_ratio,
    },
    battle::{
        Battle,
        MonHandle,
    },
    common::IntegerHolder,
    data::{
        BattleStat,
        BattlerTagType,
        MoveCategory,
        StatusEffect,
        TerrainType,
        Type,
        WeatherType,
    },
    dispatch::EffectContext,
};

fn default_self_target() -> bool {
    true
}

/// Changes the Mon's form if the rule selects a form it is not already in.
pub(crate) fn change_form(context: &mut EffectContext, form: &FormRule) -> Result<bool> {
    let mon = context.mon();
    let form = form.select(context.battle(), mon)?;
    if form == context.battle().form_index(mon)? {
        return Ok(false);
    }
    context.battle_mut().try_change_form(mon, form)
}

/// Effects applied to a Mon about to be hit by a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PreDefendEffect {
    FormChange {
        form: FormRule,
    },
    /// Survives a hit that would knock the Mon out from full HP.
    FullHpEndure,
    /// Multiplies the damage of matching moves.
    ReceivedMoveDamageMultiplier {
        when: MoveCondition,
        multiplier: f64,
    },
    /// Reduces the damage of matching moves to 1.
    MovePowerToOne {
        when: MoveCondition,
    },
    /// Takes no damage from damaging moves of the type.
    TypeImmunity {
        immune_type: Type,
    },
    /// Heals a quarter of maximum HP instead of taking damage from moves of the type.
    TypeImmunityHeal {
        immune_type: Type,
    },
    /// Changes a stat instead of being hit by moves of the type.
    TypeImmunityStatChange {
        immune_type: Type,
        stat: BattleStat,
        levels: i8,
    },
    /// Gains a tag instead of being hit by moves of the type.
    TypeImmunityAddTag {
        immune_type: Type,
        tag: BattlerTagType,
        #[serde(default)]
        turns: u8,
    },
    /// Only super effective moves deal damage.
    NonSuperEffectiveImmunity,
    /// Blocks single-target moves with raised priority.
    FieldPriorityMoveImmunity,
    /// Blocks matching moves.
    MoveImmunity {
        when: MoveCondition,
    },
    /// Blocks matching moves, changing a stat instead.
    MoveImmunityStatChange {
        when: MoveCondition,
        stat: BattleStat,
        levels: i8,
    },
}

impl PreDefendEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::FormChange { .. } => EffectTag::PreDefendFormChange,
            Self::FullHpEndure => EffectTag::PreDefendFullHpEndure,
            Self::ReceivedMoveDamageMultiplier { .. } => EffectTag::ReceivedMoveDamageMultiplier,
            Self::MovePowerToOne { .. } => EffectTag::PreDefendMovePowerToOne,
            Self::TypeImmunity { .. } => EffectTag::TypeImmunity,
            Self::TypeImmunityHeal { .. } => EffectTag::TypeImmunityHeal,
            Self::TypeImmunityStatChange { .. } => EffectTag::TypeImmunityStatChange,
            Self::TypeImmunityAddTag { .. } => EffectTag::TypeImmunityAddTag,
            Self::NonSuperEffectiveImmunity => EffectTag::NonSuperEffectiveImmunity,
            Self::FieldPriorityMoveImmunity => EffectTag::FieldPriorityMoveImmunity,
            Self::MoveImmunity { .. } => EffectTag::MoveImmunity,
            Self::MoveImmunityStatChange { .. } => EffectTag::MoveImmunityStatChange,
        }
    }

    pub fn families(&self) -> Vec<EffectTag> {
        match self {
            Self::MovePowerToOne { .. } => vec![EffectTag::ReceivedMoveDamageMultiplier],
            Self::TypeImmunityHeal { .. }
            | Self::TypeImmunityStatChange { .. }
            | Self::TypeImmunityAddTag { .. }
            | Self::NonSuperEffectiveImmunity => vec![EffectTag::TypeImmunity],
            Self::MoveImmunityStatChange { .. } => vec![EffectTag::MoveImmunity],
            _ => Vec::new(),
        }
    }

    /// Zeroes the damage of a damaging move of the type.
    fn type_immunity(immune_type: Type, event: &mut PreDefendEvent) -> bool {
        if event.move_data.category == MoveCategory::Status
            || event.move_data.move_type != immune_type
        {
            return false;
        }
        event.value.set(0.0);
        true
    }

    pub fn apply(&self, context: &mut EffectContext, event: &mut PreDefendEvent) -> Result<bool> {
        let mon = context.mon();
        let move_use = MoveUse {
            user: event.attacker,
            target: mon,
            move_data: event.move_data,
        };
        match self {
            Self::FormChange { form } => change_form(context, form),
            Self::FullHpEndure => {
                let hp = context.battle().hp(mon)?;
                if hp_ratio(context.battle(), mon)? < 1.0 || event.value.value() < hp as f64 {
                    return Ok(false);
                }
                context
                    .battle_mut()
                    .add_tag(mon, BattlerTagType::Sturdy, 1, Some(mon))
            }
            Self::ReceivedMoveDamageMultiplier { when, multiplier } => {
                if !when.evaluate(context.battle(), move_use)? {
                    return Ok(false);
                }
                event.value.update(|value| value * multiplier);
                Ok(true)
            }
            Self::MovePowerToOne { when } => {
                if !when.evaluate(context.battle(), move_use)? {
                    return Ok(false);
                }
                event.value.set(1.0);
                Ok(true)
            }
            Self::TypeImmunity { immune_type } => Ok(Self::type_immunity(*immune_type, event)),
            Self::TypeImmunityHeal { immune_type } => {
                if !Self::type_immunity(*immune_type, event) {
                    return Ok(false);
                }
                if hp_ratio(context.battle(), mon)? < 1.0 {
                    let amount = (context.battle().max_hp(mon)? / 4).max(1);
                    context.battle_mut().heal(mon, amount)?;
                    context.set_trigger_message(
                        context.ability_message("restored its HP a little!")?,
                    );
                }
                Ok(true)
            }
            Self::TypeImmunityStatChange {
                immune_type,
                stat,
                levels,
            } => {
                if !Self::type_immunity(*immune_type, event) {
                    return Ok(false);
                }
                event.cancelled.set(true);
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, &[*stat], *levels)?;
                Ok(true)
            }
            Self::TypeImmunityAddTag {
                immune_type,
                tag,
                turns,
            } => {
                if !Self::type_immunity(*immune_type, event) {
                    return Ok(false);
                }
                event.cancelled.set(true);
                context.battle_mut().add_tag(mon, *tag, *turns, Some(mon))?;
                Ok(true)
            }
            Self::NonSuperEffectiveImmunity => {
                if event.move_data.category == MoveCategory::Status
                    || context
                        .battle()
                        .attack_type_effectiveness(mon, event.move_data.move_type)?
                        >= 2.0
                {
                    return Ok(false);
                }
                event.cancelled.set(true);
                event.value.set(0.0);
                context.set_trigger_message(format!(
                    "{} avoided damage with {}!",
                    context.mon_name()?,
                    context.ability_name()
                ));
                Ok(true)
            }
            Self::FieldPriorityMoveImmunity => {
                let mut priority = IntegerHolder::new(event.move_data.priority as i64);
                context.dispatch(
                    event.attacker,
                    EffectTag::IncrementMovePriority,
                    &mut HookEvent::Apply(
                        ApplyEvent::new()
                            .with_move(event.move_data)
                            .with_integer(&mut priority),
                    ),
                )?;
                if priority.value() <= 0 || event.move_data.is_multi_target() {
                    return Ok(false);
                }
                event.cancelled.set(true);
                Ok(true)
            }
            Self::MoveImmunity { when } => {
                if !when.evaluate(context.battle(), move_use)? {
                    return Ok(false);
                }
                event.cancelled.set(true);
                context.set_trigger_message(format!("It doesn't affect {}!", context.mon_name()?));
                Ok(true)
            }
            Self::MoveImmunityStatChange {
                when,
                stat,
                levels,
            } => {
                if !when.evaluate(context.battle(), move_use)? {
                    return Ok(false);
                }
                event.cancelled.set(true);
                context.set_trigger_message(format!("It doesn't affect {}!", context.mon_name()?));
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, &[*stat], *levels)?;
                Ok(true)
            }
        }
    }
}

/// Steals a random held item from one Mon for another.
pub(crate) fn steal_held_item(
    context: &mut EffectContext,
    from: MonHandle,
) -> Result<bool> {
    let items = context.battle().held_items(from)?;
    let Some(item) = context.sample(&items).cloned() else {
        return Ok(false);
    };
    let mon = context.mon();
    if !context
        .battle_mut()
        .try_transfer_held_item(&item, from, mon)?
    {
        return Ok(false);
    }
    context.queue_message(format!(
        "{} stole {}'s {}!",
        context.mon_name()?,
        context.name_of(from)?,
        item.name
    ))?;
    Ok(true)
}

/// Effects applied to a Mon after it is hit by a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostDefendEffect {
    /// Takes a fraction of maximum HP in place of the first hit, busting the disguise.
    Disguise,
    FormChange {
        form: FormRule,
    },
    /// Changes a stat of the Mon, or of the attacker, after matching moves.
    StatChange {
        when: MoveCondition,
        stat: BattleStat,
        levels: i8,
        #[serde(default = "default_self_target")]
        self_target: bool,
    },
    ApplyTag {
        when: MoveCondition,
        tag: BattlerTagType,
    },
    /// Changes the Mon's type to the type of the move that hit it.
    TypeChange,
    TerrainChange {
        terrain: TerrainType,
    },
    /// Inflicts a status on attackers that make contact.
    ///
    /// A chance of -1 always inflicts the status.
    ContactApplyStatus {
        chance: i32,
        statuses: Vec<StatusEffect>,
    },
    ContactApplyTagChance {
        chance: u32,
        tag: BattlerTagType,
        #[serde(default)]
        turns: u8,
    },
    /// Changes a stat after being hit by a critical hit.
    CritStatChange {
        stat: BattleStat,
        levels: i8,
    },
    /// Damages attackers that make contact by a fraction of their maximum HP.
    ContactDamage {
        ratio: u32,
    },
    WeatherChange {
        weather: WeatherType,
    },
    /// Swaps abilities with attackers that make contact.
    AbilitySwap,
    /// Gives this ability to attackers that make contact.
    AbilityGive,
    StealHeldItem {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        when: Option<MoveCondition>,
    },
}

impl PostDefendEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::Disguise => EffectTag::PostDefendDisguise,
            Self::FormChange { .. } => EffectTag::PostDefendFormChange,
            Self::StatChange { .. } => EffectTag::PostDefendStatChange,
            Self::ApplyTag { .. } => EffectTag::PostDefendApplyTag,
            Self::TypeChange => EffectTag::PostDefendTypeChange,
            Self::TerrainChange { .. } => EffectTag::PostDefendTerrainChange,
            Self::ContactApplyStatus { .. } => EffectTag::PostDefendContactApplyStatus,
            Self::ContactApplyTagChance { .. } => EffectTag::PostDefendContactApplyTagChance,
            Self::CritStatChange { .. } => EffectTag::PostDefendCritStatChange,
            Self::ContactDamage { .. } => EffectTag::PostDefendContactDamage,
            Self::WeatherChange { .. } => EffectTag::PostDefendWeatherChange,
            Self::AbilitySwap => EffectTag::PostDefendAbilitySwap,
            Self::AbilityGive => EffectTag::PostDefendAbilityGive,
            Self::StealHeldItem { .. } => EffectTag::PostDefendStealHeldItem,
        }
    }

    pub fn intrinsic_condition(&self, battle: &dyn Battle, mon: MonHandle) -> Result<bool> {
        match self {
            Self::CritStatChange { .. } => battle.last_hit_critical(mon),
            _ => Ok(true),
        }
    }

    pub fn apply(&self, context: &mut EffectContext, event: MoveHitEvent) -> Result<bool> {
        let mon = context.mon();
        let MoveHitEvent {
            attacker,
            move_data,
            hit_result,
        } = event;
        let move_use = MoveUse {
            user: attacker,
            target: mon,
            move_data,
        };
        match self {
            Self::Disguise => {
                if context.battle().form_index(mon)? != 0
                    || context.battle().hit_count(mon)? == 0
                    || move_data.category == MoveCategory::Status
                {
                    return Ok(false);
                }
                let max_hp = context.battle().max_hp(mon)?;
                let dealt = context.battle().damage_dealt_this_turn(mon)?;
                let damage = (max_hp as f64 / 8.0 - dealt as f64).ceil();
                if damage <= 0.0 {
                    return Ok(false);
                }
                context.battle_mut().damage(mon, damage as u32)?;
                context.set_trigger_message(format!(
                    "{}'s disguise was busted!",
                    context.mon_name()?
                ));
                Ok(true)
            }
            Self::FormChange { form } => change_form(context, form),
            Self::StatChange {
                when,
                stat,
                levels,
                self_target,
            } => {
                if !when.evaluate(context.battle(), move_use)? {
                    return Ok(false);
                }
                let target = if *self_target { mon } else { attacker };
                context
                    .battle_mut()
                    .queue_stat_change(target, true, &[*stat], *levels)?;
                Ok(true)
            }
            Self::ApplyTag { when, tag } => {
                if !when.evaluate(context.battle(), move_use)? {
                    return Ok(false);
                }
                context.battle_mut().add_tag(mon, *tag, 0, Some(mon))?;
                Ok(true)
            }
            Self::TypeChange => {
                if !hit_result.dealt_damage() {
                    return Ok(false);
                }
                let move_type = move_data.move_type;
                if context.battle().types(mon)? == [move_type] {
                    return Ok(false);
                }
                context.battle_mut().set_types(mon, vec![move_type])?;
                context.set_trigger_message(context.ability_message(&format!(
                    "made it the {} type!",
                    move_type.name()
                ))?);
                Ok(true)
            }
            Self::TerrainChange { terrain } => {
                if !hit_result.dealt_damage() {
                    return Ok(false);
                }
                context.battle_mut().try_set_terrain(*terrain, mon)
            }
            Self::ContactApplyStatus { chance, statuses } => {
                if !context.makes_contact(move_data, attacker)?
                    || context.battle().status(attacker)?.is_some()
                {
                    return Ok(false);
                }
                if *chance != -1 && !context.roll_percent((*chance).max(0) as u32) {
                    return Ok(false);
                }
                let Some(status) = context.sample(statuses).copied() else {
                    return Ok(false);
                };
                context
                    .battle_mut()
                    .try_set_status(attacker, status, Some(mon))
            }
            Self::ContactApplyTagChance {
                chance,
                tag,
                turns,
            } => {
                if !context.makes_contact(move_data, attacker)? || !context.roll_percent(*chance) {
                    return Ok(false);
                }
                context
                    .battle_mut()
                    .add_tag(attacker, *tag, *turns, Some(attacker))
            }
            Self::CritStatChange { stat, levels } => {
                context
                    .battle_mut()
                    .queue_stat_change(mon, true, &[*stat], *levels)?;
                Ok(true)
            }
            Self::ContactDamage { ratio } => {
                if !context.makes_contact(move_data, attacker)? {
                    return Ok(false);
                }
                contact_damage(context, attacker, *ratio)
            }
            Self::WeatherChange { weather } => {
                if context.battle().weather_immutable()? {
                    return Ok(false);
                }
                context.battle_mut().try_set_weather(*weather, mon)
            }
            Self::AbilitySwap => {
                if !context.makes_contact(move_data, attacker)? {
                    return Ok(false);
                }
                if context
                    .ability_of(attacker)?
                    .is_some_and(|ability| ability.has_tag(EffectTag::UnswappableAbility))
                {
                    return Ok(false);
                }
                let attacker_ability = context.battle().ability(attacker)?;
                let ability = context.battle().ability(mon)?;
                context.battle_mut().set_ability(attacker, ability)?;
                context.battle_mut().set_ability(mon, attacker_ability)?;
                context.set_trigger_message(format!(
                    "{} swapped abilities with its target!",
                    context.mon_name()?
                ));
                Ok(true)
            }
            Self::AbilityGive => {
                if !context.makes_contact(move_data, attacker)? {
                    return Ok(false);
                }
                if context.ability_of(attacker)?.is_some_and(|ability| {
                    ability.has_tag(EffectTag::UnsuppressableAbility)
                        || ability.has_tag(EffectTag::PostDefendAbilityGive)
                }) {
                    return Ok(false);
                }
                let ability = context.battle().ability(mon)?;
                context.battle_mut().set_ability(attacker, ability)?;
                context.set_trigger_message(format!(
                    "{} gave its target {}!",
                    context.mon_name()?,
                    context.ability_name()
                ));
                Ok(true)
            }
            Self::StealHeldItem { when } => {
                if !hit_result.dealt_damage() {
                    return Ok(false);
                }
                if let Some(when) = when {
                    if !when.evaluate(context.battle(), move_use)? {
                        return Ok(false);
                    }
                }
                steal_held_item(context, attacker)
            }
        }
    }
}

/// Damages the attacker by a fraction of its maximum HP.
fn contact_damage(context: &mut EffectContext, attacker: MonHandle, ratio: u32) -> Result<bool> {
    let amount = context.battle().max_hp(attacker)?.div_ceil(ratio.max(1));
    context.battle_mut().damage(attacker, amount)?;
    context.set_trigger_message(context.ability_message("hurt its attacker!")?);
    Ok(true)
}

/// Effects applied to a Mon that fainted from a move.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PostFaintEffect {
    /// Damages an attacker that made contact by a fraction of its maximum HP.
    ContactDamage { ratio: u32 },
}

impl PostFaintEffect {
    pub fn tag(&self) -> EffectTag {
        match self {
            Self::ContactDamage { .. } => EffectTag::PostFaintContactDamage,
        }
    }

    pub fn apply(&self, context: &mut EffectContext, event: MoveHitEvent) -> Result<bool> {
        match self {
            Self::ContactDamage { ratio } => {
                if !context.makes_contact(event.move_data, event.attacker)? {
                    return Ok(false);
                }
                contact_damage(context, event.attacker, *ratio)
            }
        }
    }
}
