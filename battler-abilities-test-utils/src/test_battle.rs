use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::Result;
use battler_abilities::{
    battle::{
        AbilitySlot,
        Battle,
        MonHandle,
        PresentationEvent,
        PresentationLog,
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
    error::{
        WrapOptionError,
        general_error,
    },
    rng::PseudoRandomNumberGenerator,
};
use itertools::Itertools;

use crate::ControlledRandomNumberGenerator;

/// A Mon in a [`TestBattle`].
///
/// Every field is public so that tests can set up and inspect state directly.
#[derive(Debug, Clone)]
pub struct TestMon {
    pub name: String,
    pub ability: Id,
    pub passive_ability: Option<Id>,
    pub side: usize,
    pub hp: u32,
    pub max_hp: u32,
    pub form: u8,
    pub gender: Gender,
    pub types: Vec<Type>,
    pub stats: HashMap<Stat, u32>,
    pub status: Option<StatusEffect>,
    /// Tags with their remaining turns.
    pub tags: Vec<(BattlerTagType, u8)>,
    pub held_items: Vec<HeldItem>,
    pub hit_count: u32,
    pub damage_dealt_this_turn: u32,
    pub last_hit_critical: bool,
    pub active_suppressed: bool,
    pub passive_suppressed: bool,
    pub transformed_into: Option<MonHandle>,
    /// Effectiveness of attack types against the Mon, defaulting to neutral.
    pub effectiveness: HashMap<Type, f64>,
}

impl TestMon {
    pub fn new(name: &str, ability: &str) -> Self {
        let mut stats = HashMap::new();
        stats.insert(Stat::HP, 100);
        stats.insert(Stat::Atk, 100);
        stats.insert(Stat::Def, 100);
        stats.insert(Stat::SpAtk, 100);
        stats.insert(Stat::SpDef, 100);
        stats.insert(Stat::Spe, 100);
        Self {
            name: name.to_owned(),
            ability: Id::from(ability),
            passive_ability: None,
            side: 0,
            hp: 100,
            max_hp: 100,
            form: 0,
            gender: Gender::Genderless,
            types: vec![Type::Normal],
            stats,
            status: None,
            tags: Vec::new(),
            held_items: Vec::new(),
            hit_count: 0,
            damage_dealt_this_turn: 0,
            last_hit_critical: false,
            active_suppressed: false,
            passive_suppressed: false,
            transformed_into: None,
            effectiveness: HashMap::new(),
        }
    }

    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    pub fn with_passive_ability(mut self, ability: &str) -> Self {
        self.passive_ability = Some(Id::from(ability));
        self
    }

    pub fn with_hp(mut self, hp: u32, max_hp: u32) -> Self {
        self.hp = hp;
        self.max_hp = max_hp;
        self
    }

    pub fn with_form(mut self, form: u8) -> Self {
        self.form = form;
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_types(mut self, types: Vec<Type>) -> Self {
        self.types = types;
        self
    }

    pub fn with_stat(mut self, stat: Stat, value: u32) -> Self {
        self.stats.insert(stat, value);
        self
    }

    pub fn with_status(mut self, status: StatusEffect) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_held_item(mut self, name: &str) -> Self {
        self.held_items.push(HeldItem::new(name));
        self
    }

    pub fn with_effectiveness(mut self, attack_type: Type, multiplier: f64) -> Self {
        self.effectiveness.insert(attack_type, multiplier);
        self
    }

    pub fn fainted(&self) -> bool {
        self.hp == 0
    }

    pub fn has_tag(&self, tag: BattlerTagType) -> bool {
        self.tags.iter().any(|(t, _)| *t == tag)
    }
}

/// A stat change queued by an ability effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedStatChange {
    pub mon: MonHandle,
    pub self_targeted: bool,
    pub stats: Vec<BattleStat>,
    pub levels: i8,
}

/// An in-memory [`Battle`] for testing ability effects.
///
/// The battle applies every request directly, records presentation in a [`PresentationLog`], and
/// draws randomness from a [`ControlledRandomNumberGenerator`].
pub struct TestBattle {
    pub mons: Vec<TestMon>,
    pub weather: Option<WeatherType>,
    pub weather_immutable: bool,
    pub weather_suppressed: bool,
    pub terrain: Option<TerrainType>,
    pub loot: Vec<HeldItem>,
    /// Loot claimed after battle, by Mon.
    pub claimed_loot: Vec<(MonHandle, HeldItem)>,
    pub stat_changes: Vec<QueuedStatChange>,
    /// Prevents any held item from changing hands.
    pub block_item_transfer: bool,
    pub log: PresentationLog,
    prng: ControlledRandomNumberGenerator,
}

impl TestBattle {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            mons: Vec::new(),
            weather: None,
            weather_immutable: false,
            weather_suppressed: false,
            terrain: None,
            loot: Vec::new(),
            claimed_loot: Vec::new(),
            stat_changes: Vec::new(),
            block_item_transfer: false,
            log: PresentationLog::new(),
            prng: ControlledRandomNumberGenerator::new(Some(seed)),
        }
    }

    /// Adds a Mon to the battle, returning its handle.
    pub fn add_mon(&mut self, mon: TestMon) -> MonHandle {
        self.mons.push(mon);
        MonHandle(self.mons.len() - 1)
    }

    pub fn with_weather(mut self, weather: WeatherType) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_terrain(mut self, terrain: TerrainType) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn with_loot(mut self, name: &str) -> Self {
        self.loot.push(HeldItem::new(name));
        self
    }

    pub fn rng(&mut self) -> &mut ControlledRandomNumberGenerator {
        &mut self.prng
    }

    /// The Mon behind the handle.
    ///
    /// Panics for an invalid handle.
    pub fn mon(&self, mon: MonHandle) -> &TestMon {
        &self.mons[mon.0]
    }

    pub fn mon_mut(&mut self, mon: MonHandle) -> &mut TestMon {
        &mut self.mons[mon.0]
    }

    /// Takes every queued stat change, in order.
    pub fn take_stat_changes(&mut self) -> Vec<QueuedStatChange> {
        std::mem::take(&mut self.stat_changes)
    }

    fn get(&self, mon: MonHandle) -> Result<&TestMon> {
        self.mons
            .get(mon.0)
            .wrap_not_found_error(format_args!("mon {mon}"))
    }

    fn get_mut(&mut self, mon: MonHandle) -> Result<&mut TestMon> {
        self.mons
            .get_mut(mon.0)
            .wrap_not_found_error(format_args!("mon {mon}"))
    }

    fn active(&self) -> impl Iterator<Item = (MonHandle, &TestMon)> {
        self.mons
            .iter()
            .enumerate()
            .filter(|(_, mon)| !mon.fainted())
            .map(|(i, mon)| (MonHandle(i), mon))
    }
}

impl Default for TestBattle {
    fn default() -> Self {
        Self::new()
    }
}

impl Battle for TestBattle {
    fn mon_name(&self, mon: MonHandle) -> Result<String> {
        Ok(self.get(mon)?.name.clone())
    }

    fn ability(&self, mon: MonHandle) -> Result<Id> {
        Ok(self.get(mon)?.ability.clone())
    }

    fn passive_ability(&self, mon: MonHandle) -> Result<Option<Id>> {
        Ok(self.get(mon)?.passive_ability.clone())
    }

    fn set_ability(&mut self, mon: MonHandle, ability: Id) -> Result<()> {
        self.get_mut(mon)?.ability = ability;
        Ok(())
    }

    fn fainted(&self, mon: MonHandle) -> Result<bool> {
        Ok(self.get(mon)?.fainted())
    }

    fn ability_suppressed(&self, mon: MonHandle, slot: AbilitySlot) -> Result<bool> {
        let mon = self.get(mon)?;
        Ok(match slot {
            AbilitySlot::Active => mon.active_suppressed,
            AbilitySlot::Passive => mon.passive_suppressed,
        })
    }

    fn hp(&self, mon: MonHandle) -> Result<u32> {
        Ok(self.get(mon)?.hp)
    }

    fn max_hp(&self, mon: MonHandle) -> Result<u32> {
        Ok(self.get(mon)?.max_hp)
    }

    fn form_index(&self, mon: MonHandle) -> Result<u8> {
        Ok(self.get(mon)?.form)
    }

    fn try_change_form(&mut self, mon: MonHandle, form: u8) -> Result<bool> {
        let mon = self.get_mut(mon)?;
        if mon.form == form {
            return Ok(false);
        }
        mon.form = form;
        Ok(true)
    }

    fn gender(&self, mon: MonHandle) -> Result<Gender> {
        Ok(self.get(mon)?.gender)
    }

    fn types(&self, mon: MonHandle) -> Result<Vec<Type>> {
        Ok(self.get(mon)?.types.clone())
    }

    fn set_types(&mut self, mon: MonHandle, types: Vec<Type>) -> Result<()> {
        self.get_mut(mon)?.types = types;
        Ok(())
    }

    fn stat(&self, mon: MonHandle, stat: Stat) -> Result<u32> {
        self.get(mon)?
            .stats
            .get(&stat)
            .copied()
            .wrap_not_found_error(format_args!("stat {stat}"))
    }

    fn status(&self, mon: MonHandle) -> Result<Option<StatusEffect>> {
        Ok(self.get(mon)?.status)
    }

    fn try_set_status(
        &mut self,
        mon: MonHandle,
        status: StatusEffect,
        _: Option<MonHandle>,
    ) -> Result<bool> {
        let mon = self.get_mut(mon)?;
        if mon.status.is_some() || mon.fainted() {
            return Ok(false);
        }
        mon.status = Some(status);
        Ok(true)
    }

    fn cure_status(&mut self, mon: MonHandle) -> Result<()> {
        self.get_mut(mon)?.status = None;
        Ok(())
    }

    fn has_tag(&self, mon: MonHandle, tag: BattlerTagType) -> Result<bool> {
        Ok(self.get(mon)?.has_tag(tag))
    }

    fn add_tag(
        &mut self,
        mon: MonHandle,
        tag: BattlerTagType,
        turns: u8,
        _: Option<MonHandle>,
    ) -> Result<bool> {
        let mon = self.get_mut(mon)?;
        if mon.has_tag(tag) {
            return Ok(false);
        }
        mon.tags.push((tag, turns));
        Ok(true)
    }

    fn heal(&mut self, mon: MonHandle, amount: u32) -> Result<u32> {
        let mon = self.get_mut(mon)?;
        let healed = amount.min(mon.max_hp - mon.hp);
        mon.hp += healed;
        Ok(healed)
    }

    fn damage(&mut self, mon: MonHandle, amount: u32) -> Result<u32> {
        let mon = self.get_mut(mon)?;
        let damage = amount.min(mon.hp);
        mon.hp -= damage;
        Ok(damage)
    }

    fn queue_stat_change(
        &mut self,
        mon: MonHandle,
        self_targeted: bool,
        stats: &[BattleStat],
        levels: i8,
    ) -> Result<()> {
        self.get(mon)?;
        self.stat_changes.push(QueuedStatChange {
            mon,
            self_targeted,
            stats: stats.to_vec(),
            levels,
        });
        Ok(())
    }

    fn attack_type_effectiveness(&self, mon: MonHandle, attack_type: Type) -> Result<f64> {
        Ok(self
            .get(mon)?
            .effectiveness
            .get(&attack_type)
            .copied()
            .unwrap_or(1.0))
    }

    fn hit_count(&self, mon: MonHandle) -> Result<u32> {
        Ok(self.get(mon)?.hit_count)
    }

    fn damage_dealt_this_turn(&self, mon: MonHandle) -> Result<u32> {
        Ok(self.get(mon)?.damage_dealt_this_turn)
    }

    fn last_hit_critical(&self, mon: MonHandle) -> Result<bool> {
        Ok(self.get(mon)?.last_hit_critical)
    }

    fn opponents(&self, mon: MonHandle) -> Result<Vec<MonHandle>> {
        let side = self.get(mon)?.side;
        Ok(self
            .active()
            .filter(|(_, other)| other.side != side)
            .map(|(handle, _)| handle)
            .collect())
    }

    fn allies(&self, mon: MonHandle) -> Result<Vec<MonHandle>> {
        let side = self.get(mon)?.side;
        Ok(self
            .active()
            .filter(|(handle, other)| *handle != mon && other.side == side)
            .map(|(handle, _)| handle)
            .collect())
    }

    fn side(&self, mon: MonHandle) -> Result<usize> {
        Ok(self.get(mon)?.side)
    }

    fn transform_into(&mut self, mon: MonHandle, target: MonHandle) -> Result<bool> {
        if mon == target {
            return Ok(false);
        }
        let types = self.get(target)?.types.clone();
        let mon = self.get_mut(mon)?;
        mon.types = types;
        mon.transformed_into = Some(target);
        Ok(true)
    }

    fn held_items(&self, mon: MonHandle) -> Result<Vec<HeldItem>> {
        Ok(self.get(mon)?.held_items.clone())
    }

    fn try_transfer_held_item(
        &mut self,
        item: &HeldItem,
        from: MonHandle,
        to: MonHandle,
    ) -> Result<bool> {
        if self.block_item_transfer || from == to {
            return Ok(false);
        }
        self.get(to)?;
        let from = self.get_mut(from)?;
        let Some((index, _)) = from.held_items.iter().find_position(|held| held.id == item.id)
        else {
            return Ok(false);
        };
        let item = from.held_items.remove(index);
        self.get_mut(to)?.held_items.push(item);
        Ok(true)
    }

    fn post_battle_loot(&self) -> Result<Vec<HeldItem>> {
        Ok(self.loot.clone())
    }

    fn try_claim_post_battle_loot(&mut self, mon: MonHandle, index: usize) -> Result<bool> {
        self.get(mon)?;
        if index >= self.loot.len() {
            return Err(general_error(format!("loot index {index} out of range")));
        }
        let item = self.loot.remove(index);
        self.claimed_loot.push((mon, item));
        Ok(true)
    }

    fn weather(&self) -> Result<Option<WeatherType>> {
        Ok(self.weather)
    }

    fn weather_immutable(&self) -> Result<bool> {
        Ok(self.weather_immutable)
    }

    fn weather_suppressed(&self) -> Result<bool> {
        Ok(self.weather_suppressed)
    }

    fn try_set_weather(&mut self, weather: WeatherType, source: MonHandle) -> Result<bool> {
        self.get(source)?;
        if self.weather_immutable || self.weather == Some(weather) {
            return Ok(false);
        }
        self.weather = Some(weather);
        Ok(true)
    }

    fn terrain(&self) -> Result<Option<TerrainType>> {
        Ok(self.terrain)
    }

    fn try_set_terrain(&mut self, terrain: TerrainType, source: MonHandle) -> Result<bool> {
        self.get(source)?;
        if self.terrain == Some(terrain) {
            return Ok(false);
        }
        self.terrain = Some(terrain);
        Ok(true)
    }

    fn present(&mut self, event: PresentationEvent) -> Result<()> {
        self.log.push(event);
        Ok(())
    }

    fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        &mut self.prng
    }
}
