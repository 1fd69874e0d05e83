use std::sync::{
    Arc,
    atomic::{
        AtomicUsize,
        Ordering,
    },
};

use anyhow::Result;
use battler_abilities::{
    abilities::{
        Ability,
        Attribute,
        CustomEffect,
        Effect,
        EffectTag,
        HookCategory,
        HookEvent,
    },
    battle::MonHandle,
    catalog::AbilityCatalog,
    common::Id,
    dispatch::{
        Dispatcher,
        EffectContext,
    },
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    assert_error_message_contains,
    assert_new_presentation_eq,
    setup_test_environment,
};

/// Dispatches its own hook again for the same Mon.
struct Echo {
    calls: Arc<AtomicUsize>,
}

impl CustomEffect for Echo {
    fn name(&self) -> &'static str {
        "Echo"
    }

    fn hook(&self) -> HookCategory {
        HookCategory::PostTurn
    }

    fn apply(&self, context: &mut EffectContext, _: &mut HookEvent) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mon = context.mon();
        context.dispatch(mon, EffectTag::PostTurn, &mut HookEvent::PostTurn)?;
        Ok(true)
    }
}

/// Dispatches its own hook for the next Mon in the battle.
struct Relay;

impl CustomEffect for Relay {
    fn name(&self) -> &'static str {
        "Relay"
    }

    fn hook(&self) -> HookCategory {
        HookCategory::PostTurn
    }

    fn show_ability(&self) -> bool {
        false
    }

    fn apply(&self, context: &mut EffectContext, _: &mut HookEvent) -> Result<bool> {
        let next = MonHandle(context.mon().0 + 1);
        if context.battle().mon_name(next).is_err() {
            return Ok(false);
        }
        context.dispatch(next, EffectTag::PostTurn, &mut HookEvent::PostTurn)?;
        Ok(true)
    }
}

/// Counts every time it resolves.
struct Count {
    name: &'static str,
    calls: Arc<AtomicUsize>,
}

impl CustomEffect for Count {
    fn name(&self) -> &'static str {
        self.name
    }

    fn hook(&self) -> HookCategory {
        HookCategory::PostTurn
    }

    fn apply(&self, _: &mut EffectContext, _: &mut HookEvent) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }
}

/// Replaces the active ability of the Mon.
struct Swap {
    ability: Id,
}

impl CustomEffect for Swap {
    fn name(&self) -> &'static str {
        "Swap"
    }

    fn hook(&self) -> HookCategory {
        HookCategory::PostTurn
    }

    fn apply(&self, context: &mut EffectContext, _: &mut HookEvent) -> Result<bool> {
        let mon = context.mon();
        context
            .battle_mut()
            .set_ability(mon, self.ability.clone())?;
        Ok(true)
    }
}

fn catalog(calls: Arc<AtomicUsize>) -> AbilityCatalog {
    AbilityCatalog::new([
        Ability::builder(Id::from("Echo"), "Echo")
            .with_attribute(Attribute::new(Effect::custom(Echo { calls })))
            .build(),
        Ability::builder(Id::from("Relay"), "Relay")
            .with_attribute(Attribute::new(Effect::custom(Relay)))
            .build(),
    ])
    .unwrap()
}

#[test]
fn reentrant_dispatch_for_same_mon_and_hook_is_skipped() {
    setup_test_environment();
    let calls = Arc::new(AtomicUsize::new(0));
    let catalog = catalog(calls.clone());
    let mut battle = TestBattle::new();
    let mon = battle.add_mon(TestMon::new("Chatot", "Echo"));

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_turn(&mut battle, mon, EffectTag::PostTurn),
        Ok(())
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn nested_dispatch_for_other_mons_resolves() {
    setup_test_environment();
    let catalog = catalog(Arc::new(AtomicUsize::new(0)));
    let mut battle = TestBattle::new();
    let first = battle.add_mon(TestMon::new("Relay", "Relay"));
    for i in 1..4 {
        battle.add_mon(TestMon::new(&format!("Relay {i}"), "Relay"));
    }

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_turn(&mut battle, first, EffectTag::PostTurn),
        Ok(())
    );
}

#[test]
fn dispatch_depth_is_bounded() {
    setup_test_environment();
    let catalog = catalog(Arc::new(AtomicUsize::new(0)));
    let mut battle = TestBattle::new();
    let first = battle.add_mon(TestMon::new("Relay", "Relay"));
    for i in 1..=Dispatcher::MAX_DEPTH + 1 {
        battle.add_mon(TestMon::new(&format!("Relay {i}"), "Relay"));
    }

    let mut dispatcher = Dispatcher::new(&catalog);
    assert_error_message_contains(
        dispatcher.apply_post_turn(&mut battle, first, EffectTag::PostTurn),
        "ability dispatch depth exceeded 10",
    );

    // The dispatcher is still usable after the failure.
    let last = MonHandle(battle.mons.len() - 1);
    assert_matches::assert_matches!(
        dispatcher.apply_post_turn(&mut battle, last, EffectTag::PostTurn),
        Ok(())
    );
}

#[test]
fn ability_swapped_mid_walk_takes_effect_on_next_dispatch() {
    setup_test_environment();
    let after = Arc::new(AtomicUsize::new(0));
    let other = Arc::new(AtomicUsize::new(0));
    let catalog = AbilityCatalog::new([
        Ability::builder(Id::from("Shifter"), "Shifter")
            .with_attribute(Attribute::new(Effect::custom(Swap {
                ability: Id::from("Settled"),
            })))
            .with_attribute(Attribute::new(Effect::custom(Count {
                name: "After",
                calls: after.clone(),
            })))
            .build(),
        Ability::builder(Id::from("Settled"), "Settled")
            .with_attribute(Attribute::new(Effect::custom(Count {
                name: "Other",
                calls: other.clone(),
            })))
            .build(),
    ])
    .unwrap();
    let mut battle = TestBattle::new();
    let mon = battle.add_mon(TestMon::new("Kecleon", "Shifter"));

    let mut dispatcher = Dispatcher::new(&catalog);
    assert_matches::assert_matches!(
        dispatcher.apply_post_turn(&mut battle, mon, EffectTag::PostTurn),
        Ok(())
    );
    assert_eq!(battle.mon(mon).ability, Id::from("Settled"));
    assert_eq!(after.load(Ordering::SeqCst), 1);
    assert_eq!(other.load(Ordering::SeqCst), 0);

    assert_matches::assert_matches!(
        dispatcher.apply_post_turn(&mut battle, mon, EffectTag::PostTurn),
        Ok(())
    );
    assert_eq!(after.load(Ordering::SeqCst), 1);
    assert_eq!(other.load(Ordering::SeqCst), 1);
}

#[test]
fn markers_are_queried_without_applying() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let mimikyu = battle.add_mon(TestMon::new("Mimikyu", "Disguise"));
    let pikachu = battle.add_mon(TestMon::new("Pikachu", "Static"));

    let dispatcher = Dispatcher::new(&catalog);
    assert_matches::assert_matches!(
        dispatcher.has_effect(&battle, mimikyu, EffectTag::UncopiableAbility),
        Ok(true)
    );
    assert_matches::assert_matches!(
        dispatcher.has_effect(&battle, pikachu, EffectTag::UncopiableAbility),
        Ok(false)
    );
    assert!(!battle.log.has_new_events());
}
