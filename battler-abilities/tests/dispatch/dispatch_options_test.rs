use battler_abilities::{
    abilities::{
        Ability,
        Attribute,
        Effect,
        EffectTag,
        PostFaintEffect,
    },
    catalog::AbilityCatalog,
    common::{
        BooleanHolder,
        Id,
        NumberHolder,
    },
    data::{
        HitResult,
        MoveCategory,
        Type,
    },
    dispatch::{
        DispatchOptions,
        Dispatcher,
    },
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    TestMoveBuilder,
    assert_new_presentation_eq,
    setup_test_environment,
};

#[test]
fn quiet_dispatch_applies_effects_without_presentation() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let lanturn = battle.add_mon(TestMon::new("Lanturn", "Volt Absorb").with_hp(50, 100));
    let pikachu = battle.add_mon(TestMon::new("Pikachu", "none").with_side(1));
    let thunderbolt = TestMoveBuilder::new("Thunderbolt", Type::Electric, MoveCategory::Special)
        .with_power(90)
        .build();

    let mut cancelled = BooleanHolder::new(false);
    let mut multiplier = NumberHolder::new(1.0);
    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).quiet().apply_pre_defend(
            &mut battle,
            lanturn,
            EffectTag::PreDefend,
            pikachu,
            &thunderbolt,
            &mut cancelled,
            &mut multiplier,
        ),
        Ok(())
    );
    assert_eq!(multiplier.value(), 0.0);
    assert_eq!(battle.mon(lanturn).hp, 75);
    assert!(!battle.log.has_new_events());
}

#[test]
fn ignorable_abilities_are_skipped_when_requested() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let gengar = battle.add_mon(TestMon::new("Gengar", "Levitate"));
    let excadrill = battle.add_mon(TestMon::new("Excadrill", "Mold Breaker").with_side(1));
    let earthquake = TestMoveBuilder::new("Earthquake", Type::Ground, MoveCategory::Physical)
        .with_power(100)
        .build();

    let mut cancelled = BooleanHolder::new(false);
    let mut multiplier = NumberHolder::new(1.0);
    assert_matches::assert_matches!(
        Dispatcher::new(&catalog)
            .with_options(DispatchOptions {
                ignore_ignorable: true,
                ..Default::default()
            })
            .apply_pre_defend(
                &mut battle,
                gengar,
                EffectTag::TypeImmunity,
                excadrill,
                &earthquake,
                &mut cancelled,
                &mut multiplier,
            ),
        Ok(())
    );
    assert_eq!(multiplier.value(), 1.0);

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_pre_defend(
            &mut battle,
            gengar,
            EffectTag::TypeImmunity,
            excadrill,
            &earthquake,
            &mut cancelled,
            &mut multiplier,
        ),
        Ok(())
    );
    assert_eq!(multiplier.value(), 0.0);
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn suppressed_slot_is_skipped() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let mut mon = TestMon::new("Rotom", "Volt Absorb").with_passive_ability("Levitate");
    mon.active_suppressed = true;
    let rotom = battle.add_mon(mon);
    let pikachu = battle.add_mon(TestMon::new("Pikachu", "none").with_side(1));
    let thunderbolt =
        TestMoveBuilder::new("Thunderbolt", Type::Electric, MoveCategory::Special).build();
    let earthquake =
        TestMoveBuilder::new("Earthquake", Type::Ground, MoveCategory::Physical).build();

    let mut cancelled = BooleanHolder::new(false);
    let mut multiplier = NumberHolder::new(1.0);
    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_pre_defend(
            &mut battle,
            rotom,
            EffectTag::PreDefend,
            pikachu,
            &thunderbolt,
            &mut cancelled,
            &mut multiplier,
        ),
        Ok(())
    );
    assert_eq!(multiplier.value(), 1.0);
    assert!(!battle.log.has_new_events());

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_pre_defend(
            &mut battle,
            rotom,
            EffectTag::PreDefend,
            pikachu,
            &earthquake,
            &mut cancelled,
            &mut multiplier,
        ),
        Ok(())
    );
    assert_eq!(multiplier.value(), 0.0);
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0|passive"]);
}

#[test]
fn fainted_mons_only_resolve_abilities_that_bypass_faint() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let voltorb = battle.add_mon(TestMon::new("Voltorb", "Aftermath").with_hp(0, 100));
    let carvanha = battle.add_mon(TestMon::new("Carvanha", "Rough Skin").with_hp(0, 100));
    let machop = battle.add_mon(TestMon::new("Machop", "none").with_side(1));
    let tackle = TestMoveBuilder::contact("Tackle", Type::Normal)
        .with_power(40)
        .build();

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_defend(
            &mut battle,
            carvanha,
            EffectTag::PostDefend,
            machop,
            &tackle,
            HitResult::Effective,
        ),
        Ok(())
    );
    assert_eq!(battle.mon(machop).hp, 100);
    assert!(!battle.log.has_new_events());

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_faint(
            &mut battle,
            voltorb,
            EffectTag::PostFaint,
            machop,
            &tackle,
            HitResult::Effective,
        ),
        Ok(())
    );
    assert_eq!(battle.mon(machop).hp, 75);
    assert_new_presentation_eq(
        &mut battle,
        &[
            "abilitybanner|mon:0",
            "message|Voltorb's Aftermath hurt its attacker!",
        ],
    );
}

#[test]
fn fainted_mons_skip_post_faint_abilities_without_bypass_faint() {
    setup_test_environment();
    let retaliate = || {
        Attribute::new(Effect::PostFaint(PostFaintEffect::ContactDamage {
            ratio: 4,
        }))
    };
    let catalog = AbilityCatalog::new([
        Ability::builder(Id::from("Parting Shot"), "Parting Shot")
            .with_attribute(retaliate())
            .bypass_faint()
            .build(),
        Ability::builder(Id::from("Spent Shot"), "Spent Shot")
            .with_attribute(retaliate())
            .build(),
    ])
    .unwrap();
    let mut battle = TestBattle::new();
    let bypassing = battle.add_mon(TestMon::new("Voltorb", "Parting Shot").with_hp(0, 100));
    let grounded = battle.add_mon(TestMon::new("Electrode", "Spent Shot").with_hp(0, 100));
    let machop = battle.add_mon(TestMon::new("Machop", "none").with_side(1));
    let tackle = TestMoveBuilder::contact("Tackle", Type::Normal)
        .with_power(40)
        .build();

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_faint(
            &mut battle,
            grounded,
            EffectTag::PostFaint,
            machop,
            &tackle,
            HitResult::Effective,
        ),
        Ok(())
    );
    assert_eq!(battle.mon(machop).hp, 100);
    assert!(!battle.log.has_new_events());

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_faint(
            &mut battle,
            bypassing,
            EffectTag::PostFaint,
            machop,
            &tackle,
            HitResult::Effective,
        ),
        Ok(())
    );
    assert_eq!(battle.mon(machop).hp, 75);
}
