use battler_abilities::{
    abilities::{
        ApplyEvent,
        EffectTag,
    },
    battle::MonHandle,
    catalog::AbilityCatalog,
    common::{
        BooleanHolder,
        NumberHolder,
    },
    data::{
        BattlerTagType,
        Type,
    },
    dispatch::Dispatcher,
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    TestMoveBuilder,
    assert_error_message,
    assert_new_presentation_eq,
    setup_test_environment,
};

fn hit_for(catalog: &AbilityCatalog, battle: &mut TestBattle, golem: MonHandle, damage: f64) {
    let machamp = battle.add_mon(TestMon::new("Machamp", "none").with_side(1));
    let close_combat = TestMoveBuilder::contact("Close Combat", Type::Fighting)
        .with_power(120)
        .build();
    let mut cancelled = BooleanHolder::new(false);
    let mut damage = NumberHolder::new(damage);
    assert_matches::assert_matches!(
        Dispatcher::new(catalog).apply_pre_defend(
            battle,
            golem,
            EffectTag::PreDefend,
            machamp,
            &close_combat,
            &mut cancelled,
            &mut damage,
        ),
        Ok(())
    );
}

#[test]
fn sturdy_endures_knockout_from_full_hp() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let golem = battle.add_mon(TestMon::new("Golem", "Sturdy"));

    hit_for(&catalog, &mut battle, golem, 400.0);
    assert!(battle.mon(golem).has_tag(BattlerTagType::Sturdy));
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn sturdy_does_not_endure_below_full_hp_or_weak_hits() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let golem = battle.add_mon(TestMon::new("Golem", "Sturdy"));
    let hurt_golem = battle.add_mon(TestMon::new("Golem", "Sturdy").with_hp(99, 100));

    hit_for(&catalog, &mut battle, golem, 99.0);
    hit_for(&catalog, &mut battle, hurt_golem, 400.0);
    assert!(!battle.mon(golem).has_tag(BattlerTagType::Sturdy));
    assert!(!battle.mon(hurt_golem).has_tag(BattlerTagType::Sturdy));
    assert!(!battle.log.has_new_events());
}

#[test]
fn sturdy_blocks_one_hit_knockout_moves() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let golem = battle.add_mon(TestMon::new("Golem", "Sturdy"));

    let mut cancelled = BooleanHolder::new(false);
    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply(
            &mut battle,
            golem,
            EffectTag::BlockOneHitKo,
            ApplyEvent::new().with_cancelled(&mut cancelled),
        ),
        Ok(())
    );
    assert!(cancelled.value());
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn blocking_one_hit_knockout_requires_cancelled_argument() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let golem = battle.add_mon(TestMon::new("Golem", "Sturdy"));

    assert_error_message(
        Dispatcher::new(&catalog).apply(
            &mut battle,
            golem,
            EffectTag::BlockOneHitKo,
            ApplyEvent::new(),
        ),
        "Apply effect BlockOneHitKo requires argument: cancelled",
    );
}
