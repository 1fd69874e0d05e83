use battler_abilities::{
    abilities::EffectTag,
    catalog::AbilityCatalog,
    common::{
        BooleanHolder,
        NumberHolder,
    },
    data::{
        MoveCategory,
        MoveTarget,
        Type,
    },
    dispatch::Dispatcher,
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    TestMoveBuilder,
    assert_new_presentation_eq,
    setup_test_environment,
};

#[test]
fn dazzling_blocks_moves_with_priority_raised_by_abilities() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let bruxish = battle.add_mon(TestMon::new("Bruxish", "Dazzling"));
    let sableye = battle.add_mon(TestMon::new("Sableye", "Prankster").with_side(1));
    let thunder_wave =
        TestMoveBuilder::new("Thunder Wave", Type::Electric, MoveCategory::Status).build();

    let mut cancelled = BooleanHolder::new(false);
    let mut multiplier = NumberHolder::new(1.0);
    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_pre_defend(
            &mut battle,
            bruxish,
            EffectTag::PreDefend,
            sableye,
            &thunder_wave,
            &mut cancelled,
            &mut multiplier,
        ),
        Ok(())
    );
    assert!(cancelled.value());
    // The attacker's Prankster is resolved silently.
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn dazzling_allows_normal_priority_and_spread_moves() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let bruxish = battle.add_mon(TestMon::new("Bruxish", "Dazzling"));
    let sableye = battle.add_mon(TestMon::new("Sableye", "Prankster").with_side(1));
    let shadow_claw = TestMoveBuilder::contact("Shadow Claw", Type::Ghost).build();
    let growl = TestMoveBuilder::new("Growl", Type::Normal, MoveCategory::Status)
        .with_target(MoveTarget::AllNearEnemies)
        .build();
    let mut dispatcher = Dispatcher::new(&catalog);

    for move_data in [&shadow_claw, &growl] {
        let mut cancelled = BooleanHolder::new(false);
        let mut multiplier = NumberHolder::new(1.0);
        assert_matches::assert_matches!(
            dispatcher.apply_pre_defend(
                &mut battle,
                bruxish,
                EffectTag::FieldPriorityMoveImmunity,
                sableye,
                move_data,
                &mut cancelled,
                &mut multiplier,
            ),
            Ok(())
        );
        assert!(!cancelled.value());
    }
    assert!(!battle.log.has_new_events());
}

#[test]
fn dazzling_blocks_naturally_fast_moves() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let bruxish = battle.add_mon(TestMon::new("Bruxish", "Dazzling"));
    let rattata = battle.add_mon(TestMon::new("Rattata", "none").with_side(1));
    let quick_attack = TestMoveBuilder::contact("Quick Attack", Type::Normal)
        .with_power(40)
        .with_priority(1)
        .build();

    let mut cancelled = BooleanHolder::new(false);
    let mut multiplier = NumberHolder::new(1.0);
    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_pre_defend(
            &mut battle,
            bruxish,
            EffectTag::PreDefend,
            rattata,
            &quick_attack,
            &mut cancelled,
            &mut multiplier,
        ),
        Ok(())
    );
    assert!(cancelled.value());
}
