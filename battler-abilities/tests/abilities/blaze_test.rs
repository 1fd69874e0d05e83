use battler_abilities::{
    abilities::EffectTag,
    catalog::AbilityCatalog,
    common::NumberHolder,
    data::{
        MoveCategory,
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

fn power_of(battle: &mut TestBattle, catalog: &AbilityCatalog, move_type: Type) -> f64 {
    let charizard = battle.add_mon(TestMon::new("Charizard", "Blaze").with_hp(33, 100));
    let target = battle.add_mon(TestMon::new("Venusaur", "none").with_side(1));
    let move_data = TestMoveBuilder::new("Attack", move_type, MoveCategory::Special)
        .with_power(90)
        .build();
    let mut power = NumberHolder::new(90.0);
    assert_matches::assert_matches!(
        Dispatcher::new(catalog).apply_pre_attack(
            battle,
            charizard,
            EffectTag::PreAttack,
            target,
            &move_data,
            &mut power,
            None,
        ),
        Ok(())
    );
    power.value()
}

#[test]
fn blaze_boosts_fire_moves_at_low_hp() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    assert_eq!(power_of(&mut battle, &catalog, Type::Fire), 135.0);
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn blaze_ignores_other_types() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    assert_eq!(power_of(&mut battle, &catalog, Type::Flying), 90.0);
    assert!(!battle.log.has_new_events());
}

#[test]
fn blaze_requires_low_hp() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let charizard = battle.add_mon(TestMon::new("Charizard", "Blaze").with_hp(34, 100));
    let target = battle.add_mon(TestMon::new("Venusaur", "none").with_side(1));
    let flamethrower =
        TestMoveBuilder::new("Flamethrower", Type::Fire, MoveCategory::Special).build();

    let mut power = NumberHolder::new(90.0);
    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_pre_attack(
            &mut battle,
            charizard,
            EffectTag::VariableMovePower,
            target,
            &flamethrower,
            &mut power,
            None,
        ),
        Ok(())
    );
    assert_eq!(power.value(), 90.0);
}
