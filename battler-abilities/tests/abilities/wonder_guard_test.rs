use battler_abilities::{
    abilities::EffectTag,
    battle::MonHandle,
    catalog::AbilityCatalog,
    common::{
        BooleanHolder,
        NumberHolder,
    },
    data::{
        MoveCategory,
        MoveData,
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

fn make_battle() -> (TestBattle, MonHandle, MonHandle) {
    let mut battle = TestBattle::new();
    let shedinja = battle.add_mon(
        TestMon::new("Shedinja", "Wonder Guard")
            .with_hp(1, 1)
            .with_types(vec![Type::Bug, Type::Ghost])
            .with_effectiveness(Type::Fire, 2.0)
            .with_effectiveness(Type::Normal, 0.0)
            .with_effectiveness(Type::Grass, 0.25),
    );
    let attacker = battle.add_mon(TestMon::new("Smeargle", "none").with_side(1));
    (battle, shedinja, attacker)
}

fn hit(
    catalog: &AbilityCatalog,
    battle: &mut TestBattle,
    shedinja: MonHandle,
    attacker: MonHandle,
    move_data: &MoveData,
) -> (bool, f64) {
    let mut cancelled = BooleanHolder::new(false);
    let mut multiplier = NumberHolder::new(1.0);
    assert_matches::assert_matches!(
        Dispatcher::new(catalog).apply_pre_defend(
            battle,
            shedinja,
            EffectTag::TypeImmunity,
            attacker,
            move_data,
            &mut cancelled,
            &mut multiplier,
        ),
        Ok(())
    );
    (cancelled.value(), multiplier.value())
}

#[test]
fn wonder_guard_blocks_moves_that_are_not_super_effective() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let (mut battle, shedinja, smeargle) = make_battle();
    let energy_ball =
        TestMoveBuilder::new("Energy Ball", Type::Grass, MoveCategory::Special).build();
    let surf = TestMoveBuilder::new("Surf", Type::Water, MoveCategory::Special).build();

    assert_eq!(
        hit(&catalog, &mut battle, shedinja, smeargle, &energy_ball),
        (true, 0.0)
    );
    assert_eq!(hit(&catalog, &mut battle, shedinja, smeargle, &surf), (true, 0.0));
    assert_new_presentation_eq(
        &mut battle,
        &[
            "abilitybanner|mon:0",
            "message|Shedinja avoided damage with Wonder Guard!",
            "abilitybanner|mon:0",
            "message|Shedinja avoided damage with Wonder Guard!",
        ],
    );
}

#[test]
fn wonder_guard_allows_super_effective_and_status_moves() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let (mut battle, shedinja, smeargle) = make_battle();
    let flamethrower =
        TestMoveBuilder::new("Flamethrower", Type::Fire, MoveCategory::Special).build();
    let spore = TestMoveBuilder::new("Spore", Type::Grass, MoveCategory::Status).build();

    assert_eq!(
        hit(&catalog, &mut battle, shedinja, smeargle, &flamethrower),
        (false, 1.0)
    );
    assert_eq!(hit(&catalog, &mut battle, shedinja, smeargle, &spore), (false, 1.0));
    assert!(!battle.log.has_new_events());
}
