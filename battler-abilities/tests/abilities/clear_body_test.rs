use battler_abilities::{
    abilities::EffectTag,
    battle::MonHandle,
    catalog::AbilityCatalog,
    common::BooleanHolder,
    data::BattleStat,
    dispatch::Dispatcher,
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    assert_new_presentation_eq,
    setup_test_environment,
};

fn lower_stat(
    catalog: &AbilityCatalog,
    battle: &mut TestBattle,
    mon: MonHandle,
    stat: BattleStat,
) -> bool {
    let mut cancelled = BooleanHolder::new(false);
    assert_matches::assert_matches!(
        Dispatcher::new(catalog).apply_pre_stat_change(
            battle,
            mon,
            EffectTag::PreStatChange,
            stat,
            &mut cancelled,
        ),
        Ok(())
    );
    cancelled.value()
}

#[test]
fn clear_body_prevents_lowering_any_stat() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let metagross = battle.add_mon(TestMon::new("Metagross", "Clear Body"));

    assert!(lower_stat(&catalog, &mut battle, metagross, BattleStat::Atk));
    assert!(lower_stat(&catalog, &mut battle, metagross, BattleStat::Eva));
    assert_new_presentation_eq(
        &mut battle,
        &[
            "abilitybanner|mon:0",
            "message|Metagross's Clear Body prevents lowering its stats!",
            "abilitybanner|mon:0",
            "message|Metagross's Clear Body prevents lowering its stats!",
        ],
    );
}

#[test]
fn clear_body_is_ignorable() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let metagross = battle.add_mon(TestMon::new("Metagross", "Clear Body"));

    let mut cancelled = BooleanHolder::new(false);
    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).ignoring_ignorable().apply_pre_stat_change(
            &mut battle,
            metagross,
            EffectTag::PreStatChange,
            BattleStat::Def,
            &mut cancelled,
        ),
        Ok(())
    );
    assert!(!cancelled.value());
}
