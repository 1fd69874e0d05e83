use battler_abilities::{
    abilities::EffectTag,
    catalog::AbilityCatalog,
    data::{
        HitResult,
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

#[test]
fn rough_skin_damages_contact_attackers() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let garchomp = battle.add_mon(TestMon::new("Garchomp", "Rough Skin"));
    let machamp = battle.add_mon(TestMon::new("Machamp", "none").with_side(1).with_hp(90, 90));
    let cross_chop = TestMoveBuilder::contact("Cross Chop", Type::Fighting).build();

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_defend(
            &mut battle,
            garchomp,
            EffectTag::PostDefend,
            machamp,
            &cross_chop,
            HitResult::Effective,
        ),
        Ok(())
    );
    // One eighth of 90, rounded up.
    assert_eq!(battle.mon(machamp).hp, 78);
    assert_new_presentation_eq(
        &mut battle,
        &[
            "abilitybanner|mon:0",
            "message|Garchomp's Rough Skin hurt its attacker!",
        ],
    );
}

#[test]
fn rough_skin_ignores_moves_without_contact() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let garchomp = battle.add_mon(TestMon::new("Garchomp", "Rough Skin"));
    let gardevoir = battle.add_mon(TestMon::new("Gardevoir", "none").with_side(1));
    let moonblast = TestMoveBuilder::new("Moonblast", Type::Fairy, MoveCategory::Special).build();

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_defend(
            &mut battle,
            garchomp,
            EffectTag::PostDefendContactDamage,
            gardevoir,
            &moonblast,
            HitResult::SuperEffective,
        ),
        Ok(())
    );
    assert_eq!(battle.mon(gardevoir).hp, 100);
    assert!(!battle.log.has_new_events());
}
