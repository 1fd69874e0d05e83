use battler_abilities::{
    abilities::EffectTag,
    battle::MonHandle,
    catalog::AbilityCatalog,
    dispatch::Dispatcher,
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    assert_new_presentation_eq,
    setup_test_environment,
};

fn wishiwashi(battle: &mut TestBattle, hp: u32, form: u8) -> MonHandle {
    battle.add_mon(
        TestMon::new("Wishiwashi", "Schooling")
            .with_hp(hp, 100)
            .with_form(form),
    )
}

#[test]
fn schooling_forms_school_on_entry_at_high_hp() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let mon = wishiwashi(&mut battle, 100, 0);

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_summon(&mut battle, mon, EffectTag::PostSummon),
        Ok(())
    );
    assert_eq!(battle.mon(mon).form, 1);
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn schooling_breaks_school_at_quarter_hp() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let mon = wishiwashi(&mut battle, 25, 1);

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_turn(&mut battle, mon, EffectTag::PostTurn),
        Ok(())
    );
    assert_eq!(battle.mon(mon).form, 0);
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn schooling_keeps_current_form() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let schooled = wishiwashi(&mut battle, 26, 1);
    let solo = wishiwashi(&mut battle, 10, 0);
    let mut dispatcher = Dispatcher::new(&catalog);

    for mon in [schooled, solo] {
        assert_matches::assert_matches!(
            dispatcher.apply_post_battle_init(&mut battle, mon, EffectTag::PostBattleInit),
            Ok(())
        );
    }
    assert_eq!(battle.mon(schooled).form, 1);
    assert_eq!(battle.mon(solo).form, 0);
    assert!(!battle.log.has_new_events());
}
