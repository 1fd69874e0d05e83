use battler_abilities::{
    abilities::EffectTag,
    battle::MonHandle,
    catalog::AbilityCatalog,
    common::BooleanHolder,
    data::StatusEffect,
    dispatch::Dispatcher,
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    assert_new_presentation_eq,
    setup_test_environment,
};

fn try_status(
    catalog: &AbilityCatalog,
    battle: &mut TestBattle,
    mon: MonHandle,
    status: StatusEffect,
) -> bool {
    let mut cancelled = BooleanHolder::new(false);
    assert_matches::assert_matches!(
        Dispatcher::new(catalog).apply_pre_set_status(
            battle,
            mon,
            EffectTag::PreSetStatus,
            status,
            &mut cancelled,
        ),
        Ok(())
    );
    cancelled.value()
}

#[test]
fn immunity_prevents_poisoning() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let snorlax = battle.add_mon(TestMon::new("Snorlax", "Immunity"));

    assert!(try_status(&catalog, &mut battle, snorlax, StatusEffect::Poison));
    assert!(try_status(&catalog, &mut battle, snorlax, StatusEffect::Toxic));
    assert_new_presentation_eq(
        &mut battle,
        &[
            "abilitybanner|mon:0",
            "message|Snorlax's Immunity prevents poisoning!",
            "abilitybanner|mon:0",
            "message|Snorlax's Immunity prevents poisoning!",
        ],
    );
}

#[test]
fn immunity_allows_other_statuses() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let snorlax = battle.add_mon(TestMon::new("Snorlax", "Immunity"));

    assert!(!try_status(&catalog, &mut battle, snorlax, StatusEffect::Burn));
    assert!(!try_status(&catalog, &mut battle, snorlax, StatusEffect::Paralysis));
    assert!(!battle.log.has_new_events());
}
