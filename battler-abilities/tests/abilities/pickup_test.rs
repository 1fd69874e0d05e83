use battler_abilities::{
    abilities::EffectTag,
    catalog::AbilityCatalog,
    dispatch::Dispatcher,
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    assert_new_presentation_eq,
    setup_test_environment,
};

#[test]
fn pickup_claims_random_loot() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new()
        .with_loot("Oran Berry")
        .with_loot("Poke Ball")
        .with_loot("Nugget");
    let meowth = battle.add_mon(TestMon::new("Meowth", "Pickup"));
    battle.rng().insert_fake_value(1, 2);

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_battle(&mut battle, meowth, EffectTag::PostBattle),
        Ok(())
    );
    assert_eq!(battle.loot.len(), 2);
    assert_eq!(
        battle
            .claimed_loot
            .iter()
            .map(|(_, item)| item.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Nugget"]
    );
    assert_new_presentation_eq(
        &mut battle,
        &["abilitybanner|mon:0", "message|Meowth picked up Nugget!"],
    );
}

#[test]
fn pickup_does_nothing_without_loot() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let meowth = battle.add_mon(TestMon::new("Meowth", "Pickup"));

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_battle(&mut battle, meowth, EffectTag::PostBattle),
        Ok(())
    );
    assert_eq!(battle.rng().sequence_count(), 0);
    assert!(!battle.log.has_new_events());
}
