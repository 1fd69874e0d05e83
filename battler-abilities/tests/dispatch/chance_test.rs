use battler_abilities::{
    abilities::EffectTag,
    battle::MonHandle,
    catalog::AbilityCatalog,
    data::{
        HitResult,
        MoveCategory,
        StatusEffect,
        Type,
    },
    dispatch::Dispatcher,
};
use battler_abilities_test_utils::{
    TestBattle,
    TestMon,
    TestMoveBuilder,
    assert_new_presentation_eq,
    get_controlled_rng_for_battle,
    setup_test_environment,
};

fn make_battle(seed: u64) -> (TestBattle, MonHandle, MonHandle) {
    let mut battle = TestBattle::with_seed(seed);
    let pikachu = battle.add_mon(TestMon::new("Pikachu", "Static"));
    let machop = battle.add_mon(TestMon::new("Machop", "none").with_side(1));
    (battle, pikachu, machop)
}

fn hit_with_tackle(
    catalog: &AbilityCatalog,
    battle: &mut TestBattle,
    pikachu: MonHandle,
    machop: MonHandle,
) {
    let tackle = TestMoveBuilder::contact("Tackle", Type::Normal).build();
    assert_matches::assert_matches!(
        Dispatcher::new(catalog).apply_post_defend(
            battle,
            pikachu,
            EffectTag::PostDefend,
            machop,
            &tackle,
            HitResult::Effective,
        ),
        Ok(())
    );
}

#[test]
fn roll_below_chance_applies_effect() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let (mut battle, pikachu, machop) = make_battle(0);
    battle.rng().insert_fake_value(1, 29);

    hit_with_tackle(&catalog, &mut battle, pikachu, machop);
    assert_eq!(battle.mon(machop).status, Some(StatusEffect::Paralysis));
    assert_eq!(battle.rng().sequence_count(), 1);
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}

#[test]
fn roll_at_chance_does_not_apply_effect() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let (mut battle, pikachu, machop) = make_battle(0);
    get_controlled_rng_for_battle(&mut battle)
        .unwrap()
        .insert_fake_value(1, 30);

    hit_with_tackle(&catalog, &mut battle, pikachu, machop);
    assert_eq!(battle.mon(machop).status, None);
    assert!(!battle.log.has_new_events());
}

#[test]
fn moves_without_contact_do_not_roll() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let (mut battle, pikachu, machop) = make_battle(0);
    let water_gun =
        TestMoveBuilder::new("Water Gun", Type::Water, MoveCategory::Special).build();

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_defend(
            &mut battle,
            pikachu,
            EffectTag::PostDefend,
            machop,
            &water_gun,
            HitResult::Effective,
        ),
        Ok(())
    );
    assert_eq!(battle.rng().sequence_count(), 0);
    assert_eq!(battle.mon(machop).status, None);
}

#[test]
fn same_seed_produces_same_outcomes() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();

    let outcomes = |seed: u64| {
        let (mut battle, pikachu, machop) = make_battle(seed);
        (0..50)
            .map(|_| {
                hit_with_tackle(&catalog, &mut battle, pikachu, machop);
                battle.mon_mut(machop).status.take().is_some()
            })
            .collect::<Vec<_>>()
    };

    let first = outcomes(12345);
    assert_eq!(first, outcomes(12345));
    assert!(first.contains(&true));
    assert!(first.contains(&false));
}
