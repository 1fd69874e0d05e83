use battler_abilities::{
    abilities::EffectTag,
    catalog::AbilityCatalog,
    common::Id,
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
fn mummy_spreads_to_attackers_that_make_contact() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let cofagrigus = battle.add_mon(TestMon::new("Cofagrigus", "Mummy"));
    let machamp = battle.add_mon(TestMon::new("Machamp", "Guts").with_side(1));
    let cross_chop = TestMoveBuilder::contact("Cross Chop", Type::Fighting).build();

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_defend(
            &mut battle,
            cofagrigus,
            EffectTag::PostDefend,
            machamp,
            &cross_chop,
            HitResult::Effective,
        ),
        Ok(())
    );
    assert_eq!(battle.mon(machamp).ability, Id::from("mummy"));
    assert_new_presentation_eq(
        &mut battle,
        &[
            "abilitybanner|mon:0",
            "message|Cofagrigus gave its target Mummy!",
        ],
    );
}

#[test]
fn mummy_does_not_spread_without_contact() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let cofagrigus = battle.add_mon(TestMon::new("Cofagrigus", "Mummy"));
    let alakazam = battle.add_mon(TestMon::new("Alakazam", "Guts").with_side(1));
    let psychic = TestMoveBuilder::new("Psychic", Type::Psychic, MoveCategory::Special).build();

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_defend(
            &mut battle,
            cofagrigus,
            EffectTag::PostDefendAbilityGive,
            alakazam,
            &psychic,
            HitResult::Effective,
        ),
        Ok(())
    );
    assert_eq!(battle.mon(alakazam).ability, Id::from("guts"));
    assert!(!battle.log.has_new_events());
}

#[test]
fn mummy_cannot_replace_unsuppressable_or_mummy() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let cofagrigus = battle.add_mon(TestMon::new("Cofagrigus", "Mummy"));
    let mimikyu = battle.add_mon(TestMon::new("Mimikyu", "Disguise").with_side(1));
    let yamask = battle.add_mon(TestMon::new("Yamask", "Mummy").with_side(1));
    let shadow_claw = TestMoveBuilder::contact("Shadow Claw", Type::Ghost).build();
    let mut dispatcher = Dispatcher::new(&catalog);

    for attacker in [mimikyu, yamask] {
        assert_matches::assert_matches!(
            dispatcher.apply_post_defend(
                &mut battle,
                cofagrigus,
                EffectTag::PostDefendAbilityGive,
                attacker,
                &shadow_claw,
                HitResult::Effective,
            ),
            Ok(())
        );
    }
    assert_eq!(battle.mon(mimikyu).ability, Id::from("disguise"));
    assert!(!battle.log.has_new_events());
}
