use battler_abilities::{
    abilities::EffectTag,
    battle::MonHandle,
    catalog::AbilityCatalog,
    common::{
        BooleanHolder,
        NumberHolder,
    },
    data::{
        HitResult,
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

fn pre_defend(
    catalog: &AbilityCatalog,
    battle: &mut TestBattle,
    mimikyu: MonHandle,
    attacker: MonHandle,
    move_data: &MoveData,
) -> f64 {
    let mut cancelled = BooleanHolder::new(false);
    let mut damage = NumberHolder::new(60.0);
    assert_matches::assert_matches!(
        Dispatcher::new(catalog).apply_pre_defend(
            battle,
            mimikyu,
            EffectTag::PreDefend,
            attacker,
            move_data,
            &mut cancelled,
            &mut damage,
        ),
        Ok(())
    );
    damage.value()
}

#[test]
fn disguise_takes_first_hit_and_busts() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let mimikyu = battle.add_mon(TestMon::new("Mimikyu", "Disguise"));
    let tauros = battle.add_mon(TestMon::new("Tauros", "none").with_side(1));
    let tackle = TestMoveBuilder::contact("Tackle", Type::Normal).build();

    assert_eq!(pre_defend(&catalog, &mut battle, mimikyu, tauros, &tackle), 1.0);
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);

    // The battle applies the reduced hit.
    let mon = battle.mon_mut(mimikyu);
    mon.hp -= 1;
    mon.hit_count = 1;
    mon.damage_dealt_this_turn = 1;

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_defend(
            &mut battle,
            mimikyu,
            EffectTag::PostDefend,
            tauros,
            &tackle,
            HitResult::Effective,
        ),
        Ok(())
    );
    assert_eq!(battle.mon(mimikyu).hp, 87);
    assert_eq!(battle.mon(mimikyu).form, 1);
    assert_new_presentation_eq(
        &mut battle,
        &[
            "abilitybanner|mon:0",
            "message|Mimikyu's disguise was busted!",
            "abilitybanner|mon:0",
        ],
    );

    // The busted disguise no longer protects it.
    assert_eq!(pre_defend(&catalog, &mut battle, mimikyu, tauros, &tackle), 60.0);
    assert!(!battle.log.has_new_events());
}

#[test]
fn disguise_ignores_status_moves() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let mimikyu = battle.add_mon(TestMon::new("Mimikyu", "Disguise"));
    let tauros = battle.add_mon(TestMon::new("Tauros", "none").with_side(1));
    let growl = TestMoveBuilder::new("Growl", Type::Normal, MoveCategory::Status).build();

    assert_eq!(pre_defend(&catalog, &mut battle, mimikyu, tauros, &growl), 60.0);
    assert!(!battle.log.has_new_events());
}
