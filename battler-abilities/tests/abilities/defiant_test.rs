use battler_abilities::{
    abilities::EffectTag,
    catalog::AbilityCatalog,
    data::BattleStat,
    dispatch::Dispatcher,
};
use battler_abilities_test_utils::{
    QueuedStatChange,
    TestBattle,
    TestMon,
    setup_test_environment,
};

#[test]
fn defiant_sharply_raises_attack_when_opponent_lowers_stats() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let bisharp = battle.add_mon(TestMon::new("Bisharp", "Defiant"));

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_stat_change(
            &mut battle,
            bisharp,
            EffectTag::PostStatChange,
            &[BattleStat::Def],
            -1,
            false,
        ),
        Ok(())
    );
    pretty_assertions::assert_eq!(
        battle.take_stat_changes(),
        vec![QueuedStatChange {
            mon: bisharp,
            self_targeted: true,
            stats: vec![BattleStat::Atk],
            levels: 2,
        }]
    );
}

#[test]
fn defiant_ignores_raised_and_self_targeted_changes() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let bisharp = battle.add_mon(TestMon::new("Bisharp", "Defiant"));
    let mut dispatcher = Dispatcher::new(&catalog);

    assert_matches::assert_matches!(
        dispatcher.apply_post_stat_change(
            &mut battle,
            bisharp,
            EffectTag::PostStatChange,
            &[BattleStat::Atk],
            2,
            false,
        ),
        Ok(())
    );
    assert_matches::assert_matches!(
        dispatcher.apply_post_stat_change(
            &mut battle,
            bisharp,
            EffectTag::PostStatChange,
            &[BattleStat::Spe],
            -1,
            true,
        ),
        Ok(())
    );
    assert!(battle.take_stat_changes().is_empty());
    assert!(!battle.log.has_new_events());
}
