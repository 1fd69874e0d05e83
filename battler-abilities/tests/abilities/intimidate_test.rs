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
    assert_new_presentation_eq,
    setup_test_environment,
};
use pretty_assertions::assert_eq;

#[test]
fn intimidate_lowers_attack_of_active_opponents() {
    setup_test_environment();
    let catalog = AbilityCatalog::standard().unwrap();
    let mut battle = TestBattle::new();
    let gyarados = battle.add_mon(TestMon::new("Gyarados", "Intimidate"));
    battle.add_mon(TestMon::new("Togekiss", "none"));
    let pidgey = battle.add_mon(TestMon::new("Pidgey", "none").with_side(1));
    battle.add_mon(TestMon::new("Rattata", "none").with_side(1).with_hp(0, 50));
    let spearow = battle.add_mon(TestMon::new("Spearow", "none").with_side(1));

    assert_matches::assert_matches!(
        Dispatcher::new(&catalog).apply_post_summon(&mut battle, gyarados, EffectTag::PostSummon),
        Ok(())
    );
    assert_eq!(
        battle.take_stat_changes(),
        vec![
            QueuedStatChange {
                mon: pidgey,
                self_targeted: false,
                stats: vec![BattleStat::Atk],
                levels: -1,
            },
            QueuedStatChange {
                mon: spearow,
                self_targeted: false,
                stats: vec![BattleStat::Atk],
                levels: -1,
            },
        ]
    );
    assert_new_presentation_eq(&mut battle, &["abilitybanner|mon:0"]);
}
