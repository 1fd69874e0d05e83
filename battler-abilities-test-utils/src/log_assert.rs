use crate::TestBattle;

/// Asserts that new presentation events in the battle are equal to the given events.
///
/// Events are compared in their string form, such as `message|Rain began to fall!`.
#[track_caller]
pub fn assert_new_presentation_eq(battle: &mut TestBattle, want: &[&str]) {
    let got = battle
        .log
        .read_out()
        .map(|event| event.to_string())
        .collect::<Vec<_>>();
    let want = want.iter().map(|event| event.to_string()).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}
