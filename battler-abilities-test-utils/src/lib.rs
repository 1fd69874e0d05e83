mod error_assert;
mod log_assert;
mod moves;
mod rng;
mod setup;
mod test_battle;

pub use error_assert::{
    assert_error_message,
    assert_error_message_contains,
};
pub use log_assert::assert_new_presentation_eq;
pub use moves::TestMoveBuilder;
pub use rng::{
    ControlledRandomNumberGenerator,
    get_controlled_rng_for_battle,
};
pub use setup::setup_test_environment;
pub use test_battle::{
    QueuedStatChange,
    TestBattle,
    TestMon,
};
