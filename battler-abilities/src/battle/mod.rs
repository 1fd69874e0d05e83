mod battle;
mod handle;
mod presentation;

pub use battle::Battle;
pub use handle::{
    AbilitySlot,
    MonHandle,
};
pub use presentation::{
    PresentationEvent,
    PresentationLog,
};
