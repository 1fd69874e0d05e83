//! Dispatching battle hooks to ability effects.

mod context;
mod dispatcher;
mod options;

pub use context::EffectContext;
pub use dispatcher::Dispatcher;
pub use options::DispatchOptions;
