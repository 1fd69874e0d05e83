mod context;
mod errors;
mod wrap;

pub use anyhow::{
    Error,
    Result,
};
pub use errors::{
    DispatchDepthError,
    GeneralError,
    MissingHookArgumentError,
    NotFoundError,
    general_error,
    missing_hook_argument_error,
    not_found_error,
};
pub use wrap::{
    WrapError,
    WrapOptionError,
    WrapResultError,
};
