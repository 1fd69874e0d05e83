use std::fmt::Display;

use anyhow::Error;
use thiserror::Error;

use crate::{
    abilities::HookCategory,
    battle::MonHandle,
    error::WrapError,
};

/// A general error, consisting of only a message.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct GeneralError {
    message: String,
}

impl GeneralError {
    /// Constructs a new general error.
    pub fn new<M>(message: M) -> Self
    where
        M: Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// A not found error.
#[derive(Error, Debug)]
#[error("{target} not found")]
pub struct NotFoundError {
    target: String,
}

impl NotFoundError {
    /// Constructs a new not found error.
    pub fn new<M>(target: M) -> Self
    where
        M: Display,
    {
        Self {
            target: target.to_string(),
        }
    }
}

/// An ability effect was dispatched without an argument it cannot work without.
///
/// Always a fault in the calling code.
#[derive(Error, Debug)]
#[error("{hook} effect {effect} requires argument: {argument}")]
pub struct MissingHookArgumentError {
    pub hook: HookCategory,
    pub effect: String,
    pub argument: &'static str,
}

/// Ability dispatches nested deeper than allowed.
///
/// Usually indicates two abilities that trigger each other indefinitely.
#[derive(Error, Debug)]
#[error("ability dispatch depth exceeded {max_depth} (at {hook} for mon {mon})")]
pub struct DispatchDepthError {
    pub max_depth: usize,
    pub hook: HookCategory,
    pub mon: MonHandle,
}

/// Helper for an [`struct@Error`] wrapping a [`GeneralError`].
#[track_caller]
pub fn general_error<M>(message: M) -> Error
where
    M: Display,
{
    GeneralError::new(message).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`NotFoundError`].
#[track_caller]
pub fn not_found_error<M>(target: M) -> Error
where
    M: Display,
{
    NotFoundError::new(target).wrap_error()
}

/// Helper for an [`struct@Error`] wrapping a [`MissingHookArgumentError`].
#[track_caller]
pub fn missing_hook_argument_error<M>(hook: HookCategory, effect: M, argument: &'static str) -> Error
where
    M: Display,
{
    MissingHookArgumentError {
        hook,
        effect: effect.to_string(),
        argument,
    }
    .wrap_error()
}
