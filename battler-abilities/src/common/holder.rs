use crate::{
    battle::MonHandle,
    data::Type,
};

/// A mutable slot for a single value, shared between the code that triggers an ability hook and
/// the ability effects that respond to it.
///
/// The caller owns the holder and reads the final value after dispatch completes. Effects only
/// borrow the holder for the duration of a single dispatch.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Holder<T> {
    value: T,
}

impl<T> Holder<T>
where
    T: Copy,
{
    /// Creates a new holder with the initial value.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// The current value.
    pub fn value(&self) -> T {
        self.value
    }

    /// Overwrites the current value.
    pub fn set(&mut self, value: T) {
        self.value = value;
    }

    /// Replaces the current value with a value derived from it.
    pub fn update<F>(&mut self, f: F)
    where
        F: FnOnce(T) -> T,
    {
        self.value = f(self.value);
    }
}

/// Holds a flag, such as "cancelled" or "is critical hit."
pub type BooleanHolder = Holder<bool>;
/// Holds a real number, such as a damage multiplier or move power.
pub type NumberHolder = Holder<f64>;
/// Holds an integer, such as move priority or a stat stage change.
pub type IntegerHolder = Holder<i64>;
/// Holds a participant, such as the redirected target of a move.
pub type TargetHolder = Holder<MonHandle>;
/// Holds the type of a move, for effects that change it.
pub type TypeHolder = Holder<Type>;
