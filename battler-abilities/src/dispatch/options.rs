/// Options for a [`Dispatcher`][`crate::dispatch::Dispatcher`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOptions {
    /// Suppresses all presentation.
    ///
    /// Attributes still apply and mutate state exactly as they would otherwise. Used for damage
    /// previews and for checks made on behalf of other effects.
    pub quiet: bool,
    /// A single-target "ignore abilities" effect is in force, so abilities flagged as ignorable
    /// do not apply.
    pub ignore_ignorable: bool,
}

impl DispatchOptions {
    /// Options for a dispatch made from inside an effect.
    pub(crate) fn nested() -> Self {
        Self {
            quiet: true,
            ignore_ignorable: false,
        }
    }
}
