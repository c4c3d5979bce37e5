//! The pre-flight extension point consumed before any daemon launches.

/// Error type surfaced verbatim from a failed pre-flight hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Platform-supplied bring-up step that runs before the first launch.
///
/// Embedding platforms use this to prepare hardware the daemons depend on,
/// for example resetting switch silicon or configuring virtual functions.
/// The supervisor only observes success or failure; a failure aborts the
/// startup sequence before any daemon is launched.
pub trait PreflightHook {
    /// Runs the bring-up step.
    ///
    /// # Errors
    ///
    /// Any error aborts the startup sequence and is reported unchanged.
    fn run(&self) -> Result<(), HookError>;
}

/// Default hook that always succeeds without side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl PreflightHook for NoopHook {
    fn run(&self) -> Result<(), HookError> {
        Ok(())
    }
}
