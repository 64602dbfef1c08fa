//! Markers for states that should never be reached.

use std::panic::panic_any;

/// The panic payload raised when control flow reaches a statement that should be unreachable.
///
/// Unlike [`unreachable!`], the payload is a typed value, so it can be recognised with
/// [`std::panic::catch_unwind`] and [`downcast_ref`](std::any::Any::downcast_ref).
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("{context}")]
pub struct UnreachableStatementError {
    /// Context explaining why the statement is unreachable, or the state that led to it.
    pub context: String,
}

impl UnreachableStatementError {
    /// The context used when none is given.
    pub const DEFAULT_CONTEXT: &'static str = "Control flow reached an unreachable statement";

    /// Creates an error with the given context.
    pub fn new<S: Into<String>>(context: S) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl Default for UnreachableStatementError {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CONTEXT)
    }
}

/// Panics with an [`UnreachableStatementError`] carrying `context`.
///
/// See also the [`unreachable_statement!`](crate::unreachable_statement) macro.
///
/// # Panics
/// Always.
#[track_caller]
pub fn unreachable_statement<S: Into<String>>(context: S) -> ! {
    let error = UnreachableStatementError::new(context);
    log::error!("{error}");
    panic_any(error)
}

#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use super::*;
    use crate::unreachable_statement;

    fn payload_of<F: FnOnce() + std::panic::UnwindSafe>(f: F) -> UnreachableStatementError {
        let payload = catch_unwind(f).expect_err("The closure should panic");
        payload
            .downcast_ref::<UnreachableStatementError>()
            .cloned()
            .expect("The payload should be an UnreachableStatementError")
    }

    #[test]
    fn default_context() {
        let error = payload_of(|| unreachable_statement!());
        assert_eq!(error, UnreachableStatementError::default());
    }

    #[test]
    fn custom_context() {
        let error = payload_of(|| unreachable_statement!("state {} is impossible", 42));
        assert_eq!(error.context, "state 42 is impossible");
    }
}
