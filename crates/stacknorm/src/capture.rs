//! Pluggable trace capture.
//!
//! The mechanism that extracts raw frames from a live error value varies
//! per host runtime, so it sits behind a trait. The parsing and formatting
//! core only ever sees the ordered fragment strings a capturer returns,
//! which keeps it testable with synthetic input.

use crate::error::Result;

/// A source of raw `name@file:line:column` fragments.
pub trait TraceCapturer {
    /// The error/context value this capturer understands.
    type Context;

    /// Extracts ordered raw fragments from the given context, innermost
    /// frame first.
    ///
    /// # Errors
    ///
    /// Error policy is the implementer's; callers propagate whatever is
    /// reported here without adding validation of their own.
    fn capture(&self, context: &Self::Context) -> Result<Vec<String>>;

    /// Attempts to fill in names for anonymous functions in the raw
    /// fragments, preserving fragment shape and ordering.
    ///
    /// The default implementation returns the fragments unchanged; the
    /// core ships no inference heuristic of its own.
    fn guess_names(&self, fragments: Vec<String>) -> Vec<String> {
        fragments
    }
}

/// Options controlling capture-time behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Whether to run anonymous-function-name inference over the raw
    /// fragments before parsing.
    pub guess: bool,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self { guess: true }
    }
}

impl CaptureOptions {
    /// Creates options with name inference disabled.
    #[must_use]
    pub const fn without_guessing() -> Self {
        Self { guess: false }
    }
}

/// A capturer that replays a pre-recorded fragment sequence verbatim.
///
/// Useful in tests and for feeding traces captured elsewhere through the
/// normal capture path.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayCapturer;

impl TraceCapturer for ReplayCapturer {
    type Context = Vec<String>;

    fn capture(&self, context: &Self::Context) -> Result<Vec<String>> {
        Ok(context.clone())
    }
}
