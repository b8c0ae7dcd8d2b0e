//! Stack trace representation.
//!
//! A [`StackTrace`] owns an ordered sequence of parsed frames, innermost
//! frame first, and exposes rendering, destructive slicing, and JSON
//! serialization over it.

use crate::capture::{CaptureOptions, TraceCapturer};
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::parser;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A normalized stack trace.
///
/// Holds exactly one frame per raw input fragment, in input order. The
/// sequence can only shrink (via [`StackTrace::slice`]) after
/// construction; it is never re-parsed or appended to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackTrace {
    frames: Vec<Frame>,
}

impl StackTrace {
    /// Parses an explicit sequence of raw fragments into a trace.
    ///
    /// Never fails: a malformed fragment parses into a frame with its
    /// unresolved fields left unset.
    #[must_use]
    pub fn from_raw_frames<S: AsRef<str>>(fragments: &[S]) -> Self {
        Self {
            frames: parser::parse(fragments),
        }
    }

    /// Captures a trace from a context value via the given capturer.
    ///
    /// When `options.guess` is set, the capturer's anonymous-function-name
    /// inference runs over the raw fragments before parsing.
    ///
    /// # Errors
    ///
    /// Propagates whatever the capturer reports; this layer adds no
    /// validation of its own.
    pub fn from_context<C: TraceCapturer>(
        capturer: &C,
        context: &C::Context,
        options: CaptureOptions,
    ) -> Result<Self> {
        let raw = capturer.capture(context)?;
        debug!(frames = raw.len(), guess = options.guess, "captured raw trace");

        let raw = if options.guess {
            capturer.guess_names(raw)
        } else {
            raw
        };

        Ok(Self {
            frames: parser::parse(&raw),
        })
    }

    /// Returns the parsed frames, innermost first.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if the trace holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Destructively keeps only the `[start, finish)` sub-sequence of
    /// frames.
    ///
    /// Standard slice semantics: negative indices count from the end, a
    /// `None` finish runs through the end, and out-of-range indices clamp
    /// instead of failing. A start at or past the finish leaves an empty
    /// trace. Returns `&mut Self` so calls can be chained.
    pub fn slice(&mut self, start: isize, finish: Option<isize>) -> &mut Self {
        let len = self.frames.len();
        let resolve = |index: isize| {
            if index < 0 {
                len.saturating_sub(index.unsigned_abs())
            } else {
                index.unsigned_abs().min(len)
            }
        };

        let start = resolve(start);
        let finish = finish.map_or(len, resolve);

        self.frames.truncate(finish);
        self.frames.drain(..start.min(finish));
        self
    }

    /// Returns the ordered frame sequence for a generic JSON-serialization
    /// facility to consume.
    ///
    /// This is the sequence itself, not a copy; it reflects the current
    /// (post-slice) state.
    #[must_use]
    pub fn to_json(&self) -> &[Frame] {
        &self.frames
    }

    /// Renders the frame sequence as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the serializer fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(&self.frames).map_err(Error::from)
    }
}

impl fmt::Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Lines are joined with "\n\r", not "\r\n". Downstream consumers
        // of the rendered form rely on the exact separator.
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\r")?;
            }
            write!(
                f,
                "    at {} ({}:{}:{})",
                frame.name.as_deref().unwrap_or(""),
                frame.file.as_deref().unwrap_or(""),
                frame.line.as_deref().unwrap_or(""),
                frame.column.as_deref().unwrap_or("")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Capturer that serves canned fragments and prefixes anonymous
    /// frames when asked to guess names.
    struct GuessingCapturer {
        fragments: Vec<String>,
    }

    impl TraceCapturer for GuessingCapturer {
        type Context = ();

        fn capture(&self, _context: &Self::Context) -> Result<Vec<String>> {
            Ok(self.fragments.clone())
        }

        fn guess_names(&self, fragments: Vec<String>) -> Vec<String> {
            fragments
                .into_iter()
                .map(|fragment| {
                    if fragment.starts_with('@') {
                        format!("inferred{fragment}")
                    } else {
                        fragment
                    }
                })
                .collect()
        }
    }

    struct FailingCapturer;

    impl TraceCapturer for FailingCapturer {
        type Context = ();

        fn capture(&self, _context: &Self::Context) -> Result<Vec<String>> {
            Err(Error::capture("no trace available"))
        }
    }

    #[test]
    fn one_frame_per_fragment() {
        let stack = StackTrace::from_raw_frames(&["a@b:1:2", "malformed", "c@d:3:4"]);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn display_single_frame() {
        let stack = StackTrace::from_raw_frames(&["a@f:1:2"]);
        assert_eq!(stack.to_string(), "    at a (f:1:2)");
    }

    #[test]
    fn display_joins_lines_with_newline_carriage_return() {
        let stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4"]);
        assert_eq!(
            stack.to_string(),
            "    at a (f:1:2)\n\r    at b (g:3:4)"
        );
    }

    #[test]
    fn display_renders_unresolved_fields_empty() {
        let stack = StackTrace::from_raw_frames(&["lonely"]);
        assert_eq!(stack.to_string(), "    at lonely (::)");
    }

    #[test]
    fn display_reflects_sliced_state() {
        let mut stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4"]);
        stack.slice(1, None);
        assert_eq!(stack.to_string(), "    at b (g:3:4)");
    }

    #[test]
    fn slice_from_zero_keeps_everything() {
        let mut stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4"]);
        let before = stack.frames().to_vec();
        stack.slice(0, None);
        assert_eq!(stack.frames(), before);
    }

    #[test]
    fn slice_negative_start_keeps_tail() {
        let mut stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4", "c@h:5:6"]);
        stack.slice(-1, None);

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.frames()[0].name.as_deref(), Some("c"));
    }

    #[test]
    fn slice_negative_finish_drops_tail() {
        let mut stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4", "c@h:5:6"]);
        stack.slice(0, Some(-1));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.frames()[1].name.as_deref(), Some("b"));
    }

    #[test]
    fn slice_clamps_out_of_range_indices() {
        let mut stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4"]);
        stack.slice(0, Some(100));
        assert_eq!(stack.len(), 2);

        stack.slice(-100, None);
        assert_eq!(stack.len(), 2);

        stack.slice(5, None);
        assert!(stack.is_empty());
    }

    #[test]
    fn slice_start_past_finish_empties_the_trace() {
        let mut stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4"]);
        stack.slice(2, Some(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn slice_returns_the_same_instance() {
        let mut stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4"]);
        let original: *const StackTrace = &stack;
        let sliced: *const StackTrace = stack.slice(0, None);

        assert!(std::ptr::eq(original, sliced));
    }

    #[test]
    fn slice_calls_chain() {
        let mut stack = StackTrace::from_raw_frames(&["a@f:1:2", "b@g:3:4", "c@h:5:6"]);
        stack.slice(1, None).slice(0, Some(1));

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.frames()[0].name.as_deref(), Some("b"));
    }

    #[test]
    fn to_json_is_the_frame_sequence_itself() {
        let stack = StackTrace::from_raw_frames(&["a@f:1:2"]);
        assert!(std::ptr::eq(stack.to_json(), stack.frames()));
    }

    #[test]
    fn serializes_as_frame_array() {
        let stack = StackTrace::from_raw_frames(&["foo@bar.js:10:5"]);
        let value = serde_json::to_value(&stack).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                { "name": "foo", "file": "bar.js", "line": "10", "column": "5" }
            ])
        );
    }

    #[test]
    fn json_round_trip_preserves_frames() {
        let stack = StackTrace::from_raw_frames(&["foo@bar.js:10:5", "noAtSign:3:1"]);
        let encoded = stack.to_json_string().unwrap();
        let decoded: StackTrace = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded.frames(), stack.frames());
    }

    #[test]
    fn from_context_delegates_to_the_capturer() {
        let capturer = GuessingCapturer {
            fragments: vec!["outer@app.js:9:1".to_string()],
        };
        let stack =
            StackTrace::from_context(&capturer, &(), CaptureOptions::default()).unwrap();

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.frames()[0].name.as_deref(), Some("outer"));
    }

    #[test]
    fn guessing_runs_by_default() {
        let capturer = GuessingCapturer {
            fragments: vec!["@anon.js:1:1".to_string()],
        };
        let stack =
            StackTrace::from_context(&capturer, &(), CaptureOptions::default()).unwrap();

        assert_eq!(stack.frames()[0].name.as_deref(), Some("inferred"));
    }

    #[test]
    fn guessing_can_be_disabled() {
        let capturer = GuessingCapturer {
            fragments: vec!["@anon.js:1:1".to_string()],
        };
        let stack =
            StackTrace::from_context(&capturer, &(), CaptureOptions::without_guessing()).unwrap();

        assert_eq!(stack.frames()[0].name.as_deref(), Some(""));
    }

    #[test]
    fn capture_failure_propagates() {
        let result = StackTrace::from_context(&FailingCapturer, &(), CaptureOptions::default());
        assert!(matches!(result, Err(Error::Capture(_))));
    }
}
