//! Stack trace normalization.
//!
//! This crate provides:
//! - Positional parsing of raw `name@file:line:column` fragments into typed frames
//! - Human-readable rendering of the normalized trace
//! - JSON serialization of the frame sequence
//! - A pluggable capture seam for runtime-specific trace extraction
//!
//! # Example
//!
//! ```rust
//! use stacknorm::StackTrace;
//!
//! let mut trace = StackTrace::from_raw_frames(&[
//!     "innermost@app.js:10:5",
//!     "caller@app.js:42:1",
//! ]);
//!
//! trace.slice(0, Some(1));
//! assert_eq!(trace.to_string(), "    at innermost (app.js:10:5)");
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod capture;
pub mod error;
pub mod frame;
pub mod parser;
pub mod stack;

pub use capture::{CaptureOptions, ReplayCapturer, TraceCapturer};
pub use error::{Error, Result};
pub use frame::Frame;
pub use parser::{parse, parse_fragment};
pub use stack::StackTrace;
