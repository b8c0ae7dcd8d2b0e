//! Frame data model.

use serde::{Deserialize, Serialize};

/// One parsed entry in a stack trace.
///
/// Every field is optional: a fragment that lacks a separator leaves the
/// corresponding fields unset rather than failing the parse. Line and
/// column stay in their original textual form; reinterpreting them as
/// integers would lose whatever the raw producer actually reported.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Identifier of the function active at this point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Source file or script identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line number, as reported by the raw source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    /// 1-based column number, as reported by the raw source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
}

impl Frame {
    /// Creates a frame with no resolved fields.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            file: None,
            line: None,
            column: None,
        }
    }

    /// Sets the function name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Sets the line number.
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Sets the column number.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Returns true if no field of this frame was resolved.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        self.name.is_none() && self.file.is_none() && self.line.is_none() && self.column.is_none()
    }
}
