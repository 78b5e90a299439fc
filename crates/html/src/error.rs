use markdown::message::{Message, Place};
use thiserror::Error;

/// Errors surfaced while rendering Markdown to HTML.
///
/// The annotation layer itself is total over arbitrary strings; only
/// the underlying parse can fail.
#[derive(Debug, Error)]
pub enum RenderError {
    /// markdown-rs rejected the input.
    #[error("markdown parse error at {line}:{column}: {message}")]
    Parse {
        /// Parser error message.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },
}

impl RenderError {
    pub(crate) fn from_message(message: Message) -> Self {
        let (line, column) = match message.place.as_deref() {
            Some(Place::Point(point)) => (point.line, point.column),
            Some(Place::Position(position)) => (position.start.line, position.start.column),
            None => (1, 1),
        };
        Self::Parse {
            message: message.reason,
            line,
            column,
        }
    }
}
