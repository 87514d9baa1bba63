//! Error types for MusicXML export
//!
//! All errors are builder-contract violations: either an operation was
//! called out of sequence (missing cursor) or a duration argument would
//! divide by zero. None are recoverable at runtime; they abort the export
//! with a diagnostic naming the offending call.

use thiserror::Error;

/// Export builder error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// Operation needs a current part; `add_part()` was never called
    #[error("no current part: {operation}() requires a preceding add_part()")]
    NoCurrentPart { operation: &'static str },

    /// Operation needs a current measure; `add_measure()` was never called
    /// for the current part
    #[error("no current measure: {operation}() requires a preceding add_measure()")]
    NoCurrentMeasure { operation: &'static str },

    /// `apply_tuplet()` was not called directly after `add_note()`
    #[error("no current note: apply_tuplet() must directly follow add_note()")]
    NoCurrentNote,

    /// Zero note length or zero divisions would fault the duration arithmetic
    #[error("invalid duration: note length {note_length} with {divisions} divisions")]
    InvalidDuration { note_length: u32, divisions: u32 },

    /// Tuplet ratio with a zero member
    #[error("invalid tuplet ratio {actual}:{normal}")]
    InvalidTupletRatio { actual: u32, normal: u32 },
}
