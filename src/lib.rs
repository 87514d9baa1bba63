//! MusicXML score-partwise export
//!
//! Builds a MusicXML 3.0 `score-partwise` document as an in-memory element
//! tree and serializes it to UTF-8 bytes. The builder is driven by an
//! external score traversal: `add_part`, then per measure `add_measure`
//! (plus optional `add_measure_attributes`), then per note `add_note`
//! (plus optional `apply_tuplet`), finally `to_bytes`.
//!
//! The `parts` module carries the instrument part descriptors used to set
//! up a staff (clef, octave, MIDI instrument) from a fixed registry.

pub mod export;
pub mod models;
pub mod parts;

// Re-export the types most callers need
pub use export::builder::{MusicXmlBuilder, TupletType};
pub use export::errors::ExportError;
pub use models::attributes::{Clef, KeySignature, Mode, TimeSignature};
pub use models::duration::DurationType;
pub use models::pitch::{Pitch, Step};
