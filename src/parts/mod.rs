//! Instrument part descriptors
//!
//! The score wizard's fixed taxonomy of instrument types, expressed as
//! configuration records rather than per-class method overrides: each
//! [`PartSpec`] carries the staff setup (clef, octave offset, MIDI
//! instrument, transposition) and one generic [`start_part`] function
//! interprets it against the export builder.

pub mod strings;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::export::builder::MusicXmlBuilder;
use crate::export::errors::ExportError;
use crate::models::attributes::{Clef, KeySignature, TimeSignature};

/// Transposition of a transposing instrument relative to concert pitch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Transposition {
    /// Octave offset
    pub octave: i8,
    /// Diatonic step offset, 0..=6
    pub note: u8,
    /// Chromatic alteration in semitones
    pub alter: i8,
}

/// Configuration record describing one instrument part type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PartSpec {
    /// Display title ("Violin")
    pub title: &'static str,
    /// Abbreviated staff name ("Vl.")
    pub short_name: &'static str,
    /// General MIDI instrument name
    pub midi_instrument: &'static str,
    /// Staff clef; `None` leaves the notation default (treble) unstated
    pub clef: Option<Clef>,
    /// Octave offset of the music stub relative to middle C
    pub octave: i8,
    pub transposition: Option<Transposition>,
}

/// A named group of part types, as presented by the score wizard
#[derive(Clone, Debug, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub parts: Vec<PartSpec>,
}

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| vec![strings::category()]);

/// All registered part categories
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Look up a part type by its display title
pub fn find_part(title: &str) -> Option<&'static PartSpec> {
    CATEGORIES
        .iter()
        .flat_map(|category| category.parts.iter())
        .find(|part| part.title == title)
}

/// Open a part described by `spec` on the builder: the part itself, its
/// first measure, and the measure attributes derived from the record.
pub fn start_part(
    builder: &mut MusicXmlBuilder,
    spec: &PartSpec,
    divisions: u32,
    time: Option<TimeSignature>,
    key: Option<KeySignature>,
) -> Result<(), ExportError> {
    builder.add_part(spec.title);
    builder.add_measure()?;
    builder.add_measure_attributes(spec.clef, time, key, Some(divisions))?;
    Ok(())
}
