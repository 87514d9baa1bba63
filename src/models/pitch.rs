//! Pitch representation for MusicXML export
//!
//! A pitch is a diatonic step letter, a chromatic alteration in semitones,
//! and an octave number (4 = the octave starting at middle C, as MusicXML
//! counts them).

use serde::{Deserialize, Serialize};

/// Diatonic step letter
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// Get the MusicXML text for this step
    pub fn xml_name(&self) -> &'static str {
        match self {
            Step::C => "C",
            Step::D => "D",
            Step::E => "E",
            Step::F => "F",
            Step::G => "G",
            Step::A => "A",
            Step::B => "B",
        }
    }
}

/// Pitch with alteration and octave
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pitch {
    /// Diatonic step letter
    pub step: Step,

    /// Chromatic alteration in semitones (positive = sharp, negative = flat)
    pub alter: i8,

    /// Octave number, MusicXML convention (middle C = C4)
    pub octave: i8,
}

impl Pitch {
    /// Create a new pitch
    pub fn new(step: Step, alter: i8, octave: i8) -> Self {
        Self { step, alter, octave }
    }

    /// Create an unaltered pitch
    pub fn natural(step: Step, octave: i8) -> Self {
        Self::new(step, 0, octave)
    }

    /// MusicXML `accidental` text for this pitch, or `None` when unaltered.
    ///
    /// Any positive alteration maps to "sharp" and any negative one to
    /// "flat"; double accidentals are not distinguished.
    pub fn accidental_name(&self) -> Option<&'static str> {
        if self.alter > 0 {
            Some("sharp")
        } else if self.alter < 0 {
            Some("flat")
        } else {
            None
        }
    }
}
