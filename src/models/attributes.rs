//! Measure attribute types: clef, key signature, time signature
//!
//! These correspond to the children of the MusicXML `attributes` element.
//! Each is optional on a measure; the builder emits only what is present.

use serde::{Deserialize, Serialize};

/// Clef, reduced to the four staff clefs the part registry uses
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clef {
    Treble,
    Alto,
    Tenor,
    Bass,
}

impl Clef {
    /// MusicXML clef `sign` text
    pub fn sign(&self) -> &'static str {
        match self {
            Clef::Treble => "G",
            Clef::Alto | Clef::Tenor => "C",
            Clef::Bass => "F",
        }
    }

    /// Staff line the clef sign sits on
    pub fn line(&self) -> u8 {
        match self {
            Clef::Treble => 2,
            Clef::Alto => 3,
            Clef::Tenor => 4,
            Clef::Bass => 4,
        }
    }
}

/// Key mode
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Major,
    Minor,
}

impl Mode {
    /// MusicXML `mode` element text
    pub fn xml_name(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

/// Key signature as a circle-of-fifths count plus mode
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeySignature {
    /// Sharps (positive) or flats (negative), -7..=7
    pub fifths: i8,
    pub mode: Mode,
}

impl KeySignature {
    pub fn new(fifths: i8, mode: Mode) -> Self {
        Self { fifths, mode }
    }
}

/// Time signature (beats over beat type)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeSignature {
    pub beats: u32,
    pub beat_type: u32,
}

impl TimeSignature {
    pub fn new(beats: u32, beat_type: u32) -> Self {
        Self { beats, beat_type }
    }
}
