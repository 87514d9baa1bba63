// Duration type labels for MusicXML export

use serde::{Deserialize, Serialize};

/// MusicXML note type (the printed note value, independent of `duration`)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationType {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
    ThirtySecond,
    SixtyFourth,
    HundredTwentyEighth,
}

impl DurationType {
    /// Get the MusicXML `type` element text
    pub fn xml_name(&self) -> &'static str {
        match self {
            DurationType::Whole => "whole",
            DurationType::Half => "half",
            DurationType::Quarter => "quarter",
            DurationType::Eighth => "eighth",
            DurationType::Sixteenth => "16th",
            DurationType::ThirtySecond => "32nd",
            DurationType::SixtyFourth => "64th",
            DurationType::HundredTwentyEighth => "128th",
        }
    }

    /// Map a note length denominator (4 = quarter, 8 = eighth, ...) to its
    /// printed type. Returns `None` for denominators that are not a power
    /// of two in 1..=128.
    pub fn from_note_length(note_length: u32) -> Option<Self> {
        match note_length {
            1 => Some(DurationType::Whole),
            2 => Some(DurationType::Half),
            4 => Some(DurationType::Quarter),
            8 => Some(DurationType::Eighth),
            16 => Some(DurationType::Sixteenth),
            32 => Some(DurationType::ThirtySecond),
            64 => Some(DurationType::SixtyFourth),
            128 => Some(DurationType::HundredTwentyEighth),
            _ => None,
        }
    }
}
