//! MusicXML score-partwise builder
//!
//! One builder instance per export, single-threaded. The "current part",
//! "current measure" and "current note" cursors are explicit `Option`
//! fields; operations that need a cursor return an [`ExportError`] instead
//! of faulting when called out of sequence.
//!
//! # Examples
//! ```
//! use scorexml::{DurationType, MusicXmlBuilder, Pitch, Step};
//!
//! let mut builder = MusicXmlBuilder::new();
//! builder.add_part("Violin");
//! builder.add_measure().unwrap();
//! let pitch = Pitch::natural(Step::C, 4);
//! builder.add_note(Some(&pitch), 4, DurationType::Quarter, 4).unwrap();
//! let xml = String::from_utf8(builder.to_bytes()).unwrap();
//! assert!(xml.contains("<duration>4</duration>"));
//! ```

use std::io;
use std::path::Path;

use log::{debug, warn};
use num_rational::Ratio;

use super::errors::ExportError;
use super::tree::{NodeId, XmlTree};
use crate::models::attributes::{Clef, KeySignature, TimeSignature};
use crate::models::duration::DurationType;
use crate::models::pitch::Pitch;

/// Placement of a tuplet bracket notation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TupletType {
    /// First note of the tuplet group
    Start,
    /// Last note of the tuplet group
    Stop,
}

impl TupletType {
    /// Get the MusicXML `type` attribute value
    pub fn xml_name(&self) -> &'static str {
        match self {
            TupletType::Start => "start",
            TupletType::Stop => "stop",
        }
    }
}

/// Stateful builder for a MusicXML 3.0 `score-partwise` document
pub struct MusicXmlBuilder {
    tree: XmlTree,
    part_list: NodeId,
    part_count: u32,
    measure_number: u32,
    current_part: Option<NodeId>,
    current_measure: Option<NodeId>,
    current_note: Option<NodeId>,
    current_duration: Option<NodeId>,
}

impl MusicXmlBuilder {
    /// Create the basic document structure without any music: the
    /// `score-partwise` root, the encoding identification, and an empty
    /// `part-list`.
    pub fn new() -> Self {
        let mut tree = XmlTree::with_root("score-partwise");
        let root = tree.root();
        tree.set_attribute(root, "version", "3.0");

        let identification = tree.append(root, "identification");
        let encoding = tree.append(identification, "encoding");
        let software = tree.append(encoding, "software");
        tree.set_text(software, env!("CARGO_PKG_NAME"));
        let encoding_date = tree.append(encoding, "encoding-date");
        tree.set_text(
            encoding_date,
            &chrono::Local::now().format("%Y-%m-%d").to_string(),
        );

        let part_list = tree.append(root, "part-list");

        Self {
            tree,
            part_list,
            part_count: 1,
            measure_number: 1,
            current_part: None,
            current_measure: None,
            current_note: None,
            current_duration: None,
        }
    }

    /// Start a new part: a `score-part` entry with an auto-incremented id
    /// ("P1", "P2", ...) in the `part-list`, and a sibling `part` element
    /// that becomes the current part. The per-part measure counter restarts
    /// at 1. Names are caller-supplied free text; duplicates are allowed.
    pub fn add_part(&mut self, name: &str) -> NodeId {
        let id = format!("P{}", self.part_count);

        let score_part = self.tree.append(self.part_list, "score-part");
        self.tree.set_attribute(score_part, "id", &id);
        let part_name = self.tree.append(score_part, "part-name");
        self.tree.set_text(part_name, name);

        let root = self.tree.root();
        let part = self.tree.append(root, "part");
        self.tree.set_attribute(part, "id", &id);

        self.part_count += 1;
        self.measure_number = 1;
        self.current_part = Some(part);
        self.current_measure = None;
        self.current_note = None;
        self.current_duration = None;

        debug!("started part {} ({})", id, name);
        part
    }

    /// Append a new measure to the current part, numbered by the per-part
    /// counter (post-incremented).
    pub fn add_measure(&mut self) -> Result<NodeId, ExportError> {
        let part = self.current_part.ok_or(ExportError::NoCurrentPart {
            operation: "add_measure",
        })?;
        let measure = self.tree.append(part, "measure");
        self.tree
            .set_attribute(measure, "number", &self.measure_number.to_string());
        self.measure_number += 1;
        self.current_measure = Some(measure);
        self.current_note = None;
        self.current_duration = None;
        Ok(measure)
    }

    /// Append a note (or, with `None` pitch, a rest) to the current measure.
    ///
    /// The duration is `divisions * 4 / note_length` where `note_length` is
    /// the length denominator (4 = quarter, 8 = eighth). The caller picks a
    /// divisions value that keeps this integral (see
    /// [`suggest_divisions`](super::helpers::suggest_divisions)); an uneven
    /// division is truncated toward zero with a warning. Altered pitches get
    /// a trailing `accidental` element ("sharp" or "flat").
    pub fn add_note(
        &mut self,
        pitch: Option<&Pitch>,
        note_length: u32,
        duration_type: DurationType,
        divisions: u32,
    ) -> Result<NodeId, ExportError> {
        let measure = self.current_measure.ok_or(ExportError::NoCurrentMeasure {
            operation: "add_note",
        })?;
        if note_length == 0 || divisions == 0 {
            return Err(ExportError::InvalidDuration {
                note_length,
                divisions,
            });
        }

        let note = self.tree.append(measure, "note");
        match pitch {
            Some(p) => {
                let pitch_el = self.tree.append(note, "pitch");
                self.leaf(pitch_el, "step", p.step.xml_name());
                if p.alter != 0 {
                    self.leaf(pitch_el, "alter", &p.alter.to_string());
                }
                self.leaf(pitch_el, "octave", &p.octave.to_string());
            }
            None => {
                self.tree.append(note, "rest");
            }
        }

        let units = u64::from(divisions) * 4;
        let duration = units / u64::from(note_length);
        if units % u64::from(note_length) != 0 {
            warn!(
                "note length {} does not divide {} duration units evenly; truncated to {}",
                note_length, units, duration
            );
        }
        let duration_el = self.leaf(note, "duration", &duration.to_string());
        self.leaf(note, "type", duration_type.xml_name());

        if let Some(name) = pitch.and_then(|p| p.accidental_name()) {
            self.leaf(note, "accidental", name);
        }

        self.current_note = Some(note);
        self.current_duration = Some(duration_el);
        Ok(note)
    }

    /// Convert the just-created note into a tuplet member.
    ///
    /// Recomputes its duration as the exact rational
    /// `divisions * 4 * normal / (note_length * actual)`, truncating toward
    /// zero (with a warning) when the result is not integral, and appends a
    /// `time-modification` element. With a `tuplet_type`, also appends a
    /// `notations/tuplet` bracket marker.
    ///
    /// Must directly follow the `add_note` call for the note it modifies;
    /// any other ordering returns [`ExportError::NoCurrentNote`].
    pub fn apply_tuplet(
        &mut self,
        actual: u32,
        normal: u32,
        note_length: u32,
        tuplet_type: Option<TupletType>,
        divisions: u32,
    ) -> Result<(), ExportError> {
        let note = self.current_note.ok_or(ExportError::NoCurrentNote)?;
        let duration_el = self.current_duration.ok_or(ExportError::NoCurrentNote)?;
        if actual == 0 || normal == 0 {
            return Err(ExportError::InvalidTupletRatio { actual, normal });
        }
        if note_length == 0 || divisions == 0 {
            return Err(ExportError::InvalidDuration {
                note_length,
                divisions,
            });
        }

        let exact = Ratio::new(
            u64::from(divisions) * 4 * u64::from(normal),
            u64::from(note_length) * u64::from(actual),
        );
        if !exact.is_integer() {
            warn!(
                "tuplet {}:{} duration {} is not integral; truncating",
                actual, normal, exact
            );
        }
        let duration = exact.to_integer();
        self.tree.set_text(duration_el, &duration.to_string());

        let time_modification = self.tree.append(note, "time-modification");
        self.leaf(time_modification, "actual-notes", &actual.to_string());
        self.leaf(time_modification, "normal-notes", &normal.to_string());

        if let Some(tuplet_type) = tuplet_type {
            let notations = self.tree.append(note, "notations");
            let tuplet = self.tree.append(notations, "tuplet");
            self.tree
                .set_attribute(tuplet, "type", tuplet_type.xml_name());
        }
        Ok(())
    }

    /// Append an `attributes` block to the current measure.
    ///
    /// Children are emitted in the fixed schema order divisions, key, time,
    /// clef; each only when its argument is `Some`. Absence is silent
    /// omission, not an error.
    pub fn add_measure_attributes(
        &mut self,
        clef: Option<Clef>,
        time: Option<TimeSignature>,
        key: Option<KeySignature>,
        divisions: Option<u32>,
    ) -> Result<NodeId, ExportError> {
        let measure = self.current_measure.ok_or(ExportError::NoCurrentMeasure {
            operation: "add_measure_attributes",
        })?;
        let attributes = self.tree.append(measure, "attributes");

        if let Some(divisions) = divisions {
            self.leaf(attributes, "divisions", &divisions.to_string());
        }
        if let Some(key) = key {
            let key_el = self.tree.append(attributes, "key");
            self.leaf(key_el, "fifths", &key.fifths.to_string());
            self.leaf(key_el, "mode", key.mode.xml_name());
        }
        if let Some(time) = time {
            let time_el = self.tree.append(attributes, "time");
            self.leaf(time_el, "beats", &time.beats.to_string());
            self.leaf(time_el, "beat-type", &time.beat_type.to_string());
        }
        if let Some(clef) = clef {
            let clef_el = self.tree.append(attributes, "clef");
            self.leaf(clef_el, "sign", clef.sign());
            self.leaf(clef_el, "line", &clef.line().to_string());
        }
        Ok(attributes)
    }

    /// Escape hatch: append an arbitrary leaf element under any existing
    /// node, for schema features not otherwise covered. The caller is
    /// responsible for schema validity.
    pub fn add_custom_element(&mut self, parent: NodeId, name: &str, text: &str) -> NodeId {
        self.leaf(parent, name, text)
    }

    /// Handle to the `score-partwise` root element
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    /// Handle to the part currently being appended to, if any
    pub fn current_part(&self) -> Option<NodeId> {
        self.current_part
    }

    /// Handle to the measure currently being appended to, if any
    pub fn current_measure(&self) -> Option<NodeId> {
        self.current_measure
    }

    /// Handle to the most recently created note, if still current
    pub fn current_note(&self) -> Option<NodeId> {
        self.current_note
    }

    /// Render the tree as a UTF-8 MusicXML byte string with XML declaration
    /// and pretty indentation. Valid from any state; captures whatever has
    /// been built so far.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.tree.serialize()
    }

    /// Write the serialized document to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        std::fs::write(path, self.to_bytes())
    }

    fn leaf(&mut self, parent: NodeId, name: &str, text: &str) -> NodeId {
        let el = self.tree.append(parent, name);
        self.tree.set_text(el, text);
        el
    }
}

impl Default for MusicXmlBuilder {
    fn default() -> Self {
        Self::new()
    }
}
