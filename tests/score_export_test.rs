// End-to-end MusicXML export: build a small two-part score and verify the
// serialized document structurally with roxmltree.

use scorexml::export::helpers::suggest_divisions;
use scorexml::parts::{find_part, start_part};
use scorexml::{
    Clef, DurationType, KeySignature, Mode, MusicXmlBuilder, Pitch, Step, TimeSignature,
    TupletType,
};

/// Collect the element children names of a node, skipping text nodes
fn child_names<'a>(node: roxmltree::Node<'a, 'a>) -> Vec<&'a str> {
    node.children()
        .filter(|n| n.is_element())
        .map(|n| n.tag_name().name())
        .collect()
}

fn find_child<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

/// Build the score used by most assertions: a violin part with two measures
/// (one containing an eighth triplet) and a cello part with one measure.
fn build_two_part_score() -> MusicXmlBuilder {
    let divisions = suggest_divisions(&[4, 8], &[(3, 2)]);
    assert_eq!(divisions, 6);

    let mut builder = MusicXmlBuilder::new();

    let violin = find_part("Violin").unwrap();
    start_part(
        &mut builder,
        violin,
        divisions,
        Some(TimeSignature::new(4, 4)),
        Some(KeySignature::new(2, Mode::Major)),
    )
    .unwrap();

    // Measure 1: two quarters, then an eighth triplet
    builder
        .add_note(
            Some(&Pitch::natural(Step::D, 5)),
            4,
            DurationType::Quarter,
            divisions,
        )
        .unwrap();
    builder
        .add_note(
            Some(&Pitch::new(Step::F, 1, 5)),
            4,
            DurationType::Quarter,
            divisions,
        )
        .unwrap();
    let triplet = [
        (Step::G, Some(TupletType::Start)),
        (Step::A, None),
        (Step::B, Some(TupletType::Stop)),
    ];
    for (step, bracket) in triplet {
        builder
            .add_note(
                Some(&Pitch::natural(step, 5)),
                8,
                DurationType::Eighth,
                divisions,
            )
            .unwrap();
        builder
            .apply_tuplet(3, 2, 8, bracket, divisions)
            .unwrap();
    }

    // Measure 2: a rest and a flat note
    builder.add_measure().unwrap();
    builder
        .add_note(None, 2, DurationType::Half, divisions)
        .unwrap();
    builder
        .add_note(
            Some(&Pitch::new(Step::B, -1, 4)),
            2,
            DurationType::Half,
            divisions,
        )
        .unwrap();

    let cello = find_part("Cello").unwrap();
    start_part(
        &mut builder,
        cello,
        divisions,
        Some(TimeSignature::new(4, 4)),
        None,
    )
    .unwrap();
    builder
        .add_note(
            Some(&Pitch::natural(Step::C, 3)),
            1,
            DurationType::Whole,
            divisions,
        )
        .unwrap();

    builder
}

#[test]
fn test_document_root_and_part_list() {
    let builder = build_two_part_score();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "score-partwise");
    assert_eq!(root.attribute("version"), Some("3.0"));

    let part_list = find_child(root, "part-list").unwrap();
    let score_parts: Vec<_> = part_list
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "score-part")
        .collect();
    assert_eq!(score_parts.len(), 2);
    assert_eq!(score_parts[0].attribute("id"), Some("P1"));
    assert_eq!(score_parts[1].attribute("id"), Some("P2"));

    let names: Vec<&str> = score_parts
        .iter()
        .map(|sp| find_child(*sp, "part-name").unwrap().text().unwrap())
        .collect();
    assert_eq!(names, vec!["Violin", "Cello"]);
}

#[test]
fn test_identification_names_software() {
    let builder = MusicXmlBuilder::new();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let software = doc
        .descendants()
        .find(|n| n.tag_name().name() == "software")
        .unwrap();
    assert_eq!(software.text(), Some("scorexml"));
    assert!(doc
        .descendants()
        .any(|n| n.tag_name().name() == "encoding-date"));
}

#[test]
fn test_measure_numbers_restart_per_part() {
    let builder = build_two_part_score();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let parts: Vec<_> = doc
        .root_element()
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "part")
        .collect();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].attribute("id"), Some("P1"));
    assert_eq!(parts[1].attribute("id"), Some("P2"));

    fn numbers<'a>(part: roxmltree::Node<'a, 'a>) -> Vec<&'a str> {
        part.children()
            .filter(|n| n.is_element() && n.tag_name().name() == "measure")
            .map(|m| m.attribute("number").unwrap())
            .collect()
    }
    assert_eq!(numbers(parts[0]), vec!["1", "2"]);
    assert_eq!(numbers(parts[1]), vec!["1"]);
}

#[test]
fn test_attributes_block_order_and_content() {
    let builder = build_two_part_score();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let attributes = doc
        .descendants()
        .find(|n| n.tag_name().name() == "attributes")
        .unwrap();
    assert_eq!(child_names(attributes), vec!["divisions", "key", "time", "clef"]);

    assert_eq!(find_child(attributes, "divisions").unwrap().text(), Some("6"));
    let key = find_child(attributes, "key").unwrap();
    assert_eq!(find_child(key, "fifths").unwrap().text(), Some("2"));
    assert_eq!(find_child(key, "mode").unwrap().text(), Some("major"));
    let time = find_child(attributes, "time").unwrap();
    assert_eq!(find_child(time, "beats").unwrap().text(), Some("4"));
    assert_eq!(find_child(time, "beat-type").unwrap().text(), Some("4"));
}

#[test]
fn test_cello_part_gets_bass_clef() {
    let builder = build_two_part_score();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let cello_part = doc
        .root_element()
        .children()
        .find(|n| n.is_element() && n.attribute("id") == Some("P2"))
        .unwrap();
    let clef = cello_part
        .descendants()
        .find(|n| n.tag_name().name() == "clef")
        .unwrap();
    assert_eq!(find_child(clef, "sign").unwrap().text(), Some("F"));
    assert_eq!(find_child(clef, "line").unwrap().text(), Some("4"));
}

#[test]
fn test_note_child_order_with_accidental() {
    let builder = build_two_part_score();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    // Second note of measure 1 is the F sharp
    let sharp_note = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "note")
        .nth(1)
        .unwrap();
    assert_eq!(
        child_names(sharp_note),
        vec!["pitch", "duration", "type", "accidental"]
    );
    assert_eq!(
        find_child(sharp_note, "accidental").unwrap().text(),
        Some("sharp")
    );

    let pitch = find_child(sharp_note, "pitch").unwrap();
    assert_eq!(child_names(pitch), vec!["step", "alter", "octave"]);
}

#[test]
fn test_triplet_notes_carry_time_modification() {
    let builder = build_two_part_score();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let triplet_notes: Vec<_> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "time-modification")
        .collect();
    assert_eq!(triplet_notes.len(), 3);
    for tm in &triplet_notes {
        assert_eq!(find_child(*tm, "actual-notes").unwrap().text(), Some("3"));
        assert_eq!(find_child(*tm, "normal-notes").unwrap().text(), Some("2"));
    }

    // Triplet eighths at divisions=6 last exactly 2 units
    let durations: Vec<&str> = triplet_notes
        .iter()
        .map(|tm| find_child(tm.parent().unwrap(), "duration").unwrap().text().unwrap())
        .collect();
    assert_eq!(durations, vec!["2", "2", "2"]);

    // Brackets only on the first and last member
    let brackets: Vec<&str> = doc
        .descendants()
        .filter(|n| n.tag_name().name() == "tuplet")
        .map(|n| n.attribute("type").unwrap())
        .collect();
    assert_eq!(brackets, vec!["start", "stop"]);
}

#[test]
fn test_rest_note_has_no_pitch() {
    let builder = build_two_part_score();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let rest = doc
        .descendants()
        .find(|n| n.tag_name().name() == "rest")
        .unwrap();
    let note = rest.parent().unwrap();
    assert_eq!(child_names(note), vec!["rest", "duration", "type"]);
    // Half note at divisions=6 lasts 12 units
    assert_eq!(find_child(note, "duration").unwrap().text(), Some("12"));
}

#[test]
fn test_empty_document_is_well_formed() {
    let builder = MusicXmlBuilder::new();
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let root = doc.root_element();
    let part_list = find_child(root, "part-list").unwrap();
    assert_eq!(child_names(part_list).len(), 0);
    assert!(!root
        .children()
        .any(|n| n.is_element() && n.tag_name().name() == "part"));
}

#[test]
fn test_mid_construction_serialization_captures_state() {
    // Serializing before the score is finished is allowed and reflects
    // exactly what has been built so far
    let mut builder = MusicXmlBuilder::new();
    builder.add_part("Violin");
    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();

    let part = doc
        .root_element()
        .children()
        .find(|n| n.is_element() && n.tag_name().name() == "part")
        .unwrap();
    assert!(!part.children().any(|n| n.is_element()));
}

#[test]
fn test_custom_element_lands_under_chosen_parent() {
    let mut builder = MusicXmlBuilder::new();
    builder.add_part("Violin");
    builder.add_measure().unwrap();
    let note = builder
        .add_note(
            Some(&Pitch::natural(Step::C, 4)),
            4,
            DurationType::Quarter,
            4,
        )
        .unwrap();
    builder.add_custom_element(note, "staff", "1");

    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let staff = doc
        .descendants()
        .find(|n| n.tag_name().name() == "staff")
        .unwrap();
    assert_eq!(staff.parent().unwrap().tag_name().name(), "note");
    assert_eq!(staff.text(), Some("1"));
}

#[test]
fn test_save_writes_parseable_file() {
    let builder = build_two_part_score();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score.musicxml");
    builder.save(&path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    roxmltree::Document::parse(&contents).unwrap();
}

#[test]
fn test_viola_descriptor_produces_alto_clef() {
    let mut builder = MusicXmlBuilder::new();
    let viola = find_part("Viola").unwrap();
    assert_eq!(viola.clef, Some(Clef::Alto));
    start_part(&mut builder, viola, 2, None, None).unwrap();

    let xml = String::from_utf8(builder.to_bytes()).unwrap();
    let doc = roxmltree::Document::parse(&xml).unwrap();
    let clef = doc
        .descendants()
        .find(|n| n.tag_name().name() == "clef")
        .unwrap();
    assert_eq!(find_child(clef, "sign").unwrap().text(), Some("C"));
    assert_eq!(find_child(clef, "line").unwrap().text(), Some("3"));
}
