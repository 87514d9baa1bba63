//! String instrument part types

use crate::models::attributes::Clef;

use super::{Category, PartSpec};

pub const VIOLIN: PartSpec = PartSpec {
    title: "Violin",
    short_name: "Vl.",
    midi_instrument: "violin",
    clef: None,
    octave: 1,
    transposition: None,
};

pub const VIOLA: PartSpec = PartSpec {
    title: "Viola",
    short_name: "Vla.",
    midi_instrument: "viola",
    clef: Some(Clef::Alto),
    octave: 0,
    transposition: None,
};

pub const CELLO: PartSpec = PartSpec {
    title: "Cello",
    short_name: "Cl.",
    midi_instrument: "cello",
    clef: Some(Clef::Bass),
    octave: -1,
    transposition: None,
};

pub const CONTRABASS: PartSpec = PartSpec {
    title: "Contrabass",
    short_name: "Cb.",
    midi_instrument: "contrabass",
    clef: Some(Clef::Bass),
    octave: -1,
    transposition: None,
};

/// Shares the cello's staff setup; only the naming differs
pub const BASSO_CONTINUO: PartSpec = PartSpec {
    title: "Basso Continuo",
    short_name: "B.c.",
    midi_instrument: "cello",
    clef: Some(Clef::Bass),
    octave: -1,
    transposition: None,
};

/// The "Strings" category in registration order
pub fn category() -> Category {
    Category {
        name: "Strings",
        parts: vec![VIOLIN, VIOLA, CELLO, CONTRABASS, BASSO_CONTINUO],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let titles: Vec<&str> = category().parts.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec!["Violin", "Viola", "Cello", "Contrabass", "Basso Continuo"]
        );
    }

    #[test]
    fn test_low_strings_use_bass_clef() {
        for part in [CELLO, CONTRABASS, BASSO_CONTINUO] {
            assert_eq!(part.clef, Some(Clef::Bass));
            assert_eq!(part.octave, -1);
        }
    }

    #[test]
    fn test_basso_continuo_inherits_cello_staff() {
        assert_eq!(BASSO_CONTINUO.midi_instrument, CELLO.midi_instrument);
        assert_eq!(BASSO_CONTINUO.clef, CELLO.clef);
        assert_eq!(BASSO_CONTINUO.octave, CELLO.octave);
    }
}
