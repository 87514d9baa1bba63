//! Divisions arithmetic
//!
//! MusicXML expresses durations in integer "divisions" per quarter note.
//! The builder trusts the caller to pick a divisions value large enough to
//! keep every duration integral; `suggest_divisions` computes the smallest
//! such value for a known set of note lengths and tuplet ratios.

/// Calculate greatest common divisor
pub fn gcd(a: u64, b: u64) -> u64 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Calculate least common multiple
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)) * b
}

/// Smallest divisions-per-quarter value that keeps every duration integral.
///
/// A plain note of length `l` lasts `divisions * 4 / l` units; a note of
/// length `l` inside an `a:n` tuplet lasts `divisions * 4 * n / (l * a)`.
/// Zero lengths and zero ratio members are skipped; the builder rejects
/// them separately.
pub fn suggest_divisions(note_lengths: &[u32], tuplet_ratios: &[(u32, u32)]) -> u32 {
    let mut divisions: u64 = 1;
    for &length in note_lengths {
        if length == 0 {
            continue;
        }
        let length = u64::from(length);
        divisions = lcm(divisions, length / gcd(length, 4));
    }
    for &(actual, normal) in tuplet_ratios {
        if actual == 0 || normal == 0 {
            continue;
        }
        // Any of the given note lengths may appear under this ratio
        for &length in note_lengths {
            if length == 0 {
                continue;
            }
            let denominator = u64::from(length) * u64::from(actual);
            divisions = lcm(divisions, denominator / gcd(denominator, 4 * u64::from(normal)));
        }
    }
    divisions as u32
}
