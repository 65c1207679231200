//! Static bidirectional Morse table for the 26 Latin letters and 10 digits

use crate::types::Element;

/// A character's dot/dash sequence
pub type Code = &'static [Element];

const DOT: Element = Element::Dot;
const DASH: Element = Element::Dash;

/// International Morse, lowercase letters then digits
static TABLE: &[(char, Code)] = &[
    ('a', &[DOT, DASH]),
    ('b', &[DASH, DOT, DOT, DOT]),
    ('c', &[DASH, DOT, DASH, DOT]),
    ('d', &[DASH, DOT, DOT]),
    ('e', &[DOT]),
    ('f', &[DOT, DOT, DASH, DOT]),
    ('g', &[DASH, DASH, DOT]),
    ('h', &[DOT, DOT, DOT, DOT]),
    ('i', &[DOT, DOT]),
    ('j', &[DOT, DASH, DASH, DASH]),
    ('k', &[DASH, DOT, DASH]),
    ('l', &[DOT, DASH, DOT, DOT]),
    ('m', &[DASH, DASH]),
    ('n', &[DASH, DOT]),
    ('o', &[DASH, DASH, DASH]),
    ('p', &[DOT, DASH, DASH, DOT]),
    ('q', &[DASH, DASH, DOT, DASH]),
    ('r', &[DOT, DASH, DOT]),
    ('s', &[DOT, DOT, DOT]),
    ('t', &[DASH]),
    ('u', &[DOT, DOT, DASH]),
    ('v', &[DOT, DOT, DOT, DASH]),
    ('w', &[DOT, DASH, DASH]),
    ('x', &[DASH, DOT, DOT, DASH]),
    ('y', &[DASH, DOT, DASH, DASH]),
    ('z', &[DASH, DASH, DOT, DOT]),
    ('0', &[DASH, DASH, DASH, DASH, DASH]),
    ('1', &[DOT, DASH, DASH, DASH, DASH]),
    ('2', &[DOT, DOT, DASH, DASH, DASH]),
    ('3', &[DOT, DOT, DOT, DASH, DASH]),
    ('4', &[DOT, DOT, DOT, DOT, DASH]),
    ('5', &[DOT, DOT, DOT, DOT, DOT]),
    ('6', &[DASH, DOT, DOT, DOT, DOT]),
    ('7', &[DASH, DASH, DOT, DOT, DOT]),
    ('8', &[DASH, DASH, DASH, DOT, DOT]),
    ('9', &[DASH, DASH, DASH, DASH, DOT]),
];

/// Look up the code for a character
///
/// ASCII uppercase folds to lowercase; anything outside the table is `None`.
pub fn encode(ch: char) -> Option<Code> {
    let ch = ch.to_ascii_lowercase();
    TABLE
        .iter()
        .find(|(entry, _)| *entry == ch)
        .map(|(_, code)| *code)
}

/// Look up the character for a dot/dash sequence
///
/// Unrecognized or empty sequences are `None`, never an error.
pub fn decode(code: &[Element]) -> Option<char> {
    TABLE
        .iter()
        .find(|(_, entry)| *entry == code)
        .map(|(ch, _)| *ch)
}

/// Characters the table covers, in table order
pub fn supported() -> impl Iterator<Item = char> {
    TABLE.iter().map(|(ch, _)| *ch)
}
