//! Permitted plate characters.
//!
//! Only twelve Cyrillic letters have Latin look-alikes and may appear on a
//! plate. Digit zero and the letter `О` are indistinguishable on a plate and
//! are resolved later against the canonical formats.

/// Letters permitted by GOST R 50577-2018, in alphabetical order.
pub const ALLOWED_LETTERS: [char; 12] = [
    'А', 'В', 'Е', 'К', 'М', 'Н', 'О', 'Р', 'С', 'Т', 'У', 'Х',
];

/// Decimal digits.
pub const ALLOWED_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Union of [`ALLOWED_LETTERS`] and [`ALLOWED_DIGITS`].
pub const ALLOWED_SYMBOLS: [char; 22] = {
    let mut symbols = ['0'; 22];
    let mut i = 0;
    while i < ALLOWED_LETTERS.len() {
        symbols[i] = ALLOWED_LETTERS[i];
        i += 1;
    }
    let mut j = 0;
    while j < ALLOWED_DIGITS.len() {
        symbols[ALLOWED_LETTERS.len() + j] = ALLOWED_DIGITS[j];
        j += 1;
    }
    symbols
};

/// The Cyrillic letter that looks like digit zero.
pub const AMBIGUOUS_LETTER: char = 'О';

/// The digit that looks like [`AMBIGUOUS_LETTER`].
pub const AMBIGUOUS_DIGIT: char = '0';

/// Latin (and one Cyrillic) characters rewritten to their plate equivalents
/// after upper-casing.
pub const LOOKALIKES: [(char, char); 14] = [
    ('A', 'А'),
    ('B', 'В'),
    ('C', 'С'),
    ('E', 'Е'),
    ('H', 'Н'),
    ('I', '1'),
    ('K', 'К'),
    ('M', 'М'),
    ('O', 'О'),
    ('P', 'Р'),
    ('T', 'Т'),
    ('X', 'Х'),
    ('Y', 'У'),
    ('З', '3'),
];

pub fn is_allowed_letter(ch: char) -> bool {
    ALLOWED_LETTERS.contains(&ch)
}

pub fn is_allowed_digit(ch: char) -> bool {
    ALLOWED_DIGITS.contains(&ch)
}

pub fn is_allowed_symbol(ch: char) -> bool {
    is_allowed_letter(ch) || is_allowed_digit(ch)
}

/// True for `0` and `О`.
pub fn is_ambiguous(ch: char) -> bool {
    ch == AMBIGUOUS_DIGIT || ch == AMBIGUOUS_LETTER
}

/// Plate equivalent of an upper-cased character, or the character itself.
pub fn lookalike(ch: char) -> char {
    LOOKALIKES
        .iter()
        .find(|(from, _)| *from == ch)
        .map_or(ch, |(_, to)| *to)
}
