//! Fixed word tables

/// Unit numerals 0-19 and the bare tens words
pub const NUMERALS: &[(&str, i64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

/// Multiplier for "hundred". It is the only magnitude that does not close a group.
pub const HUNDRED: i64 = 100;

/// Orders of magnitude, including abbreviations. Ten is not one of them.
pub const MAGNITUDES: &[(&str, i64)] = &[
    ("hundred", HUNDRED),
    ("thousand", 1_000),
    ("k", 1_000),
    ("million", 1_000_000),
    ("mil", 1_000_000),
    ("m", 1_000_000),
    ("billion", 1_000_000_000),
    ("bil", 1_000_000_000),
    ("b", 1_000_000_000),
    ("trillion", 1_000_000_000_000),
    ("tril", 1_000_000_000_000),
    ("t", 1_000_000_000_000),
    ("quadrillion", 1_000_000_000_000_000),
    ("quad", 1_000_000_000_000_000),
    ("quintillion", 1_000_000_000_000_000_000),
    ("quin", 1_000_000_000_000_000_000),
];

pub fn numeral(word: &str) -> Option<i64> {
    NUMERALS.iter().find(|(name, _)| *name == word).map(|(_, v)| *v)
}

pub fn magnitude(word: &str) -> Option<i64> {
    MAGNITUDES.iter().find(|(name, _)| *name == word).map(|(_, v)| *v)
}
