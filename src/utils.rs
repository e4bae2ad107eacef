use crate::constants::ALPHABET_LEN;

/// Reduces any shift to the range `[0, 25]`.
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Additive inverse of a normalized shift.
pub fn inverse_shift(shift: u8) -> u8 {
    (ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
}
