use crate::constants::ALPHABET_LEN;
use crate::structs::{Caesar, Direction};
use crate::traits::{Decryptor, Encryptor};
use crate::utils::{inverse_shift, normalize_shift};

/// Shifts every ASCII letter forward by `shift` positions, keeping case.
///
/// `shift` is taken modulo 26. Everything that is not `A-Z` or `a-z` is
/// copied through at the same position.
pub fn caesar_cipher(text: &str, shift: u8) -> String {
    let shift = shift % ALPHABET_LEN;

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                let new_c = ((c as u8 - base + shift) % ALPHABET_LEN) + base;
                new_c as char
            } else {
                c
            }
        })
        .collect()
}

/// Applies the cipher in the given direction for any integer shift.
///
/// Decrypting is encrypting with the additive inverse of the normalized
/// shift, so `transform(&transform(s, k, true), k, false) == s` for every
/// `k`, including `i64::MIN`.
pub fn transform(text: &str, shift: i64, encrypt: bool) -> String {
    let shift = normalize_shift(shift);
    let effective = match Direction::from(encrypt) {
        Direction::Encrypt => shift,
        Direction::Decrypt => inverse_shift(shift),
    };

    caesar_cipher(text, effective)
}

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Caesar { shift }
    }

    pub fn apply(&self, message: &str, direction: Direction) -> String {
        transform(message, self.shift, direction == Direction::Encrypt)
    }
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> String {
        self.apply(message, Direction::Encrypt)
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> String {
        self.apply(message, Direction::Decrypt)
    }
}
