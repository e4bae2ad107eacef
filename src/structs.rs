use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl From<bool> for Direction {
    fn from(encrypt: bool) -> Self {
        if encrypt {
            Direction::Encrypt
        } else {
            Direction::Decrypt
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "encrypt"),
            Direction::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// A Caesar cipher keyed by a raw shift. Any integer is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    pub shift: i64,
}
