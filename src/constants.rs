pub const ALPHABET_LEN: u8 = 26;

/// Shift used when nothing else is configured, and restored by `:clear`.
pub const DEFAULT_SHIFT: i64 = 3;

pub const SHIFT_ENV_VAR: &str = "CAESAR_DEFAULT_SHIFT";
