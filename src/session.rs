//! Interactive session state.
//!
//! A session holds what an interactive front end shows: the message being
//! edited, the current shift, and the last result. Input-boundary policy
//! lives here and not in the cipher: a negative shift is refused and a blank
//! message cannot be transformed.

use tracing::{debug, warn};

use crate::algos::caesar::transform;
use crate::error::{Error, Result};
use crate::structs::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A line of message text.
    Input(String),
    Encrypt,
    Decrypt,
    /// Raw shift entry, parsed by [`Session::set_shift_from_str`].
    Shift(String),
    Clear,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Command::Input(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest.trim(), ""),
        };

        match name {
            "e" | "encrypt" => Ok(Command::Encrypt),
            "d" | "decrypt" => Ok(Command::Decrypt),
            "s" | "shift" => Ok(Command::Shift(arg.to_string())),
            "c" | "clear" => Ok(Command::Clear),
            "show" => Ok(Command::Show),
            "h" | "help" => Ok(Command::Help),
            "q" | "quit" => Ok(Command::Quit),
            other => Err(Error::UnknownCommand(format!(":{other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    input: String,
    shift: i64,
    output: String,
    default_shift: i64,
}

impl Session {
    pub fn new(default_shift: i64) -> Self {
        Self {
            input: String::new(),
            shift: default_shift,
            output: String::new(),
            default_shift,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Adds a line to the message, separated from earlier lines by `\n`.
    pub fn append_input(&mut self, line: &str) {
        if !self.input.is_empty() {
            self.input.push('\n');
        }
        self.input.push_str(line);
    }

    /// Updates the shift from user text.
    ///
    /// Blank text means 0. Unparsable text leaves the shift as it was.
    /// Negative values are stored; they are refused when an action runs.
    pub fn set_shift_from_str(&mut self, raw: &str) -> Result<i64> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.shift = 0;
            return Ok(self.shift);
        }

        match raw.parse::<i64>() {
            Ok(shift) => {
                self.shift = shift;
                Ok(shift)
            }
            Err(_) => {
                warn!("Ignoring non-numeric shift entry {:?}", raw);
                Err(Error::InvalidShift(raw.to_string()))
            }
        }
    }

    /// Whether encrypt/decrypt would currently be accepted.
    pub fn can_transform(&self) -> bool {
        self.shift >= 0 && !self.input.trim().is_empty()
    }

    pub fn encrypt(&mut self) -> Result<&str> {
        self.run(Direction::Encrypt)
    }

    pub fn decrypt(&mut self) -> Result<&str> {
        self.run(Direction::Decrypt)
    }

    pub fn run(&mut self, direction: Direction) -> Result<&str> {
        if self.shift < 0 {
            warn!("Refusing to {} with negative shift {}", direction, self.shift);
            return Err(Error::NegativeShift(self.shift));
        }
        if self.input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        debug!(
            "Running {} on {} chars with shift {}",
            direction,
            self.input.chars().count(),
            self.shift
        );
        self.output = transform(&self.input, self.shift, direction == Direction::Encrypt);
        Ok(&self.output)
    }

    /// Empties the message and result and restores the default shift.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.shift = self.default_shift;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = Session::new(3);
        assert_eq!(session.input(), "");
        assert_eq!(session.output(), "");
        assert_eq!(session.shift(), 3);
        assert!(!session.can_transform());
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let mut session = Session::new(3);
        session.set_input("Hello, World!");
        assert_eq!(session.encrypt().unwrap(), "Khoor, Zruog!");

        session.set_input("Khoor, Zruog!");
        assert_eq!(session.decrypt().unwrap(), "Hello, World!");
        assert_eq!(session.output(), "Hello, World!");
    }

    #[test]
    fn test_negative_shift_refused() {
        let mut session = Session::new(3);
        session.set_input("abc");
        assert_eq!(session.set_shift_from_str("-2").unwrap(), -2);
        assert!(!session.can_transform());

        let err = session.encrypt().unwrap_err();
        assert!(matches!(err, Error::NegativeShift(-2)));
        assert!(session.decrypt().is_err());
        assert_eq!(session.output(), "");
    }

    #[test]
    fn test_blank_input_refused() {
        let mut session = Session::new(3);
        session.set_input("   \n\t");
        assert!(matches!(session.encrypt(), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_failed_action_keeps_previous_output() {
        let mut session = Session::new(1);
        session.set_input("abc");
        session.encrypt().unwrap();
        session.set_shift_from_str("-1").unwrap();
        assert!(session.encrypt().is_err());
        assert_eq!(session.output(), "bcd");
    }

    #[test]
    fn test_shift_entry_rules() {
        let mut session = Session::new(3);
        assert_eq!(session.set_shift_from_str(" 30 ").unwrap(), 30);
        assert_eq!(session.set_shift_from_str("").unwrap(), 0);
        assert_eq!(session.shift(), 0);

        session.set_shift_from_str("5").unwrap();
        let err = session.set_shift_from_str("five").unwrap_err();
        assert!(matches!(err, Error::InvalidShift(ref s) if s == "five"));
        assert_eq!(session.shift(), 5);
    }

    #[test]
    fn test_large_shift_is_periodic() {
        let mut session = Session::new(29);
        session.set_input("abc");
        assert_eq!(session.encrypt().unwrap(), "def");
    }

    #[test]
    fn test_clear_restores_default() {
        let mut session = Session::new(7);
        session.set_input("abc");
        session.set_shift_from_str("12").unwrap();
        session.encrypt().unwrap();

        session.clear();
        assert_eq!(session.input(), "");
        assert_eq!(session.output(), "");
        assert_eq!(session.shift(), 7);
    }

    #[test]
    fn test_append_input_joins_lines() {
        let mut session = Session::new(1);
        session.append_input("ab");
        session.append_input("");
        session.append_input("yz");
        assert_eq!(session.input(), "ab\n\nyz");
        assert_eq!(session.encrypt().unwrap(), "bc\n\nza");
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(":e").unwrap(), Command::Encrypt);
        assert_eq!(Command::parse(":encrypt\n").unwrap(), Command::Encrypt);
        assert_eq!(Command::parse(":d").unwrap(), Command::Decrypt);
        assert_eq!(
            Command::parse(":shift  13 ").unwrap(),
            Command::Shift("13".to_string())
        );
        assert_eq!(Command::parse(":s").unwrap(), Command::Shift(String::new()));
        assert_eq!(Command::parse(":clear").unwrap(), Command::Clear);
        assert_eq!(Command::parse(":show").unwrap(), Command::Show);
        assert_eq!(Command::parse(":help").unwrap(), Command::Help);
        assert_eq!(Command::parse(":q").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_input_lines() {
        assert_eq!(
            Command::parse("Attack at dawn\r\n").unwrap(),
            Command::Input("Attack at dawn".to_string())
        );
        assert_eq!(Command::parse("").unwrap(), Command::Input(String::new()));
        assert_eq!(
            Command::parse(" :not a command").unwrap(),
            Command::Input(" :not a command".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse(":rot13").unwrap_err();
        assert!(matches!(err, Error::UnknownCommand(ref c) if c == ":rot13"));
    }
}
