use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::error::Result;
use crate::session::{Command, Session};
use crate::structs::Direction;

pub const HELP: &str = "\
Type message lines, then a command:
  :e, :encrypt     encrypt the message
  :d, :decrypt     decrypt the message
  :s, :shift N     set the shift (blank means 0)
  :c, :clear       clear the message and reset the shift
  :show            show message, shift and last result
  :h, :help        show this help
  :q, :quit        leave";

/// Reads lines from `reader` until `:quit` or end of input.
///
/// Rejected actions are written to `writer` as `Error: ...` and the loop
/// carries on; only I/O failures end it early.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut reader: R, mut writer: W) -> Result<()> {
    writeln!(writer, "Caesar cipher (shift {}). Type :help for commands.", session.shift())?;

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(writer, "Error: {}", e)?;
                continue;
            }
        };

        match command {
            Command::Input(text) => session.append_input(&text),
            Command::Encrypt => report(session, Direction::Encrypt, &mut writer)?,
            Command::Decrypt => report(session, Direction::Decrypt, &mut writer)?,
            Command::Shift(raw) => match session.set_shift_from_str(&raw) {
                Ok(shift) => writeln!(writer, "Shift set to {}", shift)?,
                Err(e) => writeln!(writer, "Error: {}", e)?,
            },
            Command::Clear => {
                session.clear();
                writeln!(writer, "Cleared. Shift reset to {}", session.shift())?;
            }
            Command::Show => {
                writeln!(writer, "Message: {}", session.input())?;
                writeln!(writer, "Shift: {}", session.shift())?;
                writeln!(writer, "Result: {}", session.output())?;
            }
            Command::Help => writeln!(writer, "{}", HELP)?,
            Command::Quit => break,
        }
        writer.flush()?;
    }

    info!("Interactive session finished");
    Ok(())
}

fn report<W: Write>(session: &mut Session, direction: Direction, writer: &mut W) -> Result<()> {
    match session.run(direction) {
        Ok(output) => writeln!(writer, "{}", output)?,
        Err(e) => writeln!(writer, "Error: {}", e)?,
    }
    Ok(())
}
