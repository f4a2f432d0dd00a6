use thiserror::Error;

pub const USAGE: &str = "\
Commands:
  h, help          show this message
  shift <N>        print the current ciphertext shifted by N places
  new \"<text>\"     replace the ciphertext with <text> and evaluate it
  q, quit          leave the session";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Shift(i32),
    New(String),
    /// Anything that is not a known verb. The shell answers with usage.
    Unknown(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Invalid shift amount '{0}': expected a whole number, e.g. 'shift -3'")]
    InvalidShift(String),

    #[error("Ciphertext must be quoted, e.g. 'new \"KHOOR\"'")]
    MissingQuote,

    #[error("Unterminated quoted string: add a closing '\"'")]
    UnterminatedQuote,

    #[error("Ciphertext between the quotes is empty")]
    EmptyLiteral,
}

impl Command {
    /// Parses a line. Verbs are case-insensitive; the quoted text of `new`
    /// is returned exactly as typed.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim_start()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "q" | "quit" if rest.is_empty() => Ok(Self::Quit),
            "h" | "help" => Ok(Self::Help),
            "shift" => parse_shift(rest).map(Self::Shift),
            "new" => parse_literal(rest).map(|s| Self::New(s.to_string())),
            _ => Ok(Self::Unknown(line.to_string())),
        }
    }
}

fn parse_shift(arg: &str) -> Result<i32, CommandError> {
    arg.parse()
        .map_err(|_| CommandError::InvalidShift(arg.to_string()))
}

fn parse_literal(arg: &str) -> Result<&str, CommandError> {
    let inner = arg.strip_prefix('"').ok_or(CommandError::MissingQuote)?;
    let inner = inner
        .strip_suffix('"')
        .ok_or(CommandError::UnterminatedQuote)?;
    if inner.is_empty() {
        return Err(CommandError::EmptyLiteral);
    }
    Ok(inner)
}
