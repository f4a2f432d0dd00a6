use crate::command::Command;
use crate::decoder::{Decoder, Evaluation};
use crate::error::ShiftBreakError;
use crate::shift::shift;
use tracing::debug;

/// What the shell should show after a command.
#[derive(Debug)]
pub enum Reply {
    Usage,
    Quit,
    Shifted(String),
    Evaluated(Box<Evaluation>),
    Failed(ShiftBreakError),
}

/// State of an interactive decoding session: the current ciphertext and the
/// decoder used to evaluate it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ciphertext: String,
    decoder: Decoder,
}

impl Session {
    pub fn new(decoder: Decoder) -> Self {
        Self {
            ciphertext: String::new(),
            decoder,
        }
    }

    /// Current ciphertext, uppercased. Empty until something is loaded.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub fn decoder(&self) -> &Decoder {
        &self.decoder
    }

    /// Replaces the ciphertext and evaluates it.
    pub fn load(&mut self, text: &str) -> Reply {
        self.ciphertext = text.to_ascii_uppercase();
        match self.decoder.evaluate(&self.ciphertext) {
            Ok(evaluation) => Reply::Evaluated(Box::new(evaluation)),
            Err(e) => {
                debug!("Evaluation failed: {}", e);
                Reply::Failed(e)
            }
        }
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        debug!("Session command: {:?}", command);
        match command {
            Command::Help | Command::Unknown(_) => Reply::Usage,
            Command::Quit => Reply::Quit,
            Command::Shift(key) => Reply::Shifted(shift(&self.ciphertext, key)),
            Command::New(text) => self.load(&text),
        }
    }
}
