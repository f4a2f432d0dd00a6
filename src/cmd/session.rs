use crate::reports;
use clap::Args;
use shiftbreak::command::Command;
use shiftbreak::config::OutputFormat;
use shiftbreak::decoder::Decoder;
use shiftbreak::error::SbResult;
use shiftbreak::session::{Reply, Session};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// File to evaluate before the prompt opens
    pub file: Option<PathBuf>,
}

pub fn run(args: SessionArgs, decoder: Decoder, format: OutputFormat) -> SbResult<()> {
    reports::print_banner();

    let mut session = Session::new(decoder);

    if let Some(path) = &args.file {
        match fs::read_to_string(path) {
            Ok(text) => {
                info!("📂 Loaded ciphertext from {:?}", path);
                let reply = session.load(&text);
                reports::print_reply(&reply, format)?;
            }
            Err(e) => {
                // The prompt still opens so the user can type a ciphertext.
                error!("Failed to read {:?}: {}", path, e);
                println!("Error reading file.");
            }
        }
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF
            println!();
            break;
        }

        let reply = match Command::parse(&line) {
            Ok(command) => session.handle(command),
            Err(e) => {
                reports::print_command_error(&e);
                continue;
            }
        };

        if let Reply::Quit = reply {
            break;
        }
        reports::print_reply(&reply, format)?;
    }

    Ok(())
}
