use crate::reports;
use clap::Args;
use shiftbreak::config::OutputFormat;
use shiftbreak::decoder::Decoder;
use shiftbreak::error::SbResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// File holding the ciphertext (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Ciphertext given inline instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Also print observed letter frequencies next to the reference table
    #[arg(long, default_value_t = false)]
    pub frequencies: bool,
}

pub fn run(args: DecodeArgs, decoder: &Decoder, format: OutputFormat) -> SbResult<()> {
    let ciphertext = super::read_input(args.file.as_deref(), args.text.as_deref())?;
    let evaluation = decoder.evaluate(&ciphertext)?;

    match format {
        OutputFormat::Json => reports::print_json(&evaluation)?,
        OutputFormat::Text => {
            reports::print_evaluation(&evaluation);
            if args.frequencies {
                reports::print_frequency_table(&evaluation.distribution, decoder.reference());
            }
        }
    }
    Ok(())
}
