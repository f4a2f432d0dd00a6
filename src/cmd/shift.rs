use clap::Args;
use shiftbreak::error::SbResult;
use shiftbreak::shift::shift;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ShiftArgs {
    /// Places to rotate each letter; negative keys rotate backwards
    #[arg(short, long, allow_negative_numbers = true)]
    pub key: i32,

    /// File holding the text (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Text given inline instead of a file
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,
}

pub fn run(args: ShiftArgs) -> SbResult<()> {
    let text = super::read_input(args.file.as_deref(), args.text.as_deref())?;
    print!("{}", shift(&text, args.key));
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}
