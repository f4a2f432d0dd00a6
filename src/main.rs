use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use shiftbreak::config::AnalysisConfig;
use shiftbreak::error::SbResult;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    analysis: AnalysisConfig,

    /// JSON file with analysis settings; flags on the command line win
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interactive prompt for evaluating and re-shifting ciphertext
    Session(cmd::session::SessionArgs),
    /// Break a ciphertext once and print the best guess
    Decode(cmd::decode::DecodeArgs),
    /// Shift a text by a fixed key
    Shift(cmd::shift::ShiftArgs),
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli, matches: &clap::ArgMatches) -> SbResult<AnalysisConfig> {
    let config = match &cli.config {
        Some(path) => {
            let mut file_config = AnalysisConfig::load_from_file(path)?;
            file_config.merge_from_cli(&cli.analysis, matches);
            file_config
        }
        None => cli.analysis.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli, matches: &clap::ArgMatches) -> SbResult<()> {
    let config = resolve_config(&cli, matches)?;
    info!("Analysis config: {:?}", config);
    let decoder = config.build_decoder()?;

    match cli.command {
        Some(Commands::Decode(args)) => cmd::decode::run(args, &decoder, config.format),
        Some(Commands::Shift(args)) => cmd::shift::run(args),
        Some(Commands::Session(args)) => cmd::session::run(args, decoder, config.format),
        None => cmd::session::run(Default::default(), decoder, config.format),
    }
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.debug);

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
