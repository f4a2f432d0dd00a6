use crate::consts::{DEFAULT_CANDIDATES, MIN_CANDIDATES};
use crate::decoder::Decoder;
use crate::error::{SbResult, ShiftBreakError};
use crate::reference::ReferenceTable;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

#[derive(
    Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn names() -> Vec<String> {
        Self::iter().map(|f| f.to_string()).collect()
    }
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// CSV of `letter,percentage` rows replacing the built-in English table
    #[arg(long, global = true)]
    pub reference: Option<PathBuf>,

    /// Number of ranked keys to report (at least 3)
    #[arg(long, global = true, default_value_t = DEFAULT_CANDIDATES)]
    pub candidates: usize,

    /// Output format for evaluations
    #[arg(long, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference: None,
            candidates: DEFAULT_CANDIDATES,
            format: OutputFormat::Text,
        }
    }
}

impl AnalysisConfig {
    /// Reads settings from JSON. Values are not validated here, since
    /// command-line flags may still replace them.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SbResult<Self> {
        let path = path.as_ref();
        info!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Copies every value the user typed on the command line over this
    /// config. Defaults filled in by clap do not override file values.
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if set_on_command_line(matches, $arg_name) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(reference, "reference");
        update_if_present!(candidates, "candidates");
        update_if_present!(format, "format");
    }

    pub fn validate(&self) -> SbResult<()> {
        if self.candidates < MIN_CANDIDATES {
            return Err(ShiftBreakError::Config(format!(
                "candidates must be at least {}, got {}",
                MIN_CANDIDATES, self.candidates
            )));
        }
        Ok(())
    }

    pub fn build_decoder(&self) -> SbResult<Decoder> {
        self.validate()?;
        let reference = match &self.reference {
            Some(path) => ReferenceTable::load_from_file(path)?,
            None => ReferenceTable::english(),
        };
        Ok(Decoder::new(reference).with_candidates(self.candidates))
    }
}

/// Global arguments may be typed before or after the subcommand, so both
/// levels of the match tree are consulted.
fn set_on_command_line(matches: &ArgMatches, id: &str) -> bool {
    if matches.value_source(id) == Some(ValueSource::CommandLine) {
        return true;
    }
    match matches.subcommand() {
        Some((_, sub)) => set_on_command_line(sub, id),
        None => false,
    }
}
