use std::path::PathBuf;

use clap::Parser;

/// Generate a CUE sheet from the FLAC files next to a template.
#[derive(Debug, Parser)]
#[command(name = "cuegen", version, about)]
pub struct Args {
    /// Path to the cue template. Its directory is scanned for FLAC files.
    #[arg(default_value = "cue_template.txt")]
    pub template: PathBuf,
}
