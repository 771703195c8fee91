use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Settings;
use crate::console::Console;
use crate::cue::{self, CueSheet};
use crate::library::{self, CommentSource, FlacComments};
use crate::metadata::AlbumMetadata;
use crate::template;

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Written { path: PathBuf, tracks: usize },
    TracksNotFound,
    WriteFailed,
}

impl Outcome {
    /// Exit status for this outcome. Without `strict_exit` every run exits 0.
    pub fn exit_code(&self, strict_exit: bool) -> ExitCode {
        if !strict_exit {
            return ExitCode::SUCCESS;
        }
        match self {
            Outcome::Written { .. } => ExitCode::SUCCESS,
            Outcome::TracksNotFound => ExitCode::from(2),
            Outcome::WriteFailed => ExitCode::from(3),
        }
    }
}

/// Resolve the template path against the working directory.
pub fn resolve_template(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Generate the cue sheet for the album next to `template_path`.
pub fn generate(
    template_path: &Path,
    settings: &Settings,
    source: &impl CommentSource,
    console: &Console,
) -> Outcome {
    let template_path = resolve_template(template_path);
    let dir = template_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut album = AlbumMetadata::default();
    let template = template::load(&template_path, &settings.template, &mut album, console);

    let scan = library::scan(&dir, &settings.library);
    let entries = library::aggregate(&scan.tracks, source, &mut album, console);

    if entries.is_empty() {
        if let Some(err) = &scan.error {
            console.line(err);
        }
        console.line("tracks not found!");
        return Outcome::TracksNotFound;
    }

    let sheet = CueSheet::new(template, &album, &entries);
    match cue::write(&dir, &album, &sheet, console) {
        Ok(path) => Outcome::Written {
            path,
            tracks: entries.len(),
        },
        Err(err) => {
            tracing::error!("{err}");
            console.line(&err);
            Outcome::WriteFailed
        }
    }
}

pub fn run(template_path: &Path) -> ExitCode {
    let settings = Settings::load_or_default();
    let console = Console::new(settings.output.echo);

    let outcome = generate(template_path, &settings, &FlacComments, &console);
    if let Outcome::Written { path, tracks } = &outcome {
        tracing::debug!(path = %path.display(), tracks, "done");
    }
    outcome.exit_code(settings.output.strict_exit)
}
