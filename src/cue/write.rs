use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::error::{Error, Result};
use crate::metadata::AlbumMetadata;

use super::sheet::CueSheet;

/// Replace characters that cannot appear in a file name.
fn file_name_part(value: &str) -> String {
    value
        .chars()
        .map(|c| if c == '/' || c == '\0' { '_' } else { c })
        .collect()
}

/// `<dir>/<artist> - <date>. <title>.cue`
pub fn output_path(dir: &Path, album: &AlbumMetadata) -> PathBuf {
    dir.join(format!(
        "{} - {}. {}.cue",
        file_name_part(&album.artist),
        file_name_part(&album.date),
        file_name_part(&album.title),
    ))
}

/// Write `sheet` next to the tracks, truncating any previous file.
pub fn write(dir: &Path, album: &AlbumMetadata, sheet: &CueSheet, console: &Console) -> Result<PathBuf> {
    let path = output_path(dir, album);
    let write_err = |source| Error::Write {
        path: path.clone(),
        source,
    };

    let file = File::create(&path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(sheet.render().as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    for section in sheet.sections() {
        console.line(section);
    }

    tracing::info!(path = %path.display(), "cue sheet written");
    Ok(path)
}
