//! Optional cue template: seeds the album fields and supplies the header.

use std::fs;
use std::path::Path;

use crate::config::TemplateSettings;
use crate::console::Console;
use crate::error::{Error, Result};
use crate::metadata::{AlbumMetadata, TEMPLATE_RULES, first_match};

/// Lines of the template, kept verbatim for the cue header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub lines: Vec<String>,
}

impl Template {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Load the template at `path` and fill still-empty album fields from it.
///
/// A missing, unreadable or differently named file is not an error: the
/// failure is reported and an empty template is returned.
pub fn load(
    path: &Path,
    settings: &TemplateSettings,
    album: &mut AlbumMetadata,
    console: &Console,
) -> Template {
    match read_template(path, settings) {
        Ok(text) => seed_from_text(&text, album, console),
        Err(err) => {
            tracing::warn!(path = %path.display(), "template not loaded: {err}");
            console.line(format!("can't open '{}'", settings.file_name));
            Template::default()
        }
    }
}

fn read_template(path: &Path, settings: &TemplateSettings) -> Result<String> {
    let named = path
        .file_name()
        .map(|name| name == settings.file_name.as_str())
        .unwrap_or(false);
    if !named {
        return Err(Error::io(
            path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("expected a file named '{}'", settings.file_name),
            ),
        ));
    }

    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Walk template text line by line, taking at most one tag per line.
pub fn seed_from_text(text: &str, album: &mut AlbumMetadata, console: &Console) -> Template {
    let mut lines = Vec::new();

    for line in text.lines() {
        let found = first_match(line, TEMPLATE_RULES, album, |rule, value| {
            console.line(format!("find tag {}: {}", rule.tag, value.unwrap_or("none")));
        });
        if let Some(m) = found {
            m.apply(album, None);
        }

        console.line(line);
        lines.push(line.to_string());
    }

    Template { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "REM GENRE \"Post-Rock\"\nREM DATE 2004\nPERFORMER \"Artist A\"\nTITLE \"Album B\"\n";

    #[test]
    fn seed_fills_all_album_fields_and_keeps_lines() {
        let mut album = AlbumMetadata::default();
        let t = seed_from_text(SAMPLE, &mut album, &Console::silent());

        assert_eq!(album.genre, "Post-Rock");
        assert_eq!(album.date, "2004");
        assert_eq!(album.artist, "Artist A");
        assert_eq!(album.title, "Album B");
        assert_eq!(
            t.lines,
            vec![
                "REM GENRE \"Post-Rock\"",
                "REM DATE 2004",
                "PERFORMER \"Artist A\"",
                "TITLE \"Album B\"",
            ]
        );
    }

    #[test]
    fn first_value_wins_across_lines() {
        let mut album = AlbumMetadata::default();
        seed_from_text(
            "TITLE \"Album\"\n  TRACK 01 AUDIO\n    TITLE \"Track One\"\n",
            &mut album,
            &Console::silent(),
        );
        assert_eq!(album.title, "Album");
    }

    #[test]
    fn unmatched_lines_are_kept_verbatim() {
        let mut album = AlbumMetadata::default();
        let t = seed_from_text("REM COMMENT \"ripped\"\n\nCATALOG 0000\n", &mut album, &Console::silent());
        assert_eq!(t.lines, vec!["REM COMMENT \"ripped\"", "", "CATALOG 0000"]);
        assert_eq!(album, AlbumMetadata::default());
    }

    #[test]
    fn crlf_lines_lose_their_carriage_return() {
        let mut album = AlbumMetadata::default();
        let t = seed_from_text("REM DATE 1999\r\nPERFORMER \"X\"\r\n", &mut album, &Console::silent());
        assert_eq!(album.date, "1999");
        assert_eq!(album.artist, "X");
        assert_eq!(t.lines[0], "REM DATE 1999");
    }

    #[test]
    fn load_reads_template_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cue_template.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut album = AlbumMetadata::default();
        let t = load(&path, &TemplateSettings::default(), &mut album, &Console::silent());
        assert_eq!(t.lines.len(), 4);
        assert_eq!(album.artist, "Artist A");
    }

    #[test]
    fn load_ignores_differently_named_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, SAMPLE).unwrap();

        let mut album = AlbumMetadata::default();
        let t = load(&path, &TemplateSettings::default(), &mut album, &Console::silent());
        assert!(t.is_empty());
        assert_eq!(album, AlbumMetadata::default());
    }

    #[test]
    fn load_of_missing_file_is_not_fatal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cue_template.txt");

        let mut album = AlbumMetadata::default();
        let t = load(&path, &TemplateSettings::default(), &mut album, &Console::silent());
        assert!(t.is_empty());
    }
}
