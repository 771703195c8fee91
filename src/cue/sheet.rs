use std::fmt::Write as _;

use crate::library::TrackEntry;
use crate::metadata::AlbumMetadata;
use crate::template::Template;

/// A rendered cue sheet: header lines followed by one block per track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CueSheet {
    header: Vec<String>,
    tracks: Vec<String>,
}

impl CueSheet {
    /// Build the sheet. An empty template header is replaced by lines
    /// synthesized from `album`.
    pub fn new(template: Template, album: &AlbumMetadata, entries: &[TrackEntry]) -> Self {
        let header = if template.is_empty() {
            synthesize_header(album)
        } else {
            template.lines
        };

        let mut sorted: Vec<&TrackEntry> = entries.iter().collect();
        sorted.sort_by_key(|e| e.number);
        let tracks = sorted.into_iter().map(track_block).collect();

        Self { header, tracks }
    }

    /// Header lines and track blocks in write order, without trailing newlines.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.header
            .iter()
            .chain(self.tracks.iter())
            .map(|s| s.trim_end_matches('\n'))
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.header {
            out.push_str(line);
            out.push('\n');
        }
        for block in &self.tracks {
            out.push_str(block);
        }
        out
    }
}

fn synthesize_header(album: &AlbumMetadata) -> Vec<String> {
    vec![
        format!("REM GENRE \"{}\"", album.genre),
        format!("REM DATE {}", album.date),
        format!("PERFORMER \"{}\"", album.artist),
        format!("TITLE \"{}\"", album.title),
    ]
}

fn track_block(entry: &TrackEntry) -> String {
    let mut block = String::new();
    let _ = writeln!(block, "FILE \"{}\" WAVE", entry.filename);
    let _ = writeln!(block, "  TRACK {:02} AUDIO", entry.number);
    let _ = writeln!(block, "\tTITLE {}", entry.title);
    let _ = writeln!(block, "\tINDEX 01 00:00:00");
    block
}
