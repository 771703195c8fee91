use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::console::Console;
use crate::metadata::{AlbumMetadata, COMMENT_RULES, first_match};

use super::comments::CommentSource;
use super::model::TrackEntry;

/// Turn the ordered track paths into numbered entries.
///
/// Titles default to the file stem and are overridden by a `TITLE` comment.
/// Album fields that are still empty are filled from the comments.
pub fn aggregate(
    tracks: &BTreeSet<PathBuf>,
    source: &impl CommentSource,
    album: &mut AlbumMetadata,
    console: &Console,
) -> Vec<TrackEntry> {
    let mut entries = Vec::with_capacity(tracks.len());

    for (number, path) in (1u32..).zip(tracks) {
        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        match source.comments(path) {
            Ok(Some(comments)) => {
                console.line(format!("track {number} tag:"));
                for comment in &comments {
                    if let Some(m) = first_match(comment, COMMENT_RULES, album, |_, _| {}) {
                        m.apply(album, Some(&mut title));
                    }
                    console.line(format!("\t{comment}"));
                }
            }
            Ok(None) => {
                tracing::debug!(path = %path.display(), "no comment block, keeping file stem as title");
            }
            Err(err) => {
                tracing::debug!("{err}; keeping file stem as title");
            }
        }

        entries.push(TrackEntry {
            filename,
            number,
            title,
        });
    }

    entries
}
