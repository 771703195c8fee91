use std::fs::File;
use std::path::Path;

use lofty::config::ParseOptions;
use lofty::file::AudioFile;
use lofty::flac::FlacFile;

use crate::error::{Error, Result};

/// Access to the embedded text comments of one audio file.
///
/// Implementations return `Ok(None)` when the file carries no comment block,
/// and otherwise every comment in stored order, rendered as `KEY=value`.
pub trait CommentSource {
    fn comments(&self, path: &Path) -> Result<Option<Vec<String>>>;
}

/// Vorbis comments of FLAC files, read through `lofty`.
///
/// Entries without a `=` separator are dropped by the parser and never reach
/// the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlacComments;

impl CommentSource for FlacComments {
    fn comments(&self, path: &Path) -> Result<Option<Vec<String>>> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;

        // Only the metadata blocks are needed; skip stream properties.
        let options = ParseOptions::new().read_properties(false);
        let flac = FlacFile::read_from(&mut file, options).map_err(|source| Error::Tags {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(flac.vorbis_comments().map(|tag| {
            tag.items()
                .map(|(key, value)| format!("{key}={value}"))
                .collect()
        }))
    }
}
