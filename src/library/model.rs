use std::collections::BTreeSet;
use std::path::PathBuf;

/// Result of listing the album directory.
#[derive(Debug, Default)]
pub struct Scan {
    /// Track files ordered by path.
    pub tracks: BTreeSet<PathBuf>,
    /// First listing failure, reported only if no track was found.
    pub error: Option<walkdir::Error>,
}

/// One track of the cue sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEntry {
    pub filename: String,
    /// 1-based, contiguous in path order.
    pub number: u32,
    pub title: String,
}
