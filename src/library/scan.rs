use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Scan;

fn is_track_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List `dir` (without recursing) and collect its track files in path order.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Scan {
    let mut scan = Scan::default();

    let walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .min_depth(1)
        .max_depth(1);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(dir = %dir.display(), "directory listing failed: {err}");
                if scan.error.is_none() {
                    scan.error = Some(err);
                }
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file()
            && (settings.include_hidden || !is_hidden(path))
            && is_track_file(path, settings)
        {
            scan.tracks.insert(path.to_path_buf());
        }
    }

    tracing::debug!(dir = %dir.display(), count = scan.tracks.len(), "scanned album directory");
    scan
}
