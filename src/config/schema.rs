use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cuegen/config.toml` or `~/.config/cuegen/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CUEGEN__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub template: TemplateSettings,
    pub library: LibrarySettings,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TemplateSettings {
    /// The only file name accepted as a template. Any other path given on the
    /// command line is ignored and the run proceeds without a template.
    pub file_name: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            file_name: "cue_template.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as tracks (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks when listing the album directory.
    pub follow_links: bool,
    /// Whether to include hidden files (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec!["flac".into()],
            follow_links: true,
            include_hidden: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Echo template lines, tag lookups, comments and written lines to stdout.
    pub echo: bool,
    /// Exit with a non-zero status when no tracks were found (2) or the cue
    /// file could not be written (3). Off by default: the run always exits 0.
    pub strict_exit: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            echo: true,
            strict_exit: false,
        }
    }
}
