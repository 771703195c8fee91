use super::album::{AlbumField, AlbumMetadata};
use super::extract_tag;

/// Where a matched value goes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Target {
    /// Fill an album field, only while it is still empty.
    Album(AlbumField),
    /// Override the current track's title unconditionally.
    TrackTitle,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TagRule {
    pub tag: &'static str,
    pub target: Target,
    pub strip: Option<char>,
}

impl TagRule {
    const fn new(tag: &'static str, target: Target, strip: Option<char>) -> Self {
        Self { tag, target, strip }
    }

    fn is_exhausted(&self, album: &AlbumMetadata) -> bool {
        match self.target {
            Target::Album(field) => album.is_filled(field),
            Target::TrackTitle => false,
        }
    }
}

/// Priority order for template lines.
pub const TEMPLATE_RULES: &[TagRule] = &[
    TagRule::new("GENRE", Target::Album(AlbumField::Genre), Some('"')),
    TagRule::new("PERFORMER", Target::Album(AlbumField::Performer), Some('"')),
    TagRule::new("DATE", Target::Album(AlbumField::Date), None),
    TagRule::new("TITLE", Target::Album(AlbumField::Title), Some('"')),
];

/// Priority order for embedded vorbis comments.
pub const COMMENT_RULES: &[TagRule] = &[
    TagRule::new("TITLE", Target::TrackTitle, None),
    TagRule::new("ARTIST", Target::Album(AlbumField::Performer), None),
    TagRule::new("ALBUM", Target::Album(AlbumField::Title), None),
    TagRule::new("DATE", Target::Album(AlbumField::Date), None),
    TagRule::new("GENRE", Target::Album(AlbumField::Genre), None),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch<'r> {
    pub rule: &'r TagRule,
    pub value: String,
}

/// Evaluate `rules` against `line` in order and return the first match.
///
/// Rules whose album field is already filled are skipped without an attempt.
/// `on_attempt` sees every attempted rule with its result.
pub fn first_match<'r>(
    line: &str,
    rules: &'r [TagRule],
    album: &AlbumMetadata,
    mut on_attempt: impl FnMut(&TagRule, Option<&str>),
) -> Option<RuleMatch<'r>> {
    for rule in rules {
        if rule.is_exhausted(album) {
            continue;
        }
        let found = extract_tag(line, rule.tag, rule.strip);
        on_attempt(rule, found.as_deref());
        if let Some(value) = found {
            tracing::debug!(tag = rule.tag, %value, "tag matched");
            return Some(RuleMatch { rule, value });
        }
    }
    None
}

impl RuleMatch<'_> {
    /// Store the matched value. Track-title matches land in `track_title`
    /// when one is given and are dropped otherwise.
    pub fn apply(self, album: &mut AlbumMetadata, track_title: Option<&mut String>) {
        match self.rule.target {
            Target::Album(field) => {
                if album.fill_if_empty(field, self.value) {
                    tracing::debug!(%field, "album field filled");
                }
            }
            Target::TrackTitle => {
                if let Some(title) = track_title {
                    *title = self.value;
                }
            }
        }
    }
}
