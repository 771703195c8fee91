use super::*;

#[test]
fn extract_tag_strips_quotes_from_quoted_values() {
    assert_eq!(
        extract_tag("REM GENRE \"Progressive Rock\"", "GENRE", Some('"')),
        Some("Progressive Rock".to_string())
    );
    assert_eq!(
        extract_tag("PERFORMER \"Artist A\"", "PERFORMER", Some('"')),
        Some("Artist A".to_string())
    );
}

#[test]
fn extract_tag_skips_exactly_one_separator() {
    assert_eq!(extract_tag("TITLE=Song One", "TITLE", None), Some("Song One".into()));
    assert_eq!(extract_tag("REM DATE  1999", "DATE", None), Some(" 1999".into()));
}

#[test]
fn extract_tag_reports_missing_tag() {
    assert_eq!(extract_tag("FILE \"a.flac\" WAVE", "GENRE", None), None);
    assert_eq!(extract_tag("", "TITLE", None), None);
}

#[test]
fn extract_tag_at_end_of_line_yields_empty_value() {
    assert_eq!(extract_tag("REM DATE", "DATE", None), Some(String::new()));
    assert_eq!(extract_tag("REM DATE ", "DATE", None), Some(String::new()));
}

#[test]
fn extract_tag_matches_inside_longer_words() {
    // Matching is literal: a tag embedded in another word still counts.
    assert_eq!(
        extract_tag("REM SUBGENRE Shoegaze", "GENRE", None),
        Some("Shoegaze".into())
    );
    assert_eq!(
        extract_tag("ALBUMARTIST=Various", "ARTIST", None),
        Some("Various".into())
    );
}

#[test]
fn extract_tag_handles_multibyte_separator() {
    assert_eq!(extract_tag("TITLE→Ünïcode", "TITLE", None), Some("Ünïcode".into()));
}

#[test]
fn fill_if_empty_keeps_first_value() {
    let mut album = AlbumMetadata::default();
    assert!(album.fill_if_empty(AlbumField::Performer, "First".into()));
    assert!(!album.fill_if_empty(AlbumField::Performer, "Second".into()));
    assert_eq!(album.artist, "First");
}

#[test]
fn fill_if_empty_with_empty_value_leaves_field_open() {
    let mut album = AlbumMetadata::default();
    album.fill_if_empty(AlbumField::Date, String::new());
    assert!(!album.is_filled(AlbumField::Date));
    assert!(album.fill_if_empty(AlbumField::Date, "2001".into()));
    assert_eq!(album.get(AlbumField::Date), "2001");
}

#[test]
fn template_rules_follow_genre_performer_date_title_order() {
    let tags: Vec<&str> = TEMPLATE_RULES.iter().map(|r| r.tag).collect();
    assert_eq!(tags, vec!["GENRE", "PERFORMER", "DATE", "TITLE"]);
    assert_eq!(TEMPLATE_RULES[2].strip, None);
}

#[test]
fn comment_rules_follow_title_artist_album_date_genre_order() {
    let tags: Vec<&str> = COMMENT_RULES.iter().map(|r| r.tag).collect();
    assert_eq!(tags, vec!["TITLE", "ARTIST", "ALBUM", "DATE", "GENRE"]);
    assert!(COMMENT_RULES.iter().all(|r| r.strip.is_none()));
    assert_eq!(COMMENT_RULES[0].target, Target::TrackTitle);
}

#[test]
fn first_match_takes_only_one_tag_per_line() {
    let album = AlbumMetadata::default();
    // Both GENRE and TITLE appear; GENRE has priority.
    let m = first_match("GENRE TITLE", TEMPLATE_RULES, &album, |_, _| {}).unwrap();
    assert_eq!(m.rule.tag, "GENRE");
    assert_eq!(m.value, "TITLE");
}

#[test]
fn first_match_skips_filled_fields_without_attempting() {
    let album = AlbumMetadata {
        genre: "Jazz".into(),
        ..AlbumMetadata::default()
    };
    let mut attempted = Vec::new();
    let m = first_match("TITLE \"Blue\"", TEMPLATE_RULES, &album, |rule, found| {
        attempted.push((rule.tag, found.map(str::to_string)));
    })
    .unwrap();

    assert_eq!(m.value, "Blue");
    assert_eq!(
        attempted,
        vec![
            ("PERFORMER", None),
            ("DATE", None),
            ("TITLE", Some("Blue".to_string())),
        ]
    );
}

#[test]
fn track_title_rule_is_attempted_even_with_full_album() {
    let album = AlbumMetadata {
        artist: "A".into(),
        title: "B".into(),
        date: "C".into(),
        genre: "D".into(),
    };
    let m = first_match("TITLE=Song", COMMENT_RULES, &album, |_, _| {}).unwrap();

    let mut album = album;
    let mut title = "stem".to_string();
    m.apply(&mut album, Some(&mut title));
    assert_eq!(title, "Song");
    assert!(first_match("ARTIST=X", COMMENT_RULES, &album, |_, _| {}).is_none());
}

#[test]
fn apply_never_overwrites_album_fields() {
    let mut album = AlbumMetadata {
        title: "Kept".into(),
        ..AlbumMetadata::default()
    };
    let m = RuleMatch {
        rule: &COMMENT_RULES[2],
        value: "Replaced".into(),
    };
    m.apply(&mut album, None);
    assert_eq!(album.title, "Kept");
}
