/// Extract the value that follows `tag` in `line`.
///
/// The first occurrence of `tag` anywhere in the line counts as a match, with
/// no word-boundary or line-start check. The value is the rest of the line
/// after the tag and one separating character. When `strip` is set, every
/// occurrence of that character is removed from the value.
///
/// Returns `None` when the tag does not occur in the line.
pub fn extract_tag(line: &str, tag: &str, strip: Option<char>) -> Option<String> {
    let idx = line.find(tag)?;
    let rest = &line[idx + tag.len()..];

    let mut chars = rest.chars();
    chars.next();
    let value = chars.as_str();

    Some(match strip {
        Some(c) => value.chars().filter(|&ch| ch != c).collect(),
        None => value.to_string(),
    })
}
