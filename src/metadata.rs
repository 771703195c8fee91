//! Album metadata aggregation.
//!
//! `parse` holds the tag-line matcher, `album` the first-match-wins aggregate
//! and `rules` the ordered rule tables used for template lines and embedded
//! comments.

mod album;
mod parse;
mod rules;

pub use album::*;
pub use parse::extract_tag;
pub use rules::*;

#[cfg(test)]
mod tests;
