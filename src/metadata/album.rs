use std::fmt;

/// Album-level fields shared by the whole cue sheet.
///
/// Each field is filled at most once; see [`AlbumMetadata::fill_if_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumMetadata {
    pub artist: String,
    pub title: String,
    pub date: String,
    pub genre: String,
}

/// Addressable slot of [`AlbumMetadata`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlbumField {
    Genre,
    Performer,
    Date,
    Title,
}

impl fmt::Display for AlbumField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Genre => "genre",
            Self::Performer => "performer",
            Self::Date => "date",
            Self::Title => "title",
        };
        f.write_str(name)
    }
}

impl AlbumMetadata {
    pub fn get(&self, field: AlbumField) -> &str {
        match field {
            AlbumField::Genre => &self.genre,
            AlbumField::Performer => &self.artist,
            AlbumField::Date => &self.date,
            AlbumField::Title => &self.title,
        }
    }

    fn slot_mut(&mut self, field: AlbumField) -> &mut String {
        match field {
            AlbumField::Genre => &mut self.genre,
            AlbumField::Performer => &mut self.artist,
            AlbumField::Date => &mut self.date,
            AlbumField::Title => &mut self.title,
        }
    }

    pub fn is_filled(&self, field: AlbumField) -> bool {
        !self.get(field).is_empty()
    }

    /// Store `value` in `field` unless the field already holds something.
    ///
    /// Returns `true` when the value was stored.
    pub fn fill_if_empty(&mut self, field: AlbumField, value: String) -> bool {
        let slot = self.slot_mut(field);
        if !slot.is_empty() {
            return false;
        }
        *slot = value;
        true
    }
}
