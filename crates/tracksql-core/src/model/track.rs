use crate::model::value::FieldValue;

/// One track entry from the library's `Tracks` collection.
///
/// Only the attributes that end up in the `Song` table are kept. Every one of
/// them may be absent in the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Track {
    /// The record identifier the entry was stored under.
    pub id: String,

    /// `Name` attribute.
    pub title: Option<String>,

    /// `Artist` attribute.
    pub artist: Option<String>,

    /// `Album` attribute.
    pub album: Option<String>,

    /// `Total Time` attribute (milliseconds in library exports).
    pub total_time: Option<FieldValue>,

    /// `BPM` attribute.
    pub bpm: Option<FieldValue>,
}

impl Track {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    #[must_use]
    pub fn with_total_time(mut self, total_time: impl Into<FieldValue>) -> Self {
        self.total_time = Some(total_time.into());
        self
    }

    #[must_use]
    pub fn with_bpm(mut self, bpm: impl Into<FieldValue>) -> Self {
        self.bpm = Some(bpm.into());
        self
    }

    /// Whether none of the catalog attributes are present.
    ///
    /// Empty tracks are still exported.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.total_time.is_none()
            && self.bpm.is_none()
    }
}
