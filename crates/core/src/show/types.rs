//! Typed show record.
//!
//! The serialized shape mirrors the TVmaze show schema so that persisted
//! favorites stay readable by anything that understands the remote format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable catalog identity of a show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(pub u64);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ShowId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Image references for a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowImage {
    /// Medium sized poster, used for cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    /// Full resolution poster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

/// Aggregated user rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShowRating {
    /// Average score (0-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
}

/// A catalog entry.
///
/// Shows are immutable once obtained; whether a show is a favorite is never
/// stored on the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Show {
    /// Catalog ID.
    pub id: ShowId,
    /// Show name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Poster references.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ShowImage>,
    /// Genre labels, possibly empty.
    #[serde(default, deserialize_with = "nullable_genres")]
    pub genres: Vec<String>,
    /// Rating summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<ShowRating>,
}

impl Show {
    /// Create a show with only an identity.
    pub fn new(id: impl Into<ShowId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            image: None,
            genres: Vec::new(),
            rating: None,
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the medium poster reference.
    pub fn with_image(mut self, medium: impl Into<String>) -> Self {
        self.image = Some(ShowImage {
            medium: Some(medium.into()),
            original: None,
        });
        self
    }

    /// Set the genre labels.
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    /// Set the average rating.
    pub fn with_rating(mut self, average: f64) -> Self {
        self.rating = Some(ShowRating {
            average: Some(average),
        });
        self
    }

    /// Medium poster reference, if the catalog had one.
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_ref().and_then(|i| i.medium.as_deref())
    }

    /// Average rating, if any.
    pub fn rating_average(&self) -> Option<f64> {
        self.rating.as_ref().and_then(|r| r.average)
    }
}

// TVmaze sends `"genres": null` for some records.
fn nullable_genres<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
