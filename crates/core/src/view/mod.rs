//! Render-ready projections of shows and status messages.
//!
//! Everything here is pure: the rendering collaborator consumes these values
//! and nothing in this module looks at session state.

mod card;
mod feedback;

pub use card::{
    project, CardView, FavoriteAffordance, GENRE_SEPARATOR, MISSING_GENRES, MISSING_RATING,
    MISSING_TITLE, PLACEHOLDER_IMAGE, UNNAMED_ALT,
};
pub use feedback::{Feedback, FeedbackKind};
