//! Card projection.

use serde::Serialize;

use crate::show::{Show, ShowId};

/// Title shown when the catalog has no name.
pub const MISSING_TITLE: &str = "Título indisponível";
/// Image alt text when the catalog has no name.
pub const UNNAMED_ALT: &str = "Série sem nome";
/// Poster shown when the catalog has no image.
pub const PLACEHOLDER_IMAGE: &str =
    "https://via.placeholder.com/210x295/eff2ff/9ca3af?text=Sem+Imagem";
/// Separator between genre labels.
pub const GENRE_SEPARATOR: &str = " · ";
/// Genre line when there are no genres.
pub const MISSING_GENRES: &str = "Gênero não informado";
/// Rating line when there is no rating.
pub const MISSING_RATING: &str = "Sem avaliação";

/// The favorite button of a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteAffordance {
    pub active: bool,
    pub glyph: &'static str,
    pub label: &'static str,
    pub aria_label: &'static str,
}

impl FavoriteAffordance {
    pub fn for_state(is_favorite: bool) -> Self {
        if is_favorite {
            Self {
                active: true,
                glyph: "★",
                label: "Favorito",
                aria_label: "Remover dos favoritos",
            }
        } else {
            Self {
                active: false,
                glyph: "☆",
                label: "Favoritar",
                aria_label: "Adicionar aos favoritos",
            }
        }
    }
}

/// Everything needed to draw one show card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: ShowId,
    pub title: String,
    pub image_url: String,
    pub image_alt: String,
    pub genres: String,
    /// One-decimal rating, or [`MISSING_RATING`].
    pub rating: String,
    /// Whether `rating` holds a score rather than the fallback text.
    pub has_rating: bool,
    pub favorite: FavoriteAffordance,
}

/// Project `show` into a card with the given favorite state.
pub fn project(show: &Show, is_favorite: bool) -> CardView {
    let name = show.name.as_deref().filter(|n| !n.is_empty());

    let genres = if show.genres.is_empty() {
        MISSING_GENRES.to_string()
    } else {
        show.genres.join(GENRE_SEPARATOR)
    };

    // Zero means "not rated" in the catalog.
    let score = show
        .rating_average()
        .filter(|avg| avg.is_finite() && *avg != 0.0);

    CardView {
        id: show.id,
        title: name.unwrap_or(MISSING_TITLE).to_string(),
        image_url: show
            .image_url()
            .filter(|url| !url.is_empty())
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string(),
        image_alt: name.unwrap_or(UNNAMED_ALT).to_string(),
        genres,
        rating: match score {
            Some(avg) => format!("{:.1}", avg),
            None => MISSING_RATING.to_string(),
        },
        has_rating: score.is_some(),
        favorite: FavoriteAffordance::for_state(is_favorite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_project_not_favorite() {
        let card = project(&fixtures::breaking_bad(), false);

        assert_eq!(card.id, ShowId(1));
        assert_eq!(card.title, "Breaking Bad");
        assert_eq!(card.genres, "Drama");
        assert_eq!(card.rating, "9.5");
        assert!(card.has_rating);
        assert_eq!(card.favorite.glyph, "☆");
        assert_eq!(card.favorite.label, "Favoritar");
        assert!(!card.favorite.active);
    }

    #[test]
    fn test_project_favorite() {
        let card = project(&fixtures::breaking_bad(), true);

        assert_eq!(card.favorite.glyph, "★");
        assert_eq!(card.favorite.label, "Favorito");
        assert_eq!(card.favorite.aria_label, "Remover dos favoritos");
        assert!(card.favorite.active);
    }

    #[test]
    fn test_project_fallbacks() {
        let card = project(&Show::new(5u64), false);

        assert_eq!(card.title, MISSING_TITLE);
        assert_eq!(card.image_alt, UNNAMED_ALT);
        assert_eq!(card.image_url, PLACEHOLDER_IMAGE);
        assert_eq!(card.genres, MISSING_GENRES);
        assert_eq!(card.rating, MISSING_RATING);
        assert!(!card.has_rating);
    }

    #[test]
    fn test_project_joins_genres() {
        let show = Show::new(1u64).with_genres(["Drama", "Crime", "Thriller"]);
        assert_eq!(project(&show, false).genres, "Drama · Crime · Thriller");
    }

    #[test]
    fn test_rating_formatting() {
        assert_eq!(project(&Show::new(1u64).with_rating(8.0), false).rating, "8.0");
        assert_eq!(project(&Show::new(1u64).with_rating(7.26), false).rating, "7.3");
        assert_eq!(project(&Show::new(1u64).with_rating(7.24), false).rating, "7.2");
        assert_eq!(project(&Show::new(1u64).with_rating(0.0), false).rating, MISSING_RATING);
    }

    #[test]
    fn test_uses_medium_image() {
        let show = Show::new(1u64).with_image("https://static.tvmaze.com/m.jpg");
        assert_eq!(project(&show, false).image_url, "https://static.tvmaze.com/m.jpg");
    }

    #[test]
    fn test_projection_is_deterministic() {
        let show = fixtures::breaking_bad();
        assert_eq!(project(&show, true), project(&show, true));
        assert_ne!(project(&show, true), project(&show, false));
    }
}
