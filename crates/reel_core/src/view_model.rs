use crate::Movie;

/// Prefix prepended to a movie's `poster_path`.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub loading: bool,
    pub error_message: Option<String>,
    pub movies: Vec<MovieCardView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCardView {
    pub id: u64,
    pub title: String,
    pub rating: String,
    pub language: String,
    pub year: String,
    pub poster_url: Option<String>,
}

impl MovieCardView {
    pub fn from_movie(movie: &Movie) -> Self {
        let rating = match movie.vote_average {
            Some(avg) if avg > 0.0 => format!("{avg:.1}"),
            _ => NOT_AVAILABLE.to_string(),
        };
        let language = movie
            .original_language
            .as_deref()
            .filter(|lang| !lang.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();
        let year = movie
            .release_date
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|year| !year.is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string();
        let poster_url = movie
            .poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{POSTER_BASE_URL}{path}"));

        Self {
            id: movie.id,
            title: movie.title.clone(),
            rating,
            language,
            year,
            poster_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MovieCardView, POSTER_BASE_URL};
    use crate::Movie;

    #[test]
    fn card_formats_display_fields() {
        let movie = Movie {
            id: 27205,
            title: "Inception".to_string(),
            poster_path: Some("/inception.jpg".to_string()),
            vote_average: Some(8.369),
            original_language: Some("en".to_string()),
            release_date: Some("2010-07-15".to_string()),
            overview: None,
        };

        let card = MovieCardView::from_movie(&movie);
        assert_eq!(card.rating, "8.4");
        assert_eq!(card.language, "en");
        assert_eq!(card.year, "2010");
        assert_eq!(
            card.poster_url.as_deref(),
            Some(format!("{POSTER_BASE_URL}/inception.jpg").as_str())
        );
    }

    #[test]
    fn card_falls_back_when_fields_missing() {
        let movie = Movie {
            id: 1,
            title: "Untitled".to_string(),
            vote_average: Some(0.0),
            release_date: Some(String::new()),
            ..Movie::default()
        };

        let card = MovieCardView::from_movie(&movie);
        assert_eq!(card.rating, "N/A");
        assert_eq!(card.language, "N/A");
        assert_eq!(card.year, "N/A");
        assert_eq!(card.poster_url, None);
    }
}
