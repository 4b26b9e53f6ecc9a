use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

pub mod genre;
pub mod questionnaire;
pub mod user;

pub use genre::Genre;
pub use questionnaire::{DayRating, Mood, PreferredDuration, Questionnaire, QuestionnaireGenre};
pub use user::{Favorite, LoginRequest, LoginResponse, RegisterRequest, UserProfile};

/// Title shown for films the backend sent without one
pub const PLACEHOLDER_TITLE: &str = "Sans titre";

/// Identifier for a film, either assigned by the backend or synthesized locally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilmId {
    /// Backend identifier
    Remote(i64),
    /// Generated when the payload carries no identifier
    Synthetic(Uuid),
}

impl Display for FilmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilmId::Remote(id) => write!(f, "{}", id),
            FilmId::Synthetic(id) => write!(f, "local-{}", id),
        }
    }
}

/// A film as held by the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Film {
    pub id: FilmId,
    pub title: Option<String>,
    /// Path relative to the image base, or an absolute URL; see [`poster_url`]
    pub poster_path: Option<String>,
}

impl Film {
    /// Title to render, falling back to [`PLACEHOLDER_TITLE`]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(PLACEHOLDER_TITLE)
    }

    /// Case-insensitive substring match against the title
    ///
    /// An empty needle matches every film. A film without a title matches nothing else.
    pub fn title_contains(&self, needle_lowercase: &str) -> bool {
        if needle_lowercase.is_empty() {
            return true;
        }
        self.title
            .as_deref()
            .map(|title| title.to_lowercase().contains(needle_lowercase))
            .unwrap_or(false)
    }

    pub fn poster_url(&self, image_base_url: &str) -> Option<Url> {
        poster_url(image_base_url, self.poster_path.as_deref())
    }
}

/// Composes a displayable image URL from a poster path
///
/// Relative paths are joined onto `image_base_url`; a path that already parses
/// as an absolute URL is used unchanged. Returns `None` when the path is absent
/// or blank, or when the result is not a valid URL.
pub fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<Url> {
    let path = poster_path.map(str::trim).filter(|p| !p.is_empty())?;
    if let Ok(url) = Url::parse(path) {
        return Some(url);
    }
    let joined = format!(
        "{}/{}",
        image_base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).ok()
}

// ============================================================================
// Backend payloads
// ============================================================================

/// Raw film entry as returned by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct ApiFilm {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl From<ApiFilm> for Film {
    fn from(film: ApiFilm) -> Self {
        let id = match film.id {
            Some(id) => FilmId::Remote(id),
            None => FilmId::Synthetic(Uuid::new_v4()),
        };

        Film {
            id,
            title: film.title.filter(|t| !t.trim().is_empty()),
            poster_path: film.poster_path,
        }
    }
}

/// A page of films, either a bare array or an object wrapping one
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilmPayload {
    List(Vec<ApiFilm>),
    Wrapped {
        #[serde(alias = "movies", alias = "recommendations")]
        results: Vec<ApiFilm>,
    },
}

impl FilmPayload {
    pub fn into_films(self) -> Vec<Film> {
        let raw = match self {
            FilmPayload::List(films) => films,
            FilmPayload::Wrapped { results } => results,
        };
        raw.into_iter().map(Film::from).collect()
    }
}

/// Query parameters for collection endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
}

impl PageQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            genre: None,
        }
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = Some(genre);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_film_id_display() {
        assert_eq!(FilmId::Remote(550).to_string(), "550");
        let id = Uuid::new_v4();
        assert_eq!(FilmId::Synthetic(id).to_string(), format!("local-{}", id));
    }

    #[test]
    fn test_api_film_with_all_fields() {
        let json = r#"{"id": 27205, "title": "Inception", "poster_path": "/inception.jpg"}"#;
        let film: Film = serde_json::from_str::<ApiFilm>(json).unwrap().into();
        assert_eq!(film.id, FilmId::Remote(27205));
        assert_eq!(film.display_title(), "Inception");
        assert_eq!(film.poster_path.as_deref(), Some("/inception.jpg"));
    }

    #[test]
    fn test_api_film_without_id_gets_synthetic_id() {
        let film: Film = serde_json::from_str::<ApiFilm>(r#"{"title": "Amélie"}"#)
            .unwrap()
            .into();
        assert!(matches!(film.id, FilmId::Synthetic(_)));
        assert_eq!(film.poster_path, None);
    }

    #[test]
    fn test_missing_or_blank_title_uses_placeholder() {
        let film: Film = serde_json::from_str::<ApiFilm>(r#"{"id": 1, "title": "  "}"#)
            .unwrap()
            .into();
        assert_eq!(film.title, None);
        assert_eq!(film.display_title(), PLACEHOLDER_TITLE);
    }

    #[test]
    fn test_title_contains_is_case_insensitive() {
        let json = r#"{"id": 1, "title": "Le Fabuleux Destin"}"#;
        let film: Film = serde_json::from_str::<ApiFilm>(json).unwrap().into();
        assert!(film.title_contains("fabuleux"));
        assert!(film.title_contains(""));
        assert!(!film.title_contains("matrix"));
    }

    #[test]
    fn test_untitled_film_only_matches_empty_search() {
        let film: Film = serde_json::from_str::<ApiFilm>(r#"{"id": 2}"#).unwrap().into();
        assert!(film.title_contains(""));
        assert!(!film.title_contains("sans"));
    }

    #[test]
    fn test_poster_url_joins_base_and_path() {
        let url = poster_url("https://image.tmdb.org/t/p/w500/", Some("/abc.jpg")).unwrap();
        assert_eq!(url.as_str(), "https://image.tmdb.org/t/p/w500/abc.jpg");

        let url = poster_url("https://image.tmdb.org/t/p/w500", Some("abc.jpg")).unwrap();
        assert_eq!(url.as_str(), "https://image.tmdb.org/t/p/w500/abc.jpg");
    }

    #[test]
    fn test_poster_url_keeps_absolute_path() {
        let url = poster_url(
            "https://image.tmdb.org/t/p/w500",
            Some("https://cdn.example.org/posters/amelie.jpg"),
        )
        .unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.org/posters/amelie.jpg");
    }

    #[test]
    fn test_poster_url_absent_path() {
        assert_eq!(poster_url("https://image.tmdb.org/t/p/w500", None), None);
        assert_eq!(poster_url("https://image.tmdb.org/t/p/w500", Some(" ")), None);
    }

    #[test]
    fn test_payload_bare_array() {
        let payload: FilmPayload =
            serde_json::from_str(r#"[{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]"#).unwrap();
        let films = payload.into_films();
        assert_eq!(films.len(), 2);
        assert_eq!(films[1].id, FilmId::Remote(2));
    }

    #[test]
    fn test_payload_wrapped_variants() {
        for key in ["results", "movies", "recommendations"] {
            let json = format!(r#"{{"{}": [{{"id": 7, "title": "Heat"}}]}}"#, key);
            let payload: FilmPayload = serde_json::from_str(&json).unwrap();
            assert_eq!(payload.into_films()[0].display_title(), "Heat");
        }
    }

    #[test]
    fn test_page_query_serialization() {
        let query = PageQuery::new(2, 6);
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            serde_json::json!({"page": 2, "limit": 6})
        );

        let query = PageQuery::new(1, 10).with_genre(Genre::Thriller);
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            serde_json::json!({"page": 1, "limit": 10, "genre": "thriller"})
        );
    }
}
