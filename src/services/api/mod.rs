/// Remote CineMaison backend abstraction
///
/// Screens talk to the backend only through [`FilmApi`], so the loader and the
/// wheel can be driven against a mock in tests and against [`HttpFilmApi`] in
/// the app.
use crate::{
    error::AppResult,
    models::{Favorite, Film, PageQuery, Questionnaire, UserProfile},
    session::Credential,
};

pub mod http;

pub use http::HttpFilmApi;

/// Paginated film collections exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Films currently programmed
    Programmed,
    /// Recommendations, usually narrowed by genre
    Recommendations,
}

impl Collection {
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Programmed => "/api/movies",
            Collection::Recommendations => "/api/recommendations",
        }
    }
}

/// Trait for the authenticated backend
///
/// Every failure (transport or non-success status) comes back as an error value;
/// implementations never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FilmApi: Send + Sync {
    /// Fetch one page of a film collection
    async fn fetch_page(
        &self,
        collection: Collection,
        query: PageQuery,
        credential: &Credential,
    ) -> AppResult<Vec<Film>>;

    /// Exchange username and password for a session credential
    async fn login(&self, username: &str, password: &str) -> AppResult<Credential>;

    /// Create an account
    async fn register(&self, username: &str, password: &str, confirm_password: &str)
        -> AppResult<()>;

    async fn current_user(&self, credential: &Credential) -> AppResult<UserProfile>;

    async fn favorites(&self, credential: &Credential) -> AppResult<Vec<Favorite>>;

    /// Post questionnaire answers, returning recommended titles
    async fn submit_questionnaire(&self, answers: &Questionnaire) -> AppResult<Vec<String>>;
}
