/// HTTP implementation of the CineMaison backend
///
/// Authenticated endpoints send the session credential as a bearer token.
/// Error responses carry `{"message": "..."}` bodies; the message is kept for
/// diagnostics, falling back to the raw body when it is not JSON.
use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{
        questionnaire::QuestionnaireResponse, Favorite, Film, FilmPayload, LoginRequest,
        LoginResponse, PageQuery, Questionnaire, RegisterRequest, UserProfile,
    },
    services::api::{Collection, FilmApi},
    session::Credential,
};
use reqwest::{Client as HttpClient, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HttpFilmApi {
    http_client: HttpClient,
    api_url: String,
}

impl HttpFilmApi {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(config.request_timeout())
            .build()?;

        tracing::info!(api_url = %config.api_base_url, "Created backend client");

        Ok(Self {
            http_client,
            api_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Turns a non-success response into [`AppError::ExternalApi`]
    async fn ensure_success(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or(body);

        tracing::warn!(status = %status, message = %message, "Backend returned an error status");

        Err(AppError::ExternalApi { status, message })
    }
}

#[async_trait::async_trait]
impl FilmApi for HttpFilmApi {
    async fn fetch_page(
        &self,
        collection: Collection,
        query: PageQuery,
        credential: &Credential,
    ) -> AppResult<Vec<Film>> {
        let response = self
            .http_client
            .get(self.url(collection.path()))
            .bearer_auth(credential.as_str())
            .query(&query)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw film page response");

        let payload: FilmPayload = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(error = %e, "Failed to deserialize film page");
            AppError::Payload(e)
        })?;

        let films = payload.into_films();

        tracing::debug!(
            collection = ?collection,
            page = query.page,
            limit = query.limit,
            genre = ?query.genre,
            results = films.len(),
            "Film page fetched"
        );

        Ok(films)
    }

    async fn login(&self, username: &str, password: &str) -> AppResult<Credential> {
        let response = self
            .http_client
            .post(self.url("/api/login"))
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        let login: LoginResponse = Self::ensure_success(response).await?.json().await?;
        Ok(Credential::new(login.token))
    }

    async fn register(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> AppResult<()> {
        let response = self
            .http_client
            .post(self.url("/api/register"))
            .json(&RegisterRequest {
                username: username.to_string(),
                password: password.to_string(),
                confirm_password: confirm_password.to_string(),
            })
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    async fn current_user(&self, credential: &Credential) -> AppResult<UserProfile> {
        let response = self
            .http_client
            .get(self.url("/api/user"))
            .bearer_auth(credential.as_str())
            .send()
            .await?;

        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn favorites(&self, credential: &Credential) -> AppResult<Vec<Favorite>> {
        let response = self
            .http_client
            .get(self.url("/api/favorites"))
            .bearer_auth(credential.as_str())
            .send()
            .await?;

        Ok(Self::ensure_success(response).await?.json().await?)
    }

    async fn submit_questionnaire(&self, answers: &Questionnaire) -> AppResult<Vec<String>> {
        let response = self
            .http_client
            .post(self.url("/api/get-movie-recommendation"))
            .json(answers)
            .send()
            .await?;

        let body: QuestionnaireResponse = Self::ensure_success(response).await?.json().await?;
        Ok(body.recommendations)
    }
}
