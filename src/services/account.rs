use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Favorite, UserProfile},
    services::api::FilmApi,
    session::{Credential, SessionStore},
};

/// Login, registration and the home screen's user data
pub struct AccountService {
    api: Arc<dyn FilmApi>,
    session: Arc<dyn SessionStore>,
}

impl AccountService {
    pub fn new(api: Arc<dyn FilmApi>, session: Arc<dyn SessionStore>) -> Self {
        Self { api, session }
    }

    /// Logs in and stores the issued credential
    pub async fn login(&self, username: &str, password: &str) -> AppResult<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "Username and password are required".to_string(),
            ));
        }

        let credential = self.api.login(username, password).await.map_err(|e| {
            tracing::warn!(error = %e, username = %username, "Login failed");
            e
        })?;
        self.session.set_credential(credential).await;

        tracing::info!(username = %username, "Logged in");
        Ok(())
    }

    /// Creates an account; passwords must match before anything is sent
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> AppResult<()> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "Username and password are required".to_string(),
            ));
        }
        if password != confirm_password {
            return Err(AppError::InvalidInput("Passwords do not match".to_string()));
        }

        self.api
            .register(username, password, confirm_password)
            .await?;

        tracing::info!(username = %username, "Account registered");
        Ok(())
    }

    pub async fn logout(&self) {
        self.session.clear().await;
        tracing::info!("Logged out");
    }

    pub async fn profile(&self) -> AppResult<UserProfile> {
        let credential = self.credential().await?;
        self.api.current_user(&credential).await
    }

    pub async fn favorites(&self) -> AppResult<Vec<Favorite>> {
        let credential = self.credential().await?;
        self.api.favorites(&credential).await
    }

    async fn credential(&self) -> AppResult<Credential> {
        self.session.get_credential().await.ok_or_else(|| {
            tracing::warn!("No credential in session store");
            AppError::MissingCredential
        })
    }
}
