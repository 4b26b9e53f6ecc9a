use std::sync::Arc;

use anyhow::Context;
use cinemaison::{
    services::{api::HttpFilmApi, AccountService, FilmList, GenreWheel, LoadOutcome},
    session::MemorySessionStore,
    Config,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinemaison=info")),
        )
        .init();

    let config = Config::from_env()?;
    let api = Arc::new(HttpFilmApi::new(&config)?);
    let session = Arc::new(MemorySessionStore::new());

    let username = std::env::var("CINEMAISON_USERNAME").context("CINEMAISON_USERNAME not set")?;
    let password = std::env::var("CINEMAISON_PASSWORD").context("CINEMAISON_PASSWORD not set")?;

    let account = AccountService::new(api.clone(), session.clone());
    account.login(&username, &password).await?;

    match account.profile().await {
        Ok(profile) => tracing::info!(username = %profile.username, "Bienvenue dans ton salon"),
        Err(e) => tracing::warn!(error = %e, "Could not fetch profile"),
    }

    let mut programmed = FilmList::programmed(api.clone(), session.clone(), &config);
    if let LoadOutcome::Loaded { .. } = programmed.open().await {
        for film in programmed.visible() {
            tracing::info!(
                id = %film.id,
                title = %film.display_title(),
                poster = ?programmed.poster_url(film).map(|u| u.to_string()),
                "Programmed film"
            );
        }
    }

    let mut wheel = GenreWheel::new(api, session, &config)?;
    if let Some(result) = wheel.spin().await {
        tracing::info!(genre = %result.genre.label(), "Genre selected");
        for film in result.recommendations.visible() {
            tracing::info!(title = %film.display_title(), "Recommended film");
        }
    }

    Ok(())
}
