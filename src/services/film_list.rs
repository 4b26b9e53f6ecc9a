use std::sync::Arc;

use reqwest::Url;

use crate::{
    config::Config,
    models::{Film, Genre, PageQuery},
    services::{
        api::{Collection, FilmApi},
        pagination::{LoadOutcome, LoadTicket, PageLoader, ScrollMetrics},
    },
    session::SessionStore,
};

/// A paginated, searchable film list screen
///
/// Owns its [`PageLoader`] exclusively. Each load reads the credential from the
/// session store, fetches one page through the [`FilmApi`] and merges the
/// result. Failures are logged and returned; nothing is retried.
pub struct FilmList {
    api: Arc<dyn FilmApi>,
    session: Arc<dyn SessionStore>,
    collection: Collection,
    genre: Option<Genre>,
    loader: PageLoader,
    scroll_threshold: f64,
    image_base_url: String,
}

impl std::fmt::Debug for FilmList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilmList")
            .field("collection", &self.collection)
            .field("genre", &self.genre)
            .field("loader", &self.loader)
            .finish()
    }
}

impl FilmList {
    /// The "films programmés" screen
    pub fn programmed(
        api: Arc<dyn FilmApi>,
        session: Arc<dyn SessionStore>,
        config: &Config,
    ) -> Self {
        Self::new(api, session, Collection::Programmed, None, config)
    }

    /// Recommendations for one genre
    pub fn recommendations(
        api: Arc<dyn FilmApi>,
        session: Arc<dyn SessionStore>,
        genre: Genre,
        config: &Config,
    ) -> Self {
        Self::new(api, session, Collection::Recommendations, Some(genre), config)
    }

    fn new(
        api: Arc<dyn FilmApi>,
        session: Arc<dyn SessionStore>,
        collection: Collection,
        genre: Option<Genre>,
        config: &Config,
    ) -> Self {
        Self {
            api,
            session,
            collection,
            genre,
            loader: PageLoader::new(config.page_size),
            scroll_threshold: config.scroll_threshold,
            image_base_url: config.image_base_url.clone(),
        }
    }

    pub fn loader(&self) -> &PageLoader {
        &self.loader
    }

    pub fn genre(&self) -> Option<Genre> {
        self.genre
    }

    /// Films matching the current search text
    pub fn visible(&self) -> impl Iterator<Item = &Film> + '_ {
        self.loader.visible()
    }

    pub fn poster_url(&self, film: &Film) -> Option<Url> {
        film.poster_url(&self.image_base_url)
    }

    /// Loads the first page when the screen opens
    pub async fn open(&mut self) -> LoadOutcome {
        let page_size = self.loader.page_size();
        self.load_page(1, page_size).await
    }

    /// Fetches `page` and appends its films
    pub async fn load_page(&mut self, page: u32, page_size: u32) -> LoadOutcome {
        match self.loader.begin_load(page, page_size) {
            Ok(ticket) => self.run(ticket).await,
            Err(rejection) => {
                tracing::debug!(page, ?rejection, "Load not started");
                LoadOutcome::Rejected(rejection)
            }
        }
    }

    /// Infinite-scroll trigger: loads the page after the cursor
    ///
    /// A no-op while a load is in flight or once the list is exhausted.
    pub async fn request_next_page(&mut self) -> LoadOutcome {
        match self.loader.begin_next_page() {
            Ok(ticket) => self.run(ticket).await,
            Err(rejection) => {
                tracing::debug!(
                    cursor = self.loader.cursor(),
                    ?rejection,
                    "Next page not requested"
                );
                LoadOutcome::Rejected(rejection)
            }
        }
    }

    /// Requests the next page when the scroll position nears the end of content
    pub async fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<LoadOutcome> {
        if metrics.near_end(self.scroll_threshold) {
            Some(self.request_next_page().await)
        } else {
            None
        }
    }

    /// Replaces the search text; never triggers a request
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.loader.set_search_text(text);
    }

    /// Detaches the screen; results of loads still in flight are dropped
    pub fn teardown(&mut self) {
        self.loader.teardown();
    }

    async fn run(&mut self, ticket: LoadTicket) -> LoadOutcome {
        let Some(credential) = self.session.get_credential().await else {
            tracing::warn!(
                collection = ?self.collection,
                page = ticket.page(),
                "No credential in session store, skipping load"
            );
            self.loader.abandon_load(ticket);
            return LoadOutcome::NoCredential;
        };

        let mut query = PageQuery::new(ticket.page(), ticket.page_size());
        if let Some(genre) = self.genre {
            query = query.with_genre(genre);
        }

        let result = self
            .api
            .fetch_page(self.collection, query, &credential)
            .await;

        if let Err(e) = &result {
            tracing::error!(
                error = %e,
                collection = ?self.collection,
                page = ticket.page(),
                "Failed to fetch films"
            );
        }

        let outcome = self.loader.complete_load(ticket, result);

        if let LoadOutcome::Loaded {
            page,
            received,
            has_more,
        } = &outcome
        {
            tracing::info!(
                collection = ?self.collection,
                page = *page,
                received = *received,
                has_more = *has_more,
                total = self.loader.films().len(),
                "Film page loaded"
            );
        }

        outcome
    }
}
