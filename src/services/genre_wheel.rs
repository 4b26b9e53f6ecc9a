use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    error::AppResult,
    models::Genre,
    services::{
        api::FilmApi,
        film_list::FilmList,
        pagination::LoadOutcome,
        wheel::{SpinConfig, SpinPlan, Wheel},
    },
    session::SessionStore,
};

/// Everything a finished spin produced
#[derive(Debug)]
pub struct SpinResult {
    pub plan: SpinPlan,
    pub genre: Genre,
    /// Recommendations list for `genre`, with its first page already requested
    pub recommendations: FilmList,
    pub load: LoadOutcome,
}

/// "Trouver mon film" screen: spins the wheel, then fetches recommendations
/// for the genre it lands on
pub struct GenreWheel {
    api: Arc<dyn FilmApi>,
    session: Arc<dyn SessionStore>,
    wheel: Wheel,
    spin_config: SpinConfig,
    settle_delay: Duration,
    config: Config,
}

impl std::fmt::Debug for GenreWheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenreWheel")
            .field("wheel", &self.wheel)
            .field("spin_config", &self.spin_config)
            .field("settle_delay", &self.settle_delay)
            .finish()
    }
}

impl GenreWheel {
    pub fn new(
        api: Arc<dyn FilmApi>,
        session: Arc<dyn SessionStore>,
        config: &Config,
    ) -> AppResult<Self> {
        Ok(Self {
            api,
            session,
            wheel: Wheel::new(),
            spin_config: SpinConfig::from_config(config)?,
            settle_delay: config.settle_delay(),
            config: config.clone(),
        })
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Spins with a freshly drawn plan
    ///
    /// Returns `None` when the wheel was not idle or the spin was torn down.
    pub async fn spin(&mut self) -> Option<SpinResult> {
        let plan = SpinPlan::draw(&mut rand::rng(), &self.spin_config);
        self.spin_with(plan).await
    }

    /// Spins with a given plan
    ///
    /// The future borrows the screen for the whole spin. Dropping it cancels
    /// the spin; call [`GenreWheel::teardown`] afterwards to release the wheel.
    pub async fn spin_with(&mut self, plan: SpinPlan) -> Option<SpinResult> {
        let Some(ticket) = self.wheel.start_spin(plan) else {
            tracing::debug!("Wheel already spinning, ignoring trigger");
            return None;
        };

        tracing::info!(
            target_angle = plan.target_angle,
            duration_ms = plan.duration.as_millis() as u64,
            "Wheel spinning"
        );

        tokio::time::sleep(plan.duration).await;

        let Some(genre) = self.wheel.settle(ticket) else {
            tracing::debug!("Spin invalidated before settling");
            return None;
        };

        tracing::info!(
            genre = %genre,
            rotation = self.wheel.rotation(),
            "Wheel settled"
        );

        tokio::time::sleep(self.settle_delay).await;

        let mut recommendations = FilmList::recommendations(
            self.api.clone(),
            self.session.clone(),
            genre,
            &self.config,
        );
        // The fetch counts as issued once the list exists, so the wheel may spin again
        self.wheel.finish(ticket);
        let load = recommendations.open().await;

        Some(SpinResult {
            plan,
            genre,
            recommendations,
            load,
        })
    }

    /// Returns the wheel to idle after a spin future was dropped
    pub fn teardown(&mut self) {
        self.wheel.teardown();
    }
}
