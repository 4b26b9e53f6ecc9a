//! Genre wheel: spin draws, angle-to-genre mapping and the spin state machine.
//!
//! Drawing a spin and mapping its terminal angle are independent pure
//! functions; [`Wheel`] only sequences them.

use std::ops::Range;
use std::time::Duration;

use rand::Rng;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::Genre,
};

/// Degrees in one revolution
pub const FULL_TURN: f64 = 360.0;

/// Reduces an angle to `[0, 360)`
///
/// Returns `None` for NaN and infinities.
pub fn normalize_angle(angle: f64) -> Option<f64> {
    if !angle.is_finite() {
        return None;
    }
    let normalized = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if normalized >= FULL_TURN {
        Some(0.0)
    } else {
        Some(normalized)
    }
}

/// Segment of a wheel with `buckets` equal segments that `angle` points at
///
/// `floor(normalized / (360 / buckets))`, always in `[0, buckets)`.
pub fn bucket_index(angle: f64, buckets: usize) -> Option<usize> {
    if buckets == 0 {
        return None;
    }
    let normalized = normalize_angle(angle)?;
    let segment = FULL_TURN / buckets as f64;
    let index = (normalized / segment).floor() as usize;
    // The quotient can round up to `buckets` just below 360
    Some(index.min(buckets - 1))
}

/// Genre selected by a wheel resting at `angle`
pub fn genre_for_angle(angle: f64) -> Option<Genre> {
    bucket_index(angle, Genre::ALL.len()).map(|idx| Genre::ALL[idx])
}

/// Ranges spins are drawn from
#[derive(Debug, Clone, PartialEq)]
pub struct SpinConfig {
    angle_range: Range<f64>,
    duration_range: Range<u64>,
}

impl SpinConfig {
    /// `angle_range` in degrees, `duration_range` in milliseconds
    pub fn new(angle_range: Range<f64>, duration_range: Range<u64>) -> AppResult<Self> {
        if !(angle_range.start.is_finite() && angle_range.end.is_finite())
            || angle_range.is_empty()
        {
            return Err(AppError::InvalidInput(format!(
                "Invalid spin angle range {:?}",
                angle_range
            )));
        }
        if duration_range.is_empty() {
            return Err(AppError::InvalidInput(format!(
                "Invalid spin duration range {:?}",
                duration_range
            )));
        }
        Ok(Self {
            angle_range,
            duration_range,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.spin_min_angle..config.spin_max_angle,
            config.spin_min_duration_ms..config.spin_max_duration_ms,
        )
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            angle_range: 3600.0..7200.0,
            duration_range: 2000..5000,
        }
    }
}

/// Target and duration of one spin, fixed when the spin starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub target_angle: f64,
    pub duration: Duration,
}

impl SpinPlan {
    /// Draws target and duration uniformly from the configured ranges
    pub fn draw<R: Rng>(rng: &mut R, config: &SpinConfig) -> Self {
        let target_angle = rng.random_range(config.angle_range.clone());
        let duration_ms = rng.random_range(config.duration_range.clone());
        Self {
            target_angle,
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Angle after `elapsed`, easing out from 0 to the target
    pub fn rotation_at(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target_angle;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = 1.0 - (1.0 - t).powi(3);
        self.target_angle * eased
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelState {
    Idle,
    Spinning(SpinPlan),
    Settled(Genre),
}

/// Handle for the spin currently owning the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinTicket {
    generation: u64,
}

/// Spin state machine: `Idle -> Spinning -> Settled -> Idle`
#[derive(Debug)]
pub struct Wheel {
    state: WheelState,
    rotation: f64,
    generation: u64,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Wheel {
    pub fn new() -> Self {
        Self {
            state: WheelState::Idle,
            rotation: 0.0,
            generation: 0,
        }
    }

    pub fn state(&self) -> WheelState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == WheelState::Idle
    }

    /// Resting angle, or the terminal angle once a spin settled
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Angle to render `elapsed` after the current spin started
    pub fn rotation_at(&self, elapsed: Duration) -> f64 {
        match self.state {
            WheelState::Spinning(plan) => plan.rotation_at(elapsed),
            _ => self.rotation,
        }
    }

    /// Starts a spin; ignored unless the wheel is idle
    pub fn start_spin(&mut self, plan: SpinPlan) -> Option<SpinTicket> {
        if !self.is_idle() {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.rotation = 0.0;
        self.state = WheelState::Spinning(plan);
        Some(SpinTicket {
            generation: self.generation,
        })
    }

    /// Ends the animation and selects the genre under the terminal angle
    pub fn settle(&mut self, ticket: SpinTicket) -> Option<Genre> {
        if ticket.generation != self.generation {
            return None;
        }
        let WheelState::Spinning(plan) = self.state else {
            return None;
        };

        self.rotation = plan.target_angle;
        match genre_for_angle(plan.target_angle) {
            Some(genre) => {
                self.state = WheelState::Settled(genre);
                Some(genre)
            }
            None => {
                self.state = WheelState::Idle;
                None
            }
        }
    }

    /// Returns a settled wheel to idle so it can spin again
    pub fn finish(&mut self, ticket: SpinTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        if let WheelState::Settled(_) = self.state {
            self.state = WheelState::Idle;
            true
        } else {
            false
        }
    }

    /// Invalidates the current spin; its settle and finish become no-ops
    pub fn teardown(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.state = WheelState::Idle;
    }
}
