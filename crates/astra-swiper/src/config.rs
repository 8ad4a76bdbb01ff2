//! Swiper configuration

use astra_swiper_macros::WithBuilders;
use thiserror::Error;

use crate::animation::SpringConfig;
use crate::autoplay::MAX_TIMEOUT_SECS;
use crate::gesture::{GestureGate, GestureMapper};
use crate::layout::Orientation;

/// Rejected configuration value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("autoplay timeout must be finite and at most one day either way, got {0}")]
    Timeout(f32),
    #[error("min_distance_to_capture must be a finite, non-negative distance, got {0}")]
    CaptureDistance(f32),
    #[error("min_distance_for_action must be a finite, non-negative fraction, got {0}")]
    ActionDistance(f32),
    #[error("spring {field} is out of range: {value}")]
    Spring { field: &'static str, value: f32 },
}

/// Behavior of a [`Swiper`](crate::Swiper)
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct SwiperConfig {
    /// Movement axis
    pub orientation: Orientation,
    /// Initially active slide, clamped into the slide range
    pub from: usize,
    /// Wrap around at both ends
    pub loop_slides: bool,
    /// Autoplay interval in seconds. 0 disables autoplay, negative goes backwards.
    pub timeout: f32,
    /// Spring used for snap-back and commit animations
    pub spring: SpringConfig,
    /// Distance (px) a pan must travel along the axis before it is captured
    pub min_distance_to_capture: f32,
    /// Fraction of the axis size a released pan must exceed to change slides
    pub min_distance_for_action: f32,
    /// Right-to-left layout. Mirrors horizontal offsets and gestures.
    pub rtl: bool,
    /// Place the inner container at the measured position instead of relative to the root
    pub position_fixed: bool,
    /// Render the prev/next buttons and dots
    pub controls_enabled: bool,
}

impl Default for SwiperConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            from: 0,
            loop_slides: false,
            timeout: 0.0,
            spring: SpringConfig::default(),
            min_distance_to_capture: GestureGate::DEFAULT_CAPTURE_DISTANCE,
            min_distance_for_action: GestureMapper::DEFAULT_MIN_DISTANCE_FOR_ACTION,
            rtl: false,
            position_fixed: false,
            controls_enabled: true,
        }
    }
}

impl SwiperConfig {
    pub fn horizontal() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self::default().with_orientation(Orientation::Vertical)
    }

    /// Check every field, reporting the first invalid one
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_timeout(self.timeout)?;
        check_capture_distance(self.min_distance_to_capture)?;
        check_action_distance(self.min_distance_for_action)?;
        check_spring(&self.spring)?;
        Ok(())
    }

    /// Copy of this configuration with each invalid field replaced by its default
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let mut config = self;

        if let Err(err) = check_timeout(config.timeout) {
            log::warn!("swiper: {err}; autoplay disabled");
            config.timeout = defaults.timeout;
        }
        if let Err(err) = check_capture_distance(config.min_distance_to_capture) {
            log::warn!("swiper: {err}; using {}", defaults.min_distance_to_capture);
            config.min_distance_to_capture = defaults.min_distance_to_capture;
        }
        if let Err(err) = check_action_distance(config.min_distance_for_action) {
            log::warn!("swiper: {err}; using {}", defaults.min_distance_for_action);
            config.min_distance_for_action = defaults.min_distance_for_action;
        }
        if let Err(err) = check_spring(&config.spring) {
            log::warn!("swiper: {err}; using the default spring");
            config.spring = defaults.spring;
        }

        config
    }
}

fn check_timeout(timeout: f32) -> Result<(), ConfigError> {
    if timeout.is_finite() && timeout.abs() <= MAX_TIMEOUT_SECS {
        Ok(())
    } else {
        Err(ConfigError::Timeout(timeout))
    }
}

fn check_capture_distance(distance: f32) -> Result<(), ConfigError> {
    if distance.is_finite() && distance >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::CaptureDistance(distance))
    }
}

fn check_action_distance(fraction: f32) -> Result<(), ConfigError> {
    if fraction.is_finite() && fraction >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ActionDistance(fraction))
    }
}

fn check_spring(spring: &SpringConfig) -> Result<(), ConfigError> {
    let fields = [
        ("damping", spring.damping, spring.damping >= 0.0),
        ("stiffness", spring.stiffness, spring.stiffness > 0.0),
        ("mass", spring.mass, spring.mass > 0.0),
    ];

    for (field, value, in_range) in fields {
        if !value.is_finite() || !in_range {
            return Err(ConfigError::Spring { field, value });
        }
    }
    Ok(())
}
