//! Spring-driven animation of the drag value
//!
//! The swipe area is translated by `offset + drag`. While a gesture is active
//! the drag value follows the finger; afterwards the [`AnimationDriver`]
//! springs it either back to 0 (snap-back) or to the distance of the newly
//! committed slide.
//!
//! The physical stepper is pluggable through [`Interpolator`], so hosts can
//! swap in their platform's animation engine and tests can settle
//! synchronously with [`ImmediateInterpolator`].

use std::time::Duration;

use astra_swiper_macros::WithBuilders;

/// Maximum dt per integration step (4ms). Larger deltas are subdivided.
const MAX_STEP_SECS: f32 = 0.004;

/// Displacement (px) below which the spring may come to rest
const REST_DISPLACEMENT: f32 = 0.01;

/// Speed (px/s) below which the spring may come to rest
const REST_SPEED: f32 = 2.0;

const MIN_STIFFNESS: f32 = 0.1;
const MIN_MASS: f32 = 0.001;

/// Physical parameters of the spring
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct SpringConfig {
    /// Velocity drag. Higher = less oscillation.
    pub damping: f32,
    /// Restoring force strength. Higher = faster response.
    pub stiffness: f32,
    /// Mass of the moving body. Lower = snappier.
    pub mass: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 20.0,
            stiffness: 120.0,
            mass: 0.4,
        }
    }
}

impl SpringConfig {
    /// Low stiffness, high damping. Smooth and slow.
    pub fn gentle() -> Self {
        Self {
            damping: 26.0,
            stiffness: 90.0,
            mass: 1.0,
        }
    }

    /// High stiffness, near-critical damping. Snappy.
    pub fn stiff() -> Self {
        Self {
            damping: 38.0,
            stiffness: 400.0,
            mass: 1.0,
        }
    }

    /// Damping coefficient at which the spring converges without overshoot
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }
}

/// Pluggable interpolation strategy
///
/// Implementations move a value from `from` to `to` over time and report when
/// they have settled. Calling `start` while a previous interpolation is
/// running overrides its target.
pub trait Interpolator {
    /// Begin interpolating from `from` towards `to`
    fn start(&mut self, from: f32, to: f32, config: &SpringConfig);

    /// Advance by `dt` and return the current value
    fn advance(&mut self, dt: Duration) -> f32;

    /// Current value
    fn value(&self) -> f32;

    /// Whether the value has come to rest at its target
    fn is_settled(&self) -> bool;

    /// Abandon the current interpolation, keeping the current value
    fn stop(&mut self);
}

/// Damped harmonic oscillator
///
/// `F = -stiffness * (x - target) - damping * v`, `a = F / mass`, integrated
/// with implicit (backward) Euler so stiff or heavily damped springs stay
/// stable at any step size. Starting a new interpolation while moving keeps
/// the current velocity, so retargeting mid-flight stays continuous.
#[derive(Debug, Clone)]
pub struct SpringInterpolator {
    position: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    settled: bool,
}

impl Default for SpringInterpolator {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            config: SpringConfig::default(),
            settled: true,
        }
    }
}

impl SpringInterpolator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    fn step(&mut self, dt: f32) {
        // v' = v + dt * a(x', v'), x' = x + dt * v', solved for v'
        let k = self.config.stiffness / self.config.mass;
        let c = self.config.damping / self.config.mass;
        let displacement = self.position - self.target;

        self.velocity = (self.velocity - dt * k * displacement) / (1.0 + dt * c + dt * dt * k);
        self.position += self.velocity * dt;
    }

    /// Jump to the target when the state is no longer representable
    fn recover_if_diverged(&mut self) {
        if self.position.is_finite() && self.velocity.is_finite() {
            return;
        }
        log::warn!(
            "spring: diverged with {:?}, snapping to target {}",
            self.config,
            self.target
        );
        self.position = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }

    fn check_rest(&mut self) {
        if (self.position - self.target).abs() < REST_DISPLACEMENT
            && self.velocity.abs() < REST_SPEED
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }
}

impl Interpolator for SpringInterpolator {
    fn start(&mut self, from: f32, to: f32, config: &SpringConfig) {
        if self.settled {
            self.velocity = 0.0;
        }
        self.position = from;
        self.target = to;
        self.config = SpringConfig {
            damping: config.damping.max(0.0),
            stiffness: config.stiffness.max(MIN_STIFFNESS),
            mass: config.mass.max(MIN_MASS),
        };
        self.settled = false;
        self.check_rest();
    }

    fn advance(&mut self, dt: Duration) -> f32 {
        if self.settled {
            return self.position;
        }

        let mut remaining = dt.as_secs_f32();
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }
        self.recover_if_diverged();
        if !self.settled {
            self.check_rest();
        }

        log::trace!(
            "spring: position {:.3} velocity {:.3} target {:.3}",
            self.position,
            self.velocity,
            self.target
        );
        self.position
    }

    fn value(&self) -> f32 {
        self.position
    }

    fn is_settled(&self) -> bool {
        self.settled
    }

    fn stop(&mut self) {
        self.velocity = 0.0;
        self.settled = true;
    }
}

/// Interpolator that jumps straight to its target
///
/// Useful for tests and for hosts honoring a reduced-motion preference.
#[derive(Debug, Clone, Default)]
pub struct ImmediateInterpolator {
    value: f32,
}

impl Interpolator for ImmediateInterpolator {
    fn start(&mut self, _from: f32, to: f32, _config: &SpringConfig) {
        self.value = to;
    }

    fn advance(&mut self, _dt: Duration) -> f32 {
        self.value
    }

    fn value(&self) -> f32 {
        self.value
    }

    fn is_settled(&self) -> bool {
        true
    }

    fn stop(&mut self) {}
}

/// Why an animation was started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPurpose {
    /// Return to the current slide without an index change
    SnapBack,
    /// Move to the slide at `index`, which is already active
    Commit { index: usize },
}

/// Settle notification of a completed animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub generation: u64,
    pub purpose: AnimationPurpose,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    generation: u64,
    target: f32,
    purpose: AnimationPurpose,
}

/// Drives the drag value towards animation targets
///
/// At most one animation is in flight. `animate_to` overrides the previous
/// target (last writer wins); the superseded animation never reports a settle.
pub struct AnimationDriver {
    interpolator: Box<dyn Interpolator>,
    spring: SpringConfig,
    drag: f32,
    in_flight: Option<InFlight>,
    generation: u64,
}

impl AnimationDriver {
    pub fn new(spring: SpringConfig) -> Self {
        Self::with_interpolator(spring, SpringInterpolator::new())
    }

    pub fn with_interpolator(spring: SpringConfig, interpolator: impl Interpolator + 'static) -> Self {
        Self {
            interpolator: Box::new(interpolator),
            spring,
            drag: 0.0,
            in_flight: None,
            generation: 0,
        }
    }

    /// Replace the interpolation strategy, abandoning any running animation
    pub fn set_interpolator(&mut self, interpolator: impl Interpolator + 'static) {
        self.in_flight = None;
        self.interpolator = Box::new(interpolator);
    }

    pub fn spring(&self) -> SpringConfig {
        self.spring
    }

    /// Current drag value
    pub fn drag(&self) -> f32 {
        self.drag
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Target of the running animation, if any
    pub fn target(&self) -> Option<f32> {
        self.in_flight.map(|f| f.target)
    }

    /// Set the drag value directly (gesture tracking), cancelling any animation
    pub fn set_drag(&mut self, value: f32) {
        self.cancel();
        self.drag = value;
    }

    /// Spring the drag value from its current value to `target`
    ///
    /// Returns the generation of the new animation.
    pub fn animate_to(&mut self, target: f32, purpose: AnimationPurpose) -> u64 {
        self.generation += 1;
        if let Some(previous) = self.in_flight {
            log::trace!(
                "animation {} superseded by {}",
                previous.generation,
                self.generation
            );
        }

        self.interpolator.start(self.drag, target, &self.spring);
        self.in_flight = Some(InFlight {
            generation: self.generation,
            target,
            purpose,
        });
        self.generation
    }

    /// Advance the running animation by `dt`
    ///
    /// Returns the settle notification once the animation comes to rest. The
    /// drag value is then reset to exactly 0 for snap-backs and commits, the
    /// caller folding a commit's distance into its settled offset.
    pub fn advance(&mut self, dt: Duration) -> Option<Settled> {
        let flight = self.in_flight?;

        self.drag = self.interpolator.advance(dt);
        if !self.interpolator.is_settled() {
            return None;
        }

        // Both purposes end on a rest position (0, or the commit offset that
        // the caller folds into its baseline), so no sub-pixel residue is kept.
        self.in_flight = None;
        self.drag = 0.0;

        Some(Settled {
            generation: flight.generation,
            purpose: flight.purpose,
        })
    }

    /// Abandon the running animation without a settle notification
    pub fn cancel(&mut self) {
        if self.in_flight.take().is_some() {
            self.interpolator.stop();
        }
    }

    /// Cancel any animation and put the drag value back to 0
    pub fn reset(&mut self) {
        self.cancel();
        self.drag = 0.0;
    }
}

impl std::fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("drag", &self.drag)
            .field("target", &self.target())
            .field("generation", &self.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run_until_settled(driver: &mut AnimationDriver, max_frames: usize) -> Option<Settled> {
        (0..max_frames).find_map(|_| driver.advance(FRAME))
    }

    #[test]
    fn test_spring_converges_to_target() {
        let mut spring = SpringInterpolator::new();
        spring.start(0.0, -300.0, &SpringConfig::default());
        assert!(!spring.is_settled());

        for _ in 0..300 {
            spring.advance(FRAME);
        }

        assert!(spring.is_settled());
        assert_eq!(spring.value(), -300.0);
    }

    #[test]
    fn test_spring_moves_towards_target() {
        let mut spring = SpringInterpolator::new();
        spring.start(100.0, 0.0, &SpringConfig::default());
        let after_one = spring.advance(FRAME);
        assert!(after_one < 100.0);
        assert!(after_one > 0.0);
    }

    #[test]
    fn test_spring_starting_at_target_is_settled() {
        let mut spring = SpringInterpolator::new();
        spring.start(5.0, 5.0, &SpringConfig::default());
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_retarget_keeps_velocity() {
        let mut spring = SpringInterpolator::new();
        spring.start(0.0, 100.0, &SpringConfig::default());
        spring.advance(FRAME);
        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        let value = spring.value();
        spring.start(value, 0.0, &SpringConfig::default());
        assert_eq!(spring.velocity(), velocity);
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn test_degenerate_config_is_clamped() {
        let mut spring = SpringInterpolator::new();
        let config = SpringConfig::default().with_mass(0.0).with_stiffness(-1.0);
        spring.start(0.0, 1.0, &config);
        let value = spring.advance(FRAME);
        assert!(value.is_finite());
    }

    fn assert_settles_finite(config: SpringConfig, dt: Duration, max_steps: usize) {
        let mut spring = SpringInterpolator::new();
        spring.start(0.0, -300.0, &config);

        for _ in 0..max_steps {
            let value = spring.advance(dt);
            assert!(value.is_finite(), "{config:?} produced {value}");
            assert!(value.abs() <= 600.0, "{config:?} overshot to {value}");
            if spring.is_settled() {
                assert_eq!(spring.value(), -300.0);
                return;
            }
        }
        panic!("{config:?} did not settle in {max_steps} steps");
    }

    #[test]
    fn test_stiff_spring_stays_finite_and_settles() {
        let config = SpringConfig::default()
            .with_stiffness(20_000.0)
            .with_mass(0.1)
            .with_damping(20.0);
        assert_settles_finite(config, FRAME, 200);
    }

    #[test]
    fn test_overdamped_spring_stays_finite_and_settles() {
        let config = SpringConfig::default().with_damping(2_000.0);
        let mut spring = SpringInterpolator::new();
        spring.start(0.0, -300.0, &config);
        for _ in 0..100 {
            let value = spring.advance(FRAME);
            assert!((-300.0..=0.0).contains(&value));
        }

        assert_settles_finite(config, Duration::from_secs(1), 400);
    }

    #[test]
    fn test_extreme_spring_snaps_to_target() {
        let config = SpringConfig::default()
            .with_stiffness(f32::MAX)
            .with_mass(0.001);
        assert_settles_finite(config, FRAME, 10);
    }

    #[test]
    fn test_critical_damping() {
        let config = SpringConfig::default().with_stiffness(100.0).with_mass(1.0);
        assert_eq!(config.critical_damping(), 20.0);
    }

    #[test]
    fn test_driver_settles_and_resets_drag() {
        let mut driver = AnimationDriver::new(SpringConfig::default());
        driver.set_drag(-30.0);
        let generation = driver.animate_to(0.0, AnimationPurpose::SnapBack);

        let settled = run_until_settled(&mut driver, 300).expect("spring should settle");
        assert_eq!(settled.generation, generation);
        assert_eq!(settled.purpose, AnimationPurpose::SnapBack);
        assert_eq!(driver.drag(), 0.0);
        assert!(!driver.is_animating());
    }

    #[test]
    fn test_driver_commit_resets_drag_to_zero() {
        let mut driver = AnimationDriver::with_interpolator(
            SpringConfig::default(),
            ImmediateInterpolator::default(),
        );
        driver.set_drag(-80.0);
        driver.animate_to(-300.0, AnimationPurpose::Commit { index: 1 });

        let settled = driver.advance(Duration::ZERO).unwrap();
        assert_eq!(settled.purpose, AnimationPurpose::Commit { index: 1 });
        assert_eq!(driver.drag(), 0.0);
    }

    #[test]
    fn test_driver_last_writer_wins() {
        let mut driver = AnimationDriver::new(SpringConfig::default());
        driver.set_drag(-100.0);
        let first = driver.animate_to(0.0, AnimationPurpose::SnapBack);
        driver.advance(FRAME);
        let second = driver.animate_to(-300.0, AnimationPurpose::Commit { index: 1 });
        assert!(second > first);
        assert_eq!(driver.target(), Some(-300.0));

        let settled = run_until_settled(&mut driver, 400).unwrap();
        assert_eq!(settled.generation, second);
        assert!(run_until_settled(&mut driver, 10).is_none());
    }

    #[test]
    fn test_driver_cancel_never_settles() {
        let mut driver = AnimationDriver::new(SpringConfig::default());
        driver.set_drag(50.0);
        driver.animate_to(0.0, AnimationPurpose::SnapBack);
        driver.advance(FRAME);
        driver.cancel();

        assert!(!driver.is_animating());
        assert!(driver.advance(FRAME).is_none());
        assert!(driver.drag() > 0.0);
    }

    #[test]
    fn test_set_drag_cancels_animation() {
        let mut driver = AnimationDriver::new(SpringConfig::default());
        driver.animate_to(-300.0, AnimationPurpose::Commit { index: 1 });
        driver.set_drag(12.0);
        assert!(!driver.is_animating());
        assert_eq!(driver.drag(), 12.0);
    }
}
