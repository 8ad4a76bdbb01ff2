//! The swiper state object
//!
//! [`Swiper`] owns every piece of carousel state and wires the parts
//! together: the layout tracker feeds the axis size to the index state
//! machine and the gesture mapper, whose decisions start animations on the
//! driver, while the autoplay timer periodically asks for the next slide.
//!
//! The host drives it:
//! - `on_mount(now)` / `on_unmount()` around the widget's lifetime
//! - `on_measure(layout)` after every layout pass
//! - `handle_gesture(event)` for pan events
//! - `tick(now, dt)` once per frame, which steps the animation and polls autoplay
//!
//! and reads back [`Swiper::translation`] to position the swipe area.

use std::fmt;
use std::time::{Duration, Instant};

use crate::animation::{AnimationDriver, AnimationPurpose, Interpolator, Settled};
use crate::autoplay::AutoplayTimer;
use crate::config::{ConfigError, SwiperConfig};
use crate::gesture::{GestureEvent, GestureGate, GestureMapper, GestureOutcome, GesturePhase};
use crate::index::{Direction, IndexStateMachine};
use crate::layout::{Layout, LayoutTracker, Orientation};
use crate::node::NodeAction;

/// Ordered, immutable list of slides
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSet<T> {
    slides: Vec<T>,
}

impl<T> SlideSet<T> {
    pub fn new(slides: impl IntoIterator<Item = T>) -> Self {
        Self {
            slides: slides.into_iter().collect(),
        }
    }

    pub fn count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.slides.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.slides
    }
}

impl<T> FromIterator<T> for SlideSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, T> IntoIterator for &'a SlideSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Everything the controls need to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsState {
    pub orientation: Orientation,
    pub count: usize,
    pub active_index: usize,
    /// On the first slide without looping
    pub is_first: bool,
    /// On the last slide without looping
    pub is_last: bool,
}

type Observer = Box<dyn FnMut(usize)>;

#[derive(Default)]
struct Observers {
    animation_start: Option<Observer>,
    animation_end: Option<Observer>,
    index_changed: Option<Observer>,
}

fn notify(observer: &mut Option<Observer>, index: usize) {
    if let Some(observer) = observer {
        observer(index);
    }
}

/// Swipeable carousel state
pub struct Swiper<T> {
    config: SwiperConfig,
    slides: SlideSet<T>,
    layout: LayoutTracker,
    index: IndexStateMachine,
    gestures: GestureMapper,
    driver: AnimationDriver,
    autoplay: AutoplayTimer,
    /// Offset pinned to the active slide; the swipe area sits at `baseline + drag`
    baseline: f32,
    mounted: bool,
    now: Option<Instant>,
    observers: Observers,
}

impl<T> Swiper<T> {
    /// Create a swiper, replacing invalid configuration values with their defaults
    pub fn new(config: SwiperConfig, slides: impl IntoIterator<Item = T>) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                log::warn!("swiper: invalid configuration ({err}), falling back to defaults");
                config.sanitized()
            }
        };
        Self::build(config, SlideSet::new(slides))
    }

    /// Create a swiper, rejecting invalid configuration
    pub fn try_new(config: SwiperConfig, slides: impl IntoIterator<Item = T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, SlideSet::new(slides)))
    }

    fn build(config: SwiperConfig, slides: SlideSet<T>) -> Self {
        let index = IndexStateMachine::new(
            slides.count(),
            config.from,
            config.loop_slides,
            config.orientation,
            config.rtl,
        );
        let gestures = GestureMapper::new(
            config.orientation,
            config.rtl,
            config.min_distance_for_action,
            GestureGate::new(config.min_distance_to_capture),
        );

        Self {
            slides,
            layout: LayoutTracker::new(),
            index,
            gestures,
            driver: AnimationDriver::new(config.spring),
            autoplay: AutoplayTimer::new(config.timeout),
            baseline: 0.0,
            mounted: false,
            now: None,
            observers: Observers::default(),
            config,
        }
    }

    /// Only accept pans while `enabled` returns true (checked at the start of each pan)
    pub fn with_gesture_gate(mut self, enabled: impl Fn() -> bool + 'static) -> Self {
        self.gestures
            .set_gate(GestureGate::new(self.config.min_distance_to_capture).with_enabled(enabled));
        self
    }

    /// Replace the spring stepper
    pub fn with_interpolator(mut self, interpolator: impl Interpolator + 'static) -> Self {
        self.driver.set_interpolator(interpolator);
        self
    }

    /// Called with the index being left whenever a programmatic navigation starts
    pub fn on_animation_start(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.observers.animation_start = Some(Box::new(f));
        self
    }

    /// Called with the active index whenever an animation settles
    pub fn on_animation_end(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.observers.animation_end = Some(Box::new(f));
        self
    }

    /// Called once per committed navigation with the new index
    pub fn on_index_changed(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.observers.index_changed = Some(Box::new(f));
        self
    }

    // Lifecycle

    pub fn on_mount(&mut self, now: Instant) {
        self.mounted = true;
        self.now = Some(now);
        self.fix_offset();
        self.autoplay.schedule(now);
    }

    /// Store a new measurement and re-pin the offset to the active slide
    ///
    /// Losing the measurement abandons any running animation, since its
    /// target was computed for the old size.
    pub fn on_measure(&mut self, layout: Layout) {
        if layout == self.layout.layout() {
            return;
        }
        self.layout.measure(layout);
        if !self.layout.is_measured() {
            log::debug!("swiper: layout collapsed, dropping drag and animation");
            self.driver.reset();
            return;
        }
        self.fix_offset();
        self.schedule_autoplay();
    }

    /// Stop autoplay and any running animation. Nothing fires afterwards.
    pub fn on_unmount(&mut self) {
        self.mounted = false;
        self.autoplay.cancel();
        self.autoplay.unsuspend();
        self.driver.cancel();
        self.gestures.reset();
    }

    /// Advance the animation by `dt` and fire autoplay if due
    pub fn tick(&mut self, now: Instant, dt: Duration) {
        self.now = Some(now);

        if let Some(settled) = self.driver.advance(dt) {
            self.settle(settled);
        }

        if self.mounted {
            if let Some(direction) = self.autoplay.poll(now) {
                self.go_to_neighbor(direction);
            }
        }
    }

    // Navigation

    pub fn go_to_prev(&mut self) {
        self.go_to_neighbor(Direction::Prev);
    }

    pub fn go_to_next(&mut self) {
        self.go_to_neighbor(Direction::Next);
    }

    pub fn go_to_neighbor(&mut self, direction: Direction) {
        self.fix_and_go(direction.delta());
    }

    /// Navigate to `index` (clamped into range). Does nothing for the active index.
    pub fn go_to(&mut self, index: usize) {
        let delta = self.index.delta_to(index);
        if delta != 0 {
            self.fix_and_go(delta);
        }
    }

    /// Perform a control's action
    pub fn dispatch(&mut self, action: NodeAction) {
        match action {
            NodeAction::Prev => self.go_to_prev(),
            NodeAction::Next => self.go_to_next(),
            NodeAction::GoTo(index) => self.go_to(index),
        }
    }

    // Gestures

    pub fn handle_gesture(&mut self, event: GestureEvent) {
        let axis_size = self.axis_size();
        match self.gestures.handle(&event, axis_size) {
            GestureOutcome::Ignored => {}
            GestureOutcome::Began => self.autoplay.suspend(),
            GestureOutcome::Captured { translation } => {
                self.fix_offset();
                if axis_size.is_some() {
                    self.driver.set_drag(translation);
                }
            }
            GestureOutcome::Moved { translation } => {
                if axis_size.is_some() {
                    self.driver.set_drag(translation);
                }
            }
            GestureOutcome::SnapBack if axis_size.is_none() => self.driver.reset(),
            GestureOutcome::SnapBack => {
                self.driver.animate_to(0.0, AnimationPurpose::SnapBack);
            }
            GestureOutcome::Commit(direction) => self.change_index(direction.delta()),
            GestureOutcome::Finalized => match self.clock() {
                Some(now) => self.autoplay.resume(now),
                None => self.autoplay.unsuspend(),
            },
        }
    }

    pub fn handle_gestures(&mut self, events: impl IntoIterator<Item = GestureEvent>) {
        for event in events {
            self.handle_gesture(event);
        }
    }

    // Queries

    pub fn config(&self) -> &SwiperConfig {
        &self.config
    }

    pub fn slides(&self) -> &SlideSet<T> {
        &self.slides
    }

    pub fn count(&self) -> usize {
        self.slides.count()
    }

    pub fn layout(&self) -> Layout {
        self.layout.layout()
    }

    pub fn active_index(&self) -> usize {
        self.index.active()
    }

    /// Settled offset of the swipe area (before the drag value)
    pub fn offset(&self) -> f32 {
        self.baseline
    }

    pub fn drag_value(&self) -> f32 {
        self.driver.drag()
    }

    /// Translation to apply to the swipe area
    pub fn translation(&self) -> glam::Vec2 {
        self.config.orientation.along(self.baseline + self.driver.drag())
    }

    pub fn is_first(&self) -> bool {
        self.index.is_first()
    }

    pub fn is_last(&self) -> bool {
        self.index.is_last()
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// Deadline of the pending autoplay step, if any
    pub fn autoplay_deadline(&self) -> Option<Instant> {
        self.autoplay.deadline()
    }

    pub fn controls_state(&self) -> ControlsState {
        ControlsState {
            orientation: self.config.orientation,
            count: self.count(),
            active_index: self.active_index(),
            is_first: self.is_first(),
            is_last: self.is_last(),
        }
    }

    // Internals

    fn axis_size(&self) -> Option<f32> {
        self.layout.axis_size(self.config.orientation)
    }

    fn clock(&self) -> Option<Instant> {
        if self.mounted {
            self.now
        } else {
            None
        }
    }

    fn schedule_autoplay(&mut self) {
        if let Some(now) = self.clock() {
            self.autoplay.schedule(now);
        }
    }

    /// Pin the offset to the active slide and drop the drag value
    fn fix_offset(&mut self) {
        let Some(axis_size) = self.axis_size() else {
            return;
        };
        self.baseline = self.index.offset(axis_size);
        self.driver.reset();
    }

    fn fix_and_go(&mut self, delta: i64) {
        if self.axis_size().is_none() {
            log::debug!("swiper: navigation ignored, layout not measured yet");
            return;
        }
        self.fix_offset();
        notify(&mut self.observers.animation_start, self.index.active());
        self.change_index(delta);
    }

    fn change_index(&mut self, delta: i64) {
        let Some(axis_size) = self.axis_size() else {
            return;
        };

        let resolution = self.index.resolve_delta(delta);
        if resolution.skip {
            log::debug!(
                "swiper: delta {delta} at index {} skipped, snapping back",
                self.index.active()
            );
            self.driver.animate_to(0.0, AnimationPurpose::SnapBack);
            return;
        }

        self.autoplay.cancel();
        self.index.commit(&resolution);
        notify(&mut self.observers.index_changed, resolution.committed_index);

        let target = self.index.offset(axis_size) - self.baseline;
        self.driver.animate_to(
            target,
            AnimationPurpose::Commit {
                index: resolution.committed_index,
            },
        );

        self.schedule_autoplay();
    }

    fn settle(&mut self, settled: Settled) {
        if let AnimationPurpose::Commit { .. } = settled.purpose {
            if let Some(axis_size) = self.axis_size() {
                self.baseline = self.index.offset(axis_size);
            }
        }
        log::debug!(
            "swiper: animation {} settled at index {}",
            settled.generation,
            self.index.active()
        );
        notify(&mut self.observers.animation_end, self.index.active());
    }
}

impl<T: fmt::Debug> fmt::Debug for Swiper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Swiper")
            .field("config", &self.config)
            .field("slides", &self.slides)
            .field("layout", &self.layout)
            .field("index", &self.index)
            .field("gestures", &self.gestures)
            .field("driver", &self.driver)
            .field("autoplay", &self.autoplay)
            .field("baseline", &self.baseline)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}
