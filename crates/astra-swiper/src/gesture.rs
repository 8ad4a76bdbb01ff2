//! Gesture-to-offset mapping
//!
//! Recognizing a pan from raw pointer input is the host's job. The host feeds
//! phase-tagged [`GestureEvent`]s (start, updates, end, finalize) and the
//! [`GestureMapper`] turns them into [`GestureOutcome`]s for the swiper: move
//! the drag value, snap back, or commit to a neighbor.
//!
//! # State Machine
//!
//! ```text
//! Idle ── Start ──► Pending ── |t| >= capture distance ──► Dragging
//!   ▲                  │                                      │ End
//!   │                  │ End / Finalize                        ▼
//!   └──── Finalize ────┴──────────────── SnappingBack | Committing(dir)
//! ```
//!
//! A `Start` refused by the [`GestureGate`] moves to `Denied`, where every
//! event is ignored until the attempt's `Finalize`.

use std::fmt;

use crate::index::Direction;
use crate::layout::Orientation;

/// Phase-tagged pan event from the host's gesture recognizer
///
/// Translations are cumulative since the gesture began, in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A pan attempt began
    Start,
    /// The pointer moved
    Update { translation: glam::Vec2 },
    /// The pointer was released
    End { translation: glam::Vec2 },
    /// The attempt is over, whatever its outcome (always last)
    Finalize,
}

impl GestureEvent {
    pub fn update(x: f32, y: f32) -> Self {
        Self::Update {
            translation: glam::Vec2::new(x, y),
        }
    }

    pub fn end(x: f32, y: f32) -> Self {
        Self::End {
            translation: glam::Vec2::new(x, y),
        }
    }

    /// A complete pan along `orientation`: start, one update per step, end, finalize
    pub fn pan(orientation: Orientation, steps: &[f32]) -> Vec<GestureEvent> {
        let mut events = Vec::with_capacity(steps.len() + 3);
        events.push(GestureEvent::Start);
        events.extend(steps.iter().map(|&t| GestureEvent::Update {
            translation: orientation.along(t),
        }));
        let last = steps.last().copied().unwrap_or(0.0);
        events.push(GestureEvent::End {
            translation: orientation.along(last),
        });
        events.push(GestureEvent::Finalize);
        events
    }
}

/// Decides whether a pan attempt belongs to the swiper
pub struct GestureGate {
    enabled: Box<dyn Fn() -> bool>,
    /// Distance along the axis the pointer must travel before the pan is captured
    min_distance_to_capture: f32,
}

impl GestureGate {
    pub const DEFAULT_CAPTURE_DISTANCE: f32 = 5.0;

    pub fn new(min_distance_to_capture: f32) -> Self {
        Self {
            enabled: Box::new(|| true),
            min_distance_to_capture: min_distance_to_capture.max(0.0),
        }
    }

    /// Set the predicate re-evaluated at the start of every pan attempt
    pub fn with_enabled(mut self, enabled: impl Fn() -> bool + 'static) -> Self {
        self.enabled = Box::new(enabled);
        self
    }

    pub fn min_distance_to_capture(&self) -> f32 {
        self.min_distance_to_capture
    }

    pub fn allows(&self) -> bool {
        (self.enabled)()
    }
}

impl Default for GestureGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPTURE_DISTANCE)
    }
}

impl fmt::Debug for GestureGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureGate")
            .field("min_distance_to_capture", &self.min_distance_to_capture)
            .finish_non_exhaustive()
    }
}

/// Current phase of the pan state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    /// Refused by the gate; waiting for the attempt to finalize
    Denied,
    /// Started but not yet past the capture distance
    Pending,
    Dragging,
    SnappingBack,
    Committing(Direction),
}

impl GesturePhase {
    /// Whether the pan was captured by the swiper
    pub fn is_captured(self) -> bool {
        matches!(
            self,
            GesturePhase::Dragging | GesturePhase::SnappingBack | GesturePhase::Committing(_)
        )
    }
}

/// What the swiper has to do in response to a gesture event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to do
    Ignored,
    /// A pan attempt passed the gate: pause autoplay
    Began,
    /// The pan was just captured: pin the offset, then follow `translation`
    Captured { translation: f32 },
    /// Follow the pointer
    Moved { translation: f32 },
    /// Released below the commit threshold: animate back to rest
    SnapBack,
    /// Released past the threshold: navigate one step
    Commit(Direction),
    /// The attempt that began is over: resume autoplay
    Finalized,
}

/// Maps pan events to drag values and navigation decisions
#[derive(Debug)]
pub struct GestureMapper {
    phase: GesturePhase,
    gate: GestureGate,
    orientation: Orientation,
    rtl: bool,
    min_distance_for_action: f32,
    translation: f32,
}

impl GestureMapper {
    pub const DEFAULT_MIN_DISTANCE_FOR_ACTION: f32 = 0.2;

    pub fn new(orientation: Orientation, rtl: bool, min_distance_for_action: f32, gate: GestureGate) -> Self {
        Self {
            phase: GesturePhase::Idle,
            gate,
            orientation,
            rtl,
            min_distance_for_action,
            translation: 0.0,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Latest axis translation of the current pan
    pub fn translation(&self) -> f32 {
        self.translation
    }

    pub fn set_gate(&mut self, gate: GestureGate) {
        self.gate = gate;
    }

    /// Direction implied by a release translation
    ///
    /// Dragging towards the start edge (positive translation in left-to-right
    /// layouts) reveals the previous slide. Horizontal right-to-left layouts
    /// mirror this; vertical never does.
    pub fn direction_for(&self, translation: f32) -> Direction {
        let mirrored = !self.orientation.is_vertical() && self.rtl;
        match (translation > 0.0, mirrored) {
            (true, false) | (false, true) => Direction::Prev,
            (true, true) | (false, false) => Direction::Next,
        }
    }

    /// Release decision for a translation; always a snap back without a measured axis
    pub fn release(&self, translation: f32, axis_size: Option<f32>) -> GestureOutcome {
        let Some(axis_size) = axis_size else {
            return GestureOutcome::SnapBack;
        };

        if translation.abs() < axis_size * self.min_distance_for_action {
            GestureOutcome::SnapBack
        } else {
            GestureOutcome::Commit(self.direction_for(translation))
        }
    }

    /// Feed one event; `axis_size` is `None` while the layout is unmeasured
    pub fn handle(&mut self, event: &GestureEvent, axis_size: Option<f32>) -> GestureOutcome {
        match *event {
            GestureEvent::Start => {
                self.translation = 0.0;
                if self.gate.allows() {
                    self.set_phase(GesturePhase::Pending);
                    GestureOutcome::Began
                } else {
                    log::debug!("gesture: refused by gate");
                    self.set_phase(GesturePhase::Denied);
                    GestureOutcome::Ignored
                }
            }
            GestureEvent::Update { translation } => {
                let t = self.orientation.component(translation);
                match self.phase {
                    GesturePhase::Pending if t.abs() >= self.gate.min_distance_to_capture => {
                        self.translation = t;
                        self.set_phase(GesturePhase::Dragging);
                        GestureOutcome::Captured { translation: t }
                    }
                    GesturePhase::Dragging => {
                        self.translation = t;
                        GestureOutcome::Moved { translation: t }
                    }
                    _ => GestureOutcome::Ignored,
                }
            }
            GestureEvent::End { translation } => {
                if self.phase != GesturePhase::Dragging {
                    return GestureOutcome::Ignored;
                }
                let t = self.orientation.component(translation);
                self.translation = t;

                let outcome = self.release(t, axis_size);
                match outcome {
                    GestureOutcome::Commit(direction) => {
                        self.set_phase(GesturePhase::Committing(direction))
                    }
                    _ => self.set_phase(GesturePhase::SnappingBack),
                }
                outcome
            }
            GestureEvent::Finalize => {
                let began = !matches!(self.phase, GesturePhase::Idle | GesturePhase::Denied);
                self.set_phase(GesturePhase::Idle);
                if began {
                    GestureOutcome::Finalized
                } else {
                    GestureOutcome::Ignored
                }
            }
        }
    }

    /// Drop any in-progress pan without producing outcomes
    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.translation = 0.0;
    }

    fn set_phase(&mut self, phase: GesturePhase) {
        if self.phase != phase {
            log::debug!("gesture: {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    const AXIS: Option<f32> = Some(300.0);

    fn mapper(orientation: Orientation, rtl: bool) -> GestureMapper {
        GestureMapper::new(orientation, rtl, 0.2, GestureGate::default())
    }

    fn feed(mapper: &mut GestureMapper, events: &[GestureEvent]) -> Vec<GestureOutcome> {
        events.iter().map(|e| mapper.handle(e, AXIS)).collect()
    }

    #[test]
    fn test_commit_past_threshold() {
        let mut m = mapper(Orientation::Horizontal, false);
        let outcomes = feed(&mut m, &GestureEvent::pan(Orientation::Horizontal, &[-10.0, -80.0]));
        assert_eq!(
            outcomes,
            vec![
                GestureOutcome::Began,
                GestureOutcome::Captured { translation: -10.0 },
                GestureOutcome::Moved { translation: -80.0 },
                GestureOutcome::Commit(Direction::Next),
                GestureOutcome::Finalized,
            ]
        );
        assert_eq!(m.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_snap_back_below_threshold() {
        let mut m = mapper(Orientation::Horizontal, false);
        let outcomes = feed(&mut m, &GestureEvent::pan(Orientation::Horizontal, &[-30.0]));
        assert_eq!(outcomes[3], GestureOutcome::SnapBack);
        assert_eq!(outcomes[4], GestureOutcome::Finalized);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let m = mapper(Orientation::Horizontal, false);
        assert_eq!(m.release(60.0, AXIS), GestureOutcome::Commit(Direction::Prev));
        assert_eq!(m.release(59.9, AXIS), GestureOutcome::SnapBack);
    }

    #[test]
    fn test_rtl_mirrors_horizontal_only() {
        let ltr = mapper(Orientation::Horizontal, false);
        let rtl = mapper(Orientation::Horizontal, true);
        let vertical_rtl = mapper(Orientation::Vertical, true);

        assert_eq!(ltr.direction_for(100.0), Direction::Prev);
        assert_eq!(ltr.direction_for(-100.0), Direction::Next);
        assert_eq!(rtl.direction_for(100.0), Direction::Next);
        assert_eq!(rtl.direction_for(-100.0), Direction::Prev);
        assert_eq!(vertical_rtl.direction_for(100.0), Direction::Prev);
        assert_eq!(vertical_rtl.direction_for(-100.0), Direction::Next);
    }

    #[test]
    fn test_other_axis_is_ignored() {
        let mut m = mapper(Orientation::Vertical, false);
        let outcomes = feed(
            &mut m,
            &[
                GestureEvent::Start,
                GestureEvent::update(200.0, 2.0),
                GestureEvent::end(200.0, 2.0),
                GestureEvent::Finalize,
            ],
        );
        assert_eq!(
            outcomes,
            vec![
                GestureOutcome::Began,
                GestureOutcome::Ignored,
                GestureOutcome::Ignored,
                GestureOutcome::Finalized,
            ]
        );
        assert_eq!(m.phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_not_captured_below_capture_distance() {
        let mut m = mapper(Orientation::Horizontal, false);
        assert_eq!(m.handle(&GestureEvent::Start, AXIS), GestureOutcome::Began);
        assert_eq!(m.handle(&GestureEvent::update(4.0, 0.0), AXIS), GestureOutcome::Ignored);
        assert_eq!(m.phase(), GesturePhase::Pending);
        assert_eq!(
            m.handle(&GestureEvent::update(5.0, 0.0), AXIS),
            GestureOutcome::Captured { translation: 5.0 }
        );
    }

    #[test]
    fn test_gate_predicate_is_reevaluated_per_attempt() {
        let enabled = Rc::new(Cell::new(false));
        let flag = Rc::clone(&enabled);
        let gate = GestureGate::default().with_enabled(move || flag.get());
        let mut m = GestureMapper::new(Orientation::Horizontal, false, 0.2, gate);

        let pan = GestureEvent::pan(Orientation::Horizontal, &[-100.0]);
        assert!(feed(&mut m, &pan).iter().all(|o| *o == GestureOutcome::Ignored));

        enabled.set(true);
        assert!(feed(&mut m, &pan).contains(&GestureOutcome::Commit(Direction::Next)));
    }

    #[test]
    fn test_unmeasured_axis_snaps_back() {
        let mut m = mapper(Orientation::Horizontal, false);
        m.handle(&GestureEvent::Start, None);
        m.handle(&GestureEvent::update(-200.0, 0.0), None);
        assert_eq!(m.handle(&GestureEvent::end(-200.0, 0.0), None), GestureOutcome::SnapBack);
    }
}
