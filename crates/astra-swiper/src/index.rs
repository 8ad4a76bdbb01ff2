//! Active slide index state machine
//!
//! Decides how a navigation delta maps to a new active index, applying either
//! loop wraparound or boundary clamping, and converts indices to pixel offsets.

use crate::layout::Orientation;

/// One-step navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Index delta of a single step in this direction
    pub const fn delta(self) -> i64 {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Outcome of resolving a navigation delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Requested delta
    pub delta: i64,
    /// Index before the final clamp (may lie outside `[0, count-1]` on wraparound)
    pub raw_index: i64,
    /// Index that becomes active on commit
    pub committed_index: usize,
    /// The request is not allowed (boundary without looping): snap back, no index change
    pub skip: bool,
}

/// Owner of the active slide index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexStateMachine {
    active: usize,
    count: usize,
    loop_slides: bool,
    orientation: Orientation,
    rtl: bool,
}

impl IndexStateMachine {
    /// Create the state machine, clamping `from` into `[0, count-1]`
    pub fn new(count: usize, from: usize, loop_slides: bool, orientation: Orientation, rtl: bool) -> Self {
        let active = from.min(count.saturating_sub(1));
        if active != from {
            log::debug!("swiper: starting index {from} clamped to {active} ({count} slides)");
        }

        Self {
            active,
            count,
            loop_slides,
            orientation,
            rtl,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn loop_slides(&self) -> bool {
        self.loop_slides
    }

    /// First slide and no wraparound available
    pub fn is_first(&self) -> bool {
        !self.loop_slides && self.active == 0
    }

    /// Last slide and no wraparound available
    pub fn is_last(&self) -> bool {
        !self.loop_slides && self.active + 1 >= self.count
    }

    /// Delta that moves from the active index to `target` (clamped into range)
    pub fn delta_to(&self, target: usize) -> i64 {
        let target = target.min(self.count.saturating_sub(1));
        target as i64 - self.active as i64
    }

    /// Resolve a navigation delta against the active index
    ///
    /// Stepping before the first slide wraps to `count + delta`. Stepping past
    /// the last slide (`active + 1 >= count`) lands on `-active + delta - 1`
    /// before clamping; the two formulas are intentionally asymmetric.
    pub fn resolve_delta(&self, delta: i64) -> Resolution {
        if self.count == 0 {
            return Resolution {
                delta,
                raw_index: 0,
                committed_index: 0,
                skip: true,
            };
        }

        let current = self.active as i64;
        let count = self.count as i64;

        let (raw_index, skip) = if delta < 0 && current <= 0 {
            if self.loop_slides {
                (count + delta, false)
            } else {
                (current, true)
            }
        } else if delta > 0 && current + 1 >= count {
            if self.loop_slides {
                (-current + delta - 1, false)
            } else {
                (current, true)
            }
        } else {
            (current + delta, false)
        };

        Resolution {
            delta,
            raw_index,
            committed_index: raw_index.clamp(0, count - 1) as usize,
            skip,
        }
    }

    /// Make a resolution's index active. Skipped resolutions are ignored.
    ///
    /// Returns `true` if the resolution was applied.
    pub fn commit(&mut self, resolution: &Resolution) -> bool {
        if resolution.skip {
            return false;
        }
        log::debug!(
            "swiper: index {} -> {} (delta {}, raw {})",
            self.active,
            resolution.committed_index,
            resolution.delta,
            resolution.raw_index
        );
        self.active = resolution.committed_index;
        true
    }

    /// Settled offset of slide `index` for the given axis size
    pub fn offset_for(&self, index: usize, axis_size: f32) -> f32 {
        axis_size * index as f32 * self.orientation.direction_sign(self.rtl)
    }

    /// Settled offset of the active slide
    pub fn offset(&self, axis_size: f32) -> f32 {
        self.offset_for(self.active, axis_size)
    }
}
