//! # astra-swiper
//!
//! Backend agnostic swipeable carousel.
//!
//! This crate holds the carousel's state and logic with no dependency on a
//! windowing system or graphics API. The host reports layout, forwards pan
//! gestures and ticks the swiper once per frame; rendering the resulting
//! translation (and the controls from `astra-swiper-controls`) is up to it.
//!
//! ## Core Types
//!
//! - [`Swiper`] - Owner of all carousel state
//! - [`SwiperConfig`] - Orientation, looping, autoplay and gesture thresholds
//! - [`SlideSet`] - The immutable list of slides
//!
//! ## Behavior
//!
//! - [`IndexStateMachine`] - Active index, wraparound and offsets
//! - [`GestureMapper`] - Pan events to drag values and navigation decisions
//! - [`AnimationDriver`] - Springs the drag value to rest ([`Interpolator`])
//! - [`AutoplayTimer`] - Single-shot timer for automatic navigation
//!
//! ## View Building
//!
//! - [`Node`] - View tree node produced by components
//! - [`Component`] - Trait for reusable view pieces
//! - [`Style`] - Visual styling properties
//! - [`RenderContent`] - Flexible content slots resolved by [`render_content`]

mod animation;
mod autoplay;
mod color;
mod component;
mod config;
mod content;
mod gesture;
mod index;
mod layout;
mod node;
mod style;
mod swiper;

pub use animation::*;
pub use autoplay::*;
pub use color::*;
pub use component::*;
pub use config::*;
pub use content::*;
pub use gesture::*;
pub use index::*;
pub use layout::*;
pub use node::*;
pub use style::*;
pub use swiper::*;

pub use astra_swiper_macros::WithBuilders;
