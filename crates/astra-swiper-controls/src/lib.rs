//! # astra-swiper-controls
//!
//! Default presentation for `astra-swiper`.
//!
//! This crate turns a [`Swiper`](astra_swiper::Swiper) into a view tree of
//! [`Node`](astra_swiper::Node)s: the clipped swipe area holding every slide
//! and the overlay with prev/next buttons and pagination dots. Presses are
//! reported as [`NodeAction`](astra_swiper::NodeAction)s for the host to
//! hand back to `Swiper::dispatch`.

mod badge;
mod button;
mod controls;
mod swiper_view;

pub use badge::*;
pub use button::*;
pub use controls::*;
pub use swiper_view::*;
