//! Component trait for building reusable view pieces
//!
//! Components encapsulate the logic for creating nodes with specific
//! behavior and styling. The swiper controls (badge, button, dots, ...) are
//! all components.
//!
//! # Example
//!
//! ```ignore
//! use astra_swiper::{Component, Node, NodeAction};
//!
//! struct Arrow {
//!     action: NodeAction,
//! }
//!
//! impl Component for Arrow {
//!     fn node(self) -> Node {
//!         Node::new().with_action(self.action)
//!     }
//! }
//! ```

use crate::Node;

/// A component that can be rendered as a view node
///
/// The trait takes `self` by value: components are created inline
/// (`Badge::new().node()`), can move owned data into the node they produce,
/// and are done once the node exists.
pub trait Component {
    /// Build the node tree for this component
    fn node(self) -> Node;
}

/// Extension trait for optional components
pub trait ComponentExt: Component + Sized {
    /// Render this component only if `condition` holds
    fn when(self, condition: bool) -> Option<Node> {
        condition.then(|| self.node())
    }
}

impl<T: Component> ComponentExt for T {}
