use crate::content::Content;
use crate::layout::{Align, Flow, Overflow, Position, Size};
use crate::style::Style;

/// Unique identifier for a node, used by hosts for event routing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(String);

impl NodeId {
    /// Create a new NodeId from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Navigation request attached to a pressable node
///
/// Nodes are plain data, so instead of closures they carry the action to
/// dispatch back into the swiper when the host reports a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeAction {
    Prev,
    Next,
    GoTo(usize),
}

/// A declarative view node produced by the swiper and its controls
///
/// The host's rendering engine owns layout and painting; this tree only
/// describes sizes, placement, styles and what happens on press.
///
/// All fields are private - use the builder pattern methods (`with_*`) to configure nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    id: Option<NodeId>,
    width: Size,
    height: Size,
    /// Flex grow factor, 0 means "do not grow"
    flex: f32,
    position: Position,
    /// Post-layout translation (x, y) in logical pixels
    translation: glam::Vec2,
    flow: Flow,
    /// Main axis alignment of children
    justify: Align,
    /// Cross axis alignment of children
    align: Align,
    overflow: Overflow,
    style: Style,
    content: Option<Content>,
    children: Vec<Node>,
    action: Option<NodeAction>,
}

impl Node {
    /// Create a new node with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node ID
    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&NodeId> {
        self.id.as_ref()
    }

    pub fn with_width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn width(&self) -> Size {
        self.width
    }

    pub fn with_height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn height(&self) -> Size {
        self.height
    }

    /// Set both width and height to fixed pixel values
    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(Size::lpx(width))
            .with_height(Size::lpx(height))
    }

    pub fn with_flex(mut self, flex: f32) -> Self {
        self.flex = flex;
        self
    }

    pub fn flex(&self) -> f32 {
        self.flex
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Set the translation (post-layout offset)
    pub fn with_translation(mut self, translation: glam::Vec2) -> Self {
        self.translation = translation;
        self
    }

    pub fn translation(&self) -> glam::Vec2 {
        self.translation
    }

    pub fn with_flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    pub fn flow(&self) -> Flow {
        self.flow
    }

    pub fn with_justify(mut self, justify: Align) -> Self {
        self.justify = justify;
        self
    }

    pub fn justify(&self) -> Align {
        self.justify
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Set the style, replacing any previous one
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Set the content. Content nodes are leaves; existing children are dropped.
    pub fn with_content(mut self, content: Content) -> Self {
        if !self.children.is_empty() {
            log::warn!("node {:?}: content replaces {} children", self.id, self.children.len());
            self.children.clear();
        }
        self.content = Some(content);
        self
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn is_content_node(&self) -> bool {
        self.content.is_some()
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Make this node pressable
    pub fn with_action(mut self, action: NodeAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn action(&self) -> Option<NodeAction> {
        self.action
    }

    /// Find a node by ID in this subtree (depth first)
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_ref().is_some_and(|own| own.as_str() == id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Collect every action in this subtree in document order
    pub fn actions(&self) -> Vec<NodeAction> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions(&self, out: &mut Vec<NodeAction>) {
        out.extend(self.action);
        for child in &self.children {
            child.collect_actions(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TextContent;

    #[test]
    fn test_find_and_actions() {
        let tree = Node::new()
            .with_id("root")
            .with_child(Node::new().with_id("prev").with_action(NodeAction::Prev))
            .with_child(
                Node::new()
                    .with_id("dots")
                    .with_child(Node::new().with_action(NodeAction::GoTo(0)))
                    .with_child(Node::new().with_id("dot_1").with_action(NodeAction::GoTo(1))),
            );

        assert!(tree.find("dot_1").is_some());
        assert!(tree.find("missing").is_none());
        assert_eq!(
            tree.actions(),
            vec![NodeAction::Prev, NodeAction::GoTo(0), NodeAction::GoTo(1)]
        );
    }

    #[test]
    fn test_content_node_is_leaf() {
        let node = Node::new()
            .with_child(Node::new())
            .with_content(Content::Text(TextContent::new("hi")));
        assert!(node.is_content_node());
        assert!(node.children().is_empty());
    }
}
