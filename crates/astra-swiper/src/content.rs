//! Leaf content of view nodes and the resolver that turns loosely typed
//! host customizations into nodes.

use std::fmt;
use std::rc::Rc;

use crate::color::{palette, Color};
use crate::layout::Size;
use crate::node::Node;
use crate::style::Style;

/// Content that can be displayed in a leaf node
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Text content with styling
    Text(TextContent),
}

/// Text content configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TextContent {
    /// The text to display
    pub text: String,
    /// Font size in logical pixels
    pub font_size: f32,
    /// Text color
    pub color: Color,
}

impl TextContent {
    pub const DEFAULT_FONT_SIZE: f32 = 14.0;

    /// Create new text content with default styling
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: Self::DEFAULT_FONT_SIZE,
            color: palette::BLACK,
        }
    }

    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Props of the default text component used when resolving [`RenderContent`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextProps {
    /// Text to show; `None` renders an empty text node
    pub text: Option<String>,
    /// Style applied to the text node
    pub style: Style,
}

impl TextProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Overlay `other` on top of these props (later wins)
    pub fn merge(&self, other: &TextProps) -> TextProps {
        TextProps {
            text: other.text.clone().or_else(|| self.text.clone()),
            style: self.style.merge(&other.style),
        }
    }
}

/// Error reported by a content builder closure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("content builder failed: {0}")]
    Builder(String),
}

/// Builder closure producing a node on demand
pub type ContentBuilder = Rc<dyn Fn() -> Result<Node, ContentError>>;

/// Customizable content slot
///
/// Hosts customize placeholders and grid cells with whatever is convenient:
/// nothing, a flag asking for the default rendering, a string or number, a
/// ready-made node, a builder closure, or a set of props for the default
/// component.
#[derive(Clone, Default)]
pub enum RenderContent {
    /// Render nothing
    #[default]
    None,
    /// `true` renders the default component with default props, `false` renders nothing
    Flag(bool),
    /// Text rendered through the default component
    Text(String),
    /// Number rendered through the default component
    Number(f64),
    /// A node used as-is
    Node(Node),
    /// A closure called at render time
    Builder(ContentBuilder),
    /// Props for the default component, layered over its defaults
    Props(TextProps),
}

impl RenderContent {
    /// Wrap a builder closure
    pub fn builder(f: impl Fn() -> Result<Node, ContentError> + 'static) -> Self {
        Self::Builder(Rc::new(f))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, RenderContent::None | RenderContent::Flag(false))
    }
}

impl fmt::Debug for RenderContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderContent::None => f.write_str("None"),
            RenderContent::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            RenderContent::Text(text) => f.debug_tuple("Text").field(text).finish(),
            RenderContent::Number(n) => f.debug_tuple("Number").field(n).finish(),
            RenderContent::Node(node) => f.debug_tuple("Node").field(node).finish(),
            RenderContent::Builder(_) => f.write_str("Builder(..)"),
            RenderContent::Props(props) => f.debug_tuple("Props").field(props).finish(),
        }
    }
}

impl From<&str> for RenderContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RenderContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for RenderContent {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<f64> for RenderContent {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for RenderContent {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<Node> for RenderContent {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<TextProps> for RenderContent {
    fn from(props: TextProps) -> Self {
        Self::Props(props)
    }
}

impl<T: Into<RenderContent>> From<Option<T>> for RenderContent {
    fn from(value: Option<T>) -> Self {
        value.map_or(RenderContent::None, Into::into)
    }
}

/// The default text component
pub fn text_node(props: &TextProps) -> Node {
    let mut text = TextContent::new(props.text.clone().unwrap_or_default());
    if let Some(color) = props.style.text_color {
        text.color = color;
    }
    if let Some(font_size) = props.style.font_size {
        text.font_size = font_size;
    }

    Node::new()
        .with_width(Size::FitContent)
        .with_height(Size::FitContent)
        .with_style(props.style.clone())
        .with_content(Content::Text(text))
}

/// Resolve a content slot into a node
///
/// `component` renders the non-node shapes (flag, text, number, props) with
/// `defaults` as its base props. Failures never propagate: a failing builder
/// or a value that cannot be shown is logged and renders nothing, so one bad
/// customization cannot take the rest of the widget down.
pub fn render_content(
    component: impl Fn(&TextProps) -> Node,
    content: &RenderContent,
    defaults: &TextProps,
) -> Option<Node> {
    match content {
        RenderContent::None | RenderContent::Flag(false) => None,
        RenderContent::Flag(true) => Some(component(defaults)),
        RenderContent::Node(node) => Some(node.clone()),
        RenderContent::Builder(build) => match build() {
            Ok(node) => Some(node),
            Err(err) => {
                log::warn!("error calling render function: {err}");
                None
            }
        },
        RenderContent::Text(text) => Some(component(&defaults.merge(&TextProps::new(text)))),
        RenderContent::Number(n) if n.is_finite() => {
            Some(component(&defaults.merge(&TextProps::new(n.to_string()))))
        }
        RenderContent::Number(n) => {
            log::warn!("unsupported content value: {n}");
            None
        }
        RenderContent::Props(props) => Some(component(&defaults.merge(props))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(node: &Node) -> Option<&str> {
        match node.content()? {
            Content::Text(text) => Some(text.text.as_str()),
        }
    }

    #[test]
    fn test_nothing_renders_nothing() {
        let defaults = TextProps::default();
        assert!(render_content(text_node, &RenderContent::None, &defaults).is_none());
        assert!(render_content(text_node, &false.into(), &defaults).is_none());
        assert!(render_content(text_node, &None::<&str>.into(), &defaults).is_none());
    }

    #[test]
    fn test_true_renders_default_component() {
        let defaults = TextProps::new("placeholder");
        let node = render_content(text_node, &true.into(), &defaults).unwrap();
        assert_eq!(text_of(&node), Some("placeholder"));
    }

    #[test]
    fn test_text_and_numbers() {
        let defaults = TextProps::default().with_style(Style::text(palette::PRIMARY));
        let node = render_content(text_node, &"Done".into(), &defaults).unwrap();
        assert_eq!(text_of(&node), Some("Done"));
        assert_eq!(node.style().text_color, Some(palette::PRIMARY));

        let node = render_content(text_node, &3_i64.into(), &defaults).unwrap();
        assert_eq!(text_of(&node), Some("3"));

        assert!(render_content(text_node, &f64::NAN.into(), &defaults).is_none());
    }

    #[test]
    fn test_node_passes_through() {
        let custom = Node::new().with_id("custom");
        let node = render_content(text_node, &custom.clone().into(), &TextProps::default());
        assert_eq!(node, Some(custom));
    }

    #[test]
    fn test_failing_builder_renders_nothing() {
        let ok = RenderContent::builder(|| Ok(Node::new().with_id("built")));
        let failing = RenderContent::builder(|| Err(ContentError::Builder("boom".into())));

        let defaults = TextProps::default();
        assert!(render_content(text_node, &ok, &defaults).is_some());
        assert!(render_content(text_node, &failing, &defaults).is_none());
    }

    #[test]
    fn test_props_layer_over_defaults() {
        let defaults = TextProps::new("Next").with_style(Style {
            font_size: Some(12.0),
            text_color: Some(palette::WHITE),
            ..Default::default()
        });
        let props = TextProps {
            text: None,
            style: Style::text(palette::ERROR),
        };

        let node = render_content(text_node, &props.into(), &defaults).unwrap();
        assert_eq!(text_of(&node), Some("Next"));
        let Some(Content::Text(text)) = node.content() else {
            panic!("expected text content");
        };
        assert_eq!(text.color, palette::ERROR);
        assert_eq!(text.font_size, 12.0);
    }
}
