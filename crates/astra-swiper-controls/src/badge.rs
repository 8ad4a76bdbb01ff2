//! Badge component
//!
//! A small pill with optional text. Without content it collapses to a "mini"
//! dot, which is what the swiper's pagination uses.

use astra_swiper::{
    palette, render_content, text_node, Align, Color, Component, Node, NodeAction, NodeId,
    RenderContent, Size, Spacing, Style, TextProps,
};
use astra_swiper_macros::WithBuilders;

/// Semantic color of a badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeStatus {
    #[default]
    Primary,
    Success,
    Warning,
    Error,
}

impl BadgeStatus {
    pub fn color(self) -> Color {
        match self {
            BadgeStatus::Primary => palette::PRIMARY,
            BadgeStatus::Success => palette::SUCCESS,
            BadgeStatus::Warning => palette::WARNING,
            BadgeStatus::Error => palette::ERROR,
        }
    }
}

/// Visual styling for a badge
#[derive(Debug, Clone, WithBuilders)]
pub struct BadgeStyle {
    /// Height (and minimum width) of a badge with content
    pub size: f32,
    /// Diameter of a badge without content
    pub mini_size: f32,
    /// Border color
    pub border_color: Color,
    /// Border width
    pub border_width: f32,
    /// Text color
    pub text_color: Color,
    /// Font size
    pub font_size: f32,
    /// Horizontal padding around the text
    pub text_padding: f32,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            size: 18.0,
            mini_size: 8.0,
            border_color: palette::WHITE,
            border_width: 0.5,
            text_color: palette::WHITE,
            font_size: 12.0,
            text_padding: 4.0,
        }
    }
}

/// A badge component
///
/// # Example
///
/// ```ignore
/// Badge::new()
///     .with_value("3")
///     .with_status(BadgeStatus::Error)
///     .node()
/// ```
#[derive(Debug, Clone, Default)]
pub struct Badge {
    id: Option<NodeId>,
    value: RenderContent,
    status: BadgeStatus,
    style: BadgeStyle,
    container_style: Style,
    badge_style: Style,
    text_style: Style,
    action: Option<NodeAction>,
}

impl Badge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Content shown inside the badge. Nothing makes it a mini badge.
    pub fn with_value(mut self, value: impl Into<RenderContent>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_status(mut self, status: BadgeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }

    /// Style of the wrapper around the badge
    pub fn with_container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    /// Overrides for the badge itself, applied over the status defaults
    pub fn with_badge_style(mut self, style: Style) -> Self {
        self.badge_style = style;
        self
    }

    pub fn with_text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Make the badge pressable
    pub fn with_action(mut self, action: NodeAction) -> Self {
        self.action = Some(action);
        self
    }

    fn text_defaults(&self) -> TextProps {
        let base = Style {
            text_color: Some(self.style.text_color),
            font_size: Some(self.style.font_size),
            padding: Some(Spacing::symmetric(self.style.text_padding, 0.0)),
            ..Default::default()
        };
        TextProps {
            text: None,
            style: base.merge(&self.text_style),
        }
    }
}

impl Component for Badge {
    fn node(self) -> Node {
        let element = render_content(text_node, &self.value, &self.text_defaults());
        let mini = element.is_none();
        let size = if mini {
            self.style.mini_size
        } else {
            self.style.size
        };

        let base = Style {
            fill_color: Some(self.status.color()),
            stroke_color: Some(self.style.border_color),
            stroke_width: Some(self.style.border_width),
            corner_radius: Some(size / 2.0),
            min_width: Some(size),
            min_height: Some(size),
            ..Default::default()
        };

        let mut badge = Node::new()
            .with_width(if mini { Size::lpx(size) } else { Size::FitContent })
            .with_height(Size::lpx(size))
            .with_justify(Align::Center)
            .with_align(Align::Center)
            .with_style(Style::flatten([Some(&base), Some(&self.badge_style)]))
            .with_children(element);
        if let Some(action) = self.action {
            badge = badge.with_action(action);
        }

        let mut container = Node::new()
            .with_width(Size::FitContent)
            .with_height(Size::FitContent)
            .with_style(self.container_style)
            .with_child(badge);
        if let Some(id) = self.id {
            container = container.with_id(id);
        }
        container
    }
}
