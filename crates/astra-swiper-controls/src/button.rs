//! Clear (background-less) title button

use astra_swiper::{
    palette, text_node, Align, Color, Component, Node, NodeAction, NodeId, Size, Spacing, Style,
    TextProps,
};
use astra_swiper_macros::WithBuilders;

/// Visual styling for a button
#[derive(Debug, Clone, WithBuilders)]
pub struct ButtonStyle {
    /// Title color
    pub title_color: Color,
    /// Title font size
    pub font_size: f32,
    /// Internal padding
    pub padding: Spacing,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            title_color: palette::PRIMARY,
            font_size: 16.0,
            padding: Spacing::all(8.0),
        }
    }
}

/// A pressable title
///
/// Pressing it asks the host to dispatch the button's [`NodeAction`].
#[derive(Debug, Clone)]
pub struct Button {
    id: Option<NodeId>,
    title: String,
    style: ButtonStyle,
    title_style: Style,
    action: Option<NodeAction>,
}

impl Button {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            style: ButtonStyle::default(),
            title_style: Style::default(),
            action: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<NodeId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Overrides for the title text
    pub fn with_title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn with_action(mut self, action: NodeAction) -> Self {
        self.action = Some(action);
        self
    }
}

impl Component for Button {
    fn node(self) -> Node {
        let base = Style {
            text_color: Some(self.style.title_color),
            font_size: Some(self.style.font_size),
            ..Default::default()
        };
        let title = text_node(&TextProps::new(self.title).with_style(base.merge(&self.title_style)));

        let mut node = Node::new()
            .with_width(Size::FitContent)
            .with_height(Size::FitContent)
            .with_justify(Align::Center)
            .with_align(Align::Center)
            .with_style(Style {
                padding: Some(self.style.padding),
                ..Default::default()
            })
            .with_child(title);
        if let Some(id) = self.id {
            node = node.with_id(id);
        }
        if let Some(action) = self.action {
            node = node.with_action(action);
        }
        node
    }
}
