use crate::color::Color;
use crate::layout::Spacing;

/// Visual style properties of a view node
///
/// All fields are `Option<T>` so a style can be a partial override: hosts pass
/// only the properties they want to change for a slot (container, slide
/// wrapper, dots, ...) and the widget's defaults fill in the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Background fill color
    pub fill_color: Option<Color>,

    /// Border color
    pub stroke_color: Option<Color>,

    /// Border width in logical pixels
    pub stroke_width: Option<f32>,

    /// Corner radius in logical pixels
    pub corner_radius: Option<f32>,

    /// Node opacity (0.0 = transparent, 1.0 = opaque)
    pub opacity: Option<f32>,

    /// Text color (for text content)
    pub text_color: Option<Color>,

    /// Font size in logical pixels (for text content)
    pub font_size: Option<f32>,

    /// Minimum width in logical pixels
    pub min_width: Option<f32>,

    /// Minimum height in logical pixels
    pub min_height: Option<f32>,

    /// Outer spacing
    pub margin: Option<Spacing>,

    /// Inner spacing
    pub padding: Option<Spacing>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a style with only fill color
    pub fn fill(color: Color) -> Self {
        Self {
            fill_color: Some(color),
            ..Default::default()
        }
    }

    /// Create a style with only text color
    pub fn text(color: Color) -> Self {
        Self {
            text_color: Some(color),
            ..Default::default()
        }
    }

    /// Create a style with only opacity
    pub fn opacity(opacity: f32) -> Self {
        Self {
            opacity: Some(opacity),
            ..Default::default()
        }
    }

    /// Merge this style with another, preferring values from `other` when present
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            fill_color: other.fill_color.or(self.fill_color),
            stroke_color: other.stroke_color.or(self.stroke_color),
            stroke_width: other.stroke_width.or(self.stroke_width),
            corner_radius: other.corner_radius.or(self.corner_radius),
            opacity: other.opacity.or(self.opacity),
            text_color: other.text_color.or(self.text_color),
            font_size: other.font_size.or(self.font_size),
            min_width: other.min_width.or(self.min_width),
            min_height: other.min_height.or(self.min_height),
            margin: other.margin.or(self.margin),
            padding: other.padding.or(self.padding),
        }
    }

    /// Flatten an ordered list of optional styles into one
    ///
    /// Later entries override earlier ones on shared properties; `None`
    /// entries are skipped, which keeps conditional layers
    /// (`is_active.then_some(&active_style)`) readable at call sites.
    pub fn flatten<'a>(layers: impl IntoIterator<Item = Option<&'a Style>>) -> Style {
        layers
            .into_iter()
            .flatten()
            .fold(Style::default(), |acc, layer| acc.merge(layer))
    }

    /// Whether no property is set
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}
