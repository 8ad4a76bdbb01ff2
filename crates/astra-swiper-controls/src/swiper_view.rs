//! View tree of a whole swiper
//!
//! ```text
//! root (fills parent)
//! └── inner container (clips, measured size)
//!     ├── swipe area (all slides side by side, translated by offset + drag)
//!     │   └── slide wrapper (one slide's size) × count
//!     └── controls rows (top, center, bottom)
//! ```

use astra_swiper::{
    Color, ControlsState, Flow, Node, Orientation, Overflow, Position, Size, Style, Swiper,
};
use astra_swiper_macros::WithBuilders;

use crate::controls::{controls, ControlsProps};

/// Style overrides for the parts of the swiper view
#[derive(Debug, Clone, Default, PartialEq, WithBuilders)]
pub struct SwiperStyles {
    /// Root node
    pub container: Style,
    /// Clipping container holding the swipe area and the controls
    pub inner_container: Style,
    /// Strip holding every slide
    pub swipe_area: Style,
    /// Wrapper around each slide
    pub slide_wrapper: Style,
}

/// Build the view tree for `swiper`, rendering each slide with `render_slide`
pub fn swiper_view<T>(
    swiper: &Swiper<T>,
    styles: &SwiperStyles,
    controls_props: &ControlsProps,
    render_slide: impl FnMut(usize, &T) -> Node,
) -> Node {
    swiper_view_with_controls(swiper, styles, controls_props, controls, render_slide)
}

/// Like [`swiper_view`], with `render_controls` in place of the default
/// controls grid. Its nodes are appended to the clipping container.
pub fn swiper_view_with_controls<T>(
    swiper: &Swiper<T>,
    styles: &SwiperStyles,
    controls_props: &ControlsProps,
    render_controls: impl Fn(&ControlsState, &ControlsProps) -> Vec<Node>,
    mut render_slide: impl FnMut(usize, &T) -> Node,
) -> Node {
    let layout = swiper.layout();
    if !layout.is_measured() {
        log::debug!("swiper view: layout not measured yet, slides have no size");
    }
    let config = swiper.config();
    let count = swiper.count() as f32;

    let (area_width, area_height) = match config.orientation {
        Orientation::Horizontal => (layout.width * count, layout.height),
        Orientation::Vertical => (layout.width, layout.height * count),
    };

    let slides = swiper.slides().iter().enumerate().map(|(index, slide)| {
        Node::new()
            .with_id(format!("slide-{index}"))
            .with_size(layout.width, layout.height)
            .with_style(styles.slide_wrapper.clone())
            .with_child(render_slide(index, slide))
    });

    let swipe_area = Node::new()
        .with_id("swipe-area")
        .with_position(Position::Absolute { top: 0.0, left: 0.0 })
        .with_size(area_width, area_height)
        .with_flow(Flow::from(config.orientation))
        .with_translation(swiper.translation())
        .with_style(styles.swipe_area.clone())
        .with_children(slides);

    let position = if config.position_fixed {
        Position::Fixed {
            top: layout.y,
            left: layout.x,
        }
    } else {
        Position::Relative
    };

    let mut inner = Node::new()
        .with_id("swiper-inner")
        .with_position(position)
        .with_overflow(Overflow::Hidden)
        .with_size(layout.width, layout.height)
        .with_style(Style::flatten([
            Some(&Style::fill(Color::transparent())),
            Some(&styles.inner_container),
        ]))
        .with_child(swipe_area);
    if config.controls_enabled {
        inner = inner.with_children(render_controls(&swiper.controls_state(), controls_props));
    }

    Node::new()
        .with_id("swiper")
        .with_width(Size::Fill)
        .with_height(Size::Fill)
        .with_flex(1.0)
        .with_style(Style::flatten([
            Some(&Style::fill(Color::transparent())),
            Some(&styles.container),
        ]))
        .with_child(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_swiper::{text_node, ImmediateInterpolator, Layout, SwiperConfig, TextProps};
    use std::time::{Duration, Instant};

    fn measured(config: SwiperConfig) -> Swiper<&'static str> {
        let mut swiper = Swiper::new(config, ["one", "two", "three"])
            .with_interpolator(ImmediateInterpolator::default());
        swiper.on_mount(Instant::now());
        swiper.on_measure(Layout::new(10.0, 20.0, 300.0, 200.0));
        swiper
    }

    fn view(swiper: &Swiper<&'static str>) -> Node {
        swiper_view(swiper, &SwiperStyles::default(), &ControlsProps::default(), |_, text| {
            text_node(&TextProps::new(*text))
        })
    }

    #[test]
    fn test_horizontal_swipe_area() {
        let swiper = measured(SwiperConfig::default());
        let root = view(&swiper);

        let area = root.find("swipe-area");
        assert_eq!(area.map(Node::width), Some(Size::Fixed(900.0)));
        assert_eq!(area.map(Node::height), Some(Size::Fixed(200.0)));
        assert_eq!(area.map(Node::flow), Some(Flow::Row));
        assert_eq!(area.map(|a| a.children().len()), Some(3));

        let slide = root.find("slide-1");
        assert_eq!(slide.map(Node::width), Some(Size::Fixed(300.0)));
    }

    #[test]
    fn test_vertical_swipe_area() {
        let swiper = measured(SwiperConfig::vertical());
        let area = view(&swiper).find("swipe-area").cloned();
        assert_eq!(area.as_ref().map(Node::height), Some(Size::Fixed(600.0)));
        assert_eq!(area.as_ref().map(Node::flow), Some(Flow::Column));
    }

    #[test]
    fn test_swipe_area_follows_translation() {
        let mut swiper = measured(SwiperConfig::default());
        swiper.go_to_next();
        swiper.tick(Instant::now(), Duration::from_millis(16));

        let root = view(&swiper);
        assert_eq!(
            root.find("swipe-area").map(Node::translation),
            Some(glam::Vec2::new(-300.0, 0.0))
        );
    }

    #[test]
    fn test_inner_container_position() {
        let relative = view(&measured(SwiperConfig::default()));
        let inner = relative.find("swiper-inner");
        assert_eq!(inner.map(Node::position), Some(Position::Relative));
        assert_eq!(inner.map(Node::overflow), Some(Overflow::Hidden));

        let fixed = view(&measured(SwiperConfig::default().with_position_fixed(true)));
        assert_eq!(
            fixed.find("swiper-inner").map(Node::position),
            Some(Position::Fixed {
                top: 20.0,
                left: 10.0
            })
        );
    }

    #[test]
    fn test_controls_toggle() {
        let with = view(&measured(SwiperConfig::default()));
        assert!(with.find("controls-bottom").is_some());
        assert!(with.find("next").is_some());

        let without = view(&measured(SwiperConfig::default().with_controls_enabled(false)));
        assert!(without.find("controls-bottom").is_none());
        assert_eq!(without.find("swiper-inner").map(|n| n.children().len()), Some(1));
    }

    #[test]
    fn test_custom_controls_renderer() {
        let swiper = measured(SwiperConfig::default().with_from(1));
        let root = swiper_view_with_controls(
            &swiper,
            &SwiperStyles::default(),
            &ControlsProps::default(),
            |state, _| {
                vec![Node::new()
                    .with_id(format!("page-{}-of-{}", state.active_index + 1, state.count))
                    .with_action(astra_swiper::NodeAction::Next)]
            },
            |_, text| text_node(&TextProps::new(*text)),
        );

        assert!(root.find("controls-bottom").is_none());
        assert!(root.find("page-2-of-3").is_some());
        assert_eq!(root.actions(), vec![astra_swiper::NodeAction::Next]);

        let disabled = measured(SwiperConfig::default().with_controls_enabled(false));
        let root = swiper_view_with_controls(
            &disabled,
            &SwiperStyles::default(),
            &ControlsProps::default(),
            |_, _| vec![Node::new().with_id("custom")],
            |_, text| text_node(&TextProps::new(*text)),
        );
        assert!(root.find("custom").is_none());
    }

    #[test]
    fn test_style_overrides() {
        let styles = SwiperStyles::default()
            .with_container(Style::opacity(0.5))
            .with_slide_wrapper(Style::fill(astra_swiper::palette::PRIMARY));
        let swiper = measured(SwiperConfig::default());
        let root = swiper_view(&swiper, &styles, &ControlsProps::default(), |_, text| {
            text_node(&TextProps::new(*text))
        });

        assert_eq!(root.style().opacity, Some(0.5));
        assert_eq!(root.style().fill_color, Some(Color::transparent()));
        assert_eq!(
            root.find("slide-0").and_then(|s| s.style().fill_color),
            Some(astra_swiper::palette::PRIMARY)
        );
    }
}
