//! Default swiper controls: prev/next buttons and pagination dots
//!
//! The controls overlay a 3x3 grid on the swiper. Each row is a zero-height
//! strip whose three cells are pinned to the start, center and end of the
//! row; every control is placed in one of the nine cells.
//!
//! Rendering is a pure function of [`ControlsState`] and [`ControlsProps`].
//! Pressable nodes carry a [`NodeAction`] which the host hands back to
//! [`Swiper::dispatch`](astra_swiper::Swiper::dispatch).

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use astra_swiper::{
    palette, render_content, text_node, Align, Color, Component, ControlsState, Flow, Node,
    NodeAction, NodeId, Orientation, Position, RenderContent, Size, Spacing, Style, TextProps,
};
use astra_swiper_macros::WithBuilders;

use crate::badge::Badge;
use crate::button::Button;

/// Margin around each row of the grid
const ROW_MARGIN: f32 = 20.0;

/// Margin around each dot
const DOT_MARGIN: f32 = 3.0;

/// One of the nine cells of the controls grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellPosition {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl CellPosition {
    pub const ALL: [CellPosition; 9] = [
        CellPosition::TopLeft,
        CellPosition::Top,
        CellPosition::TopRight,
        CellPosition::Left,
        CellPosition::Center,
        CellPosition::Right,
        CellPosition::BottomLeft,
        CellPosition::Bottom,
        CellPosition::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CellPosition::TopLeft => "top-left",
            CellPosition::Top => "top",
            CellPosition::TopRight => "top-right",
            CellPosition::Left => "left",
            CellPosition::Center => "center",
            CellPosition::Right => "right",
            CellPosition::BottomLeft => "bottom-left",
            CellPosition::Bottom => "bottom",
            CellPosition::BottomRight => "bottom-right",
        }
    }

    pub fn row(self) -> GridRow {
        match self {
            CellPosition::TopLeft | CellPosition::Top | CellPosition::TopRight => GridRow::Top,
            CellPosition::Left | CellPosition::Center | CellPosition::Right => GridRow::Center,
            CellPosition::BottomLeft | CellPosition::Bottom | CellPosition::BottomRight => {
                GridRow::Bottom
            }
        }
    }
}

/// A row of the controls grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridRow {
    Top,
    Center,
    Bottom,
}

impl GridRow {
    pub const ALL: [GridRow; 3] = [GridRow::Top, GridRow::Center, GridRow::Bottom];

    pub fn name(self) -> &'static str {
        match self {
            GridRow::Top => "top",
            GridRow::Center => "center",
            GridRow::Bottom => "bottom",
        }
    }

    /// Cells from start to end
    pub fn cells(self) -> [CellPosition; 3] {
        match self {
            GridRow::Top => [CellPosition::TopLeft, CellPosition::Top, CellPosition::TopRight],
            GridRow::Center => [CellPosition::Left, CellPosition::Center, CellPosition::Right],
            GridRow::Bottom => [
                CellPosition::BottomLeft,
                CellPosition::Bottom,
                CellPosition::BottomRight,
            ],
        }
    }
}

/// Where a control goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControlPosition {
    /// The control's orientation-dependent default cell
    #[default]
    Default,
    /// Do not render the control
    Hidden,
    /// A specific cell
    At(CellPosition),
}

impl ControlPosition {
    /// Cell the control ends up in, if any
    pub fn resolve(
        self,
        orientation: Orientation,
        horizontal_default: CellPosition,
        vertical_default: CellPosition,
    ) -> Option<CellPosition> {
        match self {
            ControlPosition::Hidden => None,
            ControlPosition::At(cell) => Some(cell),
            ControlPosition::Default => Some(match orientation {
                Orientation::Horizontal => horizontal_default,
                Orientation::Vertical => vertical_default,
            }),
        }
    }
}

impl From<CellPosition> for ControlPosition {
    fn from(cell: CellPosition) -> Self {
        ControlPosition::At(cell)
    }
}

/// `false` hides the control, `true` keeps its default cell
impl From<bool> for ControlPosition {
    fn from(visible: bool) -> Self {
        if visible {
            ControlPosition::Default
        } else {
            ControlPosition::Hidden
        }
    }
}

/// Colors of the default controls
#[derive(Debug, Clone, Copy, PartialEq, WithBuilders)]
pub struct ControlsTheme {
    /// Active dot and the "next" title
    pub primary: Color,
    /// Inactive dots and the "previous" title
    pub muted: Color,
}

impl Default for ControlsTheme {
    fn default() -> Self {
        Self {
            primary: palette::PRIMARY,
            muted: palette::GREY3,
        }
    }
}

/// Everything a dot renderer needs to draw one pagination dot
#[derive(Debug, Clone, PartialEq)]
pub struct DotProps {
    pub id: NodeId,
    pub index: usize,
    pub active: bool,
    /// `GoTo(index)` when dots are touchable
    pub action: Option<NodeAction>,
    pub container_style: Style,
    /// Fill from the theme with `dot_style` and `dot_active_style` applied
    pub dot_style: Style,
}

/// Everything a button renderer needs to draw the prev or next button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps {
    pub id: NodeId,
    pub title: String,
    pub title_style: Style,
    pub action: NodeAction,
}

/// Replacement renderer for one kind of control
///
/// A node returned without an action gets the control's action attached, so
/// presses keep reaching the swiper.
pub struct Slot<P>(Rc<dyn Fn(&P) -> Node>);

impl<P> Slot<P> {
    pub fn new(render: impl Fn(&P) -> Node + 'static) -> Self {
        Self(Rc::new(render))
    }

    fn render(&self, props: &P, action: Option<NodeAction>) -> Node {
        let node = (self.0)(props);
        match action {
            Some(action) if node.action().is_none() => node.with_action(action),
            _ => node,
        }
    }
}

impl<P> Clone for Slot<P> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<P> fmt::Debug for Slot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Slot(..)")
    }
}

/// Customization of the default controls
#[derive(Debug, Clone, WithBuilders)]
pub struct ControlsProps {
    /// Title of the "previous" button
    #[with_builders(into)]
    pub prev_title: String,
    /// Title of the "next" button
    #[with_builders(into)]
    pub next_title: String,
    /// Cell of the dots. Defaults to bottom (horizontal) or right (vertical).
    #[with_builders(into)]
    pub dots_position: ControlPosition,
    /// Cell of the "previous" button. Defaults to bottom-left or top-right.
    #[with_builders(into)]
    pub prev_position: ControlPosition,
    /// Cell of the "next" button. Defaults to bottom-right or top-left.
    #[with_builders(into)]
    pub next_position: ControlPosition,
    /// Pressing a dot navigates to its slide
    pub dots_touchable: bool,
    /// Shown instead of the "previous" button on the first slide
    #[with_builders(into)]
    pub first_prev_element: RenderContent,
    /// Shown instead of the "next" button on the last slide
    #[with_builders(into)]
    pub last_next_element: RenderContent,
    pub prev_title_style: Style,
    pub next_title_style: Style,
    pub dots_wrapper_style: Style,
    /// Wrapper of each dot
    pub dot_container_style: Style,
    /// Every dot
    pub dot_style: Style,
    /// The active dot, over `dot_style`
    pub dot_active_style: Style,
    pub theme: ControlsTheme,
    #[with_builders(skip)]
    pub dot_component: Option<Slot<DotProps>>,
    #[with_builders(skip)]
    pub prev_component: Option<Slot<ButtonProps>>,
    #[with_builders(skip)]
    pub next_component: Option<Slot<ButtonProps>>,
    #[with_builders(skip)]
    pub cells_style: HashMap<CellPosition, Style>,
    #[with_builders(skip)]
    pub cells_content: HashMap<CellPosition, RenderContent>,
}

impl Default for ControlsProps {
    fn default() -> Self {
        Self {
            prev_title: "Prev".to_string(),
            next_title: "Next".to_string(),
            dots_position: ControlPosition::Default,
            prev_position: ControlPosition::Default,
            next_position: ControlPosition::Default,
            dots_touchable: false,
            first_prev_element: RenderContent::None,
            last_next_element: RenderContent::None,
            prev_title_style: Style::default(),
            next_title_style: Style::default(),
            dots_wrapper_style: Style::default(),
            dot_container_style: Style::default(),
            dot_style: Style::default(),
            dot_active_style: Style::default(),
            theme: ControlsTheme::default(),
            dot_component: None,
            prev_component: None,
            next_component: None,
            cells_style: HashMap::new(),
            cells_content: HashMap::new(),
        }
    }
}

impl ControlsProps {
    /// Style one cell of the grid
    pub fn with_cell_style(mut self, cell: CellPosition, style: Style) -> Self {
        self.cells_style.insert(cell, style);
        self
    }

    /// Put extra content into one cell of the grid
    pub fn with_cell_content(mut self, cell: CellPosition, content: impl Into<RenderContent>) -> Self {
        self.cells_content.insert(cell, content.into());
        self
    }

    /// Draw every dot with `render` instead of a badge
    pub fn with_dot_component(mut self, render: impl Fn(&DotProps) -> Node + 'static) -> Self {
        self.dot_component = Some(Slot::new(render));
        self
    }

    /// Draw the "previous" button with `render`
    pub fn with_prev_component(mut self, render: impl Fn(&ButtonProps) -> Node + 'static) -> Self {
        self.prev_component = Some(Slot::new(render));
        self
    }

    /// Draw the "next" button with `render`
    pub fn with_next_component(mut self, render: impl Fn(&ButtonProps) -> Node + 'static) -> Self {
        self.next_component = Some(Slot::new(render));
        self
    }
}

/// Controls resolved against an orientation
struct Placement {
    dots: Option<CellPosition>,
    prev: Option<CellPosition>,
    next: Option<CellPosition>,
}

impl Placement {
    fn new(props: &ControlsProps, orientation: Orientation) -> Self {
        Self {
            dots: props.dots_position.resolve(
                orientation,
                CellPosition::Bottom,
                CellPosition::Right,
            ),
            prev: props.prev_position.resolve(
                orientation,
                CellPosition::BottomLeft,
                CellPosition::TopRight,
            ),
            next: props.next_position.resolve(
                orientation,
                CellPosition::BottomRight,
                CellPosition::TopLeft,
            ),
        }
    }
}

/// Build the three rows of the controls overlay
pub fn controls(state: &ControlsState, props: &ControlsProps) -> Vec<Node> {
    let placement = Placement::new(props, state.orientation);
    GridRow::ALL
        .iter()
        .map(|&row| row_node(row, state, props, &placement))
        .collect()
}

fn row_node(row: GridRow, state: &ControlsState, props: &ControlsProps, placement: &Placement) -> Node {
    let holders = row
        .cells()
        .into_iter()
        .zip([Align::Start, Align::Center, Align::End])
        .map(|(cell, align)| {
            Node::new()
                .with_flex(1.0)
                .with_height(Size::lpx(0.0))
                .with_flow(Flow::Column)
                .with_align(align)
                .with_justify(Align::Center)
                .with_child(cell_node(cell, state, props, placement))
        });

    Node::new()
        .with_id(format!("controls-{}", row.name()))
        .with_width(Size::Fill)
        .with_height(Size::lpx(0.0))
        .with_flow(Flow::Row)
        .with_align(Align::Center)
        .with_style(Style {
            margin: Some(Spacing::all(ROW_MARGIN)),
            ..Default::default()
        })
        .with_children(holders)
}

fn cell_node(cell: CellPosition, state: &ControlsState, props: &ControlsProps, placement: &Placement) -> Node {
    let mut children = Vec::new();
    if placement.dots == Some(cell) {
        children.push(dots(state, props));
    }
    if placement.prev == Some(cell) {
        children.extend(prev(state, props));
    }
    if placement.next == Some(cell) {
        children.extend(next(state, props));
    }
    if let Some(content) = props.cells_content.get(&cell) {
        children.extend(render_content(text_node, content, &TextProps::default()));
    }

    Node::new()
        .with_id(format!("cell-{}", cell.name()))
        .with_width(Size::FitContent)
        .with_height(Size::FitContent)
        .with_position(Position::Absolute { top: 0.0, left: 0.0 })
        .with_align(Align::Center)
        .with_justify(Align::Center)
        .with_style(props.cells_style.get(&cell).cloned().unwrap_or_default())
        .with_children(children)
}

fn dots(state: &ControlsState, props: &ControlsProps) -> Node {
    let wrapper_base = Style {
        min_width: Some(1.0),
        min_height: Some(1.0),
        ..Default::default()
    };
    let container = Style::flatten([
        Some(&Style {
            margin: Some(Spacing::all(DOT_MARGIN)),
            ..Default::default()
        }),
        Some(&props.dot_container_style),
    ]);

    let dots = (0..state.count).map(|index| {
        let active = index == state.active_index;
        let base = Style {
            fill_color: Some(if active { props.theme.primary } else { props.theme.muted }),
            stroke_color: Some(Color::transparent()),
            ..Default::default()
        };
        let dot = DotProps {
            id: NodeId::new(format!("dot-{index}")),
            index,
            active,
            action: props.dots_touchable.then_some(NodeAction::GoTo(index)),
            container_style: container.clone(),
            dot_style: Style::flatten([
                Some(&base),
                Some(&props.dot_style),
                active.then_some(&props.dot_active_style),
            ]),
        };

        match &props.dot_component {
            Some(slot) => slot.render(&dot, dot.action),
            None => default_dot(dot),
        }
    });

    Node::new()
        .with_id("dots")
        .with_flow(match state.orientation {
            Orientation::Horizontal => Flow::Row,
            Orientation::Vertical => Flow::Column,
        })
        .with_align(Align::Center)
        .with_justify(Align::Center)
        .with_style(Style::flatten([Some(&wrapper_base), Some(&props.dots_wrapper_style)]))
        .with_children(dots)
}

fn default_dot(dot: DotProps) -> Node {
    let mut badge = Badge::new()
        .with_id(dot.id)
        .with_container_style(dot.container_style)
        .with_badge_style(dot.dot_style);
    if let Some(action) = dot.action {
        badge = badge.with_action(action);
    }
    badge.node()
}

fn prev(state: &ControlsState, props: &ControlsProps) -> Option<Node> {
    if state.is_first {
        return render_content(text_node, &props.first_prev_element, &TextProps::default());
    }
    let button = ButtonProps {
        id: NodeId::new("prev"),
        title: props.prev_title.clone(),
        title_style: Style::flatten([
            Some(&Style::text(props.theme.muted)),
            Some(&props.prev_title_style),
        ]),
        action: NodeAction::Prev,
    };
    Some(render_button(props.prev_component.as_ref(), button))
}

fn next(state: &ControlsState, props: &ControlsProps) -> Option<Node> {
    if state.is_last {
        return render_content(text_node, &props.last_next_element, &TextProps::default());
    }
    let button = ButtonProps {
        id: NodeId::new("next"),
        title: props.next_title.clone(),
        title_style: Style::flatten([
            Some(&Style::text(props.theme.primary)),
            Some(&props.next_title_style),
        ]),
        action: NodeAction::Next,
    };
    Some(render_button(props.next_component.as_ref(), button))
}

fn render_button(slot: Option<&Slot<ButtonProps>>, button: ButtonProps) -> Node {
    match slot {
        Some(slot) => slot.render(&button, Some(button.action)),
        None => Button::new(button.title)
            .with_id(button.id)
            .with_title_style(button.title_style)
            .with_action(button.action)
            .node(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_swiper::{Content, ContentError, TextContent};

    fn state(orientation: Orientation, count: usize, active_index: usize, looping: bool) -> ControlsState {
        ControlsState {
            orientation,
            count,
            active_index,
            is_first: !looping && active_index == 0,
            is_last: !looping && active_index + 1 >= count,
        }
    }

    fn find<'a>(rows: &'a [Node], id: &str) -> Option<&'a Node> {
        rows.iter().find_map(|row| row.find(id))
    }

    fn cell_of<'a>(rows: &'a [Node], id: &str) -> Option<CellPosition> {
        CellPosition::ALL
            .into_iter()
            .find(|cell| {
                find(rows, &format!("cell-{}", cell.name()))
                    .is_some_and(|node| node.find(id).is_some())
            })
    }

    fn text_of(node: &Node) -> Option<&str> {
        match node.content()? {
            Content::Text(text) => Some(text.text.as_str()),
        }
    }

    fn dot_fill(rows: &[Node], index: usize) -> Option<Color> {
        let dot = find(rows, &format!("dot-{index}"))?;
        dot.children().first()?.style().fill_color
    }

    #[test]
    fn test_three_rows_of_three_cells() {
        let rows = controls(&state(Orientation::Horizontal, 3, 1, false), &ControlsProps::default());
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.children().len(), 3);
            assert_eq!(row.style().margin, Some(Spacing::all(20.0)));
        }
        let aligns: Vec<_> = rows[0].children().iter().map(|h| h.align()).collect();
        assert_eq!(aligns, vec![Align::Start, Align::Center, Align::End]);
        for cell in CellPosition::ALL {
            assert!(find(&rows, &format!("cell-{}", cell.name())).is_some());
        }
    }

    #[test]
    fn test_horizontal_default_positions() {
        let rows = controls(&state(Orientation::Horizontal, 3, 1, false), &ControlsProps::default());
        assert_eq!(cell_of(&rows, "dots"), Some(CellPosition::Bottom));
        assert_eq!(cell_of(&rows, "prev"), Some(CellPosition::BottomLeft));
        assert_eq!(cell_of(&rows, "next"), Some(CellPosition::BottomRight));
    }

    #[test]
    fn test_vertical_default_positions() {
        let rows = controls(&state(Orientation::Vertical, 3, 1, false), &ControlsProps::default());
        assert_eq!(cell_of(&rows, "dots"), Some(CellPosition::Right));
        assert_eq!(cell_of(&rows, "prev"), Some(CellPosition::TopRight));
        assert_eq!(cell_of(&rows, "next"), Some(CellPosition::TopLeft));
        assert_eq!(find(&rows, "dots").map(Node::flow), Some(Flow::Column));
    }

    #[test]
    fn test_positions_can_move_or_hide() {
        let props = ControlsProps::default()
            .with_dots_position(CellPosition::Top)
            .with_prev_position(false)
            .with_next_position(CellPosition::Center);
        let rows = controls(&state(Orientation::Horizontal, 3, 1, false), &props);
        assert_eq!(cell_of(&rows, "dots"), Some(CellPosition::Top));
        assert_eq!(cell_of(&rows, "prev"), None);
        assert_eq!(cell_of(&rows, "next"), Some(CellPosition::Center));
    }

    #[test]
    fn test_one_dot_per_slide_with_active_color() {
        let rows = controls(&state(Orientation::Horizontal, 4, 2, false), &ControlsProps::default());
        for index in 0..4 {
            let expected = if index == 2 { palette::PRIMARY } else { palette::GREY3 };
            assert_eq!(dot_fill(&rows, index), Some(expected));
        }
        assert!(find(&rows, "dot-4").is_none());
    }

    #[test]
    fn test_dot_active_style_only_on_active() {
        let props = ControlsProps::default()
            .with_dot_style(Style::fill(palette::BLACK))
            .with_dot_active_style(Style::fill(palette::ERROR));
        let rows = controls(&state(Orientation::Horizontal, 3, 0, false), &props);
        assert_eq!(dot_fill(&rows, 0), Some(palette::ERROR));
        assert_eq!(dot_fill(&rows, 1), Some(palette::BLACK));
    }

    #[test]
    fn test_dots_touchable() {
        let st = state(Orientation::Horizontal, 3, 0, false);
        let rows = controls(&st, &ControlsProps::default());
        let dot_actions: Vec<_> = find(&rows, "dots").map(Node::actions).unwrap_or_default();
        assert!(dot_actions.is_empty());

        let rows = controls(&st, &ControlsProps::default().with_dots_touchable(true));
        let dot_actions = find(&rows, "dots").map(Node::actions).unwrap_or_default();
        assert_eq!(
            dot_actions,
            vec![NodeAction::GoTo(0), NodeAction::GoTo(1), NodeAction::GoTo(2)]
        );
    }

    #[test]
    fn test_prev_hidden_on_first_with_placeholder() {
        let props = ControlsProps::default().with_first_prev_element("start");
        let rows = controls(&state(Orientation::Horizontal, 3, 0, false), &props);
        assert!(find(&rows, "prev").is_none());

        let cell = find(&rows, "cell-bottom-left").map(|c| c.children().to_vec());
        let texts: Vec<_> = cell.iter().flatten().filter_map(text_of).collect();
        assert_eq!(texts, vec!["start"]);
    }

    #[test]
    fn test_next_hidden_on_last() {
        let rows = controls(&state(Orientation::Horizontal, 3, 2, false), &ControlsProps::default());
        assert!(find(&rows, "next").is_none());
        assert!(find(&rows, "prev").is_some());
        assert!(find(&rows, "cell-bottom-right").is_some_and(|c| c.children().is_empty()));
    }

    #[test]
    fn test_looping_shows_both_buttons() {
        let rows = controls(&state(Orientation::Horizontal, 3, 0, true), &ControlsProps::default());
        assert!(find(&rows, "prev").is_some());
        assert!(find(&rows, "next").is_some());
    }

    #[test]
    fn test_button_actions_and_titles() {
        let props = ControlsProps::default().with_prev_title("Back").with_next_title("Forward");
        let rows = controls(&state(Orientation::Horizontal, 3, 1, false), &props);
        assert_eq!(find(&rows, "prev").and_then(Node::action), Some(NodeAction::Prev));
        assert_eq!(find(&rows, "next").and_then(Node::action), Some(NodeAction::Next));

        let prev_title = find(&rows, "prev").and_then(|n| n.children().first()).and_then(text_of);
        assert_eq!(prev_title, Some("Back"));
    }

    #[test]
    fn test_cells_style_and_content() {
        let props = ControlsProps::default()
            .with_cell_style(CellPosition::Top, Style::opacity(0.5))
            .with_cell_content(CellPosition::Top, "title")
            .with_cell_content(
                CellPosition::Center,
                RenderContent::builder(|| Err(ContentError::Builder("boom".into()))),
            );
        let rows = controls(&state(Orientation::Horizontal, 3, 1, false), &props);

        let top = find(&rows, "cell-top");
        assert_eq!(top.and_then(|c| c.style().opacity), Some(0.5));
        assert_eq!(top.and_then(|c| c.children().first()).and_then(text_of), Some("title"));
        assert!(find(&rows, "cell-center").is_some_and(|c| c.children().is_empty()));
    }

    #[test]
    fn test_theme_recolors_dots_and_titles() {
        let theme = ControlsTheme::default()
            .with_primary(palette::SUCCESS)
            .with_muted(palette::BLACK);
        let props = ControlsProps::default().with_theme(theme);
        let rows = controls(&state(Orientation::Horizontal, 3, 1, false), &props);

        assert_eq!(dot_fill(&rows, 1), Some(palette::SUCCESS));
        assert_eq!(dot_fill(&rows, 0), Some(palette::BLACK));
        let next_title = find(&rows, "next").and_then(|n| n.children().first());
        assert_eq!(next_title.and_then(|t| t.style().text_color), Some(palette::SUCCESS));
    }

    #[test]
    fn test_dot_component_replaces_badges() {
        let props = ControlsProps::default()
            .with_dots_touchable(true)
            .with_dot_component(|dot| {
                Node::new()
                    .with_id(dot.id.clone())
                    .with_content(Content::Text(TextContent::new(if dot.active { "*" } else { "-" })))
            });
        let rows = controls(&state(Orientation::Horizontal, 3, 2, false), &props);

        let marks: Vec<_> = (0..3)
            .filter_map(|i| find(&rows, &format!("dot-{i}")).and_then(text_of))
            .collect();
        assert_eq!(marks, vec!["-", "-", "*"]);
        assert_eq!(
            find(&rows, "dots").map(Node::actions).unwrap_or_default(),
            vec![NodeAction::GoTo(0), NodeAction::GoTo(1), NodeAction::GoTo(2)]
        );
    }

    #[test]
    fn test_button_components_keep_their_actions() {
        let props = ControlsProps::default()
            .with_prev_component(|button| {
                Node::new()
                    .with_id(button.id.clone())
                    .with_content(Content::Text(TextContent::new(format!("<< {}", button.title))))
            })
            .with_next_component(|button| {
                Node::new()
                    .with_id(button.id.clone())
                    .with_action(NodeAction::GoTo(0))
            });
        let rows = controls(&state(Orientation::Horizontal, 3, 1, false), &props);

        let prev = find(&rows, "prev");
        assert_eq!(prev.and_then(text_of), Some("<< Prev"));
        assert_eq!(prev.and_then(Node::action), Some(NodeAction::Prev));
        assert_eq!(find(&rows, "next").and_then(Node::action), Some(NodeAction::GoTo(0)));
    }

    #[test]
    fn test_cells_belong_to_their_rows() {
        for row in GridRow::ALL {
            for cell in row.cells() {
                assert_eq!(cell.row(), row);
            }
        }
    }
}
