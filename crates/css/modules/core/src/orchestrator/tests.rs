use super::*;
use css_box::UNBOUNDED;
use css_flexbox::{AlignContent, FlexWrap};
use css_grid::GridTrackSize;
use css_text::ApproximateTextMeasurer;
use css_values_units::{Dimension, Length, LengthContext};
use css_writing_modes::WritingMode;

use crate::style_model::{Position, Sides, Style};

fn context() -> LayoutContext<'static> {
    LayoutContext::new(LengthContext::default(), &ApproximateTextMeasurer)
}

fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.001
}

fn sized(width: f32, height: f32) -> Node {
    Node::new(Style {
        width: Dimension::px(width),
        height: Dimension::px(height),
        ..Style::default()
    })
}

fn origin_of(node: &Node, index: usize) -> Option<(f32, f32)> {
    node.children
        .get(index)
        .map(|child| (child.rect.x, child.rect.y))
}

fn at(node: &Node, index: usize, x: f32, y: f32) -> bool {
    origin_of(node, index).is_some_and(|(left, top)| approx(left, x) && approx(top, y))
}

/// # Panics
/// Panics if flex-start items in a row are not packed from the left.
#[test]
fn flex_row_packs_items_at_start() {
    let ctx = context();
    let mut root = Node::with_children(
        Style {
            display: Display::Flex,
            width: Dimension::px(200.0),
            ..Style::default()
        },
        vec![sized(50.0, 50.0), sized(50.0, 50.0)],
    );
    let size = layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(approx(size.width, 200.0) && approx(size.height, 50.0));
    assert!(at(&root, 0, 0.0, 0.0));
    assert!(at(&root, 1, 50.0, 0.0));
}

/// # Panics
/// Panics if adjoining sibling margins do not collapse to the larger one.
#[test]
fn block_siblings_collapse_margins() {
    let ctx = context();
    let mut first = sized(100.0, 50.0);
    first.style.margin.bottom = Dimension::px(20.0);
    let mut second = sized(100.0, 50.0);
    second.style.margin.top = Dimension::px(30.0);
    let mut root = Node::with_children(Style::default(), vec![first, second]);
    let size = layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(at(&root, 1, 0.0, 80.0));
    assert!(approx(size.height, 130.0));
}

/// # Panics
/// Panics if a negative margin pulls a sibling up past a positive one.
#[test]
fn block_siblings_mixed_sign_margins_take_max() {
    let ctx = context();
    let mut first = sized(100.0, 40.0);
    first.style.margin.bottom = Dimension::px(20.0);
    let mut second = sized(100.0, 40.0);
    second.style.margin.top = Dimension::px(-10.0);
    let mut root = Node::with_children(Style::default(), vec![first, second]);
    let size = layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(at(&root, 1, 0.0, 60.0));
    assert!(approx(size.height, 100.0));
}

/// # Panics
/// Panics if auto-placed items do not fill a 2×2 grid of fixed tracks in row order.
#[test]
fn grid_auto_places_row_major() {
    let ctx = context();
    let tracks = vec![GridTrackSize::fixed(100.0), GridTrackSize::fixed(100.0)];
    let mut root = Node::with_children(
        Style {
            display: Display::Grid,
            width: Dimension::px(200.0),
            height: Dimension::px(200.0),
            grid_template_columns: tracks.clone(),
            grid_template_rows: tracks,
            ..Style::default()
        },
        (0..4).map(|_| sized(50.0, 50.0)).collect(),
    );
    layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(at(&root, 0, 0.0, 0.0));
    assert!(at(&root, 1, 100.0, 0.0));
    assert!(at(&root, 2, 0.0, 100.0));
    assert!(at(&root, 3, 100.0, 100.0));
    assert!(
        root.children
            .iter()
            .all(|child| approx(child.rect.width, 50.0) && approx(child.rect.height, 50.0))
    );
}

/// # Panics
/// Panics if centered flex lines do not share the free cross space evenly.
#[test]
fn wrapped_lines_center_in_cross_axis() {
    let ctx = context();
    let mut root = Node::with_children(
        Style {
            display: Display::Flex,
            flex_wrap: FlexWrap::Wrap,
            align_content: AlignContent::Center,
            width: Dimension::px(100.0),
            height: Dimension::px(300.0),
            ..Style::default()
        },
        vec![sized(100.0, 50.0), sized(100.0, 50.0)],
    );
    layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(at(&root, 0, 0.0, 100.0));
    assert!(at(&root, 1, 0.0, 150.0));
}

/// # Panics
/// Panics if a `display: none` child keeps a box or takes up space.
#[test]
fn hidden_children_are_zeroed_and_skipped() {
    let ctx = context();
    let mut hidden = sized(50.0, 50.0);
    hidden.style.display = Display::None;
    hidden.rect = Rect::new(5.0, 5.0, 5.0, 5.0);
    let mut root = Node::with_children(
        Style {
            display: Display::Flex,
            ..Style::default()
        },
        vec![hidden, sized(30.0, 20.0)],
    );
    layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(root.children.first().is_some_and(|child| child.rect == Rect::ZERO));
    assert!(at(&root, 1, 0.0, 0.0));
}

/// # Panics
/// Panics if a text leaf does not wrap at its container's width.
#[test]
fn text_leaf_wraps_inside_block() {
    let ctx = context();
    let mut root = Node::with_children(
        Style {
            width: Dimension::px(50.0),
            ..Style::default()
        },
        vec![Node::text_leaf("aa bbbb", Style::default())],
    );
    let size = layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    let text = root.children.first();
    assert!(text.is_some_and(|leaf| {
        leaf.text_layout.as_ref().is_some_and(|lines| lines.lines.len() == 2)
    }));
    // Two lines of 1.2 × 16px.
    assert!(approx(size.height, 38.4));
    assert!(root.baseline.is_some_and(|baseline| approx(baseline, 14.4)));
}

/// # Panics
/// Panics if vertical-rl blocks do not stack from the right edge.
#[test]
fn vertical_rl_stacks_right_to_left() {
    let ctx = context();
    let column = |width: f32| {
        Node::new(Style {
            writing_mode: WritingMode::VerticalRl,
            width: Dimension::px(width),
            ..Style::default()
        })
    };
    let mut root = Node::with_children(
        Style {
            writing_mode: WritingMode::VerticalRl,
            width: Dimension::px(300.0),
            height: Dimension::px(200.0),
            ..Style::default()
        },
        vec![column(50.0), column(40.0)],
    );
    layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(at(&root, 0, 250.0, 0.0));
    assert!(at(&root, 1, 210.0, 0.0));
    assert!(
        root.children
            .iter()
            .all(|child| approx(child.rect.height, 200.0))
    );
}

/// # Panics
/// Panics if sideways-rl blocks are not placed like vertical-rl blocks.
#[test]
fn sideways_rl_stacks_like_vertical_rl() {
    let ctx = context();
    let tree = |mode: WritingMode| {
        let column = |width: f32| {
            Node::new(Style {
                writing_mode: mode,
                width: Dimension::px(width),
                ..Style::default()
            })
        };
        Node::with_children(
            Style {
                writing_mode: mode,
                width: Dimension::px(300.0),
                height: Dimension::px(200.0),
                ..Style::default()
            },
            vec![column(50.0), column(40.0)],
        )
    };
    let mut sideways = tree(WritingMode::SidewaysRl);
    let mut vertical = tree(WritingMode::VerticalRl);
    layout(&mut sideways, Constraints::loose(800.0, 600.0), &ctx);
    layout(&mut vertical, Constraints::loose(800.0, 600.0), &ctx);
    assert!(at(&sideways, 0, 250.0, 0.0));
    assert!(at(&sideways, 1, 210.0, 0.0));
    let rects = |node: &Node| node.children.iter().map(|child| child.rect).collect::<Vec<_>>();
    assert_eq!(rects(&sideways), rects(&vertical));
    assert_eq!(sideways.rect, vertical.rect);
}

/// # Panics
/// Panics if an auto height does not follow the aspect ratio.
#[test]
fn aspect_ratio_derives_height() {
    let ctx = context();
    let mut root = Node::with_children(
        Style::default(),
        vec![Node::new(Style {
            width: Dimension::px(100.0),
            aspect_ratio: Some(2.0),
            ..Style::default()
        })],
    );
    layout(&mut root, Constraints::loose(400.0, 400.0), &ctx);
    assert!(
        root.children
            .first()
            .is_some_and(|child| approx(child.rect.width, 100.0) && approx(child.rect.height, 50.0))
    );
}

/// # Panics
/// Panics if content-box padding is not added around the children.
#[test]
fn padding_offsets_children() {
    let ctx = context();
    let mut root = Node::with_children(
        Style {
            width: Dimension::px(100.0),
            padding: Sides::all(Length::px(10.0)),
            ..Style::default()
        },
        vec![sized(20.0, 20.0)],
    );
    let size = layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(approx(size.width, 120.0) && approx(size.height, 40.0));
    assert!(at(&root, 0, 0.0, 0.0));
}

/// # Panics
/// Panics if forcing a display mode ignores the node's own display.
#[test]
fn forced_algorithms_ignore_display() {
    let ctx = context();
    let mut row = Node::with_children(
        Style::default(),
        vec![sized(30.0, 10.0), sized(30.0, 10.0)],
    );
    layout_flexbox(&mut row, Constraints::loose(200.0, 200.0), &ctx);
    assert!(at(&row, 1, 30.0, 0.0));

    let mut stack = Node::with_children(
        Style {
            display: Display::Flex,
            ..Style::default()
        },
        vec![sized(30.0, 10.0), sized(30.0, 10.0)],
    );
    layout_block(&mut stack, Constraints::loose(200.0, 200.0), &ctx);
    assert!(at(&stack, 1, 0.0, 10.0));
}

/// # Panics
/// Panics if measurements are not cached per node and constraints.
#[test]
fn measure_uses_cache() {
    let ctx = context();
    let node = Node::with_children(Style::default(), vec![sized(30.0, 10.0)]);
    let constraints = Constraints::loose(UNBOUNDED, UNBOUNDED);
    let first = measure(&node, constraints, &ctx);
    let cached = ctx.cached_measurements();
    assert!(cached > 0);
    let second = measure(&node, constraints, &ctx);
    assert_eq!(first, second);
    assert_eq!(ctx.cached_measurements(), cached);
    assert!(approx(first.size.width, 30.0) && approx(first.size.height, 10.0));
    ctx.clear_cache();
    assert_eq!(ctx.cached_measurements(), 0);
}

/// # Panics
/// Panics if a relative or sticky offset is not part of the flow placement,
/// or if it moves the following sibling.
#[test]
fn relative_offset_is_applied_with_flow_placement() {
    let ctx = context();
    let shifted = |position: Position| {
        let mut node = sized(20.0, 20.0);
        node.style.position = position;
        node.style.inset = Sides {
            top: Some(Length::px(4.0)),
            right: Some(Length::px(9.0)),
            left: Some(Length::px(6.0)),
            ..Sides::all(None)
        };
        node
    };
    let mut root = Node::with_children(
        Style::default(),
        vec![
            shifted(Position::Relative),
            shifted(Position::Sticky),
            sized(20.0, 20.0),
        ],
    );
    layout(&mut root, Constraints::loose(800.0, 600.0), &ctx);
    assert!(at(&root, 0, 6.0, 4.0));
    assert!(at(&root, 1, 6.0, 24.0));
    assert!(at(&root, 2, 0.0, 40.0));
}
