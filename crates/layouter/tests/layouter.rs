#![allow(
    clippy::tests_outside_test_module,
    reason = "integration tests are compiled as their own test crate"
)]

use layouter::builder::{fixed, hstack, text};
use layouter::{
    Constraints, LayoutConfig, Layouter, Length, Node, NodeExt as _, Position, Rect, Sides, Style,
    TextMeasurer, TextMetrics, TextStyle,
};

fn init_logging() {
    let _logger = env_logger::builder().is_test(true).try_init();
}

fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.001
}

fn child_rect(root: &Node, index: usize) -> Option<Rect> {
    root.children.get(index).map(|child| child.rect)
}

/// Ten pixels per character, whatever the font size.
struct MonospaceTen;

impl TextMeasurer for MonospaceTen {
    fn measure(&self, text: &str, _style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance: text.chars().count() as f32 * 10.0,
            ascent: 8.0,
            descent: 2.0,
        }
    }
}

/// # Panics
/// Panics if a fixed box is not placed against the configured viewport.
#[test]
fn fixed_boxes_use_configured_viewport() {
    init_logging();
    let pinned = fixed(20.0, 20.0).with_position(
        Position::Fixed,
        Sides {
            right: Some(0.0),
            bottom: Some(0.0),
            ..Sides::all(None)
        },
    );
    let mut root = Node::with_children(Style::default(), vec![pinned]).with_padding(10.0);
    let layouter = Layouter::new(LayoutConfig::with_viewport(400.0, 300.0));
    let size = layouter.layout(&mut root);
    assert!(approx(size.width, 400.0));
    // The viewport starts at (-10, -10) relative to the root's content box.
    assert!(
        child_rect(&root, 0).is_some_and(|rect| approx(rect.x, 370.0) && approx(rect.y, 270.0))
    );
}

/// # Panics
/// Panics if viewport units ignore the configured viewport.
#[test]
fn viewport_units_follow_config() {
    init_logging();
    let mut root = Node::with_children(
        Style::default(),
        vec![Node::default().with_width(Length::vw(50.0))],
    );
    let layouter = Layouter::new(LayoutConfig::with_viewport(400.0, 300.0));
    layouter.layout(&mut root);
    assert!(child_rect(&root, 0).is_some_and(|rect| approx(rect.width, 200.0)));
}

/// # Panics
/// Panics if a JSON config is not applied to the pass.
#[test]
fn json_config_drives_layout() {
    init_logging();
    let config =
        LayoutConfig::from_json_str(r#"{ "viewport_width": 500, "root_font_size": 10 }"#);
    let layouter = config.map(Layouter::new).unwrap_or_default();
    let mut root = Node::with_children(
        Style::default(),
        vec![Node::default().with_width(Length::rem(3.0))],
    );
    let size = layouter.layout(&mut root);
    assert!(approx(size.width, 500.0));
    assert!(child_rect(&root, 0).is_some_and(|rect| approx(rect.width, 30.0)));
}

/// # Panics
/// Panics if measuring writes geometry into the tree.
#[test]
fn measure_leaves_tree_untouched() {
    init_logging();
    let root = hstack(vec![fixed(40.0, 30.0), fixed(60.0, 50.0)]);
    let measured = Layouter::default().measure(&root, Constraints::unconstrained());
    assert!(approx(measured.size.width, 100.0) && approx(measured.size.height, 50.0));
    assert_eq!(root.rect, Rect::ZERO);
    assert!(root.children.iter().all(|child| child.rect == Rect::ZERO));
}

/// # Panics
/// Panics if the injected text measurer is not used.
#[test]
fn custom_measurer_sizes_text() {
    init_logging();
    let measurer = MonospaceTen;
    let layouter = Layouter::with_measurer(LayoutConfig::default(), &measurer);
    let mut root = hstack(vec![text("abc"), text("de")]);
    layouter.layout(&mut root);
    assert!(child_rect(&root, 0).is_some_and(|rect| approx(rect.width, 30.0)));
    assert!(
        child_rect(&root, 1).is_some_and(|rect| approx(rect.x, 30.0) && approx(rect.width, 20.0))
    );
}

/// # Panics
/// Panics if the root is not moved back to the origin.
#[test]
fn root_is_placed_at_origin() {
    init_logging();
    let mut root = fixed(10.0, 10.0);
    root.rect = Rect::new(40.0, 40.0, 0.0, 0.0);
    Layouter::default().layout(&mut root);
    assert_eq!(root.rect, Rect::new(0.0, 0.0, 10.0, 10.0));
}

/// # Panics
/// Panics if hidden nodes keep geometry or take up space in the row.
#[test]
fn hidden_nodes_snapshot_as_empty() {
    init_logging();
    let mut root = hstack(vec![fixed(10.0, 10.0).hidden(), fixed(20.0, 10.0)]);
    let snapshot = Layouter::default().snapshot(&mut root);
    assert!(snapshot.at(&[0]).is_some_and(|hidden| {
        approx(hidden.width, 0.0) && approx(hidden.height, 0.0)
    }));
    assert!(snapshot.at(&[1]).is_some_and(|shown| approx(shown.x, 0.0)));
    assert!(
        snapshot
            .to_json()
            .is_ok_and(|json| json.contains("\"children\"") && json.contains("\"width\": 20.0"))
    );
}
