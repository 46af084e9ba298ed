//! Serializable copy of a laid-out tree, for renderers and golden files.

use anyhow::{Context as _, Result};
use css_core::Node;
use css_text::TextLine;
use serde::{Deserialize, Serialize};
use serde_json::to_string_pretty;

/// Geometry of one node and its subtree after layout.
///
/// Coordinates are relative to the parent's content-box origin, as in
/// [`Node::rect`]. Hidden children are kept, with a zero rect, so indices
/// match the source tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f32>,
    /// Line boxes of a text leaf.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<LineSnapshot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

/// One line box of a text leaf, relative to the leaf's content box.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSnapshot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub words: Vec<String>,
}

impl From<&TextLine> for LineSnapshot {
    fn from(line: &TextLine) -> Self {
        Self {
            x: line.offset_x,
            y: line.offset_y,
            width: line.width,
            words: line.runs.iter().map(|run| run.text.clone()).collect(),
        }
    }
}

impl LayoutSnapshot {
    pub fn capture(node: &Node) -> Self {
        Self {
            x: node.rect.x,
            y: node.rect.y,
            width: node.rect.width,
            height: node.rect.height,
            baseline: node.baseline,
            lines: node
                .text_layout
                .as_ref()
                .map(|layout| layout.lines.iter().map(LineSnapshot::from).collect())
                .unwrap_or_default(),
            children: node.children.iter().map(Self::capture).collect(),
        }
    }

    /// Number of nodes in the snapshot, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Child at `path`, one index per level.
    pub fn at(&self, path: &[usize]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |node, index| node.children.get(*index))
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    /// Returns an error if a value cannot be represented in JSON.
    pub fn to_json(&self) -> Result<String> {
        to_string_pretty(self).context("failed to serialize layout snapshot")
    }
}
