//! Grid item placement algorithm.
//!
//! Spec: §8 Placing Grid Items
//! <https://www.w3.org/TR/css-grid-2/#placement>
//!
//! Placement runs in flow-relative coordinates: the "major" axis is the one
//! auto-placement advances through (rows for `grid-auto-flow: row`), the
//! "minor" axis is the one it fills (columns).

use log::debug;

use crate::areas::GridTemplateAreas;
use crate::types::{GridAutoFlow, GridItem};

/// Area occupied by a grid item (row/column span).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridArea {
    /// Row start line (1-indexed)
    pub row_start: usize,
    /// Row end line (1-indexed, exclusive)
    pub row_end: usize,
    /// Column start line (1-indexed)
    pub col_start: usize,
    /// Column end line (1-indexed, exclusive)
    pub col_end: usize,
}

impl GridArea {
    /// Create a new grid area.
    pub const fn new(row_start: usize, row_end: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// Get the row span (number of rows occupied).
    pub const fn row_span(&self) -> usize {
        self.row_end.saturating_sub(self.row_start)
    }

    /// Get the column span (number of columns occupied).
    pub const fn col_span(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    /// Zero-based index of the first row track.
    pub const fn first_row(&self) -> usize {
        self.row_start.saturating_sub(1)
    }

    /// Zero-based index of the first column track.
    pub const fn first_col(&self) -> usize {
        self.col_start.saturating_sub(1)
    }

    /// Check if this area overlaps with another area.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.row_start < other.row_end
            && self.row_end > other.row_start
            && self.col_start < other.col_end
            && self.col_end > other.col_start
    }
}

/// Number of explicit tracks in each axis, after auto-repeat expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExplicitGrid {
    pub rows: usize,
    pub columns: usize,
}

/// Placement of an item along one axis, zero-based track indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisPlacement {
    Definite { start: usize, span: usize },
    Auto { span: usize },
}

impl AxisPlacement {
    const fn span(self) -> usize {
        match self {
            Self::Definite { span, .. } | Self::Auto { span } => span,
        }
    }

    const fn end(self) -> usize {
        match self {
            Self::Definite { start, span } => start + span,
            Self::Auto { span } => span,
        }
    }
}

/// Highest line number honoured; larger lines and spans are clamped so a
/// stray value cannot allocate an unbounded implicit grid.
pub const MAX_GRID_LINE: i32 = 1000;

/// Largest span an item may take along one axis.
const MAX_SPAN: usize = MAX_GRID_LINE as usize - 1;

/// Zero-based line index for a CSS line number; `0` means auto.
///
/// Negative lines count back from the end of the explicit grid.
fn resolve_line(line: i32, explicit_tracks: usize) -> Option<usize> {
    match line.clamp(-MAX_GRID_LINE, MAX_GRID_LINE) {
        0 => None,
        positive if positive > 0 => Some(positive as usize - 1),
        negative => {
            let from_end = explicit_tracks as i64 + 1 + i64::from(negative);
            Some(from_end.max(0) as usize)
        }
    }
}

/// Resolve start/end lines and span into a placement for one axis.
///
/// An end line that is unset or non-positive, or not after the start,
/// becomes `start + span`.
fn resolve_axis(
    start: Option<i32>,
    end: Option<i32>,
    span: usize,
    explicit_tracks: usize,
) -> AxisPlacement {
    let span = span.clamp(1, MAX_SPAN);
    let start_line = start.and_then(|line| resolve_line(line, explicit_tracks));
    let end_line = end
        .filter(|line| *line > 0)
        .and_then(|line| resolve_line(line, explicit_tracks));
    match (start_line, end_line) {
        (Some(first), Some(last)) if last > first => AxisPlacement::Definite {
            start: first,
            span: last - first,
        },
        (Some(first), _) => AxisPlacement::Definite { start: first, span },
        (None, Some(last)) => {
            let first = last.saturating_sub(span);
            AxisPlacement::Definite {
                start: first,
                span: last.saturating_sub(first).max(1),
            }
        }
        (None, None) => AxisPlacement::Auto { span },
    }
}

/// Occupied cells, indexed `[major][minor]`. Rows beyond the end are free.
struct Occupancy {
    minor_count: usize,
    cells: Vec<Vec<bool>>,
}

impl Occupancy {
    const fn new(minor_count: usize) -> Self {
        Self {
            minor_count,
            cells: Vec::new(),
        }
    }

    fn is_free(&self, major: usize, minor: usize, major_span: usize, minor_span: usize) -> bool {
        if minor + minor_span > self.minor_count {
            return false;
        }
        (major..major + major_span).all(|row| {
            self.cells.get(row).is_none_or(|cells| {
                (minor..minor + minor_span).all(|col| !cells.get(col).copied().unwrap_or(false))
            })
        })
    }

    fn mark(&mut self, major: usize, minor: usize, major_span: usize, minor_span: usize) {
        self.grow_minor(minor + minor_span);
        let needed = major + major_span;
        if self.cells.len() < needed {
            self.cells.resize(needed, vec![false; self.minor_count]);
        }
        for row in self.cells.iter_mut().skip(major).take(major_span) {
            for cell in row.iter_mut().skip(minor).take(minor_span) {
                *cell = true;
            }
        }
    }

    fn grow_minor(&mut self, minor_count: usize) {
        if minor_count > self.minor_count {
            self.minor_count = minor_count;
            for row in &mut self.cells {
                row.resize(minor_count, false);
            }
        }
    }

    /// First free position scanning in flow order from `(major, minor)`.
    fn first_free_from(
        &self,
        major: usize,
        minor: usize,
        major_span: usize,
        minor_span: usize,
    ) -> (usize, usize) {
        let last_minor = self.minor_count.saturating_sub(minor_span);
        let mut row = major;
        let mut col = minor;
        loop {
            while col <= last_minor {
                if self.is_free(row, col, major_span, minor_span) {
                    return (row, col);
                }
                col += 1;
            }
            row += 1;
            col = 0;
        }
    }

    /// First row at or after `major` where the item fits at a fixed minor position.
    fn first_free_row(
        &self,
        major: usize,
        minor: usize,
        major_span: usize,
        minor_span: usize,
    ) -> usize {
        let mut row = major;
        while !self.is_free(row, minor, major_span, minor_span) {
            row += 1;
        }
        row
    }
}

/// Item placement in flow-relative terms.
#[derive(Clone, Copy)]
struct FlowItem {
    major: AxisPlacement,
    minor: AxisPlacement,
}

/// Place grid items according to the grid placement algorithm.
///
/// Spec: §8.5 Grid Item Placement Algorithm
/// <https://www.w3.org/TR/css-grid-2/#auto-placement-algo>
///
/// Items with both lines definite are placed first, then items locked to a
/// major track, then the rest in order. Sparse packing only moves the cursor
/// forward; dense packing restarts from the first cell for every item.
pub fn place_grid_items<NodeId>(
    items: &[GridItem<NodeId>],
    explicit: ExplicitGrid,
    auto_flow: GridAutoFlow,
    areas: Option<&GridTemplateAreas>,
) -> Vec<GridArea> {
    let column_flow = auto_flow.is_column();
    let dense = auto_flow.is_dense();
    let flow_items: Vec<FlowItem> = items
        .iter()
        .map(|item| flow_item(item, explicit, areas, column_flow))
        .collect();

    let explicit_minor = if column_flow { explicit.rows } else { explicit.columns };
    let minor_count = flow_items
        .iter()
        .map(|item| item.minor.end())
        .fold(explicit_minor.max(1), usize::max);
    let mut occupancy = Occupancy::new(minor_count);
    let mut positions: Vec<Option<(usize, usize)>> = vec![None; flow_items.len()];

    for (slot, item) in positions.iter_mut().zip(&flow_items) {
        if let (
            AxisPlacement::Definite {
                start: major,
                span: major_span,
            },
            AxisPlacement::Definite {
                start: minor,
                span: minor_span,
            },
        ) = (item.major, item.minor)
        {
            occupancy.mark(major, minor, major_span, minor_span);
            *slot = Some((major, minor));
        }
    }

    let mut lane_cursors: Vec<usize> = Vec::new();
    for (slot, item) in positions.iter_mut().zip(&flow_items) {
        if let (
            AxisPlacement::Definite {
                start: major,
                span: major_span,
            },
            AxisPlacement::Auto { span },
        ) = (item.major, item.minor)
        {
            let from = if dense {
                0
            } else {
                lane_cursors.get(major).copied().unwrap_or(0)
            };
            let last = occupancy.minor_count.saturating_sub(span);
            let minor = (from..=last)
                .find(|minor| occupancy.is_free(major, *minor, major_span, span))
                .unwrap_or(occupancy.minor_count);
            occupancy.mark(major, minor, major_span, span);
            if lane_cursors.len() <= major {
                lane_cursors.resize(major + 1, 0);
            }
            if let Some(cursor) = lane_cursors.get_mut(major) {
                *cursor = minor + span;
            }
            *slot = Some((major, minor));
        }
    }

    let mut cursor = (0usize, 0usize);
    for (slot, item) in positions.iter_mut().zip(&flow_items) {
        if slot.is_some() {
            continue;
        }
        let major_span = item.major.span();
        let placed = match item.minor {
            AxisPlacement::Definite { start: minor, span } => {
                let from = if dense {
                    0
                } else if minor < cursor.1 {
                    cursor.0 + 1
                } else {
                    cursor.0
                };
                (occupancy.first_free_row(from, minor, major_span, span), minor)
            }
            AxisPlacement::Auto { span } => {
                let (major, minor) = if dense { (0, 0) } else { cursor };
                occupancy.first_free_from(major, minor, major_span, span)
            }
        };
        occupancy.mark(placed.0, placed.1, major_span, item.minor.span());
        if !dense {
            cursor = (placed.0, placed.1 + item.minor.span());
        }
        *slot = Some(placed);
    }

    let placements: Vec<GridArea> = positions
        .into_iter()
        .zip(&flow_items)
        .map(|(position, item)| {
            let (major, minor) = position.unwrap_or_default();
            to_area(major, minor, item.major.span(), item.minor.span(), column_flow)
        })
        .collect();
    debug!(
        target: "css::grid::placement",
        "[GRID-PLACE] flow={auto_flow:?} items={} minor_tracks={} areas={placements:?}",
        items.len(),
        occupancy.minor_count
    );
    placements
}

fn flow_item<NodeId>(
    item: &GridItem<NodeId>,
    explicit: ExplicitGrid,
    areas: Option<&GridTemplateAreas>,
    column_flow: bool,
) -> FlowItem {
    let named = item
        .area
        .as_deref()
        .and_then(|name| areas.and_then(|template| template.get(name)));
    let (row_start, row_end, col_start, col_end) = named.map_or(
        (item.row_start, item.row_end, item.col_start, item.col_end),
        |area| {
            (
                Some(area.row_start),
                Some(area.row_end),
                Some(area.col_start),
                Some(area.col_end),
            )
        },
    );
    let rows = resolve_axis(row_start, row_end, item.row_span, explicit.rows);
    let columns = resolve_axis(col_start, col_end, item.col_span, explicit.columns);
    if column_flow {
        FlowItem {
            major: columns,
            minor: rows,
        }
    } else {
        FlowItem {
            major: rows,
            minor: columns,
        }
    }
}

const fn to_area(
    major: usize,
    minor: usize,
    major_span: usize,
    minor_span: usize,
    column_flow: bool,
) -> GridArea {
    if column_flow {
        GridArea::new(minor + 1, minor + minor_span + 1, major + 1, major + major_span + 1)
    } else {
        GridArea::new(major + 1, major + major_span + 1, minor + 1, minor + minor_span + 1)
    }
}
