//! Named grid areas.
//!
//! Spec: §7.3 Named Areas: the `grid-template-areas` property
//! <https://www.w3.org/TR/css-grid-2/#grid-template-areas-property>

use std::collections::HashMap;

/// A named rectangle of grid lines (1-based, end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedArea {
    pub row_start: i32,
    pub row_end: i32,
    pub col_start: i32,
    pub col_end: i32,
}

/// Resolved `grid-template-areas`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridTemplateAreas {
    areas: HashMap<String, NamedArea>,
    rows: usize,
    columns: usize,
}

impl GridTemplateAreas {
    /// Build areas from template rows such as `["header header", "nav main"]`.
    ///
    /// `.` cells are unnamed. A name used in non-adjacent cells covers their
    /// bounding rectangle.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let mut areas: HashMap<String, NamedArea> = HashMap::new();
        let mut columns = 0usize;
        for (row_index, row) in rows.iter().enumerate() {
            let line = row_index as i32 + 1;
            let cells: Vec<&str> = row.as_ref().split_whitespace().collect();
            columns = columns.max(cells.len());
            for (col_index, name) in cells.into_iter().enumerate() {
                if name.chars().all(|character| character == '.') {
                    continue;
                }
                let col_line = col_index as i32 + 1;
                areas
                    .entry(name.to_owned())
                    .and_modify(|area| {
                        area.row_start = area.row_start.min(line);
                        area.row_end = area.row_end.max(line + 1);
                        area.col_start = area.col_start.min(col_line);
                        area.col_end = area.col_end.max(col_line + 1);
                    })
                    .or_insert(NamedArea {
                        row_start: line,
                        row_end: line + 1,
                        col_start: col_line,
                        col_end: col_line + 1,
                    });
            }
        }
        Self {
            areas,
            rows: rows.len(),
            columns,
        }
    }

    /// Add or replace a named area directly.
    pub fn insert(&mut self, name: impl Into<String>, area: NamedArea) {
        self.rows = self.rows.max(area.row_end.saturating_sub(1).max(0) as usize);
        self.columns = self.columns.max(area.col_end.saturating_sub(1).max(0) as usize);
        self.areas.insert(name.into(), area);
    }

    pub fn get(&self, name: &str) -> Option<NamedArea> {
        self.areas.get(name).copied()
    }

    /// Rows spanned by the template; these count as explicit tracks.
    pub const fn row_count(&self) -> usize {
        self.rows
    }

    /// Columns spanned by the template.
    pub const fn column_count(&self) -> usize {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Panics
    /// Panics if areas are not parsed into the expected rectangles.
    #[test]
    fn parses_template_rows() {
        let template = GridTemplateAreas::from_rows(&["header header", "nav main", ". main"]);
        assert_eq!(template.row_count(), 3);
        assert_eq!(template.column_count(), 2);
        assert_eq!(
            template.get("header"),
            Some(NamedArea {
                row_start: 1,
                row_end: 2,
                col_start: 1,
                col_end: 3
            })
        );
        assert_eq!(
            template.get("main"),
            Some(NamedArea {
                row_start: 2,
                row_end: 4,
                col_start: 2,
                col_end: 3
            })
        );
        assert_eq!(template.get("."), None);
        assert_eq!(template.get("footer"), None);
    }
}
