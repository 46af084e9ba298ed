//! CSS Values and Units Module Level 4 — Lengths and sizing keywords.
//! Spec: <https://www.w3.org/TR/css-values-4/>

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_6_dimensions;
pub mod chapter_7_sizing_keywords;

// Re-exports for ergonomic access from other crates.
pub use chapter_6_dimensions::{Length, LengthContext, LengthUnit};
pub use chapter_7_sizing_keywords::Dimension;
