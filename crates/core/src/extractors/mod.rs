// ABOUTME: Table extraction stages that run before serialization.
// ABOUTME: Includes selector resolution, header indexing, column selection, and row extraction.

//! Table extraction module.
//!
//! Each stage consumes the previous one's output and can abort the run:
//! - `resolve`: finds the table and the row container (with disambiguation).
//! - `header`: reads header names and builds the name→index map.
//! - `columns`: turns the user's column request into a validated selection.
//! - `rows`: reads one `Record` per row of the chosen container.

pub mod columns;
pub mod header;
pub mod resolve;
pub mod rows;
