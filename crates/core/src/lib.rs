// ABOUTME: Main library entry point for the tabex HTML table exporter.
// ABOUTME: Re-exports the public API: Pipeline, PipelineBuilder, Outcome, ExportError, capabilities.

//! tabex - export selected columns of an HTML table as JSON or CSV.
//!
//! The pipeline asks for a table selector, a row-container selector (searched
//! across the whole document) and a list of columns, then serializes one
//! record per row. Prompts, the document and file output are capabilities,
//! so the same pipeline runs in a terminal or against in-memory fakes.
//!
//! # Example
//!
//! ```no_run
//! use tabex_core::{MemorySink, Pipeline, ScriptedPrompter};
//!
//! let html = std::fs::read_to_string("page.html").unwrap();
//! let mut answers = ScriptedPrompter::new(["table", "tbody", "Name,Age", "json"]);
//! let mut sink = MemorySink::default();
//! if let Ok(outcome) = Pipeline::builder().build().run_html(&html, &mut answers, &mut sink) {
//!     println!("{} rows", outcome.rows());
//! }
//! ```

pub mod dom;
pub mod error;
pub mod extractors;
pub mod formats;
pub mod options;
pub mod pipeline;
pub mod prompt;
pub mod record;
pub mod sink;
pub mod source;

pub use crate::dom::{Dom, HtmlDom};
pub use crate::error::{ErrorCode, ExportError, Result};
pub use crate::extractors::columns::{Column, ColumnSelection};
pub use crate::extractors::header::Header;
pub use crate::options::{
    ColumnMode, ExportFormat, Options, PipelineBuilder, DEFAULT_CONTAINER_SELECTOR,
    DEFAULT_TABLE_SELECTOR,
};
pub use crate::pipeline::{Outcome, Pipeline};
pub use crate::prompt::{
    DefaultsPrompter, PresetPrompter, Prompt, PromptKey, Prompter, ScriptedPrompter,
    TerminalPrompter,
};
pub use crate::record::Record;
pub use crate::sink::{ArtifactSink, DirectorySink, MemorySink};
