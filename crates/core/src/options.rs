// ABOUTME: Configuration for the export pipeline: ExportFormat, ColumnMode, Options, and PipelineBuilder.
// ABOUTME: PipelineBuilder provides a fluent API for constructing Pipeline instances with custom settings.

use std::fmt;

use chrono::{NaiveDate, Utc};

use crate::pipeline::Pipeline;

/// Selector used when the table prompt is left blank.
pub const DEFAULT_TABLE_SELECTOR: &str = "table";

/// Global selector for the element holding the data rows.
pub const DEFAULT_CONTAINER_SELECTOR: &str = r#"tbody[tabindex="-1"]"#;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        };
        write!(f, "{}", s)
    }
}

impl From<&str> for ExportFormat {
    /// Anything but `csv` (case-insensitive) means JSON.
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("csv") {
            ExportFormat::Csv
        } else {
            ExportFormat::Json
        }
    }
}

/// How the user names the columns to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    /// Comma-separated header names; the format prompt is offered.
    #[default]
    Names,
    /// Comma-separated zero-based indices; output is always JSON.
    Indices,
}

impl fmt::Display for ColumnMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ColumnMode::Names => "names",
            ColumnMode::Indices => "indices",
        };
        write!(f, "{}", s)
    }
}

/// Configuration options for a Pipeline.
#[derive(Debug, Clone)]
pub struct Options {
    pub column_mode: ColumnMode,
    pub default_table_selector: String,
    pub default_container_selector: String,
    pub export_date: NaiveDate,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            column_mode: ColumnMode::Names,
            default_table_selector: DEFAULT_TABLE_SELECTOR.to_string(),
            default_container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            export_date: Utc::now().date_naive(),
        }
    }
}

/// Builder for constructing Pipeline instances with custom configuration.
#[derive(Debug, Clone)]
pub struct PipelineBuilder {
    opts: Options,
}

impl PipelineBuilder {
    /// Create a new PipelineBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Choose how columns are requested.
    pub fn column_mode(mut self, mode: ColumnMode) -> Self {
        self.opts.column_mode = mode;
        self
    }

    /// Override the default offered at the table prompt.
    pub fn default_table_selector(mut self, selector: impl Into<String>) -> Self {
        self.opts.default_table_selector = selector.into();
        self
    }

    /// Override the default offered at the container prompt.
    pub fn default_container_selector(mut self, selector: impl Into<String>) -> Self {
        self.opts.default_container_selector = selector.into();
        self
    }

    /// Fix the date used in the CSV file name.
    pub fn export_date(mut self, date: NaiveDate) -> Self {
        self.opts.export_date = date;
        self
    }

    /// Build the Pipeline with the configured options.
    pub fn build(self) -> Pipeline {
        Pipeline::new(self.opts)
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
