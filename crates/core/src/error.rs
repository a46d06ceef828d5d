// ABOUTME: Error types for the table export pipeline including ErrorCode enum and ExportError struct.
// ABOUTME: Provides categorized errors with convenience constructors and boolean helpers.

use std::fmt;

/// Error codes representing the categories of a failed export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotFound,
    InvalidChoice,
    EmptyResult,
    Cancelled,
    Selector,
    Source,
    Persist,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::NotFound => "not found",
            ErrorCode::InvalidChoice => "invalid choice",
            ErrorCode::EmptyResult => "empty result",
            ErrorCode::Cancelled => "cancelled",
            ErrorCode::Selector => "invalid selector",
            ErrorCode::Source => "source error",
            ErrorCode::Persist => "persist error",
        };
        write!(f, "{}", s)
    }
}

/// The error returned by every stage of an export run.
///
/// `stage` names the pipeline step that gave up (e.g. `"resolve table"`),
/// `message` is the human-readable detail that gets logged.
#[derive(Debug, thiserror::Error)]
pub struct ExportError {
    pub code: ErrorCode,
    pub stage: String,
    pub message: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tabex: {}: {}: {}", self.stage, self.code, self.message)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl ExportError {
    fn new(code: ErrorCode, stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            stage: stage.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attach an underlying cause.
    pub fn with_source(mut self, source: anyhow::Error) -> Self {
        self.source = Some(source);
        self
    }

    /// Create a NotFound error.
    pub fn not_found(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, stage, message)
    }

    /// Create an InvalidChoice error.
    pub fn invalid_choice(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidChoice, stage, message)
    }

    /// Create an EmptyResult error.
    pub fn empty_result(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptyResult, stage, message)
    }

    /// Create a Cancelled error.
    pub fn cancelled(stage: impl Into<String>) -> Self {
        Self::new(ErrorCode::Cancelled, stage, "export cancelled")
    }

    /// Create a Selector error.
    pub fn selector(stage: impl Into<String>, selector: &str) -> Self {
        Self::new(
            ErrorCode::Selector,
            stage,
            format!("cannot parse selector \"{}\"", selector),
        )
    }

    /// Create a Source error.
    pub fn source_failed(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Source, target, message)
    }

    /// Create a Persist error.
    pub fn persist(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Persist, name, message)
    }

    /// Returns true if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::NotFound
    }

    /// Returns true if this is an InvalidChoice error.
    pub fn is_invalid_choice(&self) -> bool {
        self.code == ErrorCode::InvalidChoice
    }

    /// Returns true if this is an EmptyResult error.
    pub fn is_empty_result(&self) -> bool {
        self.code == ErrorCode::EmptyResult
    }

    /// Returns true if the run was cancelled at a prompt.
    pub fn is_cancelled(&self) -> bool {
        self.code == ErrorCode::Cancelled
    }

    /// Returns true if this is a Selector error.
    pub fn is_selector(&self) -> bool {
        self.code == ErrorCode::Selector
    }

    /// Returns true if this is a Source error.
    pub fn is_source(&self) -> bool {
        self.code == ErrorCode::Source
    }

    /// Returns true if this is a Persist error.
    pub fn is_persist(&self) -> bool {
        self.code == ErrorCode::Persist
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ExportError>;
