// ABOUTME: Export pipeline: prompts, resolves, indexes, selects, extracts, and serializes in one pass.
// ABOUTME: Pipeline is host-agnostic; the document, prompts, and file output are injected capabilities.

use std::path::PathBuf;

use tracing::{error, info};

use crate::dom::{Dom, HtmlDom};
use crate::error::{ExportError, Result};
use crate::extractors::columns::select_columns;
use crate::extractors::header::index_header;
use crate::extractors::resolve::{resolve_container, resolve_table};
use crate::extractors::rows::extract_rows;
use crate::formats::{csv_file_name, render_csv, render_json};
use crate::options::{ColumnMode, ExportFormat, Options, PipelineBuilder};
use crate::prompt::{Prompt, PromptKey, Prompter};
use crate::record::Record;
use crate::sink::ArtifactSink;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Records plus their pretty JSON rendering, meant for stdout.
    Json {
        records: Vec<Record>,
        columns: Vec<String>,
        rendered: String,
    },
    /// A CSV artifact handed to the sink.
    Csv {
        file_name: String,
        path: PathBuf,
        rows: usize,
        columns: Vec<String>,
    },
}

impl Outcome {
    pub fn rows(&self) -> usize {
        match self {
            Outcome::Json { records, .. } => records.len(),
            Outcome::Csv { rows, .. } => *rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        match self {
            Outcome::Json { columns, .. } | Outcome::Csv { columns, .. } => columns,
        }
    }

    pub fn format(&self) -> ExportFormat {
        match self {
            Outcome::Json { .. } => ExportFormat::Json,
            Outcome::Csv { .. } => ExportFormat::Csv,
        }
    }
}

/// A configured, reusable export run.
#[derive(Debug, Clone)]
pub struct Pipeline {
    opts: Options,
}

impl Pipeline {
    pub fn new(opts: Options) -> Self {
        Self { opts }
    }

    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Parse `html` and run against it.
    pub fn run_html<P: Prompter, S: ArtifactSink>(
        &self,
        html: &str,
        prompter: &mut P,
        sink: &mut S,
    ) -> Result<Outcome> {
        let dom = HtmlDom::parse(html);
        self.run(&dom, prompter, sink)
    }

    /// Run every stage once. A failure is logged here before it is returned,
    /// so callers only need to map it to an exit status.
    pub fn run<D: Dom, P: Prompter, S: ArtifactSink>(
        &self,
        dom: &D,
        prompter: &mut P,
        sink: &mut S,
    ) -> Result<Outcome> {
        let result = self.run_stages(dom, prompter, sink);
        if let Err(ref e) = result {
            if e.is_cancelled() {
                info!("export cancelled");
            } else {
                error!("{}", e);
            }
        }
        result
    }

    fn run_stages<D: Dom, P: Prompter, S: ArtifactSink>(
        &self,
        dom: &D,
        prompter: &mut P,
        sink: &mut S,
    ) -> Result<Outcome> {
        let table_prompt = Prompt::new(
            PromptKey::TableSelector,
            "Table selector (e.g. 'table' or '#myTableId')",
        )
        .with_default(&self.opts.default_table_selector);
        let answer = prompter
            .ask(&table_prompt)
            .ok_or_else(|| ExportError::cancelled("table selector"))?;
        let table_selector = match answer.trim() {
            "" => self.opts.default_table_selector.as_str(),
            s => s,
        };
        let table = resolve_table(dom, table_selector)?;
        let header = index_header(dom, table)?;

        let container_prompt = Prompt::new(
            PromptKey::ContainerSelector,
            "Global selector of the row container (e.g. 'tbody[tabindex=\"-1\"]' or 'div.data-rows')",
        )
        .with_default(&self.opts.default_container_selector);
        let container_selector = ask_non_blank(prompter, &container_prompt, "container selector")?;
        let container = resolve_container(dom, &container_selector, prompter)?;

        let example = match self.opts.column_mode {
            ColumnMode::Names => header
                .names()
                .iter()
                .take(2)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
            ColumnMode::Indices => (0..header.len().min(2))
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(","),
        };
        let columns_prompt = Prompt::new(
            PromptKey::Columns,
            format!(
                "Column {} to export, comma-separated (e.g. '{}')",
                self.opts.column_mode, example
            ),
        );
        let columns_input = ask_non_blank(prompter, &columns_prompt, "columns")?;
        let selection = select_columns(self.opts.column_mode, &header, &columns_input)?;

        let records = extract_rows(dom, container, &selection)?;
        if records.is_empty() {
            return Err(ExportError::empty_result(
                "extract rows",
                "no data rows found in the selected container",
            ));
        }

        let format = match self.opts.column_mode {
            ColumnMode::Names => {
                let format_prompt =
                    Prompt::new(PromptKey::Format, "Export format ('json' or 'csv')")
                        .with_default(ExportFormat::Json.to_string());
                let answer = prompter
                    .ask(&format_prompt)
                    .ok_or_else(|| ExportError::cancelled("format"))?;
                ExportFormat::from(answer.as_str())
            }
            ColumnMode::Indices => ExportFormat::Json,
        };

        let columns = selection.names();
        let outcome = match format {
            ExportFormat::Json => {
                let rendered = render_json(&records)?;
                info!("export succeeded (JSON): {} rows", records.len());
                Outcome::Json {
                    records,
                    columns,
                    rendered,
                }
            }
            ExportFormat::Csv => {
                let file_name = csv_file_name(self.opts.export_date);
                let text = render_csv(&columns, &records);
                let path = sink.persist(&file_name, &text)?;
                info!(
                    "export succeeded (CSV): {} rows written to {}",
                    records.len(),
                    path.display()
                );
                Outcome::Csv {
                    file_name,
                    path,
                    rows: records.len(),
                    columns,
                }
            }
        };
        info!("exported columns: {}", outcome.columns().join(", "));
        Ok(outcome)
    }
}

// None or a blank answer cancels the run.
fn ask_non_blank<P: Prompter>(prompter: &mut P, prompt: &Prompt, stage: &str) -> Result<String> {
    match prompter.ask(prompt) {
        Some(answer) if !answer.trim().is_empty() => Ok(answer.trim().to_string()),
        _ => Err(ExportError::cancelled(stage)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use crate::sink::MemorySink;

    const PAGE: &str = r#"<table><thead><tr><th>Name</th><th>Age</th></tr></thead>
        <tbody tabindex="-1"><tr><td>Alice</td><td>30</td></tr></tbody></table>"#;

    #[test]
    fn blank_table_answer_uses_default() {
        let mut prompter = ScriptedPrompter::new(["  ", "tbody", "Name", "json"]);
        let mut sink = MemorySink::default();
        let outcome = Pipeline::builder()
            .build()
            .run_html(PAGE, &mut prompter, &mut sink)
            .unwrap();
        assert_eq!(outcome.rows(), 1);
    }

    #[test]
    fn blank_container_answer_cancels() {
        let mut prompter = ScriptedPrompter::new(["table", " "]);
        let mut sink = MemorySink::default();
        let err = Pipeline::builder()
            .build()
            .run_html(PAGE, &mut prompter, &mut sink)
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn cancelled_format_prompt_aborts_without_output() {
        let mut prompter = ScriptedPrompter::new(["table", "tbody", "Age"]).then_cancel();
        let mut sink = MemorySink::default();
        let err = Pipeline::builder()
            .build()
            .run_html(PAGE, &mut prompter, &mut sink)
            .unwrap_err();
        assert!(err.is_cancelled());
        assert!(sink.artifacts.is_empty());
    }

    #[test]
    fn blank_or_unknown_format_means_json() {
        for answer in ["", "xlsx"] {
            let mut prompter = ScriptedPrompter::new(["table", "tbody", "Age", answer]);
            let mut sink = MemorySink::default();
            let outcome = Pipeline::builder()
                .build()
                .run_html(PAGE, &mut prompter, &mut sink)
                .unwrap();
            assert_eq!(outcome.format(), ExportFormat::Json, "answer {:?}", answer);
            assert!(sink.artifacts.is_empty());
        }
    }

    #[test]
    fn index_mode_never_asks_format() {
        let mut prompter = ScriptedPrompter::new(["table", "tbody", "1,0"]);
        let mut sink = MemorySink::default();
        let outcome = Pipeline::builder()
            .column_mode(ColumnMode::Indices)
            .build()
            .run_html(PAGE, &mut prompter, &mut sink)
            .unwrap();
        assert_eq!(outcome.columns(), &["Age".to_string(), "Name".to_string()]);
        assert!(!prompter.asked().contains(&PromptKey::Format));
    }
}
