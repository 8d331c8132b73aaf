use crate::planner::{MappingView, Rename};
use crate::preview::{render_apply, render_plan, SummaryStyle};
use serde::{Deserialize, Serialize};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of planning a root directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanResult {
    pub root: String,
    pub mapping_file: String,
    pub dry_run: bool,
    pub renames: Vec<Rename>,
    pub errors: Vec<String>,
}

impl PlanResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Result of applying a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyResult {
    pub renamed: Vec<Rename>,
    /// Planning errors followed by move failures
    pub errors: Vec<String>,
}

impl ApplyResult {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat, style: SummaryStyle) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(style),
        }
    }

    fn format_json(&self) -> String;
    fn format_summary(&self, style: SummaryStyle) -> String;
}

#[derive(Serialize)]
struct PlanJson<'a> {
    success: bool,
    operation: &'static str,
    root: &'a str,
    dry_run: bool,
    mapping_file: &'a str,
    renames: MappingView<'a>,
    errors: &'a [String],
}

impl OutputFormatter for PlanResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&PlanJson {
            success: self.is_success(),
            operation: "plan",
            root: &self.root,
            dry_run: self.dry_run,
            mapping_file: &self.mapping_file,
            renames: MappingView::new(&self.renames),
            errors: &self.errors,
        })
        .unwrap_or_default()
    }

    fn format_summary(&self, style: SummaryStyle) -> String {
        render_plan(self, style.preview, style.use_color)
    }
}

#[derive(Serialize)]
struct ApplyJson<'a> {
    success: bool,
    operation: &'static str,
    renamed: MappingView<'a>,
    errors: &'a [String],
}

impl OutputFormatter for ApplyResult {
    fn format_json(&self) -> String {
        serde_json::to_string(&ApplyJson {
            success: self.is_success(),
            operation: "apply",
            renamed: MappingView::new(&self.renamed),
            errors: &self.errors,
        })
        .unwrap_or_default()
    }

    fn format_summary(&self, style: SummaryStyle) -> String {
        render_apply(self, style.use_color)
    }
}
