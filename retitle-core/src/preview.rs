use crate::output::{ApplyResult, PlanResult};
use crate::planner::Rename;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use nu_ansi_term::Color as AnsiColor;
use std::fmt::Write;

/// How the planned mapping is shown in summary output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preview {
    /// One `  old -> new` line per rename
    #[default]
    List,
    Table,
}

/// Presentation settings for summary output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SummaryStyle {
    pub preview: Preview,
    pub use_color: bool,
}

fn paint(text: &str, color: AnsiColor, use_color: bool) -> String {
    if use_color {
        color.paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn render_list(renames: &[Rename]) -> String {
    let mut output = String::new();
    for rename in renames {
        writeln!(output, "  {} -> {}", rename.from, rename.to).unwrap();
    }
    output
}

pub fn render_table(renames: &[Rename], use_color: bool) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if use_color {
        table.enforce_styling();
        table.set_header(vec![
            Cell::new("Current").fg(Color::Cyan),
            Cell::new("New").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Current", "New"]);
    }

    for rename in renames {
        if use_color {
            table.add_row(vec![
                Cell::new(&rename.from),
                Cell::new(&rename.to).fg(Color::Green),
            ]);
        } else {
            table.add_row(vec![&rename.from, &rename.to]);
        }
    }

    format!("{table}\n")
}

fn render_errors(output: &mut String, errors: &[String], use_color: bool) {
    writeln!(output, "\n{}", paint("Errors:", AnsiColor::Red, use_color)).unwrap();
    for error in errors {
        writeln!(output, "  {error}").unwrap();
    }
}

/// Render the plan summary: the mapping, then either the hint to re-run with
/// `--apply` (dry run) or nothing (the apply summary follows).
pub fn render_plan(result: &PlanResult, preview: Preview, use_color: bool) -> String {
    let mut output = String::new();

    if result.renames.is_empty() {
        writeln!(output, "No directories to rename.").unwrap();
        for error in &result.errors {
            writeln!(output, "{error}").unwrap();
        }
        return output;
    }

    writeln!(output, "Planned renames:").unwrap();
    match preview {
        Preview::List => output.push_str(&render_list(&result.renames)),
        Preview::Table => output.push_str(&render_table(&result.renames, use_color)),
    }

    if result.dry_run {
        writeln!(
            output,
            "\nRun with --apply to execute git mv for each mapping."
        )
        .unwrap();
        if !result.errors.is_empty() {
            render_errors(&mut output, &result.errors, use_color);
        }
    }

    output
}

/// Render the per-entry apply results followed by the final verdict.
pub fn render_apply(result: &ApplyResult, use_color: bool) -> String {
    let mut output = String::new();

    for rename in &result.renamed {
        writeln!(
            output,
            "{} {} -> {}",
            paint("Renamed:", AnsiColor::Green, use_color),
            rename.from,
            rename.to
        )
        .unwrap();
    }

    if result.errors.is_empty() {
        writeln!(output, "\nAll renames applied successfully.").unwrap();
    } else {
        render_errors(&mut output, &result.errors, use_color);
    }

    output
}
