//! Markdown table renderer.
//!
//! Contains the fixed-width table layout engine (`Table`) and the document
//! renderer that assembles the comment block, the inputs table, and the
//! outputs table into one markdown document.

use crate::model::{self, Document, Input, Output};
use crate::render::{markdown, Renderer};
use crate::settings::Settings;
use anyhow::Result;

/// Which outer borders a table draws. Markdown tables keep left/right and
/// drop top/bottom.
#[derive(Debug, Clone, Copy)]
pub struct Borders {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Default for Borders {
    fn default() -> Self {
        Borders {
            left: true,
            top: true,
            right: true,
            bottom: true,
        }
    }
}

/// Fixed-width text table builder.
///
/// Every column is padded to its widest cell, measured in characters after
/// any line-break conversion, so a `<br>` marker counts as ordinary text.
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    borders: Borders,
    column_separator: char,
    center_separator: char,
}

impl Table {
    pub fn new() -> Self {
        Table {
            header: Vec::new(),
            rows: Vec::new(),
            borders: Borders::default(),
            column_separator: '|',
            center_separator: '+',
        }
    }

    pub fn set_borders(&mut self, borders: Borders) {
        self.borders = borders;
    }

    #[allow(dead_code)]
    pub fn set_column_separator(&mut self, separator: char) {
        self.column_separator = separator;
    }

    /// Separator used at column junctions in dash rows (default `+`).
    pub fn set_center_separator(&mut self, separator: char) {
        self.center_separator = separator;
    }

    pub fn set_header<S: Into<String>>(&mut self, header: impl IntoIterator<Item = S>) {
        self.header = header.into_iter().map(Into::into).collect();
    }

    pub fn append<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Render the table: header row, dash rule, data rows, plus outer dash
    /// rows where borders are enabled.
    ///
    /// Panics when a data row does not have exactly one cell per header
    /// column — that is a bug in the caller, not bad input data.
    pub fn render(&self) -> String {
        for (i, row) in self.rows.iter().enumerate() {
            assert_eq!(
                row.len(),
                self.header.len(),
                "row {} has {} cells, header has {}",
                i,
                row.len(),
                self.header.len()
            );
        }

        let widths = self.column_widths();
        let mut out = String::new();

        if self.borders.top {
            out.push_str(&self.rule_row(&widths));
        }
        out.push_str(&self.text_row(&self.header, &widths));
        out.push_str(&self.rule_row(&widths));
        for row in &self.rows {
            out.push_str(&self.text_row(row, &widths));
        }
        if self.borders.bottom {
            out.push_str(&self.rule_row(&widths));
        }
        out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn text_row(&self, cells: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        if self.borders.left {
            line.push(self.column_separator);
        }
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push(self.column_separator);
            }
            line.push(' ');
            line.push_str(cell);
            for _ in cell.chars().count()..widths[i] {
                line.push(' ');
            }
            line.push(' ');
        }
        if self.borders.right {
            line.push(self.column_separator);
        }
        line.push('\n');
        line
    }

    fn rule_row(&self, widths: &[usize]) -> String {
        let mut line = String::new();
        if self.borders.left {
            line.push(self.center_separator);
        }
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(self.center_separator);
            }
            line.push_str(&"-".repeat(width + 2));
        }
        if self.borders.right {
            line.push(self.center_separator);
        }
        line.push('\n');
        line
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

/// Renders a Document as markdown tables.
#[derive(Debug)]
pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn render(&self, doc: &mut Document, settings: &Settings) -> Result<String> {
        let mut out = String::new();

        if let Some(ref comment) = doc.comment {
            out.push_str(comment);
            out.push('\n');
        }

        if doc.has_inputs() {
            // Required-first ordering is only honored inside name sorting.
            if settings.sort_by_name {
                if settings.sort_inputs_by_required {
                    model::sort_inputs_by_required(&mut doc.inputs);
                } else {
                    model::sort_inputs_by_name(&mut doc.inputs);
                }
            }
            render_inputs(&mut out, &doc.inputs, settings);
        }

        if doc.has_outputs() {
            if settings.sort_by_name {
                model::sort_outputs_by_name(&mut doc.outputs);
            }
            if doc.has_inputs() {
                out.push('\n');
            }
            render_outputs(&mut out, &doc.outputs);
        }

        Ok(markdown::sanitize(&out))
    }
}

/// A table with the markdown border policy: left/right pipes, no top or
/// bottom rule, pipe junctions in the header rule.
fn markdown_table() -> Table {
    let mut table = Table::new();
    table.set_borders(Borders {
        left: true,
        top: false,
        right: true,
        bottom: false,
    });
    table.set_center_separator('|');
    table
}

fn render_inputs(out: &mut String, inputs: &[Input], settings: &Settings) {
    out.push_str("## Inputs\n\n");

    let mut table = markdown_table();
    let mut header = vec!["Name", "Description", "Type", "Default"];
    if settings.with_required {
        header.push("Required");
    }
    table.set_header(header);

    for input in inputs {
        table.append(input_row(input, settings));
    }

    out.push_str(&table.render());
}

fn render_outputs(out: &mut String, outputs: &[Output]) {
    out.push_str("## Outputs\n\n");

    let mut table = markdown_table();
    table.set_header(["Name", "Description"]);

    for output in outputs {
        table.append([
            markdown::escape_name(&output.name),
            markdown::convert_multi_line_text(&output.description),
        ]);
    }

    out.push_str(&table.render());
}

fn input_row(input: &Input, settings: &Settings) -> Vec<String> {
    let mut row = vec![
        markdown::escape_name(&input.name),
        markdown::convert_multi_line_text(&input.description),
        input.type_expr.clone(),
        default_cell(input),
    ];
    if settings.with_required {
        row.push(required_cell(input).to_string());
    }
    row
}

fn default_cell(input: &Input) -> String {
    match input.default {
        Some(ref value) => format!("`{}`", model::printable_value(value)),
        None => "n/a".to_string(),
    }
}

fn required_cell(input: &Input) -> &'static str {
    if input.is_required() {
        "yes"
    } else {
        "no"
    }
}
