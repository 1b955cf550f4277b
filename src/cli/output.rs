//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{OutputFormat, PeopleLensArgs};
use crate::engine::Reply;
use crate::error::Result;
use crate::metrics::table::DataTable;

/// Dataset summary shown by the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DatasetStats {
    pub records: usize,
    pub active: usize,
    pub departments: Vec<String>,
    pub earliest_hire_year: Option<i32>,
    pub latest_hire_year: Option<i32>,
}

/// Print one engine reply in the selected format.
///
/// Human mode prints the caption and the rendered table; the chart spec is
/// data for a real renderer and only appears in JSON mode, where the whole
/// reply is serialized.
pub fn output_reply(reply: &Reply, cli_args: &PeopleLensArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => print_json(reply, cli_args),
        OutputFormat::Human => {
            println!("{}", reply.caption);
            if let Some(table) = &reply.table {
                println!();
                print!("{}", render_table(table));
            }
            Ok(())
        }
    }
}

/// Print a labelled result payload in the selected format (human mode prints
/// the message and the payload's JSON fields; JSON mode prints the payload).
pub fn output_result<T: Serialize>(
    message: &str,
    payload: &T,
    cli_args: &PeopleLensArgs,
) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => print_json(payload, cli_args),
        OutputFormat::Human => {
            println!("{message}");
            let value = serde_json::to_value(payload)?;
            if let Value::Object(fields) = value {
                for (name, field) in fields {
                    println!("  {name}: {}", render_value(&field));
                }
            }
            Ok(())
        }
    }
}

/// Serialize any payload to stdout as JSON, honoring `--pretty`.
pub fn print_json<T: Serialize>(payload: &T, cli_args: &PeopleLensArgs) -> Result<()> {
    let json = if cli_args.pretty {
        serde_json::to_string_pretty(payload)?
    } else {
        serde_json::to_string(payload)?
    };
    println!("{json}");
    Ok(())
}

/// Render a result table as aligned text columns.
pub fn render_table(table: &DataTable) -> String {
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(table.len() + 1);
    cells.push(table.columns().to_vec());
    for row in table.rows() {
        cells.push(row.iter().map(|c| c.to_string()).collect());
    }

    let columns = table.columns().len();
    let mut widths = vec![0usize; columns];
    for row in &cells {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for (line, row) in cells.iter().enumerate() {
        let rendered: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(index, cell)| format!("{cell:<width$}", width = widths[index]))
            .collect();
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');

        if line == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("  "));
            out.push('\n');
        }
    }
    out
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(render_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
