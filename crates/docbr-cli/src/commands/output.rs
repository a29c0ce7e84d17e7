//! Result rendering for json, csv and text output.

use serde::Serialize;

use docbr_core::{AttributeColumn, OutputFormat};

/// Row view of a result, used for csv and text output.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new<H: Into<String>>(headers: impl IntoIterator<Item = H>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    /// Table of attribute results, one column per attribute name.
    pub fn from_attributes(inputs: &[String], names: &[&str], column: &AttributeColumn) -> Self {
        let mut table = Table::new(std::iter::once("input").chain(names.iter().copied()));

        match column {
            AttributeColumn::Values(values) => {
                for (input, value) in inputs.iter().zip(values) {
                    table.push(vec![Some(input.clone()), value.clone()]);
                }
            }
            AttributeColumn::Maps(maps) => {
                for (input, map) in inputs.iter().zip(maps) {
                    let mut row = vec![Some(input.clone())];
                    row.extend(
                        names
                            .iter()
                            .map(|name| map.as_ref().and_then(|m| m.get(name)).map(str::to_string)),
                    );
                    table.push(row);
                }
            }
        }

        table
    }

    pub fn to_csv(&self, null_value: &str) -> anyhow::Result<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or(null_value)))?;
        }

        let data = String::from_utf8(wtr.into_inner()?)?;
        Ok(data)
    }

    /// Tab-separated rows. A scalar result prints only its value columns.
    pub fn to_text(&self, null_value: &str, scalar: bool) -> String {
        let cell = |c: &Option<String>| c.as_deref().unwrap_or(null_value).to_string();

        if scalar {
            if let Some(row) = self.rows.first() {
                if row.len() == 2 {
                    return format!("{}\n", cell(&row[1]));
                }
                return self.headers[1..]
                    .iter()
                    .zip(&row[1..])
                    .map(|(header, value)| format!("{}: {}\n", header, cell(value)))
                    .collect();
            }
        }

        let mut output = String::new();
        output.push_str(&self.headers.join("\t"));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&row.iter().map(cell).collect::<Vec<_>>().join("\t"));
            output.push('\n');
        }
        output
    }
}

/// Render a result. JSON mirrors the input shape; csv and text use `table`.
pub fn render<T: Serialize>(
    format: OutputFormat,
    shaped: &T,
    table: &Table,
    scalar: bool,
    null_value: &str,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(shaped)?)),
        OutputFormat::Csv => table.to_csv(null_value),
        OutputFormat::Text => Ok(table.to_text(null_value, scalar)),
    }
}

/// `true`/`false` cell.
pub fn flag(value: bool) -> Option<String> {
    Some(value.to_string())
}
