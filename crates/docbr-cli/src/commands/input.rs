//! Value sources shared by the per-type commands.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use docbr_core::DocInput;

/// Where document values come from.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Values to process (read from --input or stdin when omitted)
    pub values: Vec<String>,

    /// Read values from a file: one per line, or a CSV column
    #[arg(short, long, conflicts_with = "values")]
    pub input: Option<PathBuf>,

    /// CSV column holding the values (defaults to the first column)
    #[arg(long)]
    pub column: Option<String>,
}

impl InputArgs {
    /// Collect the values into a batch.
    ///
    /// A single positional value is a scalar; anything read from a file or
    /// stdin is a list.
    pub fn load(&self) -> anyhow::Result<DocInput> {
        match (self.values.as_slice(), &self.input) {
            ([single], _) => Ok(DocInput::Scalar(single.clone())),
            (values, _) if !values.is_empty() => Ok(DocInput::List(values.to_vec())),
            (_, Some(path)) => Ok(DocInput::List(read_values(path, self.column.as_deref())?)),
            _ => Ok(DocInput::List(read_stdin()?)),
        }
    }
}

/// Read values from a file.
///
/// CSV is used when a column is named or the file has a `.csv` extension;
/// otherwise every non-blank line is a value.
pub fn read_values(path: &Path, column: Option<&str>) -> anyhow::Result<Vec<String>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let values = if column.is_some() || is_csv {
        read_csv_column(path, column)?
    } else {
        fs::read_to_string(path)?
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    };

    debug!("Read {} values from {}", values.len(), path.display());
    Ok(values)
}

fn read_csv_column(path: &Path, column: Option<&str>) -> anyhow::Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;

    let index = match column {
        Some(name) => reader
            .headers()?
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| anyhow::anyhow!("Column '{}' not found in {}", name, path.display()))?,
        None => 0,
    };

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        values.push(record.get(index).unwrap_or_default().to_string());
    }

    Ok(values)
}

fn read_stdin() -> anyhow::Result<Vec<String>> {
    let mut values = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            values.push(line);
        }
    }

    debug!("Read {} values from stdin", values.len());
    Ok(values)
}
