//! Batch processing command for multiple value files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, ValueEnum};
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use docbr_core::{DocInput, DocbrConfig, Dispatcher, OutputFormat};

use super::attributes::attribute_names;
use super::input::read_values;
use super::output::{flag, render, Table};

/// What to compute for every value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BatchMode {
    /// Canonical values
    Parse,
    /// Validity flags
    Validate,
    /// Named attributes
    Attributes,
}

impl BatchMode {
    fn name(&self) -> &'static str {
        match self {
            BatchMode::Parse => "parse",
            BatchMode::Validate => "validate",
            BatchMode::Attributes => "attributes",
        }
    }
}

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Document type (cpf, cnpj, cnh, te, pis, rnvam, cert, placa, email, tfone)
    doctype: String,

    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Operation to run on every value
    #[arg(long, value_enum, default_value = "validate")]
    mode: BatchMode,

    /// Apply the canonical mask (parse mode)
    #[arg(short, long)]
    mask: bool,

    /// Values are already normalized (validate and attributes modes)
    #[arg(short, long)]
    lazy: bool,

    /// Attribute to extract (attributes mode, repeatable)
    #[arg(short, long = "attr", default_value = "*")]
    attrs: Vec<String>,

    /// CSV column holding the values
    #[arg(long)]
    column: Option<String>,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file (defaults to the configured one)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    records: usize,
    hits: usize,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config: &DocbrConfig) -> anyhow::Result<()> {
    let start = Instant::now();
    let dispatcher = Dispatcher::from_config(&config.engine);
    let format = args.format.unwrap_or(config.output.format);

    // Bad type or attribute names abort before any file is read
    dispatcher.registry().lookup(&args.doctype)?;
    if args.mode == BatchMode::Attributes {
        attribute_names(&dispatcher, &args.doctype, &args.attrs)?;
    }

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match process_file(&path, &args, &dispatcher, config, format) {
            Ok(result) => results.push(result),
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        records: 0,
                        hits: 0,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    pb.abandon();
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.error.is_none()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let records: usize = successful.iter().map(|r| r.records).sum();
    let hits: usize = successful.iter().map(|r| r.hits).sum();

    println!();
    println!(
        "{} Processed {} files ({} values) in {:?}",
        style("✓").green(),
        results.len(),
        records,
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );
    println!(
        "   {} of {} values {}",
        style(hits).cyan(),
        records,
        match args.mode {
            BatchMode::Parse => "parsed",
            BatchMode::Validate => "valid",
            BatchMode::Attributes => "with attributes",
        }
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_file(
    path: &Path,
    args: &BatchArgs,
    dispatcher: &Dispatcher,
    config: &DocbrConfig,
    format: OutputFormat,
) -> anyhow::Result<FileResult> {
    let input = DocInput::List(read_values(path, args.column.as_deref())?);
    let values = input.values();
    let null_value = &config.output.null_value;

    let (content, hits) = match args.mode {
        BatchMode::Parse => {
            let parsed = dispatcher.parse(&args.doctype, values, args.mask)?;
            let hits = parsed.iter().flatten().count();

            let mut table = Table::new(["input", "value"]);
            for (raw, value) in values.iter().zip(&parsed) {
                table.push(vec![Some(raw.clone()), value.clone()]);
            }
            (render(format, &input.shape(parsed), &table, false, null_value)?, hits)
        }
        BatchMode::Validate => {
            let valid = dispatcher.validate(&args.doctype, values, args.lazy)?;
            let hits = valid.iter().filter(|v| **v).count();

            let mut table = Table::new(["input", "valid"]);
            for (raw, ok) in values.iter().zip(&valid) {
                table.push(vec![Some(raw.clone()), flag(*ok)]);
            }
            (render(format, &input.shape(valid), &table, false, null_value)?, hits)
        }
        BatchMode::Attributes => {
            let column = dispatcher.attributes(&args.doctype, values, &args.attrs, args.lazy)?;
            let names = attribute_names(dispatcher, &args.doctype, &args.attrs)?;
            let table = Table::from_attributes(values, &names, &column);

            let extracted = column.into_values();
            let hits = extracted.iter().filter(|v| v.is_present()).count();
            (render(format, &input.shape(extracted), &table, false, null_value)?, hits)
        }
    };

    if let Some(output_dir) = &args.output_dir {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("values");
        let output_path = output_dir.join(format!("{}.{}.{}", stem, args.mode.name(), format.extension()));

        fs::write(&output_path, content)?;
        debug!("Wrote output to {}", output_path.display());
    }

    Ok(FileResult {
        path: path.to_path_buf(),
        records: values.len(),
        hits,
        error: None,
    })
}
