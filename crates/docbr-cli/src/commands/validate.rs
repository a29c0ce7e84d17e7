//! Validate command - checksum and pattern validity.

use clap::Args;
use tracing::info;

use docbr_core::{DocbrConfig, Dispatcher, OutputFormat};

use super::input::InputArgs;
use super::output::{flag, render, Table};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Document type (cpf, cnpj, cnh, te, pis, rnvam, cert, placa, email, tfone)
    doctype: String,

    #[command(flatten)]
    input: InputArgs,

    /// Values are already normalized; skip digit normalization
    #[arg(short, long)]
    lazy: bool,

    /// Output format (defaults to the configured one)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

pub fn run(args: ValidateArgs, config: &DocbrConfig) -> anyhow::Result<()> {
    let input = args.input.load()?;
    let dispatcher = Dispatcher::from_config(&config.engine);

    let valid = dispatcher.validate(&args.doctype, input.values(), args.lazy)?;
    info!(
        "{} of {} values are valid {}",
        valid.iter().filter(|v| **v).count(),
        valid.len(),
        args.doctype
    );

    let mut table = Table::new(["input", "valid"]);
    for (raw, ok) in input.values().iter().zip(&valid) {
        table.push(vec![Some(raw.clone()), flag(*ok)]);
    }

    let shaped = input.shape(valid);
    let format = args.format.unwrap_or(config.output.format);
    print!(
        "{}",
        render(format, &shaped, &table, input.is_scalar(), &config.output.null_value)?
    );

    Ok(())
}
