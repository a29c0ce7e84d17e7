//! Parse command - canonical (optionally masked) document values.

use clap::Args;
use tracing::info;

use docbr_core::{DocbrConfig, Dispatcher, OutputFormat};

use super::input::InputArgs;
use super::output::{render, Table};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Document type (cpf, cnpj, cnh, te, pis, rnvam, cert, placa, email, tfone)
    doctype: String,

    #[command(flatten)]
    input: InputArgs,

    /// Apply the canonical mask (e.g. 826.836.883-77)
    #[arg(short, long)]
    mask: bool,

    /// Output format (defaults to the configured one)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

pub fn run(args: ParseArgs, config: &DocbrConfig) -> anyhow::Result<()> {
    let input = args.input.load()?;
    let dispatcher = Dispatcher::from_config(&config.engine);

    let parsed = dispatcher.parse(&args.doctype, input.values(), args.mask)?;
    info!(
        "Parsed {} of {} values as {}",
        parsed.iter().flatten().count(),
        parsed.len(),
        args.doctype
    );

    let mut table = Table::new(["input", "value"]);
    for (raw, value) in input.values().iter().zip(&parsed) {
        table.push(vec![Some(raw.clone()), value.clone()]);
    }

    let shaped = input.shape(parsed);
    let format = args.format.unwrap_or(config.output.format);
    print!(
        "{}",
        render(format, &shaped, &table, input.is_scalar(), &config.output.null_value)?
    );

    Ok(())
}
