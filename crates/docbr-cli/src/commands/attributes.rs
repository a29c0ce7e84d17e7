//! Attributes command - named sub-fields of each document.

use clap::Args;
use tracing::info;

use docbr_core::engine::select_attributes;
use docbr_core::{DocbrConfig, Dispatcher, OutputFormat};

use super::input::InputArgs;
use super::output::{render, Table};

/// Arguments for the attributes command.
#[derive(Args)]
pub struct AttributesArgs {
    /// Document type (cpf, cnpj, te, cert, placa, email, tfone)
    doctype: String,

    #[command(flatten)]
    input: InputArgs,

    /// Attribute to extract (repeatable, "*" for all)
    #[arg(short, long = "attr", required = true)]
    attrs: Vec<String>,

    /// Values are already normalized; skip digit normalization
    #[arg(short, long)]
    lazy: bool,

    /// Output format (defaults to the configured one)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

pub fn run(args: AttributesArgs, config: &DocbrConfig) -> anyhow::Result<()> {
    let input = args.input.load()?;
    let dispatcher = Dispatcher::from_config(&config.engine);

    let column = dispatcher.attributes(&args.doctype, input.values(), &args.attrs, args.lazy)?;
    let names = attribute_names(&dispatcher, &args.doctype, &args.attrs)?;
    info!("Extracted {:?} from {} {} values", names, column.len(), args.doctype);

    let table = Table::from_attributes(input.values(), &names, &column);
    let shaped = input.shape(column.into_values());
    let format = args.format.unwrap_or(config.output.format);
    print!(
        "{}",
        render(format, &shaped, &table, input.is_scalar(), &config.output.null_value)?
    );

    Ok(())
}

/// Resolved attribute names, in output column order.
pub fn attribute_names(
    dispatcher: &Dispatcher,
    doctype: &str,
    requested: &[String],
) -> anyhow::Result<Vec<&'static str>> {
    let descriptor = dispatcher.registry().lookup(doctype)?;
    let selection = select_attributes(doctype, descriptor.attributes, requested)?;
    Ok(selection.names())
}
