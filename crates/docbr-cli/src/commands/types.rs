//! Types command - list supported document types and their attributes.

use clap::Args;
use console::style;
use serde_json::json;

use docbr_core::{Category, DocumentDescriptor, DocumentRegistry, OutputFormat};
use docbr_core::engine::Format;

use super::output::Table;

/// Arguments for the types command.
#[derive(Args)]
pub struct TypesArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: TypesArgs) -> anyhow::Result<()> {
    let registry = DocumentRegistry::global();

    match args.format {
        OutputFormat::Json => {
            let types: Vec<_> = registry
                .iter()
                .map(|d| {
                    json!({
                        "type": d.kind.key(),
                        "category": d.category.name(),
                        "length": length(d),
                        "modulo": modulo(d),
                        "pattern": pattern(d),
                        "mask": mask(d),
                        "attributes": d.attribute_names(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&types)?);
        }
        OutputFormat::Csv => {
            let mut table = Table::new(["type", "category", "length", "mask", "attributes"]);
            for d in registry.iter() {
                table.push(vec![
                    Some(d.kind.key().to_string()),
                    Some(d.category.name().to_string()),
                    length(d).map(|l| l.to_string()),
                    Some(mask(d).to_string()),
                    Some(d.attribute_names().join(" ")),
                ]);
            }
            print!("{}", table.to_csv("")?);
        }
        OutputFormat::Text => {
            for d in registry.iter() {
                let attributes = d.attribute_names();
                println!(
                    "{:<6} {:<12} {:<42} {}",
                    style(d.kind.key()).bold(),
                    d.category.name(),
                    mask(d),
                    if attributes.is_empty() {
                        style("(no attributes)".to_string()).dim()
                    } else {
                        style(attributes.join(", ")).cyan()
                    }
                );
            }
        }
    }

    Ok(())
}

fn length(descriptor: &DocumentDescriptor) -> Option<usize> {
    match descriptor.category {
        Category::CheckDigit(spec) => Some(spec.length()),
        Category::Pattern(_) => None,
    }
}

fn modulo(descriptor: &DocumentDescriptor) -> Option<u32> {
    match descriptor.category {
        Category::CheckDigit(spec) => Some(spec.checksum().modulo()),
        Category::Pattern(_) => None,
    }
}

fn pattern(descriptor: &DocumentDescriptor) -> Option<&'static str> {
    match descriptor.category {
        Category::CheckDigit(_) => None,
        Category::Pattern(spec) => Some(spec.matcher().pattern().as_str()),
    }
}

fn mask(descriptor: &DocumentDescriptor) -> &'static str {
    match descriptor.format {
        Format::Mask(mask) => mask,
        Format::Custom(_) => "custom",
        Format::None => "-",
    }
}
