//! CLI application for Brazilian document parsing and validation.

mod commands;

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use commands::{attributes, batch, config, parse, types, validate};

/// Brazilian documents - parse, validate and extract attributes from CPF, CNPJ,
/// plates, phones and more
#[derive(Parser)]
#[command(name = "docbr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Canonical (optionally masked) values
    Parse(parse::ParseArgs),

    /// Check digits and patterns
    Validate(validate::ValidateArgs),

    /// Extract named attributes
    Attributes(attributes::AttributesArgs),

    /// Process multiple value files
    Batch(batch::BatchArgs),

    /// List supported document types
    Types(types::TypesArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
        command => execute(command, cli.config.as_deref()),
    }
}

fn execute(command: Commands, config_path: Option<&str>) -> anyhow::Result<()> {
    let settings = config::load(config_path)?;

    if settings.engine.num_threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(settings.engine.num_threads)
            .build_global()?;
        debug!("Using {} worker threads", settings.engine.num_threads);
    }

    match command {
        Commands::Parse(args) => parse::run(args, &settings),
        Commands::Validate(args) => validate::run(args, &settings),
        Commands::Attributes(args) => attributes::run(args, &settings),
        Commands::Batch(args) => batch::run(args, &settings),
        Commands::Types(args) => types::run(args),
        Commands::Config(args) => config::run(args, config_path),
    }
}
