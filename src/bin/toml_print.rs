use anyhow::Context;
use clap::Parser;
use contact_printer::config::toml_config::TomlConfig;
use contact_printer::utils::{logger, validation::Validate};
use contact_printer::{LocalStorage, PrintEngine, SimplePipeline, StdoutSink};

#[derive(Parser)]
#[command(name = "toml-print")]
#[command(about = "Contact printing driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "print-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-driven contact printer");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    config
        .validate()
        .context("configuration validation failed")?;

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitor_enabled());

    let storage = LocalStorage::new(".".to_string());
    let pipeline = SimplePipeline::new(storage, config, StdoutSink);
    let engine = PrintEngine::new_with_monitoring(pipeline, monitor_enabled);

    let printed = engine.run().await.context("print run failed")?;
    tracing::info!("✅ Printed {} contacts", printed);

    Ok(())
}
