use clap::Parser;
use contact_printer::utils::error::ErrorSeverity;
use contact_printer::utils::{logger, validation::Validate};
use contact_printer::{CliConfig, LocalStorage, PrintEngine, SimplePipeline, StdoutSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting contact-printer CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // Sources resolve relative to the working directory
    let storage = LocalStorage::new(".".to_string());
    let pipeline = SimplePipeline::new(storage, config, StdoutSink);

    let engine = PrintEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(printed) => {
            tracing::info!("✅ Printed {} contacts", printed);
        }
        Err(e) => {
            tracing::error!(
                "❌ Print run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
