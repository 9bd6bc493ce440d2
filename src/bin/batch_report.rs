use anyhow::Context;
use clap::Parser;
use numerology_report::core::BatchConfigProvider;
use numerology_report::utils::{logger, validation::Validate};
use numerology_report::{BatchEngine, BatchPipeline, LocalStorage, TomlConfig};

#[derive(Parser)]
#[command(name = "batch_report")]
#[command(about = "Generate numerology reports for every row of a CSV file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "numerology-batch.toml")]
    config: String,

    /// Override the output directory from the config
    #[arg(long)]
    output_path: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show what would be processed without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting batch report run");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    // 命令列覆蓋設定
    if let Some(output_path) = &args.output_path {
        config.set_output_path(output_path.clone());
        tracing::info!("🔧 Output path overridden to: {}", output_path);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no files will be written");
        return Ok(());
    }

    let pipeline = BatchPipeline::new(LocalStorage::default(), config);
    let engine = BatchEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            println!("✅ {} reports written to {}", summary.reports, summary.output_path);
            if !summary.failures.is_empty() {
                println!("⚠️ {} rows could not be processed:", summary.failures.len());
                for failure in &summary.failures {
                    println!("  row {}: {}", failure.row, failure.error);
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Batch: {}", config.batch.name);
    if let Some(description) = &config.batch.description {
        tracing::info!("   {}", description);
    }
    tracing::info!(
        "📥 Input: {} (columns '{}', '{}')",
        config.input_file(),
        config.name_column(),
        config.birth_date_column()
    );
    tracing::info!(
        "📤 Output: {} as {}",
        config.output_path(),
        config.output_formats().join(", ")
    );
}
