use clap::Parser;
use numerology_report::utils::{logger, validation::Validate};
use numerology_report::{CliConfig, FormInput, InMemorySession, OutputFormat, ReportEngine};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting numerology-report");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Input validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let engine = ReportEngine::new(Duration::from_millis(config.latency_ms));
    let mut session = InMemorySession::new();
    let form = FormInput::new(config.name.trim(), config.birth_date.trim());

    match engine.generate(&mut session, form).await {
        Ok(report) => match config.format {
            OutputFormat::Text => print!("{}", report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        },
        Err(e) => {
            tracing::error!(
                "❌ Report generation failed: {} (Category: {:?}, Severity: {:?})",
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
