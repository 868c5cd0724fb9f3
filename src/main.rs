use clap::Parser;
use concordia_contact::utils::error::ErrorSeverity;
use concordia_contact::utils::{guard, logger, validation::Validate};
use concordia_contact::{CliConfig, ConsolePage, SiteConfig, SiteError, SubmissionPipeline};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    guard::install_panic_hook();

    tracing::info!("Starting concordia-contact");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入配置
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            SiteConfig::from_file(path)?
        }
        None => SiteConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut pipeline = SubmissionPipeline::new(Arc::new(ConsolePage::new()), &config)?;
    let snapshot = cli.snapshot();

    if cli.dry_run {
        match pipeline.preview(&snapshot) {
            Ok(text) => println!("{}", text),
            Err(e) => report(e.into()),
        }
        return Ok(());
    }

    match pipeline.submit(&snapshot).await {
        Ok(receipt) => {
            tracing::info!(
                "✅ Message prepared at {} ({} chars)",
                receipt.committed_at,
                receipt.payload.chars().count()
            );
        }
        Err(e) => report(e.into()),
    }

    Ok(())
}

fn report(e: SiteError) -> ! {
    tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
