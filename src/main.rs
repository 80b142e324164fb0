use clap::Parser;
use dep_artifacts::core::ConfigProvider;
use dep_artifacts::utils::error::ErrorCategory;
use dep_artifacts::utils::{logger, validation::Validate};
use dep_artifacts::{ArtifactPipeline, CliConfig, EtlEngine, FileLineSource, TomlConfig, INPUT_PATH};
use tokio::io::AsyncWriteExt;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Some(path) = config.config.clone() {
        let file = match TomlConfig::from_file(&path).and_then(|f| f.validate().map(|_| f)) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        };
        config = config.merge_file(&file);
    }

    logger::init_cli_logger(config.verbose(), config.log_filter.as_deref());
    tracing::debug!("CLI config: {:?}", config);

    let mut engine = EtlEngine::new(FileLineSource::new(INPUT_PATH), ArtifactPipeline::new());
    let mut stdout = tokio::io::stdout();

    match engine.run_with_policy(&mut stdout, config.error_policy()).await {
        Ok(summary) => {
            if summary.aborted {
                tracing::warn!(
                    "Stopped after {} lines; {} fragments were written",
                    summary.lines_read,
                    summary.fragments_written
                );
            }
        }
        Err(e) => {
            tracing::error!("Run failed: {} (Category: {:?})", e, e.category());
            if e.category() != ErrorCategory::Input {
                // Input errors were already printed by the engine.
                eprintln!("❌ {}", e.user_friendly_message());
            }
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    stdout.flush().await?;
    Ok(())
}
