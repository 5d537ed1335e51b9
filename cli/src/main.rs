//! CLI entrypoint for req-clarifier
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use clarifier_application::{
    AgentRunner, ArtifactStore, ConversationLogger, FirstOptionInteraction, InteractionPort,
    PipelineInput, RunPipelineUseCase,
};
use clarifier_domain::ConfigIssue;
use clarifier_infrastructure::logging::{parse_level, run_log_layer, run_stamp, transcript_file_name};
use clarifier_infrastructure::{
    ConfigLoader, FileConfig, FsArtifactStore, JsonlConversationLogger, OpenAiAgentGateway,
    RequirementsFileTool, RunLog, read_requirements,
};
use clarifier_presentation::{Cli, ConsoleFormatter, ConsoleInteraction, ProgressReporter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&mut config, &cli);

    if !config.output.color {
        colored::control::set_override(false);
    }

    let issues = config.validate();
    report_config_issues(&issues)?;

    // === Logging ===
    let stamp = run_stamp(chrono::Local::now());
    let log_dir = PathBuf::from(&config.logging.dir);
    let (run_log, writer) = RunLog::create(&log_dir, &stamp)
        .with_context(|| format!("Failed to create run log in {}", log_dir.display()))?;

    let stderr_filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::registry()
        .with(run_log_layer(writer, parse_level(&config.logging.level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_filter(stderr_filter),
        )
        .init();

    info!("Starting req-clarifier (log: {})", run_log.path().display());

    // === Inputs and stores ===
    let input_path = PathBuf::from(&config.input.path);
    let original = match read_requirements(&input_path) {
        Ok(text) => text,
        Err(e) => {
            error!("{}", e);
            return Err(e).context("Cannot start without a requirements document");
        }
    };

    let artifacts = Arc::new(
        FsArtifactStore::open(&config.output.artifacts_dir, &config.output.release_dir)
            .context("Failed to prepare the artifact directory")?,
    );

    // === Dependency Injection ===
    let gateway = OpenAiAgentGateway::from_config(&config.providers.openai, &config.models)
        .context("Failed to configure the agent gateway")?
        .with_tool_executor(Arc::new(RequirementsFileTool::new(&input_path)));

    let mut runner = AgentRunner::new(Arc::new(gateway));
    if config.logging.transcript {
        runner = runner.with_conversation_logger(open_transcript(&log_dir, &stamp)?);
    }

    let interaction: Arc<dyn InteractionPort> = if cli.auto {
        info!("Unattended mode: answering every question with its first option");
        Arc::new(FirstOptionInteraction)
    } else {
        Arc::new(ConsoleInteraction::stdio())
    };

    let params = config.pipeline_params();
    if !cli.quiet {
        println!("{}", ConsoleFormatter::banner(&input_path, params.max_iterations));
    }

    let use_case = RunPipelineUseCase::new(
        runner,
        interaction,
        artifacts.clone() as Arc<dyn ArtifactStore>,
        params,
    );
    let input = PipelineInput::new(input_path.display().to_string(), original);

    let outcome = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    if let Some(halt) = &outcome.halted_on {
        warn!("Pipeline stopped early: {}", halt);
    }
    info!("Run finished");

    println!(
        "{}",
        ConsoleFormatter::format_summary(&outcome, artifacts.artifacts_dir())
    );
    println!("Run log: {}", run_log.path().display());

    Ok(())
}

/// Command-line flags win over every configuration source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(input) = &cli.input {
        config.input.path = input.display().to_string();
    }
    if let Some(max) = cli.max_iterations {
        config.clarification.max_iterations = max as usize;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.artifacts_dir = dir.display().to_string();
    }
    if let Some(model) = &cli.model {
        config.models.override_all(model.clone());
    }
}

fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    eprintln!("{}", ConsoleFormatter::format_config_issues(issues));
    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn open_transcript(log_dir: &Path, stamp: &str) -> Result<Arc<dyn ConversationLogger>> {
    let path = log_dir.join(transcript_file_name(stamp));
    let logger = JsonlConversationLogger::create(&path)
        .with_context(|| format!("Failed to create transcript {}", path.display()))?;
    info!("Conversation transcript: {}", path.display());
    Ok(Arc::new(logger))
}
