//! tb - Task Breakdown Assistant
//!
//! CLI entry point acting as a minimal local hosting shell.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use taskbreakdown::app::{App, HANDLERS, VIEWS};
use taskbreakdown::breakdown::{BreakdownHandler, BreakdownResult, TaskRequest};
use taskbreakdown::cli::{Cli, Command, OutputFormat, get_log_path};
use taskbreakdown::config::Config;
use taskbreakdown::form::task_breakdown_form;
use taskbreakdown::llm::create_client;

fn parse_level(s: &str) -> Option<tracing::Level> {
    match s.to_uppercase().as_str() {
        "TRACE" => Some(tracing::Level::TRACE),
        "DEBUG" => Some(tracing::Level::DEBUG),
        "INFO" => Some(tracing::Level::INFO),
        "WARN" | "WARNING" => Some(tracing::Level::WARN),
        "ERROR" => Some(tracing::Level::ERROR),
        _ => None,
    }
}

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Priority: CLI --log-level > config file > INFO
    let level = match cli_log_level.or(config_log_level) {
        Some(s) => parse_level(s).unwrap_or_else(|| {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
            tracing::Level::INFO
        }),
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(provider = %config.llm.provider, model = %config.llm.model, "tb loaded config");

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Form => cmd_form(),
        Command::Info => cmd_info(),
        Command::Breakdown { task, format } => cmd_breakdown(&config, &task.join(" "), format).await,
        Command::Handle { name, input } => cmd_handle(&config, &name, input.as_ref()).await,
    }
}

/// Build the handler from config; the client is created once here
fn build_handler(config: &Config) -> Result<BreakdownHandler> {
    debug!("build_handler: called");
    config.validate()?;
    let llm = create_client(&config.llm).context("Failed to create LLM client")?;
    Ok(BreakdownHandler::new(llm, config.llm.model.clone())?)
}

fn cmd_form() -> Result<()> {
    debug!("cmd_form: called");
    println!("{}", serde_json::to_string_pretty(&task_breakdown_form())?);
    Ok(())
}

fn cmd_info() -> Result<()> {
    debug!("cmd_info: called");
    println!(
        "{} {}",
        taskbreakdown::app::APP_NAME.bold(),
        taskbreakdown::app::APP_VERSION.dimmed()
    );
    println!("{}", taskbreakdown::app::APP_DESCRIPTION);
    println!("  Views:    {}", VIEWS.join(", ").cyan());
    println!("  Handlers: {}", HANDLERS.join(", ").cyan());
    Ok(())
}

async fn cmd_breakdown(config: &Config, task: &str, format: OutputFormat) -> Result<()> {
    debug!(task_len = task.len(), ?format, "cmd_breakdown: called");
    let request = TaskRequest::new(task);
    // Reject empty input before touching credentials or the network
    request.validated_task()?;

    let handler = build_handler(config)?;
    let result = handler.break_down_task(&request).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print_result(&result),
    }
    Ok(())
}

async fn cmd_handle(config: &Config, name: &str, input: Option<&PathBuf>) -> Result<()> {
    debug!(%name, ?input, "cmd_handle: called");
    let request = read_request(input)?;

    let app = App::new(build_handler(config)?);
    let result = app.handle(name, &request).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn read_request(input: Option<&PathBuf>) -> Result<serde_json::Value> {
    let content = match input {
        Some(path) => read_file(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            buf
        }
    };
    serde_json::from_str(&content).context("Request is not valid JSON")
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).context(format!("Failed to read {}", path.display()))
}

fn print_result(result: &BreakdownResult) {
    println!("{}", result.title.bold());
    if result.items.is_empty() {
        println!("  {}", "(no subtasks)".dimmed());
        return;
    }
    for (i, item) in result.items.iter().enumerate() {
        println!("{:>3}. {}", i + 1, item.title.green());
        if !item.body.is_empty() {
            println!("     {}", item.body);
        }
    }
}
