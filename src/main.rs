//! Artifex — tool-calling agent CLI.
//!
//! Usage:
//!   artifex chat           Interactive session with the demo tools
//!   artifex ask <prompt>   One-shot question
//!   artifex tools          List registered tool schemas

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use artifex::agent::Agent;
use artifex::config::{self, AgentConfig};
use artifex::llm::OpenAiClient;
use artifex::tools::{builtin, ToolRegistry};

#[derive(Parser, Debug)]
#[command(name = "artifex")]
#[command(version = "0.1.0")]
#[command(about = "Tool-calling LLM agent runtime")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file.
    #[arg(long, default_value = "~/.artifex/artifex.toml")]
    config: String,

    /// Log level (debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Ask a single question and print the answer.
    Ask {
        /// The user prompt.
        prompt: String,
    },

    /// List the registered tool schemas.
    Tools,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let config_path: PathBuf = config::resolve_path(&cli.config);
    let cfg = config::load_config(&config_path)?;

    match cli.command {
        Commands::Chat => cmd_chat(&cfg).await,
        Commands::Ask { prompt } => cmd_ask(&cfg, &prompt).await,
        Commands::Tools => cmd_tools(),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

fn build_agent(cfg: &AgentConfig) -> Result<Agent> {
    let Some(api_key) = cfg.resolved_api_key() else {
        bail!(
            "No API key configured. Set OPENAI_API_KEY or add api_key to {}",
            config::default_config_path().display()
        );
    };

    let llm = Arc::new(OpenAiClient::new(&cfg.api_base_url, &api_key, cfg.max_tokens));
    let agent = Agent::new(
        llm,
        &cfg.model,
        cfg.effective_system_prompt(),
        builtin::demo_tools(),
    )
    .with_max_iterations(cfg.max_iterations);

    Ok(agent)
}

async fn cmd_chat(cfg: &AgentConfig) -> Result<()> {
    let mut agent = build_agent(cfg)?;

    println!(
        "{} Chat session with {} ({} tools). Type 'reset' to clear history, 'exit' to quit.",
        ">>>".green().bold(),
        cfg.model.bold(),
        agent.tools().len(),
    );

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        print!("{} ", "you>".cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "" => continue,
            "exit" | "quit" => break,
            "reset" => {
                agent.reset();
                println!("{}", "History cleared.".dimmed());
                continue;
            }
            _ => {}
        }

        match agent.run(input).await {
            Ok(response) => {
                println!("{} {}", "agent>".magenta().bold(), response);
            }
            Err(e) => {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
            }
        }
    }

    println!("{} Session ended.", "<<<".green().bold());
    Ok(())
}

async fn cmd_ask(cfg: &AgentConfig, prompt: &str) -> Result<()> {
    let mut agent = build_agent(cfg)?;
    let response = agent.run(prompt).await?;
    println!("{}", response);
    Ok(())
}

fn cmd_tools() -> Result<()> {
    let registry = ToolRegistry::new(builtin::demo_tools());

    println!("{}", "=== Registered Tools ===".bold());
    for tool in registry.iter() {
        let schema = serde_json::to_string_pretty(&tool.descriptor().to_value())
            .unwrap_or_else(|_| tool.to_string());
        println!("\n{}", tool.name().green().bold());
        println!("{}", schema);
    }
    Ok(())
}
