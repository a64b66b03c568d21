//! `donner` CLI: serve, analyze a saved bulletin, or run a one-shot check.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use donner_analysis::AdvisoryAnalyzer;
use donner_core::tracing::init_tracing;
use donner_core::DonnerConfig;
use donner_server::handlers::status::build_status;
use donner_server::{strip_html, AppState};

/// I-80 Donner Summit road status from Caltrans advisories
#[derive(Debug, Parser)]
#[command(name = "donner", version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP service
    Serve(ServeArgs),
    /// Classify a saved bulletin and print the verdict as JSON
    Analyze(AnalyzeArgs),
    /// Fetch the live page once, classify it, and print the response JSON
    Check,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Listen address, overriding config and DONNER_BIND_ADDR
    #[arg(long)]
    bind: Option<String>,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Bulletin file (plain text, or HTML with --html)
    file: PathBuf,

    /// Strip HTML markup before analysis
    #[arg(long)]
    html: bool,

    /// Include the decision trace in the output
    #[arg(long)]
    trace: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = DonnerConfig::load(cli.config.as_deref())?;
    init_tracing(&config.logging);

    match cli.command {
        Command::Serve(args) => {
            if let Some(bind) = args.bind {
                config.server.bind_addr = Some(bind);
            }
            donner_server::serve(config).await?;
        }
        Command::Analyze(args) => {
            let text = std::fs::read_to_string(&args.file)
                .with_context(|| format!("reading {}", args.file.display()))?;
            let plain = if args.html { strip_html(&text) } else { text };
            let analyzer = AdvisoryAnalyzer::from_config(&config.analysis)?;

            let output = if args.trace {
                let (verdict, trace) = analyzer.analyze_with_trace(&plain);
                serde_json::json!({ "verdict": verdict, "trace": trace })
            } else {
                serde_json::to_value(analyzer.analyze_text(&plain))?
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Check => {
            let state = AppState::from_config(&config)?;
            let response = build_status(&state, false).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
