//! Terminal wizard for the Kolb learning-style inventory.
//!
//! Collects a respondent profile and the inventory answers over stdin,
//! runs the analysis through the classifier gateway, and renders the
//! result. Without a `GEMINI_API_KEY` in the environment the session
//! still completes, answering with the demonstration result.

mod render;
mod wizard;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use learnstyle_core::QuestionBank;
use learnstyle_runtime::{
    ClassificationConfig, ClassifierGateway, ClassifierProvider, GeminiProvider, NullProvider,
};

#[derive(Parser, Debug)]
#[command(
    name = "learnstyle",
    version,
    about = "Discover your Kolb learning style from a short binary-choice inventory"
)]
struct Cli {
    /// Load a custom question inventory from a YAML file
    #[arg(long, value_name = "FILE")]
    inventory: Option<PathBuf>,

    /// Classifier model to request
    #[arg(long, default_value = "gemini-2.5-flash")]
    model: String,

    /// Run offline: skip the classifier and show the demonstration result
    #[arg(long)]
    demo: bool,

    /// Print the final analysis as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let bank = match &cli.inventory {
        Some(path) => QuestionBank::from_yaml_file(path)
            .with_context(|| format!("Failed to load inventory from {}", path.display()))?,
        None => QuestionBank::builtin(),
    };

    let provider: Arc<dyn ClassifierProvider> = if cli.demo {
        Arc::new(NullProvider)
    } else {
        Arc::new(GeminiProvider::from_env())
    };

    let config = ClassificationConfig {
        model: cli.model.clone(),
        ..ClassificationConfig::default()
    };
    let gateway = ClassifierGateway::with_config(provider, config);

    wizard::run(&bank, &gateway, cli.json).await
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
