//! Reflexion CLI — the main entry point.
//!
//! Commands:
//! - `init`     — Write the default config file
//! - `status`   — Show the effective configuration
//! - `reflect`  — Critique a failed attempt and print the next-attempt text
//! - `show`     — Print a stored reflection window
//! - `clear`    — Reset a stored reflection window

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::reflect::{ReflectArgs, TraceVariant};

#[derive(Parser)]
#[command(
    name = "reflexion",
    about = "Reflexion — self-reflection memory for retrying LLM agents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Status,

    /// Critique a failed attempt and print the text for the next attempt
    Reflect {
        /// Trace style of the failed attempt
        #[arg(long, value_enum, default_value_t = TraceVariant::React)]
        variant: TraceVariant,

        /// last_attempt, reflexion, or last_attempt_and_reflexion
        /// (defaults to reflection.default_strategy)
        #[arg(short, long)]
        strategy: Option<String>,

        /// The task prompt of the failed attempt
        #[arg(short, long)]
        question: String,

        /// File holding the failed attempt's scratchpad
        #[arg(long)]
        scratchpad_file: PathBuf,

        /// File holding few-shot reflection examples (built-in exemplars otherwise)
        #[arg(long)]
        examples_file: Option<PathBuf>,

        /// File holding supplementary context (CoT only)
        #[arg(long)]
        context_file: Option<PathBuf>,

        /// JSON file the window is loaded from and saved back to
        #[arg(short, long)]
        window_file: Option<PathBuf>,

        /// Override the configured model
        #[arg(short, long)]
        model: Option<String>,

        /// Override reflection.max_reflections (at least 1)
        #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        max_reflections: Option<usize>,
    },

    /// Print a stored reflection window
    Show {
        /// JSON window file
        #[arg(short, long)]
        window_file: PathBuf,
    },

    /// Reset a stored reflection window
    Clear {
        /// JSON window file
        #[arg(short, long)]
        window_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { force } => commands::init::run(force).await?,
        Commands::Status => commands::status::run().await?,
        Commands::Reflect {
            variant,
            strategy,
            question,
            scratchpad_file,
            examples_file,
            context_file,
            window_file,
            model,
            max_reflections,
        } => {
            commands::reflect::run(ReflectArgs {
                variant,
                strategy,
                question,
                scratchpad_file,
                examples_file,
                context_file,
                window_file,
                model,
                max_reflections,
            })
            .await?
        }
        Commands::Show { window_file } => commands::window::show(&window_file).await?,
        Commands::Clear { window_file } => commands::window::clear(&window_file).await?,
    }

    Ok(())
}
