use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use blogmark::Config;
use blogmark::exit_codes::exit;

mod commands;

#[derive(Parser)]
#[command(author, version, about = "Markdown/HTML/plain-text conversions for blog posts", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Show detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render Markdown to HTML
    Render {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Wrap the result in a self-contained HTML page
        #[arg(long)]
        full_page: bool,
    },

    /// Convert HTML back to Markdown (lossy)
    Revert {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a plain-text preview of a Markdown post
    Preview {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Preview length in words (overrides config)
        #[arg(long)]
        words: Option<usize>,
    },

    /// Word count and estimated reading time
    Stats {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Machine-readable output
        #[arg(long)]
        json: bool,
    },

    /// Export a post as .md, .txt and .html files named after its title
    Export {
        /// Input file, or `-` for stdin
        file: PathBuf,

        /// Override the title derived from the content
        #[arg(long)]
        title: Option<String>,

        /// Directory to write into (overrides config)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Print version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    match run(cli) {
        Ok(()) => exit::success(),
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            exit::tool_error();
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = Config::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::Render { file, output, full_page } => {
            commands::render::handle_render(&file, output.as_deref(), full_page)
        }
        Commands::Revert { file, output } => commands::revert::handle_revert(&file, output.as_deref()),
        Commands::Preview { file, words } => commands::preview::handle_preview(&file, words, &config),
        Commands::Stats { file, json } => commands::stats::handle_stats(&file, json),
        Commands::Export { file, title, out_dir } => {
            commands::export::handle_export(&file, title.as_deref(), out_dir.as_deref(), &config)
        }
        Commands::Version => {
            commands::version::handle_version();
            Ok(())
        }
    }
}
