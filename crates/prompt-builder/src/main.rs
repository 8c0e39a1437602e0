use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use line_diff::DEFAULT_CONTEXT_LINES;
use log::info;
use prompt_builder::{
    build_prompt, unified_diff, BuildOptions, DiffInput, ReviewObjectives, DEFAULT_REPOSITORY,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Build a code review prompt from the diff of two files", long_about = None)]
struct Cli {
    /// Original version of the file
    before: PathBuf,

    /// Edited version of the file
    after: PathBuf,

    /// Language named in the prompt ("Auto" detects it from the file extensions)
    #[arg(short, long, env = "PROMPT_BUILDER_LANGUAGE", default_value = "Auto")]
    language: String,

    /// Repository or module the change belongs to
    #[arg(short, long, env = "PROMPT_BUILDER_REPO", default_value = DEFAULT_REPOSITORY)]
    repo: String,

    /// Unchanged lines shown around each change
    #[arg(
        short = 'U',
        long = "context",
        env = "PROMPT_BUILDER_CONTEXT",
        default_value_t = DEFAULT_CONTEXT_LINES as i64,
        allow_negative_numbers = true
    )]
    context: i64,

    /// Do not ask to prefer readability
    #[arg(long)]
    no_readability: bool,

    /// Do not ask for performance hints
    #[arg(long)]
    no_perf_hints: bool,

    /// Do not ask for style consolidation
    #[arg(long)]
    no_style: bool,

    /// Print only the unified diff
    #[arg(long)]
    diff_only: bool,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let before = DiffInput::load(&cli.before)
        .with_context(|| format!("Failed to load original file {:?}", cli.before))?;
    let after = DiffInput::load(&cli.after)
        .with_context(|| format!("Failed to load edited file {:?}", cli.after))?;

    let options = BuildOptions {
        language: Some(cli.language),
        repository: cli.repo,
        objectives: ReviewObjectives {
            readability_first: !cli.no_readability,
            performance_hints: !cli.no_perf_hints,
            style_consolidation: !cli.no_style,
        },
        context_lines: cli.context,
    };

    let result = if cli.diff_only {
        unified_diff(&options, &before, &after)?
    } else {
        build_prompt(&options, &before, &after)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, &result)
                .with_context(|| format!("Failed to write {:?}", path))?;
            info!("Wrote {} bytes to {:?}", result.len(), path);
        }
        None => print!("{}", result),
    }

    Ok(())
}
