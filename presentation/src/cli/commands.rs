//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for req-clarifier
#[derive(Parser, Debug)]
#[command(name = "req-clarifier")]
#[command(author, version, about = "Clarify a requirements document with a team of LLM agents")]
#[command(long_about = r#"
req-clarifier turns a raw requirements document into a clarified,
finalized and IEEE 830 structured specification.

The pipeline has four stages:
1. Extract: the Reader agent summarizes high-level requirements
2. Clarify: the Clarifier asks questions, you answer, the Reader updates
3. Finalize: a detailed document is built from the original and your answers
4. Standardize: the result is rewritten into the IEEE 830 outline

Configuration files are loaded from (in priority order):
1. CLARIFIER_* environment variables
2. --config <path>          Explicit config file
3. ./clarifier.toml         Project-level config
4. ~/.config/req-clarifier/config.toml   Global config

Example:
  req-clarifier
  req-clarifier -i docs/requirements.txt -n 3
  req-clarifier --auto -m gpt-4o-mini -o runs/latest
"#)]
pub struct Cli {
    /// Requirements file to clarify (overrides [input].path)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Maximum number of clarification rounds
    #[arg(short = 'n', long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_iterations: Option<u32>,

    /// Directory for the numbered step artifacts (overrides [output].artifacts_dir)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Model for every agent (overrides [models])
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Answer every question with its first option and never stop early
    #[arg(long)]
    pub auto: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
