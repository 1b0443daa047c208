//! The a11yinspect command line tool.

use std::io::IsTerminal;
use std::io::stderr;
use std::path::PathBuf;

use a11yinspect::commands;
use a11yinspect::config::Config;
use clap::Parser;
use clap::Subcommand;
use clap_verbosity_flag::Verbosity;
use colored::Colorize;
use git_testament::git_testament;
use git_testament::render_testament;
use tracing_log::AsTrace;

git_testament!(TESTAMENT);

#[derive(Subcommand)]
enum Commands {
    /// Checks serialized markup trees and reports accessibility diagnostics.
    Check(commands::check::CheckArgs),

    /// Explains a rule.
    Explain(commands::explain::Args),

    /// Prints the rule levels of a profile as JSON.
    Profile(commands::profile::Args),

    /// Displays or initializes the configuration file.
    Config(commands::config::Args),
}

#[derive(Parser)]
#[command(author, version = render_testament!(TESTAMENT), propagate_version = true, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// The path to a TOML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity,
}

pub fn inner() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_log::LogTracer::init()?;

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(cli.verbose.log_level_filter().as_trace())
        .with_writer(std::io::stderr)
        .with_ansi(stderr().is_terminal())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Check(args) => commands::check::check(args, config),
        Commands::Explain(args) => commands::explain::explain(args),
        Commands::Profile(args) => commands::profile::profile(args),
        Commands::Config(args) => commands::config::config(args, config),
    }
}

pub fn main() {
    if let Err(e) = inner() {
        eprintln!(
            "{error}: {e:?}",
            error = if std::io::stderr().is_terminal() {
                "error".red().bold()
            } else {
                "error".normal()
            }
        );
        std::process::exit(1);
    }
}
