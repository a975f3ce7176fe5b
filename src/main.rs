//! ptc binary entry point.

mod commands;

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

/// Version string with git hash and build date (dev builds).
fn version() -> &'static str {
    let base = env!("CARGO_PKG_VERSION");
    let date = env!("PTC_BUILD_DATE");
    let s = match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => format!("{} ({} {})", base, sha, date),
        _ => format!("{} ({})", base, date),
    };
    Box::leak(s.into_boxed_str())
}

#[derive(Parser)]
#[command(
    name = "ptc",
    version = version(),
    about = "Turn a markdown paper summary into a size-bounded social media thread"
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a document's thread boundaries for review
    Preview {
        /// Markdown document to compose
        #[arg(short, long)]
        input: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Emit the composed thread as JSON
        #[arg(long)]
        json: bool,
        /// Author handle to credit (repeatable); TAG_USERS lines win
        #[arg(long = "mention", value_name = "HANDLE")]
        mentions: Vec<String>,
    },
    /// Post a document as a thread via the configured backend
    Publish {
        /// Markdown document to compose
        #[arg(short, long)]
        input: PathBuf,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Do not quote the first post from the final post
        #[arg(long)]
        no_quote_first: bool,
        /// Author handle to credit (repeatable); TAG_USERS lines win
        #[arg(long = "mention", value_name = "HANDLE")]
        mentions: Vec<String>,
    },
    /// Write a starter document for a paper (title, abstract, closing).
    /// The output already carries a closing; edit it and run `preview`
    Skeleton {
        /// Abstract-page URL (e.g. https://arxiv.org/abs/2003.03033)
        url: String,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a paper's authors and best-guess platform handles
    Authors {
        /// Abstract-page URL
        url: String,
    },
    /// Clean up markdown converted from clipboard HTML
    Clean {
        /// Markdown document to clean
        #[arg(short, long)]
        input: PathBuf,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect or edit the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Open the config file in $EDITOR
    Edit,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "ptc=debug" } else { "ptc=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Preview {
            input,
            output,
            json,
            mentions,
        } => commands::preview::handle(&input, output.as_deref(), json, &mentions),
        Commands::Publish {
            input,
            yes,
            no_quote_first,
            mentions,
        } => commands::publish::handle(&input, yes, no_quote_first, &mentions),
        Commands::Skeleton { url, output } => commands::skeleton::handle(&url, output.as_deref()),
        Commands::Authors { url } => commands::authors::handle(&url),
        Commands::Clean { input, output } => commands::clean::handle(&input, output.as_deref()),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Path => commands::config::handle_path(),
            ConfigAction::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "ptc", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(error) = run(cli) {
        eprintln!("Error: {:#}", error);
        std::process::exit(1);
    }
}
