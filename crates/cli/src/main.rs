mod commands;
mod interactive;
mod logging;

use api_cli_core::{CliConfig, CoreError, HttpMethod, Route};
use clap::{ArgAction, Parser, Subcommand};
use console::style;
use std::path::PathBuf;
use std::process;

use commands::json::SampleSource;
use logging::{init_logging, level_for_verbosity, LoggingConfig};

#[derive(Parser)]
#[command(name = "api-cli")]
#[command(version, about = "CLI to create API endpoint files.")]
struct Cli {
    /// Project root containing the routes directory (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an API endpoint route
    Create {
        /// Route path (e.g. /members/:memberId); prompted for when omitted
        #[arg(long)]
        route: Option<Route>,

        /// HTTP method (get, post, put, delete, patch); prompted for when omitted
        #[arg(long)]
        method: Option<HttpMethod>,

        /// Answer yes to every schema file question
        #[arg(long, conflicts_with = "no")]
        yes: bool,

        /// Answer no to every schema file question
        #[arg(long)]
        no: bool,
    },

    /// Generate a JSON schema from a JSON object
    Json {
        /// JSON sample; single quotes are accepted in place of double quotes
        #[arg(long, conflicts_with = "file")]
        input: Option<String>,

        /// Read the JSON sample from a file ("-" for stdin)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Show the resolved configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        if err.is_interrupted() {
            println!("{}", style("Exiting CLI... See you next time!👋").blue().bright());
            process::exit(0);
        }
        eprintln!("{} {}", style("An unexpected error occurred:").red(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CoreError> {
    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let mut config = CliConfig::load(root)?;
    if cli.verbose > 0 {
        let level = level_for_verbosity(&config.log_level, cli.verbose);
        config = config.with_log_level(level, "--verbose");
    }

    if let Err(err) = init_logging(&LoggingConfig::new(&config.log_level).with_target(cli.verbose > 1)) {
        eprintln!("{} {}", style("Logging disabled:").yellow(), err);
    }

    match cli.command {
        None => commands::banner::run(),
        Some(Commands::Create {
            route,
            method,
            yes,
            no,
        }) => {
            let assume = match (yes, no) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let flag = if yes { "--yes" } else { "--no" };
            let config = config.with_assume(assume, flag);
            commands::create::run(&config, route, method)?;
        }
        Some(Commands::Json { input, file }) => {
            commands::json::run(SampleSource::from_args(input, file))?;
        }
        Some(Commands::Config) => commands::config::run(&config),
    }

    Ok(())
}
