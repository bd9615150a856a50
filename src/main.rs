use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod core;
mod error;
mod models;

use commands::{check_entries_file, init_config, list_projects, log_day, print_check_result, LogOptions};
use models::ConfigOverrides;

/// LazyClock - turn a description of your day into Clockify time entries
#[derive(Parser)]
#[command(name = "lazyclock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./lazyclock.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: OverrideArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Settings that win over the config file
#[derive(Args)]
struct OverrideArgs {
    /// Gemini API key
    #[arg(long, env = "LAZYCLOCK_GEMINI_API_KEY", global = true, hide_env_values = true)]
    gemini_api_key: Option<String>,

    /// Gemini model
    #[arg(long, env = "LAZYCLOCK_MODEL", global = true)]
    model: Option<String>,

    /// Clockify API key
    #[arg(long, env = "LAZYCLOCK_CLOCKIFY_API_KEY", global = true, hide_env_values = true)]
    clockify_api_key: Option<String>,

    /// Clockify workspace id
    #[arg(long, env = "LAZYCLOCK_WORKSPACE_ID", global = true)]
    workspace_id: Option<String>,

    /// Clockify user id
    #[arg(long, env = "LAZYCLOCK_USER_ID", global = true)]
    user_id: Option<String>,

    /// Only list projects of this Clockify client
    #[arg(long, env = "LAZYCLOCK_CLIENT_ID", global = true)]
    client_id: Option<String>,

    /// Local offset from UTC in minutes (UTC-3 is -180)
    #[arg(long, env = "LAZYCLOCK_UTC_OFFSET_MINUTES", global = true, allow_negative_numbers = true)]
    utc_offset_minutes: Option<i32>,
}

impl From<OverrideArgs> for ConfigOverrides {
    fn from(args: OverrideArgs) -> Self {
        Self {
            gemini_api_key: args.gemini_api_key,
            model: args.model,
            clockify_api_key: args.clockify_api_key,
            workspace_id: args.workspace_id,
            user_id: args.user_id,
            client_id: args.client_id,
            utc_offset_minutes: args.utc_offset_minutes,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Describe your day, review the generated entries and send them (default)
    Log {
        /// Day description (prompted for when omitted)
        #[arg(short, long)]
        text: Option<String>,

        /// Day the entries belong to, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Print the requests instead of sending them
        #[arg(long)]
        dry_run: bool,
    },

    /// List available Clockify projects
    Projects,

    /// Validate a JSON file of entries and preview their UTC times
    Check {
        /// JSON array of {start, end, description, projectId}
        file: PathBuf,

        /// Day the entries belong to, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Write a lazyclock.toml template into the current directory
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("LAZYCLOCK_LOG").unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let project_root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot determine current directory: {}", e);
            std::process::exit(1);
        }
    };
    let config_path = cli.config.as_deref();
    let overrides = ConfigOverrides::from(cli.overrides);

    let command = cli.command.unwrap_or(Commands::Log {
        text: None,
        date: None,
        dry_run: false,
    });

    let result = match command {
        Commands::Log { text, date, dry_run } => {
            let options = LogOptions { text, date, dry_run };
            log_day(&project_root, config_path, overrides, options).await
        }

        Commands::Projects => list_projects(&project_root, config_path, overrides).await,

        Commands::Check { file, date } => {
            match check_entries_file(&project_root, config_path, overrides, &file, date) {
                Ok(result) => {
                    print_check_result(&result);
                    if result.valid {
                        Ok(())
                    } else {
                        std::process::exit(1);
                    }
                }
                Err(e) => Err(e),
            }
        }

        Commands::Init { force } => init_config(&project_root, force).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
