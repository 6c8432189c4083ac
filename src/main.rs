use clap::{Parser, Subcommand};
use git_panes::commands::*;
use git_panes::core::{
    config::Config,
    dirs::get_config_directory,
    error::{GitPanesError, Result},
    git::GitCli,
    print_error,
};
use std::fs::File;
use std::path::PathBuf;

const LOG_FILE: &str = "git-panes.log";

#[derive(Parser)]
#[command(name = "git-panes")]
#[command(about = "A keyboard-driven terminal front end for git")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Repository to open (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    repo: Option<PathBuf>,

    /// Ignore the config file and use defaults
    #[arg(long, global = true)]
    no_config: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive navigator (default)
    Ui {
        /// Start with the log filtered to this branch
        #[arg(long)]
        branch: Option<String>,
    },
    /// Print the commit graph
    Log {
        /// Branch to show instead of HEAD
        #[arg(long)]
        branch: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print staged, unstaged and untracked paths
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Print local and remote branches
    Branches {
        #[arg(long)]
        json: bool,
    },
    /// Print the stat and diff of a commit
    Show {
        hash: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the diff of one path
    Diff {
        path: String,
        /// Rename source of the path
        #[arg(long)]
        previous: Option<String>,
        /// Diff the index instead of the work tree
        #[arg(long)]
        staged: bool,
        #[arg(long)]
        json: bool,
    },
}

/// Logs go to stderr, except in the interactive UI where they would corrupt
/// the screen and go to a file in the config directory instead.
fn init_logging(debug: bool, interactive: bool) {
    let level = if debug { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));

    if interactive {
        let file = get_config_directory().and_then(|dir| {
            std::fs::create_dir_all(&dir)?;
            Ok(File::create(dir.join(LOG_FILE))?)
        });
        match file {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            // without a log file, stay quiet rather than draw over the UI
            Err(_) => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }
    builder.init();
}

fn run(cli: Cli) -> Result<()> {
    let path = match cli.repo {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let repo = GitCli::open(&path)?;

    let config = if cli.no_config {
        Config::default()
    } else {
        Config::load_or_create()?
    };

    match cli.command.unwrap_or(Commands::Ui { branch: None }) {
        Commands::Ui { branch } => execute_ui(repo, config, branch),
        Commands::Log { branch, json } => execute_log(&repo, &config, branch.as_deref(), json),
        Commands::Status { json } => execute_status(&repo, json),
        Commands::Branches { json } => execute_branches(&repo, json),
        Commands::Show { hash, json } => execute_show(&repo, &hash, json),
        Commands::Diff {
            path,
            previous,
            staged,
            json,
        } => execute_diff(&repo, &path, previous.as_deref(), staged, json),
    }
}

fn main() {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, None | Some(Commands::Ui { .. }));
    init_logging(cli.debug, interactive);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        if let GitPanesError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}
