use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use add_ticket_hook::cmd::hook::{self, HookCommandArgs};
use add_ticket_hook::config::HookConfig;
use add_ticket_hook::context::AppContext;
use add_ticket_hook::domain::branch::BranchName;
use add_ticket_hook::error::{AppError, AppResult};
use add_ticket_hook::infra::git::GitCli;
use add_ticket_hook::services::{FixedBranch, VersionControlService};

#[derive(Parser)]
#[command(
    name = "add-ticket-hook",
    author,
    version,
    about = "Add ticket number to your git commit message"
)]
struct Cli {
    /// Commit message file; git passes it first, anything after it is ignored.
    filenames: Vec<PathBuf>,

    /// Possible ticket prefixes. Comma separated list, may be repeated.
    #[arg(short, long)]
    prefixes: Vec<String>,

    /// Fail if no ticket is found in the message or the branch name.
    #[arg(short, long)]
    strict: bool,

    /// Separate the ticket with a newline when the message is git's placeholder template.
    #[arg(long)]
    template_newline: bool,

    /// Use this branch name instead of asking git.
    #[arg(long)]
    branch: Option<String>,

    /// Print the resulting message instead of writing it back.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if error.use_stderr() => {
            let _ = error.print();
            std::process::exit(1);
        }
        Err(error) => error.exit(),
    };

    if let Err(error) = run(cli).await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let message_file = cli
        .filenames
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Configuration("no commit message file given".to_string()))?;
    let config = HookConfig::load(&cli.prefixes, cli.strict, cli.template_newline)?;

    let version_control: Arc<dyn VersionControlService> = match cli.branch {
        Some(name) => Arc::new(FixedBranch(BranchName::from_raw(&name))),
        None => Arc::new(GitCli::new(std::env::current_dir()?)),
    };

    let context = AppContext::new(config, version_control);
    let dry_run = cli.dry_run;

    let outcome = hook::run(
        &context,
        HookCommandArgs {
            message_file,
            dry_run,
        },
    )
    .await?;

    if dry_run {
        println!("{}", outcome.message);
    }

    Ok(())
}
