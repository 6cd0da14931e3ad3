use clap::{Parser, Subcommand};
use git_stager::commands::*;
use git_stager::core::{
    action_sets::BucketAction,
    command_registry::CommandId,
    error::{GitStagerError, Result},
    print_error,
};
use std::env;

#[derive(Parser)]
#[command(name = "git-stager")]
#[command(about = "Stage, unstage, track and discard working-tree changes")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Accept confirmations without asking
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    /// Show one unified list of tracked changes
    #[arg(long, global = true)]
    simple: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show changed files grouped by category with their actions
    Status,
    /// Open a changed file in $VISUAL or $EDITOR
    Open { path: String },
    /// Stage the changes of a file
    Stage { path: String },
    /// Start tracking an untracked file
    Track { path: String },
    /// Unstage the changes of a file
    Unstage { path: String },
    /// Discard the changes of a file
    Discard { path: String },
    /// Diff a file against HEAD
    Diff { path: String },
    /// Stage every unstaged change
    StageAll,
    /// Start tracking every untracked file
    TrackAll,
    /// Unstage every staged change
    UnstageAll,
    /// Discard all changes offered by the current mode
    DiscardAll,
    /// Mark a changed file
    Mark { path: String },
    /// Clear the mark on a changed file
    Unmark { path: String },
    /// Stage every marked file
    StageMarked,
}

async fn run(command: Commands, options: SessionOptions) -> Result<()> {
    match command {
        Commands::Status => execute_status(options),
        Commands::Open { path } => execute_entry_command(options, CommandId::Open, &path).await,
        Commands::Stage { path } => execute_entry_command(options, CommandId::Stage, &path).await,
        Commands::Track { path } => execute_entry_command(options, CommandId::Track, &path).await,
        Commands::Unstage { path } => {
            execute_entry_command(options, CommandId::Unstage, &path).await
        }
        Commands::Discard { path } => {
            execute_entry_command(options, CommandId::Discard, &path).await
        }
        Commands::Diff { path } => execute_diff(options, &path).await,
        Commands::StageAll => execute_bucket_action(options, BucketAction::StageAllUnstaged).await,
        Commands::TrackAll => execute_bucket_action(options, BucketAction::TrackAllUntracked).await,
        Commands::UnstageAll => execute_bucket_action(options, BucketAction::UnstageAll).await,
        Commands::DiscardAll => execute_discard_all(options).await,
        Commands::Mark { path } => execute_mark(options, &path, true),
        Commands::Unmark { path } => execute_mark(options, &path, false),
        Commands::StageMarked => execute_stage_marked(options).await,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let options = SessionOptions {
        assume_yes: cli.yes,
        simple: cli.simple,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    if let Err(e) = runtime.block_on(run(cli.command, options)) {
        if let GitStagerError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
