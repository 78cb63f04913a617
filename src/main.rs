use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use git_release::cli::{run_release_workflow, ReleaseWorkflowArgs, WorkflowOutcome};
use git_release::config;
use git_release::domain::{strip_non_interactive, ReleaseRequest};
use git_release::git::SystemGit;
use git_release::ui::{self, TerminalPrompter};

#[derive(clap::Parser)]
#[command(
    name = "git-release",
    version,
    about = "Bump the package.json version, commit, tag and push a release",
    after_help = "Examples:\n  git-release minor\n  git-release major drop node 14\n  git-release -y fix typo in readme"
)]
struct Args {
    #[arg(
        value_name = "WORDS",
        allow_hyphen_values = true,
        trailing_var_arg = true,
        help = "Bump kind (major, minor or patch; default patch) followed by an optional release note"
    )]
    words: Vec<String>,

    #[arg(
        short = 'y',
        long = "yes",
        visible_alias = "non-interactive",
        help = "Skip confirmation prompts"
    )]
    yes: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(args) {
        Ok(code) => code,
        Err(err) => {
            ui::display_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    let root = std::env::current_dir().context("Cannot determine current directory")?;

    // Once the first word is seen clap stops parsing flags, so `-y` can still
    // appear among the words.
    let (words, yes_among_words) = strip_non_interactive(args.words.as_slice());
    let request = ReleaseRequest::from_words(words.as_slice());
    debug!("release request: {:?}", request);

    let workflow_args = ReleaseWorkflowArgs {
        root: root.clone(),
        request,
        non_interactive: args.yes || yes_among_words,
    };
    let repo = SystemGit::new(&root).with_remote(config.release.remote.clone());

    match run_release_workflow(&workflow_args, &config, &repo, &TerminalPrompter)? {
        WorkflowOutcome::Released(summary) => {
            ui::display_release_complete(&summary.tag, &summary.branch);
        }
        WorkflowOutcome::Cancelled(reason) => {
            debug!("cancelled: {:?}", reason);
            println!("Release cancelled");
        }
    }

    Ok(ExitCode::SUCCESS)
}
