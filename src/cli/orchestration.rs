//! Main release workflow orchestration logic
//!
//! Sequences the precondition checks, the two confirmation gates and the
//! side-effecting steps of a release. Nothing is written before the final
//! confirmation; after it, each step runs once and a failure stops the run
//! without undoing earlier steps.

use std::path::PathBuf;

use log::info;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{BranchContext, ReleaseRequest, Version};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use crate::manifest::{Manifest, MANIFEST_FILE};
use crate::ui::{self, Prompter};

/// Version-control marker that must exist in the invocation directory
pub const GIT_DIR: &str = ".git";

/// Arguments for the release workflow
///
/// Decoupled from the CLI parser so the workflow can be driven
/// programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Directory holding the repository and the manifest
    pub root: PathBuf,

    /// Bump kind and optional custom message
    pub request: ReleaseRequest,

    /// Skip confirmation prompts, answering yes
    pub non_interactive: bool,
}

/// What a completed release produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseSummary {
    pub previous_version: Version,
    pub version: Version,
    pub tag: String,
    pub message: String,
    pub branch: String,
}

/// Why the user stopped a release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// Declined to continue from a non-release branch
    NonReleaseBranch,
    /// Declined the final confirmation
    Declined,
}

/// Result of a workflow run that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowOutcome {
    Released(ReleaseSummary),
    Cancelled(CancelReason),
}

/// Main release workflow
///
/// 1. Check the repository marker and the manifest exist
/// 2. Refuse to run with uncommitted changes
/// 3. Warn (and ask) when not on a release branch
/// 4. Compute the next version from the manifest
/// 5. Preview and confirm
/// 6. Rewrite the manifest, commit, tag, push branch, push tags
///
/// # Returns
///
/// * `Ok(WorkflowOutcome::Released)` - Everything was pushed
/// * `Ok(WorkflowOutcome::Cancelled)` - The user declined a prompt; nothing was changed
/// * `Err` - A precondition or an external operation failed
pub fn run_release_workflow<R, P>(
    args: &ReleaseWorkflowArgs,
    config: &Config,
    repo: &R,
    prompter: &P,
) -> Result<WorkflowOutcome>
where
    R: Repository,
    P: Prompter,
{
    let git_marker = args.root.join(GIT_DIR);
    if !git_marker.exists() {
        return Err(ReleaseError::NotARepository(args.root.clone()));
    }

    let manifest_path = args.root.join(MANIFEST_FILE);
    if !manifest_path.is_file() {
        return Err(ReleaseError::ManifestNotFound(manifest_path));
    }

    info!("checking working tree status");
    if !repo.status_porcelain()?.is_empty() {
        let listing = repo.status_short()?;
        ui::display_dirty_tree(&listing);
        return Err(ReleaseError::DirtyWorkingTree);
    }

    let branch = BranchContext::new(repo.current_branch()?, &config.release.branches);
    info!("releasing from branch '{}'", branch.name);
    if !branch.is_release_branch() {
        let warning = BoundaryWarning::NonReleaseBranch {
            branch: branch.name.clone(),
            release_branches: config.release.branches.clone(),
        };
        ui::display_boundary_warning(&warning);

        if !args.non_interactive && !prompter.confirm("Continue anyway?")? {
            return Ok(WorkflowOutcome::Cancelled(CancelReason::NonReleaseBranch));
        }
    }

    let mut manifest = Manifest::load(&manifest_path)?;
    let previous_version = manifest.version()?;
    let version = previous_version.bump(args.request.bump)?;
    let message = args.request.release_message(&version);
    let tag = config.tag_pattern()?.format(&version);
    info!(
        "bumping {} from {} to {}",
        args.request.bump, previous_version, version
    );

    ui::display_release_preview(args.request.bump, &previous_version, &version, &tag, &message);

    if !args.non_interactive && !prompter.confirm("Proceed with the release?")? {
        return Ok(WorkflowOutcome::Cancelled(CancelReason::Declined));
    }

    manifest.set_version(&version);
    manifest.save()?;
    ui::display_success(&format!("Updated {} to {}", MANIFEST_FILE, version));

    repo.stage(MANIFEST_FILE)?;
    repo.commit(&message)?;
    ui::display_success(&format!("Committed: {}", message));

    repo.create_annotated_tag(&tag, &message)?;
    ui::display_success(&format!("Created tag: {}", tag));

    ui::display_status("Pushing to remote...");
    repo.push_branch()?;
    repo.push_tags()?;
    ui::display_success(&format!("Pushed branch {} and tags", branch.name));

    Ok(WorkflowOutcome::Released(ReleaseSummary {
        previous_version,
        version,
        tag,
        message,
        branch: branch.name,
    }))
}
