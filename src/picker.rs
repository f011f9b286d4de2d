//! The pick-and-delegate flow.
//!
//! `Start -> EnumerateFolders -> {FatalEmpty | ResolveSelection}
//!  -> {Delegate | NoOpExit}`

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::delegate::{DelegateCommand, Launcher};
use crate::error::PickerResult;
use crate::selection::{resolve_selection, FolderPrompt, PickArgs};
use crate::workspace::{list_presentations, Presentation};

/// How a pick run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The prompt was aborted; nothing was launched
    Cancelled,
    /// The tool ran and exited with `exit_code`
    Delegated {
        presentation: String,
        exit_code: i32,
    },
}

impl PickOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            PickOutcome::Cancelled => 0,
            PickOutcome::Delegated { exit_code, .. } => *exit_code,
        }
    }
}

/// Progress notifications for the caller's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickEvent {
    Listed {
        root: PathBuf,
        names: Vec<String>,
    },
    Selected {
        presentation: Presentation,
        slides: PathBuf,
    },
    Launching(DelegateCommand),
}

/// Collaborators for a pick run.
pub struct PickContext<'a> {
    pub workspace_root: &'a Path,
    pub config: &'a Config,
    pub prompt: &'a dyn FolderPrompt,
    pub launcher: &'a dyn Launcher,
}

/// Enumerate, select, and delegate.
///
/// An empty presentations root fails with `NoPresentations` before any
/// prompt or launch happens.
pub fn run(
    ctx: &PickContext<'_>,
    args: PickArgs,
    mut on_event: impl FnMut(&PickEvent),
) -> PickerResult<PickOutcome> {
    let root = ctx.config.presentations_root(ctx.workspace_root);
    let presentations = list_presentations(&root)?;
    on_event(&PickEvent::Listed {
        root,
        names: presentations.iter().map(|p| p.name.clone()).collect(),
    });

    let selected = resolve_selection(
        &presentations,
        args.non_interactive,
        &ctx.config.picker.prompt,
        ctx.prompt,
    )?;
    let Some(presentation) = selected else {
        return Ok(PickOutcome::Cancelled);
    };

    on_event(&PickEvent::Selected {
        slides: presentation.slides_path(&ctx.config.picker.slides_file),
        presentation: presentation.clone(),
    });

    let command = DelegateCommand::new(
        &ctx.config.tool.program,
        &ctx.config.tool.args,
        &args.forwarded,
        presentation.dir.clone(),
    );
    on_event(&PickEvent::Launching(command.clone()));

    let exit_code = ctx.launcher.launch(&command)?;
    Ok(PickOutcome::Delegated {
        presentation: presentation.name,
        exit_code,
    })
}
