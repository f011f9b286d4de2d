//! Argument splitting and presentation selection.

use crate::error::PickerResult;
use crate::workspace::Presentation;

/// Flag that picks the first presentation without prompting
pub const NON_INTERACTIVE_FLAG: &str = "-y";

/// Invocation arguments split into the picker directive and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickArgs {
    pub non_interactive: bool,
    /// Arguments for the delegated tool, `-y` removed, order kept
    pub forwarded: Vec<String>,
}

impl PickArgs {
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut non_interactive = false;
        let forwarded = args
            .into_iter()
            .map(Into::into)
            .filter(|arg| {
                let is_flag = arg == NON_INTERACTIVE_FLAG;
                non_interactive |= is_flag;
                !is_flag
            })
            .collect();

        Self {
            non_interactive,
            forwarded,
        }
    }
}

/// Interactive single-select over presentation folders.
pub trait FolderPrompt {
    /// Ask the user to pick one of `presentations`.
    ///
    /// Returns the chosen index, or `None` when the user aborts.
    fn select(&self, message: &str, presentations: &[Presentation]) -> PickerResult<Option<usize>>;
}

/// Resolve which presentation to run.
///
/// `presentations` must be sorted and non-empty. In non-interactive mode the
/// first entry is chosen and `prompt` is never consulted.
pub fn resolve_selection(
    presentations: &[Presentation],
    non_interactive: bool,
    message: &str,
    prompt: &dyn FolderPrompt,
) -> PickerResult<Option<Presentation>> {
    if non_interactive {
        return Ok(presentations.first().cloned());
    }

    let choice = prompt.select(message, presentations)?;
    Ok(choice.and_then(|i| presentations.get(i).cloned()))
}
