//! Default command: pick a presentation and run its tool

use std::sync::Once;

use anyhow::Result;
use slidepick::{
    locate_workspace_root, Config, DelegateCommand, Launcher, PickArgs, PickContext,
    PickerResult, ProcessLauncher,
};

use crate::ui::output::Reporter;
use crate::ui::prompt::DialoguerPrompt;
use crate::ui::terminal::detect_capabilities;

/// Returns the exit code slidepick should terminate with.
pub fn cmd_pick(args: Vec<String>) -> Result<i32> {
    let exe = std::env::current_exe()?;
    let presentations_dir = Config::default().with_env_overrides().picker.presentations_dir;
    let workspace_root =
        locate_workspace_root(&exe, &presentations_dir, |key| std::env::var(key).ok())?;

    let (config, warnings) = Config::load_for_workspace(&workspace_root)?;

    let caps = detect_capabilities();
    let reporter = Reporter {
        verbosity: config.output.verbosity,
        color: caps.supports_color,
        unicode: config.output.unicode && caps.supports_unicode,
    };
    reporter.config_warnings(&warnings);

    let prompt = DialoguerPrompt::new(caps, config.output.unicode);
    let ctx = PickContext {
        workspace_root: &workspace_root,
        config: &config,
        prompt: &prompt,
        launcher: &ForegroundLauncher { reporter },
    };

    let outcome = slidepick::run(&ctx, PickArgs::parse(args), |event| reporter.event(event))?;
    Ok(outcome.exit_code())
}

/// Runs the tool in the foreground of the terminal.
///
/// Ctrl+C reaches the child through the terminal's process group; slidepick
/// itself ignores it so it can still report the child's exit status.
struct ForegroundLauncher {
    reporter: Reporter,
}

impl Launcher for ForegroundLauncher {
    fn launch(&self, command: &DelegateCommand) -> PickerResult<i32> {
        static IGNORE_INTERRUPT: Once = Once::new();
        IGNORE_INTERRUPT.call_once(|| {
            if let Err(err) = ctrlc::set_handler(|| {}) {
                self.reporter.warning(interrupt_warning(&err));
            }
        });

        ProcessLauncher.launch(command)
    }
}

fn interrupt_warning(err: &ctrlc::Error) -> String {
    format!("cannot ignore Ctrl+C ({err}); an interrupt will stop slidepick along with the tool")
}
