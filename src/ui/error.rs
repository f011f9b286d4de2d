use crossterm::style::Stylize;
use slidepick::PickerError;

use super::theme::{colors, icons, icons_ascii};

pub fn format_picker_error(err: &PickerError, color: bool, unicode: bool) -> String {
    match err {
        // Plain one-line diagnostic for the misconfigured-workspace case
        PickerError::NoPresentations { .. } => format!("{}\n", err),
        PickerError::NotInteractive => {
            let arrow = if unicode { icons::ARROW } else { icons_ascii::ARROW };
            format!(
                "{}\n  {} run `slidepick -y ...` in scripts and CI\n",
                headline(&err.to_string(), color, unicode),
                arrow
            )
        }
        other => format!("{}\n", headline(&other.to_string(), color, unicode)),
    }
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    if let Some(picker) = err.downcast_ref::<PickerError>() {
        return format_picker_error(picker, color, unicode);
    }

    format!("{}\n", headline(&format!("{:#}", err), color, unicode))
}

pub fn print_error(err: &anyhow::Error) {
    let caps = super::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

fn headline(message: &str, color: bool, unicode: bool) -> String {
    let icon = if unicode { icons::ERROR } else { icons_ascii::ERROR };
    if color {
        format!("{} {}", icon.with(colors::ERROR), message)
    } else {
        format!("{} {}", icon, message)
    }
}
