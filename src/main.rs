//! slidepick CLI - pick a presentation and run its build tool
//!
//! Usage: slidepick [-y] [ARGS...]
//!
//! Lists the folders under `presentations/`, asks which one to use (or takes
//! the first with `-y`), then runs `pnpm run ARGS...` inside it.

mod cli;
mod commands;
mod ui;

use cli::Cli;

fn main() {
    let cli = Cli::from_env();

    match commands::pick::cmd_pick(cli.args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            ui::error::print_error(&err);
            std::process::exit(1);
        }
    }
}
