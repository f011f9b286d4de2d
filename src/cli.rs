use std::ffi::OsString;

/// slidepick - pick a presentation and run its build tool
///
/// Every argument except `-y` is forwarded to the tool untouched, so
/// slidepick defines no options of its own. `--`, `--help` and `--version`
/// all go to the tool.
#[derive(Debug)]
pub struct Cli {
    pub args: Vec<String>,
}

impl Cli {
    pub fn from_env() -> Self {
        Self::from_args_os(std::env::args_os().skip(1))
    }

    /// Arguments that are not valid Unicode are converted lossily.
    pub fn from_args_os<I>(args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        Self {
            args: args
                .into_iter()
                .map(|arg| arg.into().to_string_lossy().into_owned())
                .collect(),
        }
    }
}
